//! Scanners for spans with their own termination rule.

use super::{CommentSyntax, Step};
use crate::lexemes;
use crate::stream::LineCursor;
use crate::Style;

/// One character of a block comment, or its closing delimiter.
pub(super) fn block_comment(cursor: &mut LineCursor<'_>, syntax: CommentSyntax) -> Step {
    if cursor.eat_regex(syntax.close()).is_some() {
        return Step::finish(Some(Style::Comment));
    }
    cursor.next_char();
    Step::emit(Style::Comment)
}

/// One character of a string literal, or its closing quote.
///
/// Backslashes have no special meaning.
pub(super) fn string_literal(cursor: &mut LineCursor<'_>, quote: char) -> Step {
    if cursor.peek() == Some(quote) {
        cursor.next_char();
        return Step::finish(Some(Style::String));
    }
    cursor.next_char();
    Step::emit(Style::String)
}

/// One lexeme of a URI reference.
///
/// Anything that is not part of a URI ends the span without being consumed.
/// The end of a line does not; the span carries on into the next one.
pub(super) fn uri_span(cursor: &mut LineCursor<'_>) -> Step {
    let style = if cursor.eat_regex(lexemes::operator()).is_some() {
        Style::Operator
    } else if cursor.eat_regex(lexemes::mmt_separators()).is_some() {
        Style::Meta
    } else if cursor.eat_regex(lexemes::uri_word()).is_some() {
        Style::Variable2
    } else {
        return Step::finish(None);
    };
    Step::emit(style)
}
