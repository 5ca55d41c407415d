//! The dispatcher: picks the rules of the current mode and classifies one token.

use super::{CommentSyntax, Mode, Scanner, State, Step};
use crate::lexemes::{self, CommandKind};
use crate::stream::LineCursor;
use crate::Style;

/// Classify the token at the cursor.
pub(super) fn token(cursor: &mut LineCursor<'_>, state: &mut State) -> Step {
    cursor.eat_space();
    if cursor.eol() {
        return Step::unstyled();
    }
    cursor.start_token();

    let matched = match state.mode() {
        Mode::TopLevel => shell(cursor, state),
        Mode::Grammar => grammar(cursor, state),
        Mode::Logic => logic(cursor, state),
        Mode::Module => module(cursor, state),
    };
    if let Some(step) = matched {
        return step;
    }

    if cursor.eat_regex(lexemes::number()).is_some() {
        return Step::emit(Style::Number);
    }
    if cursor.eat_regex(lexemes::operator()).is_some() {
        return Step::emit(Style::Operator);
    }

    match cursor.next_char() {
        Some(quote @ ('"' | '\'')) => state.enter(Scanner::StringLiteral { quote }, cursor),
        _ => Step::unstyled(),
    }
}

/// Command shell rules. A sublanguage definer latches the document for good.
fn shell(cursor: &mut LineCursor<'_>, state: &mut State) -> Option<Step> {
    let definers = [
        (lexemes::gf_definers(), Mode::Grammar),
        (lexemes::elpi_definers(), Mode::Logic),
        (lexemes::mmt_definers(), Mode::Module),
    ];
    for (definer, mode) in definers {
        if cursor.eat_regex(definer).is_some() {
            state.latch(mode);
            return Some(Step::emit(Style::Keyword));
        }
    }

    if let Some(word) = cursor.eat_regex(lexemes::identifier()) {
        let style = match lexemes::command_kind(word) {
            Some(CommandKind::Kernel) => Some(Style::Keyword),
            Some(CommandKind::GrammarTool) => Some(Style::Tag),
            None if state.follows_style(Style::Variable2)
                || state.follows_word(&["export", "import"]) =>
            {
                Some(Style::Def)
            }
            None => None,
        };
        return Some(Step { style, pop: false });
    }

    if cursor.eat_regex(lexemes::command_option()).is_some()
        || cursor.eat_regex(lexemes::command_flag()).is_some()
    {
        return Some(Step::emit(Style::Variable2));
    }
    None
}

fn grammar(cursor: &mut LineCursor<'_>, state: &mut State) -> Option<Step> {
    if cursor.eat_regex(lexemes::gf_builtins()).is_some() {
        return Some(Step::emit(Style::Builtin));
    }
    if cursor.eat_regex(lexemes::gf_keywords()).is_some()
        || cursor.eat_regex(lexemes::gf_definers()).is_some()
    {
        return Some(Step::emit(Style::Keyword));
    }
    if cursor.eat_regex(lexemes::gf_comment_open()).is_some() {
        return Some(state.enter(Scanner::BlockComment(CommentSyntax::Grammar), cursor));
    }
    if cursor.eat_regex(lexemes::gf_line_comment()).is_some() {
        cursor.skip_to_end();
        return Some(Step::emit(Style::Comment));
    }
    if cursor.eat_regex(lexemes::identifier()).is_some() {
        let style = if state.follows_word(lexemes::GF_DEFINERS) {
            Style::Def
        } else if state.follows_word(&["of"]) {
            Style::Meta
        } else {
            Style::Variable
        };
        return Some(Step::emit(style));
    }
    if cursor.eat_regex(lexemes::gf_separators()).is_some() {
        return Some(Step::emit(Style::Meta));
    }
    None
}

fn logic(cursor: &mut LineCursor<'_>, state: &mut State) -> Option<Step> {
    if cursor.eat_regex(lexemes::elpi_operators()).is_some() {
        return Some(Step::emit(Style::Operator));
    }
    if cursor.eat_regex(lexemes::elpi_builtins()).is_some() {
        return Some(Step::emit(Style::Builtin));
    }
    if cursor.eat_regex(lexemes::elpi_keywords()).is_some()
        || cursor.eat_regex(lexemes::elpi_definers()).is_some()
    {
        return Some(Step::emit(Style::Keyword));
    }
    if cursor.eat_regex(lexemes::elpi_comment_open()).is_some() {
        return Some(state.enter(Scanner::BlockComment(CommentSyntax::Logic), cursor));
    }
    if cursor.eat_regex(lexemes::elpi_line_comment()).is_some() {
        cursor.skip_to_end();
        return Some(Step::emit(Style::Comment));
    }
    if let Some(word) = cursor.eat_regex(lexemes::identifier()) {
        let style = if state.follows_word(lexemes::ELPI_DEFINERS) {
            Style::Def
        } else if state.follows_word(&["of"]) {
            Style::Meta
        } else if word != word.to_lowercase() {
            // Capitalized names are logic variables.
            Style::Variable2
        } else {
            Style::Variable
        };
        return Some(Step::emit(style));
    }
    None
}

fn module(cursor: &mut LineCursor<'_>, state: &mut State) -> Option<Step> {
    if cursor.eat_regex(lexemes::mmt_object_delimiter()).is_some() {
        return Some(Step::emit(Style::Variable3));
    }
    if cursor.eat_regex(lexemes::mmt_declaration_delimiter()).is_some() {
        return Some(Step::emit(Style::Meta));
    }
    if cursor.eat_regex(lexemes::mmt_module_delimiter()).is_some() {
        return Some(Step::emit(Style::Atom));
    }
    if cursor.eat_regex(lexemes::mmt_builtins()).is_some() {
        return Some(Step::emit(Style::Builtin));
    }
    if cursor.eat_regex(lexemes::mmt_keywords()).is_some()
        || cursor.eat_regex(lexemes::mmt_definers()).is_some()
    {
        return Some(Step::emit(Style::Keyword));
    }
    if cursor.eat_regex(lexemes::uri_scheme()).is_some() {
        state.push(Scanner::UriSpan);
        return Some(Step::emit(Style::Variable2));
    }
    if cursor.eat_regex(lexemes::mmt_line_comment()).is_some() {
        cursor.skip_to_end();
        return Some(Step::emit(Style::Comment));
    }
    if cursor.eat_regex(lexemes::identifier()).is_some() {
        let style = if state.follows_word(lexemes::MMT_DEFINERS) {
            Style::Def
        } else {
            Style::Variable
        };
        return Some(Step::emit(style));
    }
    if cursor.eat_regex(lexemes::mmt_separators()).is_some() {
        return Some(Step::emit(Style::Meta));
    }
    None
}
