//! The multi-language tokenizer.
//!
//! A document starts in the command shell. The first sublanguage definer seen
//! there (`concrete`, `elpi`, `theory`, ...) latches the whole document into
//! that sublanguage; there is no way back.
//!
//! Spans that outlive a line (block comments, string literals, URIs) are
//! handled with an explicit stack of scanners. The bottom of the stack is
//! always the dispatcher; anything above it is resumed on the next call, whichever line
//! that call is on.

use crate::lexemes;
use crate::stream::LineCursor;
use crate::Style;
use regex::Regex;

mod dispatch;
mod scanners;


/// Which rules the dispatcher applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// The command shell; no sublanguage has been seen yet.
    #[default]
    TopLevel,
    Grammar,
    Logic,
    Module,
}

/// A resumable scanner, as stored on the scanner stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scanner {
    Dispatch,
    BlockComment(CommentSyntax),
    StringLiteral { quote: char },
    UriSpan,
}

/// The two block comment syntaxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentSyntax {
    /// `{- ... -}`
    Grammar,
    /// `/* ... */`
    Logic,
}

impl CommentSyntax {
    fn close(self) -> &'static Regex {
        match self {
            CommentSyntax::Grammar => lexemes::gf_comment_close(),
            CommentSyntax::Logic => lexemes::elpi_comment_close(),
        }
    }
}

/// What the previous styled token was.
///
/// Keyword-like tokens are remembered by their text, everything else by style.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LastToken {
    Style(Style),
    Text(String),
}

/// Result of one scanner invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Step {
    style: Option<Style>,
    /// Remove the scanner from the stack.
    pop: bool,
}

impl Step {
    fn emit(style: Style) -> Self {
        Step {
            style: Some(style),
            pop: false,
        }
    }

    fn unstyled() -> Self {
        Step {
            style: None,
            pop: false,
        }
    }

    fn finish(style: Option<Style>) -> Self {
        Step { style, pop: true }
    }
}

/// Per-document tokenizer state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    stack: Vec<Scanner>,
    mode: Mode,
    last_token: Option<LastToken>,
}

impl Default for State {
    fn default() -> Self {
        State {
            stack: vec![Scanner::Dispatch],
            mode: Mode::TopLevel,
            last_token: None,
        }
    }
}

impl State {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Number of scanners on the stack, including the dispatcher.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The scanner that handles the next call.
    pub fn active(&self) -> Scanner {
        self.stack.last().copied().unwrap_or(Scanner::Dispatch)
    }

    pub fn last_token(&self) -> Option<&LastToken> {
        self.last_token.as_ref()
    }

    /// True if the previous token was one of `words`.
    fn follows_word(&self, words: &[&str]) -> bool {
        matches!(&self.last_token, Some(LastToken::Text(text)) if words.contains(&text.as_str()))
    }

    fn follows_style(&self, style: Style) -> bool {
        self.last_token == Some(LastToken::Style(style))
    }

    fn latch(&mut self, mode: Mode) {
        debug_assert_eq!(self.mode, Mode::TopLevel, "sublanguage latched twice");
        tracing::trace!(?mode, "entering sublanguage");
        self.mode = mode;
    }

    fn push(&mut self, scanner: Scanner) {
        self.stack.push(scanner);
        tracing::trace!(?scanner, depth = self.stack.len(), "pushed scanner");
    }

    fn pop(&mut self) {
        // The dispatcher stays at the bottom.
        if self.stack.len() > 1 {
            let scanner = self.stack.pop();
            tracing::trace!(?scanner, depth = self.stack.len(), "popped scanner");
        }
    }

    /// Push `scanner` and run it immediately on the same token.
    fn enter(&mut self, scanner: Scanner, cursor: &mut LineCursor<'_>) -> Step {
        self.push(scanner);
        let step = scanner.scan(cursor, self);
        if step.pop {
            self.pop();
        }
        Step {
            style: step.style,
            pop: false,
        }
    }
}

impl Scanner {
    fn scan(self, cursor: &mut LineCursor<'_>, state: &mut State) -> Step {
        match self {
            Scanner::Dispatch => dispatch::token(cursor, state),
            Scanner::BlockComment(syntax) => scanners::block_comment(cursor, syntax),
            Scanner::StringLiteral { quote } => scanners::string_literal(cursor, quote),
            Scanner::UriSpan => scanners::uri_span(cursor),
        }
    }
}

/// Fresh state for a newly opened document.
pub fn start() -> State {
    State::default()
}

/// Produce the next token of the current line.
///
/// The token starts at the cursor; on return the cursor is past it. `None`
/// means the token is unstyled, or that the line held nothing but whitespace.
/// Calling this at end-of-line is a no-op.
pub fn next(state: &mut State, cursor: &mut LineCursor<'_>) -> Option<Style> {
    cursor.start_token();
    if cursor.eol() {
        return None;
    }

    let style = loop {
        let before = cursor.pos();
        let step = state.active().scan(cursor, state);
        if step.pop {
            state.pop();
            // A scanner that gave up without consuming hands the same input
            // to the scanner underneath it.
            if step.style.is_none() && cursor.pos() == before {
                continue;
            }
        }
        break step.style;
    };

    if let Some(style) = style {
        state.last_token = Some(if style.is_identifier_like() {
            LastToken::Text(cursor.current().to_owned())
        } else {
            LastToken::Style(style)
        });
    }
    style
}
