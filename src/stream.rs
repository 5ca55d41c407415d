//! Cursor over a single line of input.
//!
//! The host owns the line; the tokenizer only moves the cursor forward through
//! these primitives. The cursor also remembers where the token currently being
//! produced started, so the text of that token can be recovered afterwards.

use regex::Regex;

use crate::lexemes;

#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    line: &'a str,
    /// Byte offset where the current token starts.
    start: usize,
    /// Byte offset of the next unconsumed character.
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(line: &'a str) -> Self {
        LineCursor {
            line,
            start: 0,
            pos: 0,
        }
    }

    pub fn line(&self) -> &'a str {
        self.line
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// True once the whole line has been consumed.
    pub fn eol(&self) -> bool {
        self.pos >= self.line.len()
    }

    /// The unconsumed remainder of the line.
    pub fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }

    /// Begin a new token at the current position.
    pub fn start_token(&mut self) {
        self.start = self.pos;
    }

    /// Text consumed since the token started.
    pub fn current(&self) -> &'a str {
        &self.line[self.start..self.pos]
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume one character.
    pub fn next_char(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Consume any whitespace at the cursor; true if anything was consumed.
    pub fn eat_space(&mut self) -> bool {
        let before = self.pos;
        while let Some(ch) = self.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.pos += ch.len_utf8();
        }
        self.pos > before
    }

    /// Consume the match of `re` if it starts exactly at the cursor.
    ///
    /// Empty matches count as no match, so a successful call always advances.
    pub fn eat_regex(&mut self, re: &Regex) -> Option<&'a str> {
        let rest = self.rest();
        let len = lexemes::match_len(re, rest)?;
        self.pos += len;
        Some(&rest[..len])
    }

    /// Consume `s` if the remainder of the line starts with it.
    pub fn eat_str(&mut self, s: &str) -> bool {
        if !s.is_empty() && self.rest().starts_with(s) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    pub fn skip_to_end(&mut self) {
        self.pos = self.line.len();
    }
}
