//! Driving the tokenizer over whole lines and documents, the way an editor does.

use std::ops::Range;

use crate::stream::LineCursor;
use crate::tokenizer::{self, State};
use crate::Style;

/// A styled range of one line, in bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub range: Range<usize>,
    pub style: Option<Style>,
}

impl Span {
    /// The text of this span within its line.
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        &line[self.range.clone()]
    }
}

/// Tokenize one line, continuing from `state`.
///
/// Unstyled whitespace is not reported.
pub fn highlight_line(state: &mut State, line: &str) -> Vec<Span> {
    let mut cursor = LineCursor::new(line);
    let mut spans = Vec::new();
    while !cursor.eol() {
        let before = cursor.pos();
        let style = tokenizer::next(state, &mut cursor);
        if cursor.pos() == before {
            tracing::warn!(
                pos = before,
                ?style,
                "tokenizer made no progress; abandoning rest of line"
            );
            break;
        }
        if style.is_none() && cursor.current().trim().is_empty() {
            continue;
        }
        spans.push(Span {
            range: cursor.start()..cursor.pos(),
            style,
        });
    }
    spans
}

/// Tokenize a whole document from a fresh state; one entry per line.
pub fn highlight_document(text: &str) -> Vec<Vec<Span>> {
    let mut state = tokenizer::start();
    text.lines()
        .map(|line| highlight_line(&mut state, line))
        .collect()
}

/// Join touching spans of the same style.
///
/// Comments and strings come out of the tokenizer a character at a time;
/// presentation wants them whole.
pub fn merge_adjacent(spans: &[Span]) -> Vec<Span> {
    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if last.range.end == span.range.start && last.style == span.style => {
                last.range.end = span.range.end;
            }
            _ => merged.push(span.clone()),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_skip_whitespace() {
        let line = "  help   ";
        let spans = highlight_line(&mut tokenizer::start(), line);
        assert_eq!(
            spans,
            vec![Span {
                range: 2..6,
                style: Some(Style::Keyword)
            }]
        );
        assert_eq!(spans[0].text(line), "help");
    }

    #[test]
    fn unstyled_tokens_are_reported() {
        let spans = highlight_line(&mut tokenizer::start(), "# x");
        assert_eq!(
            spans,
            vec![
                Span {
                    range: 0..1,
                    style: None
                },
                Span {
                    range: 2..3,
                    style: None
                },
            ]
        );
    }

    #[test]
    fn document_lines() {
        let doc = "help\r\n\nconcrete X";
        let lines = highlight_document(doc);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 1);
        assert!(lines[1].is_empty());
        assert_eq!(lines[2].len(), 2);
        assert_eq!(lines[2][1].style, Some(Style::Def));
    }

    #[test]
    fn merge_comment_characters() {
        let line = "elpi x % not here";
        let mut state = tokenizer::start();
        highlight_line(&mut state, "elpi");
        let spans = highlight_line(&mut state, "/* abc */ x");
        assert_eq!(spans.len(), 7);
        let merged = merge_adjacent(&spans);
        assert_eq!(
            merged,
            vec![
                Span {
                    range: 0..9,
                    style: Some(Style::Comment)
                },
                Span {
                    range: 10..11,
                    style: Some(Style::Variable)
                },
            ]
        );
        // Same style but not touching.
        let apart = highlight_line(&mut tokenizer::start(), line);
        assert_eq!(merge_adjacent(&apart).len(), apart.len());
    }
}
