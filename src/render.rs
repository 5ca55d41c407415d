//! HTML rendering of highlighted documents.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::highlight::{highlight_document, merge_adjacent, Span};
use crate::Style;

/// A run of line text and its style; gaps between spans are unstyled pieces.
struct Piece<'a> {
    text: &'a str,
    style: Option<Style>,
}

fn pieces<'a>(line: &'a str, spans: &[Span]) -> Vec<Piece<'a>> {
    let mut pieces = Vec::new();
    let mut end = 0;
    for span in merge_adjacent(spans) {
        if span.range.start > end {
            pieces.push(Piece {
                text: &line[end..span.range.start],
                style: None,
            });
        }
        pieces.push(Piece {
            text: span.text(line),
            style: span.style,
        });
        end = span.range.end;
    }
    if end < line.len() {
        pieces.push(Piece {
            text: &line[end..],
            style: None,
        });
    }
    pieces
}

/// Render `text` as a `<pre>` block with one `cm-<style>` span per token.
pub fn render_document(text: &str) -> Markup {
    let highlighted = highlight_document(text);
    html! {
        pre class="cm-s-default" {
            @for (line, spans) in text.lines().zip(highlighted.iter()) {
                @for piece in pieces(line, spans) {
                    @if let Some(style) = piece.style {
                        span class={ "cm-" (style.as_str()) } { (piece.text) }
                    } @else {
                        (piece.text)
                    }
                }
                "\n"
            }
        }
    }
}

/// A standalone page around [`render_document`].
pub fn render_page(title: &str, text: &str) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                (render_document(text))
            }
        }
    }
}

pub(crate) const STYLE: &str = include_str!("style.css");
