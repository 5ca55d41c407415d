//! Syntax highlighting for GF shell documents.
//!
//! A document is a sequence of shell commands, or a grammar (GF), a logic
//! program (ELPI) or a module/theory (MMT). The tokenizer assigns a [`Style`]
//! to each token for an editor to color; it never parses and never fails.
//!
//! ```ignore
//! let mut state = gf_highlight::start();
//! let mut cursor = gf_highlight::LineCursor::new("concrete FoodsEng of Foods = {");
//! while !cursor.eol() {
//!     let style = gf_highlight::next(&mut state, &mut cursor);
//!     println!("{:?} {}", style, cursor.current());
//! }
//! ```

pub mod highlight;
pub mod lexemes;
pub mod registry;
mod stream;
mod style;
pub mod tokenizer;

#[cfg(feature = "render")]
mod render;
#[cfg(feature = "render")]
pub use render::{render_document, render_page};

#[cfg(feature = "web")]
pub mod web;

pub use highlight::{highlight_document, highlight_line, Span};
pub use lexemes::LINE_COMMENT;
pub use registry::{descriptor, ModeDescriptor, Registry, RegistryError};
pub use stream::LineCursor;
pub use style::Style;
pub use tokenizer::{next, start, LastToken, Mode, State};
