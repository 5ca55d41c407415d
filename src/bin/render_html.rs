//! Render a document read on stdin as a standalone HTML page.
//!
//! ```ignore
//! <Foods.gf render_html Foods.gf >Foods.html
//! ```
//!
//! The optional argument is used as the page title.

use std::io::{stdout, Read, Write};

pub fn main() -> std::io::Result<()> {
    let title = std::env::args().nth(1).unwrap_or_else(|| "GF".to_owned());
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let page = gf_highlight::render_page(&title, &input);
    stdout().write_all(page.into_string().as_bytes())
}
