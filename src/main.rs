//! Print the tokens of a document read on stdin, one per line:
//!
//! ```ignore
//! <Foods.gf gf-highlight
//! 1:0-8	keyword	abstract
//! 1:9-14	def	Foods
//! ```
//!
//! Unstyled tokens are printed with style `none`.

use std::io::{Read, Write};

fn main() -> std::io::Result<()> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let mut stdout = std::io::stdout().lock();
    let highlighted = gf_highlight::highlight_document(&input);
    for (number, (line, spans)) in input.lines().zip(highlighted.iter()).enumerate() {
        for span in spans {
            let style = span.style.map(|s| s.as_str()).unwrap_or("none");
            writeln!(
                stdout,
                "{}:{}-{}\t{}\t{}",
                number + 1,
                span.range.start,
                span.range.end,
                style,
                span.text(line)
            )?;
        }
    }
    Ok(())
}
