//! `render` command: markdown document to preview HTML.

use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;

use clap::Args;

use mdlive_renderer::escape_html;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `render` command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render (reads stdin when omitted).
    pub(crate) input: Option<PathBuf>,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,

    /// Wrap the fragment in a standalone HTML page.
    #[arg(long)]
    pub(crate) standalone: bool,

    /// Page title for standalone output.
    #[arg(long, default_value = "Preview")]
    pub(crate) title: String,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl RenderArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let source = match &self.input {
            Some(path) => fs::read_to_string(path)?,
            None => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
        };

        let tokens = mdlive_parser::parse(&source);
        tracing::info!(
            bytes = source.len(),
            tokens = tokens.len(),
            "parsed document"
        );

        let fragment = mdlive_renderer::render(&tokens);
        let html = if self.standalone {
            page(&self.title, &fragment)
        } else {
            fragment
        };

        match &self.output {
            Some(path) => {
                fs::write(path, &html)?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(html.as_bytes())?;
                stdout.write_all(b"\n")?;
            }
        }

        Ok(())
    }
}

/// Wrap a rendered fragment in a minimal standalone page.
///
/// The fragment lands in `#markdown-output`, the container id the preview
/// stylesheet and the diagram enhancement script target.
fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n</head>\n<body>\n<div id=\"markdown-output\">{body}</div>\n\
         </body>\n</html>\n",
        escape_html(title)
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn page_wraps_fragment_in_output_container() {
        let html = page("Notes", "<p>hi</p>");
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>Notes</title>"));
        assert!(html.contains(r#"<div id="markdown-output"><p>hi</p></div>"#));
    }

    #[test]
    fn page_title_is_escaped() {
        let html = page("<Drafts & Notes>", "");
        assert!(html.contains("<title>&lt;Drafts &amp; Notes&gt;</title>"));
    }

    #[test]
    fn page_round_trip_example() {
        let fragment = mdlive_renderer::render_markdown("# Hello");
        assert_eq!(fragment, "<h1>Hello</h1>");
    }
}
