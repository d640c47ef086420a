//! Token-to-HTML rendering.

use std::fmt::Write;

use mdlive_parser::{ListItem, ListKind, Token, inline};

use crate::escape::{encode_data_attr, escape_html};

/// Fence language tag treated as a diagram definition (case-insensitive).
const DIAGRAM_LANGUAGE: &str = "mermaid";

/// Copy icon for the code block header button.
const SVG_COPY: &str = r#"<svg width="16" height="16" viewBox="0 0 16 16" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M4 2C4 0.895431 4.89543 0 6 0H10C11.1046 0 12 0.895431 12 2V4H14C15.1046 4 16 4.89543 16 6V14C16 15.1046 15.1046 16 14 16H8C6.89543 16 6 15.1046 6 14V12H4C2.89543 12 2 11.1046 2 10V2C2 0.895431 2.89543 0 4 0H4Z" fill="currentColor"/><path d="M6 2C6 1.44772 6.44772 1 7 1H9C9.55228 1 10 1.44772 10 2V4H8C6.89543 4 6 4.89543 6 6V8H4C3.44772 8 3 7.55228 3 7V3C3 2.44772 3.44772 2 4 2H6Z" fill="currentColor"/></svg>"#;

/// Render a token sequence into a single HTML string.
///
/// Tokens are emitted in order; leaf text runs go through the inline
/// formatter. Never fails.
#[must_use]
pub fn render(tokens: &[Token]) -> String {
    let mut out = String::with_capacity(tokens.len() * 32);
    for token in tokens {
        render_token(token, &mut out);
    }
    out
}

/// Parse and render in one call.
#[must_use]
pub fn render_markdown(text: &str) -> String {
    render(&mdlive_parser::parse(text))
}

fn render_token(token: &Token, out: &mut String) {
    match token {
        Token::Empty => out.push_str("<br>"),
        Token::Hr => out.push_str("<hr>"),
        Token::Heading { level, content } => {
            let body = inline::format(content).content;
            write!(out, "<h{level}>{body}</h{level}>").unwrap();
        }
        Token::Paragraph { content } => {
            let body = inline::format(content).content;
            write!(out, "<p>{body}</p>").unwrap();
        }
        Token::CodeBlock { language, content } => code_block(language, content, out),
        Token::Blockquote { content } => blockquote(content, out),
        Token::Table { headers, rows, .. } => table(headers, rows, out),
        Token::List { kind, items } => list(*kind, items, out),
    }
}

/// Emit a code block.
///
/// Diagram fences pass their definition through raw inside the container
/// the external library scans for. Everything else becomes a figure whose
/// visible body is HTML-escaped and whose `data-code` attribute carries the
/// exact source, percent-encoded, for the copy button.
fn code_block(language: &str, content: &str, out: &mut String) {
    if language.eq_ignore_ascii_case(DIAGRAM_LANGUAGE) {
        write!(out, r#"<div class="mermaid">{content}</div>"#).unwrap();
        return;
    }

    let encoded = encode_data_attr(content);
    let escaped = escape_html(content);
    write!(
        out,
        r#"<figure class="code-block" data-code="{encoded}"><div class="code-header"><span class="code-lang">{language}</span><button class="code-copy-btn" title="Copy code" aria-label="Copy code">{SVG_COPY}</button></div><pre><code class="language-{language}">{escaped}</code></pre></figure>"#
    )
    .unwrap();
}

/// Emit a list, recursing into each item's nested list tokens.
///
/// Nested lists land directly inside the parent `<li>`, after the item
/// text, with no extra wrapper element.
fn list(kind: ListKind, items: &[ListItem], out: &mut String) {
    let tag = match kind {
        ListKind::Ordered => "ol",
        ListKind::Unordered => "ul",
    };
    write!(out, "<{tag}>").unwrap();
    for item in items {
        write!(out, "<li>{}", item.content).unwrap();
        for child in &item.children {
            render_token(child, out);
        }
        out.push_str("</li>");
    }
    write!(out, "</{tag}>").unwrap();
}

/// Emit a blockquote, splitting the raw buffer into `<p>` runs on
/// blank-line boundaries. A quote without internal blanks is one paragraph.
fn blockquote(content: &str, out: &mut String) {
    out.push_str("<blockquote>");
    let mut paragraph: Vec<&str> = Vec::new();
    for line in content.split('\n') {
        if line.trim().is_empty() {
            flush_quote_paragraph(&mut paragraph, out);
        } else {
            paragraph.push(line);
        }
    }
    flush_quote_paragraph(&mut paragraph, out);
    out.push_str("</blockquote>");
}

fn flush_quote_paragraph(paragraph: &mut Vec<&str>, out: &mut String) {
    if paragraph.is_empty() {
        return;
    }
    let body = inline::format(&paragraph.join("\n")).content;
    write!(out, "<p>{body}</p>").unwrap();
    paragraph.clear();
}

/// Emit a table. Rows are rendered as-is: one `<td>` per present cell,
/// with no padding or truncation against the header's column count.
fn table(headers: &[String], rows: &[Vec<String>], out: &mut String) {
    out.push_str("<table><thead><tr>");
    for header in headers {
        let body = inline::format(header).content;
        write!(out, "<th>{body}</th>").unwrap();
    }
    out.push_str("</tr></thead><tbody>");
    for row in rows {
        out.push_str("<tr>");
        for cell in row {
            let body = inline::format(cell).content;
            write!(out, "<td>{body}</td>").unwrap();
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
}

#[cfg(test)]
mod tests {
    use mdlive_parser::parse;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn heading() {
        assert_eq!(render(&parse("### Title")), "<h3>Title</h3>");
    }

    #[test]
    fn paragraph_with_inline_markup() {
        assert_eq!(
            render(&parse("see [docs](https://example.com)")),
            r#"<p>see <a href="https://example.com">docs</a></p>"#
        );
    }

    #[test]
    fn hr_and_blank_line() {
        assert_eq!(render(&parse("a\n\n---")), "<p>a</p><br><hr>");
    }

    #[test]
    fn nested_list_markup() {
        assert_eq!(
            render(&parse("- a\n  - b\n- c")),
            "<ul><li>a<ul><li>b</li></ul></li><li>c</li></ul>"
        );
    }

    #[test]
    fn ordered_list_markup() {
        assert_eq!(
            render(&parse("1. one\n2. two")),
            "<ol><li>one</li><li>two</li></ol>"
        );
    }

    #[test]
    fn blockquote_single_paragraph() {
        assert_eq!(
            render(&parse("> line1\n> line2")),
            "<blockquote><p>line1\nline2</p></blockquote>"
        );
    }

    #[test]
    fn blockquote_paragraph_break_is_preserved() {
        assert_eq!(
            render(&parse("> line1\n>\n> line2")),
            "<blockquote><p>line1</p><p>line2</p></blockquote>"
        );
    }

    #[test]
    fn table_markup() {
        assert_eq!(
            render(&parse("| a | b |\n|---|---|\n| 1 | 2 |")),
            "<table><thead><tr><th>a</th><th>b</th></tr></thead>\
             <tbody><tr><td>1</td><td>2</td></tr></tbody></table>"
        );
    }

    #[test]
    fn ragged_table_rows_render_as_is() {
        let html = render(&parse("| a | b | c |\n| 1 |"));
        assert!(html.contains("<tr><td>1</td></tr>"));
    }

    #[test]
    fn mermaid_block_is_raw() {
        let html = render(&parse("```mermaid\ngraph TD; A-->B;\n```"));
        assert_eq!(html, r#"<div class="mermaid">graph TD; A-->B;</div>"#);
    }

    #[test]
    fn mermaid_tag_is_case_insensitive() {
        let html = render(&parse("```Mermaid\ngraph TD;\n```"));
        assert!(html.starts_with(r#"<div class="mermaid">"#));
    }

    #[test]
    fn code_block_body_is_escaped() {
        let html = render(&parse("```html\n<b>&</b>\n```"));
        assert!(html.contains(r#"<code class="language-html">&lt;b&gt;&amp;&lt;/b&gt;</code>"#));
        assert!(html.contains(r#"<span class="code-lang">html</span>"#));
    }

    #[test]
    fn code_block_data_attr_round_trips() {
        let source = "if a < b && c > \"d\" { 'e' }";
        let html = render(&parse(&format!("```rust\n{source}\n```")));

        let start = html.find("data-code=\"").expect("data-code attr") + "data-code=\"".len();
        let end = start + html[start..].find('"').expect("closing quote");
        let decoded = percent_encoding::percent_decode_str(&html[start..end])
            .decode_utf8()
            .unwrap();
        assert_eq!(decoded, source);
    }

    #[test]
    fn render_is_idempotent_over_tokens() {
        let tokens = parse("# h\n\n- a\n  - b\n\n> q\n\n```rust\nx\n```");
        assert_eq!(render(&tokens), render(&tokens));
    }

    #[test]
    fn render_markdown_convenience() {
        assert_eq!(render_markdown("# Hello"), "<h1>Hello</h1>");
    }

    #[test]
    fn whole_document() {
        let html = render_markdown("# Doc\n\ntext with **bold**\n\n- item\n\n---");
        assert_eq!(
            html,
            "<h1>Doc</h1><br><p>text with <strong>bold</strong></p><br>\
             <ul><li>item</li></ul><hr>"
        );
    }
}
