//! Inline formatting: text run -> HTML fragment.
//!
//! A fixed, order-dependent sequence of substitutions over an accumulator
//! string. Later rules scan the output of earlier rules, so HTML inserted
//! by one rule is visible to the next. Inline code is substituted first but
//! its output is not protected from the emphasis rules that follow; an
//! asterisk pair inside a code span still becomes `<em>`.
//!
//! All patterns are non-greedy and single-line (`.` does not cross `\n`).
//! Unmatched markers are left as literal text.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"!\[([^\]]*)\]\(\s*([^)\s]+)(?:\s+"([^"]+)")?\s*\)"#).unwrap());

static STRIKETHROUGH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"~~(.+?)~~").unwrap());

static BOLD_ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\*(.+?)\*\*\*").unwrap());

static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\[([^\]]+)\]\(\s*([^)\s]+)(?:\s+"([^"]+)")?\s*\)"#).unwrap());

/// Result of inline processing.
///
/// `raw` currently duplicates `content`; it is the hook for plain-text
/// extraction later without changing the return type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineResult {
    /// HTML fragment.
    pub content: String,
    /// Same as `content` for now.
    pub raw: String,
}

/// Apply the inline substitution pipeline to one text run.
#[must_use]
pub fn format(text: &str) -> InlineResult {
    let out = CODE_RE.replace_all(text, "<code>${1}</code>");
    let out = IMAGE_RE.replace_all(&out, |caps: &Captures<'_>| match caps.get(3) {
        Some(title) => format!(
            r#"<img src="{}" alt="{}" title="{}">"#,
            &caps[2],
            &caps[1],
            title.as_str()
        ),
        None => format!(r#"<img src="{}" alt="{}">"#, &caps[2], &caps[1]),
    });
    let out = STRIKETHROUGH_RE.replace_all(&out, "<del>${1}</del>");
    let out = BOLD_ITALIC_RE.replace_all(&out, "<strong><em>${1}</em></strong>");
    let out = BOLD_RE.replace_all(&out, "<strong>${1}</strong>");
    let out = ITALIC_RE.replace_all(&out, "<em>${1}</em>");
    let out = LINK_RE.replace_all(&out, |caps: &Captures<'_>| match caps.get(3) {
        Some(title) => format!(
            r#"<a href="{}" title="{}">{}</a>"#,
            &caps[2],
            title.as_str(),
            &caps[1]
        ),
        None => format!(r#"<a href="{}">{}</a>"#, &caps[2], &caps[1]),
    });

    let content = out.into_owned();
    InlineResult {
        raw: content.clone(),
        content,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn code_span() {
        assert_eq!(format("use `let` here").content, "use <code>let</code> here");
    }

    #[test]
    fn image_without_title() {
        assert_eq!(
            format("![logo](img/logo.png)").content,
            r#"<img src="img/logo.png" alt="logo">"#
        );
    }

    #[test]
    fn image_with_title() {
        assert_eq!(
            format(r#"![logo](img/logo.png "The logo")"#).content,
            r#"<img src="img/logo.png" alt="logo" title="The logo">"#
        );
    }

    #[test]
    fn strikethrough() {
        assert_eq!(format("~~gone~~").content, "<del>gone</del>");
    }

    #[test]
    fn bold_italic_bold_and_italic() {
        assert_eq!(
            format("***both*** **bold** *italic*").content,
            "<strong><em>both</em></strong> <strong>bold</strong> <em>italic</em>"
        );
    }

    #[test]
    fn link_without_title() {
        assert_eq!(
            format("[docs](https://example.com)").content,
            r#"<a href="https://example.com">docs</a>"#
        );
    }

    #[test]
    fn link_with_title() {
        assert_eq!(
            format(r#"[docs](https://example.com "Docs")"#).content,
            r#"<a href="https://example.com" title="Docs">docs</a>"#
        );
    }

    #[test]
    fn unmatched_markers_stay_literal() {
        assert_eq!(format("a * b").content, "a * b");
        assert_eq!(format("lone ` tick").content, "lone ` tick");
        assert_eq!(format("[text](").content, "[text](");
    }

    #[test]
    fn emphasis_leaks_into_code_output() {
        // Substitution order is observable behavior: code spans are not raw
        // zones, so asterisks inside them are still rewritten by later rules.
        assert_eq!(
            format("`a *b* c`").content,
            "<code>a <em>b</em> c</code>"
        );
    }

    #[test]
    fn raw_duplicates_content() {
        let result = format("**x**");
        assert_eq!(result.raw, result.content);
    }

    #[test]
    fn patterns_do_not_cross_newlines() {
        assert_eq!(format("*a\nb*").content, "*a\nb*");
    }
}
