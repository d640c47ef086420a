//! Block-level token model shared by the parser and the renderer.

/// Ordering of a list's items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListKind {
    /// Numbered list (`1. item`), rendered as `<ol>`.
    Ordered,
    /// Bulleted list (`- item`, `* item`, `+ item`), rendered as `<ul>`.
    Unordered,
}

/// One item of a list.
///
/// `content` is already inline-processed HTML; the renderer emits it into
/// the `<li>` verbatim. Nested lists hang off `children` and contain only
/// [`Token::List`] values, forming a tree of arbitrary depth.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListItem {
    /// Inline-processed HTML fragment for the item text.
    pub content: String,
    /// Leading-whitespace length of the source line.
    pub indent: usize,
    /// Nested list tokens attached to this item.
    pub children: Vec<Token>,
}

/// One structured unit of block-level markdown content.
///
/// Tokens appear in source line order, except where a sub-parser folds
/// multiple input lines into one token (code blocks, lists, multi-line
/// blockquotes, tables). Tokens are produced fresh on every [`parse`] call
/// and never mutated afterwards.
///
/// [`parse`]: crate::parse
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Token {
    /// A blank source line. Renders as a literal line break.
    Empty,
    /// A horizontal rule (`---`, `***`, `___`).
    Hr,
    /// An ATX heading, `level` in `1..=6`.
    Heading { level: u8, content: String },
    /// A plain text line, content untrimmed.
    Paragraph { content: String },
    /// A fenced code block. `content` is verbatim source, not escaped.
    CodeBlock { language: String, content: String },
    /// A blockquote. `content` is the raw newline-joined quoted text,
    /// before inline processing; blank-line boundaries inside it mark
    /// paragraph breaks for the renderer.
    Blockquote { content: String },
    /// A pipe table. `column_count` is fixed from the header row; data
    /// rows are stored as-is and may be shorter or longer.
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        column_count: usize,
    },
    /// An ordered or unordered list. All `items` sit at the same
    /// indentation level; deeper indentation lives in item children.
    List { kind: ListKind, items: Vec<ListItem> },
}
