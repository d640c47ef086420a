//! Line-driven block parser producing the token sequence.
//!
//! Parsing walks a cursor over the document's lines. Each dispatch rule
//! either emits a token for the current line or hands the cursor to a
//! sub-parser that consumes a run of lines (code fence, blockquote, table,
//! list). First match wins; anything left over is a paragraph.

use std::sync::LazyLock;

use regex::Regex;

use crate::inline;
use crate::token::{ListItem, ListKind, Token};

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").unwrap());

static UNORDERED_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*+]\s").unwrap());

static ORDERED_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s").unwrap());

static HR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*_]{3,}$").unwrap());

static TABLE_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|[-:\s|]+\|$").unwrap());

static NESTED_UNORDERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+[-*+]\s.+$").unwrap());

static NESTED_ORDERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+\d+\.\s.+$").unwrap());

/// Parse markdown text into an ordered token sequence.
///
/// Never fails: input that matches no block construct degrades to
/// paragraph tokens. Each call parses from scratch; nothing is shared
/// between calls.
#[must_use]
pub fn parse(text: &str) -> Vec<Token> {
    BlockParser::new(text).run()
}

/// Cursor over the document's lines.
struct BlockParser<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> BlockParser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.split('\n').collect(),
            pos: 0,
        }
    }

    fn run(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while self.pos < self.lines.len() {
            let line = self.lines[self.pos];
            let trimmed = line.trim();

            if trimmed.is_empty() {
                tokens.push(Token::Empty);
                self.pos += 1;
                continue;
            }
            if trimmed.starts_with("```") {
                tokens.push(self.code_block());
                continue;
            }
            if trimmed.starts_with('>') {
                tokens.push(self.blockquote());
                continue;
            }
            if let Some(token) = heading(line) {
                tokens.push(token);
                self.pos += 1;
                continue;
            }
            if trimmed.starts_with('|') {
                // Falls through to the rules below when no table forms.
                if let Some(token) = self.table() {
                    tokens.push(token);
                    continue;
                }
            }
            if UNORDERED_MARKER_RE.is_match(trimmed) {
                tokens.push(self.list(ListKind::Unordered, 0));
                continue;
            }
            if ORDERED_MARKER_RE.is_match(trimmed) {
                tokens.push(self.list(ListKind::Ordered, 0));
                continue;
            }
            if HR_RE.is_match(trimmed) {
                tokens.push(Token::Hr);
                self.pos += 1;
                continue;
            }
            tokens.push(Token::Paragraph {
                content: line.to_owned(),
            });
            self.pos += 1;
        }

        tokens
    }

    /// Consume a fenced code block starting at the cursor.
    ///
    /// The opener's text after the fence is the language tag (`plain` when
    /// empty). Lines are taken verbatim until a closing fence; with no
    /// closing fence, everything to end of input is block content.
    fn code_block(&mut self) -> Token {
        let opener = self.lines[self.pos].trim();
        let tag = opener[3..].trim();
        let language = if tag.is_empty() { "plain" } else { tag }.to_owned();
        self.pos += 1;

        let mut content = Vec::new();
        while self.pos < self.lines.len() {
            if self.lines[self.pos].trim() == "```" {
                self.pos += 1;
                return Token::CodeBlock {
                    language,
                    content: content.join("\n"),
                };
            }
            content.push(self.lines[self.pos]);
            self.pos += 1;
        }

        Token::CodeBlock {
            language,
            content: content.join("\n"),
        }
    }

    /// Consume consecutive quote lines into one raw newline-joined buffer.
    ///
    /// A quoted-blank line (`>` with no content) keeps the quote open only
    /// when the line after it is quoted again; the break survives as an
    /// empty buffer entry so the renderer sees two paragraphs. Any other
    /// line, including an unquoted blank, ends the quote and stays
    /// unconsumed.
    fn blockquote(&mut self) -> Token {
        let mut quoted: Vec<String> = Vec::new();

        while self.pos < self.lines.len() {
            let trimmed = self.lines[self.pos].trim();
            let Some(rest) = trimmed.strip_prefix('>') else {
                break;
            };
            let rest = rest.trim();

            if rest.is_empty() {
                let continues = self
                    .lines
                    .get(self.pos + 1)
                    .is_some_and(|next| next.trim().starts_with('>'));
                self.pos += 1;
                if continues {
                    quoted.push(String::new());
                } else {
                    break;
                }
            } else {
                quoted.push(rest.to_owned());
                self.pos += 1;
            }
        }

        Token::Blockquote {
            content: quoted.join("\n"),
        }
    }

    /// Try to consume a pipe table starting at the cursor.
    ///
    /// Separator lines are skipped, cells are trimmed, and the empty
    /// strings produced by the leading/trailing pipes are dropped. The
    /// first retained row fixes `headers` and `column_count`. Returns
    /// `None` with the cursor restored when no data row beyond the header
    /// was retained, so the lines get reprocessed by later dispatch rules.
    fn table(&mut self) -> Option<Token> {
        let start = self.pos;
        let mut rows: Vec<Vec<String>> = Vec::new();

        while self.pos < self.lines.len() {
            let line = self.lines[self.pos].trim();
            if !line.starts_with('|') {
                break;
            }
            if TABLE_SEPARATOR_RE.is_match(line) {
                self.pos += 1;
                continue;
            }
            let cells: Vec<String> = line
                .split('|')
                .map(str::trim)
                .filter(|cell| !cell.is_empty())
                .map(str::to_owned)
                .collect();
            if !cells.is_empty() {
                rows.push(cells);
            }
            self.pos += 1;
        }

        if rows.len() < 2 {
            self.pos = start;
            return None;
        }

        let column_count = rows[0].len();
        let headers = rows.remove(0);
        Some(Token::Table {
            headers,
            rows,
            column_count,
        })
    }

    /// Consume a list at `base_indent`, recursing for deeper indentation.
    ///
    /// Nesting is keyed purely to the leading-whitespace length observed on
    /// the child line; any increase opens a new level attached to the most
    /// recently appended item. Blank lines are consumed without ending the
    /// list. A non-blank line that neither matches this list's marker at
    /// `base_indent` nor opens a nested list ends it, unconsumed.
    fn list(&mut self, kind: ListKind, base_indent: usize) -> Token {
        let marker: &Regex = match kind {
            ListKind::Ordered => &ORDERED_MARKER_RE,
            ListKind::Unordered => &UNORDERED_MARKER_RE,
        };
        let mut items: Vec<ListItem> = Vec::new();

        while self.pos < self.lines.len() {
            let line = self.lines[self.pos];
            let trimmed = line.trim();
            let indent = leading_whitespace(line);

            if !trimmed.is_empty() && indent < base_indent {
                break;
            }
            if indent == base_indent && marker.is_match(trimmed) {
                let content = marker.replace(trimmed, "");
                let formatted = inline::format(&content);
                items.push(ListItem {
                    content: formatted.content,
                    indent,
                    children: Vec::new(),
                });
                self.pos += 1;
                continue;
            }
            if !trimmed.is_empty() && indent > base_indent {
                let nested_kind = if NESTED_UNORDERED_RE.is_match(line) {
                    ListKind::Unordered
                } else if NESTED_ORDERED_RE.is_match(line) {
                    ListKind::Ordered
                } else {
                    break;
                };
                let nested = self.list(nested_kind, indent);
                if let Some(last) = items.last_mut() {
                    last.children.push(nested);
                }
                continue;
            }
            if !trimmed.is_empty() {
                // Same-level line without a marker.
                break;
            }
            self.pos += 1;
        }

        Token::List { kind, items }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn heading(line: &str) -> Option<Token> {
    HEADING_RE.captures(line).map(|caps| Token::Heading {
        level: caps[1].len() as u8,
        content: caps[2].to_owned(),
    })
}

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}
