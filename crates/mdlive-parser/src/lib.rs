//! Block and inline markdown parsing for live preview.
//!
//! This crate provides the parsing half of the preview pipeline:
//!
//! - [`parse`] turns raw markdown text into a flat sequence of [`Token`]s.
//!   Lists nest as trees inside `list` tokens; everything else is one token
//!   per block.
//! - [`inline::format`] turns a single text run into an HTML fragment by
//!   applying a fixed sequence of substitutions (code spans, images,
//!   emphasis, links).
//!
//! Parsing never fails: malformed or partial input degrades to paragraph
//! tokens rather than erroring, so a preview can be produced for any
//! keystroke-level document state. Each call is a pure function of its
//! input; no state is kept between calls.
//!
//! # Example
//!
//! ```
//! use mdlive_parser::{Token, parse};
//!
//! let tokens = parse("# Hello\n\nSome *text*");
//! assert!(matches!(&tokens[0], Token::Heading { level: 1, .. }));
//! ```

mod block;
pub mod inline;
mod token;

pub use block::parse;
pub use inline::InlineResult;
pub use token::{ListItem, ListKind, Token};
