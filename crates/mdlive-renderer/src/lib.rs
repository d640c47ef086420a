//! HTML rendering for the live-preview pipeline.
//!
//! [`render`] walks a token sequence produced by `mdlive-parser` and emits
//! one HTML string. Rendering never fails and holds no state between
//! calls; the same token sequence always produces byte-identical output.
//!
//! Code blocks get a copy affordance: the visible `<code>` body is
//! HTML-escaped while the exact original source is percent-encoded into the
//! figure's `data-code` attribute, so a copy button can recover it
//! independent of escaping. Fences tagged `mermaid` instead emit their raw
//! definition in a `<div class="mermaid">` container for the external
//! diagram library to pick up; the renderer only prepares that markup and
//! never invokes the library.
//!
//! # Example
//!
//! ```
//! use mdlive_renderer::render_markdown;
//!
//! assert_eq!(render_markdown("## Hi"), "<h2>Hi</h2>");
//! ```

mod escape;
mod renderer;

pub use escape::{encode_data_attr, escape_html};
pub use renderer::{render, render_markdown};
