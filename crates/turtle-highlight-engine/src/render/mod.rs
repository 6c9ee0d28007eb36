//! # Rendering
//!
//! Turns a [`HighlightedBlock`](crate::highlight::HighlightedBlock) back into
//! markup. The highlighter itself never produces markup, so everything about
//! class names and escaping lives here.

pub mod html;

pub use html::{ClassNames, HtmlOptions, decode_text_content, render_html, render_pre};
