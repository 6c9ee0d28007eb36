pub mod highlight;
pub mod io;
pub mod render;

// Re-export key types for easier usage
pub use highlight::{
    HighlightedBlock, RenderedLine, Token, TokenKind, highlight_block, highlight_line, span::Span,
};
pub use io::*;
pub use render::{ClassNames, HtmlOptions, decode_text_content, render_html, render_pre};
