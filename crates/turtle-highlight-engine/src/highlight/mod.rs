//! # Turtle Highlighting
//!
//! Line-oriented tokenizer that tags Turtle snippets for display.
//!
//! ## Architecture
//!
//! A block is split on `\n` and every line is classified on its own:
//!
//! 1. A line whose trimmed form starts with `#` becomes one comment token.
//! 2. Otherwise the line runs through the [`passes::Pass`] chain:
//!    URI, string literal, prefixed name, language tag, keyword.
//!
//! Each pass claims its matches and hands the gaps between them to the next
//! pass. Claimed text is never looked at again, so a `:` inside a URI or an
//! `a` inside a string is not tagged twice.
//!
//! ## Modules
//!
//! - **`span`**: byte ranges into the source block
//! - **`types`**: `TokenKind`, `Token`, `RenderedLine`, `HighlightedBlock`
//! - **`kinds`**: per-category delimiters and regexes
//! - **`passes`**: the ordered pass chain
//! - **`lines`**: newline splitting with spans
//!
//! ## Lossless Output
//!
//! Tokens of a line are contiguous and cover the line exactly; joining the
//! lines with `\n` reproduces the input byte for byte.

pub mod kinds;
pub mod lines;
pub mod passes;
pub mod span;
pub mod types;

#[cfg(test)]
mod tests;

pub use types::{HighlightedBlock, RenderedLine, Token, TokenKind};

use kinds::Comment;
use lines::lines_with_spans;
use passes::Pass;
use span::Span;

/// Highlights a block of Turtle text.
///
/// Empty input yields a block with no lines. Never fails: text that matches
/// nothing comes back as plain tokens.
pub fn highlight_block(source: &str) -> HighlightedBlock<'_> {
    let lines: Vec<RenderedLine> = lines_with_spans(source)
        .map(|lr| RenderedLine {
            span: lr.span,
            tokens: highlight_line(lr.span.start, lr.text),
            terminated: lr.terminated,
        })
        .collect();

    log::trace!(
        "highlighted {} bytes into {} lines ({} comment)",
        source.len(),
        lines.len(),
        lines.iter().filter(|l| l.is_comment()).count()
    );

    HighlightedBlock { source, lines }
}

/// Classifies a single line. `base` is the line's byte offset in its block.
///
/// The line must not contain `\n`; use [`highlight_block`] for multi-line text.
pub fn highlight_line(base: usize, line: &str) -> Vec<Token> {
    if line.is_empty() {
        return vec![];
    }

    if Comment::is_comment_line(line) {
        return vec![Token::new(
            TokenKind::Comment,
            Span::new(base, base + line.len()),
        )];
    }

    let mut out = vec![];
    Pass::ORDER[0].classify(base, line, &mut out);
    out
}
