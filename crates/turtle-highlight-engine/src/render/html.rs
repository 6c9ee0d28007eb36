use std::borrow::Cow;

use crate::highlight::{HighlightedBlock, RenderedLine, TokenKind};

/// Which class vocabulary to put on token spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassNames {
    /// `comment`, `uri`, `string`, `prefix-namespace`, `prefix-localname`,
    /// `language-tag`, `keyword`.
    #[default]
    Labels,
    /// `comment`, `uri`, `string`, `prefix-name`, `local-name`, `lang`,
    /// `keyword`, as used by older stylesheets.
    Legacy,
}

impl ClassNames {
    fn class_for(self, kind: TokenKind) -> Option<&'static str> {
        match self {
            ClassNames::Labels => kind.label(),
            ClassNames::Legacy => kind.legacy_class(),
        }
    }
}

/// Options for [`render_html`] and [`render_pre`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Prepended to every token class, e.g. `turtle-` gives `turtle-uri`.
    pub class_prefix: String,
    pub class_names: ClassNames,
    /// Wrap each non-comment line in a bare `<span>`.
    pub wrap_lines: bool,
    /// Class of the `<pre>` element emitted by [`render_pre`].
    pub pre_class: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            class_prefix: "turtle-".to_string(),
            class_names: ClassNames::Labels,
            wrap_lines: true,
            pre_class: "turtle".to_string(),
        }
    }
}

/// Renders the block as an HTML fragment.
///
/// Lines are joined with `\n`, with none after the last line. Text is
/// escaped; plain tokens are emitted without a wrapper element.
pub fn render_html(block: &HighlightedBlock<'_>, options: &HtmlOptions) -> String {
    let prefix = html_escape::encode_double_quoted_attribute(&options.class_prefix);
    let mut out = String::with_capacity(block.source.len() * 2);

    for line in &block.lines {
        render_line(block, line, options, &prefix, &mut out);
        if line.terminated {
            out.push('\n');
        }
    }

    log::debug!(
        "rendered {} lines into {} bytes of html",
        block.lines.len(),
        out.len()
    );
    out
}

/// Renders the block inside `<pre class="...">`.
pub fn render_pre(block: &HighlightedBlock<'_>, options: &HtmlOptions) -> String {
    format!(
        "<pre class=\"{}\">{}</pre>",
        html_escape::encode_double_quoted_attribute(&options.pre_class),
        render_html(block, options)
    )
}

/// Decodes HTML entities in text taken from markup, e.g. `&lt;` to `<`.
///
/// Turtle embedded in a page is usually escaped; highlight the decoded text
/// and let [`render_html`] escape it again.
pub fn decode_text_content(html: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(html)
}

fn render_line(
    block: &HighlightedBlock<'_>,
    line: &RenderedLine,
    options: &HtmlOptions,
    prefix: &str,
    out: &mut String,
) {
    // comment lines are never wrapped; the comment span is the line
    let wrap = options.wrap_lines && !line.is_comment();
    if wrap {
        out.push_str("<span>");
    }

    for t in &line.tokens {
        let text = html_escape::encode_text(block.text(t.span));
        match options.class_names.class_for(t.kind) {
            Some(class) => {
                out.push_str("<span class=\"");
                out.push_str(prefix);
                out.push_str(class);
                out.push_str("\">");
                out.push_str(&text);
                out.push_str("</span>");
            }
            None => out.push_str(&text),
        }
    }

    if wrap {
        out.push_str("</span>");
    }
}
