//! HTML rendering for the book cover.
//!
//! Composes the markup the host page embeds: a `<style>` element holding
//! the generated stylesheet, followed by the scene container with the
//! cover image inside it. When a link target is configured the container
//! becomes an anchor that opens in a new tab without leaking the referring
//! page. Rendering is stateless; every call re-derives the output from the
//! request.

use crate::config::CoverRequest;
use crate::styles;
use html_escape::{encode_double_quoted_attribute, encode_text};
use log::debug;

/// Render the cover as an HTML fragment.
///
/// The fragment carries its own `<style>` element so the rules apply to
/// the rendered instance wherever it is embedded. An empty `image_url`
/// produces an image with an empty source rather than an error.
pub fn render(request: &CoverRequest) -> String {
    let css = styles::generate_stylesheet(&request.settings);

    let book = format!(
        r#"<div class="book">
    <img alt="{alt}" src="{src}"/>
</div>"#,
        alt = encode_double_quoted_attribute(&request.image_alt),
        src = encode_double_quoted_attribute(&request.image_url),
    );

    // the link wrapper opens in a new tab; noopener/noreferrer keeps the
    // target page from reaching back to (or learning about) this one
    let framed = match request.href_opt() {
        Some(href) => format!(
            r#"<a class="book-container" href="{href}" target="_blank" rel="noopener noreferrer">
{book}
</a>"#,
            href = encode_double_quoted_attribute(href),
        ),
        None => format!(
            r#"<div class="book-container">
{book}
</div>"#
        ),
    };

    debug!(
        "rendered cover: {} bytes of css, {} bytes of markup",
        css.len(),
        framed.len()
    );

    format!("<style>\n{css}</style>\n{framed}\n")
}

/// Render the cover as a complete standalone HTML document.
///
/// Used by the preview binary so the output file can be opened directly in
/// a browser.
pub fn render_page(request: &CoverRequest, title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8"/>
    <title>{title}</title>
</head>
<body>
{body}
</body>
</html>
"#,
        title = encode_text(title),
        body = render(request),
    )
}
