//! Static HTML export
//!
//! Produces the same card markup as the catalog web page, so an export
//! can be dropped next to the page's stylesheet.

use std::fmt::Write;

use super::plan::{Card, LinkTarget};
use super::surface::Container;

/// Escape text for use in HTML content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Markup for a single card.
///
/// `specifications` is inline markup and is emitted unescaped.
pub fn card_html(card: &Card) -> String {
    let target = match card.link.target {
        LinkTarget::NewContext => " target=\"_blank\" rel=\"noopener\"",
    };

    format!(
        concat!(
            "<article class=\"card\">\n",
            "  <img src=\"{src}\" alt=\"{alt}\">\n",
            "  <div class=\"card-content\">\n",
            "    <h2>{heading}</h2>\n",
            "    <div class=\"especificacoes\">{specifications}</div>\n",
            "    <p>{history}</p>\n",
            "    <a href=\"{href}\"{target}>{label}</a>\n",
            "  </div>\n",
            "</article>\n",
        ),
        src = escape(&card.image.src),
        alt = escape(&card.image.alt),
        heading = escape(&card.heading),
        specifications = card.specifications,
        history = escape(&card.history),
        href = escape(&card.link.href),
        target = target,
        label = escape(&card.link.label),
    )
}

/// Inner markup of the card container
pub fn container_html(container: &Container) -> String {
    if let Some(placeholder) = container.placeholder() {
        return format!("<p>{}</p>\n", escape(&placeholder.message));
    }

    container.cards().iter().map(card_html).collect()
}

/// Complete standalone page
pub fn page_html(title: &str, container: &Container) -> String {
    let mut page = String::new();
    let title = escape(title);

    // Writing to a String cannot fail
    let _ = write!(
        page,
        concat!(
            "<!DOCTYPE html>\n",
            "<html>\n",
            "<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<title>{title}</title>\n",
            "<link rel=\"stylesheet\" href=\"style.css\">\n",
            "</head>\n",
            "<body>\n",
            "<h1>{title}</h1>\n",
            "<main class=\"card-container\">\n",
            "{body}",
            "</main>\n",
            "</body>\n",
            "</html>\n",
        ),
        title = title,
        body = container_html(container),
    );
    page
}
