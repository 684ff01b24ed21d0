//! HTML synthesis from canonical sections.

use crate::json_ext::JsonExt;
use crate::normalize::ContentSection;
use crate::sanitize::sanitize_html;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::Value;

/// Characters left untouched when encoding a URL for an `href`:
/// the unreserved marks plus the URI reserved set.
const URI_RESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b';')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b',')
    .remove(b'#');

/// Escape the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Percent-encode a URL for use as a hyperlink target, keeping URI syntax intact.
pub fn encode_uri(url: &str) -> String {
    utf8_percent_encode(url, URI_RESERVED).to_string()
}

/// Build the HTML fragment for a response.
///
/// A non-empty `html` field in the response wins when it survives
/// sanitization; otherwise the sections are rendered. No sections, no HTML.
pub fn synthesize(response: &Value, sections: &[ContentSection]) -> String {
    if let Some(raw) = response.get("html").filter(|v| v.is_truthy()) {
        let sanitized = sanitize_html(raw);
        if !sanitized.is_empty() {
            return sanitized;
        }
    }

    if sections.is_empty() {
        return String::new();
    }

    let body: String = sections.iter().map(render_section).collect();
    format!(r#"<div class="ai-curated">{body}</div>"#)
}

fn render_section(section: &ContentSection) -> String {
    let mut parts = String::new();
    if !section.heading.is_empty() {
        parts.push_str(&format!("<h2>{}</h2>", escape_html(&section.heading)));
    }
    if !section.body.is_empty() {
        parts.push_str(&format!("<p>{}</p>", escape_html(&section.body)));
    }
    if !section.bullets.is_empty() {
        let items: String = section
            .bullets
            .iter()
            .map(|item| format!("<li>{}</li>", escape_html(item)))
            .collect();
        parts.push_str(&format!("<ul>{items}</ul>"));
    }
    if let Some(cta) = &section.cta {
        parts.push_str(&format!(
            r#"<p><a href="{}" class="button">{}</a></p>"#,
            encode_uri(&cta.url),
            escape_html(&cta.label)
        ));
    }
    format!(r#"<section class="ai-curated-section">{parts}</section>"#)
}
