//! Best-effort cleanup of API-supplied HTML.
//!
//! Removes `script` and `style` elements (with their contents) and every
//! attribute whose name starts with `on`, case-insensitively. This is not a
//! security boundary: `javascript:` URLs and `style` attributes pass through.

use scraper::node::Element;
use scraper::{ElementRef, Html, Node};
use serde_json::Value;

const DROPPED_ELEMENTS: [&str; 2] = ["script", "style"];

const VOID_ELEMENTS: [&str; 18] = [
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

enum Step<'a, N> {
    Visit(N),
    Close(&'a str),
}

/// Sanitize a raw `html` field. Non-strings and empty strings yield `""`.
pub fn sanitize_html(raw: &Value) -> String {
    match raw.as_str() {
        Some(snippet) if !snippet.is_empty() => sanitize_snippet(snippet),
        _ => String::new(),
    }
}

/// Parse `snippet` as a fragment, strip it, and serialize it back, trimmed.
///
/// Every text node is escaped on output, including the contents of
/// `noscript`, `xmp`, `iframe` and the other raw-text elements, so markup the
/// parser kept as text never comes back out as live elements.
pub fn sanitize_snippet(snippet: &str) -> String {
    let fragment = Html::parse_fragment(snippet);
    let mut out = String::with_capacity(snippet.len());
    write_fragment(fragment.root_element(), &mut out);
    out.trim().to_string()
}

fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

fn is_event_handler(attr: &str) -> bool {
    attr.get(..2)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("on"))
}

/// Depth-first walk with an explicit stack; nesting depth never grows the call stack.
fn write_fragment(root: ElementRef<'_>, out: &mut String) {
    let mut stack: Vec<_> = root.children().rev().map(Step::Visit).collect();
    while let Some(step) = stack.pop() {
        let node = match step {
            Step::Close(name) => {
                out.push_str("</");
                out.push_str(name);
                out.push('>');
                continue;
            }
            Step::Visit(node) => node,
        };
        match node.value() {
            Node::Element(element) => {
                let name = element.name();
                if DROPPED_ELEMENTS.contains(&name) {
                    continue;
                }
                write_open_tag(element, out);
                if !is_void(name) {
                    stack.push(Step::Close(name));
                    stack.extend(node.children().rev().map(Step::Visit));
                }
            }
            Node::Text(text) => escape_text(text, out),
            Node::Comment(comment) => {
                out.push_str("<!--");
                out.push_str(comment);
                out.push_str("-->");
            }
            _ => {}
        }
    }
}

fn write_open_tag(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.name());
    for (attr, value) in element.attrs() {
        if is_event_handler(attr) {
            continue;
        }
        out.push(' ');
        out.push_str(attr);
        out.push_str("=\"");
        escape_attr(value, out);
        out.push('"');
    }
    out.push('>');
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
}
