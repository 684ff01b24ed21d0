//! Terminal presentation for the CLI.
//!
//! `TerminalSink` reports controller events on stderr (verbose only),
//! `render_preview` turns a successful response into plain text, and
//! `CliBridge` is the host bridge: deliveries go to stdout or a file.

use curator_core::{
    Capabilities, ContentSection, CuratorEvent, DeliveryKind, EndpointSource, EventSink,
    HostBridge, PreviewMode,
};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Event sink for the terminal: diagnostics to stderr when verbose.
pub struct TerminalSink {
    verbose: bool,
}

impl TerminalSink {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl EventSink for TerminalSink {
    fn handle(&mut self, event: CuratorEvent<'_>) -> io::Result<()> {
        if !self.verbose {
            return Ok(());
        }
        let text = match event {
            CuratorEvent::StateChanged { from, to, .. } => format!("[{} -> {}]", from, to),
            CuratorEvent::EndpointResolved { endpoint, source } => {
                let from = match source {
                    EndpointSource::Query => "query string",
                    EndpointSource::HostContext => "host context",
                };
                format!("[Endpoint from {}: {}]", from, endpoint)
            }
            CuratorEvent::RequestSent {
                endpoint,
                with_context,
                with_auth,
            } => format!(
                "[POST {}{}{}]",
                endpoint,
                if with_context { " +context" } else { "" },
                if with_auth { " +auth" } else { "" }
            ),
            CuratorEvent::Delivered { kind, bytes } => {
                let what = match kind {
                    DeliveryKind::Html => "HTML",
                    DeliveryKind::Json => "JSON",
                };
                format!("[Delivered {} ({} bytes)]", what, bytes)
            }
            CuratorEvent::Diagnostic(message) => message,
        };
        eprintln!("{}", text);
        Ok(())
    }
}

/// Plain-text preview of a successful response.
pub fn render_preview(mode: PreviewMode, sections: &[ContentSection], html: &str) -> String {
    if mode == PreviewMode::Html {
        return html.to_string();
    }
    sections
        .iter()
        .map(render_section)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_section(section: &ContentSection) -> String {
    let mut lines = vec![format!("## {}", section.heading)];
    if !section.body.is_empty() {
        lines.push(section.body.clone());
    }
    lines.extend(section.bullets.iter().map(|b| format!("- {}", b)));
    if let Some(cta) = &section.cta {
        lines.push(format!("→ {} <{}>", cta.label, cta.url));
    }
    if let Some(image) = section.image.as_ref().and_then(|v| v.as_str()) {
        lines.push(format!("[image: {}]", image));
    }
    lines.join("\n")
}

/// Host bridge writing deliveries to stdout or a file.
pub struct CliBridge {
    out: Box<dyn Write>,
}

impl CliBridge {
    pub fn new(path: Option<&Path>) -> io::Result<Self> {
        let out: Box<dyn Write> = match path {
            Some(path) => Box::new(File::create(path).map_err(|e| {
                io::Error::new(
                    e.kind(),
                    format!("Failed to create '{}': {}", path.display(), e),
                )
            })?),
            None => Box::new(io::stdout()),
        };
        Ok(Self { out })
    }

    fn write(&mut self, content: &str) -> io::Result<()> {
        writeln!(self.out, "{}", content)?;
        self.out.flush()
    }
}

impl HostBridge for CliBridge {
    fn capabilities(&self) -> Capabilities {
        Capabilities::all()
    }

    fn send_html(&mut self, html: &str) -> io::Result<()> {
        self.write(html)
    }

    fn send_text(&mut self, text: &str) -> io::Result<()> {
        self.write(text)
    }

    fn close_library(&mut self) -> io::Result<()> {
        log::debug!("delivery complete");
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curator_core::CallToAction;
    use serde_json::json;

    fn section() -> ContentSection {
        ContentSection {
            heading: "Intro".to_string(),
            body: "Hello".to_string(),
            bullets: vec!["one".to_string(), "two".to_string()],
            cta: Some(CallToAction {
                label: "Go".to_string(),
                url: "https://go".to_string(),
            }),
            image: Some(json!("hero.png")),
        }
    }

    #[test]
    fn sections_render_as_text() {
        let text = render_preview(PreviewMode::Sections, &[section()], "<p>ignored</p>");
        assert_eq!(
            text,
            "## Intro\nHello\n- one\n- two\n→ Go <https://go>\n[image: hero.png]"
        );
    }

    #[test]
    fn sections_are_separated_by_blank_lines() {
        let mut second = section();
        second.heading = "Next".to_string();
        second.body.clear();
        second.bullets.clear();
        second.cta = None;
        second.image = None;
        let text = render_preview(PreviewMode::Sections, &[section(), second], "");
        assert!(text.ends_with("[image: hero.png]\n\n## Next"));
    }

    #[test]
    fn html_mode_prints_html() {
        assert_eq!(render_preview(PreviewMode::Html, &[], "<p>x</p>"), "<p>x</p>");
    }

    #[test]
    fn file_bridge_writes_deliveries() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.html");
        let mut bridge = CliBridge::new(Some(&path)).unwrap();
        bridge.send_html("<p>x</p>").unwrap();
        bridge.close_library().unwrap();
        drop(bridge);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>x</p>\n");
    }
}
