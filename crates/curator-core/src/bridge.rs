//! Host bridge abstraction.
//!
//! The host application that embeds the curator decides where generated
//! content goes. It advertises what it can do through [`Capabilities`]; the
//! controller checks them before delivering anything.

use std::io;

/// What a host bridge can do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub send_html: bool,
    pub send_text: bool,
    pub close_library: bool,
}

impl Capabilities {
    pub fn all() -> Self {
        Self {
            send_html: true,
            send_text: true,
            close_library: true,
        }
    }
}

/// Delivery target for curated content.
///
/// Methods are only called when the matching capability is advertised.
pub trait HostBridge {
    fn capabilities(&self) -> Capabilities;

    /// Insert an HTML fragment into the host document.
    fn send_html(&mut self, html: &str) -> io::Result<()>;

    /// Insert plain text into the host document.
    fn send_text(&mut self, text: &str) -> io::Result<()>;

    /// Ask the host to close the panel hosting the curator.
    fn close_library(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// One delivery recorded by [`CollectingBridge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Html(String),
    Text(String),
    Close,
}

/// A bridge that records deliveries for programmatic use.
#[derive(Debug, Clone)]
pub struct CollectingBridge {
    pub capabilities: Capabilities,
    pub deliveries: Vec<Delivery>,
}

impl CollectingBridge {
    pub fn new() -> Self {
        Self::with_capabilities(Capabilities::all())
    }

    pub fn with_capabilities(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            deliveries: Vec::new(),
        }
    }
}

impl Default for CollectingBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl HostBridge for CollectingBridge {
    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    fn send_html(&mut self, html: &str) -> io::Result<()> {
        self.deliveries.push(Delivery::Html(html.to_string()));
        Ok(())
    }

    fn send_text(&mut self, text: &str) -> io::Result<()> {
        self.deliveries.push(Delivery::Text(text.to_string()));
        Ok(())
    }

    fn close_library(&mut self) -> io::Result<()> {
        self.deliveries.push(Delivery::Close);
        Ok(())
    }
}
