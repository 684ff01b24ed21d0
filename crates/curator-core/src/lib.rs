//! curator-core: AI content curator for document-authoring hosts
//!
//! Sends a prompt (plus an optional snapshot of the host document) to an AI
//! endpoint, normalizes whatever JSON comes back into content sections,
//! synthesizes sanitized HTML, and hands the result to the host.
//!
//! # Quick Start
//!
//! ```no_run
//! use curator_core::{
//!     CollectingBridge, CollectingEventSink, ConfigOverrides, Curator, HttpTransport,
//!     load_config,
//! };
//!
//! #[tokio::main]
//! async fn main() -> curator_core::Result<()> {
//!     let config = load_config(None, &ConfigOverrides::default())?;
//!     let transport = HttpTransport::new(config.timeout())?;
//!     let mut curator = Curator::with_config(transport, &config);
//!     let mut sink = CollectingEventSink::new();
//!
//!     curator.set_prompt("Three reasons to visit Lisbon");
//!     curator.submit(&mut sink).await?;
//!
//!     let mut bridge = CollectingBridge::new();
//!     curator.insert_html(&mut bridge, &mut sink)?;
//!     Ok(())
//! }
//! ```

pub mod bridge;
pub mod config;
pub mod context;
pub mod endpoint;
pub mod error;
pub mod events;
pub mod html;
pub mod json_ext;
pub mod lifecycle;
pub mod normalize;
pub mod sanitize;
pub mod transport;

pub use bridge::{Capabilities, CollectingBridge, Delivery, HostBridge};
pub use config::{Config, ConfigOverrides, ResolvedConfig, curator_home, load_config};
pub use context::ContextSnapshot;
pub use error::{CuratorError, Result, ValidationError};
pub use events::{
    CollectingEventSink, CuratorEvent, DeliveryKind, EndpointSource, EventSink, LifecycleState,
    NullSink,
};
pub use lifecycle::{Curator, PreviewMode, RAW_JSON_HEADER};
pub use normalize::{CallToAction, ContentSection};
pub use transport::{HttpReply, HttpTransport, OutgoingRequest, Transport};
