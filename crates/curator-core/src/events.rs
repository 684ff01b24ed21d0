//! Event sink abstraction for decoupling the controller from presentation.
//!
//! The controller never renders anything. It reports state transitions and
//! deliveries through [`EventSink`]; a terminal view, a JSONL stream, or a test
//! collector subscribe by implementing it.

use serde::Serialize;
use std::fmt;
use std::io;

/// Lifecycle state of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl LifecycleState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleState::Idle => "idle",
            LifecycleState::Loading => "loading",
            LifecycleState::Success => "success",
            LifecycleState::Error => "error",
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the endpoint in use came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointSource {
    Query,
    HostContext,
}

/// What was handed to the host bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryKind {
    Html,
    Json,
}

/// Events emitted by the controller.
#[derive(Debug, Clone)]
pub enum CuratorEvent<'a> {
    /// The lifecycle state changed. `message` is set when entering `error`.
    StateChanged {
        from: LifecycleState,
        to: LifecycleState,
        message: Option<&'a str>,
    },

    /// A higher-priority source replaced the endpoint.
    EndpointResolved {
        endpoint: &'a str,
        source: EndpointSource,
    },

    /// A request is about to go out.
    RequestSent {
        endpoint: &'a str,
        with_context: bool,
        with_auth: bool,
    },

    /// Content was delivered to the host bridge.
    Delivered { kind: DeliveryKind, bytes: usize },

    /// Free-form diagnostic (shown in verbose mode).
    Diagnostic(String),
}

/// Receives controller events.
pub trait EventSink {
    fn handle(&mut self, event: CuratorEvent<'_>) -> io::Result<()>;
}

/// A sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn handle(&mut self, _event: CuratorEvent<'_>) -> io::Result<()> {
        Ok(())
    }
}

/// A sink that collects events for programmatic use.
#[derive(Debug, Default)]
pub struct CollectingEventSink {
    /// `(from, to)` pairs in the order they happened.
    pub transitions: Vec<(LifecycleState, LifecycleState)>,
    pub errors: Vec<String>,
    pub endpoints: Vec<(String, EndpointSource)>,
    pub requests: usize,
    pub deliveries: Vec<DeliveryKind>,
    pub diagnostics: Vec<String>,
}

impl CollectingEventSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for CollectingEventSink {
    fn handle(&mut self, event: CuratorEvent<'_>) -> io::Result<()> {
        match event {
            CuratorEvent::StateChanged { from, to, message } => {
                self.transitions.push((from, to));
                if let Some(message) = message {
                    self.errors.push(message.to_string());
                }
            }
            CuratorEvent::EndpointResolved { endpoint, source } => {
                self.endpoints.push((endpoint.to_string(), source));
            }
            CuratorEvent::RequestSent { .. } => self.requests += 1,
            CuratorEvent::Delivered { kind, .. } => self.deliveries.push(kind),
            CuratorEvent::Diagnostic(message) => self.diagnostics.push(message),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collecting_sink_records_transitions_and_errors() {
        let mut sink = CollectingEventSink::new();
        sink.handle(CuratorEvent::StateChanged {
            from: LifecycleState::Idle,
            to: LifecycleState::Error,
            message: Some("boom"),
        })
        .unwrap();
        sink.handle(CuratorEvent::RequestSent {
            endpoint: "https://x",
            with_context: true,
            with_auth: false,
        })
        .unwrap();
        assert_eq!(
            sink.transitions,
            vec![(LifecycleState::Idle, LifecycleState::Error)]
        );
        assert_eq!(sink.errors, vec!["boom"]);
        assert_eq!(sink.requests, 1);
    }

    #[test]
    fn state_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&LifecycleState::Success).unwrap(),
            "\"success\""
        );
        assert_eq!(LifecycleState::Loading.to_string(), "loading");
    }

    #[test]
    fn null_sink_accepts_everything() {
        let mut sink = NullSink;
        assert!(sink.handle(CuratorEvent::Diagnostic("x".into())).is_ok());
    }
}
