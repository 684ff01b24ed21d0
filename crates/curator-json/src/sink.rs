use curator_core::{CuratorEvent, EventSink};
use serde_json::json;
use std::io;

/// JSONL event sink for curator-json.
///
/// State transitions always go to stderr; everything else only when verbose.
pub struct JsonEventSink {
    verbose: bool,
}

impl JsonEventSink {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

/// JSON record for an event, or `None` when it is verbose-only and suppressed.
fn event_record(event: CuratorEvent<'_>, verbose: bool) -> Option<serde_json::Value> {
    match event {
        CuratorEvent::StateChanged { from, to, message } => {
            let mut record = json!({"type": "state", "from": from, "to": to});
            if let Some(message) = message {
                record["message"] = json!(message);
            }
            Some(record)
        }
        _ if !verbose => None,
        CuratorEvent::EndpointResolved { endpoint, source } => Some(
            json!({"type": "endpoint_resolved", "endpoint": endpoint, "source": source}),
        ),
        CuratorEvent::RequestSent {
            endpoint,
            with_context,
            with_auth,
        } => Some(json!({"type": "request_sent", "endpoint": endpoint,
                         "with_context": with_context, "with_auth": with_auth})),
        CuratorEvent::Delivered { kind, bytes } => {
            Some(json!({"type": "delivered", "kind": kind, "bytes": bytes}))
        }
        CuratorEvent::Diagnostic(message) => {
            Some(json!({"type": "diagnostic", "content": message}))
        }
    }
}

impl EventSink for JsonEventSink {
    fn handle(&mut self, event: CuratorEvent<'_>) -> io::Result<()> {
        if let Some(record) = event_record(event, self.verbose) {
            eprintln!("{}", record);
        }
        Ok(())
    }
}
