//! Request lifecycle controller.
//!
//! `Curator` holds the widget state (prompt, endpoint, flags, last response)
//! and drives `idle → loading → success | error`. Submissions take
//! `&mut self`, so at most one request is in flight per controller.

use crate::bridge::HostBridge;
use crate::config::ResolvedConfig;
use crate::context::ContextSnapshot;
use crate::endpoint;
use crate::error::{CuratorError, Result, ValidationError};
use crate::events::{
    CuratorEvent, DeliveryKind, EndpointSource, EventSink, LifecycleState,
};
use crate::html::synthesize;
use crate::normalize::{ContentSection, normalize};
use crate::transport::{OutgoingRequest, Transport};
use serde::Serialize;
use serde_json::{Value, json};

/// First line of the text sent by [`Curator::send_json`].
pub const RAW_JSON_HEADER: &str = "AI Content JSON";

const NO_HTML_MESSAGE: &str = "No generated HTML available to insert.";
const NO_RESPONSE_MESSAGE: &str = "No API response available to send.";
const SEND_HTML_UNAVAILABLE: &str = "Host sendHTML action is not available.";
const SEND_TEXT_UNAVAILABLE: &str = "Host sendText action is not available.";

/// How the preview should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewMode {
    #[default]
    Sections,
    Html,
}

fn emit<S: EventSink>(sink: &mut S, event: CuratorEvent<'_>) {
    if let Err(e) = sink.handle(event) {
        log::warn!("event sink failed: {}", e);
    }
}

pub struct Curator<T: Transport> {
    transport: T,
    selection_limit: usize,
    max_search_depth: usize,
    endpoint: String,
    location_query: String,
    prompt: String,
    include_context: bool,
    use_auth_header: bool,
    host_context: Value,
    token: Option<String>,
    state: LifecycleState,
    error_message: String,
    response: Option<Value>,
    sections: Vec<ContentSection>,
    generated_html: String,
    preview_mode: PreviewMode,
}

impl<T: Transport> Curator<T> {
    /// Controller with default settings and no endpoint.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, &ResolvedConfig::default())
    }

    pub fn with_config(transport: T, config: &ResolvedConfig) -> Self {
        Self {
            transport,
            selection_limit: config.selection_limit,
            max_search_depth: config.max_search_depth,
            endpoint: config.endpoint.clone(),
            location_query: String::new(),
            prompt: String::new(),
            include_context: config.include_context,
            use_auth_header: config.use_auth_header,
            host_context: Value::Null,
            token: config.token.clone(),
            state: LifecycleState::Idle,
            error_message: String::new(),
            response: None,
            sections: Vec::new(),
            generated_html: String::new(),
            preview_mode: PreviewMode::Sections,
        }
    }

    // === Inputs ===

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// Manually entered endpoint; surrounding whitespace is dropped.
    pub fn set_endpoint(&mut self, endpoint: &str) {
        self.endpoint = endpoint.trim().to_string();
    }

    pub fn set_include_context(&mut self, include: bool) {
        self.include_context = include;
    }

    pub fn set_use_auth_header(&mut self, use_auth: bool) {
        self.use_auth_header = use_auth;
    }

    /// Attach the host context and token, then re-resolve the endpoint.
    ///
    /// A token given here replaces the configured one; `None` keeps it.
    pub fn set_host<S: EventSink>(&mut self, context: Value, token: Option<String>, sink: &mut S) {
        self.host_context = context;
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            self.token = Some(token);
        }
        self.apply_resolution(sink);
    }

    /// Apply endpoint precedence: query string > host context > current value.
    ///
    /// `query` is the location query string (e.g. `?endpoint=https://...`); it
    /// is remembered for later re-resolution by [`Curator::set_host`]. The
    /// current value is only replaced by a non-empty, different endpoint.
    pub fn resolve_endpoint<S: EventSink>(&mut self, query: &str, sink: &mut S) -> &str {
        self.location_query = query.to_string();
        self.apply_resolution(sink);
        &self.endpoint
    }

    fn apply_resolution<S: EventSink>(&mut self, sink: &mut S) {
        let resolved = endpoint::resolve(
            &self.endpoint,
            &self.location_query,
            &self.host_context,
            self.max_search_depth,
        );
        if !resolved.is_empty() && resolved != self.endpoint {
            let source = if endpoint::query_endpoint(&self.location_query).is_some() {
                EndpointSource::Query
            } else {
                EndpointSource::HostContext
            };
            self.endpoint = resolved;
            emit(
                sink,
                CuratorEvent::EndpointResolved {
                    endpoint: &self.endpoint,
                    source,
                },
            );
        }
    }

    // === Accessors ===

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn include_context(&self) -> bool {
        self.include_context
    }

    pub fn use_auth_header(&self) -> bool {
        self.use_auth_header
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn response(&self) -> Option<&Value> {
        self.response.as_ref()
    }

    pub fn sections(&self) -> &[ContentSection] {
        &self.sections
    }

    pub fn generated_html(&self) -> &str {
        &self.generated_html
    }

    pub fn preview_mode(&self) -> PreviewMode {
        self.preview_mode
    }

    /// Indented JSON of the stored response.
    pub fn raw_json(&self) -> Option<String> {
        self.response
            .as_ref()
            .and_then(|response| serde_json::to_string_pretty(response).ok())
    }

    // === Lifecycle ===

    fn transition<S: EventSink>(&mut self, to: LifecycleState, sink: &mut S) {
        let from = self.state;
        self.state = to;
        log::info!("curator state {} -> {}", from, to);
        let message = (to == LifecycleState::Error).then_some(self.error_message.as_str());
        emit(sink, CuratorEvent::StateChanged { from, to, message });
    }

    fn fail<S: EventSink>(&mut self, error: CuratorError, sink: &mut S) -> Result<()> {
        self.error_message = error.user_message();
        log::debug!("curator error ({}): {}", error.code(), self.error_message);
        self.transition(LifecycleState::Error, sink);
        Err(error)
    }

    fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.endpoint.is_empty() {
            return Err(ValidationError::MissingEndpoint);
        }
        if self.prompt.trim().is_empty() {
            return Err(ValidationError::EmptyPrompt);
        }
        Ok(())
    }

    /// Build the request the next submission would send.
    pub fn build_request(&self) -> Result<OutgoingRequest> {
        self.validate()?;

        let mut body = json!({ "prompt": self.prompt.trim() });
        if self.include_context {
            let snapshot = ContextSnapshot::capture(&self.host_context, self.selection_limit);
            body["context"] = json!(snapshot);
        }

        let bearer_token = if self.use_auth_header {
            self.token.clone()
        } else {
            None
        };

        Ok(OutgoingRequest {
            endpoint: self.endpoint.clone(),
            body,
            bearer_token,
        })
    }

    /// Submit the current prompt.
    ///
    /// Invalid input moves straight to `error` without touching the network.
    /// Every failure is also recorded as the error message and state; the
    /// returned error is for callers that want to branch on it.
    pub async fn submit<S: EventSink>(&mut self, sink: &mut S) -> Result<()> {
        let request = match self.build_request() {
            Ok(request) => request,
            Err(e) => return self.fail(e, sink),
        };

        self.error_message.clear();
        self.response = None;
        self.sections.clear();
        self.generated_html.clear();
        self.preview_mode = PreviewMode::Sections;
        self.transition(LifecycleState::Loading, sink);

        log::debug!(
            "POST {} (prompt: {} chars, context: {}, auth: {})",
            request.endpoint,
            self.prompt.trim().chars().count(),
            request.body.get("context").is_some(),
            request.bearer_token.is_some()
        );
        emit(
            sink,
            CuratorEvent::RequestSent {
                endpoint: &request.endpoint,
                with_context: request.body.get("context").is_some(),
                with_auth: request.bearer_token.is_some(),
            },
        );

        match self.call(&request).await {
            Ok(data) => {
                self.apply_response(data);
                emit(
                    sink,
                    CuratorEvent::Diagnostic(format!(
                        "[{} section(s), {} bytes of HTML, preview: {:?}]",
                        self.sections.len(),
                        self.generated_html.len(),
                        self.preview_mode
                    )),
                );
                self.transition(LifecycleState::Success, sink);
                Ok(())
            }
            Err(e) => self.fail(e, sink),
        }
    }

    async fn call(&self, request: &OutgoingRequest) -> Result<Value> {
        let reply = self.transport.post(request).await?;
        if !reply.is_success() {
            let body = if reply.body.is_empty() {
                reply.status_text
            } else {
                reply.body
            };
            return Err(CuratorError::Http {
                status: reply.status,
                body,
            });
        }
        serde_json::from_str(&reply.body).map_err(|e| CuratorError::Parse(e.to_string()))
    }

    fn apply_response(&mut self, data: Value) {
        self.sections = normalize(&data);
        self.generated_html = synthesize(&data, &self.sections);
        self.preview_mode = if !self.generated_html.is_empty() && self.sections.is_empty() {
            PreviewMode::Html
        } else {
            PreviewMode::Sections
        };
        self.response = Some(data);
    }

    /// Back to `idle`, forgetting the prompt and the last response.
    pub fn reset<S: EventSink>(&mut self, sink: &mut S) {
        self.prompt.clear();
        self.error_message.clear();
        self.response = None;
        self.sections.clear();
        self.generated_html.clear();
        self.preview_mode = PreviewMode::Sections;
        self.transition(LifecycleState::Idle, sink);
    }

    // === Host delivery ===

    /// Deliver the generated HTML to the host, then ask it to close.
    pub fn insert_html<B: HostBridge, S: EventSink>(
        &mut self,
        bridge: &mut B,
        sink: &mut S,
    ) -> Result<()> {
        if self.generated_html.is_empty() {
            return self.fail(CuratorError::NoContent(NO_HTML_MESSAGE), sink);
        }
        let capabilities = bridge.capabilities();
        if !capabilities.send_html {
            return self.fail(CuratorError::BridgeUnavailable(SEND_HTML_UNAVAILABLE), sink);
        }
        if let Err(e) = bridge.send_html(&self.generated_html) {
            return self.fail(e.into(), sink);
        }
        emit(
            sink,
            CuratorEvent::Delivered {
                kind: DeliveryKind::Html,
                bytes: self.generated_html.len(),
            },
        );
        close_bridge(bridge);
        Ok(())
    }

    /// Deliver the stored response as indented JSON text, then ask the host to close.
    ///
    /// Without a stored response this is a no-op that returns `NoContent`.
    pub fn send_json<B: HostBridge, S: EventSink>(
        &mut self,
        bridge: &mut B,
        sink: &mut S,
    ) -> Result<()> {
        let Some(json) = self.raw_json() else {
            return Err(CuratorError::NoContent(NO_RESPONSE_MESSAGE));
        };
        if !bridge.capabilities().send_text {
            return self.fail(CuratorError::BridgeUnavailable(SEND_TEXT_UNAVAILABLE), sink);
        }
        let message = format!("{}\n{}", RAW_JSON_HEADER, json);
        if let Err(e) = bridge.send_text(&message) {
            return self.fail(e.into(), sink);
        }
        emit(
            sink,
            CuratorEvent::Delivered {
                kind: DeliveryKind::Json,
                bytes: message.len(),
            },
        );
        close_bridge(bridge);
        Ok(())
    }
}

fn close_bridge<B: HostBridge>(bridge: &mut B) {
    if bridge.capabilities().close_library
        && let Err(e) = bridge.close_library()
    {
        log::warn!("host close_library failed: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{Capabilities, CollectingBridge, Delivery};
    use crate::events::CollectingEventSink;
    use crate::transport::HttpReply;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Transport returning canned replies and recording requests.
    #[derive(Default)]
    struct ScriptedTransport {
        replies: Mutex<VecDeque<Result<HttpReply>>>,
        requests: Mutex<Vec<OutgoingRequest>>,
    }

    impl ScriptedTransport {
        fn replying(status: u16, body: &str) -> Self {
            let t = Self::default();
            t.push(status, body);
            t
        }

        fn push(&self, status: u16, body: &str) {
            self.replies.lock().unwrap().push_back(Ok(HttpReply {
                status,
                status_text: match status {
                    500 => "Internal Server Error".to_string(),
                    404 => "Not Found".to_string(),
                    _ => "OK".to_string(),
                },
                body: body.to_string(),
            }));
        }

        fn failing(message: &str) -> Self {
            let t = Self::default();
            t.replies
                .lock()
                .unwrap()
                .push_back(Err(CuratorError::Network(message.to_string())));
            t
        }

        fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        fn last_request(&self) -> OutgoingRequest {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }
    }

    impl Transport for ScriptedTransport {
        async fn post(&self, request: &OutgoingRequest) -> Result<HttpReply> {
            self.requests.lock().unwrap().push(request.clone());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(CuratorError::Network("no scripted reply".into())))
        }
    }

    fn curator(transport: ScriptedTransport) -> Curator<ScriptedTransport> {
        let config = ResolvedConfig {
            endpoint: "https://ai.example/api".to_string(),
            token: Some("tok".to_string()),
            ..ResolvedConfig::default()
        };
        Curator::with_config(transport, &config)
    }

    #[tokio::test]
    async fn empty_prompt_never_hits_the_network() {
        let mut c = curator(ScriptedTransport::replying(200, "{}"));
        let mut sink = CollectingEventSink::new();
        c.set_prompt("   \n ");
        let err = c.submit(&mut sink).await.unwrap_err();
        assert!(matches!(
            err,
            CuratorError::Validation(ValidationError::EmptyPrompt)
        ));
        assert_eq!(c.state(), LifecycleState::Error);
        assert_eq!(c.error_message(), "Prompt cannot be empty.");
        assert_eq!(c.transport.request_count(), 0);
        assert_eq!(
            sink.transitions,
            vec![(LifecycleState::Idle, LifecycleState::Error)]
        );
        assert_eq!(sink.requests, 0);
    }

    #[tokio::test]
    async fn missing_endpoint_is_rejected() {
        let mut c = Curator::new(ScriptedTransport::default());
        let mut sink = CollectingEventSink::new();
        c.set_prompt("write something");
        assert!(c.submit(&mut sink).await.is_err());
        assert_eq!(c.error_message(), "Please provide an API endpoint URL.");
        assert_eq!(c.transport.request_count(), 0);
    }

    #[tokio::test]
    async fn successful_submission_normalizes_and_synthesizes() {
        let body = r#"{"sections":[{"title":"A","bullets":["b1","b2"]}]}"#;
        let mut c = curator(ScriptedTransport::replying(200, body));
        let mut sink = CollectingEventSink::new();
        c.set_prompt("  hello  ");
        c.submit(&mut sink).await.unwrap();

        assert_eq!(c.state(), LifecycleState::Success);
        assert_eq!(c.error_message(), "");
        assert_eq!(c.sections().len(), 1);
        assert_eq!(c.sections()[0].heading, "A");
        assert_eq!(c.preview_mode(), PreviewMode::Sections);
        assert!(c.generated_html().contains("<li>b1</li><li>b2</li>"));
        assert_eq!(c.response(), Some(&json!({"sections":[{"title":"A","bullets":["b1","b2"]}]})));
        assert_eq!(
            sink.transitions,
            vec![
                (LifecycleState::Idle, LifecycleState::Loading),
                (LifecycleState::Loading, LifecycleState::Success),
            ]
        );

        let request = c.transport.last_request();
        assert_eq!(request.endpoint, "https://ai.example/api");
        assert_eq!(request.body["prompt"], "hello");
        assert!(request.body.get("context").is_some());
        assert_eq!(request.bearer_token.as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn http_error_carries_status_and_body() {
        let mut c = curator(ScriptedTransport::replying(500, "server exploded"));
        let mut sink = CollectingEventSink::new();
        c.set_prompt("go");
        let err = c.submit(&mut sink).await.unwrap_err();
        assert_eq!(err.code(), "http");
        assert_eq!(c.state(), LifecycleState::Error);
        assert!(c.error_message().contains("500"));
        assert!(c.error_message().contains("server exploded"));
        assert_eq!(sink.errors, vec![c.error_message().to_string()]);
        assert_eq!(c.transport.request_count(), 1);
    }

    #[tokio::test]
    async fn http_error_with_empty_body_uses_status_text() {
        let mut c = curator(ScriptedTransport::replying(404, ""));
        c.set_prompt("go");
        let _ = c.submit(&mut CollectingEventSink::new()).await;
        assert_eq!(c.error_message(), "API error (404): Not Found");
    }

    #[tokio::test]
    async fn invalid_json_is_a_parse_error() {
        let mut c = curator(ScriptedTransport::replying(200, "not json"));
        c.set_prompt("go");
        let err = c.submit(&mut CollectingEventSink::new()).await.unwrap_err();
        assert_eq!(err.code(), "parse");
        assert_eq!(c.state(), LifecycleState::Error);
        assert!(!c.error_message().is_empty());
        assert!(c.response().is_none());
    }

    #[tokio::test]
    async fn network_failure_message_is_surfaced() {
        let mut c = curator(ScriptedTransport::failing("connection refused"));
        c.set_prompt("go");
        let _ = c.submit(&mut CollectingEventSink::new()).await;
        assert_eq!(c.error_message(), "connection refused");
    }

    #[tokio::test]
    async fn new_submission_recovers_from_error_and_clears_state() {
        let transport = ScriptedTransport::replying(500, "nope");
        transport.push(200, r#"{"title":"Fine"}"#);
        let mut c = curator(transport);
        let mut sink = CollectingEventSink::new();
        c.set_prompt("go");
        let _ = c.submit(&mut sink).await;
        assert_eq!(c.state(), LifecycleState::Error);

        c.submit(&mut sink).await.unwrap();
        assert_eq!(c.state(), LifecycleState::Success);
        assert_eq!(c.error_message(), "");
        assert_eq!(c.sections()[0].heading, "Fine");
        assert_eq!(
            sink.transitions[2],
            (LifecycleState::Error, LifecycleState::Loading)
        );
    }

    #[tokio::test]
    async fn context_and_auth_flags_shape_the_request() {
        let mut c = curator(ScriptedTransport::replying(200, "{}"));
        let mut sink = CollectingEventSink::new();
        c.set_host(
            json!({"url": "https://doc", "selection": "sel", "metadata": {"a": 1}}),
            None,
            &mut sink,
        );
        c.set_prompt("go");
        c.set_include_context(false);
        c.set_use_auth_header(false);
        c.submit(&mut sink).await.unwrap();
        let request = c.transport.last_request();
        assert_eq!(request.body, json!({"prompt": "go"}));
        assert_eq!(request.bearer_token, None);
    }

    #[test]
    fn context_snapshot_included_when_enabled() {
        let mut c = curator(ScriptedTransport::default());
        let mut sink = CollectingEventSink::new();
        c.set_host(json!({"path": "/p", "selection": "s"}), None, &mut sink);
        c.set_prompt("go");
        let request = c.build_request().unwrap();
        assert_eq!(
            request.body,
            json!({"prompt": "go", "context": {"path": "/p", "selection": "s"}})
        );
    }

    #[test]
    fn no_token_means_no_auth_header() {
        let config = ResolvedConfig {
            endpoint: "https://x".into(),
            ..ResolvedConfig::default()
        };
        let mut c = Curator::with_config(ScriptedTransport::default(), &config);
        c.set_prompt("go");
        assert!(c.use_auth_header());
        assert_eq!(c.build_request().unwrap().bearer_token, None);
    }

    #[test]
    fn host_context_endpoint_overrides_configured_one() {
        let mut c = curator(ScriptedTransport::default());
        let mut sink = CollectingEventSink::new();
        c.set_host(
            json!({"site": {"aiCuratorEndpoint": "https://ctx/api"}}),
            Some("host-token".into()),
            &mut sink,
        );
        assert_eq!(c.endpoint(), "https://ctx/api");
        assert_eq!(
            sink.endpoints,
            vec![("https://ctx/api".to_string(), EndpointSource::HostContext)]
        );
        c.set_prompt("go");
        assert_eq!(
            c.build_request().unwrap().bearer_token.as_deref(),
            Some("host-token")
        );
    }

    #[test]
    fn query_endpoint_beats_host_context() {
        let mut c = curator(ScriptedTransport::default());
        let mut sink = CollectingEventSink::new();
        c.resolve_endpoint("?api=https://query/api", &mut sink);
        c.set_host(json!({"aiContentEndpoint": "https://ctx"}), None, &mut sink);
        assert_eq!(c.endpoint(), "https://query/api");
        assert_eq!(
            sink.endpoints,
            vec![("https://query/api".to_string(), EndpointSource::Query)]
        );
    }

    #[test]
    fn resolution_keeps_manual_value_without_overrides() {
        let mut c = curator(ScriptedTransport::default());
        let mut sink = CollectingEventSink::new();
        c.set_endpoint("  https://manual  ");
        assert_eq!(c.resolve_endpoint("", &mut sink), "https://manual");
        assert!(sink.endpoints.is_empty());
    }

    #[tokio::test]
    async fn reset_returns_to_idle() {
        let mut c = curator(ScriptedTransport::replying(200, r#"{"title":"T"}"#));
        let mut sink = CollectingEventSink::new();
        c.set_prompt("go");
        c.submit(&mut sink).await.unwrap();
        c.reset(&mut sink);
        assert_eq!(c.state(), LifecycleState::Idle);
        assert_eq!(c.prompt(), "");
        assert!(c.response().is_none());
        assert!(c.sections().is_empty());
        assert_eq!(c.generated_html(), "");
        assert_eq!(c.endpoint(), "https://ai.example/api");
    }

    #[tokio::test]
    async fn insert_delivers_html_then_closes() {
        let mut c = curator(ScriptedTransport::replying(200, r#"{"html":"<p onclick='x()'>hi</p>"}"#));
        let mut sink = CollectingEventSink::new();
        c.set_prompt("go");
        c.submit(&mut sink).await.unwrap();
        assert_eq!(c.generated_html(), "<p>hi</p>");

        let mut bridge = CollectingBridge::new();
        c.insert_html(&mut bridge, &mut sink).unwrap();
        assert_eq!(
            bridge.deliveries,
            vec![Delivery::Html("<p>hi</p>".into()), Delivery::Close]
        );
        assert_eq!(sink.deliveries, vec![DeliveryKind::Html]);
        assert_eq!(c.state(), LifecycleState::Success);
    }

    #[test]
    fn insert_without_html_reports_error() {
        let mut c = curator(ScriptedTransport::default());
        let mut bridge = CollectingBridge::new();
        let err = c
            .insert_html(&mut bridge, &mut CollectingEventSink::new())
            .unwrap_err();
        assert_eq!(err.code(), "no_content");
        assert_eq!(c.state(), LifecycleState::Error);
        assert_eq!(c.error_message(), "No generated HTML available to insert.");
        assert!(bridge.deliveries.is_empty());
    }

    #[tokio::test]
    async fn insert_without_capability_reports_error() {
        let mut c = curator(ScriptedTransport::replying(200, r#"{"title":"T"}"#));
        let mut sink = CollectingEventSink::new();
        c.set_prompt("go");
        c.submit(&mut sink).await.unwrap();
        let mut bridge = CollectingBridge::with_capabilities(Capabilities {
            send_text: true,
            ..Capabilities::default()
        });
        let err = c.insert_html(&mut bridge, &mut sink).unwrap_err();
        assert_eq!(err.code(), "bridge_unavailable");
        assert_eq!(c.state(), LifecycleState::Error);
        assert!(bridge.deliveries.is_empty());
    }

    #[tokio::test]
    async fn send_json_delivers_indented_dump() {
        let mut c = curator(ScriptedTransport::replying(200, r#"{"title":"T"}"#));
        let mut sink = CollectingEventSink::new();
        c.set_prompt("go");
        c.submit(&mut sink).await.unwrap();

        let mut bridge = CollectingBridge::with_capabilities(Capabilities {
            send_text: true,
            ..Capabilities::default()
        });
        c.send_json(&mut bridge, &mut sink).unwrap();
        assert_eq!(
            bridge.deliveries,
            vec![Delivery::Text(
                "AI Content JSON\n{\n  \"title\": \"T\"\n}".to_string()
            )]
        );
    }

    #[test]
    fn send_json_without_response_is_a_no_op() {
        let mut c = curator(ScriptedTransport::default());
        let mut bridge = CollectingBridge::new();
        let err = c
            .send_json(&mut bridge, &mut CollectingEventSink::new())
            .unwrap_err();
        assert_eq!(err.code(), "no_content");
        assert_eq!(c.state(), LifecycleState::Idle);
        assert!(bridge.deliveries.is_empty());
    }
}
