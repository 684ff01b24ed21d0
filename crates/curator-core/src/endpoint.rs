//! Endpoint resolution.
//!
//! Three sources, highest priority first:
//! 1. `endpoint` (then `api`) in the location query string
//! 2. The first preferred key found by a depth-first walk of the host context
//! 3. The value the caller already holds (config default or manual entry)
//!
//! Resolution never clears a value it cannot override.

use crate::json_ext::JsonExt;
use serde_json::Value;

/// Host-context keys that name an AI endpoint, checked in this order at every node.
pub const PREFERRED_ENDPOINT_KEYS: [&str; 4] = [
    "aiContentEndpoint",
    "aiCuratorEndpoint",
    "aiAssistantEndpoint",
    "aiPluginEndpoint",
];

/// Query-string parameters that override the endpoint, in priority order.
pub const QUERY_ENDPOINT_PARAMS: [&str; 2] = ["endpoint", "api"];

/// Default bound on how deep the context walk descends.
pub const DEFAULT_MAX_SEARCH_DEPTH: usize = 32;

/// Endpoint named by the location query, if any.
///
/// Accepts the query with or without its leading `?`. Only the first
/// occurrence of each parameter counts, and an empty value is treated as absent.
pub fn query_endpoint(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    QUERY_ENDPOINT_PARAMS.iter().find_map(|param| {
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == *param)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
    })
}

/// Depth-first search of the host context for a preferred endpoint key.
///
/// At each object node the preferred keys are checked first, in priority
/// order; only then are child objects and arrays visited, in insertion order.
/// The walk stops at the first match anywhere in the tree and gives up below
/// `max_depth`.
pub fn context_endpoint(context: &Value, max_depth: usize) -> Option<String> {
    search(context, 0, max_depth)
}

fn search(node: &Value, depth: usize, max_depth: usize) -> Option<String> {
    if depth > max_depth {
        return None;
    }
    match node {
        Value::Object(map) => {
            for key in PREFERRED_ENDPOINT_KEYS {
                if let Some(found) = node.get_str(key).filter(|s| !s.is_empty()) {
                    return Some(found.to_string());
                }
            }
            map.values()
                .find_map(|child| search(child, depth + 1, max_depth))
        }
        Value::Array(items) => items
            .iter()
            .find_map(|child| search(child, depth + 1, max_depth)),
        _ => None,
    }
}

/// Resolve the endpoint to use. An empty result means "unset".
pub fn resolve(current: &str, query: &str, context: &Value, max_depth: usize) -> String {
    if let Some(endpoint) = query_endpoint(query) {
        log::debug!("endpoint resolved from query string");
        return endpoint;
    }
    if let Some(endpoint) = context_endpoint(context, max_depth) {
        log::debug!("endpoint resolved from host context");
        return endpoint;
    }
    current.to_string()
}
