//! Snapshot of the host document context sent alongside a prompt.

use serde::Serialize;
use serde_json::Value;

/// Maximum number of UTF-16 code units of the host selection forwarded to the API.
pub const DEFAULT_SELECTION_LIMIT: usize = 4000;

/// Read-only projection of the host context, taken at submission time.
///
/// Fields the host did not supply are omitted from the serialized payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Value>,
    /// Host selection, truncated; empty when the host selection is not a string.
    pub selection: String,
    /// Only carried when the host metadata is an object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl ContextSnapshot {
    pub fn capture(context: &Value, selection_limit: usize) -> Self {
        let field = |key: &str| context.get(key).filter(|v| !v.is_null()).cloned();
        let selection = context
            .get("selection")
            .and_then(Value::as_str)
            .map(|s| truncate_utf16(s, selection_limit).to_string())
            .unwrap_or_default();
        let metadata = context.get("metadata").filter(|v| v.is_object()).cloned();

        Self {
            url: field("url"),
            path: field("path"),
            locale: field("locale"),
            selection,
            metadata,
        }
    }
}

/// Longest prefix of `s` spanning at most `limit` UTF-16 code units.
/// A surrogate pair straddling the limit is dropped whole.
fn truncate_utf16(s: &str, limit: usize) -> &str {
    let mut units = 0;
    for (index, c) in s.char_indices() {
        units += c.len_utf16();
        if units > limit {
            return &s[..index];
        }
    }
    s
}
