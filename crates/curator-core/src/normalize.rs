//! Response normalization.
//!
//! Maps an arbitrary JSON response onto an ordered list of [`ContentSection`]s.
//! Each canonical field is filled from an explicit, ordered list of source keys;
//! the first key holding a meaningful value wins.

use crate::json_ext::JsonExt;
use serde::Serialize;
use serde_json::Value;

/// Heading for the single section synthesized from a response without a `sections` array.
pub const FALLBACK_HEADING: &str = "Generated Content";

const SECTION_HEADING_KEYS: &[&str] = &["heading", "title"];
const SECTION_BODY_KEYS: &[&str] = &["body", "description", "summary"];
const FALLBACK_HEADING_KEYS: &[&str] = &["title", "headline", "heading"];
const FALLBACK_BODY_KEYS: &[&str] = &["summary", "description", "body"];
const BULLET_KEYS: &[&str] = &["bullets", "points", "list"];
const CTA_KEYS: &[&str] = &["cta", "callToAction"];
const IMAGE_KEYS: &[&str] = &["image", "visual"];
const FALLBACK_IMAGE_KEYS: &[&str] = &["image"];
const BULLET_TEXT_KEYS: &[&str] = &["text", "title"];
const CTA_LABEL_KEYS: &[&str] = &["label", "title", "text"];
const CTA_URL_KEYS: &[&str] = &["url", "href"];

/// A labeled hyperlink attached to a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub label: String,
    pub url: String,
}

/// Canonical unit of curated content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentSection {
    pub heading: String,
    pub body: String,
    /// Never contains empty or whitespace-only entries.
    pub bullets: Vec<String>,
    pub cta: Option<CallToAction>,
    /// Passed through untouched.
    pub image: Option<Value>,
}

/// Normalize a response into sections.
///
/// Non-object responses yield nothing. An object with a `sections` array yields
/// one section per element, in order; any other object yields exactly one
/// fallback section built from its top-level fields.
pub fn normalize(response: &Value) -> Vec<ContentSection> {
    if !response.is_object() {
        return Vec::new();
    }

    if let Some(sections) = response.get_array("sections") {
        return sections
            .iter()
            .enumerate()
            .map(|(index, section)| normalize_section(section, index))
            .collect();
    }

    vec![ContentSection {
        heading: text_field(response, FALLBACK_HEADING_KEYS)
            .unwrap_or_else(|| FALLBACK_HEADING.to_string()),
        body: text_field(response, FALLBACK_BODY_KEYS).unwrap_or_default(),
        bullets: normalize_bullets(response.first_truthy(BULLET_KEYS)),
        cta: normalize_cta(response.first_truthy(CTA_KEYS)),
        image: response.first_truthy(FALLBACK_IMAGE_KEYS).cloned(),
    }]
}

fn normalize_section(section: &Value, index: usize) -> ContentSection {
    ContentSection {
        heading: text_field(section, SECTION_HEADING_KEYS)
            .unwrap_or_else(|| format!("Section {}", index + 1)),
        body: text_field(section, SECTION_BODY_KEYS).unwrap_or_default(),
        bullets: normalize_bullets(section.first_truthy(BULLET_KEYS)),
        cta: normalize_cta(section.first_truthy(CTA_KEYS)),
        image: section.first_truthy(IMAGE_KEYS).cloned(),
    }
}

fn text_field(value: &Value, keys: &[&str]) -> Option<String> {
    value.first_truthy(keys).map(|v| v.coerce_string())
}

/// Normalize a bullet source into trimmed, non-empty strings.
///
/// Arrays map each element to its own text (or its `text`/`title` field when
/// the element is an object). A string is split into lines. Anything else
/// yields no bullets.
pub fn normalize_bullets(source: Option<&Value>) -> Vec<String> {
    match source {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::Object(_) => item.first_truthy(BULLET_TEXT_KEYS),
                Value::Array(_) => None,
                other => Some(other).filter(|v| v.is_truthy()),
            })
            .map(|item| item.coerce_string().trim().to_string())
            .filter(|item| !item.is_empty())
            .collect(),
        Some(Value::String(text)) => text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Normalize a call-to-action source.
///
/// Requires an object with both a label-like and a url-like field set.
pub fn normalize_cta(source: Option<&Value>) -> Option<CallToAction> {
    let cta = source.filter(|v| v.is_object())?;
    let label = cta.first_truthy(CTA_LABEL_KEYS)?;
    let url = cta.first_truthy(CTA_URL_KEYS)?;
    Some(CallToAction {
        label: label.coerce_string(),
        url: url.coerce_string(),
    })
}
