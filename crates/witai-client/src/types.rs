//! Request and response types for the Wit API.
//!
//! These types mirror the remote API's JSON contract. `is_custom` fields are
//! derived locally and never read from or written to the wire.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

// ─────────────────────────────────────────────────────────────────────────────
// Intents
// ─────────────────────────────────────────────────────────────────────────────

/// A user-goal classification Wit can detect from text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    /// Intent ID.
    pub id: String,
    /// Intent name, without the built-in prefix once normalized.
    pub name: String,
    /// Detection confidence. Only set on message results.
    #[serde(default)]
    pub confidence: f64,
    /// False for built-in intents.
    #[serde(skip)]
    pub is_custom: bool,
}

/// Body for creating an intent.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CreateIntentRequest {
    pub name: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Entities
// ─────────────────────────────────────────────────────────────────────────────

/// A named piece of structured information Wit extracts from text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity ID.
    pub id: String,
    /// Entity name, without the built-in prefix once normalized.
    pub name: String,
    /// False for built-in entities.
    #[serde(skip)]
    pub is_custom: bool,
    /// Role names.
    #[serde(default, deserialize_with = "role_names")]
    pub roles: Vec<String>,
    /// Lookup strategies, e.g. `free-text` or `keywords`.
    #[serde(default)]
    pub lookups: Vec<String>,
    /// Keyword definitions, usually `{"keyword": ..., "synonyms": [...]}`.
    #[serde(default)]
    pub keywords: Vec<serde_json::Value>,
}

/// Roles come back either as bare names or as `{"id", "name"}` objects.
#[derive(Deserialize)]
#[serde(untagged)]
enum RoleRepr {
    Name(String),
    Object { name: String },
}

fn role_names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let roles = Option::<Vec<RoleRepr>>::deserialize(deserializer)?;
    Ok(roles
        .unwrap_or_default()
        .into_iter()
        .map(|role| match role {
            RoleRepr::Name(name) | RoleRepr::Object { name } => name,
        })
        .collect())
}

/// Body for creating an entity. Collections are always sent, never null.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct EntityCreateRequest {
    pub name: String,
    pub roles: Vec<String>,
    pub lookups: Vec<String>,
    pub keywords: Vec<serde_json::Value>,
}

impl EntityCreateRequest {
    pub(crate) fn new(
        name: impl Into<String>,
        roles: Vec<String>,
        lookups: Option<Vec<String>>,
        keywords: Option<Vec<serde_json::Value>>,
    ) -> Self {
        Self {
            name: name.into(),
            roles,
            lookups: lookups.unwrap_or_default(),
            keywords: keywords.unwrap_or_default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Language
// ─────────────────────────────────────────────────────────────────────────────

/// Locales detected for a piece of text, best first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocaleDetectionResult {
    /// Candidate locales.
    #[serde(rename = "detected_locales")]
    pub locales: Vec<Locale>,
}

/// A single locale candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locale {
    /// Locale code, e.g. `fr_XX`.
    pub locale: String,
    /// Detection confidence.
    pub confidence: f64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Message
// ─────────────────────────────────────────────────────────────────────────────

/// Understanding of a single utterance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// The text that was analyzed.
    #[serde(default)]
    pub text: String,
    /// Detected intents, best first.
    #[serde(default)]
    pub intents: Vec<Intent>,
    /// Entity matches keyed by `name:role`.
    #[serde(default)]
    pub entities: HashMap<String, Vec<serde_json::Value>>,
    /// Trait values keyed by trait name.
    #[serde(default)]
    pub traits: HashMap<String, Vec<serde_json::Value>>,
}

impl MessageResponse {
    /// The highest-confidence intent, if any.
    pub fn top_intent(&self) -> Option<&Intent> {
        self.intents
            .iter()
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
    }
}
