//! Contact domain model

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A phone/name record managed by the client
///
/// `telefone` is the business key: the backend identifies contacts for
/// update and delete by phone number, not by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Server-assigned identifier (API may return a number or a string)
    #[serde(
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub nome: String,
    pub telefone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Contact {
    /// Create a contact that has not been assigned an id yet
    pub fn new(telefone: impl Into<String>, nome: impl Into<String>) -> Self {
        Self {
            id: None,
            nome: nome.into(),
            telefone: telefone.into(),
            email: None,
        }
    }

    /// Set the server-assigned id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// First letter of each space-separated word of the name, lowercased
    ///
    /// Consecutive spaces produce empty words, which contribute nothing.
    pub fn initials(&self) -> String {
        self.nome
            .split(' ')
            .filter_map(|word| word.chars().next())
            .collect::<String>()
            .to_lowercase()
    }

    /// Check whether an already-lowercased search term matches this contact
    pub fn matches_lowercase(&self, term: &str) -> bool {
        self.telefone.to_lowercase().contains(term)
            || self.nome.to_lowercase().contains(term)
            || self.initials().contains(term)
    }
}

/// Deserialize optional ID that can be number or string
fn deserialize_optional_id<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    let value: Option<JsonValue> = Option::deserialize(deserializer)?;
    match value {
        Some(JsonValue::Number(n)) => Ok(Some(n.to_string())),
        Some(JsonValue::String(s)) => Ok(Some(s)),
        Some(JsonValue::Null) | None => Ok(None),
        _ => Err(D::Error::custom("expected number or string for id")),
    }
}
