//! Contact repository port - backend abstraction

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::domain::result::Result;
use crate::domain::Contact;

/// Status value the backend puts in a successful create response body
pub const STATUS_OK: u16 = 200;

/// Contacts backend abstraction
///
/// Each operation issues one request and returns the parsed response body.
/// Implementations must not retry; failures propagate to the caller.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Create a contact
    async fn create(&self, telefone: &str, nome: &str) -> Result<CreateContactResponse>;

    /// List all contacts in backend order
    async fn list(&self) -> Result<Vec<Contact>>;

    /// Delete the contact with this phone number
    async fn delete(&self, telefone: &str) -> Result<JsonValue>;

    /// Rename the contact with this phone number
    async fn update(&self, telefone: &str, nome: &str) -> Result<JsonValue>;
}

/// Response body of a create request
///
/// The backend reports success in the body (`"status": 200`), independent
/// of the HTTP status line. Both fields stay raw JSON so that any body the
/// backend sends parses; only a numeric 200 counts as success.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateContactResponse {
    #[serde(default)]
    pub status: Option<JsonValue>,
    #[serde(default)]
    pub data: Option<JsonValue>,
    /// Any other fields the backend sends (messages etc.)
    #[serde(flatten)]
    pub other: serde_json::Map<String, JsonValue>,
}

impl CreateContactResponse {
    /// Successful response carrying the created contact
    pub fn ok(contact: &Contact) -> Self {
        Self {
            status: Some(JsonValue::from(STATUS_OK)),
            data: serde_json::to_value(contact).ok(),
            other: serde_json::Map::new(),
        }
    }

    /// Response with a non-success status and a backend message
    pub fn rejected(status: impl Into<JsonValue>, message: &str) -> Self {
        let mut other = serde_json::Map::new();
        other.insert("mensagem".to_string(), JsonValue::from(message));
        Self {
            status: Some(status.into()),
            data: None,
            other,
        }
    }

    /// True only when the body's status field is the number 200
    pub fn is_ok(&self) -> bool {
        self.status.as_ref().and_then(JsonValue::as_f64) == Some(f64::from(STATUS_OK))
    }

    /// The created contact, when the response is a success
    ///
    /// `None` for non-success responses, and when `data` is missing or is
    /// not a contact object.
    pub fn created_contact(&self) -> Option<Contact> {
        if !self.is_ok() {
            return None;
        }
        self.data
            .clone()
            .and_then(|data| serde_json::from_value(data).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_response_ok() {
        let body = r#"{"status": 200, "data": {"id": 1, "nome": "Ana", "telefone": "111"}}"#;
        let response: CreateContactResponse = serde_json::from_str(body).unwrap();
        assert!(response.is_ok());
        assert_eq!(response.created_contact().unwrap().id, Some("1".to_string()));
    }

    #[test]
    fn test_create_response_keeps_other_fields() {
        let body = r#"{"status": 409, "mensagem": "Telefone já cadastrado"}"#;
        let response: CreateContactResponse = serde_json::from_str(body).unwrap();
        assert!(!response.is_ok());
        assert!(response.created_contact().is_none());
        assert_eq!(response.other["mensagem"], "Telefone já cadastrado");
    }

    #[test]
    fn test_create_response_without_status() {
        let response: CreateContactResponse = serde_json::from_str("{}").unwrap();
        assert!(!response.is_ok());
    }

    #[test]
    fn test_create_response_text_status_parses() {
        let body = r#"{"status": "erro", "data": "Telefone já cadastrado"}"#;
        let response: CreateContactResponse = serde_json::from_str(body).unwrap();
        assert!(!response.is_ok());
        assert!(response.created_contact().is_none());

        let body = r#"{"status": "200", "data": {"nome": "Ana", "telefone": "111"}}"#;
        let response: CreateContactResponse = serde_json::from_str(body).unwrap();
        assert!(!response.is_ok());
    }

    #[test]
    fn test_create_response_ok_with_partial_data() {
        let body = r#"{"status": 200, "data": {"id": 7}}"#;
        let response: CreateContactResponse = serde_json::from_str(body).unwrap();
        assert!(response.is_ok());
        assert!(response.created_contact().is_none());
    }

    #[test]
    fn test_ok_round_trips_contact() {
        let contact = Contact::new("111", "Ana").with_id("abc");
        let response = CreateContactResponse::ok(&contact);
        assert!(response.is_ok());
        assert_eq!(response.created_contact(), Some(contact));
    }
}
