//! In-memory contact repository
//!
//! Backs demo mode and tests. Behaves like the REST backend: assigns ids
//! on create, answers create with `status: 200`, and keys update/delete by
//! phone number. Every call is recorded in order.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value as JsonValue};
use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::Contact;
use crate::ports::{ContactRepository, CreateContactResponse};

/// A call made against the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryCall {
    Create { telefone: String, nome: String },
    List,
    Delete { telefone: String },
    Update { telefone: String, nome: String },
}

#[derive(Debug, Default)]
struct State {
    contacts: Vec<Contact>,
    calls: Vec<RepositoryCall>,
    failing_deletes: HashSet<String>,
    fail_all: bool,
}

/// In-memory implementation of [`ContactRepository`]
#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
    state: Mutex<State>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with contacts
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            state: Mutex::new(State {
                contacts,
                ..State::default()
            }),
        }
    }

    /// Make every delete of this phone number fail
    pub fn fail_delete_for(&self, telefone: &str) {
        self.lock().failing_deletes.insert(telefone.to_string());
    }

    /// Make every call fail as if the backend were unreachable
    pub fn set_unavailable(&self, unavailable: bool) {
        self.lock().fail_all = unavailable;
    }

    /// Snapshot of the stored contacts
    pub fn contacts(&self) -> Vec<Contact> {
        self.lock().contacts.clone()
    }

    /// Calls made so far, in order
    pub fn calls(&self) -> Vec<RepositoryCall> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        // A panic while holding the lock can only come from a test; keep going
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_available(state: &State) -> Result<()> {
        if state.fail_all {
            return Err(Error::http("Unable to connect to contacts backend"));
        }
        Ok(())
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn create(&self, telefone: &str, nome: &str) -> Result<CreateContactResponse> {
        let mut state = self.lock();
        state.calls.push(RepositoryCall::Create {
            telefone: telefone.to_string(),
            nome: nome.to_string(),
        });
        Self::check_available(&state)?;

        if state.contacts.iter().any(|c| c.telefone == telefone) {
            return Ok(CreateContactResponse::rejected(409, "Telefone já cadastrado"));
        }

        let contact = Contact::new(telefone, nome).with_id(Uuid::new_v4().to_string());
        state.contacts.push(contact.clone());
        Ok(CreateContactResponse::ok(&contact))
    }

    async fn list(&self) -> Result<Vec<Contact>> {
        let mut state = self.lock();
        state.calls.push(RepositoryCall::List);
        Self::check_available(&state)?;
        Ok(state.contacts.clone())
    }

    async fn delete(&self, telefone: &str) -> Result<JsonValue> {
        let mut state = self.lock();
        state.calls.push(RepositoryCall::Delete {
            telefone: telefone.to_string(),
        });
        Self::check_available(&state)?;

        if state.failing_deletes.contains(telefone) {
            return Err(Error::api("Failed to parse delete response: internal server error"));
        }

        let before = state.contacts.len();
        state.contacts.retain(|c| c.telefone != telefone);
        let removed = before - state.contacts.len();
        Ok(json!({ "status": 200, "removidos": removed }))
    }

    async fn update(&self, telefone: &str, nome: &str) -> Result<JsonValue> {
        let mut state = self.lock();
        state.calls.push(RepositoryCall::Update {
            telefone: telefone.to_string(),
            nome: nome.to_string(),
        });
        Self::check_available(&state)?;

        match state.contacts.iter_mut().find(|c| c.telefone == telefone) {
            Some(contact) => {
                contact.nome = nome.to_string();
                Ok(json!({ "status": 200, "data": contact.clone() }))
            }
            None => Ok(json!({ "status": 404, "mensagem": "Contato não encontrado" })),
        }
    }
}

/// Sample contacts for demo mode
pub fn generate_demo_contacts() -> Vec<Contact> {
    [
        ("11987654321", "Ana Silva"),
        ("11912345678", "Bruno Souza"),
        ("21998877665", "Carla Dias"),
        ("31988776655", "Daniel Almeida Santos"),
        ("41977665544", "Eduarda Lima"),
        ("51966554433", "Felipe Costa"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (telefone, nome))| Contact::new(telefone, nome).with_id((i + 1).to_string()))
    .collect()
}
