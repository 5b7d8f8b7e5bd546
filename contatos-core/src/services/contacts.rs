//! Contact service - local contact list and the actions on it
//!
//! Holds the ordered contact list shown to the user. The list is refreshed
//! from the repository and updated locally after each successful action.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::domain::{filter_contacts, Contact, Notification};
use crate::ports::ContactRepository;
use crate::services::bulk_delete::delete_sequentially;

/// Outcome of a user action
///
/// Failures caught at the action boundary still produce an outcome: an
/// error notification plus the underlying cause for the event log.
#[derive(Debug, Clone, Serialize)]
pub struct ActionOutcome {
    /// Message to show the user, if any
    pub notification: Option<Notification>,
    /// Number of contacts added, updated or removed
    pub affected: usize,
    /// Underlying error, kept out of the notification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ActionOutcome {
    fn done(notification: Notification, affected: usize) -> Self {
        Self {
            notification: Some(notification),
            affected,
            error: None,
        }
    }

    fn silent() -> Self {
        Self {
            notification: None,
            affected: 0,
            error: None,
        }
    }

    fn failed(notification: Notification, error: &Error) -> Self {
        Self {
            notification: Some(notification),
            affected: 0,
            error: Some(error.to_string()),
        }
    }

    /// True when the action reported an error to the user
    pub fn is_failure(&self) -> bool {
        self.notification.as_ref().is_some_and(Notification::is_error)
    }

    /// True when the backend answered but the action changed nothing and
    /// reported nothing (e.g. a create body without status 200)
    pub fn is_ignored(&self) -> bool {
        self.notification.is_none() && self.error.is_none()
    }
}

/// Contact service: list state plus repository actions
pub struct ContactService {
    repository: Arc<dyn ContactRepository>,
    contacts: Vec<Contact>,
}

impl ContactService {
    /// Create a service with an empty local list
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self {
            repository,
            contacts: Vec::new(),
        }
    }

    /// Current local contacts, in backend order
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Replace the local list with the backend's
    ///
    /// Errors propagate; the local list is kept as it was.
    pub async fn refresh(&mut self) -> Result<usize> {
        self.contacts = self.repository.list().await?;
        Ok(self.contacts.len())
    }

    /// Contacts visible for a search term
    pub fn filtered(&self, term: &str) -> Vec<&Contact> {
        filter_contacts(&self.contacts, term)
    }

    /// Whether a bulk delete is offered for this term
    ///
    /// Only when the term narrows the list: something matches but not
    /// everything.
    pub fn can_bulk_delete(&self, term: &str) -> bool {
        let matched = self.filtered(term).len();
        matched > 0 && matched < self.contacts.len()
    }

    /// Add a contact
    ///
    /// The local list only grows when the response body reports status 200.
    /// Any other body is ignored without a notification. A success without a
    /// usable `data` contact appends the submitted fields with no id.
    pub async fn add_contact(&mut self, telefone: &str, nome: &str) -> Result<ActionOutcome> {
        let (telefone, nome) = validate_fields(telefone, nome)?;

        match self.repository.create(telefone, nome).await {
            Ok(response) if response.is_ok() => {
                let contact = response
                    .created_contact()
                    .unwrap_or_else(|| Contact::new(telefone, nome));
                self.contacts.push(contact);
                Ok(ActionOutcome::done(Notification::contact_added(), 1))
            }
            Ok(_) => Ok(ActionOutcome::silent()),
            Err(e) => Ok(ActionOutcome::failed(Notification::contact_add_failed(), &e)),
        }
    }

    /// Rename the contact with this phone number
    pub async fn edit_contact(&mut self, telefone: &str, nome: &str) -> Result<ActionOutcome> {
        let (telefone, nome) = validate_fields(telefone, nome)?;

        match self.repository.update(telefone, nome).await {
            Ok(_) => {
                let mut affected = 0;
                for contact in self.contacts.iter_mut().filter(|c| c.telefone == telefone) {
                    contact.nome = nome.to_string();
                    affected += 1;
                }
                Ok(ActionOutcome::done(Notification::contact_updated(), affected))
            }
            Err(e) => Ok(ActionOutcome::failed(Notification::contact_update_failed(), &e)),
        }
    }

    /// Delete the contact with this phone number
    ///
    /// Errors propagate to the caller; the local list is only touched after
    /// the backend call succeeds.
    pub async fn delete_contact(&mut self, telefone: &str) -> Result<ActionOutcome> {
        self.repository.delete(telefone).await?;

        let before = self.contacts.len();
        self.contacts.retain(|c| c.telefone != telefone);
        Ok(ActionOutcome::done(
            Notification::contact_removed(),
            before - self.contacts.len(),
        ))
    }

    /// Delete every contact matching the search term
    ///
    /// All-or-nothing locally: on success the whole filtered set leaves the
    /// list in one update, on any failure the list is left untouched and a
    /// single error notification is reported.
    pub async fn bulk_delete_filtered<F>(&mut self, term: &str, on_deleted: F) -> Result<ActionOutcome>
    where
        F: FnMut(&Contact),
    {
        let targets: Vec<Contact> = self.filtered(term).into_iter().cloned().collect();
        if targets.is_empty() {
            return Ok(ActionOutcome::silent());
        }

        match delete_sequentially(self.repository.as_ref(), &targets, on_deleted).await {
            Ok(result) => {
                self.contacts.retain(|c| !targets.contains(c));
                Ok(ActionOutcome::done(
                    Notification::contacts_removed(result.deleted),
                    result.deleted,
                ))
            }
            Err(e) => Ok(ActionOutcome::failed(Notification::contacts_remove_failed(), &e)),
        }
    }
}

/// Required-field rules of the contact form
fn validate_fields<'a>(telefone: &'a str, nome: &'a str) -> Result<(&'a str, &'a str)> {
    let telefone = telefone.trim();
    let nome = nome.trim();
    if nome.is_empty() {
        return Err(Error::validation("Nome é obrigatório"));
    }
    if telefone.is_empty() {
        return Err(Error::validation("Telefone é obrigatório"));
    }
    Ok((telefone, nome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryContactRepository;
    use crate::domain::NotificationKind;

    fn service_with(contacts: Vec<Contact>) -> (Arc<InMemoryContactRepository>, ContactService) {
        let repo = Arc::new(InMemoryContactRepository::with_contacts(contacts));
        let service = ContactService::new(repo.clone());
        (repo, service)
    }

    #[tokio::test]
    async fn test_refresh_replaces_local_list() {
        let (_repo, mut service) = service_with(vec![Contact::new("111", "Ana Silva")]);
        assert!(service.is_empty());
        assert_eq!(service.refresh().await.unwrap(), 1);
        assert_eq!(service.contacts()[0].nome, "Ana Silva");
    }

    #[tokio::test]
    async fn test_add_contact_appends_on_status_200() {
        let (_repo, mut service) = service_with(vec![]);
        let outcome = service.add_contact(" 111 ", "Ana Silva").await.unwrap();
        assert_eq!(outcome.affected, 1);
        assert_eq!(outcome.notification, Some(Notification::contact_added()));
        assert_eq!(service.contacts()[0].telefone, "111");
        assert!(service.contacts()[0].id.is_some());
    }

    #[tokio::test]
    async fn test_add_contact_non_200_is_silent() {
        let (_repo, mut service) = service_with(vec![Contact::new("111", "Ana")]);
        service.refresh().await.unwrap();
        let outcome = service.add_contact("111", "Ana Duplicada").await.unwrap();
        assert!(outcome.notification.is_none());
        assert!(outcome.is_ignored());
        assert!(!outcome.is_failure());
        assert_eq!(service.len(), 1);
    }

    #[tokio::test]
    async fn test_add_contact_requires_fields() {
        let (repo, mut service) = service_with(vec![]);
        assert!(matches!(
            service.add_contact("111", "  ").await,
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            service.add_contact("", "Ana").await,
            Err(Error::Validation(_))
        ));
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn test_add_contact_network_error_notifies() {
        let (repo, mut service) = service_with(vec![]);
        repo.set_unavailable(true);
        let outcome = service.add_contact("111", "Ana").await.unwrap();
        assert!(outcome.is_failure());
        assert!(outcome.error.is_some());
        assert!(service.is_empty());
    }

    #[tokio::test]
    async fn test_edit_contact_renames_locally() {
        let (repo, mut service) = service_with(vec![Contact::new("111", "Ana")]);
        service.refresh().await.unwrap();
        let outcome = service.edit_contact("111", "Ana Maria").await.unwrap();
        assert_eq!(outcome.affected, 1);
        assert_eq!(service.contacts()[0].nome, "Ana Maria");
        assert_eq!(repo.contacts()[0].nome, "Ana Maria");
    }

    #[tokio::test]
    async fn test_edit_contact_error_keeps_local_list() {
        let (repo, mut service) = service_with(vec![Contact::new("111", "Ana")]);
        service.refresh().await.unwrap();
        repo.set_unavailable(true);

        let outcome = service.edit_contact("111", "Ana Maria").await.unwrap();

        assert!(outcome.is_failure());
        assert!(!outcome.is_ignored());
        assert_eq!(outcome.affected, 0);
        assert_eq!(outcome.notification, Some(Notification::contact_update_failed()));
        assert!(outcome.error.unwrap().contains("Unable to connect"));
        assert_eq!(service.contacts(), &[Contact::new("111", "Ana")]);
    }

    #[tokio::test]
    async fn test_delete_contact_removes_by_phone() {
        let (_repo, mut service) = service_with(vec![
            Contact::new("111", "Ana"),
            Contact::new("222", "Bob"),
        ]);
        service.refresh().await.unwrap();
        let outcome = service.delete_contact("111").await.unwrap();
        assert_eq!(outcome.affected, 1);
        assert_eq!(service.contacts(), &[Contact::new("222", "Bob")]);
    }

    #[tokio::test]
    async fn test_delete_contact_error_propagates() {
        let (repo, mut service) = service_with(vec![Contact::new("111", "Ana")]);
        service.refresh().await.unwrap();
        repo.fail_delete_for("111");
        assert!(service.delete_contact("111").await.is_err());
        assert_eq!(service.len(), 1);
    }

    #[tokio::test]
    async fn test_can_bulk_delete_only_when_narrowed() {
        let (_repo, mut service) = service_with(vec![
            Contact::new("111", "Ana Silva"),
            Contact::new("222", "Bob Souza"),
        ]);
        service.refresh().await.unwrap();
        assert!(service.can_bulk_delete("as"));
        assert!(!service.can_bulk_delete(""));
        assert!(!service.can_bulk_delete("zzz"));
    }

    #[tokio::test]
    async fn test_bulk_delete_success_removes_filtered_set() {
        let (repo, mut service) = service_with(vec![
            Contact::new("111", "Ana Silva"),
            Contact::new("222", "Bob Souza"),
            Contact::new("333", "Alice Santos"),
        ]);
        service.refresh().await.unwrap();

        let outcome = service.bulk_delete_filtered("as", |_| {}).await.unwrap();

        assert_eq!(outcome.affected, 2);
        let notification = outcome.notification.unwrap();
        assert_eq!(notification.kind, NotificationKind::Success);
        assert_eq!(notification.description, "2 contatos foram removidos com sucesso.");
        assert_eq!(service.contacts(), &[Contact::new("222", "Bob Souza")]);
        assert_eq!(repo.contacts(), vec![Contact::new("222", "Bob Souza")]);
    }

    #[tokio::test]
    async fn test_bulk_delete_failure_keeps_local_list() {
        let (repo, mut service) = service_with(vec![
            Contact::new("111", "Ana Silva"),
            Contact::new("222", "Bob Souza"),
            Contact::new("333", "Alice Santos"),
        ]);
        service.refresh().await.unwrap();
        repo.fail_delete_for("333");

        let outcome = service.bulk_delete_filtered("as", |_| {}).await.unwrap();

        assert!(outcome.is_failure());
        assert_eq!(outcome.affected, 0);
        assert_eq!(
            outcome.notification,
            Some(Notification::contacts_remove_failed())
        );
        // Local list untouched even though "111" is gone on the backend
        assert_eq!(service.len(), 3);
        assert_eq!(repo.contacts().len(), 2);
    }

    #[tokio::test]
    async fn test_bulk_delete_nothing_matched() {
        let (repo, mut service) = service_with(vec![Contact::new("111", "Ana Silva")]);
        service.refresh().await.unwrap();
        let outcome = service.bulk_delete_filtered("zzz", |_| {}).await.unwrap();
        assert!(outcome.notification.is_none());
        assert_eq!(repo.calls().len(), 1); // just the refresh
    }
}
