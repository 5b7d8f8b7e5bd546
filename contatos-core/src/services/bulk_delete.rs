//! Bulk delete orchestration
//!
//! Deletes a set of contacts one at a time, in order, stopping at the first
//! failure. Calls are never issued concurrently.

use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::domain::Contact;
use crate::ports::ContactRepository;

/// Result of a completed bulk delete
#[derive(Debug, Clone, Serialize)]
pub struct BulkDeleteResult {
    /// Number of contacts deleted on the backend
    pub deleted: usize,
}

/// Delete every target sequentially
///
/// `on_deleted` runs after each successful delete (progress reporting).
/// On the first failure the loop stops and an [`Error::BulkDelete`] is
/// returned; contacts deleted before the failure stay deleted on the
/// backend.
pub async fn delete_sequentially<R, F>(
    repository: &R,
    targets: &[Contact],
    mut on_deleted: F,
) -> Result<BulkDeleteResult>
where
    R: ContactRepository + ?Sized,
    F: FnMut(&Contact),
{
    let total = targets.len();

    for (deleted, contact) in targets.iter().enumerate() {
        if let Err(e) = repository.delete(&contact.telefone).await {
            return Err(Error::BulkDelete {
                deleted,
                total,
                reason: e.to_string(),
            });
        }
        on_deleted(contact);
    }

    Ok(BulkDeleteResult { deleted: total })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryContactRepository, RepositoryCall};

    fn contacts() -> Vec<Contact> {
        vec![
            Contact::new("111", "Ana Silva"),
            Contact::new("222", "Bob Souza"),
            Contact::new("333", "Caio Lima"),
        ]
    }

    #[tokio::test]
    async fn test_deletes_all_in_order() {
        let repo = InMemoryContactRepository::with_contacts(contacts());
        let mut seen = Vec::new();

        let result = delete_sequentially(&repo, &contacts(), |c| seen.push(c.telefone.clone()))
            .await
            .unwrap();

        assert_eq!(result.deleted, 3);
        assert_eq!(seen, vec!["111", "222", "333"]);
        assert!(repo.contacts().is_empty());
    }

    #[tokio::test]
    async fn test_stops_at_first_failure() {
        let repo = InMemoryContactRepository::with_contacts(contacts());
        repo.fail_delete_for("222");

        let err = delete_sequentially(&repo, &contacts(), |_| {})
            .await
            .unwrap_err();

        match err {
            Error::BulkDelete { deleted, total, .. } => {
                assert_eq!(deleted, 1);
                assert_eq!(total, 3);
            }
            other => panic!("unexpected error: {other}"),
        }

        // "333" was never attempted
        assert_eq!(
            repo.calls(),
            vec![
                RepositoryCall::Delete { telefone: "111".to_string() },
                RepositoryCall::Delete { telefone: "222".to_string() },
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_targets_make_no_calls() {
        let repo = InMemoryContactRepository::new();
        let result = delete_sequentially(&repo, &[], |_| {}).await.unwrap();
        assert_eq!(result.deleted, 0);
        assert!(repo.calls().is_empty());
    }
}
