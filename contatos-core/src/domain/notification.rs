//! User-facing notifications
//!
//! Every contact action reports at most one notification. The copy follows
//! the Portuguese wording shown to users of the web client.

use serde::{Deserialize, Serialize};

/// Outcome category of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A single user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }

    pub fn contact_added() -> Self {
        Self::success("Contato adicionado", "O novo contato foi adicionado com sucesso.")
    }

    pub fn contact_add_failed() -> Self {
        Self::error("Erro ao adicionar contato", "O contato não foi adicionado.")
    }

    pub fn contact_updated() -> Self {
        Self::success("Contato atualizado", "O contato foi atualizado com sucesso.")
    }

    pub fn contact_update_failed() -> Self {
        Self::error("Erro ao atualizar contato", "O contato não foi atualizado com sucesso.")
    }

    pub fn contact_removed() -> Self {
        Self::success("Contato removido", "O contato foi removido com sucesso.")
    }

    pub fn contacts_removed(count: usize) -> Self {
        Self::success(
            "Contatos removidos",
            format!("{} contatos foram removidos com sucesso.", count),
        )
    }

    pub fn contacts_remove_failed() -> Self {
        Self::error("Erro ao remover contatos", "Alguns contatos não puderam ser removidos.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contacts_removed_counts() {
        let n = Notification::contacts_removed(3);
        assert_eq!(n.kind, NotificationKind::Success);
        assert_eq!(n.description, "3 contatos foram removidos com sucesso.");
    }

    #[test]
    fn test_add_and_update_copy_differ() {
        assert_eq!(Notification::contact_added().title, "Contato adicionado");
        assert_eq!(Notification::contact_updated().title, "Contato atualizado");
        assert_eq!(
            Notification::contact_update_failed().description,
            "O contato não foi atualizado com sucesso."
        );
        assert!(Notification::contact_add_failed().is_error());
    }

    #[test]
    fn test_serializes_kind_lowercase() {
        let json = serde_json::to_value(Notification::contacts_remove_failed()).unwrap();
        assert_eq!(json["kind"], "error");
    }
}
