//! User notifications
//!
//! Notifications are stored fully rendered: the message line, the
//! notifier payload shown beside it, and the link the client follows.

use chrono::{DateTime, Utc};
use rand::{Rng, distributions::Alphanumeric};
use serde::{Deserialize, Serialize};

use crate::id::{NotificationId, UserId};
use crate::project::Project;

/// Length of the per-notification signature token.
const SIGNATURE_LEN: usize = 64;

/// Profile payload shown next to a notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifierData {
    pub name: String,
    pub username: String,
    pub avatar_path: Option<String>,
}

/// A notification delivered to one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    /// User this notification belongs to
    pub recipient: UserId,
    /// Rendered message line
    pub message: String,
    /// Who triggered the notification
    pub notifier: NotifierData,
    /// Where the client navigates on click
    pub link: String,
    /// Set once the recipient has seen it
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    /// Opaque token clients echo back when acknowledging
    pub signature: String,
}

impl Notification {
    /// Notification telling `recipient` they were invited to a project.
    pub fn project_invitation(
        recipient: UserId,
        project: &Project,
        notifier: NotifierData,
    ) -> Self {
        Self {
            id: NotificationId::generate(),
            recipient,
            message: format!("Sent you a project {} invitation", project.name),
            notifier,
            link: project.path(),
            read_at: None,
            created_at: Utc::now(),
            signature: random_signature(),
        }
    }

    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }

    pub fn mark_read(&mut self, now: DateTime<Utc>) {
        self.read_at.get_or_insert(now);
    }
}

fn random_signature() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SIGNATURE_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Identity;
    use pretty_assertions::assert_eq;

    fn notifier() -> NotifierData {
        NotifierData {
            name: "Ada".to_string(),
            username: "ada".to_string(),
            avatar_path: None,
        }
    }

    #[test]
    fn invitation_renders_message_and_link() {
        let project = Project::new("Apollo", "apollo", Identity::numeric(1));
        let notification =
            Notification::project_invitation(UserId::generate(), &project, notifier());

        assert_eq!(notification.message, "Sent you a project Apollo invitation");
        assert_eq!(notification.link, "/api/v1/projects/apollo");
        assert!(!notification.is_read());
        assert_eq!(notification.signature.len(), SIGNATURE_LEN);
    }

    #[test]
    fn mark_read_is_sticky() {
        let project = Project::new("Apollo", "apollo", Identity::numeric(1));
        let mut notification =
            Notification::project_invitation(UserId::generate(), &project, notifier());

        let first = Utc::now();
        notification.mark_read(first);
        notification.mark_read(Utc::now());

        assert_eq!(notification.read_at, Some(first));
    }

    #[test]
    fn signatures_are_unique_per_notification() {
        let project = Project::new("Apollo", "apollo", Identity::numeric(1));
        let a = Notification::project_invitation(UserId::generate(), &project, notifier());
        let b = Notification::project_invitation(UserId::generate(), &project, notifier());

        assert_ne!(a.signature, b.signature);
    }
}
