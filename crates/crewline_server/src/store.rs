//! In-memory registry (runtime state)

use chrono::{DateTime, Utc};
use dashmap::DashMap;

use crewline_billing::Subscription;
use crewline_core::{
    CoreError, Identity, Notification, NotificationId, Project, ProjectId, ProjectMember, Result,
    Task, UserId,
};

use crate::models::ServerUser;

/// In-memory backing store for the API.
#[derive(Debug, Default)]
pub struct Registry {
    /// All users indexed by ID
    users: DashMap<UserId, ServerUser>,
    /// Username lookup for login
    usernames: DashMap<String, UserId>,
    /// All projects indexed by ID
    projects: DashMap<ProjectId, Project>,
    /// Notifications indexed by ID
    notifications: DashMap<NotificationId, Notification>,
    /// Recipient index over notifications
    user_notifications: DashMap<UserId, Vec<NotificationId>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user
    pub fn register_user(&self, user: ServerUser) {
        self.usernames
            .insert(user.user.username.clone(), user.id());
        self.users.insert(user.id(), user);
    }

    /// Get a user by ID
    pub fn user(&self, id: &UserId) -> Option<ServerUser> {
        self.users.get(id).map(|entry| entry.clone())
    }

    /// Get a user by username
    pub fn user_by_username(&self, username: &str) -> Option<ServerUser> {
        let id = *self.usernames.get(username)?;
        self.user(&id)
    }

    /// Find the user an identity value refers to, in either form
    pub fn find_user_by_identity(&self, identity: &Identity) -> Option<ServerUser> {
        self.users
            .iter()
            .find(|entry| {
                let user = entry.value();
                user.identity() == *identity
                    || user
                        .user
                        .legacy_id
                        .is_some_and(|id| *identity == Identity::Numeric(id))
            })
            .map(|entry| entry.value().clone())
    }

    /// All users, for the admin listing
    pub fn all_users(&self) -> Vec<ServerUser> {
        self.users.iter().map(|entry| entry.clone()).collect()
    }

    /// Apply a change to a user's subscription record
    pub fn update_subscription(
        &self,
        user_id: &UserId,
        update: impl FnOnce(&mut Option<Subscription>),
    ) -> Result<()> {
        let mut user = self.users.get_mut(user_id).ok_or_else(|| CoreError::UserNotFound {
            id: user_id.to_string(),
        })?;
        update(&mut user.subscription);
        Ok(())
    }

    /// Register a project
    pub fn register_project(&self, project: Project) {
        self.projects.insert(project.id, project);
    }

    /// Get a project by ID
    pub fn project(&self, id: &ProjectId) -> Option<Project> {
        self.projects.get(id).map(|entry| entry.clone())
    }

    /// All projects
    pub fn projects(&self) -> Vec<Project> {
        self.projects.iter().map(|entry| entry.clone()).collect()
    }

    /// Add a member to a project
    pub fn add_member(&self, id: &ProjectId, member: ProjectMember) -> Result<()> {
        let mut project = self.projects.get_mut(id).ok_or_else(|| CoreError::ProjectNotFound {
            id: id.to_string(),
        })?;
        project.add_member(member);
        Ok(())
    }

    /// Add a task to a project
    pub fn add_task(&self, id: &ProjectId, task: Task) -> Result<()> {
        let mut project = self.projects.get_mut(id).ok_or_else(|| CoreError::ProjectNotFound {
            id: id.to_string(),
        })?;
        project.add_task(task);
        Ok(())
    }

    /// Remove a project
    pub fn remove_project(&self, id: &ProjectId) -> Result<()> {
        self.projects
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| CoreError::ProjectNotFound { id: id.to_string() })
    }

    /// Store a notification and index it under its recipient
    pub fn push_notification(&self, notification: Notification) {
        self.user_notifications
            .entry(notification.recipient)
            .or_default()
            .push(notification.id);
        self.notifications.insert(notification.id, notification);
    }

    /// A user's notifications, newest first
    pub fn notifications_for(&self, user_id: &UserId) -> Vec<Notification> {
        let Some(ids) = self.user_notifications.get(user_id) else {
            return Vec::new();
        };
        ids.iter()
            .rev()
            .filter_map(|id| self.notifications.get(id).map(|entry| entry.clone()))
            .collect()
    }

    /// Mark one of a user's notifications as read
    pub fn mark_notification_read(
        &self,
        user_id: &UserId,
        id: &NotificationId,
        now: DateTime<Utc>,
    ) -> Result<Notification> {
        let mut notification =
            self.notifications
                .get_mut(id)
                .ok_or_else(|| CoreError::NotificationNotFound {
                    id: id.to_string(),
                })?;

        if notification.recipient != *user_id {
            return Err(CoreError::NotificationNotFound { id: id.to_string() });
        }

        notification.mark_read(now);
        Ok(notification.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crewline_core::NotifierData;

    fn notifier() -> NotifierData {
        NotifierData {
            name: "Ada".to_string(),
            username: "ada".to_string(),
            avatar_path: None,
        }
    }

    #[test]
    fn test_project_registry() {
        let registry = Registry::new();
        let owner = Identity::uuid("3c9f");

        let project = Project::new("Test Project", "test-project", owner);
        let project_id = project.id;

        // Register project
        registry.register_project(project);

        // Should be able to retrieve it
        assert!(registry.project(&project_id).is_some());

        // Membership updates land in the stored copy
        registry
            .add_member(&project_id, ProjectMember::new(Identity::numeric(7), Utc::now()))
            .unwrap();
        assert_eq!(registry.project(&project_id).unwrap().members.len(), 2);

        // Remove it
        registry.remove_project(&project_id).unwrap();

        // Should be gone
        assert!(registry.project(&project_id).is_none());
        assert!(registry.remove_project(&project_id).is_err());
    }

    #[test]
    fn notifications_are_indexed_per_recipient() {
        let registry = Registry::new();
        let recipient = UserId::generate();
        let other = UserId::generate();
        let project = Project::new("Apollo", "apollo", Identity::numeric(1));

        let first = Notification::project_invitation(recipient, &project, notifier());
        let second = Notification::project_invitation(recipient, &project, notifier());
        let second_id = second.id;

        registry.push_notification(first);
        registry.push_notification(second);

        let listed = registry.notifications_for(&recipient);
        assert_eq!(listed.len(), 2);
        // Newest first
        assert_eq!(listed[0].id, second_id);

        assert!(registry.notifications_for(&other).is_empty());
    }

    #[test]
    fn reading_anothers_notification_is_not_found() {
        let registry = Registry::new();
        let recipient = UserId::generate();
        let intruder = UserId::generate();
        let project = Project::new("Apollo", "apollo", Identity::numeric(1));

        let notification = Notification::project_invitation(recipient, &project, notifier());
        let id = notification.id;
        registry.push_notification(notification);

        assert!(registry.mark_notification_read(&intruder, &id, Utc::now()).is_err());

        let read = registry
            .mark_notification_read(&recipient, &id, Utc::now())
            .unwrap();
        assert!(read.is_read());
    }
}
