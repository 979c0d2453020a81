//! Projects, tasks, and membership records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::access::Member;
use crate::id::{ProjectId, TaskId};
use crate::identity::Identity;

/// A collaborative project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier for this project
    pub id: ProjectId,
    /// Human-readable name
    pub name: String,
    /// URL-safe name used in links and notification payloads
    pub slug: String,
    /// Identity of the user who created and owns this project
    pub owner: Identity,
    /// When this project was created
    pub created_at: DateTime<Utc>,
    /// Last update time
    pub updated_at: DateTime<Utc>,
    /// Whether this project is active
    pub is_active: bool,

    /// Members of this project
    pub members: Vec<ProjectMember>,
    /// Tasks tracked under this project
    pub tasks: Vec<Task>,
}

impl Project {
    /// Create a project owned by `owner`, who is also seeded as its
    /// first member.
    pub fn new(name: impl Into<String>, slug: impl Into<String>, owner: Identity) -> Self {
        let now = Utc::now();
        Self {
            id: ProjectId::generate(),
            name: name.into(),
            slug: slug.into(),
            owner: owner.clone(),
            created_at: now,
            updated_at: now,
            is_active: true,
            members: vec![ProjectMember::new(owner, now)],
            tasks: Vec::new(),
        }
    }

    /// API path for this project, used as the notification link target.
    pub fn path(&self) -> String {
        format!("/api/v1/projects/{}", self.slug)
    }

    /// Membership rows in the form the access predicate consumes.
    pub fn member_refs(&self) -> Vec<Member> {
        self.members.iter().map(ProjectMember::member_ref).collect()
    }

    pub fn add_member(&mut self, member: ProjectMember) {
        self.updated_at = Utc::now();
        self.members.push(member);
    }

    pub fn add_task(&mut self, task: Task) {
        self.updated_at = Utc::now();
        self.tasks.push(task);
    }
}

/// One user's membership in a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMember {
    /// Numeric identifier, for rows that still carry one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    /// String-form UUID identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_uuid: Option<String>,
    /// When this user joined the project
    pub joined_at: DateTime<Utc>,
    /// Whether this membership is active
    pub is_active: bool,
}

impl ProjectMember {
    pub fn new(identity: Identity, joined_at: DateTime<Utc>) -> Self {
        let (user_id, user_uuid) = match identity {
            Identity::Numeric(id) => (Some(id), None),
            Identity::Uuid(uuid) => (None, Some(uuid)),
        };
        Self {
            user_id,
            user_uuid,
            joined_at,
            is_active: true,
        }
    }

    /// The identifier pair the access predicate matches against.
    pub fn member_ref(&self) -> Member {
        Member {
            id: self.user_id,
            uuid: self.user_uuid.clone(),
        }
    }
}

/// A unit of work tracked under a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: TaskId::generate(),
            name: name.into(),
            completed: false,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_project_seeds_owner_membership() {
        let owner = Identity::uuid("3c9f");
        let project = Project::new("Launch", "launch", owner.clone());

        assert_eq!(project.members.len(), 1);
        assert!(project.members[0].member_ref().matches(&owner));
    }

    #[test]
    fn path_uses_slug() {
        let project = Project::new("Launch Plan", "launch-plan", Identity::numeric(1));
        assert_eq!(project.path(), "/api/v1/projects/launch-plan");
    }

    #[test]
    fn member_refs_preserve_identifier_forms() {
        let mut project = Project::new("Launch", "launch", Identity::numeric(1));
        let joined_at = Utc::now();
        project.add_member(ProjectMember::new(Identity::uuid("abc"), joined_at));

        let refs = project.member_refs();
        assert_eq!(refs[0], Member::numeric(1));
        assert_eq!(refs[1], Member::uuid("abc"));
    }

    #[test]
    fn tasks_start_open() {
        let task = Task::new("Write brief");
        assert!(!task.completed);
    }
}
