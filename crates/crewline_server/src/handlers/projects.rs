//! Project handlers
//!
//! The board view takes its checked identity from the route parameter:
//! `access` decides whether the request is allowed at all, `owner`
//! decides how much of the project is included in the response.

use axum::extract::{Json, Path, State};
use axum::{Extension, http::StatusCode};
use chrono::Utc;
use crewline_api::{
    ApiError,
    requests::{AddMemberRequest, CreateProjectRequest, CreateTaskRequest},
    responses::{
        ProjectMemberResponse, ProjectResponse, ProjectWithMembersResponse, TaskResponse,
    },
};
use crewline_core::{
    AccessResult, Identity, Notification, Project, ProjectId, ProjectMember, Task,
    evaluate_access, evaluate_admin_access,
};

use crate::{middleware::AuthedUser, state::AppState};

fn project_response(project: &Project) -> ProjectResponse {
    ProjectResponse {
        id: project.id,
        name: project.name.clone(),
        slug: project.slug.clone(),
        owner: project.owner.clone(),
        member_count: project.members.len() as u32,
        task_count: project.tasks.len() as u32,
        is_active: project.is_active,
        created_at: project.created_at,
        updated_at: project.updated_at,
    }
}

fn member_response(member: &ProjectMember) -> ProjectMemberResponse {
    ProjectMemberResponse {
        id: member.user_id,
        uuid: member.user_uuid.clone(),
        joined_at: member.joined_at,
        is_active: member.is_active,
    }
}

/// Identity route parameters accept either identifier form; digit-only
/// values normalize to the numeric form.
fn identity_from_param(raw: &str) -> Identity {
    raw.parse::<u64>()
        .map(Identity::Numeric)
        .unwrap_or_else(|_| Identity::uuid(raw))
}

fn load_project(state: &AppState, raw_id: &str) -> Result<Project, ApiError> {
    let id = ProjectId::parse(raw_id)?;
    state
        .registry
        .project(&id)
        .ok_or_else(|| ApiError::not_found("project", id.to_string()))
}

/// Owner-only actions: ownership or the admin bypass, membership does
/// not qualify.
fn require_owner(project: &Project, session: &AuthedUser, resource: &str) -> Result<(), ApiError> {
    let standing = evaluate_access(&session.identity(), None, &project.owner, session.is_admin);
    if standing.owner || evaluate_admin_access(session.is_admin).access {
        Ok(())
    } else {
        Err(ApiError::forbidden(resource))
    }
}

/// Create a project; the creator becomes owner and first member
pub async fn create(
    State(state): State<AppState>,
    Extension(session): Extension<AuthedUser>,
    Json(request): Json<CreateProjectRequest>,
) -> Result<Json<ProjectResponse>, ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::validation("Project name must not be empty"));
    }
    if request.slug.trim().is_empty() {
        return Err(ApiError::validation("Project slug must not be empty"));
    }

    let project = Project::new(request.name, request.slug, session.identity());
    let response = project_response(&project);
    state.registry.register_project(project);

    Ok(Json(response))
}

/// List projects the session user owns or belongs to
pub async fn list(
    State(state): State<AppState>,
    Extension(session): Extension<AuthedUser>,
) -> Result<Json<Vec<ProjectResponse>>, ApiError> {
    let identity = session.identity();

    let projects = state
        .registry
        .projects()
        .into_iter()
        .filter(|project| {
            project.owner == identity
                || project
                    .member_refs()
                    .iter()
                    .any(|member| member.matches(&identity))
        })
        .map(|project| project_response(&project))
        .collect();

    Ok(Json(projects))
}

/// Project as it appears on `identity`'s board
pub async fn board_view(
    State(state): State<AppState>,
    Extension(session): Extension<AuthedUser>,
    Path((identity, project_id)): Path<(String, String)>,
) -> Result<Json<ProjectWithMembersResponse>, ApiError> {
    let checked = identity_from_param(&identity);
    let project = load_project(&state, &project_id)?;
    let members = project.member_refs();

    let viewer = evaluate_access(&checked, Some(&members), &session.identity(), session.is_admin);
    if !viewer.access {
        return Err(ApiError::forbidden("project"));
    }

    // Member rows are owner/admin detail
    let members = (viewer.owner || session.is_admin)
        .then(|| project.members.iter().map(member_response).collect());

    Ok(Json(ProjectWithMembersResponse {
        project: project_response(&project),
        members,
        viewer,
    }))
}

/// Raw access evaluation for one identity against a project
pub async fn member_access(
    State(state): State<AppState>,
    Extension(session): Extension<AuthedUser>,
    Path((project_id, identity)): Path<(String, String)>,
) -> Result<Json<AccessResult>, ApiError> {
    let project = load_project(&state, &project_id)?;
    let members = project.member_refs();
    let checked = identity_from_param(&identity);

    Ok(Json(evaluate_access(
        &checked,
        Some(&members),
        &session.identity(),
        session.is_admin,
    )))
}

/// Delete a project (owner or admin)
pub async fn remove(
    State(state): State<AppState>,
    Extension(session): Extension<AuthedUser>,
    Path(project_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let project = load_project(&state, &project_id)?;
    require_owner(&project, &session, "project")?;

    state.registry.remove_project(&project.id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add a member to a project (owner or admin); the new member is
/// notified when their identity resolves to a registered account
pub async fn add_member(
    State(state): State<AppState>,
    Extension(session): Extension<AuthedUser>,
    Path(project_id): Path<String>,
    Json(request): Json<AddMemberRequest>,
) -> Result<Json<ProjectMemberResponse>, ApiError> {
    let project = load_project(&state, &project_id)?;
    require_owner(&project, &session, "project members")?;

    let member = ProjectMember::new(request.identity.clone(), Utc::now());
    let response = member_response(&member);
    state.registry.add_member(&project.id, member)?;

    if let (Some(recipient), Some(inviter)) = (
        state.registry.find_user_by_identity(&request.identity),
        state.registry.user(&session.id),
    ) {
        state.registry.push_notification(Notification::project_invitation(
            recipient.id(),
            &project,
            inviter.user.notifier_data(),
        ));
    }

    Ok(Json(response))
}

/// Create a task (any member, the owner, or an admin)
pub async fn create_task(
    State(state): State<AppState>,
    Extension(session): Extension<AuthedUser>,
    Path(project_id): Path<String>,
    Json(request): Json<CreateTaskRequest>,
) -> Result<Json<TaskResponse>, ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::validation("Task name must not be empty"));
    }

    let project = load_project(&state, &project_id)?;
    let members = project.member_refs();

    let standing = evaluate_access(
        &session.identity(),
        Some(&members),
        &project.owner,
        session.is_admin,
    );
    if !standing.access {
        return Err(ApiError::forbidden("project tasks"));
    }

    let task = Task::new(request.name);
    let response = TaskResponse {
        id: task.id,
        name: task.name.clone(),
        completed: task.completed,
        created_at: task.created_at,
    };
    state.registry.add_task(&project.id, task)?;

    Ok(Json(response))
}
