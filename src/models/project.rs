use serde::Deserialize;

use crate::domain::project::{EngagementSummary, Project as DomainProject, ServiceSummary};
use crate::domain::types::{EngagementId, ProjectId, Timestamp, lenient_timestamp};

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectService {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectEngagement {
    pub id: EngagementId,
    #[serde(default)]
    pub name: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
/// Backend model for [`crate::domain::project::Project`].
pub struct Project {
    pub id: ProjectId,
    pub engagement_id: EngagementId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: String,
    #[serde(default)]
    pub status_id: i32,
    #[serde(default)]
    pub phase: String,
    pub phase_id: i32,
    #[serde(default)]
    pub service: Option<ProjectService>,
    #[serde(default)]
    pub engagement: Option<ProjectEngagement>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub completed_at: Option<Timestamp>,
}

impl From<Project> for DomainProject {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            engagement_id: project.engagement_id,
            name: project.name,
            description: project.description,
            status: project.status,
            status_id: project.status_id,
            phase: project.phase,
            phase_id: project.phase_id,
            service: project.service.map(|s| ServiceSummary {
                id: s.id,
                name: s.name,
            }),
            engagement: project.engagement.map(|e| EngagementSummary {
                id: e.id,
                name: e.name,
                status: e.status,
            }),
            created_at: project.created_at,
            updated_at: project.updated_at,
            completed_at: project.completed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn project_maps_nested_summaries() {
        let project: DomainProject = serde_json::from_value::<Project>(json!({
            "id": "p1",
            "engagement_id": "e1",
            "org_id": "org",
            "name": "Warehouse migration",
            "description": null,
            "status": "active",
            "status_id": 1,
            "phase": "Build",
            "phase_id": 3,
            "service_id": "s1",
            "service": {"id": "s1", "name": "Migration"},
            "engagement": {"id": "e1", "name": null, "status": "active"},
            "created_at": "2024-02-01T00:00:00Z",
            "updated_at": "2024-02-02T00:00:00Z",
            "completed_at": null
        }))
        .unwrap()
        .into();

        assert_eq!(project.phase_id, 3);
        assert_eq!(project.service.unwrap().name, "Migration");
        let engagement = project.engagement.unwrap();
        assert_eq!(engagement.id.as_str(), "e1");
        assert!(engagement.name.is_none());
        assert!(project.completed_at.is_none());
    }
}
