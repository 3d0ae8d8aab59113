use serde::{Deserialize, Serialize};

use crate::domain::status::status_is;
use crate::domain::types::{EngagementId, ProjectId, Timestamp};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceSummary {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngagementSummary {
    pub id: EngagementId,
    pub name: Option<String>,
    pub status: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub engagement_id: EngagementId,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub status_id: i32,
    pub phase: String,
    pub phase_id: i32,
    pub service: Option<ServiceSummary>,
    pub engagement: Option<EngagementSummary>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
}

impl Project {
    pub fn is_completed(&self) -> bool {
        status_is(&self.status, "completed")
    }
}
