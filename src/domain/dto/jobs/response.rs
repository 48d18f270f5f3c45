//! 구직 트래커 응답 DTO

use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use crate::domain::entities::jobs::job_application::{ApplicationStatus, JobApplication};

/// 지원 내역 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobApplicationResponse {
    pub id: String,
    pub company: String,
    pub position: String,
    pub status: ApplicationStatus,
    pub applied_at: Option<DateTime>,
    pub location: Option<String>,
    pub salary_range: Option<String>,
    pub contact_email: Option<String>,
    pub notes: Option<String>,
    pub interview_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<JobApplication> for JobApplicationResponse {
    fn from(app: JobApplication) -> Self {
        Self {
            id: app.id.map(|id| id.to_hex()).unwrap_or_default(),
            company: app.company,
            position: app.position,
            status: app.status,
            applied_at: app.applied_at,
            location: app.location,
            salary_range: app.salary_range,
            contact_email: app.contact_email,
            notes: app.notes,
            interview_at: app.interview_at,
            created_at: app.created_at,
            updated_at: app.updated_at,
        }
    }
}
