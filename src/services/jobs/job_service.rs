//! # 구직 트래커 서비스 구현
//!
//! 지원 내역의 비즈니스 로직입니다.
//! 소유권 검사와 상태 파이프라인 전이 검증을 담당합니다.

use std::sync::Arc;
use chrono::DateTime as ChronoDateTime;
use mongodb::bson::doc;
use singleton_macro::service;
use crate::{
    core::errors::AppError,
    domain::dto::jobs::request::{CreateJobApplicationRequest, UpdateJobApplicationRequest},
    domain::entities::jobs::job_application::{ApplicationStatus, JobApplication},
    repositories::jobs::job_repo::JobRepository,
    utils::string_utils::clean_optional_string,
};

/// 구직 트래커 비즈니스 로직 서비스
#[service(name = "job")]
pub struct JobService {
    /// 지원 내역 리포지토리 (자동 주입)
    job_repo: Arc<JobRepository>,
}

impl JobService {
    /// 새 지원 내역을 생성합니다. 초기 상태는 wishlist입니다.
    pub async fn create_application(
        &self,
        owner_id: &str,
        request: CreateJobApplicationRequest,
    ) -> Result<JobApplication, AppError> {
        let mut app = JobApplication::new(
            owner_id.to_string(),
            request.company,
            request.position,
        );

        app.location = clean_optional_string(request.location);
        app.salary_range = clean_optional_string(request.salary_range);
        app.contact_email = clean_optional_string(request.contact_email);
        app.notes = clean_optional_string(request.notes);

        self.job_repo.create(app).await
    }

    /// 소유자 검사를 포함해 지원 내역을 조회합니다.
    pub async fn get_owned_application(&self, owner_id: &str, id: &str) -> Result<JobApplication, AppError> {
        let app = self.job_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("지원 내역을 찾을 수 없습니다".to_string()))?;

        if !app.is_owned_by(owner_id) {
            return Err(AppError::AuthorizationError("해당 지원 내역에 대한 권한이 없습니다".to_string()));
        }

        Ok(app)
    }

    /// 소유자의 지원 내역 목록을 반환합니다. 상태 필터는 선택적입니다.
    pub async fn list_applications(
        &self,
        owner_id: &str,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<JobApplication>, AppError> {
        self.job_repo.list_by_owner(owner_id, status).await
    }

    /// 지원 내역 필드를 수정합니다. 상태는 [`transition_status`]로만 변경됩니다.
    ///
    /// [`transition_status`]: JobService::transition_status
    pub async fn update_application(
        &self,
        owner_id: &str,
        id: &str,
        request: UpdateJobApplicationRequest,
    ) -> Result<JobApplication, AppError> {
        self.get_owned_application(owner_id, id).await?;

        let mut update_doc = doc! {};

        if let Some(company) = request.company {
            update_doc.insert("company", company);
        }
        if let Some(position) = request.position {
            update_doc.insert("position", position);
        }
        if let Some(location) = clean_optional_string(request.location) {
            update_doc.insert("location", location);
        }
        if let Some(salary_range) = clean_optional_string(request.salary_range) {
            update_doc.insert("salary_range", salary_range);
        }
        if let Some(contact_email) = clean_optional_string(request.contact_email) {
            update_doc.insert("contact_email", contact_email);
        }
        if let Some(notes) = clean_optional_string(request.notes) {
            update_doc.insert("notes", notes);
        }
        if let Some(interview_at) = request.interview_at {
            let parsed = ChronoDateTime::parse_from_rfc3339(&interview_at)
                .map_err(|_| AppError::ValidationError("면접 일시는 RFC 3339 형식이어야 합니다".to_string()))?;
            update_doc.insert(
                "interview_at",
                mongodb::bson::DateTime::from_millis(parsed.timestamp_millis()),
            );
        }

        if update_doc.is_empty() {
            return Err(AppError::ValidationError("변경할 내용이 없습니다".to_string()));
        }

        update_doc.insert("updated_at", mongodb::bson::DateTime::now());

        self.job_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("지원 내역을 찾을 수 없습니다".to_string()))
    }

    /// 지원 상태를 전이합니다.
    ///
    /// 파이프라인 규칙에 어긋나는 전이는 `ConflictError`(409)입니다.
    /// wishlist → applied 전이 시 지원일이 자동 기록됩니다.
    pub async fn transition_status(
        &self,
        owner_id: &str,
        id: &str,
        next: ApplicationStatus,
    ) -> Result<JobApplication, AppError> {
        let app = self.get_owned_application(owner_id, id).await?;

        if !app.status.can_transition_to(next) {
            return Err(AppError::ConflictError(format!(
                "'{}' 상태에서 '{}' 상태로 전이할 수 없습니다",
                app.status.as_str(),
                next.as_str(),
            )));
        }

        let mut update_doc = doc! {
            "status": next.as_str(),
            "updated_at": mongodb::bson::DateTime::now(),
        };

        if app.status == ApplicationStatus::Wishlist && next == ApplicationStatus::Applied {
            update_doc.insert("applied_at", mongodb::bson::DateTime::now());
        }

        self.job_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("지원 내역을 찾을 수 없습니다".to_string()))
    }

    /// 지원 내역을 삭제합니다.
    pub async fn delete_application(&self, owner_id: &str, id: &str) -> Result<(), AppError> {
        self.get_owned_application(owner_id, id).await?;

        let deleted = self.job_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("지원 내역을 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }
}
