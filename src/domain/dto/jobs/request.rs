//! 구직 트래커 요청 DTO

use serde::Deserialize;
use validator::Validate;
use crate::domain::entities::jobs::job_application::ApplicationStatus;
use crate::utils::string_utils::deserialize_optional_string;

/// 지원 내역 생성 요청
#[derive(Debug, Deserialize, Validate)]
pub struct CreateJobApplicationRequest {
    #[validate(length(min = 1, max = 100, message = "회사명은 1-100자 사이여야 합니다"))]
    pub company: String,

    #[validate(length(min = 1, max = 100, message = "포지션은 1-100자 사이여야 합니다"))]
    pub position: String,

    /// 공백뿐인 값은 역직렬화 단계에서 None으로 정규화된다
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub location: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub salary_range: Option<String>,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub contact_email: Option<String>,

    #[validate(length(max = 2000, message = "메모는 2000자를 넘을 수 없습니다"))]
    pub notes: Option<String>,
}

/// 지원 내역 수정 요청. 전달된 필드만 변경됩니다.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateJobApplicationRequest {
    #[validate(length(min = 1, max = 100, message = "회사명은 1-100자 사이여야 합니다"))]
    pub company: Option<String>,

    #[validate(length(min = 1, max = 100, message = "포지션은 1-100자 사이여야 합니다"))]
    pub position: Option<String>,

    pub location: Option<String>,
    pub salary_range: Option<String>,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub contact_email: Option<String>,

    #[validate(length(max = 2000, message = "메모는 2000자를 넘을 수 없습니다"))]
    pub notes: Option<String>,

    /// RFC 3339 형식의 면접 일시
    pub interview_at: Option<String>,
}

/// 상태 전이 요청
#[derive(Debug, Deserialize)]
pub struct TransitionStatusRequest {
    pub status: ApplicationStatus,
}

/// 목록 조회 쿼리
#[derive(Debug, Deserialize)]
pub struct JobListQuery {
    pub status: Option<ApplicationStatus>,
}
