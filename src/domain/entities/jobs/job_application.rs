//! Job Application Entity Implementation
//!
//! 구직 지원 트래커의 지원 내역 문서 모델입니다.
//! 상태 파이프라인 전이 규칙을 엔티티 메서드로 제공합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 지원 상태 파이프라인
///
/// wishlist → applied → interviewing → offer → accepted 순서로 진행되며,
/// rejected/withdrawn은 종료 상태가 아닌 모든 상태에서 도달할 수 있습니다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Wishlist,
    Applied,
    Interviewing,
    Offer,
    Accepted,
    Rejected,
    Withdrawn,
}

impl ApplicationStatus {
    /// 종료 상태 여부 (더 이상 전이할 수 없음)
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ApplicationStatus::Accepted | ApplicationStatus::Rejected | ApplicationStatus::Withdrawn
        )
    }

    /// 파이프라인 전진 시 다음 상태
    fn next_in_pipeline(&self) -> Option<ApplicationStatus> {
        match self {
            ApplicationStatus::Wishlist => Some(ApplicationStatus::Applied),
            ApplicationStatus::Applied => Some(ApplicationStatus::Interviewing),
            ApplicationStatus::Interviewing => Some(ApplicationStatus::Offer),
            ApplicationStatus::Offer => Some(ApplicationStatus::Accepted),
            _ => None,
        }
    }

    /// 주어진 상태로의 전이가 허용되는지 확인합니다.
    ///
    /// 허용 규칙:
    /// - 파이프라인상 바로 다음 단계로의 전진
    /// - 종료 상태가 아닌 상태에서 rejected/withdrawn으로의 이동
    pub fn can_transition_to(&self, next: ApplicationStatus) -> bool {
        if *self == next {
            return false;
        }

        if matches!(next, ApplicationStatus::Rejected | ApplicationStatus::Withdrawn) {
            return !self.is_terminal();
        }

        self.next_in_pipeline() == Some(next)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Wishlist => "wishlist",
            ApplicationStatus::Applied => "applied",
            ApplicationStatus::Interviewing => "interviewing",
            ApplicationStatus::Offer => "offer",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Withdrawn => "withdrawn",
        }
    }
}

/// 구직 지원 내역 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobApplication {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 소유자 사용자 ID (hex 문자열)
    pub owner_id: String,
    pub company: String,
    pub position: String,
    pub status: ApplicationStatus,
    /// 지원일
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_at: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// 예정된 면접 시간
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interview_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl JobApplication {
    pub fn new(owner_id: String, company: String, position: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            owner_id,
            company,
            position,
            status: ApplicationStatus::Wishlist,
            applied_at: None,
            location: None,
            salary_range: None,
            contact_email: None,
            notes: None,
            interview_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 해당 사용자가 소유자인지 확인
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_moves_forward_one_step() {
        assert!(ApplicationStatus::Wishlist.can_transition_to(ApplicationStatus::Applied));
        assert!(ApplicationStatus::Applied.can_transition_to(ApplicationStatus::Interviewing));
        assert!(ApplicationStatus::Interviewing.can_transition_to(ApplicationStatus::Offer));
        assert!(ApplicationStatus::Offer.can_transition_to(ApplicationStatus::Accepted));

        // 단계 건너뛰기는 허용되지 않는다
        assert!(!ApplicationStatus::Wishlist.can_transition_to(ApplicationStatus::Offer));
        assert!(!ApplicationStatus::Applied.can_transition_to(ApplicationStatus::Accepted));
    }

    #[test]
    fn test_rejected_and_withdrawn_reachable_from_active_states() {
        assert!(ApplicationStatus::Wishlist.can_transition_to(ApplicationStatus::Rejected));
        assert!(ApplicationStatus::Interviewing.can_transition_to(ApplicationStatus::Withdrawn));
        assert!(ApplicationStatus::Offer.can_transition_to(ApplicationStatus::Rejected));
    }

    #[test]
    fn test_terminal_states_do_not_transition() {
        assert!(ApplicationStatus::Accepted.is_terminal());
        assert!(ApplicationStatus::Rejected.is_terminal());
        assert!(ApplicationStatus::Withdrawn.is_terminal());

        assert!(!ApplicationStatus::Accepted.can_transition_to(ApplicationStatus::Rejected));
        assert!(!ApplicationStatus::Rejected.can_transition_to(ApplicationStatus::Applied));
        assert!(!ApplicationStatus::Withdrawn.can_transition_to(ApplicationStatus::Withdrawn));
    }

    #[test]
    fn test_backward_moves_are_rejected() {
        assert!(!ApplicationStatus::Interviewing.can_transition_to(ApplicationStatus::Applied));
        assert!(!ApplicationStatus::Offer.can_transition_to(ApplicationStatus::Wishlist));
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&ApplicationStatus::Interviewing).unwrap();
        assert_eq!(json, "\"interviewing\"");
    }

    #[test]
    fn test_new_application_starts_in_wishlist() {
        let app = JobApplication::new(
            "owner-1".to_string(),
            "인센드".to_string(),
            "백엔드 엔지니어".to_string(),
        );

        assert_eq!(app.status, ApplicationStatus::Wishlist);
        assert!(app.applied_at.is_none());
        assert!(app.is_owned_by("owner-1"));
    }
}
