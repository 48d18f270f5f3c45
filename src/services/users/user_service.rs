//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 전체 생명주기를 관리하는 비즈니스 로직입니다.
//! Spring의 UserService/UserDetailsService 패턴에 해당하며,
//! 등록, 인증, 조회, 삭제를 담당합니다.
//!
//! ## 보안 설계
//!
//! - **bcrypt 해싱**: 환경별 cost로 무차별 대입 공격 방지
//! - **에러 메시지 통합**: 존재하지 않는 이메일과 틀린 비밀번호를 구분하지 않음
//! - **OAuth 계정 보호**: OAuth 가입자는 비밀번호 인증 불가
//! - **민감 정보 제거**: DTO 변환 시 비밀번호 해시 제외

use std::sync::Arc;
use bcrypt::hash;
use singleton_macro::service;
use crate::{
    config::PasswordConfig,
    core::errors::AppError,
    domain::{
        dto::users::{
            request::CreateUserRequest,
            response::{CreateUserResponse, UserResponse},
        },
        entities::users::user::User,
    },
    repositories::users::user_repo::UserRepository,
};

/// 사용자 관리 비즈니스 로직 서비스
///
/// `#[service]` 매크로로 싱글톤 관리되며 UserRepository가 자동 주입됩니다.
///
/// ```rust,ignore
/// let user_service = UserService::instance(); // 항상 동일한 인스턴스
/// ```
#[service(name = "user")]
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리 (자동 주입)
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// 새 로컬 사용자 계정을 생성합니다.
    ///
    /// 비밀번호는 환경별 cost의 bcrypt로 해시되며,
    /// 이메일/사용자명 중복은 리포지토리에서 `ConflictError`로 반환됩니다.
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<CreateUserResponse, AppError> {
        let start_time = std::time::Instant::now();

        let bcrypt_cost = PasswordConfig::bcrypt_cost();

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::info!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new_local(
            request.email,
            request.username,
            request.display_name,
            password_hash,
        );

        let created_user = self.user_repo.create(user).await?;

        log::info!("Total user creation took: {:?}", start_time.elapsed());

        Ok(CreateUserResponse {
            user: UserResponse::from(created_user),
            message: "사용자가 성공적으로 생성되었습니다".to_string(),
        })
    }

    /// ID로 사용자를 조회하여 민감 정보가 제거된 DTO로 반환합니다.
    pub async fn get_user_by_id(&self, id: &str) -> Result<UserResponse, AppError> {
        let user = self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 이메일로 사용자를 조회하여 DTO로 반환합니다.
    pub async fn get_user_by_email(&self, email: &str) -> Result<UserResponse, AppError> {
        let user = self.user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 사용자 계정을 영구 삭제합니다.
    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        let deleted = self.user_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }

    /// 로컬 계정의 이메일/비밀번호를 검증하고 사용자 엔티티를 반환합니다.
    ///
    /// 보안을 위해 실패 원인(이메일 없음 vs 비밀번호 불일치)을
    /// 구분하지 않는 메시지를 사용합니다.
    pub async fn verify_password(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user = self.user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("잘못된 이메일 또는 비밀번호입니다".to_string()))?;

        // OAuth 사용자인 경우 비밀번호 인증 불가
        if !user.can_authenticate_with_password() {
            return Err(AppError::AuthenticationError(
                "OAuth 계정입니다. 해당 프로바이더로 로그인해주세요".to_string(),
            ));
        }

        let password_hash = user.password_hash.as_ref()
            .ok_or_else(|| AppError::InternalError("비밀번호 해시가 없습니다".to_string()))?;

        let verify_start = std::time::Instant::now();
        let is_valid = bcrypt::verify(password, password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            return Err(AppError::AuthenticationError("잘못된 이메일 또는 비밀번호입니다".to_string()));
        }

        if !user.is_active {
            return Err(AppError::AuthenticationError("비활성화된 계정입니다".to_string()));
        }

        Ok(user)
    }
}
