//! 인증 미들웨어 동작 모드와 역할 요구사항

/// 인증 모드
#[derive(Debug, Clone, PartialEq)]
pub enum AuthMode {
    Required,
    Optional,
}

/// 라우트 접근에 필요한 역할 조건
#[derive(Debug, Clone)]
pub enum RequiredRole {
    Single(String),
    Any(Vec<String>),
}

impl RequiredRole {
    pub fn is_satisfied(&self, user_roles: &[String]) -> bool {
        match self {
            RequiredRole::Single(required_role) => user_roles.contains(required_role),
            RequiredRole::Any(required_roles) => {
                required_roles.iter().any(|role| user_roles.contains(role))
            }
        }
    }
}
