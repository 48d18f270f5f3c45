pub mod create_user;
pub mod auth_request;

pub use create_user::CreateUserRequest;
pub use auth_request::{LocalLoginRequest, OAuthCallbackQuery, RefreshTokenRequest};
