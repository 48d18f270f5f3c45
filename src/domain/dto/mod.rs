pub mod users;
pub mod tokens;
pub mod websites;
pub mod jobs;
pub mod reservations;
pub mod collab;
pub mod media;

// 공통 re-exports
pub use users::*;
