pub mod entities;
pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
