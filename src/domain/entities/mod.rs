pub mod users;
pub mod websites;
pub mod jobs;
pub mod reservations;
pub mod collab;
