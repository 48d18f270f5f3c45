pub mod job_service;

pub use job_service::JobService;
