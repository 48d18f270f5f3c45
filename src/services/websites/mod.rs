pub mod website_service;

pub use website_service::WebsiteService;
