pub mod google_oauth_model;
