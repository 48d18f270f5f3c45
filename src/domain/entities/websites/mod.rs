pub mod website;
