pub mod auth;
pub mod coffee;
