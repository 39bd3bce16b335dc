// src/presentation/http/controllers/mod.rs
pub mod auth;
pub mod publications;
pub mod user_requests;
pub mod users;
