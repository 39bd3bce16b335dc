// src/domain/follow/mod.rs
pub mod edge;
pub mod repository;

pub use edge::FollowEdge;
pub use repository::SocialGraphRepository;
