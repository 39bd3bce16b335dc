// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_follow;
mod sqlite_publication;
mod sqlite_user;

pub use error::map_sqlx;
pub use sqlite_follow::SqliteSocialGraphRepository;
pub use sqlite_publication::{SqlitePublicationReadRepository, SqlitePublicationWriteRepository};
pub use sqlite_user::SqliteUserRepository;
