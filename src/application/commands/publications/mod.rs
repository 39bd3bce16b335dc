// src/application/commands/publications/mod.rs
mod create;
mod delete;
mod likes;
mod service;
mod update;

pub use create::CreatePublicationCommand;
pub use delete::DeletePublicationCommand;
pub use likes::{LikePublicationCommand, UnlikePublicationCommand};
pub use service::PublicationCommandService;
pub use update::UpdatePublicationCommand;
