pub mod authorization;
pub mod errors;
pub mod follow;
pub mod publication;
pub mod user;
