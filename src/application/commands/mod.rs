mod ownership;
pub mod publications;
pub mod users;
