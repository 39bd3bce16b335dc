pub mod auth;
pub mod publications;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, LoginResultDto};
pub use publications::PublicationDto;
pub use users::UserDto;
