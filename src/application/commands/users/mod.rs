mod change_password;
mod delete;
mod follow;
mod login;
mod password;
mod register;
mod service;
mod update;

pub use change_password::ChangePasswordCommand;
pub use delete::DeleteUserCommand;
pub use follow::{FollowUserCommand, UnfollowUserCommand};
pub use login::LoginUserCommand;
pub use register::RegisterUserCommand;
pub use service::UserCommandService;
pub use update::UpdateUserCommand;
