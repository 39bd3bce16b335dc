use super::{UserCommandService, password::validate_password};
use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::user::{DisplayName, Email, NewUser, Nick, PasswordHash},
};

pub struct RegisterUserCommand {
    pub name: String,
    pub nick: String,
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let name = DisplayName::new(command.name)?;
        let nick = Nick::new(command.nick)?;
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser::new(name, nick, email, password_hash, self.clock.now());
        let user = self.user_repo.insert(new_user).await?;
        tracing::info!(user_id = %user.id, "user registered");

        Ok(user.into())
    }
}
