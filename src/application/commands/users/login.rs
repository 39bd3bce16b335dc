use super::UserCommandService;
use crate::{
    application::{
        dto::LoginResultDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, User},
};

pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResultDto> {
        let email = Email::new(command.email)?;
        let user = self
            .find_and_authenticate_user(&email, &command.password)
            .await?;

        let token = self.token_manager.issue(user.id)?;
        tracing::info!(user_id = %user.id, "session issued");

        Ok(LoginResultDto {
            id: user.id.into(),
            token: token.token,
            expires_at: token.expires_at,
        })
    }

    async fn find_and_authenticate_user(
        &self,
        email: &Email,
        password: &str,
    ) -> ApplicationResult<User> {
        let Some(user) = self.user_repo.find_by_email(email).await? else {
            tracing::warn!("login rejected: unknown email");
            return Err(ApplicationError::unauthorized("invalid credentials"));
        };

        if let Err(err) = self
            .password_hasher
            .verify(password, user.password_hash.as_str())
            .await
        {
            tracing::warn!(user_id = %user.id, "login rejected: password mismatch");
            return Err(err);
        }

        Ok(user)
    }
}
