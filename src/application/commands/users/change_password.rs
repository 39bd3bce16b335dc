use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        commands::ownership::ensure_owner,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{PasswordHash, UserId},
};

pub struct ChangePasswordCommand {
    pub user_id: i64,
    pub current_password: String,
    pub new_password: String,
}

impl UserCommandService {
    pub async fn change_password(
        &self,
        actor: &AuthenticatedUser,
        command: ChangePasswordCommand,
    ) -> ApplicationResult<()> {
        let target_id = UserId::new(command.user_id)?;
        let user = self.load_user(target_id).await?;
        ensure_owner(actor, user.id, "cannot change another user's password")?;

        self.password_hasher
            .verify(&command.current_password, user.password_hash.as_str())
            .await
            .map_err(|err| match err {
                ApplicationError::Unauthorized(_) => {
                    ApplicationError::unauthorized("current password does not match")
                }
                other => other,
            })?;

        validate_password(&command.new_password)?;
        let hashed = self.password_hasher.hash(&command.new_password).await?;
        self.user_repo
            .update_password(user.id, PasswordHash::new(hashed)?)
            .await?;

        tracing::info!(user_id = %user.id, "password changed");
        Ok(())
    }
}
