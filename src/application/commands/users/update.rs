use super::UserCommandService;
use crate::{
    application::{
        commands::ownership::ensure_owner,
        dto::AuthenticatedUser,
        error::ApplicationResult,
    },
    domain::user::{DisplayName, Email, Nick, UserId, UserProfileUpdate},
};

pub struct UpdateUserCommand {
    pub user_id: i64,
    pub name: String,
    pub nick: String,
    pub email: String,
}

impl UserCommandService {
    pub async fn update_user(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateUserCommand,
    ) -> ApplicationResult<()> {
        let target_id = UserId::new(command.user_id)?;
        let user = self.load_user(target_id).await?;
        ensure_owner(actor, user.id, "cannot update another user's profile")?;

        let update = UserProfileUpdate {
            id: user.id,
            name: DisplayName::new(command.name)?,
            nick: Nick::new(command.nick)?,
            email: Email::new(command.email)?,
        };

        self.user_repo.update_profile(update).await?;
        Ok(())
    }
}
