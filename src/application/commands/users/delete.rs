use super::UserCommandService;
use crate::{
    application::{
        commands::ownership::ensure_owner,
        dto::AuthenticatedUser,
        error::ApplicationResult,
    },
    domain::user::UserId,
};

pub struct DeleteUserCommand {
    pub user_id: i64,
}

impl UserCommandService {
    pub async fn delete_user(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteUserCommand,
    ) -> ApplicationResult<()> {
        let target_id = UserId::new(command.user_id)?;
        let user = self.load_user(target_id).await?;
        ensure_owner(actor, user.id, "cannot delete another user's account")?;

        self.user_repo.delete(user.id).await?;
        tracing::info!(user_id = %user.id, "user deleted");
        Ok(())
    }
}
