use super::UserCommandService;
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationResult},
    domain::{follow::FollowEdge, user::UserId},
};

pub struct FollowUserCommand {
    pub user_id: i64,
}

pub struct UnfollowUserCommand {
    pub user_id: i64,
}

impl UserCommandService {
    /// Makes `actor` follow the target. Following twice is not an error.
    pub async fn follow(
        &self,
        actor: &AuthenticatedUser,
        command: FollowUserCommand,
    ) -> ApplicationResult<()> {
        let edge = FollowEdge::new(UserId::new(command.user_id)?, actor.id)?;
        self.social_graph.follow(edge).await?;
        tracing::debug!(follower = %actor.id, followed = %edge.followed(), "follow");
        Ok(())
    }

    /// Removes the edge if it exists.
    pub async fn unfollow(
        &self,
        actor: &AuthenticatedUser,
        command: UnfollowUserCommand,
    ) -> ApplicationResult<()> {
        let edge = FollowEdge::new(UserId::new(command.user_id)?, actor.id)?;
        self.social_graph.unfollow(edge).await?;
        tracing::debug!(follower = %actor.id, followed = %edge.followed(), "unfollow");
        Ok(())
    }
}
