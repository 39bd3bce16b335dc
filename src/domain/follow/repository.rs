use crate::domain::errors::DomainResult;
use crate::domain::follow::edge::FollowEdge;
use crate::domain::user::{User, UserId};
use async_trait::async_trait;

#[async_trait]
pub trait SocialGraphRepository: Send + Sync {
    /// Inserts the edge. An edge that already exists is left untouched and the
    /// call still succeeds.
    async fn follow(&self, edge: FollowEdge) -> DomainResult<()>;

    /// Removes the edge if present. Removing a missing edge succeeds.
    async fn unfollow(&self, edge: FollowEdge) -> DomainResult<()>;

    /// Users following `user_id`, ordered by id.
    async fn followers(&self, user_id: UserId) -> DomainResult<Vec<User>>;

    /// Users that `user_id` follows, ordered by id.
    async fn following(&self, user_id: UserId) -> DomainResult<Vec<User>>;
}
