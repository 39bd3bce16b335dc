use super::UserQueryService;
use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::user::UserId,
};

pub struct ListFollowersQuery {
    pub user_id: i64,
}

pub struct ListFollowingQuery {
    pub user_id: i64,
}

impl UserQueryService {
    pub async fn list_followers(&self, query: ListFollowersQuery) -> ApplicationResult<Vec<UserDto>> {
        let id = UserId::new(query.user_id)?;
        let users = self.social_graph.followers(id).await?;
        Ok(users.into_iter().map(Into::into).collect())
    }

    pub async fn list_following(&self, query: ListFollowingQuery) -> ApplicationResult<Vec<UserDto>> {
        let id = UserId::new(query.user_id)?;
        let users = self.social_graph.following(id).await?;
        Ok(users.into_iter().map(Into::into).collect())
    }
}
