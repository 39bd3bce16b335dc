use super::UserQueryService;
use crate::application::{dto::UserDto, error::ApplicationResult};

pub struct SearchUsersQuery {
    pub name_or_nick: Option<String>,
}

impl UserQueryService {
    /// An empty or missing filter matches every user.
    pub async fn search_users(&self, query: SearchUsersQuery) -> ApplicationResult<Vec<UserDto>> {
        let filter = query
            .name_or_nick
            .map(|value| value.trim().to_lowercase())
            .unwrap_or_default();

        let users = self.user_repo.search(&filter).await?;
        Ok(users.into_iter().map(Into::into).collect())
    }
}
