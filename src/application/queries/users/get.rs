use super::UserQueryService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserId,
};

pub struct GetUserQuery {
    pub id: i64,
}

impl UserQueryService {
    pub async fn get_user(&self, query: GetUserQuery) -> ApplicationResult<UserDto> {
        let id = UserId::new(query.id)?;
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;
        Ok(user.into())
    }
}
