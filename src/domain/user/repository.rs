use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User, UserProfileUpdate},
    value_objects::{Email, PasswordHash, UserId},
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    /// Case-insensitive substring match on name or nick.
    async fn search(&self, name_or_nick: &str) -> DomainResult<Vec<User>>;

    async fn update_profile(&self, update: UserProfileUpdate) -> DomainResult<()>;

    async fn update_password(&self, id: UserId, password_hash: PasswordHash) -> DomainResult<()>;

    async fn delete(&self, id: UserId) -> DomainResult<()>;
}
