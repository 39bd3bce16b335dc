use crate::domain::errors::DomainResult;
use crate::domain::publication::entity::{NewPublication, Publication, PublicationUpdate};
use crate::domain::publication::value_objects::PublicationId;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait PublicationWriteRepository: Send + Sync {
    async fn insert(&self, publication: NewPublication) -> DomainResult<Publication>;
    async fn update(&self, update: PublicationUpdate) -> DomainResult<()>;
    async fn delete(&self, id: PublicationId) -> DomainResult<()>;

    /// Adds one like in a single storage-side statement.
    async fn like(&self, id: PublicationId) -> DomainResult<()>;

    /// Removes one like in a single storage-side statement, never going below zero.
    async fn unlike(&self, id: PublicationId) -> DomainResult<()>;
}

#[async_trait]
pub trait PublicationReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PublicationId) -> DomainResult<Option<Publication>>;
    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Publication>>;

    /// Publications written by `user_id` or by anyone `user_id` follows,
    /// newest first.
    async fn feed(&self, user_id: UserId) -> DomainResult<Vec<Publication>>;
}
