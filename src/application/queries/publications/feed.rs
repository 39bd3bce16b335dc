// src/application/queries/publications/feed.rs
use super::PublicationQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PublicationDto},
        error::ApplicationResult,
    },
    domain::publication::arrange_feed,
};

impl PublicationQueryService {
    /// The actor's own publications plus those of everyone they follow.
    ///
    /// The repository answers with a single union query; `arrange_feed` then
    /// pins down dedup and ordering so the result does not depend on the
    /// backend.
    pub async fn build_feed(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<PublicationDto>> {
        let publications = self.read_repo.feed(actor.id).await?;
        Ok(arrange_feed(publications)
            .into_iter()
            .map(Into::into)
            .collect())
    }
}
