use super::PublicationQueryService;
use crate::{
    application::{dto::PublicationDto, error::ApplicationResult},
    domain::user::UserId,
};

pub struct ListAuthorPublicationsQuery {
    pub author_id: i64,
}

impl PublicationQueryService {
    pub async fn list_by_author(
        &self,
        query: ListAuthorPublicationsQuery,
    ) -> ApplicationResult<Vec<PublicationDto>> {
        let author_id = UserId::new(query.author_id)?;
        let publications = self.read_repo.list_by_author(author_id).await?;
        Ok(publications.into_iter().map(Into::into).collect())
    }
}
