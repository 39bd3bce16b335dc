use super::PublicationQueryService;
use crate::{
    application::{
        dto::PublicationDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::publication::PublicationId,
};

pub struct GetPublicationQuery {
    pub id: i64,
}

impl PublicationQueryService {
    pub async fn get_publication(
        &self,
        query: GetPublicationQuery,
    ) -> ApplicationResult<PublicationDto> {
        let id = PublicationId::new(query.id)?;
        let publication = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("publication not found"))?;
        Ok(publication.into())
    }
}
