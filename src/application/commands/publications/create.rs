use super::PublicationCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PublicationDto},
        error::ApplicationResult,
    },
    domain::publication::{NewPublication, PublicationContent, PublicationTitle},
};

pub struct CreatePublicationCommand {
    pub title: String,
    pub content: String,
}

impl PublicationCommandService {
    /// The author is always the authenticated actor; the payload cannot pick it.
    pub async fn create_publication(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePublicationCommand,
    ) -> ApplicationResult<PublicationDto> {
        let new_publication = NewPublication {
            title: PublicationTitle::new(command.title)?,
            content: PublicationContent::new(command.content)?,
            author_id: actor.id,
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_publication).await?;
        tracing::info!(publication_id = %created.id, author = %actor.id, "publication created");
        Ok(created.into())
    }
}
