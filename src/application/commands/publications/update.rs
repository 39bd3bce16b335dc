use super::PublicationCommandService;
use crate::{
    application::{
        commands::ownership::ensure_owner,
        dto::AuthenticatedUser,
        error::ApplicationResult,
    },
    domain::publication::{
        PublicationContent, PublicationId, PublicationTitle, PublicationUpdate,
    },
};

pub struct UpdatePublicationCommand {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl PublicationCommandService {
    pub async fn update_publication(
        &self,
        actor: &AuthenticatedUser,
        command: UpdatePublicationCommand,
    ) -> ApplicationResult<()> {
        let id = PublicationId::new(command.id)?;
        let publication = self.load_publication(id).await?;
        ensure_owner(
            actor,
            publication.author_id,
            "cannot update a publication that is not yours",
        )?;

        let update = PublicationUpdate {
            id,
            title: PublicationTitle::new(command.title)?,
            content: PublicationContent::new(command.content)?,
        };

        self.write_repo.update(update).await?;
        tracing::info!(publication_id = %id, "publication updated");
        Ok(())
    }
}
