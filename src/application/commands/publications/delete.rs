use super::PublicationCommandService;
use crate::{
    application::{
        commands::ownership::ensure_owner,
        dto::AuthenticatedUser,
        error::ApplicationResult,
    },
    domain::publication::PublicationId,
};

pub struct DeletePublicationCommand {
    pub id: i64,
}

impl PublicationCommandService {
    pub async fn delete_publication(
        &self,
        actor: &AuthenticatedUser,
        command: DeletePublicationCommand,
    ) -> ApplicationResult<()> {
        let id = PublicationId::new(command.id)?;
        let publication = self.load_publication(id).await?;
        ensure_owner(
            actor,
            publication.author_id,
            "cannot delete a publication that is not yours",
        )?;

        self.write_repo.delete(id).await?;
        tracing::info!(publication_id = %id, "publication deleted");
        Ok(())
    }
}
