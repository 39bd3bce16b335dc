use super::PublicationCommandService;
use crate::{application::error::ApplicationResult, domain::publication::PublicationId};

pub struct LikePublicationCommand {
    pub id: i64,
}

pub struct UnlikePublicationCommand {
    pub id: i64,
}

// Counting happens entirely inside the repository statement; nothing is read
// back here first.
impl PublicationCommandService {
    pub async fn like(&self, command: LikePublicationCommand) -> ApplicationResult<()> {
        let id = PublicationId::new(command.id)?;
        self.write_repo.like(id).await?;
        Ok(())
    }

    pub async fn unlike(&self, command: UnlikePublicationCommand) -> ApplicationResult<()> {
        let id = PublicationId::new(command.id)?;
        self.write_repo.unlike(id).await?;
        Ok(())
    }
}
