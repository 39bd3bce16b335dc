// src/application/commands/publications/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::publication::{
        Publication, PublicationId, PublicationReadRepository, PublicationWriteRepository,
    },
};

pub struct PublicationCommandService {
    pub(super) write_repo: Arc<dyn PublicationWriteRepository>,
    pub(super) read_repo: Arc<dyn PublicationReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PublicationCommandService {
    pub fn new(
        write_repo: Arc<dyn PublicationWriteRepository>,
        read_repo: Arc<dyn PublicationReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            clock,
        }
    }

    pub(super) async fn load_publication(&self, id: PublicationId) -> ApplicationResult<Publication> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("publication not found"))
    }
}
