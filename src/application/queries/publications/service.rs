use std::sync::Arc;

use crate::domain::publication::PublicationReadRepository;

pub struct PublicationQueryService {
    pub(super) read_repo: Arc<dyn PublicationReadRepository>,
}

impl PublicationQueryService {
    pub fn new(read_repo: Arc<dyn PublicationReadRepository>) -> Self {
        Self { read_repo }
    }
}
