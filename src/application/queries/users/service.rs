use std::sync::Arc;

use crate::domain::{follow::SocialGraphRepository, user::UserRepository};

pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) social_graph: Arc<dyn SocialGraphRepository>,
}

impl UserQueryService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        social_graph: Arc<dyn SocialGraphRepository>,
    ) -> Self {
        Self {
            user_repo,
            social_graph,
        }
    }
}
