// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{publications::PublicationCommandService, users::UserCommandService},
        dto::AuthenticatedUser,
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
        queries::{publications::PublicationQueryService, users::UserQueryService},
    },
    domain::{
        follow::SocialGraphRepository,
        publication::{PublicationReadRepository, PublicationWriteRepository},
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub publication_commands: Arc<PublicationCommandService>,
    pub publication_queries: Arc<PublicationQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        social_graph: Arc<dyn SocialGraphRepository>,
        publication_write_repo: Arc<dyn PublicationWriteRepository>,
        publication_read_repo: Arc<dyn PublicationReadRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&social_graph),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&user_repo),
            Arc::clone(&social_graph),
        ));

        let publication_commands = Arc::new(PublicationCommandService::new(
            Arc::clone(&publication_write_repo),
            Arc::clone(&publication_read_repo),
            Arc::clone(&clock),
        ));
        let publication_queries =
            Arc::new(PublicationQueryService::new(Arc::clone(&publication_read_repo)));

        Self {
            user_commands,
            user_queries,
            publication_commands,
            publication_queries,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    /// Resolve a raw bearer token to the acting user.
    ///
    /// Purely computational: no repository is consulted, so a token for a
    /// since-deleted user still authenticates until it expires.
    pub fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.token_manager.validate(token).map_err(|err| {
            tracing::debug!(reason = %err, "bearer token rejected");
            err.into()
        })
    }
}
