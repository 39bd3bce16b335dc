// src/domain/publication/entity.rs
use crate::domain::publication::value_objects::{
    PublicationContent, PublicationId, PublicationTitle,
};
use crate::domain::user::{Nick, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publication {
    pub id: PublicationId,
    pub title: PublicationTitle,
    pub content: PublicationContent,
    pub author_id: UserId,
    /// Joined from the author's row when read; never written.
    pub author_nick: Nick,
    pub likes: u64,
    pub created_at: DateTime<Utc>,
}

impl Publication {
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }
}

#[derive(Debug, Clone)]
pub struct NewPublication {
    pub title: PublicationTitle,
    pub content: PublicationContent,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Title and content are the only mutable fields; the author never changes.
#[derive(Debug, Clone)]
pub struct PublicationUpdate {
    pub id: PublicationId,
    pub title: PublicationTitle,
    pub content: PublicationContent,
}
