use crate::domain::publication::Publication;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub author_nick: String,
    pub likes: u64,
    pub created_at: DateTime<Utc>,
}

impl From<Publication> for PublicationDto {
    fn from(publication: Publication) -> Self {
        Self {
            id: publication.id.into(),
            title: publication.title.into(),
            content: publication.content.into(),
            author_id: publication.author_id.into(),
            author_nick: publication.author_nick.into(),
            likes: publication.likes,
            created_at: publication.created_at,
        }
    }
}
