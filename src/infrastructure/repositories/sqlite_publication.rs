// src/infrastructure/repositories/sqlite_publication.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::publication::{
    NewPublication, Publication, PublicationContent, PublicationId, PublicationReadRepository,
    PublicationTitle, PublicationUpdate, PublicationWriteRepository,
};
use crate::domain::user::{Nick, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

const SELECT_PUBLICATION: &str = "SELECT p.id, p.title, p.content, p.author_id, p.likes, p.created_at, u.nick AS author_nick
     FROM publications p
     JOIN users u ON u.id = p.author_id";

#[derive(Clone)]
pub struct SqlitePublicationWriteRepository {
    pool: SqlitePool,
}

impl SqlitePublicationWriteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqlitePublicationReadRepository {
    pool: SqlitePool,
}

impl SqlitePublicationReadRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PublicationRow {
    id: i64,
    title: String,
    content: String,
    author_id: i64,
    author_nick: String,
    likes: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<PublicationRow> for Publication {
    type Error = DomainError;

    fn try_from(row: PublicationRow) -> Result<Self, Self::Error> {
        let likes = u64::try_from(row.likes)
            .map_err(|_| DomainError::Persistence(format!("negative like count on {}", row.id)))?;

        Ok(Publication {
            id: PublicationId::new(row.id)?,
            title: PublicationTitle::new(row.title)?,
            content: PublicationContent::new(row.content)?,
            author_id: UserId::new(row.author_id)?,
            author_nick: Nick::new(row.author_nick)?,
            likes,
            created_at: row.created_at,
        })
    }
}

fn publication_not_found() -> DomainError {
    DomainError::not_found("publication not found")
}

impl SqlitePublicationWriteRepository {
    async fn execute_for(&self, sql: &str, id: PublicationId) -> DomainResult<()> {
        let result = sqlx::query(sql)
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(publication_not_found());
        }
        Ok(())
    }
}

#[async_trait]
impl PublicationWriteRepository for SqlitePublicationWriteRepository {
    async fn insert(&self, publication: NewPublication) -> DomainResult<Publication> {
        let NewPublication {
            title,
            content,
            author_id,
            created_at,
        } = publication;

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO publications (title, content, author_id, likes, created_at)
             VALUES (?, ?, ?, 0, ?)
             RETURNING id",
        )
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(i64::from(author_id))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        // Re-read through the join so the author's nick comes along.
        let row = sqlx::query_as::<_, PublicationRow>(&format!("{SELECT_PUBLICATION} WHERE p.id = ?"))
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Publication::try_from(row)
    }

    async fn update(&self, update: PublicationUpdate) -> DomainResult<()> {
        let PublicationUpdate { id, title, content } = update;

        let result = sqlx::query("UPDATE publications SET title = ?, content = ? WHERE id = ?")
            .bind(title.as_str())
            .bind(content.as_str())
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(publication_not_found());
        }
        Ok(())
    }

    async fn delete(&self, id: PublicationId) -> DomainResult<()> {
        self.execute_for("DELETE FROM publications WHERE id = ?", id)
            .await
    }

    async fn like(&self, id: PublicationId) -> DomainResult<()> {
        self.execute_for("UPDATE publications SET likes = likes + 1 WHERE id = ?", id)
            .await
    }

    async fn unlike(&self, id: PublicationId) -> DomainResult<()> {
        self.execute_for(
            "UPDATE publications SET likes = MAX(likes - 1, 0) WHERE id = ?",
            id,
        )
        .await
    }
}

#[async_trait]
impl PublicationReadRepository for SqlitePublicationReadRepository {
    async fn find_by_id(&self, id: PublicationId) -> DomainResult<Option<Publication>> {
        let row = sqlx::query_as::<_, PublicationRow>(&format!("{SELECT_PUBLICATION} WHERE p.id = ?"))
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Publication::try_from).transpose()
    }

    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Publication>> {
        let rows = sqlx::query_as::<_, PublicationRow>(&format!(
            "{SELECT_PUBLICATION} WHERE p.author_id = ? ORDER BY p.created_at DESC, p.id DESC"
        ))
        .bind(i64::from(author_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Publication::try_from).collect()
    }

    async fn feed(&self, user_id: UserId) -> DomainResult<Vec<Publication>> {
        let rows = sqlx::query_as::<_, PublicationRow>(&format!(
            "{SELECT_PUBLICATION}
             WHERE p.author_id = ?
                OR p.author_id IN (SELECT user_id FROM followers WHERE follower_id = ?)
             ORDER BY p.created_at DESC, p.id DESC"
        ))
        .bind(i64::from(user_id))
        .bind(i64::from(user_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Publication::try_from).collect()
    }
}
