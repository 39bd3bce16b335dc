// src/infrastructure/repositories/sqlite_follow.rs
use super::{map_sqlx, sqlite_user::UserRow};
use crate::domain::errors::DomainResult;
use crate::domain::follow::{FollowEdge, SocialGraphRepository};
use crate::domain::user::{User, UserId};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct SqliteSocialGraphRepository {
    pool: SqlitePool,
}

impl SqliteSocialGraphRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn users(&self, sql: &str, user_id: UserId) -> DomainResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(sql)
            .bind(i64::from(user_id))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(User::try_from).collect()
    }
}

#[async_trait]
impl SocialGraphRepository for SqliteSocialGraphRepository {
    async fn follow(&self, edge: FollowEdge) -> DomainResult<()> {
        // Primary-key conflict means the edge is already there; nothing to do.
        sqlx::query(
            "INSERT INTO followers (user_id, follower_id) VALUES (?, ?)
             ON CONFLICT (user_id, follower_id) DO NOTHING",
        )
        .bind(i64::from(edge.followed()))
        .bind(i64::from(edge.follower()))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn unfollow(&self, edge: FollowEdge) -> DomainResult<()> {
        sqlx::query("DELETE FROM followers WHERE user_id = ? AND follower_id = ?")
            .bind(i64::from(edge.followed()))
            .bind(i64::from(edge.follower()))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn followers(&self, user_id: UserId) -> DomainResult<Vec<User>> {
        self.users(
            "SELECT u.id, u.name, u.nick, u.email, u.password_hash, u.created_at
             FROM users u
             JOIN followers f ON f.follower_id = u.id
             WHERE f.user_id = ?
             ORDER BY u.id ASC",
            user_id,
        )
        .await
    }

    async fn following(&self, user_id: UserId) -> DomainResult<Vec<User>> {
        self.users(
            "SELECT u.id, u.name, u.nick, u.email, u.password_hash, u.created_at
             FROM users u
             JOIN followers f ON f.user_id = u.id
             WHERE f.follower_id = ?
             ORDER BY u.id ASC",
            user_id,
        )
        .await
    }
}
