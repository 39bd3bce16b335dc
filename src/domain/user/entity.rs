// src/domain/user/entity.rs
use crate::domain::user::value_objects::{DisplayName, Email, Nick, PasswordHash, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: DisplayName,
    pub nick: Nick,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: DisplayName,
    pub nick: Nick,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        name: DisplayName,
        nick: Nick,
        email: Email,
        password_hash: PasswordHash,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name,
            nick,
            email,
            password_hash,
            created_at,
        }
    }
}

/// Replacement values for the editable profile fields.
#[derive(Debug, Clone)]
pub struct UserProfileUpdate {
    pub id: UserId,
    pub name: DisplayName,
    pub nick: Nick,
    pub email: Email,
}
