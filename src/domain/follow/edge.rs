use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;

/// Directed relation: `follower` receives `followed`'s publications in their feed.
///
/// A user can never follow themselves, so an edge value with equal ends is
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FollowEdge {
    followed: UserId,
    follower: UserId,
}

impl FollowEdge {
    pub fn new(followed: UserId, follower: UserId) -> DomainResult<Self> {
        if followed == follower {
            return Err(DomainError::validation("users cannot follow themselves"));
        }
        Ok(Self { followed, follower })
    }

    pub fn followed(&self) -> UserId {
        self.followed
    }

    pub fn follower(&self) -> UserId {
        self.follower
    }
}
