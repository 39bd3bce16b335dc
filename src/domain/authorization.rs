// src/domain/authorization.rs
use crate::domain::user::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Deny,
}

impl AccessDecision {
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Ownership rule for mutating a resource: only its owner may change it.
pub fn authorize_owner(actor: UserId, owner: UserId) -> AccessDecision {
    if actor == owner {
        AccessDecision::Allow
    } else {
        AccessDecision::Deny
    }
}
