// src/application/commands/ownership.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::{authorization::authorize_owner, user::UserId};

/// Rejects with `Forbidden` unless `actor` owns the resource. Call it after
/// the resource was loaded and before anything is written.
pub(super) fn ensure_owner(
    actor: &AuthenticatedUser,
    owner: UserId,
    denial: &str,
) -> ApplicationResult<()> {
    if authorize_owner(actor.id, owner).is_allowed() {
        Ok(())
    } else {
        tracing::warn!(actor = %actor.id, owner = %owner, "ownership check denied");
        Err(ApplicationError::forbidden(denial))
    }
}
