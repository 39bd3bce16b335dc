use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

// SQLite reports the offending columns rather than the constraint name,
// e.g. "UNIQUE constraint failed: users.nick".
const COL_USER_NICK: &str = "users.nick";
const COL_USER_EMAIL: &str = "users.email";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();
            match db_err.kind() {
                ErrorKind::UniqueViolation if message.contains(COL_USER_NICK) => {
                    DomainError::Conflict("nick already taken".into())
                }
                ErrorKind::UniqueViolation if message.contains(COL_USER_EMAIL) => {
                    DomainError::Conflict("email already registered".into())
                }
                ErrorKind::UniqueViolation => {
                    DomainError::Conflict("unique constraint violated".into())
                }
                ErrorKind::ForeignKeyViolation => {
                    DomainError::NotFound("referenced record not found".into())
                }
                ErrorKind::CheckViolation => {
                    DomainError::Validation("check constraint violated".into())
                }
                _ => DomainError::Persistence(message.to_string()),
            }
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
