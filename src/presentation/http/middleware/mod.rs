pub mod require_auth;

pub use require_auth::require_auth;
