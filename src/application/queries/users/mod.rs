mod get;
mod relations;
mod search;
mod service;

pub use get::GetUserQuery;
pub use relations::{ListFollowersQuery, ListFollowingQuery};
pub use search::SearchUsersQuery;
pub use service::UserQueryService;
