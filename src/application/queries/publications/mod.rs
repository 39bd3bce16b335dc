mod by_author;
mod feed;
mod get_by_id;
mod service;

pub use by_author::ListAuthorPublicationsQuery;
pub use get_by_id::GetPublicationQuery;
pub use service::PublicationQueryService;
