pub mod entity;
pub mod feed;
pub mod repository;
pub mod value_objects;

pub use entity::{NewPublication, Publication, PublicationUpdate};
pub use feed::arrange_feed;
pub use repository::{PublicationReadRepository, PublicationWriteRepository};
pub use value_objects::{PublicationContent, PublicationId, PublicationTitle};
