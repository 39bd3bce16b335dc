use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

const MAX_TITLE_LENGTH: usize = 50;
const MAX_CONTENT_LENGTH: usize = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PublicationId(pub i64);

impl PublicationId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("publication id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PublicationId> for i64 {
    fn from(value: PublicationId) -> Self {
        value.0
    }
}

impl fmt::Display for PublicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationTitle(String);

impl PublicationTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::validation("title cannot be empty"));
        }
        if value.chars().count() > MAX_TITLE_LENGTH {
            return Err(DomainError::validation(format!(
                "title must be at most {MAX_TITLE_LENGTH} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PublicationTitle> for String {
    fn from(value: PublicationTitle) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationContent(String);

impl PublicationContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::validation("content cannot be empty"));
        }
        if value.chars().count() > MAX_CONTENT_LENGTH {
            return Err(DomainError::validation(format!(
                "content must be at most {MAX_CONTENT_LENGTH} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PublicationContent> for String {
    fn from(value: PublicationContent) -> Self {
        value.0
    }
}
