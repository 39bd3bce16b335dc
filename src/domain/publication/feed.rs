// src/domain/publication/feed.rs
use crate::domain::publication::entity::Publication;
use std::cmp::Reverse;
use std::collections::HashSet;

/// Puts feed entries in their canonical order: newest `created_at` first,
/// equal timestamps broken by the higher id. Each publication appears once.
pub fn arrange_feed(mut publications: Vec<Publication>) -> Vec<Publication> {
    let mut seen = HashSet::with_capacity(publications.len());
    publications.retain(|publication| seen.insert(publication.id));
    publications.sort_by_key(|publication| Reverse((publication.created_at, publication.id)));
    publications
}
