//! The catalog document: the single persisted aggregate.

use serde::{Deserialize, Serialize};

use crate::models::content::Content;
use crate::models::domain::Domain;

/// The full persisted collection of domains and content.
///
/// Loaded fully into memory at the start of each request, mutated in
/// memory, written back fully at the end of write requests. No partial
/// persistence state exists; the single `write` is the only durability
/// point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub domains: Vec<Domain>,
    pub content: Vec<Content>,
}
