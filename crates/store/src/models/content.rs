//! Content item model.
//!
//! Content items reference their domain by `domain_id`, but the store
//! never enforces that reference -- deleting a domain cascades, yet
//! creating content against an unknown domain is accepted as-is.

use serde::{Deserialize, Serialize};
use studyclever_core::content_type::ContentType;
use studyclever_core::types::EntityId;

/// A content record from the catalog document.
///
/// This doubles as the create/update request payload: the create endpoint
/// accepts the full record shape (id included) and discards the supplied
/// id in favour of a server-assigned one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub id: EntityId,
    pub domain_id: EntityId,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub title: String,
    pub url: String,
    pub description: String,
}
