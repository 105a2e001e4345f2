//! Domain models and DTOs.
//!
//! A domain is a top-level subject category; content items hang off it
//! via `domain_id`.

use serde::{Deserialize, Serialize};
use studyclever_core::types::EntityId;

// ---------------------------------------------------------------------------
// Entity structs (catalog document records)
// ---------------------------------------------------------------------------

/// A domain record from the catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a domain. The id is assigned by the server.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDomain {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
}
