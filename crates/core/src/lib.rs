//! Shared foundation for the StudyClever catalog service.
//!
//! Holds the error taxonomy, the entity id type, and the content type
//! enum. Everything here is independent of the HTTP layer and the
//! storage backend.

pub mod content_type;
pub mod error;
pub mod types;
