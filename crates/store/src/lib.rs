//! Persistence layer for the StudyClever catalog service.
//!
//! The whole catalog lives in one flat document. [`CatalogStore`] is the
//! read/write seam over that document, with a JSON file backend for
//! production and an in-memory backend for tests. [`CatalogDb`] adds the
//! mutual-exclusion guard around read-modify-write cycles, and the
//! repositories implement the entity operations on top of it.

pub mod db;
pub mod json_file;
pub mod memory;
pub mod models;
pub mod repositories;
pub mod store;

pub use db::CatalogDb;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use store::CatalogStore;
