//! Repository for domain records.

use studyclever_core::error::CoreError;
use uuid::Uuid;

use crate::db::CatalogDb;
use crate::models::{CreateDomain, Domain};

pub struct DomainRepo;

impl DomainRepo {
    /// All domains, in persisted order.
    pub async fn list(db: &CatalogDb) -> Result<Vec<Domain>, CoreError> {
        Ok(db.load().await?.domains)
    }

    /// Find a domain by id.
    pub async fn find_by_id(db: &CatalogDb, id: &str) -> Result<Option<Domain>, CoreError> {
        let catalog = db.load().await?;
        Ok(catalog.domains.into_iter().find(|d| d.id == id))
    }

    /// Create a domain with a server-assigned id, append it, persist.
    pub async fn create(db: &CatalogDb, input: CreateDomain) -> Result<Domain, CoreError> {
        db.update(|catalog| {
            let created = Domain {
                id: Uuid::new_v4().to_string(),
                name: input.name,
                description: input.description,
                icon: input.icon,
                color: input.color,
            };
            catalog.domains.push(created.clone());
            Ok(created)
        })
        .await
    }

    /// Replace the domain at the path id with the payload record.
    ///
    /// The path id is used only for lookup. In lenient mode the record's
    /// own id is written as-is, even when it differs from the path id;
    /// with `strict_ids` a mismatch is rejected instead.
    pub async fn update(
        db: &CatalogDb,
        id: &str,
        record: Domain,
        strict_ids: bool,
    ) -> Result<Domain, CoreError> {
        if strict_ids && record.id != id {
            return Err(CoreError::Validation(format!(
                "Body id '{}' does not match path id '{id}'",
                record.id
            )));
        }
        db.update(|catalog| {
            let slot = catalog
                .domains
                .iter_mut()
                .find(|d| d.id == id)
                .ok_or(CoreError::NotFound { entity: "Domain" })?;
            *slot = record.clone();
            Ok(record)
        })
        .await
    }

    /// Delete a domain and cascade to its content items.
    ///
    /// Both removals happen in memory before the single persist call.
    pub async fn delete(db: &CatalogDb, id: &str) -> Result<(), CoreError> {
        db.update(|catalog| {
            if !catalog.domains.iter().any(|d| d.id == id) {
                return Err(CoreError::NotFound { entity: "Domain" });
            }
            catalog.domains.retain(|d| d.id != id);
            catalog.content.retain(|c| c.domain_id != id);
            Ok(())
        })
        .await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
