//! Repository for content items.

use studyclever_core::error::CoreError;
use uuid::Uuid;

use crate::db::CatalogDb;
use crate::models::Content;

pub struct ContentRepo;

impl ContentRepo {
    /// All content items whose `domain_id` matches, in persisted order.
    ///
    /// The domain itself is never looked up: an unknown `domain_id`
    /// yields an empty list, not a not-found error.
    pub async fn list_by_domain(db: &CatalogDb, domain_id: &str) -> Result<Vec<Content>, CoreError> {
        let catalog = db.load().await?;
        Ok(catalog
            .content
            .into_iter()
            .filter(|c| c.domain_id == domain_id)
            .collect())
    }

    /// Append a content item with a server-assigned id, persist.
    ///
    /// The id supplied in the payload is discarded. `domain_id` is not
    /// checked against existing domains.
    pub async fn create(db: &CatalogDb, mut input: Content) -> Result<Content, CoreError> {
        input.id = Uuid::new_v4().to_string();
        db.update(|catalog| {
            catalog.content.push(input.clone());
            Ok(input)
        })
        .await
    }

    /// Replace the content item at the path id with the payload record.
    ///
    /// Same lookup/replacement contract as the domain update: path id for
    /// lookup only, body id written as-is unless `strict_ids`.
    pub async fn update(
        db: &CatalogDb,
        id: &str,
        record: Content,
        strict_ids: bool,
    ) -> Result<Content, CoreError> {
        if strict_ids && record.id != id {
            return Err(CoreError::Validation(format!(
                "Body id '{}' does not match path id '{id}'",
                record.id
            )));
        }
        db.update(|catalog| {
            let slot = catalog
                .content
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or(CoreError::NotFound { entity: "Content" })?;
            *slot = record.clone();
            Ok(record)
        })
        .await
    }

    /// Remove the single content item with the given id, persist.
    pub async fn delete(db: &CatalogDb, id: &str) -> Result<(), CoreError> {
        db.update(|catalog| {
            if !catalog.content.iter().any(|c| c.id == id) {
                return Err(CoreError::NotFound { entity: "Content" });
            }
            catalog.content.retain(|c| c.id != id);
            Ok(())
        })
        .await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
