//! Generic repository trait for entity data access.

use crate::error::AppError;
use async_trait::async_trait;

/// Generic persistence port over a single entity type keyed by integer id.
///
/// One trait definition serves all four entity types; each gets its own
/// instantiation rather than a structurally duplicated interface.
///
/// # Implementations
///
/// - `crate::infrastructure::persistence` - PostgreSQL implementations
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Repository<E: Send + Sync + 'static>: Send + Sync {
    /// Upserts an entity: inserted when the id is absent, replaced wholesale
    /// when the id already exists. Returns the stored representation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn save(&self, entity: E) -> Result<E, AppError>;

    /// Finds an entity by its id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(entity))` if found
    /// - `Ok(None)` if not found; absence is a value, not an error
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i32) -> Result<Option<E>, AppError>;

    /// Returns every stored entity.
    ///
    /// Order is persistence-layer defined and must not be relied upon.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self) -> Result<Vec<E>, AppError>;

    /// Deletes an entity by its id. No-op when the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_id(&self, id: i32) -> Result<(), AppError>;
}
