//! Reference data repository trait.
//!
//! The quotation engine needs five lookups from its data-access layer. Any
//! store that can answer them can back a quotation:
//!
//! ```ignore
//! #[async_trait]
//! impl ReferenceRepository for MyStore { ... }
//!
//! let reference = paint_quote::services::load_reference_data(&store).await?;
//! ```

pub mod error;

use async_trait::async_trait;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use crate::models::{ArtworkCatalogEntry, PackagingPolicy, PaintCategory};

/// Read access to configured reference data.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` so lookups can run concurrently.
#[async_trait]
pub trait ReferenceRepository: Send + Sync {
    /// Check if the backing store is reachable.
    ///
    /// # Returns
    /// - `Ok(true)` if healthy
    /// - `Ok(false)` if unhealthy but no error occurred
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Coverage rate in m² per litre for a paint category.
    ///
    /// An unconfigured category reads as `0.0`; the engine rejects it only if
    /// the category is actually used.
    async fn get_coverage(&self, category: PaintCategory) -> RepositoryResult<f64>;

    /// Container sizes in litres, in any order.
    async fn get_packaging_sizes(&self) -> RepositoryResult<Vec<u64>>;

    /// Litres of thinner per 4 litres of oil paint; `0.0` when not configured.
    async fn get_thinner_ratio(&self) -> RepositoryResult<f64>;

    /// Containers undercoat and thinner may be sold in.
    async fn get_packaging_policy(&self) -> RepositoryResult<PackagingPolicy>;

    /// Known artworks, with color codes normalized to lists.
    async fn get_artwork_catalog(&self) -> RepositoryResult<Vec<ArtworkCatalogEntry>>;
}
