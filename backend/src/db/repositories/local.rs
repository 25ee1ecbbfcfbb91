//! In-memory local repository implementation.
//!
//! Holds reference data in memory behind a lock. It backs the command-line
//! runner (seeded from `reference.toml`) and the tests.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::db::repository::{
    ErrorContext, ReferenceRepository, RepositoryError, RepositoryResult,
};
use crate::models::{ArtworkCatalogEntry, PackagingPolicy, PaintCategory};

/// In-memory reference data store.
///
/// Cloning shares the underlying data. Setters replace stored values; a
/// calculation that already loaded its reference data keeps its own copy.
///
/// # Example
/// ```
/// use paint_quote::db::repositories::LocalRepository;
/// use paint_quote::models::PaintCategory;
///
/// let repo = LocalRepository::new();
/// repo.set_coverage(PaintCategory::Oil, 10.0).unwrap();
/// repo.set_packaging_sizes(vec![1, 4, 5, 20]).unwrap();
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    coverage: BTreeMap<PaintCategory, f64>,
    packaging_sizes: Vec<u64>,
    policy: PackagingPolicy,
    thinner_ratio: Option<f64>,
    artworks: Vec<ArtworkCatalogEntry>,
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            coverage: BTreeMap::new(),
            packaging_sizes: Vec::new(),
            policy: PackagingPolicy::default(),
            thinner_ratio: None,
            artworks: Vec::new(),
            is_healthy: true,
        }
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the coverage rate (m² per litre) for a category.
    pub fn set_coverage(&self, category: PaintCategory, rate: f64) -> RepositoryResult<()> {
        if !rate.is_finite() || rate < 0.0 {
            return Err(RepositoryError::validation_with_context(
                format!("coverage must be a non-negative number, got {}", rate),
                ErrorContext::new("set_coverage")
                    .with_entity("coverage")
                    .with_entity_id(category),
            ));
        }
        self.data.write().coverage.insert(category, rate);
        Ok(())
    }

    /// Replace the packaging catalog.
    pub fn set_packaging_sizes(&self, sizes: Vec<u64>) -> RepositoryResult<()> {
        if sizes.iter().any(|s| *s == 0) {
            return Err(RepositoryError::validation_with_context(
                "container sizes must be positive",
                ErrorContext::new("set_packaging_sizes").with_entity("packaging"),
            ));
        }
        self.data.write().packaging_sizes = sizes;
        Ok(())
    }

    /// Replace the undercoat and thinner container restrictions.
    pub fn set_packaging_policy(&self, policy: PackagingPolicy) -> RepositoryResult<()> {
        let sizes = policy.undercoat_sizes.iter().chain(&policy.thinner_sizes);
        if sizes.into_iter().any(|s| *s == 0) {
            return Err(RepositoryError::validation_with_context(
                "policy container sizes must be positive",
                ErrorContext::new("set_packaging_policy").with_entity("packaging"),
            ));
        }
        self.data.write().policy = policy;
        Ok(())
    }

    /// Set litres of thinner per 4 litres of oil paint.
    pub fn set_thinner_ratio(&self, ratio: f64) -> RepositoryResult<()> {
        if !ratio.is_finite() || ratio < 0.0 {
            return Err(RepositoryError::validation_with_context(
                format!("thinner ratio must be a non-negative number, got {}", ratio),
                ErrorContext::new("set_thinner_ratio").with_entity("thinner"),
            ));
        }
        self.data.write().thinner_ratio = Some(ratio);
        Ok(())
    }

    /// Insert an artwork, replacing any entry with the same id.
    pub fn upsert_artwork(&self, artwork: ArtworkCatalogEntry) {
        let mut data = self.data.write();
        match data.artworks.iter_mut().find(|a| a.id == artwork.id) {
            Some(existing) => *existing = artwork,
            None => data.artworks.push(artwork),
        }
    }

    pub fn remove_artwork(&self, id: &str) -> RepositoryResult<ArtworkCatalogEntry> {
        let mut data = self.data.write();
        let position = data.artworks.iter().position(|a| a.id == id).ok_or_else(|| {
            RepositoryError::not_found_with_context(
                "artwork not in catalog",
                ErrorContext::new("remove_artwork")
                    .with_entity("artwork")
                    .with_entity_id(id),
            )
        })?;
        Ok(data.artworks.remove(position))
    }

    /// Simulate an unreachable store.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        *self.data.write() = LocalData::default();
    }

    fn check_health(&self, operation: &str) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::connection("Reference store is not healthy")
                .with_operation(operation));
        }
        Ok(())
    }
}

#[async_trait]
impl ReferenceRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn get_coverage(&self, category: PaintCategory) -> RepositoryResult<f64> {
        self.check_health("get_coverage")?;
        Ok(self.data.read().coverage.get(&category).copied().unwrap_or(0.0))
    }

    async fn get_packaging_sizes(&self) -> RepositoryResult<Vec<u64>> {
        self.check_health("get_packaging_sizes")?;
        Ok(self.data.read().packaging_sizes.clone())
    }

    async fn get_packaging_policy(&self) -> RepositoryResult<PackagingPolicy> {
        self.check_health("get_packaging_policy")?;
        Ok(self.data.read().policy.clone())
    }

    async fn get_thinner_ratio(&self) -> RepositoryResult<f64> {
        self.check_health("get_thinner_ratio")?;
        Ok(self.data.read().thinner_ratio.unwrap_or(0.0))
    }

    async fn get_artwork_catalog(&self) -> RepositoryResult<Vec<ArtworkCatalogEntry>> {
        self.check_health("get_artwork_catalog")?;
        Ok(self.data.read().artworks.clone())
    }
}
