#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use paint_quote::db::repositories::LocalRepository;
use paint_quote::db::repository::{ReferenceRepository, RepositoryError, RepositoryResult};
use paint_quote::models::{
    ArtworkCatalogEntry, ArtworkColorInput, ArtworkInput, ColorSplit, CoverageTable,
    PackagingCatalog, PackagingPolicy, PaintCategory, PaintSectionInput, QuotationInput, ReferenceData,
};

pub const CATALOG_SIZES: [u64; 4] = [1, 4, 5, 20];

pub fn sample_reference() -> ReferenceData {
    ReferenceData::new(
        CoverageTable::new(10.0, 12.0),
        PackagingCatalog::from_sizes(CATALOG_SIZES),
        0.25,
    )
    .with_artwork_catalog(vec![
        ArtworkCatalogEntry::new("art-001", "Sunrise Mural", vec!["Y4".into(), "R2".into()]),
        ArtworkCatalogEntry::new("art-002", "Company Logo", vec!["B1".into()]),
    ])
}

/// Local repository holding the same data as [`sample_reference`].
pub fn sample_repository() -> LocalRepository {
    let repo = LocalRepository::new();
    repo.set_coverage(PaintCategory::Oil, 10.0).unwrap();
    repo.set_coverage(PaintCategory::Water, 12.0).unwrap();
    repo.set_packaging_sizes(vec![20, 1, 5, 4]).unwrap();
    repo.set_thinner_ratio(0.25).unwrap();
    for entry in sample_reference().artwork_catalog {
        repo.upsert_artwork(entry);
    }
    repo
}

pub fn sample_input() -> QuotationInput {
    QuotationInput {
        quotation_name: "Office refurbishment".to_string(),
        total_area: 160.0,
        oil_paint: PaintSectionInput::new(100.0)
            .with_undercoat(vec![ColorSplit::new("W01", 60.0), ColorSplit::new("G07", 40.0)])
            .with_topcoat(vec![
                ColorSplit::new("W01", 50.0).with_name("Brilliant White"),
                ColorSplit::new("G07", 50.0),
            ]),
        water_paint: PaintSectionInput::new(60.0)
            .with_undercoat(vec![ColorSplit::new("M3", 100.0)])
            .with_topcoat(vec![ColorSplit::new("M3", 100.0)]),
        artworks: vec![ArtworkInput {
            id: "form-1".to_string(),
            name: "sunrise mural".to_string(),
            colors: vec![
                ArtworkColorInput::new("Y4", "Sun Yellow", 7.0),
                ArtworkColorInput::new("R2", "Brick Red", 2.5),
            ],
        }],
    }
}

/// Which lookup a [`FailingRepository`] breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailingLookup {
    Coverage,
    Packaging,
    Policy,
    Thinner,
    Artworks,
}

/// Repository delegating to the sample data except for one failing lookup.
pub struct FailingRepository {
    inner: LocalRepository,
    failing: FailingLookup,
}

impl FailingRepository {
    pub fn new(failing: FailingLookup) -> Self {
        Self {
            inner: sample_repository(),
            failing,
        }
    }

    fn fail_if(&self, lookup: FailingLookup) -> RepositoryResult<()> {
        if self.failing == lookup {
            return Err(RepositoryError::connection(format!("{:?} lookup failed", lookup)));
        }
        Ok(())
    }
}

#[async_trait]
impl ReferenceRepository for FailingRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(false)
    }

    async fn get_coverage(&self, category: PaintCategory) -> RepositoryResult<f64> {
        self.fail_if(FailingLookup::Coverage)?;
        self.inner.get_coverage(category).await
    }

    async fn get_packaging_sizes(&self) -> RepositoryResult<Vec<u64>> {
        self.fail_if(FailingLookup::Packaging)?;
        self.inner.get_packaging_sizes().await
    }

    async fn get_packaging_policy(&self) -> RepositoryResult<PackagingPolicy> {
        self.fail_if(FailingLookup::Policy)?;
        self.inner.get_packaging_policy().await
    }

    async fn get_thinner_ratio(&self) -> RepositoryResult<f64> {
        self.fail_if(FailingLookup::Thinner)?;
        self.inner.get_thinner_ratio().await
    }

    async fn get_artwork_catalog(&self) -> RepositoryResult<Vec<ArtworkCatalogEntry>> {
        self.fail_if(FailingLookup::Artworks)?;
        self.inner.get_artwork_catalog().await
    }
}

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Restores the previous values on unwind and serializes access to the
/// process environment, since tests run in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}
