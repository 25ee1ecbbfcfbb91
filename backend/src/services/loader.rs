//! Loading reference data from the data-access layer.
//!
//! The lookups are independent of each other, so they run concurrently and
//! the engine waits for all of them. The first failure fails the whole load;
//! a quotation is never computed from partial or default reference data.

use log::debug;

use super::error::QuotationResult;
use super::summary::compute_quotation_summary;
use crate::db::repository::ReferenceRepository;
use crate::models::{
    CoverageTable, PackagingCatalog, PaintCategory, QuotationInput, QuotationSummary,
    ReferenceData,
};

/// Fetch coverage, packaging and its policy, thinner ratio and the artwork catalog.
pub async fn load_reference_data<R>(repo: &R) -> QuotationResult<ReferenceData>
where
    R: ReferenceRepository + ?Sized,
{
    let (oil, water, sizes, policy, thinner_ratio, artwork_catalog) = tokio::try_join!(
        repo.get_coverage(PaintCategory::Oil),
        repo.get_coverage(PaintCategory::Water),
        repo.get_packaging_sizes(),
        repo.get_packaging_policy(),
        repo.get_thinner_ratio(),
        repo.get_artwork_catalog(),
    )?;

    let packaging = PackagingCatalog::from_sizes(sizes);
    debug!(
        "reference data loaded: coverage oil={} water={}, packaging={:?} (undercoat {:?}, thinner {:?}), thinner={}, artworks={}",
        oil,
        water,
        packaging.sizes(),
        policy.undercoat_sizes,
        policy.thinner_sizes,
        thinner_ratio,
        artwork_catalog.len()
    );

    Ok(
        ReferenceData::new(CoverageTable::new(oil, water), packaging, thinner_ratio)
            .with_artwork_catalog(artwork_catalog)
            .with_policy(policy),
    )
}

/// Load reference data and compute the summary for `input`.
pub async fn quote<R>(repo: &R, input: &QuotationInput) -> QuotationResult<QuotationSummary>
where
    R: ReferenceRepository + ?Sized,
{
    let reference = load_reference_data(repo).await?;
    compute_quotation_summary(input, &reference)
}
