//! Assembly of a complete quotation summary.
//!
//! For each paint category the engine computes undercoat and topcoat litres,
//! splits them across the configured colors and packages every share. Oil
//! paint additionally gets thinner. Artwork colors carry absolute litres and
//! are only packaged.
//!
//! Container availability differs per material:
//!
//! | material        | containers                          |
//! |-----------------|-------------------------------------|
//! | undercoat       | policy undercoat sizes (1L, 4L)     |
//! | topcoat         | full catalog                        |
//! | thinner         | policy thinner sizes (5L, 20L)      |
//! | artwork colors  | full catalog                        |
//!
//! Any failing step aborts the whole summary; no partial result is returned.

use log::{debug, warn};

use super::allocation::{distribute_litres_by_color, package_artwork_color};
use super::error::{QuotationError, QuotationResult};
use super::litres::calculate_litres;
use super::packaging::calculate_packaging;
use super::thinner::calculate_thinner_needed;
use crate::models::{
    ArtworkInput, ArtworkSummary, CategorySummary, CoatType, PaintCategory, PaintSectionInput,
    QuotationInput, QuotationSummary, ReferenceData, ThinnerSummary,
};

/// Litres for one coat of a section. Unused sections never look at coverage.
fn coat_litres(
    section: &PaintSectionInput,
    coverage: f64,
    coat: CoatType,
) -> QuotationResult<u64> {
    if section.area == 0.0 {
        return Ok(0);
    }
    calculate_litres(section.area, coverage, coat.multiplier())
}

fn summarize_category(
    category: PaintCategory,
    section: &PaintSectionInput,
    reference: &ReferenceData,
) -> QuotationResult<CategorySummary> {
    if !section.area.is_finite() || section.area < 0.0 {
        return Err(QuotationError::invalid_area(section.area).for_category(category));
    }
    if section.double_area == Some(true) {
        debug!(
            "{} paint has doubleArea set; topcoat multiplier stays {}",
            category,
            CoatType::Topcoat.multiplier()
        );
    }

    let coverage = reference.coverage.get(category);
    let undercoat_litres = coat_litres(section, coverage, CoatType::Undercoat)
        .map_err(|e| e.for_category(category))?;
    let topcoat_litres = coat_litres(section, coverage, CoatType::Topcoat)
        .map_err(|e| e.for_category(category))?;

    let undercoat_sizes = reference.policy.undercoat_catalog(&reference.packaging);
    let undercoat_breakdown = distribute_litres_by_color(
        undercoat_litres,
        &section.undercoat_colors,
        undercoat_sizes.sizes(),
    )
    .map_err(|e| e.for_coat(CoatType::Undercoat).for_category(category))?;

    let topcoat_breakdown = distribute_litres_by_color(
        topcoat_litres,
        &section.topcoat_colors,
        reference.packaging.sizes(),
    )
    .map_err(|e| e.for_coat(CoatType::Topcoat).for_category(category))?;

    let thinner = if category.uses_thinner() {
        let paint_litres = undercoat_litres.checked_add(topcoat_litres).ok_or_else(|| {
            QuotationError::quantity_overflow(
                undercoat_litres as f64 + topcoat_litres as f64,
                "total paint",
            )
            .for_category(category)
        })?;
        let litres = calculate_thinner_needed(paint_litres, reference.thinner_ratio)
            .map_err(|e| e.for_category(category))?;
        let thinner_sizes = reference.policy.thinner_catalog(&reference.packaging);
        let packaging = calculate_packaging(litres, thinner_sizes.sizes()).map_err(|e| match e {
            QuotationError::InvalidPackagingCatalog { litres, .. } => {
                QuotationError::invalid_packaging(litres, "thinner").for_category(category)
            }
            other => other,
        })?;
        Some(ThinnerSummary { litres, packaging })
    } else {
        None
    };

    debug!(
        "{} paint: area={} undercoat={}L topcoat={}L thinner={}L",
        category,
        section.area,
        undercoat_litres,
        topcoat_litres,
        thinner.as_ref().map(|t| t.litres).unwrap_or(0)
    );

    Ok(CategorySummary {
        area: section.area,
        undercoat_litres,
        topcoat_litres,
        undercoat_breakdown,
        topcoat_breakdown,
        thinner,
    })
}

fn summarize_artwork(
    artwork: &ArtworkInput,
    reference: &ReferenceData,
) -> QuotationResult<ArtworkSummary> {
    let matched = reference.find_artwork(&artwork.name);
    if matched.is_none() {
        warn!(
            "artwork '{}' not found in catalog; keeping request id '{}'",
            artwork.name, artwork.id
        );
    }

    let colors = artwork
        .colors
        .iter()
        .enumerate()
        .map(|(index, color)| {
            package_artwork_color(&artwork.name, index, color, reference.packaging.sizes())
        })
        .collect::<QuotationResult<Vec<_>>>()?;

    Ok(ArtworkSummary {
        id: matched
            .map(|entry| entry.id.clone())
            .unwrap_or_else(|| artwork.id.clone()),
        name: artwork.name.clone(),
        catalog_color_codes: matched
            .map(|entry| entry.color_codes.clone())
            .unwrap_or_default(),
        colors,
    })
}

/// Compute the full quotation summary.
///
/// Pure and deterministic: the same input and reference data always give an
/// identical summary.
///
/// # Arguments
/// * `input` - The quotation request
/// * `reference` - Resolved coverage, packaging, thinner and artwork data
///
/// # Errors
/// The first error raised by any stage, unchanged apart from added context.
pub fn compute_quotation_summary(
    input: &QuotationInput,
    reference: &ReferenceData,
) -> QuotationResult<QuotationSummary> {
    let oil = summarize_category(PaintCategory::Oil, &input.oil_paint, reference)?;
    let water = summarize_category(PaintCategory::Water, &input.water_paint, reference)?;

    let artworks = input
        .artworks
        .iter()
        .map(|artwork| summarize_artwork(artwork, reference))
        .collect::<QuotationResult<Vec<_>>>()?;

    Ok(QuotationSummary {
        total_area: input.total_area,
        oil,
        water,
        artworks,
    })
}
