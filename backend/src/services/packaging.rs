//! Greedy packaging of a litre quantity into container sizes.
//!
//! Sizes are consumed largest first, taking as many whole containers of each
//! as fit. Whatever is left below the smallest size is covered by one extra
//! container of the smallest size, so the quoted capacity never falls short.
//!
//! The result is not guaranteed to use the fewest containers or the least
//! waste for arbitrary size sets (sizes `[4, 3]` pack 6L as `4 + 3`, not
//! `3 + 3`). It is exact for the catalogs sold in practice, where sizes
//! divide each other, and quotes rely on this precise behaviour.

use log::trace;

use super::error::{QuotationError, QuotationResult};
use crate::models::{PackagingBreakdown, PackagingCatalog};

/// Decompose `litres` into container counts.
///
/// # Arguments
/// * `litres` - Whole litres to package
/// * `sizes_descending` - Allowed container sizes, largest first. Zero sizes are skipped.
///
/// # Errors
/// `InvalidPackagingCatalog` when `litres > 0` and no positive size is given.
pub fn calculate_packaging(
    litres: u64,
    sizes_descending: &[u64],
) -> QuotationResult<PackagingBreakdown> {
    let mut breakdown = PackagingBreakdown::new();
    if litres == 0 {
        return Ok(breakdown);
    }

    let smallest = sizes_descending
        .iter()
        .copied()
        .filter(|s| *s > 0)
        .min()
        .ok_or_else(|| QuotationError::invalid_packaging(litres, "empty container list"))?;

    let mut remaining = litres;
    for &size in sizes_descending.iter().filter(|s| **s > 0) {
        let count = remaining / size;
        if count > 0 {
            breakdown.add(size, count);
            remaining -= count * size;
        }
    }

    if remaining > 0 {
        breakdown.add(smallest, 1);
    }

    trace!("packaged {}L as [{}]", litres, breakdown.describe());
    Ok(breakdown)
}

/// Decompose `litres` using every size of `catalog`.
pub fn package_with_catalog(
    litres: u64,
    catalog: &PackagingCatalog,
) -> QuotationResult<PackagingBreakdown> {
    calculate_packaging(litres, catalog.sizes())
}
