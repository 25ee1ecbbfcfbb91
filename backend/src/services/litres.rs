//! Litres required for one coat pass.

use super::error::{QuotationError, QuotationResult};

/// Round a real-valued litre amount up to whole litres.
///
/// Negative values clamp to zero. Amounts that do not fit in a `u64` are an
/// error rather than a saturated (short) quantity.
pub(crate) fn ceil_litres(value: f64) -> QuotationResult<u64> {
    let rounded = value.ceil();
    if rounded <= 0.0 {
        return Ok(0);
    }
    // u64::MAX as f64 rounds up to 2^64, which is already out of range
    if !rounded.is_finite() || rounded >= u64::MAX as f64 {
        return Err(QuotationError::quantity_overflow(value, "litres"));
    }
    Ok(rounded as u64)
}

/// Compute `ceil(area * multiplier / coverage)`.
///
/// Paint is bought in whole litres and quoting too little is worse than
/// quoting slightly too much, so the result is always rounded up.
///
/// # Arguments
/// * `area` - Square meters to coat, `>= 0`
/// * `coverage_per_litre` - m² one litre covers, `> 0`
/// * `multiplier` - Passes represented by this call (1 undercoat, 2 topcoat)
///
/// # Errors
/// * `InvalidCoverage` if the coverage is not a positive number
/// * `InvalidArea` if the area is negative or not a number
/// * `QuantityOverflow` if the litres do not fit in a `u64`
pub fn calculate_litres(area: f64, coverage_per_litre: f64, multiplier: u32) -> QuotationResult<u64> {
    if !coverage_per_litre.is_finite() || coverage_per_litre <= 0.0 {
        return Err(QuotationError::invalid_coverage(coverage_per_litre));
    }
    if !area.is_finite() || area < 0.0 {
        return Err(QuotationError::invalid_area(area));
    }

    let effective_area = area * f64::from(multiplier);
    ceil_litres(effective_area / coverage_per_litre)
}
