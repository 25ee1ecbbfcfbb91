//! Thinner for oil paint.

use super::error::{QuotationError, QuotationResult};
use super::litres::ceil_litres;

/// Litres of thinner for `total_paint_litres` of oil paint.
///
/// `ratio_per_4l` is litres of thinner per 4 litres of paint. A zero, negative
/// or unset ratio means no thinner is quoted.
///
/// # Errors
/// `QuantityOverflow` if the thinner litres do not fit in a `u64`.
pub fn calculate_thinner_needed(total_paint_litres: u64, ratio_per_4l: f64) -> QuotationResult<u64> {
    if !ratio_per_4l.is_finite() || ratio_per_4l <= 0.0 {
        return Ok(0);
    }
    let litres = (total_paint_litres as f64 / 4.0) * ratio_per_4l;
    ceil_litres(litres).map_err(|_| QuotationError::quantity_overflow(litres, "thinner"))
}
