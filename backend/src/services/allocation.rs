//! Splitting a coat's litres across its colors.
//!
//! Each color gets `ceil(percentage / 100 * total)` on its own. Percentages are
//! not normalised against each other, so a list that does not add up to 100
//! yields allocations that do not add up to the total. Changing one color's
//! share never moves another color's litres.

use log::warn;

use super::error::{QuotationError, QuotationResult};
use super::litres::ceil_litres;
use super::packaging::calculate_packaging;
use crate::models::{AllocatedColor, ArtworkColorInput, ColorSplit};

const PERCENT_TOLERANCE: f64 = 1e-9;

fn validate_split(index: usize, color: &ColorSplit) -> QuotationResult<()> {
    if color.code.trim().is_empty() {
        return Err(QuotationError::malformed_color(index, "missing color code"));
    }
    if !color.percentage.is_finite() || color.percentage < 0.0 {
        return Err(QuotationError::malformed_color(
            index,
            format!("invalid percentage {} for '{}'", color.percentage, color.code),
        ));
    }
    Ok(())
}

/// Litres for one color share of `total_litres`.
pub fn color_litres(total_litres: u64, percentage: f64) -> QuotationResult<u64> {
    ceil_litres((percentage / 100.0) * total_litres as f64)
}

/// Allocate `total_litres` to `colors` and package each allocation.
///
/// # Arguments
/// * `total_litres` - Litres computed for the whole coat
/// * `colors` - Color shares in display order
/// * `packaging_sizes` - Containers allowed for this coat, largest first
///
/// # Returns
/// One entry per color, in input order. An empty color list gives an empty result.
pub fn distribute_litres_by_color(
    total_litres: u64,
    colors: &[ColorSplit],
    packaging_sizes: &[u64],
) -> QuotationResult<Vec<AllocatedColor>> {
    for (index, color) in colors.iter().enumerate() {
        validate_split(index, color)?;
    }

    let share: f64 = colors.iter().map(|c| c.percentage).sum();
    if !colors.is_empty() && (share - 100.0).abs() > PERCENT_TOLERANCE {
        warn!(
            "color shares add up to {}% instead of 100%; allocating each share as given",
            share
        );
    }

    colors
        .iter()
        .map(|color| {
            let litres = color_litres(total_litres, color.percentage).map_err(|e| match e {
                QuotationError::QuantityOverflow { value, .. } => {
                    QuotationError::quantity_overflow(value, format!("color {}", color.code))
                }
                other => other,
            })?;
            let packaging = calculate_packaging(litres, packaging_sizes).map_err(|e| match e {
                QuotationError::InvalidPackagingCatalog { litres, .. } => {
                    QuotationError::invalid_packaging(litres, format!("color {}", color.code))
                }
                other => other,
            })?;
            Ok(AllocatedColor {
                color_code: color.code.clone(),
                color_name: color.display_name().to_string(),
                litres,
                packaging,
            })
        })
        .collect()
}

/// Package an artwork color, whose litres are given directly.
///
/// Fractional litres are rounded up before packaging.
pub fn package_artwork_color(
    artwork: &str,
    index: usize,
    color: &ArtworkColorInput,
    packaging_sizes: &[u64],
) -> QuotationResult<AllocatedColor> {
    let malformed = |message: String| QuotationError::MalformedArtworkColor {
        artwork: artwork.to_string(),
        index,
        message,
    };

    if color.color_code.trim().is_empty() {
        return Err(malformed("missing color code".to_string()));
    }
    if !color.litres.is_finite() || color.litres < 0.0 {
        return Err(malformed(format!(
            "invalid litres {} for '{}'",
            color.litres, color.color_code
        )));
    }

    let litres = ceil_litres(color.litres)
        .map_err(|_| malformed(format!("litres {} out of range", color.litres)))?;
    let packaging = calculate_packaging(litres, packaging_sizes).map_err(|e| match e {
        QuotationError::InvalidPackagingCatalog { litres, .. } => QuotationError::invalid_packaging(
            litres,
            format!("artwork {} color {}", artwork, color.color_code),
        ),
        other => other,
    })?;

    let color_name = if color.color_name.trim().is_empty() {
        color.color_code.clone()
    } else {
        color.color_name.clone()
    };

    Ok(AllocatedColor {
        color_code: color.color_code.clone(),
        color_name,
        litres,
        packaging,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZES: &[u64] = &[20, 5, 4, 1];

    #[test]
    fn test_sixty_forty_split() {
        let colors = vec![ColorSplit::new("A", 60.0), ColorSplit::new("B", 40.0)];
        let allocated = distribute_litres_by_color(10, &colors, SIZES).unwrap();

        assert_eq!(allocated.len(), 2);
        assert_eq!(allocated[0].litres, 6);
        assert_eq!(allocated[1].litres, 4);
        assert_eq!(allocated[0].packaging.describe(), "1 × 5L, 1 × 1L");
        assert_eq!(allocated[1].packaging.describe(), "1 × 4L");
    }

    #[test]
    fn test_each_share_rounds_up() {
        // 50% of 5L = 2.5 -> 3 for both colors, 6L quoted for a 5L coat
        let colors = vec![ColorSplit::new("A", 50.0), ColorSplit::new("B", 50.0)];
        let allocated = distribute_litres_by_color(5, &colors, SIZES).unwrap();
        assert_eq!(allocated.iter().map(|c| c.litres).sum::<u64>(), 6);
    }

    #[test]
    fn test_shares_are_not_normalised() {
        // Shares adding up to 50% allocate half the coat; this is accepted behaviour.
        let colors = vec![ColorSplit::new("A", 25.0), ColorSplit::new("B", 25.0)];
        let allocated = distribute_litres_by_color(20, &colors, SIZES).unwrap();
        assert_eq!(allocated[0].litres, 5);
        assert_eq!(allocated[1].litres, 5);
    }

    #[test]
    fn test_changing_one_share_leaves_others() {
        let before = vec![ColorSplit::new("A", 50.0), ColorSplit::new("B", 50.0)];
        let after = vec![ColorSplit::new("A", 90.0), ColorSplit::new("B", 50.0)];
        let a = distribute_litres_by_color(40, &before, SIZES).unwrap();
        let b = distribute_litres_by_color(40, &after, SIZES).unwrap();
        assert_eq!(a[1], b[1]);
        assert_ne!(a[0].litres, b[0].litres);
    }

    #[test]
    fn test_empty_colors() {
        assert!(distribute_litres_by_color(10, &[], SIZES).unwrap().is_empty());
    }

    #[test]
    fn test_name_falls_back_to_code() {
        let colors = vec![
            ColorSplit::new("W01", 50.0),
            ColorSplit::new("G07", 50.0).with_name("Dove Grey"),
        ];
        let allocated = distribute_litres_by_color(2, &colors, SIZES).unwrap();
        assert_eq!(allocated[0].color_name, "W01");
        assert_eq!(allocated[1].color_name, "Dove Grey");
    }

    #[test]
    fn test_missing_code_is_malformed() {
        let colors = vec![ColorSplit::new("A", 50.0), ColorSplit::new(" ", 50.0)];
        let err = distribute_litres_by_color(10, &colors, SIZES).unwrap_err();
        assert!(matches!(err, QuotationError::MalformedColorSplit { index: 1, .. }));
    }

    #[test]
    fn test_negative_percentage_is_malformed() {
        let colors = vec![ColorSplit::new("A", -5.0)];
        assert!(distribute_litres_by_color(10, &colors, SIZES).is_err());
    }

    #[test]
    fn test_packaging_error_names_color() {
        let colors = vec![ColorSplit::new("W01", 100.0)];
        let err = distribute_litres_by_color(3, &colors, &[]).unwrap_err();
        assert!(err.to_string().contains("color W01"));
    }

    #[test]
    fn test_artwork_color_rounds_fractional_litres() {
        let color = ArtworkColorInput::new("R2", "Red", 2.2);
        let packaged = package_artwork_color("Mural", 0, &color, SIZES).unwrap();
        assert_eq!(packaged.litres, 3);
        assert_eq!(packaged.color_name, "Red");
        assert_eq!(packaged.packaging.total_capacity(), Some(3));
    }

    #[test]
    fn test_oversized_share_overflows() {
        let colors = vec![ColorSplit::new("A", 1e6)];
        let err = distribute_litres_by_color(u64::MAX / 2, &colors, SIZES).unwrap_err();
        assert!(matches!(err, QuotationError::QuantityOverflow { .. }));
        assert!(err.to_string().contains("color A"));
    }

    #[test]
    fn test_artwork_color_out_of_range() {
        let color = ArtworkColorInput::new("R2", "Red", 1e30);
        let err = package_artwork_color("Mural", 0, &color, SIZES).unwrap_err();
        assert!(matches!(err, QuotationError::MalformedArtworkColor { index: 0, .. }));
    }

    #[test]
    fn test_artwork_color_without_code() {
        let color = ArtworkColorInput::new("", "Red", 1.0);
        let err = package_artwork_color("Mural", 2, &color, SIZES).unwrap_err();
        assert!(matches!(err, QuotationError::MalformedArtworkColor { index: 2, .. }));
    }
}
