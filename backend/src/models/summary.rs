//! Resolved quotation summary.
//!
//! This is the record persisted with a quotation and handed to the PDF and
//! email collaborators, so its JSON shape is a stable contract.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::paint::PaintCategory;

/// Number of containers per size (litres).
///
/// Serializes as a JSON object keyed by size, e.g. `{"1": 3, "20": 1}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackagingBreakdown(BTreeMap<u64, u64>);

impl PackagingBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` containers of `size` litres.
    pub fn add(&mut self, size: u64, count: u64) {
        if count > 0 {
            *self.0.entry(size).or_insert(0) += count;
        }
    }

    pub fn count(&self, size: u64) -> u64 {
        self.0.get(&size).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Litres held by all containers together, `None` if it overflows a `u64`.
    pub fn total_capacity(&self) -> Option<u64> {
        self.0
            .iter()
            .try_fold(0u64, |total, (size, count)| total.checked_add(size.checked_mul(*count)?))
    }

    pub fn container_count(&self) -> u64 {
        self.0.values().sum()
    }

    /// `(size, count)` pairs, largest size first.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.0.iter().rev().map(|(size, count)| (*size, *count))
    }

    /// Human readable form used on previews and documents: `"1 × 20L, 3 × 1L"`.
    pub fn describe(&self) -> String {
        self.iter()
            .map(|(size, count)| format!("{} × {}L", count, size))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromIterator<(u64, u64)> for PackagingBreakdown {
    fn from_iter<T: IntoIterator<Item = (u64, u64)>>(iter: T) -> Self {
        let mut breakdown = Self::new();
        for (size, count) in iter {
            breakdown.add(size, count);
        }
        breakdown
    }
}

/// Litres and packaging for one color of one coat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocatedColor {
    pub color_code: String,
    pub color_name: String,
    pub litres: u64,
    pub packaging: PackagingBreakdown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThinnerSummary {
    pub litres: u64,
    pub packaging: PackagingBreakdown,
}

/// Materials for one paint category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub area: f64,
    pub undercoat_litres: u64,
    pub topcoat_litres: u64,
    pub undercoat_breakdown: Vec<AllocatedColor>,
    pub topcoat_breakdown: Vec<AllocatedColor>,
    /// Present for oil paint only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thinner: Option<ThinnerSummary>,
}

impl CategorySummary {
    /// Undercoat plus topcoat litres, `None` if it overflows a `u64`.
    pub fn total_litres(&self) -> Option<u64> {
        self.undercoat_litres.checked_add(self.topcoat_litres)
    }

    /// A category with no area is reported but not used.
    pub fn is_used(&self) -> bool {
        self.area > 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkSummary {
    /// Catalog id when the name matched the catalog, otherwise the request id.
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub catalog_color_codes: Vec<String>,
    pub colors: Vec<AllocatedColor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationSummary {
    pub total_area: f64,
    pub oil: CategorySummary,
    pub water: CategorySummary,
    pub artworks: Vec<ArtworkSummary>,
}

impl QuotationSummary {
    pub fn category(&self, category: PaintCategory) -> &CategorySummary {
        match category {
            PaintCategory::Oil => &self.oil,
            PaintCategory::Water => &self.water,
        }
    }

    /// SHA-256 of the serialized summary.
    ///
    /// Equal inputs and reference data always produce the same checksum.
    pub fn checksum(&self) -> serde_json::Result<String> {
        let json = serde_json::to_string(self)?;
        Ok(crate::db::calculate_checksum(&json))
    }
}
