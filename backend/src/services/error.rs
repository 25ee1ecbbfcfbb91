//! Error types for quotation calculations.
//!
//! All of these describe bad configuration or bad input, never transient
//! failures, so nothing in the engine retries them.

use crate::db::repository::RepositoryError;
use crate::models::{CoatType, PaintCategory};

/// Result type for quotation calculations
pub type QuotationResult<T> = Result<T, QuotationError>;

#[derive(Debug, thiserror::Error)]
pub enum QuotationError {
    /// Coverage rate is missing, zero, negative or not a number.
    #[error("Invalid coverage: {coverage} m²/L{}", category_suffix(.category))]
    InvalidCoverage {
        coverage: f64,
        category: Option<PaintCategory>,
    },

    /// Area is negative or not a number.
    #[error("Invalid area: {area} m²{}", category_suffix(.category))]
    InvalidArea {
        area: f64,
        category: Option<PaintCategory>,
    },

    /// No positive container size is available to package a positive quantity.
    #[error("Invalid packaging catalog: no container size available for {litres}L ({context})")]
    InvalidPackagingCatalog { litres: u64, context: String },

    /// A coat color entry without a code, or with an unusable percentage.
    #[error("Malformed color split at position {index}: {message}")]
    MalformedColorSplit {
        index: usize,
        message: String,
        coat: Option<CoatType>,
    },

    /// An artwork color without a code, or with unusable litres.
    #[error("Malformed artwork color '{artwork}' at position {index}: {message}")]
    MalformedArtworkColor {
        artwork: String,
        index: usize,
        message: String,
    },

    /// A quantity too large to be represented in whole litres.
    #[error("Quantity overflow: {value}L exceeds the largest representable amount ({context})")]
    QuantityOverflow { value: f64, context: String },

    /// Reference data could not be loaded.
    #[error("Reference data unavailable: {0}")]
    ReferenceData(#[from] RepositoryError),
}

fn category_suffix(category: &Option<PaintCategory>) -> String {
    match category {
        Some(c) => format!(" for {} paint", c),
        None => String::new(),
    }
}

impl QuotationError {
    pub fn invalid_coverage(coverage: f64) -> Self {
        Self::InvalidCoverage {
            coverage,
            category: None,
        }
    }

    pub fn invalid_area(area: f64) -> Self {
        Self::InvalidArea {
            area,
            category: None,
        }
    }

    pub fn invalid_packaging(litres: u64, context: impl Into<String>) -> Self {
        Self::InvalidPackagingCatalog {
            litres,
            context: context.into(),
        }
    }

    pub fn quantity_overflow(value: f64, context: impl Into<String>) -> Self {
        Self::QuantityOverflow {
            value,
            context: context.into(),
        }
    }

    pub fn malformed_color(index: usize, message: impl Into<String>) -> Self {
        Self::MalformedColorSplit {
            index,
            message: message.into(),
            coat: None,
        }
    }

    /// Attach the paint category to coverage and area errors.
    pub fn for_category(mut self, paint: PaintCategory) -> Self {
        match &mut self {
            Self::InvalidCoverage { category, .. } | Self::InvalidArea { category, .. } => {
                *category = Some(paint);
            }
            Self::InvalidPackagingCatalog { context, .. }
            | Self::QuantityOverflow { context, .. } => {
                *context = format!("{} paint, {}", paint, context);
            }
            _ => {}
        }
        self
    }

    /// Attach the coat pass to color and packaging errors.
    pub fn for_coat(mut self, pass: CoatType) -> Self {
        match &mut self {
            Self::MalformedColorSplit { coat, .. } => *coat = Some(pass),
            Self::InvalidPackagingCatalog { context, .. }
            | Self::QuantityOverflow { context, .. } => {
                *context = format!("{} {}", pass, context);
            }
            _ => {}
        }
        self
    }

    /// Whether the error comes from configured reference data rather than the request.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidCoverage { .. }
                | Self::InvalidPackagingCatalog { .. }
                | Self::ReferenceData(_)
        )
    }
}
