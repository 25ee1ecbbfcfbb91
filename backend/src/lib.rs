//! # Paint Quote
//!
//! Quotation engine for painting projects.
//!
//! Given the areas to paint, how each coat is split across colors and the
//! artwork colors ordered, the engine works out how many litres of paint and
//! thinner are needed and how to package them into the container sizes on
//! sale. The resulting summary is what gets stored, rendered to PDF and
//! emailed by the surrounding application.
//!
//! ## Architecture
//!
//! - [`models`]: Request, reference data and summary types
//! - [`services`]: The calculation engine (litres, color allocation, thinner,
//!   packaging, summary assembly) and the reference data loader
//! - [`db`]: Reference data repository trait, in-memory implementation and
//!   TOML configuration
//!
//! ## Example
//!
//! ```
//! use paint_quote::models::*;
//! use paint_quote::services::compute_quotation_summary;
//!
//! let reference = ReferenceData::new(
//!     CoverageTable::new(10.0, 12.0),
//!     PackagingCatalog::from_sizes(vec![1, 4, 5, 20]),
//!     0.25,
//! );
//! let input = QuotationInput {
//!     total_area: 100.0,
//!     oil_paint: PaintSectionInput::new(100.0)
//!         .with_topcoat(vec![ColorSplit::new("W01", 100.0)]),
//!     ..Default::default()
//! };
//!
//! let summary = compute_quotation_summary(&input, &reference).unwrap();
//! assert_eq!(summary.oil.topcoat_litres, 20);
//! ```

pub mod db;
pub mod models;
pub mod services;

pub use models::{QuotationInput, QuotationSummary, ReferenceData};
pub use services::{compute_quotation_summary, QuotationError, QuotationResult};
