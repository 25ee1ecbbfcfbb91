//! Quotation calculation engine.
//!
//! Everything except [`loader`] is pure and synchronous: functions take
//! values, return new values and never touch shared state.
//!
//! ```text
//! QuotationInput + ReferenceData
//!        │
//!        ├─ litres      area × coats / coverage, rounded up
//!        ├─ allocation  per-color share of each coat
//!        ├─ thinner     oil paint only
//!        └─ packaging   greedy container breakdown
//!        │
//!        ▼
//! QuotationSummary
//! ```

pub mod allocation;
pub mod error;
pub mod litres;
pub mod loader;
pub mod packaging;
pub mod summary;
pub mod thinner;

pub use allocation::{color_litres, distribute_litres_by_color, package_artwork_color};
pub use error::{QuotationError, QuotationResult};
pub use litres::calculate_litres;
pub use loader::{load_reference_data, quote};
pub use packaging::{calculate_packaging, package_with_catalog};
pub use summary::compute_quotation_summary;
pub use thinner::calculate_thinner_needed;
