//! Reference data access for the quotation engine.
//!
//! The engine itself never performs I/O. This module provides the collaborator
//! that fetches coverage rates, container sizes, the thinner ratio and the
//! artwork catalog, behind the [`ReferenceRepository`] trait.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Caller (command-line runner, web layer, ...)           │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  services::loader - concurrent reference data fetch     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  ReferenceRepository trait (repository/)                │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │   LocalRepository (in-memory, reference.toml) │
//!     └──────────────────────────────────────────────┘
//! ```

#[cfg(not(feature = "local-repo"))]
compile_error!("Enable at least one repository backend feature.");

pub mod checksum;
pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;

pub use checksum::calculate_checksum;
pub use factory::{RepositoryFactory, RepositoryType};
pub use repo_config::{ReferenceConfig, REFERENCE_ENV_VAR};
pub use repositories::LocalRepository;
pub use repository::{ErrorContext, ReferenceRepository, RepositoryError, RepositoryResult};
