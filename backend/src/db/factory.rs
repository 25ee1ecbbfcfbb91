//! Repository factory for dependency injection.
//!
//! Builds a reference data repository from runtime configuration.

use std::str::FromStr;
use std::sync::Arc;

use super::repo_config::ReferenceConfig;
use super::repositories::LocalRepository;
use super::repository::{ReferenceRepository, RepositoryResult};

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// In-memory local repository seeded from configuration
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string ("local", "memory").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" | "memory" | "in-memory" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```ignore
/// use paint_quote::db::{ReferenceConfig, RepositoryFactory};
///
/// let config = ReferenceConfig::from_default_location()?;
/// let repo = RepositoryFactory::from_config(&config)?;
/// let reference = paint_quote::services::load_reference_data(repo.as_ref()).await?;
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create an empty in-memory local repository.
    pub fn create_local() -> Arc<dyn ReferenceRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create the repository selected by `config`, seeded with its reference data.
    pub fn from_config(config: &ReferenceConfig) -> RepositoryResult<Arc<dyn ReferenceRepository>> {
        match config.repository_type()? {
            RepositoryType::Local => Ok(Arc::new(config.to_local_repository()?)),
        }
    }
}
