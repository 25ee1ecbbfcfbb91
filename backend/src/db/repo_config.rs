//! Reference data configuration file support.
//!
//! Reference data for the local repository is read from a TOML file:
//!
//! ```toml
//! [repository]
//! type = "local"
//!
//! [coverage]
//! oil = 10.0
//! water = 12.0
//!
//! [packaging]
//! sizes = [1, 4, 5, 20]
//! undercoat_sizes = [1, 4]
//! thinner_sizes = [5, 20]
//!
//! [thinner]
//! ratio = 0.25
//!
//! [[artworks]]
//! id = "art-001"
//! name = "Sunrise Mural"
//! color_code = ["Y4", "R2"]
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::factory::RepositoryType;
use super::repositories::LocalRepository;
use super::repository::{ErrorContext, RepositoryError};
use crate::models::{ArtworkCatalogEntry, CoverageTable, PackagingPolicy, PaintCategory};

/// Environment variable naming the configuration file.
pub const REFERENCE_ENV_VAR: &str = "QUOTE_REFERENCE";

/// Reference data configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceConfig {
    #[serde(default)]
    pub repository: RepositorySettings,
    #[serde(default)]
    pub coverage: CoverageTable,
    #[serde(default)]
    pub packaging: PackagingSettings,
    #[serde(default)]
    pub thinner: ThinnerSettings,
    #[serde(default)]
    pub artworks: Vec<ArtworkCatalogEntry>,
}

/// Repository type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type", default = "default_repo_type")]
    pub repo_type: String,
}

fn default_repo_type() -> String {
    "local".to_string()
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            repo_type: default_repo_type(),
        }
    }
}

/// Container catalog and per-material restrictions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackagingSettings {
    #[serde(default)]
    pub sizes: Vec<u64>,
    #[serde(default = "default_undercoat_sizes")]
    pub undercoat_sizes: Vec<u64>,
    #[serde(default = "default_thinner_sizes")]
    pub thinner_sizes: Vec<u64>,
}

fn default_undercoat_sizes() -> Vec<u64> {
    PackagingPolicy::default().undercoat_sizes
}

fn default_thinner_sizes() -> Vec<u64> {
    PackagingPolicy::default().thinner_sizes
}

impl Default for PackagingSettings {
    fn default() -> Self {
        Self {
            sizes: Vec::new(),
            undercoat_sizes: default_undercoat_sizes(),
            thinner_sizes: default_thinner_sizes(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThinnerSettings {
    /// Litres of thinner per 4 litres of oil paint.
    #[serde(default)]
    pub ratio: f64,
}

impl FromStr for ReferenceConfig {
    type Err = RepositoryError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        toml::from_str(content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })
    }
}

impl ReferenceConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(ReferenceConfig)` if successful
    /// * `Err(RepositoryError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RepositoryError::configuration_with_context(
                format!("Failed to read config file: {}", e),
                ErrorContext::new("read_config").with_details(path.display().to_string()),
            )
        })?;

        content.parse()
    }

    /// Load configuration from the default location.
    ///
    /// Uses `QUOTE_REFERENCE` when set, otherwise searches for `reference.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, RepositoryError> {
        if let Ok(path) = std::env::var(REFERENCE_ENV_VAR) {
            return Self::from_file(path);
        }

        let search_paths = [
            PathBuf::from("reference.toml"),
            PathBuf::from("backend/reference.toml"),
            PathBuf::from("../reference.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(RepositoryError::configuration(
            "No reference.toml found in standard locations",
        ))
    }

    /// Get the repository type from configuration.
    pub fn repository_type(&self) -> Result<RepositoryType, RepositoryError> {
        RepositoryType::from_str(&self.repository.repo_type).map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })
    }

    /// Containers allowed for undercoat and thinner.
    pub fn packaging_policy(&self) -> PackagingPolicy {
        PackagingPolicy {
            undercoat_sizes: self.packaging.undercoat_sizes.clone(),
            thinner_sizes: self.packaging.thinner_sizes.clone(),
        }
    }

    /// Build a local repository holding this configuration's reference data.
    pub fn to_local_repository(&self) -> Result<LocalRepository, RepositoryError> {
        let repo = LocalRepository::new();
        for category in PaintCategory::ALL {
            repo.set_coverage(category, self.coverage.get(category))?;
        }
        repo.set_packaging_sizes(self.packaging.sizes.clone())?;
        repo.set_packaging_policy(self.packaging_policy())?;
        repo.set_thinner_ratio(self.thinner.ratio)?;
        for artwork in &self.artworks {
            repo.upsert_artwork(artwork.clone());
        }
        Ok(repo)
    }
}
