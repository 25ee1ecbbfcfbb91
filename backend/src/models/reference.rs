//! Reference data the engine combines with a request.
//!
//! Every value here is an immutable snapshot. Updating reference data means
//! building a new value, never editing one that a calculation is using.

use serde::{Deserialize, Deserializer, Serialize};

use super::paint::PaintCategory;

/// Coverage rate per paint category, in m² per litre.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageTable {
    #[serde(default)]
    pub oil: f64,
    #[serde(default)]
    pub water: f64,
}

impl CoverageTable {
    pub fn new(oil: f64, water: f64) -> Self {
        Self { oil, water }
    }

    pub fn get(&self, category: PaintCategory) -> f64 {
        match category {
            PaintCategory::Oil => self.oil,
            PaintCategory::Water => self.water,
        }
    }

    /// Copy of this table with one category's rate replaced.
    pub fn with_coverage(mut self, category: PaintCategory, rate: f64) -> Self {
        match category {
            PaintCategory::Oil => self.oil = rate,
            PaintCategory::Water => self.water = rate,
        }
        self
    }
}

/// Container sizes in whole litres, distinct and sorted largest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<u64>", into = "Vec<u64>")]
pub struct PackagingCatalog {
    sizes: Vec<u64>,
}

impl PackagingCatalog {
    /// Build a catalog from sizes in any order. Zero sizes and duplicates are dropped.
    pub fn from_sizes<I>(sizes: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let mut sizes: Vec<u64> = sizes.into_iter().filter(|s| *s > 0).collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes.dedup();
        Self { sizes }
    }

    /// Sizes, largest first.
    pub fn sizes(&self) -> &[u64] {
        &self.sizes
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn smallest(&self) -> Option<u64> {
        self.sizes.last().copied()
    }

    pub fn contains(&self, size: u64) -> bool {
        self.sizes.contains(&size)
    }

    /// Catalog restricted to the listed sizes that this catalog actually offers.
    pub fn subset(&self, allowed: &[u64]) -> Self {
        Self {
            sizes: self
                .sizes
                .iter()
                .copied()
                .filter(|s| allowed.contains(s))
                .collect(),
        }
    }
}

impl From<Vec<u64>> for PackagingCatalog {
    fn from(sizes: Vec<u64>) -> Self {
        Self::from_sizes(sizes)
    }
}

impl From<PackagingCatalog> for Vec<u64> {
    fn from(catalog: PackagingCatalog) -> Self {
        catalog.sizes
    }
}

/// Which containers each material may be sold in.
///
/// Undercoat only ships in small tins and thinner only in the solvent drums.
/// Topcoat and artwork colors use the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackagingPolicy {
    #[serde(default = "default_undercoat_sizes")]
    pub undercoat_sizes: Vec<u64>,
    #[serde(default = "default_thinner_sizes")]
    pub thinner_sizes: Vec<u64>,
}

fn default_undercoat_sizes() -> Vec<u64> {
    vec![1, 4]
}

fn default_thinner_sizes() -> Vec<u64> {
    vec![5, 20]
}

impl Default for PackagingPolicy {
    fn default() -> Self {
        Self {
            undercoat_sizes: default_undercoat_sizes(),
            thinner_sizes: default_thinner_sizes(),
        }
    }
}

impl PackagingPolicy {
    pub fn undercoat_catalog(&self, catalog: &PackagingCatalog) -> PackagingCatalog {
        catalog.subset(&self.undercoat_sizes)
    }

    pub fn thinner_catalog(&self, catalog: &PackagingCatalog) -> PackagingCatalog {
        catalog.subset(&self.thinner_sizes)
    }
}

/// Known artwork definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkCatalogEntry {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    /// Stored either as a single code or a list; always a list here.
    #[serde(
        rename = "colorCode",
        alias = "color_code",
        alias = "color_codes",
        default,
        deserialize_with = "one_or_many"
    )]
    pub color_codes: Vec<String>,
}

impl ArtworkCatalogEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color_codes: Vec<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color_codes,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(code) => vec![code],
        OneOrMany::Many(codes) => codes,
    })
}

/// Fully resolved reference data for one quotation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub coverage: CoverageTable,
    pub packaging: PackagingCatalog,
    /// Litres of thinner per 4 litres of oil paint. Zero disables thinner.
    #[serde(default)]
    pub thinner_ratio: f64,
    #[serde(default)]
    pub artwork_catalog: Vec<ArtworkCatalogEntry>,
    #[serde(default)]
    pub policy: PackagingPolicy,
}

impl ReferenceData {
    pub fn new(coverage: CoverageTable, packaging: PackagingCatalog, thinner_ratio: f64) -> Self {
        Self {
            coverage,
            packaging,
            thinner_ratio,
            artwork_catalog: Vec::new(),
            policy: PackagingPolicy::default(),
        }
    }

    pub fn with_artwork_catalog(mut self, catalog: Vec<ArtworkCatalogEntry>) -> Self {
        self.artwork_catalog = catalog;
        self
    }

    pub fn with_policy(mut self, policy: PackagingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Case-insensitive lookup of an artwork by name.
    pub fn find_artwork(&self, name: &str) -> Option<&ArtworkCatalogEntry> {
        let wanted = name.to_lowercase();
        self.artwork_catalog
            .iter()
            .find(|entry| entry.name.to_lowercase() == wanted)
    }
}
