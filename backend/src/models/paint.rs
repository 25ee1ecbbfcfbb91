//! Paint categories and coat passes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Paint category with its own coverage rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaintCategory {
    /// Solvent-based gloss paint. The only category that needs thinner.
    Oil,
    /// Water-based vinyl matt paint.
    Water,
}

impl PaintCategory {
    /// All categories in the order they appear in a summary.
    pub const ALL: [PaintCategory; 2] = [PaintCategory::Oil, PaintCategory::Water];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaintCategory::Oil => "oil",
            PaintCategory::Water => "water",
        }
    }

    /// Whether thinner is quoted alongside this category.
    pub fn uses_thinner(&self) -> bool {
        matches!(self, PaintCategory::Oil)
    }
}

impl fmt::Display for PaintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaintCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "oil" => Ok(Self::Oil),
            "water" => Ok(Self::Water),
            _ => Err(format!("Unknown paint category: {}", s)),
        }
    }
}

/// A single coat pass over an area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoatType {
    Undercoat,
    Topcoat,
}

impl CoatType {
    pub const ALL: [CoatType; 2] = [CoatType::Undercoat, CoatType::Topcoat];

    /// Number of passes over the area this coat represents.
    ///
    /// The topcoat is always doubled. The `doubleArea` flag on the input does
    /// not change this; whether it should is still an open product question.
    pub fn multiplier(&self) -> u32 {
        match self {
            CoatType::Undercoat => 1,
            CoatType::Topcoat => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CoatType::Undercoat => "undercoat",
            CoatType::Topcoat => "topcoat",
        }
    }
}

impl fmt::Display for CoatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("oil".parse::<PaintCategory>().unwrap(), PaintCategory::Oil);
        assert_eq!(" Water ".parse::<PaintCategory>().unwrap(), PaintCategory::Water);
        assert!("acrylic".parse::<PaintCategory>().is_err());
    }

    #[test]
    fn test_only_oil_uses_thinner() {
        assert!(PaintCategory::Oil.uses_thinner());
        assert!(!PaintCategory::Water.uses_thinner());
    }

    #[test]
    fn test_coat_multipliers() {
        assert_eq!(CoatType::Undercoat.multiplier(), 1);
        assert_eq!(CoatType::Topcoat.multiplier(), 2);
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&PaintCategory::Oil).unwrap();
        assert_eq!(json, "\"oil\"");
    }
}
