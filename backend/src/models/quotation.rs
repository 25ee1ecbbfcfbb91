//! Quotation request as submitted by the quotation form.
//!
//! Field names follow the camelCase JSON produced by the form so that a stored
//! `formData` document can be deserialized directly.

use serde::{Deserialize, Serialize};

use super::paint::PaintCategory;

/// Percentage share of a coat's litres assigned to one color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSplit {
    /// Stable color identifier.
    pub code: String,
    /// Display label. The code is shown when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Share in percent. A missing value counts as 0.
    #[serde(default)]
    pub percentage: f64,
}

impl ColorSplit {
    pub fn new(code: impl Into<String>, percentage: f64) -> Self {
        Self {
            code: code.into(),
            name: None,
            percentage,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name to print next to the code, falling back to the code itself.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.code,
        }
    }
}

/// One paint category's share of the project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintSectionInput {
    /// Square meters to coat. Zero means the category is not used.
    #[serde(default)]
    pub area: f64,
    #[serde(default)]
    pub undercoat_colors: Vec<ColorSplit>,
    #[serde(default)]
    pub topcoat_colors: Vec<ColorSplit>,
    /// Legacy form flag. Accepted and carried, but litres ignore it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_area: Option<bool>,
}

impl PaintSectionInput {
    pub fn new(area: f64) -> Self {
        Self {
            area,
            ..Default::default()
        }
    }

    pub fn with_undercoat(mut self, colors: Vec<ColorSplit>) -> Self {
        self.undercoat_colors = colors;
        self
    }

    pub fn with_topcoat(mut self, colors: Vec<ColorSplit>) -> Self {
        self.topcoat_colors = colors;
        self
    }
}

/// Artwork color with an absolute litre amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkColorInput {
    pub color_code: String,
    #[serde(default)]
    pub color_name: String,
    #[serde(default)]
    pub litres: f64,
}

impl ArtworkColorInput {
    pub fn new(code: impl Into<String>, name: impl Into<String>, litres: f64) -> Self {
        Self {
            color_code: code.into(),
            color_name: name.into(),
            litres,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkInput {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub colors: Vec<ArtworkColorInput>,
}

/// Complete quotation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationInput {
    #[serde(default)]
    pub quotation_name: String,
    #[serde(default)]
    pub total_area: f64,
    #[serde(default)]
    pub oil_paint: PaintSectionInput,
    #[serde(default)]
    pub water_paint: PaintSectionInput,
    #[serde(default)]
    pub artworks: Vec<ArtworkInput>,
}

impl QuotationInput {
    pub fn section(&self, category: PaintCategory) -> &PaintSectionInput {
        match category {
            PaintCategory::Oil => &self.oil_paint,
            PaintCategory::Water => &self.water_paint,
        }
    }

    /// Parse a request from its JSON form.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_form_json() {
        let json = r#"{
            "quotationName": "Lobby",
            "totalArea": 120,
            "oilPaint": {
                "area": 100,
                "doubleArea": true,
                "undercoatColors": [{"code": "W01", "percentage": 60}, {"code": "G07", "name": "Grey", "percentage": 40}],
                "topcoatColors": [{"code": "W01", "percentage": 100}]
            },
            "waterPaint": {"area": 0, "undercoatColors": [], "topcoatColors": []},
            "artworks": [{"id": "a1", "name": "Mural", "colors": [{"colorCode": "R2", "colorName": "Red", "litres": 3}]}]
        }"#;

        let input = QuotationInput::from_json_str(json).unwrap();
        assert_eq!(input.quotation_name, "Lobby");
        assert_eq!(input.oil_paint.undercoat_colors.len(), 2);
        assert_eq!(input.oil_paint.double_area, Some(true));
        assert_eq!(input.oil_paint.undercoat_colors[1].display_name(), "Grey");
        assert_eq!(input.artworks[0].colors[0].litres, 3.0);
        assert_eq!(input.section(PaintCategory::Water).area, 0.0);
    }

    #[test]
    fn test_missing_percentage_defaults_to_zero() {
        let split: ColorSplit = serde_json::from_str(r#"{"code": "B3"}"#).unwrap();
        assert_eq!(split.percentage, 0.0);
        assert_eq!(split.display_name(), "B3");
    }

    #[test]
    fn test_missing_code_is_rejected() {
        let result: Result<ColorSplit, _> = serde_json::from_str(r#"{"percentage": 50}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_name_falls_back_to_code() {
        let split = ColorSplit::new("Y1", 10.0).with_name("  ");
        assert_eq!(split.display_name(), "Y1");
    }
}
