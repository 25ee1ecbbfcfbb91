//! Loading reference data from configuration files on disk.

use std::io::Write;

use paint_quote::db::{ReferenceConfig, RepositoryError, RepositoryFactory, REFERENCE_ENV_VAR};
use paint_quote::models::{ColorSplit, PaintSectionInput, QuotationInput};
use paint_quote::services::{compute_quotation_summary, load_reference_data, quote};

mod support;

const CONFIG: &str = r#"
[coverage]
oil = 10.0
water = 12.0

[packaging]
sizes = [20, 5, 4, 1]

[thinner]
ratio = 0.25

[[artworks]]
id = "art-001"
name = "Sunrise Mural"
color_code = ["Y4", "R2"]

[[artworks]]
id = "art-002"
name = "Company Logo"
color_code = "B1"
"#;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_config_file_matches_fixture() {
    let file = write_config(CONFIG);
    let config = ReferenceConfig::from_file(file.path()).unwrap();
    let repo = RepositoryFactory::from_config(&config).unwrap();

    let reference = load_reference_data(repo.as_ref()).await.unwrap();
    assert_eq!(reference, support::sample_reference());

    let summary = compute_quotation_summary(&support::sample_input(), &reference).unwrap();
    assert_eq!(summary.oil.undercoat_litres, 10);
}

#[tokio::test]
async fn test_configured_policy_applies_through_quote() {
    let file = write_config(
        r#"
[coverage]
oil = 10.0

[packaging]
sizes = [1, 2, 4, 5, 20]
undercoat_sizes = [2]

[thinner]
ratio = 0.25
"#,
    );
    let config = ReferenceConfig::from_file(file.path()).unwrap();
    let repo = RepositoryFactory::from_config(&config).unwrap();
    let input = QuotationInput {
        total_area: 100.0,
        oil_paint: PaintSectionInput::new(100.0)
            .with_undercoat(vec![ColorSplit::new("W01", 100.0)]),
        ..Default::default()
    };

    let summary = quote(repo.as_ref(), &input).await.unwrap();
    assert_eq!(summary.oil.undercoat_litres, 10);
    assert_eq!(summary.oil.undercoat_breakdown[0].packaging.describe(), "5 × 2L");
    // thinner_sizes not overridden: 2L still ships in the 5L drum
    assert_eq!(summary.oil.thinner.as_ref().unwrap().packaging.describe(), "1 × 5L");
}

#[test]
fn test_env_var_selects_file() {
    let file = write_config("[coverage]\noil = 7.5\n");
    let path = file.path().to_string_lossy().to_string();

    let config = support::with_scoped_env(&[(REFERENCE_ENV_VAR, Some(path.as_str()))], || {
        ReferenceConfig::from_default_location().unwrap()
    });
    assert_eq!(config.coverage.oil, 7.5);
}

#[test]
fn test_env_var_pointing_nowhere() {
    let result = support::with_scoped_env(
        &[(REFERENCE_ENV_VAR, Some("/nonexistent/reference.toml"))],
        ReferenceConfig::from_default_location,
    );
    assert!(matches!(result, Err(RepositoryError::ConfigurationError { .. })));
}

#[test]
fn test_malformed_file() {
    let file = write_config("[packaging]\nsizes = \"big\"\n");
    let err = ReferenceConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_shipped_reference_file_parses() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/reference.toml");
    let config = ReferenceConfig::from_file(path).unwrap();
    assert!(!config.packaging.sizes.is_empty());
    assert!(config.to_local_repository().is_ok());
}
