//! trifle.toml configuration parsing and serialization

use crate::ConfigResult;
use serde::{Deserialize, Serialize};
use tracing::info;
use trifle_core::error::TrifleError;
use trifle_core::types::{calculate_shape_area_with_precision, Shape, DEFAULT_AREA_PRECISION};

/// Largest number of decimal places an f64 area can meaningfully report
pub const MAX_AREA_PRECISION: u32 = 15;

/// Complete trifle.toml configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrifleToml {
    /// Area reporting section
    #[serde(default)]
    pub area: AreaSection,
}

/// Area reporting settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaSection {
    /// Decimal places areas are rounded to
    #[serde(default = "default_precision")]
    pub precision: u32,
}

fn default_precision() -> u32 {
    DEFAULT_AREA_PRECISION
}

impl Default for AreaSection {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

impl AreaSection {
    /// Area of `shape` rounded to the configured precision
    pub fn area_of(&self, shape: &Shape) -> f64 {
        calculate_shape_area_with_precision(shape, self.precision)
    }
}

/// Parse TOML string to TrifleToml configuration
pub fn parse_trifle_toml(content: &str) -> ConfigResult<TrifleToml> {
    let config: TrifleToml = ::toml::from_str(content).map_err(|e| {
        let (line, column) = e
            .span()
            .map(|span| line_column(content, span.start))
            .unwrap_or((0, 0));
        TrifleError::TomlParse {
            message: e.message().to_string(),
            line,
            column,
        }
    })?;

    validate_config(&config)?;

    Ok(config)
}

/// Serialize TrifleToml to TOML string
pub fn serialize_trifle_toml(config: &TrifleToml) -> ConfigResult<String> {
    ::toml::to_string_pretty(config).map_err(|e| TrifleError::ConfigValidation {
        field: "config".to_string(),
        reason: format!("TOML serialization error: {}", e),
    })
}

/// Validate configuration values
pub fn validate_config(config: &TrifleToml) -> ConfigResult<()> {
    validate_precision("area.precision", config.area.precision)
}

/// Check that a precision is within the reportable range
pub(crate) fn validate_precision(field: &str, precision: u32) -> ConfigResult<()> {
    if precision > MAX_AREA_PRECISION {
        return Err(TrifleError::ConfigValidation {
            field: field.to_string(),
            reason: format!(
                "precision {} exceeds the maximum of {} decimal places",
                precision, MAX_AREA_PRECISION
            ),
        });
    }

    Ok(())
}

/// Load and parse trifle.toml from file path
pub fn load_from_file(path: &camino::Utf8Path) -> ConfigResult<TrifleToml> {
    info!("Loading configuration from {}", path);

    let content = std::fs::read_to_string(path)
        .map_err(|e| TrifleError::io(format!("Failed to read {}", path), e))?;

    parse_trifle_toml(&content).map_err(|e| match e {
        TrifleError::ConfigValidation { field, reason } => TrifleError::ConfigValidation {
            field,
            reason: format!("In file {}: {}", path, reason),
        },
        TrifleError::TomlParse {
            message,
            line,
            column,
        } => TrifleError::TomlParse {
            message: format!("In file {}: {}", path, message),
            line,
            column,
        },
        other => other,
    })
}

/// 1-based line and column of a byte offset
fn line_column(content: &str, offset: usize) -> (usize, usize) {
    let prefix = &content[..offset.min(content.len())];
    let line = prefix.matches('\n').count() + 1;
    let column = match prefix.rfind('\n') {
        Some(newline) => prefix[newline + 1..].chars().count() + 1,
        None => prefix.chars().count() + 1,
    };
    (line, column)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn precision_in_range_is_accepted(precision in 0u32..=MAX_AREA_PRECISION) {
            let content = format!("[area]\nprecision = {}\n", precision);
            let config = parse_trifle_toml(&content).unwrap();
            prop_assert_eq!(config.area.precision, precision);
        }

        #[test]
        fn precision_out_of_range_is_rejected(precision in (MAX_AREA_PRECISION + 1)..1000u32) {
            prop_assert!(validate_precision("area.precision", precision).is_err());
        }
    }
}
