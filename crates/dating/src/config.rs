//! TOML configuration for the converters.

use imperial_calendar::YearModel;
use serde::Deserialize;

use crate::check::CheckNumber;
use crate::date::Layout;
use crate::error::ImperialError;
use crate::input::TimestampUnit;
use crate::options::{ForwardOptions, InverseOptions, OutputKind, utc_offset};

/// Converter configuration, usually embedded in an application's own
/// configuration document.
///
/// # Example
///
/// ```
/// use imperial_dating::{DatingConfig, Layout, YearModel};
///
/// let config = DatingConfig::from_toml_str(
///     r#"
///     [forward]
///     check_number = 5
///     year_model = "sidereal"
///     compact = true
///     "#,
/// )
/// .unwrap();
///
/// let options = config.forward.to_options().unwrap();
/// assert_eq!(options.year_model(), YearModel::Sidereal);
/// assert_eq!(options.layout(), Layout::Compact);
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatingConfig {
    /// Forward (modern to imperial) settings.
    #[serde(default)]
    pub forward: ForwardToml,

    /// Inverse (imperial to modern) settings.
    #[serde(default)]
    pub inverse: InverseToml,
}

impl DatingConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ImperialError::InvalidConfig`] for invalid TOML, unknown
    /// keys or values of the wrong type.
    pub fn from_toml_str(text: &str) -> Result<Self, ImperialError> {
        toml::from_str(text).map_err(|e| ImperialError::InvalidConfig(e.to_string()))
    }
}

/// `[forward]` table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForwardToml {
    #[serde(default)]
    pub check_number: f64,
    #[serde(default)]
    pub year_model: YearModel,
    #[serde(default)]
    pub compact: bool,
    #[serde(default)]
    pub timestamp_unit: TimestampUnit,
    #[serde(default)]
    pub utc_offset_seconds: i32,
}

impl Default for ForwardToml {
    fn default() -> Self {
        Self {
            check_number: 0.0,
            year_model: YearModel::Simple,
            compact: false,
            timestamp_unit: TimestampUnit::Auto,
            utc_offset_seconds: 0,
        }
    }
}

impl ForwardToml {
    /// Validates these settings and builds [`ForwardOptions`].
    ///
    /// # Errors
    ///
    /// Returns [`ImperialError::InvalidParameter`] for a NaN check number or
    /// an offset of a day or more.
    pub fn to_options(&self) -> Result<ForwardOptions, ImperialError> {
        Ok(ForwardOptions::new()
            .with_check_number(CheckNumber::try_from(self.check_number)?)
            .with_year_model(self.year_model)
            .with_layout(Layout::from_compact(self.compact))
            .with_timestamp_unit(self.timestamp_unit)
            .with_utc_offset(utc_offset(self.utc_offset_seconds)?))
    }
}

/// `[inverse]` table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InverseToml {
    #[serde(default = "default_true")]
    pub return_timestamp: bool,
    #[serde(default)]
    pub source_model: YearModel,
    #[serde(default)]
    pub utc_offset_seconds: i32,
}

fn default_true() -> bool {
    true
}

impl Default for InverseToml {
    fn default() -> Self {
        Self {
            return_timestamp: true,
            source_model: YearModel::Simple,
            utc_offset_seconds: 0,
        }
    }
}

impl InverseToml {
    /// Validates these settings and builds [`InverseOptions`].
    ///
    /// # Errors
    ///
    /// Returns [`ImperialError::InvalidParameter`] for an offset of a day or
    /// more.
    pub fn to_options(&self) -> Result<InverseOptions, ImperialError> {
        Ok(InverseOptions::new()
            .with_output(OutputKind::from_return_timestamp(self.return_timestamp))
            .with_source_model(self.source_model)
            .with_utc_offset(utc_offset(self.utc_offset_seconds)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn empty_document_gives_defaults() {
        let config = DatingConfig::from_toml_str("").unwrap();
        assert_eq!(config.forward.to_options().unwrap(), ForwardOptions::default());
        assert_eq!(config.inverse.to_options().unwrap(), InverseOptions::default());
    }

    #[test]
    fn full_document() {
        let config = DatingConfig::from_toml_str(
            r#"
            [forward]
            check_number = 15
            year_model = "sidereal"
            compact = true
            timestamp_unit = "seconds"
            utc_offset_seconds = 3600

            [inverse]
            return_timestamp = false
            source_model = "sidereal"
            utc_offset_seconds = -7200
            "#,
        )
        .unwrap();

        let forward = config.forward.to_options().unwrap();
        assert_eq!(forward.check_number().get(), 9);
        assert_eq!(forward.year_model(), YearModel::Sidereal);
        assert_eq!(forward.layout(), Layout::Compact);
        assert_eq!(forward.timestamp_unit(), TimestampUnit::Seconds);
        assert_eq!(forward.utc_offset().local_minus_utc(), 3600);

        let inverse = config.inverse.to_options().unwrap();
        assert_eq!(inverse.output(), OutputKind::DateTime);
        assert_eq!(inverse.source_model(), YearModel::Sidereal);
        assert_eq!(inverse.utc_offset().local_minus_utc(), -7200);
    }

    #[test]
    fn fractional_check_number() {
        let config = DatingConfig::from_toml_str("[forward]\ncheck_number = 3.9").unwrap();
        assert_eq!(config.forward.to_options().unwrap().check_number().get(), 3);
    }

    #[test]
    fn nan_check_number_is_rejected() {
        let config = DatingConfig::from_toml_str("[forward]\ncheck_number = nan").unwrap();
        let err = config.forward.to_options().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn non_boolean_flag_is_rejected() {
        let err = DatingConfig::from_toml_str("[forward]\ncompact = \"yes\"").unwrap_err();
        assert!(matches!(err, ImperialError::InvalidConfig(_)));
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);

        let err = DatingConfig::from_toml_str("[inverse]\nreturn_timestamp = 1").unwrap_err();
        assert!(matches!(err, ImperialError::InvalidConfig(_)));
    }

    #[test]
    fn non_numeric_check_number_is_rejected() {
        let err = DatingConfig::from_toml_str("[forward]\ncheck_number = \"five\"").unwrap_err();
        assert!(matches!(err, ImperialError::InvalidConfig(_)));
    }

    #[test]
    fn unknown_model_is_rejected() {
        let err = DatingConfig::from_toml_str("[forward]\nyear_model = \"lunar\"").unwrap_err();
        assert!(matches!(err, ImperialError::InvalidConfig(_)));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = DatingConfig::from_toml_str("[forward]\nsimple_year = true").unwrap_err();
        assert!(matches!(err, ImperialError::InvalidConfig(_)));
    }

    #[test]
    fn out_of_range_offset_is_rejected() {
        let config = DatingConfig::from_toml_str("[inverse]\nutc_offset_seconds = 90000").unwrap();
        assert_eq!(
            config.inverse.to_options().unwrap_err(),
            ImperialError::InvalidParameter {
                name: "utc offset",
                value: "90000".to_string(),
            }
        );
    }
}
