//! Autoscaler configuration resource.
//!
//! Built once from the host's [`PluginParameters`] and inserted into the world
//! before the first tick. No system takes it mutably.
//!
//! | Parameter               | Type          | Default |
//! |-------------------------|---------------|---------|
//! | `Base Width`            | integer ≥ 1   | 816     |
//! | `Base Height`           | integer ≥ 1   | 624     |
//! | `Maintain Aspect Ratio` | `"true"`/other| true    |
//! | `Resize Delay`          | ms, ≥ 0       | 100     |
//!
//! Missing or empty numeric values fall back to the default; values that are
//! present but not parseable are rejected with a [`ConfigError`]. The aspect
//! flag only uses its default when the key is absent: any present value other
//! than `"true"`, including an empty one, turns it off.

use crate::host::parameters::PluginParameters;
use bevy_ecs::prelude::*;
use log::info;
use std::fmt;
use std::time::Duration;

pub const PARAM_BASE_WIDTH: &str = "Base Width";
pub const PARAM_BASE_HEIGHT: &str = "Base Height";
pub const PARAM_MAINTAIN_ASPECT: &str = "Maintain Aspect Ratio";
pub const PARAM_RESIZE_DELAY: &str = "Resize Delay";

/// Default values, matching the stock 816x624 design resolution.
const DEFAULT_BASE_WIDTH: u32 = 816;
const DEFAULT_BASE_HEIGHT: u32 = 624;
const DEFAULT_MAINTAIN_ASPECT: bool = true;
const DEFAULT_RESIZE_DELAY_MS: u64 = 100;

/// Errors raised while loading the autoscaler configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// A configuration file could not be read or parsed.
    Load(String),
    /// The `plugins.js` manifest is not a valid plugin array.
    Manifest(String),
    /// The manifest has no entry with the requested plugin name.
    MissingPlugin(String),
    /// The manifest entry exists but is switched off.
    PluginDisabled(String),
    /// A numeric parameter holds something that is not a non-negative integer.
    InvalidNumber { key: String, value: String },
    /// A numeric parameter is below its minimum.
    OutOfRange { key: String, value: u64, min: u64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Load(msg) => write!(f, "failed to load configuration: {}", msg),
            ConfigError::Manifest(msg) => write!(f, "invalid plugin manifest: {}", msg),
            ConfigError::MissingPlugin(name) => {
                write!(f, "plugin '{}' not found in manifest", name)
            }
            ConfigError::PluginDisabled(name) => write!(f, "plugin '{}' is disabled", name),
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "parameter '{}' is not a valid number: {:?}", key, value)
            }
            ConfigError::OutOfRange { key, value, min } => {
                write!(f, "parameter '{}' is {} but must be at least {}", key, value, min)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Autoscaler configuration.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoscaleConfig {
    /// Design width of the game in pixels.
    pub base_width: u32,
    /// Design height of the game in pixels.
    pub base_height: u32,
    /// Keep `base_width / base_height` when fitting the window. When false the
    /// surface is stretched to the full window.
    pub maintain_aspect: bool,
    /// Quiet period after the last resize notification before the surface is
    /// resized.
    pub resize_delay: Duration,
}

impl Default for AutoscaleConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoscaleConfig {
    /// Configuration with the default values.
    pub fn new() -> Self {
        Self {
            base_width: DEFAULT_BASE_WIDTH,
            base_height: DEFAULT_BASE_HEIGHT,
            maintain_aspect: DEFAULT_MAINTAIN_ASPECT,
            resize_delay: Duration::from_millis(DEFAULT_RESIZE_DELAY_MS),
        }
    }

    /// Interpret raw plugin parameters.
    pub fn from_parameters(params: &PluginParameters) -> Result<Self, ConfigError> {
        let base_width = parse_number(params, PARAM_BASE_WIDTH, DEFAULT_BASE_WIDTH as u64, 1)?;
        let base_height =
            parse_number(params, PARAM_BASE_HEIGHT, DEFAULT_BASE_HEIGHT as u64, 1)?;
        let resize_delay = parse_number(params, PARAM_RESIZE_DELAY, DEFAULT_RESIZE_DELAY_MS, 0)?;

        let maintain_aspect = match params.get(PARAM_MAINTAIN_ASPECT) {
            Some(value) => value == "true",
            None => DEFAULT_MAINTAIN_ASPECT,
        };

        let config = Self {
            base_width: narrow(PARAM_BASE_WIDTH, base_width)?,
            base_height: narrow(PARAM_BASE_HEIGHT, base_height)?,
            maintain_aspect,
            resize_delay: Duration::from_millis(resize_delay),
        };

        info!(
            "Loaded autoscale config: base {}x{}, maintain_aspect={}, delay={}ms",
            config.base_width,
            config.base_height,
            config.maintain_aspect,
            config.resize_delay.as_millis()
        );

        Ok(config)
    }

    /// Width over height of the design resolution.
    pub fn aspect_ratio(&self) -> f64 {
        self.base_width as f64 / self.base_height as f64
    }
}

/// Parse an integer parameter, using `default` when it is missing or empty.
fn parse_number(
    params: &PluginParameters,
    key: &str,
    default: u64,
    min: u64,
) -> Result<u64, ConfigError> {
    let raw = match params.get(key).map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(default),
    };

    let value = raw.parse::<u64>().map_err(|_| ConfigError::InvalidNumber {
        key: key.to_string(),
        value: raw.to_string(),
    })?;

    if value < min {
        return Err(ConfigError::OutOfRange {
            key: key.to_string(),
            value,
            min,
        });
    }

    Ok(value)
}

fn narrow(key: &str, value: u64) -> Result<u32, ConfigError> {
    u32::try_from(value).map_err(|_| ConfigError::InvalidNumber {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> PluginParameters {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_defaults_on_empty_parameters() {
        let config = AutoscaleConfig::from_parameters(&PluginParameters::new()).unwrap();
        assert_eq!(config, AutoscaleConfig::new());
        assert_eq!(config.base_width, 816);
        assert_eq!(config.base_height, 624);
        assert!(config.maintain_aspect);
        assert_eq!(config.resize_delay, Duration::from_millis(100));
    }

    #[test]
    fn test_empty_numbers_fall_back_to_defaults() {
        let config = AutoscaleConfig::from_parameters(&params(&[
            (PARAM_BASE_WIDTH, ""),
            (PARAM_BASE_HEIGHT, "  "),
            (PARAM_RESIZE_DELAY, ""),
        ]))
        .unwrap();
        assert_eq!(config, AutoscaleConfig::new());
    }

    #[test]
    fn test_empty_maintain_aspect_disables() {
        let config =
            AutoscaleConfig::from_parameters(&params(&[(PARAM_MAINTAIN_ASPECT, "")])).unwrap();
        assert!(!config.maintain_aspect);
        assert_eq!(config.base_width, 816);
        assert_eq!(config.resize_delay, Duration::from_millis(100));
    }

    #[test]
    fn test_explicit_values() {
        let config = AutoscaleConfig::from_parameters(&params(&[
            (PARAM_BASE_WIDTH, "1280"),
            (PARAM_BASE_HEIGHT, " 720 "),
            (PARAM_MAINTAIN_ASPECT, "true"),
            (PARAM_RESIZE_DELAY, "0"),
        ]))
        .unwrap();
        assert_eq!(config.base_width, 1280);
        assert_eq!(config.base_height, 720);
        assert!(config.maintain_aspect);
        assert_eq!(config.resize_delay, Duration::ZERO);
    }

    #[test]
    fn test_maintain_aspect_only_exact_true() {
        for value in ["false", "TRUE", "yes", "1"] {
            let config =
                AutoscaleConfig::from_parameters(&params(&[(PARAM_MAINTAIN_ASPECT, value)]))
                    .unwrap();
            assert!(!config.maintain_aspect, "{value:?} should disable");
        }
    }

    #[test]
    fn test_non_numeric_is_rejected() {
        let err = AutoscaleConfig::from_parameters(&params(&[(PARAM_BASE_WIDTH, "wide")]))
            .unwrap_err();
        match err {
            ConfigError::InvalidNumber { key, value } => {
                assert_eq!(key, PARAM_BASE_WIDTH);
                assert_eq!(value, "wide");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_delay_is_rejected() {
        let err = AutoscaleConfig::from_parameters(&params(&[(PARAM_RESIZE_DELAY, "-5")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { .. }));
    }

    #[test]
    fn test_zero_base_size_is_out_of_range() {
        let err = AutoscaleConfig::from_parameters(&params(&[(PARAM_BASE_HEIGHT, "0")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange { ref key, value: 0, min: 1 } if key == PARAM_BASE_HEIGHT
        ));
    }

    #[test]
    fn test_base_size_overflowing_u32_is_rejected() {
        let err =
            AutoscaleConfig::from_parameters(&params(&[(PARAM_BASE_WIDTH, "5000000000")]))
                .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { .. }));
    }

    #[test]
    fn test_aspect_ratio() {
        let config = AutoscaleConfig::new();
        assert!((config.aspect_ratio() - 816.0 / 624.0).abs() < 1e-12);
    }

    #[test]
    fn test_error_display_names_parameter() {
        let err = ConfigError::OutOfRange {
            key: PARAM_BASE_WIDTH.to_string(),
            value: 0,
            min: 1,
        };
        assert_eq!(
            err.to_string(),
            "parameter 'Base Width' is 0 but must be at least 1"
        );
    }
}
