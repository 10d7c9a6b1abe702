//! Indicator configuration — TOML-based, host-supplied path.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::{Rgba, parse_color};
use crate::error::{LedError, Result};
use crate::indicator::LedIndicator;
use crate::layout::{Padding, Size};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorConfig {
    /// LED color (hex or name). Default: "#99FF36".
    #[serde(default = "default_color")]
    pub color: String,

    /// Blink interval in milliseconds. 0 = steady light.
    #[serde(default)]
    pub blink_ms: u64,

    /// Frame width in pixels.
    #[serde(default = "default_side")]
    pub width: u32,

    /// Frame height in pixels.
    #[serde(default = "default_side")]
    pub height: u32,

    /// Layout insets around the bulb.
    #[serde(default)]
    pub padding: PaddingConfig,
}

/// Padding as it appears in TOML (`[padding]` table, all sides optional).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct PaddingConfig {
    #[serde(default)]
    pub left: u32,
    #[serde(default)]
    pub top: u32,
    #[serde(default)]
    pub right: u32,
    #[serde(default)]
    pub bottom: u32,
}

fn default_color() -> String {
    "#99FF36".into()
}

fn default_side() -> u32 {
    32
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        IndicatorConfig {
            color: default_color(),
            blink_ms: 0,
            width: default_side(),
            height: default_side(),
            padding: PaddingConfig::default(),
        }
    }
}

impl IndicatorConfig {
    /// Parse from a TOML string. Unknown fields are ignored; missing fields
    /// take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: IndicatorConfig =
            toml::from_str(s).map_err(|e| LedError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Validate field values. Only the color can be rejected; geometry is
    /// clamped at render time, and blink intervals pass through unvalidated.
    pub fn validate(&self) -> Result<()> {
        parse_color(&self.color)
            .map_err(|e| LedError::Config(format!("color: {e}")))?;
        Ok(())
    }

    pub fn led_color(&self) -> Result<Rgba> {
        parse_color(&self.color)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn padding(&self) -> Padding {
        Padding::new(
            self.padding.left,
            self.padding.top,
            self.padding.right,
            self.padding.bottom,
        )
    }

    /// Build an indicator from this config, blinking if `blink_ms` is set.
    pub fn build(&self) -> Result<LedIndicator> {
        let mut led = LedIndicator::with_color(self.led_color()?);
        if self.blink_ms > 0 {
            led.blink(self.blink_ms);
        }
        Ok(led)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let c = IndicatorConfig::default();
        assert_eq!(c.color, "#99FF36");
        assert_eq!(c.blink_ms, 0);
        assert_eq!(c.size(), Size::new(32, 32));
        assert_eq!(c.padding(), Padding::default());
        c.validate().unwrap();
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let c = IndicatorConfig::from_toml_str("").unwrap();
        assert_eq!(c.color, "#99FF36");
        assert_eq!(c.width, 32);
    }

    #[test]
    fn parse_full_toml() {
        let c = IndicatorConfig::from_toml_str(
            r#"
            color = "red"
            blink_ms = 250
            width = 64
            height = 48

            [padding]
            left = 2
            top = 3
            "#,
        )
        .unwrap();
        assert_eq!(c.color, "red");
        assert_eq!(c.blink_ms, 250);
        assert_eq!(c.size(), Size::new(64, 48));
        assert_eq!(c.padding(), Padding::new(2, 3, 0, 0));
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = IndicatorConfig::from_toml_str("color = [").unwrap_err();
        assert!(matches!(err, LedError::Config(_)));
    }

    #[test]
    fn invalid_color_is_config_error() {
        let err = IndicatorConfig::from_toml_str(r#"color = "nope""#).unwrap_err();
        assert!(matches!(err, LedError::Config(_)));
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "color = \"blue\"\nblink_ms = 100").unwrap();
        let c = IndicatorConfig::load(f.path()).unwrap();
        assert_eq!(c.color, "blue");
        assert_eq!(c.blink_ms, 100);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = IndicatorConfig::load(Path::new("/nonexistent/led.toml")).unwrap_err();
        assert!(matches!(err, LedError::Io(_)));
    }

    #[test]
    fn build_steady_indicator() {
        let c = IndicatorConfig::default();
        let led = c.build().unwrap();
        assert!(led.is_on());
        assert!(!led.timer().enabled());
    }

    #[test]
    fn build_blinking_indicator() {
        let c = IndicatorConfig {
            blink_ms: 333,
            ..IndicatorConfig::default()
        };
        let led = c.build().unwrap();
        assert!(led.is_on());
        assert!(led.timer().enabled());
        assert_eq!(led.timer().interval_ms(), 333);
    }
}
