//! Configuration — motion settings loaded from TOML.
//!
//! The only setting motions care about is the tab stop width, which decides
//! how many visual columns a tab spans when vertical motion restores a
//! column.
//!
//! ```toml
//! tab_width = 8
//! ```
//!
//! Missing keys take their defaults. Unknown keys are rejected so a typo
//! doesn't silently fall back to the default.

use serde::Deserialize;

use n_text::column::DEFAULT_TAB_WIDTH;

/// Motion settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Columns per tab stop. At least 1.
    pub tab_width: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

impl Config {
    /// Parse settings from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML, unknown keys, or
    /// out-of-range values, and [`ConfigError::ZeroTabWidth`] for
    /// `tab_width = 0`.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        if config.tab_width == 0 {
            return Err(ConfigError::ZeroTabWidth);
        }
        Ok(config)
    }
}

/// Failure to load [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The TOML didn't parse or didn't match the expected shape.
    #[error("invalid motion config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Tabs must span at least one column.
    #[error("tab_width must be at least 1")]
    ZeroTabWidth,
}
