//! TOML configuration for the composition root.
//!
//! ```toml
//! [discount]
//! tier = "vip"
//!
//! [notification]
//! channel = "sms"
//!
//! [export]
//! format = "json"
//!
//! [validation]
//! min_title_chars = 3
//! min_content_chars = 50
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::article::ValidationRules;
use crate::discount::CustomerTier;
use crate::error::{Error, Result};
use crate::export::Format;
use crate::notification::Channel;

/// Top-level configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// `[discount]`
    pub discount: DiscountConfig,
    /// `[notification]`
    pub notification: NotificationConfig,
    /// `[export]`
    pub export: ExportConfig,
    /// `[validation]`
    pub validation: ValidationRules,
}

/// `[discount]` section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiscountConfig {
    /// Tier whose strategy is wired into the calculator
    pub tier: CustomerTier,
}

/// `[notification]` section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotificationConfig {
    /// Delivery channel
    pub channel: Channel,
}

/// `[export]` section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Output format
    pub format: Format,
}

impl Config {
    /// Parses configuration from TOML text
    ///
    /// # Errors
    ///
    /// [`Error::TomlParse`] on malformed TOML, unknown keys or unknown enum
    /// values.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Reads and parses the file at `path`
    ///
    /// # Errors
    ///
    /// [`Error::ConfigRead`] if the file cannot be read, otherwise as
    /// [`Config::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| Error::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "configuration loaded");
        Ok(config)
    }
}
