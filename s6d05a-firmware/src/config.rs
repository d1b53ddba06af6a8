//! Embedded panel configuration
//!
//! build.rs parses and validates panel.toml, then stores it in postcard
//! form in OUT_DIR. The bytes are compiled into the image.

use s6d05a_core::config::{ConfigError, PanelConfig};

/// Serialized panel configuration
static EMBEDDED_CONFIG: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/panel.bin"));

/// Configuration loading errors
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoadError {
    /// Embedded bytes are not a valid config
    Deserialize,
    /// Config was parsed but is inconsistent
    Invalid(ConfigError),
}

/// Decode and validate the embedded configuration
pub fn load() -> Result<PanelConfig, LoadError> {
    let config: PanelConfig =
        postcard::from_bytes(EMBEDDED_CONFIG).map_err(|_| LoadError::Deserialize)?;
    config.validate().map_err(LoadError::Invalid)?;
    Ok(config)
}
