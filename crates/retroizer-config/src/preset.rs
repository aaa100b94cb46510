//! Preset file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use retroizer_effects::ControlFrame;

use crate::error::ConfigError;

/// A saved snapshot of the four normalized controls.
///
/// Presets are stored as TOML with camelCase keys; the key names double as
/// the stable parameter IDs. Every value is normalized to [0.0, 1.0], and
/// any key missing from the document falls back to 0.0, so an empty file
/// loads as the default control positions.
///
/// # TOML Format
///
/// ```toml
/// bitDepth = 0.5
/// sampleRate = 0.25
/// radioMix1 = 0.8
/// radioMix2 = 0.3
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Preset {
    /// Bit depth control. 0.0 = 1 bit, 1.0 = 16 bits.
    #[serde(rename = "bitDepth")]
    pub bit_depth: f32,

    /// Decimation control. 0.0 = off, 1.0 = divisor of 32.
    #[serde(rename = "sampleRate")]
    pub sample_rate_reduction: f32,

    /// First radio stage blend.
    #[serde(rename = "radioMix1")]
    pub radio_mix1: f32,

    /// Second radio stage blend.
    #[serde(rename = "radioMix2")]
    pub radio_mix2: f32,
}

impl Preset {
    /// Snapshot a rack's current control frame.
    pub fn from_controls(frame: &ControlFrame) -> Self {
        Self {
            bit_depth: frame.bit_depth,
            sample_rate_reduction: frame.sample_rate_reduction,
            radio_mix1: frame.radio_mix1,
            radio_mix2: frame.radio_mix2,
        }
    }

    /// Convert into a control frame ready for `Rack::apply_controls`.
    pub fn to_controls(&self) -> ControlFrame {
        ControlFrame {
            bit_depth: self.bit_depth,
            sample_rate_reduction: self.sample_rate_reduction,
            radio_mix1: self.radio_mix1,
            radio_mix2: self.radio_mix2,
        }
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let preset: Preset = toml::from_str(&content)?;
        debug!(path = %path.display(), "loaded preset");
        Ok(preset)
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the preset to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        // Ensure parent directory exists
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        debug!(path = %path.display(), "saved preset");
        Ok(())
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl From<&ControlFrame> for Preset {
    fn from(frame: &ControlFrame) -> Self {
        Preset::from_controls(frame)
    }
}

impl From<&Preset> for ControlFrame {
    fn from(preset: &Preset) -> Self {
        preset.to_controls()
    }
}
