//! Retroizer Config - preset persistence
//!
//! Saves and restores the four normalized controls as TOML documents with
//! stable camelCase keys, the same IDs the [`retroizer_effects::Rack`]
//! exposes through its parameter layout. Loading is forgiving: missing keys
//! fall back to the default control positions.

pub mod error;
pub mod preset;

pub use error::ConfigError;
pub use preset::Preset;
