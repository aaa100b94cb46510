//! Retroizer Effects - lo-fi signal degradation DSP
//!
//! Two degradation stages, run in series per channel:
//!
//! - [`BitCrusher`] - amplitude quantization plus zero-order-hold decimation
//! - [`RadioEffect`] - two cascaded band-pass filters blended for a narrow,
//!   "small speaker" coloration
//!
//! The [`Rack`] bundles one crusher-into-radio strip per stereo channel and
//! maps a frame of normalized control values onto both strips, so decimation
//! phase and filter history never cross between left and right.
//!
//! # Example
//!
//! ```rust
//! use retroizer_effects::{ControlFrame, Rack};
//!
//! let mut rack = Rack::new(44100.0);
//! rack.apply_controls(&ControlFrame {
//!     bit_depth: 0.5,
//!     sample_rate_reduction: 0.25,
//!     radio_mix1: 0.8,
//!     radio_mix2: 0.3,
//! });
//!
//! let mut left = vec![0.5_f32; 64];
//! let mut right = vec![-0.5_f32; 64];
//! rack.process_block(&mut left, &mut right);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod bitcrusher;
pub mod radio;
pub mod rack;

pub use bitcrusher::BitCrusher;
pub use radio::RadioEffect;
pub use rack::{ControlFrame, Rack};
