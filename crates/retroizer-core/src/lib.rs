//! Retroizer Core - DSP primitives for lo-fi signal degradation
//!
//! This crate provides the foundational building blocks shared by the
//! retroizer effects, designed for real-time audio processing with zero
//! allocation in the audio path.
//!
//! # Core Abstractions
//!
//! - [`Effect`] - Object-safe trait for all audio effects
//! - [`EffectExt`] / [`Chain`] - Zero-cost series composition
//! - [`Biquad`] - Second-order IIR filter with RBJ cookbook band-pass design
//! - [`ParameterInfo`] / [`ParamDescriptor`] - Runtime parameter discovery
//!   and normalized-value conversion
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! retroizer-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: No allocations in audio processing paths
//! - **No dependencies on std**: Pure `no_std` with `libm` for math
//! - **Object-safe traits**: Dynamic dispatch when needed
//! - **Value-semantic effects**: Plain structs with pure mutation methods,
//!   no inheritance-style polymorphism in the DSP core

#![cfg_attr(not(feature = "std"), no_std)]

pub mod biquad;
pub mod effect;
pub mod math;
pub mod param_info;

// Re-export main types at crate root
pub use biquad::{Biquad, bandpass_coefficients};
pub use effect::{Chain, Effect, EffectExt};
pub use math::wet_dry_mix;
pub use param_info::{ParamDescriptor, ParamUnit, ParameterInfo};
