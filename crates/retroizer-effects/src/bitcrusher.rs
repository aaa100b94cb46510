//! Bit crusher: amplitude quantization and zero-order-hold decimation.
//!
//! # Theory
//!
//! ## Quantization
//!
//! With a resolution of B bits the quantization step is `0.5^B`, and each
//! sample is rounded to the nearest multiple of that step:
//!
//! ```text
//! step = 0.5^B
//! y = floor(x / step + 0.5) · step
//! ```
//!
//! The `+ 0.5` turns truncation into round-to-nearest. Lowering B widens the
//! step and raises the broadband quantization noise floor; at B = 1 only the
//! levels `{-1, -0.5, 0, 0.5, 1, ...}` survive. Fractional B is allowed and
//! produces steps between the integer-bit sizes.
//!
//! Reference: Zolzer, "DAFX: Digital Audio Effects" 2nd ed., Chapter 7.
//!
//! ## Decimation (Zero-Order Hold)
//!
//! Decimation latches every Nth quantized sample and repeats it for the
//! following N-1 samples. The repeated staircase aliases high-frequency
//! content back into the audible band, the dominant artifact of early
//! samplers. A divisor of 1 bypasses the hold entirely, including the
//! sample counter, so re-enabling decimation later restarts from a latch.

use libm::{floorf, powf};
use retroizer_core::{Effect, ParamDescriptor, ParamUnit, ParameterInfo};

/// Amplitude quantizer with an optional zero-order-hold decimator.
///
/// The quantizer runs on every sample; the decimator only engages when the
/// divisor is greater than 1. The held sample is always a quantized value,
/// so decimated output never contains levels the quantizer could not
/// produce.
///
/// ## Parameter Indices (`ParameterInfo`)
///
/// | Index | Name | Range | Default |
/// |-------|------|-------|---------|
/// | 0 | Bit Depth | 1–16 | 16 |
/// | 1 | Downsample | 1–32 | 1 |
///
/// # Example
///
/// ```rust
/// use retroizer_effects::BitCrusher;
/// use retroizer_core::Effect;
///
/// let mut crusher = BitCrusher::new();
/// crusher.set_bit_depth(4.0);
/// crusher.set_divisor(8);
///
/// let output = crusher.process(0.5);
/// assert!(output.is_finite());
/// ```
#[derive(Debug, Clone)]
pub struct BitCrusher {
    /// Resolution in bits (>= 1.0, fractional allowed).
    bit_depth: f32,
    /// Quantization step, kept in sync with `bit_depth`.
    step: f32,
    /// Decimation divisor (>= 1). 1 disables the hold.
    divisor: u32,
    /// Most recently latched quantized sample.
    held: f32,
    /// Position within the current hold cycle. Only advances while the
    /// divisor is greater than 1.
    sample_count: u64,
}

impl BitCrusher {
    /// Create a transparent `BitCrusher`: 16 bits, no decimation.
    pub fn new() -> Self {
        Self {
            bit_depth: 16.0,
            step: powf(0.5, 16.0),
            divisor: 1,
            held: 0.0,
            sample_count: 0,
        }
    }

    /// Set the resolution in bits. Values below 1.0 are floored to 1.0;
    /// there is no upper limit.
    pub fn set_bit_depth(&mut self, bits: f32) {
        self.bit_depth = bits.max(1.0);
        self.step = powf(0.5, self.bit_depth);
    }

    /// Get the current resolution in bits.
    #[must_use]
    pub fn bit_depth(&self) -> f32 {
        self.bit_depth
    }

    /// Set the decimation divisor. 0 and 1 both mean no decimation.
    pub fn set_divisor(&mut self, divisor: u32) {
        self.divisor = divisor.max(1);
    }

    /// Get the current decimation divisor.
    #[must_use]
    pub fn divisor(&self) -> u32 {
        self.divisor
    }

    /// Set bit depth from a normalized control value.
    ///
    /// 0.0 maps to 1 bit and 1.0 to 16 bits, linearly. Values below 0.0
    /// still floor at 1 bit; values above 1.0 extend past 16.
    pub fn set_bit_depth_normalized(&mut self, amount: f32) {
        self.set_bit_depth(amount * 15.0 + 1.0);
    }

    /// Set the decimation divisor from a normalized control value.
    ///
    /// 1.0 maps to a divisor of 32; anything at or below `1/32` leaves
    /// decimation off. The product truncates toward zero, matching stepped
    /// divisor behaviour rather than rounding.
    pub fn set_divisor_normalized(&mut self, amount: f32) {
        self.set_divisor((amount * 32.0) as u32);
    }

    /// Round a sample to the nearest multiple of `step`.
    #[inline]
    fn quantize(sample: f32, step: f32) -> f32 {
        floorf(sample / step + 0.5) * step
    }
}

impl Default for BitCrusher {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for BitCrusher {
    /// Quantize one sample, then run it through the hold register.
    ///
    /// The counter only advances while the divisor exceeds 1, so toggling
    /// decimation off and on restarts the hold cycle at a latch point.
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        let quantized = Self::quantize(input, self.step);

        if self.divisor > 1 {
            let output = if self.sample_count % u64::from(self.divisor) == 0 {
                self.held = quantized;
                quantized
            } else {
                self.held
            };
            self.sample_count = self.sample_count.wrapping_add(1);
            output
        } else {
            quantized
        }
    }

    /// Quantization and decimation are independent of the host rate.
    fn set_sample_rate(&mut self, _sample_rate: f32) {}

    /// Clear the hold register and restart the hold cycle.
    ///
    /// Parameters are untouched.
    fn reset(&mut self) {
        self.held = 0.0;
        self.sample_count = 0;
    }
}

impl ParameterInfo for BitCrusher {
    fn param_count(&self) -> usize {
        2
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        match index {
            0 => Some(
                ParamDescriptor::custom("Bit Depth", "Bits", 1.0, 16.0, 16.0)
                    .with_unit(ParamUnit::Bits)
                    .with_step(1.0)
                    .with_string_id("bits"),
            ),
            1 => Some(
                ParamDescriptor::custom("Downsample", "Down", 1.0, 32.0, 1.0)
                    .with_step(1.0)
                    .with_string_id("downsample"),
            ),
            _ => None,
        }
    }

    fn get_param(&self, index: usize) -> f32 {
        match index {
            0 => self.bit_depth,
            1 => self.divisor as f32,
            _ => 0.0,
        }
    }

    fn set_param(&mut self, index: usize, value: f32) {
        match index {
            0 => self.set_bit_depth(value.min(16.0)),
            1 => self.set_divisor(value.clamp(1.0, 32.0) as u32),
            _ => {}
        }
    }
}
