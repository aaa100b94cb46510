//! Stereo rack: per-channel effect strips driven by one control frame.
//!
//! Each channel owns its own [`BitCrusher`] feeding a [`RadioEffect`], so
//! hold registers, decimation phase, and filter history stay strictly
//! per-channel. A [`ControlFrame`] of normalized values is mapped onto both
//! strips at once, mirroring a four-knob control surface.

use retroizer_core::{Chain, Effect, EffectExt, ParamDescriptor, ParameterInfo};

use crate::bitcrusher::BitCrusher;
use crate::radio::RadioEffect;

/// One channel's degradation path: crusher into radio.
type Strip = Chain<BitCrusher, RadioEffect>;

/// A snapshot of the four normalized controls, each in [0.0, 1.0].
///
/// The default frame is all zeros — the control surface's initial
/// positions: 1-bit quantization, no decimation, radio stages off.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlFrame {
    /// Bit depth control. 0.0 = 1 bit, 1.0 = 16 bits.
    pub bit_depth: f32,
    /// Decimation control. 0.0 = off, 1.0 = divisor of 32.
    pub sample_rate_reduction: f32,
    /// First radio stage blend.
    pub radio_mix1: f32,
    /// Second radio stage blend.
    pub radio_mix2: f32,
}

/// Stereo pair of effect strips sharing one set of controls.
///
/// ## Parameter Indices (`ParameterInfo`)
///
/// All four parameters are normalized to [0.0, 1.0] and apply to both
/// channels. String IDs match the persisted preset keys.
///
/// | Index | Name | ID |
/// |-------|------|----|
/// | 0 | Bit Depth | `bitDepth` |
/// | 1 | Sample Rate Reduction | `sampleRate` |
/// | 2 | Radio Mix 1 | `radioMix1` |
/// | 3 | Radio Mix 2 | `radioMix2` |
pub struct Rack {
    channels: [Strip; 2],
    controls: ControlFrame,
    sample_rate: f32,
}

impl Rack {
    /// Create a stereo rack with the default control frame applied.
    pub fn new(sample_rate: f32) -> Self {
        let mut rack = Self {
            channels: [
                BitCrusher::new().chain(RadioEffect::new(sample_rate)),
                BitCrusher::new().chain(RadioEffect::new(sample_rate)),
            ],
            controls: ControlFrame::default(),
            sample_rate,
        };
        rack.apply_controls(&ControlFrame::default());
        rack
    }

    /// Retune both strips for a new sample rate and clear all state.
    ///
    /// Call before the first block and on every rate change.
    pub fn prepare(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        for strip in &mut self.channels {
            strip.set_sample_rate(sample_rate);
            strip.reset();
        }
    }

    /// Get the sample rate the rack is prepared for.
    #[must_use]
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Map a frame of normalized controls onto both channel strips.
    ///
    /// Values are forwarded as-is; callers working from untrusted input
    /// should clamp to [0.0, 1.0] first or go through
    /// [`set_param`](ParameterInfo::set_param), which clamps.
    pub fn apply_controls(&mut self, frame: &ControlFrame) {
        for strip in &mut self.channels {
            let crusher = strip.first_mut();
            crusher.set_bit_depth_normalized(frame.bit_depth);
            crusher.set_divisor_normalized(frame.sample_rate_reduction);

            let radio = strip.second_mut();
            radio.set_mix1(frame.radio_mix1);
            radio.set_mix2(frame.radio_mix2);
        }
        self.controls = *frame;
    }

    /// Get the most recently applied control frame.
    #[must_use]
    pub fn controls(&self) -> &ControlFrame {
        &self.controls
    }

    /// Process one stereo sample pair.
    #[inline]
    pub fn process_sample(&mut self, left: f32, right: f32) -> (f32, f32) {
        (self.channels[0].process(left), self.channels[1].process(right))
    }

    /// Process a stereo block in place, one buffer per channel.
    ///
    /// # Panics
    /// Debug-asserts that both buffers have the same length.
    pub fn process_block(&mut self, left: &mut [f32], right: &mut [f32]) {
        debug_assert_eq!(
            left.len(),
            right.len(),
            "Channel buffers must have same length"
        );
        self.channels[0].process_block_inplace(left);
        self.channels[1].process_block_inplace(right);
    }

    /// Process a mono block in place through the left strip.
    pub fn process_mono_block(&mut self, buffer: &mut [f32]) {
        self.channels[0].process_block_inplace(buffer);
    }

    /// Clear all per-channel state. Controls are untouched.
    pub fn reset(&mut self) {
        for strip in &mut self.channels {
            strip.reset();
        }
    }
}

impl ParameterInfo for Rack {
    fn param_count(&self) -> usize {
        4
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        match index {
            0 => Some(
                ParamDescriptor::custom("Bit Depth", "Bits", 0.0, 1.0, 0.0)
                    .with_string_id("bitDepth"),
            ),
            1 => Some(
                ParamDescriptor::custom("Sample Rate Reduction", "SRate", 0.0, 1.0, 0.0)
                    .with_string_id("sampleRate"),
            ),
            2 => Some(
                ParamDescriptor::custom("Radio Mix 1", "Mix1", 0.0, 1.0, 0.0)
                    .with_string_id("radioMix1"),
            ),
            3 => Some(
                ParamDescriptor::custom("Radio Mix 2", "Mix2", 0.0, 1.0, 0.0)
                    .with_string_id("radioMix2"),
            ),
            _ => None,
        }
    }

    fn get_param(&self, index: usize) -> f32 {
        match index {
            0 => self.controls.bit_depth,
            1 => self.controls.sample_rate_reduction,
            2 => self.controls.radio_mix1,
            3 => self.controls.radio_mix2,
            _ => 0.0,
        }
    }

    fn set_param(&mut self, index: usize, value: f32) {
        let Some(desc) = self.param_info(index) else {
            return;
        };
        let value = desc.clamp(value);
        let mut frame = self.controls;
        match index {
            0 => frame.bit_depth = value,
            1 => frame.sample_rate_reduction = value,
            2 => frame.radio_mix1 = value,
            3 => frame.radio_mix2 = value,
            _ => return,
        }
        self.apply_controls(&frame);
    }
}
