//! Radio coloration: two cascaded band-pass blends.
//!
//! Emulates a narrow-band transmission chain (AM radio, intercom, small
//! speaker) with two fixed band-pass filters. The first is wide and centred
//! at 800 Hz, the second tighter and centred at 1200 Hz. Each filter's
//! output is blended with its own input, and the second filter listens to
//! the first blend's band signal, so the stages compound rather than run in
//! parallel — pushing both mixes up narrows the spectrum more than either
//! stage alone.

use retroizer_core::{
    Biquad, Effect, ParamDescriptor, ParameterInfo, bandpass_coefficients, wet_dry_mix,
};

/// Centre frequency and Q of the first (wide) band-pass stage.
const STAGE1_FREQ: f32 = 800.0;
const STAGE1_Q: f32 = 0.5;

/// Centre frequency and Q of the second (tight) band-pass stage.
const STAGE2_FREQ: f32 = 1200.0;
const STAGE2_Q: f32 = 0.7;

/// Two-stage band-pass coloration with independent blend amounts.
///
/// With both mixes at zero the effect is a bit-exact passthrough and the
/// filters hold their state. A filter only advances while its own mix is
/// positive, so an idle stage never accumulates history.
///
/// Mix values are deliberately **not clamped**: amounts above 1.0
/// over-blend toward the band signal and amounts at or below 0.0 disable
/// the stage. Host-facing layers clamp before calling in.
///
/// ## Parameter Indices (`ParameterInfo`)
///
/// | Index | Name | Range | Default |
/// |-------|------|-------|---------|
/// | 0 | Radio Mix 1 | 0–1 | 0 |
/// | 1 | Radio Mix 2 | 0–1 | 0 |
#[derive(Debug, Clone)]
pub struct RadioEffect {
    filter1: Biquad,
    filter2: Biquad,
    mix1: f32,
    mix2: f32,
    sample_rate: f32,
}

impl RadioEffect {
    /// Create a `RadioEffect` with both mixes at zero (passthrough).
    pub fn new(sample_rate: f32) -> Self {
        Self {
            filter1: Biquad::bandpass(STAGE1_FREQ, STAGE1_Q, sample_rate),
            filter2: Biquad::bandpass(STAGE2_FREQ, STAGE2_Q, sample_rate),
            mix1: 0.0,
            mix2: 0.0,
            sample_rate,
        }
    }

    /// Set the first stage's blend amount. Not clamped.
    pub fn set_mix1(&mut self, mix: f32) {
        self.mix1 = mix;
    }

    /// Get the first stage's blend amount.
    #[must_use]
    pub fn mix1(&self) -> f32 {
        self.mix1
    }

    /// Set the second stage's blend amount. Not clamped.
    pub fn set_mix2(&mut self, mix: f32) {
        self.mix2 = mix;
    }

    /// Get the second stage's blend amount.
    #[must_use]
    pub fn mix2(&self) -> f32 {
        self.mix2
    }

    /// Get the sample rate the filters are currently tuned for.
    #[must_use]
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }
}

impl Effect for RadioEffect {
    /// Run one sample through the active band-pass stages.
    ///
    /// The band signal cascades: stage 2 filters stage 1's band output when
    /// stage 1 is active, otherwise the raw input.
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        if self.mix1 == 0.0 && self.mix2 == 0.0 {
            return input;
        }

        let mut band = input;
        let mut output = input;

        if self.mix1 > 0.0 {
            band = self.filter1.process(band);
            output = wet_dry_mix(output, band, self.mix1);
        }

        if self.mix2 > 0.0 {
            band = self.filter2.process(band);
            output = wet_dry_mix(output, band, self.mix2);
        }

        output
    }

    /// Re-derive both band-pass coefficients for the new rate.
    ///
    /// Filter state is kept; callers that need a clean start follow up with
    /// [`reset`](Effect::reset).
    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;

        let (b0, b1, b2, a0, a1, a2) = bandpass_coefficients(STAGE1_FREQ, STAGE1_Q, sample_rate);
        self.filter1.set_coefficients(b0, b1, b2, a0, a1, a2);

        let (b0, b1, b2, a0, a1, a2) = bandpass_coefficients(STAGE2_FREQ, STAGE2_Q, sample_rate);
        self.filter2.set_coefficients(b0, b1, b2, a0, a1, a2);
    }

    /// Clear both filters' delay lines. Mix amounts are untouched.
    fn reset(&mut self) {
        self.filter1.clear();
        self.filter2.clear();
    }
}

impl ParameterInfo for RadioEffect {
    fn param_count(&self) -> usize {
        2
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        match index {
            0 => Some(
                ParamDescriptor::custom("Radio Mix 1", "Mix1", 0.0, 1.0, 0.0)
                    .with_string_id("radioMix1"),
            ),
            1 => Some(
                ParamDescriptor::custom("Radio Mix 2", "Mix2", 0.0, 1.0, 0.0)
                    .with_string_id("radioMix2"),
            ),
            _ => None,
        }
    }

    fn get_param(&self, index: usize) -> f32 {
        match index {
            0 => self.mix1,
            1 => self.mix2,
            _ => 0.0,
        }
    }

    /// Sets a mix amount. Unclamped, per the effect's contract.
    fn set_param(&mut self, index: usize, value: f32) {
        match index {
            0 => self.set_mix1(value),
            1 => self.set_mix2(value),
            _ => {}
        }
    }
}
