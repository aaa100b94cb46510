//! Core Effect trait and series composition.
//!
//! The [`Effect`] trait is the seam between the host-facing layer and the
//! DSP core: the host calls [`Effect::process_block_inplace`] once per
//! channel per audio block, and effects advance their internal state one
//! sample at a time.
//!
//! ## Design Decisions
//!
//! - **Mono processing**: Single `f32` input/output. Stereo is built by
//!   instantiating one effect per channel, which keeps decimation phase and
//!   filter history independent between channels.
//!
//! - **Object-safe**: `dyn Effect` works for runtime chaining, though the
//!   static [`Chain`] combinator is preferred on the hot path.
//!
//! - **No allocations**: All methods are callable from a real-time audio
//!   callback with zero heap allocations.

/// Core trait for all audio effects.
///
/// # Example
///
/// ```rust
/// use retroizer_core::Effect;
///
/// struct Gain {
///     gain: f32,
/// }
///
/// impl Effect for Gain {
///     fn process(&mut self, input: f32) -> f32 {
///         input * self.gain
///     }
///
///     fn set_sample_rate(&mut self, _sample_rate: f32) {}
///
///     fn reset(&mut self) {}
/// }
/// ```
pub trait Effect {
    /// Process a single sample, advancing internal state by one tick.
    ///
    /// Input is typically in [-1.0, 1.0]; values outside are processed
    /// without clamping.
    fn process(&mut self, input: f32) -> f32;

    /// Process a block of samples from `input` into `output`.
    ///
    /// Default implementation calls [`process`](Self::process) per sample.
    ///
    /// # Panics
    /// Debug-asserts that `input.len() == output.len()`.
    fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(
            input.len(),
            output.len(),
            "Input and output buffers must have same length"
        );
        for (inp, out) in input.iter().zip(output.iter_mut()) {
            *out = self.process(*inp);
        }
    }

    /// Process a block of samples in place.
    ///
    /// This is the per-channel entry point the host layer calls once per
    /// audio block.
    fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Update the sample rate.
    ///
    /// Effects recalculate any rate-dependent coefficients here (filter
    /// coefficients in particular). Called from `prepare`, never from the
    /// audio callback.
    fn set_sample_rate(&mut self, sample_rate: f32);

    /// Reset internal state without changing parameters.
    ///
    /// Clears hold registers and filter history. Called on transport start
    /// and sample-rate changes so stale state is not audible as a click.
    fn reset(&mut self);
}

/// Extension trait for chaining effects.
pub trait EffectExt: Effect + Sized {
    /// Chain this effect with another; `self` feeds into `next`.
    ///
    /// # Example
    /// ```rust,ignore
    /// let strip = crusher.chain(radio);
    /// ```
    fn chain<E: Effect>(self, next: E) -> Chain<Self, E> {
        Chain {
            first: self,
            second: next,
        }
    }
}

// Blanket implementation for all Effects
impl<T: Effect> EffectExt for T {}

/// Two effects in series, created by [`EffectExt::chain`].
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A: Effect, B: Effect> Effect for Chain<A, B> {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        let mid = self.first.process(input);
        self.second.process(mid)
    }

    fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        self.first.process_block(input, output);
        self.second.process_block_inplace(output);
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.first.set_sample_rate(sample_rate);
        self.second.set_sample_rate(sample_rate);
    }

    fn reset(&mut self) {
        self.first.reset();
        self.second.reset();
    }
}

impl<A, B> Chain<A, B> {
    /// Get a mutable reference to the first effect in the chain.
    pub fn first_mut(&mut self) -> &mut A {
        &mut self.first
    }

    /// Get a mutable reference to the second effect in the chain.
    pub fn second_mut(&mut self) -> &mut B {
        &mut self.second
    }
}
