//! Parameter introspection for discoverable effect parameters.
//!
//! The [`ParameterInfo`] trait enables runtime discovery and manipulation of
//! effect parameters, the generic equivalent of a plugin host's parameter
//! layout. It backs the CLI's parameter listing and the preset system.
//! Host-facing implementations clamp incoming values to the descriptor
//! range via [`ParamDescriptor::clamp`].

/// Trait for effects that expose introspectable parameters.
///
/// Parameters are accessed by zero-based index, stable for the lifetime of
/// the effect instance.
///
/// # Example
///
/// ```rust
/// use retroizer_core::{ParameterInfo, ParamDescriptor};
///
/// struct SimpleGain {
///     gain: f32,
/// }
///
/// impl ParameterInfo for SimpleGain {
///     fn param_count(&self) -> usize { 1 }
///
///     fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
///         match index {
///             0 => Some(ParamDescriptor::custom("Gain", "Gain", 0.0, 2.0, 1.0)
///                 .with_string_id("gain")),
///             _ => None,
///         }
///     }
///
///     fn get_param(&self, index: usize) -> f32 {
///         match index {
///             0 => self.gain,
///             _ => 0.0,
///         }
///     }
///
///     fn set_param(&mut self, index: usize, value: f32) {
///         if index == 0 {
///             self.gain = value.clamp(0.0, 2.0);
///         }
///     }
/// }
/// ```
pub trait ParameterInfo {
    /// Returns the number of parameters this effect exposes.
    ///
    /// Valid parameter indices are `0..param_count()`.
    fn param_count(&self) -> usize;

    /// Returns the descriptor for the parameter at the given index, or
    /// `None` if `index >= param_count()`.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Gets the current value of the parameter at the given index.
    ///
    /// Returns `0.0` for out-of-bounds indices.
    fn get_param(&self, index: usize) -> f32;

    /// Sets the value of the parameter at the given index.
    ///
    /// Implementations clamp to the descriptor range unless the parameter
    /// is documented as unclamped. Out-of-bounds indices are ignored.
    fn set_param(&mut self, index: usize, value: f32);

    /// Find a parameter index by name (case-insensitive).
    ///
    /// Matches against both [`ParamDescriptor::name`] and
    /// [`ParamDescriptor::string_id`].
    fn find_param_by_name(&self, name: &str) -> Option<usize> {
        for i in 0..self.param_count() {
            if let Some(desc) = self.param_info(i)
                && (desc.name.eq_ignore_ascii_case(name)
                    || desc.string_id.eq_ignore_ascii_case(name))
            {
                return Some(i);
            }
        }
        None
    }
}

/// Describes a single parameter's metadata for display and conversion.
///
/// # Short Name
///
/// The `short_name` field should be 8 characters or less for compatibility
/// with hardware displays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name for display (e.g., "Bit Depth").
    pub name: &'static str,

    /// Short name for hardware displays, max 8 characters (e.g., "Bits").
    pub short_name: &'static str,

    /// Unit type for formatting the parameter value.
    pub unit: ParamUnit,

    /// Minimum allowed value for this parameter.
    pub min: f32,

    /// Maximum allowed value for this parameter.
    pub max: f32,

    /// Default value when the effect is initialized.
    pub default: f32,

    /// Recommended step increment for encoder-based control.
    pub step: f32,

    /// Human-readable stable ID for presets and serialization.
    ///
    /// Convention: camelCase matching the persisted document keys
    /// (e.g., `"bitDepth"`, `"radioMix1"`).
    pub string_id: &'static str,
}

impl ParamDescriptor {
    /// Parameter with custom name and linear range.
    pub const fn custom(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::None,
            min,
            max,
            default,
            step: 0.01,
            string_id: "",
        }
    }

    /// Sets the stable string ID. Builder pattern.
    pub const fn with_string_id(mut self, string_id: &'static str) -> Self {
        self.string_id = string_id;
        self
    }

    /// Sets the display unit. Builder pattern.
    pub const fn with_unit(mut self, unit: ParamUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Sets the encoder step increment. Builder pattern.
    pub const fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Clamps a value to this parameter's valid range.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

/// Unit type for parameter display and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Bits - for quantization resolution.
    Bits,

    /// No unit - for dimensionless parameters.
    None,
}

impl ParamUnit {
    /// Returns the unit suffix string for display.
    ///
    /// # Example
    ///
    /// ```rust
    /// use retroizer_core::ParamUnit;
    ///
    /// assert_eq!(ParamUnit::Bits.suffix(), " bits");
    /// assert_eq!(ParamUnit::None.suffix(), "");
    /// ```
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Bits => " bits",
            ParamUnit::None => "",
        }
    }
}
