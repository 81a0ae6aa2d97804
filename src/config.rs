//! Converter configuration.

/// Settings supplied by the platform configuration layer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConverterConfig {
    color_white_threshold: f32,
}

impl ConverterConfig {
    /// Saturation threshold used when none is configured.
    pub const DEFAULT_COLOR_WHITE_THRESHOLD: f32 = 10.0;

    /// Creates a validated configuration.
    ///
    /// `color_white_threshold` is the saturation percentage below which a
    /// color command is rendered on the white channels instead.
    ///
    /// # Errors
    /// * `NonFinite` - The threshold is NaN or infinite
    /// * `OutOfRange` - The threshold is outside `[0, 100]`
    pub fn new(color_white_threshold: f32) -> Result<Self, ConfigError> {
        Self::default().with_color_white_threshold(color_white_threshold)
    }

    /// Returns a copy with a different color/white threshold.
    ///
    /// # Errors
    /// Same as [`ConverterConfig::new`].
    pub fn with_color_white_threshold(mut self, threshold: f32) -> Result<Self, ConfigError> {
        if !threshold.is_finite() {
            return Err(ConfigError::NonFinite);
        }
        if !(0.0..=100.0).contains(&threshold) {
            return Err(ConfigError::OutOfRange);
        }

        self.color_white_threshold = threshold;
        Ok(self)
    }

    /// Returns the color/white saturation threshold.
    #[inline]
    pub fn color_white_threshold(&self) -> f32 {
        self.color_white_threshold
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            color_white_threshold: Self::DEFAULT_COLOR_WHITE_THRESHOLD,
        }
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Threshold is NaN or infinite.
    NonFinite,

    /// Threshold is outside `[0, 100]`.
    OutOfRange,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::NonFinite => {
                write!(f, "color/white threshold must be a finite number")
            }
            ConfigError::OutOfRange => {
                write!(f, "color/white threshold must be between 0 and 100")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
