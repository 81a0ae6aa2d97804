//! Conversion between perceptual color and RGBWW controller channels.
//!
//! Provides [`ColorConverter`], which turns hue/saturation/brightness commands
//! into red/green/blue/warm/cold channel values and estimates the perceptual
//! color back from a device status report.

use crate::colors::{CHANNEL_MAX, hsl_to_rgb, rgb_to_hsl, scale_by_brightness};
use crate::config::ConverterConfig;
use crate::mode::OperatingMode;
use crate::types::{ColorState, HslColor, RgbChannels, WhiteChannels};
use crate::whites::{hue_to_whites, temperature_to_whites, whites_to_temperature};

/// Hue/saturation pair that always renders as pure warm white.
pub const WARM_WHITE_MARKER: (f32, f32) = (31.0, 33.0);

/// Hue/saturation pair that always renders as pure cold white.
pub const COLD_WHITE_MARKER: (f32, f32) = (208.0, 17.0);

/// Perceptual values recovered from a device state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BrightnessEstimate {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: u8,
}

/// Converts color states between the perceptual and the RGBWW model.
///
/// Holds only its configuration; every operation takes a state by reference
/// and returns a new one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorConverter {
    config: ConverterConfig,
}

impl ColorConverter {
    /// Creates a converter with the given configuration.
    pub const fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[inline]
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Converts a perceptual color to RGBWW channels.
    ///
    /// Reads `hsl` and `brightness` and returns a copy of `state` with `rgb`,
    /// `white` and `operating_mode` filled in. Rules, first match wins:
    ///
    /// 1. The warm white marker (hue 31, saturation 33) drives warm white only.
    /// 2. The cold white marker (hue 208, saturation 17) drives cold white only.
    /// 3. Saturation below the configured threshold drives the hue-derived
    ///    white blend.
    /// 4. Anything else drives the color channels only.
    ///
    /// Never produces [`OperatingMode::Simultaneous`].
    ///
    /// # Panics
    /// Panics if the hue is not finite.
    #[allow(clippy::float_cmp)]
    pub fn to_rgbww(&self, state: &ColorState) -> ColorState {
        let hsl = state.hsl;
        let brightness = state.brightness;
        let threshold = self.config.color_white_threshold();

        let raw_rgb = hsl_to_rgb(hsl);
        let raw_white = hue_to_whites(hsl.hue);

        let rgb = RgbChannels::new(
            scale_by_brightness(f32::from(raw_rgb.red), brightness),
            scale_by_brightness(f32::from(raw_rgb.green), brightness),
            scale_by_brightness(f32::from(raw_rgb.blue), brightness),
        );
        let white = WhiteChannels::new(
            scale_by_brightness(f32::from(raw_white.warm_white), brightness),
            scale_by_brightness(f32::from(raw_white.cold_white), brightness),
        );
        let full_white = scale_by_brightness(CHANNEL_MAX, brightness);

        let (rgb, white, operating_mode) = if (hsl.hue, hsl.saturation) == WARM_WHITE_MARKER {
            trace!("warm white marker, ww={}", full_white);
            (
                RgbChannels::OFF,
                WhiteChannels::new(full_white, 0),
                OperatingMode::Temperature,
            )
        } else if (hsl.hue, hsl.saturation) == COLD_WHITE_MARKER {
            trace!("cold white marker, cw={}", full_white);
            (
                RgbChannels::OFF,
                WhiteChannels::new(0, full_white),
                OperatingMode::Temperature,
            )
        } else if hsl.saturation < threshold {
            trace!(
                "saturation {} below threshold {}, white blend",
                hsl.saturation,
                threshold
            );
            (RgbChannels::OFF, white, OperatingMode::Temperature)
        } else {
            trace!("saturated color");
            (rgb, WhiteChannels::OFF, OperatingMode::Color)
        };

        debug!(
            "hsl {} br {} -> rgb {} white {} mode {}",
            hsl, brightness, rgb, white, operating_mode
        );

        ColorState {
            rgb,
            white,
            operating_mode,
            ..*state
        }
    }

    /// Converts RGBWW channels back to a perceptual color.
    ///
    /// Reads `rgb`, `white` and `is_on` and returns a copy of `state` with
    /// `hsl`, `color_temperature` and `brightness` filled in. Luminance is
    /// taken from the RGB channels as-is; hue and saturation come from
    /// [`estimate_brightness`].
    pub fn to_hsb(&self, state: &ColorState) -> ColorState {
        let provisional = rgb_to_hsl(state.rgb);
        let temperature = whites_to_temperature(state.white);
        let estimate = estimate_brightness(
            provisional,
            state.is_on,
            state.white,
            self.config.color_white_threshold(),
        );

        debug!(
            "rgb {} white {} -> estimate {} mired {}",
            state.rgb, state.white, estimate, temperature.mired
        );

        ColorState {
            hsl: HslColor::new(estimate.hue, estimate.saturation, provisional.luminance),
            brightness: estimate.brightness,
            color_temperature: temperature.mired,
            ..*state
        }
    }

    /// Converts a color temperature command to white channels.
    ///
    /// Reads `color_temperature` (mired) and `brightness` and returns a copy
    /// of `state` driving the white channels only.
    pub fn temperature_to_rgbww(&self, state: &ColorState) -> ColorState {
        let white = temperature_to_whites(state.color_temperature, state.brightness);

        trace!("temperature {} mired -> white {}", state.color_temperature, white);

        ColorState {
            rgb: RgbChannels::OFF,
            white,
            operating_mode: OperatingMode::Temperature,
            ..*state
        }
    }
}

/// Estimates hue, saturation and brightness from a device state.
///
/// * Off: brightness is 0 and hue/saturation pass through unchanged.
/// * On with luminance: brightness is twice the luminance, capped at 100.
/// * On without luminance (white only): brightness is the summed white
///   output, and the dominant white channel picks the hue (0 for warm, 180
///   for cold) with saturation reduced by the weaker channel's share of
///   `threshold`.
pub fn estimate_brightness(
    hsl: HslColor,
    is_on: bool,
    white: WhiteChannels,
    threshold: f32,
) -> BrightnessEstimate {
    let mut hue = hsl.hue;
    let mut saturation = hsl.saturation;
    let warm = f32::from(white.warm_white);
    let cold = f32::from(white.cold_white);

    let brightness = if !is_on {
        trace!("light off");
        0.0
    } else if hsl.luminance > 0.0 {
        trace!("color state, luminance {}", hsl.luminance);
        (hsl.luminance * 2.0).clamp(0.0, 100.0)
    } else {
        if warm > cold {
            saturation = threshold - threshold * (cold / CHANNEL_MAX);
            hue = 0.0;
        } else {
            saturation = threshold - threshold * (warm / CHANNEL_MAX);
            hue = 180.0;
        }
        trace!("white state, ww={} cw={}", white.warm_white, white.cold_white);
        (cold / 2.55 + warm / 2.55).clamp(0.0, 100.0)
    };

    BrightnessEstimate {
        hue,
        saturation,
        brightness: libm::roundf(brightness) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_do_not_overlap_threshold_rule() {
        // Both markers sit above the default threshold, so only the exact
        // match rules can route them to white.
        let threshold = ConverterConfig::default().color_white_threshold();
        assert!(WARM_WHITE_MARKER.1 >= threshold);
        assert!(COLD_WHITE_MARKER.1 >= threshold);
    }

    #[test]
    fn estimate_equal_whites_reads_as_cold() {
        let estimate = estimate_brightness(
            HslColor::new(0.0, 0.0, 0.0),
            true,
            WhiteChannels::new(100, 100),
            20.0,
        );
        assert_eq!(estimate.hue, 180.0);
    }
}
