//! Warm/cold white channel math.
//!
//! Covers the hue-driven white blend used by the forward converter and the
//! conversions between a white mix and a color temperature.

use crate::colors::{CHANNEL_MAX, clamp, scale_by_brightness};
use crate::types::WhiteChannels;

/// Color temperature of the warm white LEDs, in kelvin.
pub const WARM_WHITE_KELVIN: f32 = 2700.0;

/// Color temperature of the cold white LEDs, in kelvin.
pub const COLD_WHITE_KELVIN: f32 = 6500.0;

/// Coolest color temperature accepted by automation platforms, in mired.
pub const MIN_MIRED: f32 = 140.0;

/// Warmest color temperature accepted by automation platforms, in mired.
pub const MAX_MIRED: f32 = 500.0;

/// A color temperature expressed both ways.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WhiteTemperature {
    pub kelvin: f32,
    pub mired: f32,
}

/// Derives a warm/cold white blend from a hue.
///
/// The closer the hue is to 0/360 the weaker cold white becomes, the closer
/// to 180 the weaker warm white becomes, and both are at full strength at 90
/// and 270. One channel is always at 255 while the other ramps linearly.
///
/// # Panics
/// Panics if `hue` is not finite.
pub fn hue_to_whites(hue: f32) -> WhiteChannels {
    assert!(hue.is_finite(), "hue must be finite");

    let hue = normalize_hue(hue);

    if hue <= 90.0 {
        WhiteChannels::new(255, ramp(hue / 90.0))
    } else if hue <= 180.0 {
        WhiteChannels::new(ramp(1.0 - (hue - 90.0) / 90.0), 255)
    } else if hue <= 270.0 {
        WhiteChannels::new(ramp((hue - 180.0) / 90.0), 255)
    } else {
        WhiteChannels::new(255, ramp(1.0 - (hue - 270.0) / 90.0))
    }
}

/// Estimates the color temperature produced by a warm/cold white mix.
///
/// The result is a linear blend between the two LED temperatures, weighted by
/// the cold share of the mix. An unlit mix reads as the neutral midpoint.
pub fn whites_to_temperature(white: WhiteChannels) -> WhiteTemperature {
    let warm = f32::from(white.warm_white);
    let cold = f32::from(white.cold_white);
    let total = warm + cold;

    let cold_share = if total > 0.0 { cold / total } else { 0.5 };
    let kelvin = WARM_WHITE_KELVIN + cold_share * (COLD_WHITE_KELVIN - WARM_WHITE_KELVIN);
    let mired = clamp(1_000_000.0 / kelvin, MIN_MIRED, MAX_MIRED);

    WhiteTemperature { kelvin, mired }
}

/// Splits a color temperature into a warm/cold white mix at `brightness` percent.
///
/// Temperatures outside the LED range saturate to pure warm or pure cold.
/// A non-finite `mired` is treated as the warmest accepted value.
pub fn temperature_to_whites(mired: f32, brightness: u8) -> WhiteChannels {
    let mired = if mired.is_finite() { mired } else { MAX_MIRED };
    let kelvin = 1_000_000.0 / clamp(mired, MIN_MIRED, MAX_MIRED);
    let kelvin = clamp(kelvin, WARM_WHITE_KELVIN, COLD_WHITE_KELVIN);
    let cold_share = (kelvin - WARM_WHITE_KELVIN) / (COLD_WHITE_KELVIN - WARM_WHITE_KELVIN);

    WhiteChannels::new(
        scale_by_brightness(CHANNEL_MAX * (1.0 - cold_share), brightness),
        scale_by_brightness(CHANNEL_MAX * cold_share, brightness),
    )
}

/// Wraps a finite hue into `[0, 360)`.
fn normalize_hue(hue: f32) -> f32 {
    let wrapped = libm::fmodf(hue, 360.0);
    let wrapped = if wrapped < 0.0 { wrapped + 360.0 } else { wrapped };

    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Scales a `[0, 1]` factor to a rounded channel value.
fn ramp(factor: f32) -> u8 {
    libm::roundf(CHANNEL_MAX * clamp(factor, 0.0, 1.0)) as u8
}
