//! Color space conversion helpers.
//!
//! Thin wrappers around `palette` that move between the percentage-based
//! [`HslColor`] used by automation platforms and the 8-bit [`RgbChannels`]
//! used by LED controllers.

use crate::types::{HslColor, RgbChannels};
use palette::{FromColor, Hsl, Srgb};

/// Full-scale value of a single LED channel.
pub const CHANNEL_MAX: f32 = 255.0;

/// Clamps `value` into `[min, max]`. NaN collapses to `min`.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Converts a perceptual HSL color to 8-bit RGB channels.
///
/// Saturation and luminance are clamped to `[0, 100]` first; hue wraps.
pub fn hsl_to_rgb(color: HslColor) -> RgbChannels {
    let hsl = Hsl::new(
        color.hue,
        clamp(color.saturation, 0.0, 100.0) / 100.0,
        clamp(color.luminance, 0.0, 100.0) / 100.0,
    );
    let rgb: Srgb = Srgb::from_color(hsl);

    RgbChannels::new(
        quantize(rgb.red),
        quantize(rgb.green),
        quantize(rgb.blue),
    )
}

/// Converts 8-bit RGB channels to a perceptual HSL color.
///
/// Hue is returned in `[0, 360)`; achromatic colors get hue 0.
pub fn rgb_to_hsl(channels: RgbChannels) -> HslColor {
    let rgb: Srgb = Srgb::<u8>::new(channels.red, channels.green, channels.blue).into_format();
    let hsl: Hsl = Hsl::from_color(rgb);

    HslColor::new(
        hsl.hue.into_positive_degrees(),
        hsl.saturation * 100.0,
        hsl.lightness * 100.0,
    )
}

/// Scales a 0-255 channel value by a brightness percentage.
///
/// The channel is clamped to `[0, 255]` and brightness to `[0, 100]` before
/// scaling. Computed as `round(channel / 100 * brightness)` in double
/// precision so results match controller firmware tables.
pub fn scale_by_brightness(channel: f32, brightness: u8) -> u8 {
    let channel = f64::from(clamp(channel, 0.0, CHANNEL_MAX));
    let brightness = f64::from(brightness.min(100));
    let scaled = libm::round(channel / 100.0 * brightness);

    scaled.clamp(0.0, f64::from(CHANNEL_MAX)) as u8
}

/// Maps a normalized `[0, 1]` component to the nearest 8-bit value.
fn quantize(component: f32) -> u8 {
    libm::roundf(clamp(component, 0.0, 1.0) * CHANNEL_MAX) as u8
}
