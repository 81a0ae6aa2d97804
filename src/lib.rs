#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ColorState`**: Both color representations of one light, plus on/off, brightness and mode
//! - **`HslColor`**: Perceptual hue (degrees) / saturation / luminance (percent)
//! - **`RgbChannels`** / **`WhiteChannels`**: 8-bit controller channels
//! - **`OperatingMode`**: Which channel group the controller drives, mapped to its mask byte
//! - **`ColorConverter`**: Forward (`to_rgbww`) and reverse (`to_hsb`) conversion
//! - **`ConverterConfig`**: The saturation threshold below which colors render as white
//!
//! Converters are pure: they take a `ColorState` by reference and return a new one.
//! Color math goes through `palette`; `Srgb` is re-exported for convenience.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

mod fmt;

pub mod colors;
pub mod config;
pub mod converter;
pub mod mode;
pub mod types;
pub mod whites;

pub use config::{ConfigError, ConverterConfig};
pub use converter::{BrightnessEstimate, ColorConverter, estimate_brightness};
pub use mode::OperatingMode;
pub use types::{ColorState, HslColor, RgbChannels, WhiteChannels};
pub use whites::{WhiteTemperature, hue_to_whites, temperature_to_whites, whites_to_temperature};

#[cfg(test)]
mod tests {
    use super::*;

    // Basic compilation tests - behavior is covered in tests/
    #[test]
    fn types_compile() {
        let _ = OperatingMode::Color;
        let _ = OperatingMode::Temperature;
        let _ = ColorState::new();
        let _ = ColorConverter::default();
    }
}
