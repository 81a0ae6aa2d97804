//! Shared test infrastructure for rgbww-color integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use rgbww_color::{ColorConverter, ColorState, ConverterConfig, HslColor};

// ============================================================================
// Converter Setup
// ============================================================================

/// Converter with the given color/white threshold
pub fn converter(threshold: f32) -> ColorConverter {
    ColorConverter::new(ConverterConfig::new(threshold).unwrap())
}

/// Switched-on state from an explicit HSL color and brightness
pub fn hsl_state(hue: f32, saturation: f32, luminance: f32, brightness: u8) -> ColorState {
    ColorState {
        hsl: HslColor::new(hue, saturation, luminance),
        brightness,
        is_on: true,
        ..ColorState::default()
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two floats with tolerance
pub fn approx_eq(a: f32, b: f32) -> bool {
    const EPSILON: f32 = 0.01;
    (a - b).abs() < EPSILON
}

/// Compare two HSL colors with custom epsilon
pub fn hsl_equal_epsilon(a: HslColor, b: HslColor, epsilon: f32) -> bool {
    (a.hue - b.hue).abs() < epsilon
        && (a.saturation - b.saturation).abs() < epsilon
        && (a.luminance - b.luminance).abs() < epsilon
}
