//! Core color-state types shared by the converters.

use crate::mode::OperatingMode;

/// Perceptual color as reported by home-automation platforms.
///
/// `hue` is in degrees `[0, 360)`, `saturation` and `luminance` are
/// percentages `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HslColor {
    /// Hue in degrees.
    pub hue: f32,

    /// Saturation percentage.
    pub saturation: f32,

    /// Luminance percentage.
    pub luminance: f32,
}

impl HslColor {
    /// Creates a new HSL color.
    #[inline]
    pub const fn new(hue: f32, saturation: f32, luminance: f32) -> Self {
        Self {
            hue,
            saturation,
            luminance,
        }
    }
}

/// Device-native color channels (0-255 each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RgbChannels {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbChannels {
    /// All color channels off.
    pub const OFF: Self = Self::new(0, 0, 0);

    /// Creates a new RGB channel triple.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Returns `true` if any channel is lit.
    #[inline]
    pub const fn is_lit(&self) -> bool {
        self.red > 0 || self.green > 0 || self.blue > 0
    }
}

/// Device-native white channels (0-255 each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WhiteChannels {
    pub warm_white: u8,
    pub cold_white: u8,
}

impl WhiteChannels {
    /// Both white channels off.
    pub const OFF: Self = Self::new(0, 0);

    /// Creates a new warm/cold white pair.
    #[inline]
    pub const fn new(warm_white: u8, cold_white: u8) -> Self {
        Self {
            warm_white,
            cold_white,
        }
    }

    /// Returns `true` if either white channel is lit.
    #[inline]
    pub const fn is_lit(&self) -> bool {
        self.warm_white > 0 || self.cold_white > 0
    }
}

/// Complete color state of an RGBWW light.
///
/// Holds both representations side by side. Converters read one side and
/// return a copy with the other side filled in; they never mutate their input.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorState {
    /// Perceptual color.
    pub hsl: HslColor,

    /// Brightness percentage (0-100).
    pub brightness: u8,

    /// Whether the light is switched on.
    pub is_on: bool,

    /// Color channels.
    pub rgb: RgbChannels,

    /// White channels.
    pub white: WhiteChannels,

    /// Color temperature in mired, derived from `white`.
    pub color_temperature: f32,

    /// Which channel group the controller should drive.
    pub operating_mode: OperatingMode,
}

impl ColorState {
    /// Luminance used for states built from hue/saturation/brightness commands.
    pub const COMMAND_LUMINANCE: f32 = 50.0;

    /// Creates an empty, switched-off state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a switched-on state from a hue/saturation/brightness command.
    ///
    /// Luminance is fixed at [`Self::COMMAND_LUMINANCE`], which is where
    /// HSL renders a fully saturated color; brightness is applied separately.
    pub fn from_hsb(hue: f32, saturation: f32, brightness: u8) -> Self {
        Self {
            hsl: HslColor::new(hue, saturation, Self::COMMAND_LUMINANCE),
            brightness,
            is_on: true,
            ..Self::default()
        }
    }

    /// Creates a state from a device status report.
    pub fn from_channels(rgb: RgbChannels, white: WhiteChannels, is_on: bool) -> Self {
        Self {
            rgb,
            white,
            is_on,
            ..Self::default()
        }
    }
}
