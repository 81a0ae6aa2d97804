//! Operating mode and its channel-mask byte.
//!
//! RGBWW controllers take a one-byte mask telling them which LED groups to
//! drive: the color group (`0xF0`), the white group (`0x0F`), or both (`0xFF`).

/// Mask byte selecting the color channels.
pub const COLOR_MASK: u8 = 0xF0;

/// Mask byte selecting the white channels.
pub const TEMPERATURE_MASK: u8 = 0x0F;

/// Mask byte selecting color and white channels together.
pub const SIMULTANEOUS_MASK: u8 = 0xFF;

/// Which channel group a controller drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatingMode {
    /// Red, green and blue channels only.
    Color,

    /// Warm and cold white channels only.
    Temperature,

    /// Color and white channels together.
    Simultaneous,

    /// Mask byte not recognised.
    #[default]
    Unknown,
}

impl OperatingMode {
    /// Maps a channel-mask byte to its mode.
    ///
    /// Every byte other than the three known masks maps to `Unknown`.
    pub const fn from_mask(mask: u8) -> Self {
        match mask {
            COLOR_MASK => OperatingMode::Color,
            TEMPERATURE_MASK => OperatingMode::Temperature,
            SIMULTANEOUS_MASK => OperatingMode::Simultaneous,
            _ => OperatingMode::Unknown,
        }
    }

    /// Returns the mask byte for this mode, or `None` for `Unknown`.
    pub const fn checked_mask(self) -> Option<u8> {
        match self {
            OperatingMode::Color => Some(COLOR_MASK),
            OperatingMode::Temperature => Some(TEMPERATURE_MASK),
            OperatingMode::Simultaneous => Some(SIMULTANEOUS_MASK),
            OperatingMode::Unknown => None,
        }
    }

    /// Returns the mask byte for this mode.
    ///
    /// # Panics
    /// Panics if called on `Unknown`, which has no mask.
    pub const fn mask(self) -> u8 {
        match self.checked_mask() {
            Some(mask) => mask,
            None => panic!("unknown operating mode has no channel mask"),
        }
    }
}

impl From<u8> for OperatingMode {
    fn from(mask: u8) -> Self {
        Self::from_mask(mask)
    }
}
