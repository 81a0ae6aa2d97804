//! Integration tests for operating mode mapping

use rgbww_color::OperatingMode;
use rgbww_color::mode::{COLOR_MASK, SIMULTANEOUS_MASK, TEMPERATURE_MASK};

#[test]
fn known_masks_map_to_modes() {
    assert_eq!(OperatingMode::from_mask(0xF0), OperatingMode::Color);
    assert_eq!(OperatingMode::from_mask(0x0F), OperatingMode::Temperature);
    assert_eq!(OperatingMode::from_mask(0xFF), OperatingMode::Simultaneous);
}

#[test]
fn every_other_byte_is_unknown() {
    for mask in 0..=u8::MAX {
        let expected_known = matches!(mask, COLOR_MASK | TEMPERATURE_MASK | SIMULTANEOUS_MASK);
        let mode = OperatingMode::from_mask(mask);
        assert_eq!(mode != OperatingMode::Unknown, expected_known, "mask {mask:#04x}");
    }
}

#[test]
fn mask_recovers_original_byte() {
    for mask in [COLOR_MASK, TEMPERATURE_MASK, SIMULTANEOUS_MASK] {
        assert_eq!(OperatingMode::from_mask(mask).mask(), mask);
        assert_eq!(OperatingMode::from(mask).checked_mask(), Some(mask));
    }
}

#[test]
fn unknown_has_no_checked_mask() {
    assert_eq!(OperatingMode::Unknown.checked_mask(), None);
}

#[test]
#[should_panic(expected = "unknown operating mode")]
fn unknown_mask_panics() {
    let _ = OperatingMode::Unknown.mask();
}

#[test]
fn default_mode_is_unknown() {
    assert_eq!(OperatingMode::default(), OperatingMode::Unknown);
}
