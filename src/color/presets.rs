//! Built-in preset palette

use super::model::HexColor;

/// Fixed palette offered alongside random generation
pub const PRESET_COLORS: [HexColor; 15] = [
    HexColor::from_u32(0xFF6B6B),
    HexColor::from_u32(0x4ECDC4),
    HexColor::from_u32(0xFFE66D),
    HexColor::from_u32(0x1A535C),
    HexColor::from_u32(0xFF9A76),
    HexColor::from_u32(0x6A0572),
    HexColor::from_u32(0xAB83A1),
    HexColor::from_u32(0x3D5A80),
    HexColor::from_u32(0xEE6C4D),
    HexColor::from_u32(0x98C1D9),
    HexColor::from_u32(0x293241),
    HexColor::from_u32(0xE0FBFC),
    HexColor::from_u32(0x5C4D7D),
    HexColor::from_u32(0xF9564F),
    HexColor::from_u32(0x0C0A3E),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_presets_are_distinct() {
        let unique: HashSet<_> = PRESET_COLORS.iter().collect();
        assert_eq!(unique.len(), PRESET_COLORS.len());
    }

    #[test]
    fn test_preset_rendering() {
        assert_eq!(PRESET_COLORS[0].to_string(), "#FF6B6B");
        assert_eq!(PRESET_COLORS[14].to_string(), "#0C0A3E");
    }
}
