//! HEX / RGB / HSL conversions and random color generation
//!
//! HSL components are rounded to whole degrees and percents, so an
//! RGB → HSL → RGB round trip is exact only up to that quantization.

use rand::Rng;

use super::model::{HexColor, HslColor, RgbColor};
use super::error::ColorError;

/// Generate a uniformly random color
///
/// Each of the six hex digits is drawn independently from `0-F`.
pub fn generate_random_hex() -> HexColor {
    generate_random_hex_with(&mut rand::thread_rng())
}

/// Generate a random color from the given RNG
pub fn generate_random_hex_with<R: Rng + ?Sized>(rng: &mut R) -> HexColor {
    let value = (0..6).fold(0u32, |acc, _| (acc << 4) | rng.gen_range(0..16u32));
    HexColor::from_u32(value)
}

/// Parse a hex color into RGB channels
///
/// Accepts `#RGB`, `#RRGGBB`, `RGB` or `RRGGBB` in any case. Anything else,
/// including surrounding whitespace, is rejected.
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] if the digits are not hex or the
/// length is neither 3 nor 6.
pub fn hex_to_rgb(hex: &str) -> Result<RgbColor, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::invalid_format(
            hex,
            format!("non-hex character '{}'", bad),
        ));
    }

    // All ASCII from here on, so byte length == digit count
    let expanded = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => digits.to_string(),
        n => {
            return Err(ColorError::invalid_format(
                hex,
                format!("expected 3 or 6 hex digits, got {}", n),
            ))
        }
    };

    Ok(RgbColor::new(
        parse_channel(hex, &expanded[0..2])?,
        parse_channel(hex, &expanded[2..4])?,
        parse_channel(hex, &expanded[4..6])?,
    ))
}

fn parse_channel(input: &str, pair: &str) -> Result<u8, ColorError> {
    u8::from_str_radix(pair, 16)
        .map_err(|e| ColorError::invalid_format(input, format!("bad channel '{}': {}", pair, e)))
}

/// Encode RGB channels as canonical `#RRGGBB`
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> HexColor {
    HexColor::from(RgbColor::new(r, g, b))
}

/// Convert RGB to HSL with whole-number components
///
/// When several channels share the maximum, red wins over green and green
/// over blue. A hue that rounds up to 360 is reported as 0.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> HslColor {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let segment = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        (segment / 6.0, s)
    };

    HslColor::new(
        (h * 360.0).round() as u16 % 360,
        (s * 100.0).round() as u8,
        (l * 100.0).round() as u8,
    )
}

/// Convert HSL to RGB
///
/// `h` must be in `0..=360`, `s` and `l` in `0..=100`. Values outside those
/// ranges are a caller bug; they are caught by debug assertions only.
pub fn hsl_to_rgb(h: u16, s: u8, l: u8) -> RgbColor {
    debug_assert!(h <= 360, "hue out of range: {}", h);
    debug_assert!(s <= 100, "saturation out of range: {}", s);
    debug_assert!(l <= 100, "lightness out of range: {}", l);

    let h = f64::from(h) / 360.0;
    let s = f64::from(s) / 100.0;
    let l = f64::from(l) / 100.0;

    if s == 0.0 {
        let v = to_channel(l);
        return RgbColor::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    RgbColor::new(
        to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        to_channel(hue_to_rgb(p, q, h)),
        to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn channel_diff(a: RgbColor, b: RgbColor) -> u8 {
        a.r.abs_diff(b.r).max(a.g.abs_diff(b.g)).max(a.b.abs_diff(b.b))
    }

    #[test]
    fn test_hex_to_rgb_reference_color() {
        assert_eq!(hex_to_rgb("#3498DB").unwrap(), RgbColor::new(52, 152, 219));
        assert_eq!(hex_to_rgb("3498db").unwrap(), RgbColor::new(52, 152, 219));
        assert!(matches!(
            hex_to_rgb("  #3498DB\n"),
            Err(ColorError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_hex_to_rgb_shorthand_expansion() {
        assert_eq!(hex_to_rgb("#1A3").unwrap(), hex_to_rgb("#11AA33").unwrap());
        assert_eq!(hex_to_rgb("fff").unwrap(), RgbColor::new(255, 255, 255));
    }

    #[test]
    fn test_hex_to_rgb_invalid_format() {
        for input in ["zzzzzz", "12", "", "#", "#12345", "#1234567", "##123456", "12 456", "ÿÿÿ", " 3498DB", "\t#1A3\n"] {
            let result = hex_to_rgb(input);
            assert!(
                matches!(result, Err(ColorError::InvalidFormat { .. })),
                "expected InvalidFormat for {:?}, got {:?}",
                input,
                result
            );
        }
    }

    #[test]
    fn test_invalid_format_keeps_original_input() {
        let ColorError::InvalidFormat { input, reason } = hex_to_rgb("#12").unwrap_err();
        assert_eq!(input, "#12");
        assert!(reason.contains("got 2"));
    }

    #[test]
    fn test_rgb_to_hex_uppercase_and_padded() {
        assert_eq!(rgb_to_hex(0, 10, 255).to_string(), "#000AFF");
        assert_eq!(rgb_to_hex(171, 205, 239).to_string(), "#ABCDEF");
    }

    #[test]
    fn test_hex_rgb_roundtrip_all_colors() {
        use std::fmt::Write as _;

        let mut hex = String::with_capacity(7);
        for r in 0..=255u8 {
            for g in 0..=255u8 {
                for b in 0..=255u8 {
                    hex.clear();
                    write!(hex, "{}", rgb_to_hex(r, g, b)).unwrap();
                    assert_eq!(hex_to_rgb(&hex).unwrap(), RgbColor::new(r, g, b));
                }
            }
        }
    }

    #[test]
    fn test_rgb_to_hsl_reference_color() {
        assert_eq!(rgb_to_hsl(52, 152, 219), HslColor::new(204, 70, 53));
    }

    #[test]
    fn test_rgb_to_hsl_primaries() {
        assert_eq!(rgb_to_hsl(255, 0, 0), HslColor::new(0, 100, 50));
        assert_eq!(rgb_to_hsl(0, 255, 0), HslColor::new(120, 100, 50));
        assert_eq!(rgb_to_hsl(0, 0, 255), HslColor::new(240, 100, 50));
        assert_eq!(rgb_to_hsl(255, 255, 0), HslColor::new(60, 100, 50));
    }

    #[test]
    fn test_rgb_to_hsl_hue_360_wraps_to_zero() {
        // Raw hue is 359.76 degrees
        assert_eq!(rgb_to_hsl(255, 0, 1), HslColor::new(0, 100, 50));
    }

    #[test]
    fn test_rgb_to_hsl_achromatic_fixed_point() {
        for x in 0..=255u8 {
            let expected_l = (f64::from(x) / 255.0 * 100.0).round() as u8;
            assert_eq!(rgb_to_hsl(x, x, x), HslColor::new(0, 0, expected_l));
        }
    }

    #[test]
    fn test_hsl_to_rgb_known_values() {
        assert_eq!(hsl_to_rgb(0, 100, 50), RgbColor::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(120, 100, 50), RgbColor::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(240, 100, 50), RgbColor::new(0, 0, 255));
        assert_eq!(hsl_to_rgb(360, 100, 50), RgbColor::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(204, 70, 53), RgbColor::new(51, 152, 219));
        assert_eq!(hsl_to_rgb(77, 0, 50), RgbColor::new(128, 128, 128));
        assert_eq!(hsl_to_rgb(0, 0, 100), RgbColor::new(255, 255, 255));
    }

    #[test]
    fn test_hsl_roundtrip_achromatic_within_one() {
        for x in 0..=255u8 {
            let gray = RgbColor::new(x, x, x);
            assert!(channel_diff(gray.to_hsl().to_rgb(), gray) <= 1, "gray {}", x);
        }
    }

    #[test]
    fn test_hsl_roundtrip_primaries_within_one() {
        for rgb in [
            RgbColor::new(255, 0, 0),
            RgbColor::new(0, 255, 0),
            RgbColor::new(0, 0, 255),
            RgbColor::new(0, 255, 255),
            RgbColor::new(255, 0, 255),
            RgbColor::new(255, 255, 0),
            RgbColor::new(52, 152, 219),
        ] {
            assert!(channel_diff(rgb.to_hsl().to_rgb(), rgb) <= 1, "{:?}", rgb);
        }
    }

    #[test]
    fn test_hsl_roundtrip_bounded_by_quantization() {
        // Whole-degree / whole-percent HSL loses up to 5 units per channel
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(5) {
                for b in (0..=255u8).step_by(5) {
                    let rgb = RgbColor::new(r, g, b);
                    let back = rgb.to_hsl().to_rgb();
                    assert!(channel_diff(back, rgb) <= 5, "{:?} -> {:?}", rgb, back);
                }
            }
        }
    }

    #[test]
    fn test_hsl_components_stay_in_range() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(15) {
                for b in (0..=255u8).step_by(15) {
                    let hsl = rgb_to_hsl(r, g, b);
                    assert!(hsl.h < 360);
                    assert!(hsl.s <= 100);
                    assert!(hsl.l <= 100);
                }
            }
        }
    }

    #[test]
    fn test_generate_random_hex_is_valid() {
        for _ in 0..100 {
            let hex = generate_random_hex().to_string();
            assert_eq!(hex.len(), 7);
            assert!(hex.starts_with('#'));
            assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_generate_random_hex_seeded_is_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(generate_random_hex_with(&mut a), generate_random_hex_with(&mut b));
        }
    }

    #[test]
    fn test_generate_random_hex_digit_distribution() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts = [0u32; 16];
        let samples: u32 = 20_000;
        for _ in 0..samples {
            for c in generate_random_hex_with(&mut rng).without_hash().chars() {
                counts[c.to_digit(16).unwrap() as usize] += 1;
            }
        }
        // 120_000 digits, 7_500 expected per bucket
        let expected = f64::from(samples * 6) / 16.0;
        for (digit, &count) in counts.iter().enumerate() {
            let deviation = (f64::from(count) - expected).abs() / expected;
            assert!(deviation < 0.05, "digit {:X} drawn {} times", digit, count);
        }
    }
}
