//! Identicon color palette.
//!
//! Colors are computed with a small, self-contained HSL conversion rather than
//! a general color-space conversion. Channel values are truncated, not
//! rounded, so a given hash always maps to exactly the same hex colors.

use palette::Srgb;

use crate::config::IdenticonConfig;

/// Number of colors in a theme.
pub const THEME_SIZE: usize = 5;

/// Lightness correctors, one per hue bucket (red, yellow, green, cyan, blue,
/// magenta, red again).
///
/// Perceived brightness varies with hue; these factors pull the requested
/// lightness towards a perceptually even value.
const CORRECTORS: [f32; 7] = [0.55, 0.5, 0.5, 0.46, 0.6, 0.55, 0.55];

// ============================================================================
// Conversion
// ============================================================================

/// Formats a color as `#rrggbb`.
pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:x}", color)
}

/// Converts a channel value in `[0, 1]` to a byte, truncating and clamping.
fn channel(value: f32) -> u8 {
    (value * 255.0).trunc().clamp(0.0, 255.0) as u8
}

/// Computes one RGB channel from the HSL intermediates.
///
/// `h` is the hue in sextants (`[0, 6)`), offset for the channel.
fn hue_to_rgb(m1: f32, m2: f32, h: f32) -> u8 {
    let h = if h < 0.0 {
        h + 6.0
    } else if h > 6.0 {
        h - 6.0
    } else {
        h
    };

    let value = if h < 1.0 {
        m1 + (m2 - m1) * h
    } else if h < 3.0 {
        m2
    } else if h < 4.0 {
        m1 + (m2 - m1) * (4.0 - h)
    } else {
        m1
    };

    channel(value)
}

/// Converts HSL to an sRGB color.
///
/// All components are in `[0, 1]`. A saturation of exactly 0 yields a gray.
pub fn hsl(h: f32, s: f32, l: f32) -> Srgb<u8> {
    if s == 0.0 {
        let gray = channel(l);
        return Srgb::new(gray, gray, gray);
    }

    let m2 = if l <= 0.5 { l * (s + 1.0) } else { l + s - l * s };
    let m1 = l * 2.0 - m2;

    Srgb::new(
        hue_to_rgb(m1, m2, h * 6.0 + 2.0),
        hue_to_rgb(m1, m2, h * 6.0),
        hue_to_rgb(m1, m2, h * 6.0 - 2.0),
    )
}

/// Converts HSL to an sRGB color after correcting the lightness for the
/// perceived brightness of the hue.
pub fn corrected_hsl(h: f32, s: f32, l: f32) -> Srgb<u8> {
    let bucket = ((h * 6.0 + 0.5) as usize).min(CORRECTORS.len() - 1);
    let corrector = CORRECTORS[bucket];

    let l = if l < 0.5 {
        l * corrector * 2.0
    } else {
        corrector + (l - 0.5) * (1.0 - corrector) * 2.0
    };

    hsl(h, s, l)
}

// ============================================================================
// Theme
// ============================================================================

/// Computes the candidate colors for an identicon with the given hue.
///
/// The order is fixed and meaningful to color selection:
///
/// | Index | Color      |
/// |-------|------------|
/// | 0     | dark gray  |
/// | 1     | mid color  |
/// | 2     | light gray |
/// | 3     | light color|
/// | 4     | dark color |
pub fn color_theme(hue: f32, config: &IdenticonConfig) -> [Srgb<u8>; THEME_SIZE] {
    let saturation = config.saturation;
    [
        hsl(0.0, 0.0, config.grayscale_lightness(0.0)),
        corrected_hsl(hue, saturation, config.color_lightness(0.5)),
        hsl(0.0, 0.0, config.grayscale_lightness(1.0)),
        corrected_hsl(hue, saturation, config.color_lightness(1.0)),
        corrected_hsl(hue, saturation, config.color_lightness(0.0)),
    ]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use palette::{Hsl, IntoColor};

    fn is_hex_color(s: &str) -> bool {
        s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
    }

    #[test]
    fn zero_saturation_is_gray() {
        for i in 0..=20 {
            let l = i as f32 / 20.0;
            let c = hsl(0.3, 0.0, l);
            assert_eq!(c.red, c.green);
            assert_eq!(c.green, c.blue);
        }
        assert_eq!(to_hex(hsl(0.0, 0.0, 0.0)), "#000000");
        assert_eq!(to_hex(hsl(0.0, 0.0, 1.0)), "#ffffff");
        assert_eq!(to_hex(hsl(0.0, 0.0, 0.5)), "#7f7f7f");
    }

    #[test]
    fn primary_hues() {
        assert_eq!(to_hex(hsl(0.0, 1.0, 0.5)), "#ff0000");
        assert_eq!(to_hex(hsl(1.0 / 3.0, 1.0, 0.5)), "#00ff00");
        assert_eq!(to_hex(hsl(2.0 / 3.0, 1.0, 0.5)), "#0000ff");
    }

    #[test]
    fn matches_standard_conversion() {
        // Truncation may differ from the reference by at most one step.
        for hi in 0..12 {
            for li in 1..10 {
                let h = hi as f32 / 12.0;
                let l = li as f32 / 10.0;
                let ours = hsl(h, 0.5, l);

                let reference: Srgb = Hsl::new(h * 360.0, 0.5, l).into_color();
                let expected = [reference.red, reference.green, reference.blue]
                    .map(|v| (v * 255.0) as i32);

                let actual = [ours.red, ours.green, ours.blue].map(i32::from);
                for (a, e) in actual.iter().zip(expected.iter()) {
                    assert!((a - e).abs() <= 1, "h={} l={}: {:?} vs {:?}", h, l, actual, expected);
                }
            }
        }
    }

    #[test]
    fn correction_depends_on_hue_bucket() {
        // Yellow (bucket 1) is corrected darker than blue (bucket 4).
        let yellow = corrected_hsl(1.0 / 6.0, 0.0, 0.25);
        let blue = corrected_hsl(4.0 / 6.0, 0.0, 0.25);
        assert_eq!(yellow, hsl(0.0, 0.0, 0.25));
        assert_eq!(blue, hsl(0.0, 0.0, 0.3));
    }

    #[test]
    fn correction_upper_half() {
        // 0.55 + (0.75 - 0.5) * 0.45 * 2 = 0.775
        assert_eq!(corrected_hsl(0.0, 0.0, 0.75), hsl(0.0, 0.0, 0.775));
    }

    #[test]
    fn correction_accepts_full_hue() {
        // A hash of all `f` digits yields a hue of exactly 1.0.
        let c = corrected_hsl(1.0, 0.5, 0.5);
        assert!(is_hex_color(&to_hex(c)));
    }

    #[test]
    fn theme_has_five_hex_colors() {
        let config = IdenticonConfig::default();
        for hi in 0..50 {
            for si in 0..=4 {
                let hue = hi as f32 / 50.0;
                let config = IdenticonConfig {
                    saturation: si as f32 / 4.0,
                    ..config
                };
                let theme = color_theme(hue, &config);
                assert_eq!(theme.len(), THEME_SIZE);
                for color in theme {
                    assert!(is_hex_color(&to_hex(color)));
                }
            }
        }
    }

    #[test]
    fn theme_grays_come_from_grayscale_lightness() {
        let theme = color_theme(0.6, &IdenticonConfig::default());
        // Default grayscale lightness spans [0.3, 0.9].
        assert_eq!(theme[0], hsl(0.0, 0.0, 0.3));
        assert_eq!(theme[2], hsl(0.0, 0.0, 0.9));
        assert_ne!(theme[1], theme[3]);
        assert_ne!(theme[3], theme[4]);
    }

    #[test]
    fn hex_round_trips_through_palette() {
        let color = hsl(0.1, 0.7, 0.4);
        let parsed: Srgb<u8> = to_hex(color).parse().unwrap();
        assert_eq!(parsed, color);
    }
}
