//! Color types and conversion functions between HSV, RGB and HEX.
//!
//! HSV and RGB use integer channels on the 0–255 scale (hue in degrees).
//! Conversions normalize to the unit interval, apply the standard sextant
//! transform in `f64`, then scale back and **truncate** toward zero. Rounding
//! instead would shift channels by one and change the hex output.
//!
//! Channels are `i32` and no range is enforced: out-of-domain input still
//! converts deterministically, and callers that want strict ranges validate
//! before converting (see [`crate::input::RangePolicy`]).

use std::fmt;
use std::str::FromStr;

use crate::config::{CHANNEL_MAX, HUE_CYCLE};
use crate::error::RampError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Hue in degrees, saturation and value on the 0–255 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsv {
    pub h: i32,
    pub s: i32,
    pub v: i32,
}

/// Red, green and blue channels on the 0–255 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

/// A `#rrggbb` color string with lower-case digits. Always 7 bytes long.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl Hsv {
    pub fn new(h: i32, s: i32, v: i32) -> Self {
        Self { h, s, v }
    }

    /// Clipboard form: `"h, s, v"`.
    pub fn copy_text(&self) -> String {
        format!("{}, {}, {}", self.h, self.s, self.v)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HSV({}, {}, {})", self.h, self.s, self.v)
    }
}

impl Rgb {
    pub fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Clipboard form: `"r, g, b"`.
    pub fn copy_text(&self) -> String {
        format!("{}, {}, {}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
    }
}

impl HexColor {
    /// Parses `"#rrggbb"` or `"rrggbb"` (case insensitive) into a normalized
    /// lower-case hex color.
    ///
    /// Returns `RampError::InvalidColor` for anything that is not exactly six
    /// hex digits.
    pub fn parse(input: &str) -> Result<Self, RampError> {
        let digits = input.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if digits.len() != 6 {
            return Err(RampError::InvalidColor(format!(
                "expected 6 hex digits, got {}",
                digits.len()
            )));
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(RampError::InvalidColor(format!(
                "'{bad}' is not a hex digit"
            )));
        }
        Ok(Self(format!("#{}", digits.to_ascii_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes the three channels.
    pub fn to_rgb(&self) -> Rgb {
        // The constructor guarantees six ASCII hex digits after '#'.
        let channel = |i: usize| i32::from_str_radix(&self.0[i..i + 2], 16).unwrap_or(0);
        Rgb {
            r: channel(1),
            g: channel(3),
            b: channel(5),
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexColor {
    type Err = RampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        HexColor::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Sextant HSV -> RGB on unit-interval components.
///
/// The sextant index is truncated toward zero and then reduced with a
/// Euclidean modulo, so negative and >1 hues wrap the same way every time.
fn unit_hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let sextant = (h * 6.0).trunc();
    let f = h * 6.0 - sextant;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match (sextant as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// RGB -> HSV on unit-interval components. Achromatic input has hue 0.
fn unit_rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    if minc == maxc {
        return (0.0, 0.0, maxc);
    }
    let range = maxc - minc;
    let s = range / maxc;
    let rc = (maxc - r) / range;
    let gc = (maxc - g) / range;
    let bc = (maxc - b) / range;
    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    ((h / 6.0).rem_euclid(1.0), s, maxc)
}

/// Scales a unit component by `factor` and truncates toward zero.
fn truncate_scaled(c: f64, factor: f64) -> i32 {
    (c * factor) as i32
}

/// Converts HSV (hue in degrees, s/v on 0–255) to RGB (0–255), truncating.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let (r, g, b) = unit_hsv_to_rgb(
        f64::from(hsv.h) / HUE_CYCLE,
        f64::from(hsv.s) / CHANNEL_MAX,
        f64::from(hsv.v) / CHANNEL_MAX,
    );
    Rgb {
        r: truncate_scaled(r, CHANNEL_MAX),
        g: truncate_scaled(g, CHANNEL_MAX),
        b: truncate_scaled(b, CHANNEL_MAX),
    }
}

/// Converts RGB (0–255) to HSV (hue in degrees, s/v on 0–255), truncating.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let (h, s, v) = unit_rgb_to_hsv(
        f64::from(rgb.r) / CHANNEL_MAX,
        f64::from(rgb.g) / CHANNEL_MAX,
        f64::from(rgb.b) / CHANNEL_MAX,
    );
    Hsv {
        h: truncate_scaled(h, HUE_CYCLE),
        s: truncate_scaled(s, CHANNEL_MAX),
        v: truncate_scaled(v, CHANNEL_MAX),
    }
}

/// Formats RGB as `#rrggbb`.
///
/// Channels outside 0–255 are clamped first so the result is always seven
/// characters; in-range input is formatted as is.
pub fn rgb_to_hex(rgb: Rgb) -> HexColor {
    let r = rgb.r.clamp(0, 255);
    let g = rgb.g.clamp(0, 255);
    let b = rgb.b.clamp(0, 255);
    HexColor(format!("#{r:02x}{g:02x}{b:02x}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(r: i32, g: i32, b: i32) -> Rgb {
        Rgb::new(r, g, b)
    }

    fn hsv(h: i32, s: i32, v: i32) -> Hsv {
        Hsv::new(h, s, v)
    }

    // -- hsv_to_rgb --

    #[test]
    fn hsv_to_rgb_primaries() {
        assert_eq!(hsv_to_rgb(hsv(0, 255, 255)), rgb(255, 0, 0));
        assert_eq!(hsv_to_rgb(hsv(120, 255, 255)), rgb(0, 255, 0));
        assert_eq!(hsv_to_rgb(hsv(240, 255, 255)), rgb(0, 0, 255));
    }

    #[test]
    fn hsv_to_rgb_truncates_instead_of_rounding() {
        // 200/360 hue, 100/255 saturation: the green channel is 173.07..,
        // the red channel 121.56.. which rounding would turn into 122.
        assert_eq!(hsv_to_rgb(hsv(200, 100, 200)), rgb(121, 173, 200));
        assert_eq!(hsv_to_rgb(hsv(30, 255, 255)), rgb(255, 127, 0));
    }

    #[test]
    fn hsv_to_rgb_zero_saturation_is_gray() {
        assert_eq!(hsv_to_rgb(hsv(77, 0, 128)), rgb(128, 128, 128));
    }

    #[test]
    fn hsv_to_rgb_zero_value_is_black() {
        assert_eq!(hsv_to_rgb(hsv(300, 200, 0)), rgb(0, 0, 0));
    }

    #[test]
    fn hsv_to_rgb_hue_360_wraps_to_red() {
        assert_eq!(hsv_to_rgb(hsv(360, 255, 255)), rgb(255, 0, 0));
    }

    #[test]
    fn hsv_to_rgb_out_of_range_value_is_not_clamped() {
        assert_eq!(hsv_to_rgb(hsv(0, 255, 300)), rgb(300, 0, 0));
    }

    #[test]
    fn hsv_to_rgb_negative_hue_is_deterministic() {
        // Truncation toward zero puts -30 degrees in sextant 0 with a
        // negative fraction; the result leaves the channel domain.
        assert_eq!(hsv_to_rgb(hsv(-30, 255, 255)), rgb(255, -127, 0));
    }

    // -- rgb_to_hsv --

    #[test]
    fn rgb_to_hsv_pure_red() {
        assert_eq!(rgb_to_hsv(rgb(255, 0, 0)), hsv(0, 255, 255));
    }

    #[test]
    fn rgb_to_hsv_pure_green_and_blue() {
        assert_eq!(rgb_to_hsv(rgb(0, 255, 0)), hsv(120, 255, 255));
        assert_eq!(rgb_to_hsv(rgb(0, 0, 255)), hsv(240, 255, 255));
    }

    #[test]
    fn rgb_to_hsv_arbitrary_color() {
        assert_eq!(rgb_to_hsv(rgb(18, 52, 86)), hsv(210, 201, 86));
    }

    #[test]
    fn rgb_to_hsv_gray_has_zero_hue_and_saturation() {
        assert_eq!(rgb_to_hsv(rgb(90, 90, 90)), hsv(0, 0, 90));
        assert_eq!(rgb_to_hsv(rgb(0, 0, 0)), hsv(0, 0, 0));
    }

    #[test]
    fn rgb_to_hsv_magenta_side_hue_wraps_positive() {
        // Red is max and blue > green, so the raw hue is negative before
        // the modulo.
        let out = rgb_to_hsv(rgb(255, 0, 128));
        assert!(out.h > 300 && out.h < 360, "hue {}", out.h);
    }

    // -- rgb_to_hex --

    #[test]
    fn rgb_to_hex_known_colors() {
        assert_eq!(rgb_to_hex(rgb(255, 0, 0)).as_str(), "#ff0000");
        assert_eq!(rgb_to_hex(rgb(0, 0, 0)).as_str(), "#000000");
        assert_eq!(rgb_to_hex(rgb(255, 255, 255)).as_str(), "#ffffff");
        assert_eq!(rgb_to_hex(rgb(250, 0, 0)).as_str(), "#fa0000");
    }

    #[test]
    fn rgb_to_hex_zero_pads_each_channel() {
        assert_eq!(rgb_to_hex(rgb(1, 2, 3)).as_str(), "#010203");
    }

    #[test]
    fn rgb_to_hex_clamps_out_of_range_channels() {
        let hex = rgb_to_hex(rgb(300, -5, 128));
        assert_eq!(hex.as_str(), "#ff0080");
        assert_eq!(hex.as_str().len(), 7);
    }

    // -- HexColor --

    #[test]
    fn hex_parse_normalizes_case_and_prefix() {
        assert_eq!(HexColor::parse("#FF00AA").unwrap().as_str(), "#ff00aa");
        assert_eq!(HexColor::parse("c0ffee").unwrap().as_str(), "#c0ffee");
        assert_eq!(HexColor::parse("  #123abc ").unwrap().as_str(), "#123abc");
    }

    #[test]
    fn hex_parse_rejects_invalid_input() {
        assert!(HexColor::parse("#gggggg").is_err());
        assert!(HexColor::parse("#fff").is_err());
        assert!(HexColor::parse("").is_err());
        assert!(HexColor::parse("#ff00ff00").is_err());
    }

    #[test]
    fn hex_to_rgb_decodes_channels() {
        let hex = HexColor::parse("#804020").unwrap();
        assert_eq!(hex.to_rgb(), rgb(0x80, 0x40, 0x20));
    }

    #[test]
    fn hex_from_str_matches_parse() {
        let hex: HexColor = "#dc0000".parse().unwrap();
        assert_eq!(hex, HexColor::parse("dc0000").unwrap());
    }

    #[test]
    fn hex_serializes_as_string() {
        let hex = rgb_to_hex(rgb(255, 0, 0));
        assert_eq!(serde_json::to_string(&hex).unwrap(), "\"#ff0000\"");
    }

    #[test]
    fn hex_deserialize_rejects_invalid() {
        let result: Result<HexColor, _> = serde_json::from_str("\"not-a-color\"");
        assert!(result.is_err());
    }

    // -- formatting --

    #[test]
    fn display_and_copy_text() {
        let c = hsv(10, 20, 30);
        assert_eq!(c.to_string(), "HSV(10, 20, 30)");
        assert_eq!(c.copy_text(), "10, 20, 30");
        let c = rgb(250, 0, 7);
        assert_eq!(c.to_string(), "RGB(250, 0, 7)");
        assert_eq!(c.copy_text(), "250, 0, 7");
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn hue_distance(a: i32, b: i32) -> i32 {
            let d = (a - b).rem_euclid(360);
            d.min(360 - d)
        }

        proptest! {
            #[test]
            fn hsv_to_rgb_stays_in_channel_range(
                h in 0i32..360,
                s in 0i32..=255,
                v in 0i32..=255,
            ) {
                let out = hsv_to_rgb(Hsv::new(h, s, v));
                for c in [out.r, out.g, out.b] {
                    prop_assert!((0..=255).contains(&c), "channel {c} for ({h}, {s}, {v})");
                }
            }

            #[test]
            fn rgb_to_hex_matches_pattern(
                r in 0i32..=255,
                g in 0i32..=255,
                b in 0i32..=255,
            ) {
                let hex = rgb_to_hex(Rgb::new(r, g, b));
                let s = hex.as_str();
                prop_assert_eq!(s.len(), 7);
                prop_assert!(s.starts_with('#'));
                prop_assert!(
                    s[1..].chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
                    "bad hex {}", s
                );
                prop_assert_eq!(hex.to_rgb(), Rgb::new(r, g, b));
            }

            #[test]
            fn value_survives_round_trip_within_one(
                h in 0i32..360,
                s in 0i32..=255,
                v in 0i32..=255,
            ) {
                let back = rgb_to_hsv(hsv_to_rgb(Hsv::new(h, s, v)));
                prop_assert!((back.v - v).abs() <= 1, "v {} vs {}", back.v, v);
            }

            #[test]
            fn saturated_colors_round_trip_within_tolerance(
                h in 0i32..360,
                s in 128i32..=255,
                v in 128i32..=255,
            ) {
                let back = rgb_to_hsv(hsv_to_rgb(Hsv::new(h, s, v)));
                prop_assert!(hue_distance(back.h, h) <= 2, "h {} vs {}", back.h, h);
                prop_assert!((back.s - s).abs() <= 2, "s {} vs {}", back.s, s);
                prop_assert!((back.v - v).abs() <= 1, "v {} vs {}", back.v, v);
            }
        }
    }
}
