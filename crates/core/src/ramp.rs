//! Value ramps: a base HSV color stepped down in value, one row per step.
//!
//! Row `i` (0-based) has value `base - i * step`, clamped at zero from below
//! only. Once a row reaches zero every later row is identical; the ramp never
//! stops early and always has exactly `count` rows.

use std::fmt;
use std::str::FromStr;

use crate::color::{hsv_to_rgb, rgb_to_hex, HexColor, Hsv, Rgb};
use crate::config;
use crate::error::RampError;
use serde::{Deserialize, Serialize};

/// One rendered row of a ramp. Never mutated after generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRow {
    /// 1-based position in the ramp.
    pub index: usize,
    pub hsv: Hsv,
    pub rgb: Rgb,
    pub hex: HexColor,
}

/// Ordered rows of a ramp, `count` long.
pub type RampResult = Vec<ColorRow>;

/// Which of a row's values a user selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    Hsv,
    Rgb,
    Hex,
}

impl ColorRow {
    /// The clipboard string for `field`: `"h, s, v"`, `"r, g, b"` or `#rrggbb`.
    pub fn copy_text(&self, field: RowField) -> String {
        match field {
            RowField::Hsv => self.hsv.copy_text(),
            RowField::Rgb => self.rgb.copy_text(),
            RowField::Hex => self.hex.to_string(),
        }
    }
}

impl FromStr for RowField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hsv" => Ok(RowField::Hsv),
            "rgb" => Ok(RowField::Rgb),
            "hex" => Ok(RowField::Hex),
            other => Err(format!("unknown field '{other}' (expected hsv, rgb or hex)")),
        }
    }
}

impl fmt::Display for RowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RowField::Hsv => "hsv",
            RowField::Rgb => "rgb",
            RowField::Hex => "hex",
        })
    }
}

/// The five scalar controls of a ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RampRequest {
    pub hue: i32,
    pub saturation: i32,
    pub value: i32,
    pub step: i32,
    pub count: usize,
}

impl Default for RampRequest {
    fn default() -> Self {
        Self {
            hue: config::DEFAULT_HUE,
            saturation: config::DEFAULT_SATURATION,
            value: config::DEFAULT_VALUE,
            step: config::DEFAULT_STEP,
            count: config::DEFAULT_COUNT,
        }
    }
}

impl RampRequest {
    /// Loads a request from JSON, e.g.
    /// `{"hue": 0, "saturation": 255, "value": 255, "step": 5, "count": 8}`.
    pub fn from_json(json: &str) -> Result<Self, RampError> {
        serde_json::from_str(json).map_err(|e| RampError::InvalidRequest(e.to_string()))
    }

    pub fn generate(&self) -> RampResult {
        generate_ramp(self.hue, self.saturation, self.value, self.step, self.count)
    }
}

/// Value of row `i`: `base - i * step`, floored at zero.
///
/// Computed in 64 bits and saturated back into `i32` so large counts or
/// steps cannot overflow. Negative steps raise the value with no upper clamp.
fn row_value(base: i32, step: i32, i: usize) -> i32 {
    let i = i64::try_from(i).unwrap_or(i64::MAX);
    let v = i64::from(base).saturating_sub(i.saturating_mul(i64::from(step)));
    v.clamp(0, i64::from(i32::MAX)) as i32
}

/// Expands a base color into `count` rows stepping value down by `step`.
pub fn generate_ramp(hue: i32, saturation: i32, value: i32, step: i32, count: usize) -> RampResult {
    log::debug!("ramp: base HSV({hue}, {saturation}, {value}), step {step}, {count} rows");
    (0..count)
        .map(|i| {
            let hsv = Hsv::new(hue, saturation, row_value(value, step, i));
            let rgb = hsv_to_rgb(hsv);
            ColorRow {
                index: i + 1,
                hsv,
                rgb,
                hex: rgb_to_hex(rgb),
            }
        })
        .collect()
}
