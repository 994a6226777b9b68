//! Text-field input for a ramp and the range policy applied to it.
//!
//! A host edits five strings; [`RampForm::parse`] turns them into a
//! [`RampRequest`]. Parsing never touches any rendered state, so a failed
//! parse leaves whatever the host last displayed in place.

use crate::color::Hsv;
use crate::config;
use crate::error::RampError;
use crate::ramp::RampRequest;
use serde::{Deserialize, Serialize};

/// How strictly parsed integers are checked against nominal ranges.
///
/// `Permissive` accepts any integer and lets out-of-range values flow into
/// the conversions unchanged. `Strict` is opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangePolicy {
    #[default]
    Permissive,
    /// Hue in `0..360`, saturation and value in `0..=255`, step and count
    /// non-negative.
    Strict,
}

/// The five editable text fields of the ramp form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RampForm {
    pub hue: String,
    pub saturation: String,
    pub value: String,
    pub step: String,
    pub count: String,
}

impl Default for RampForm {
    fn default() -> Self {
        Self {
            hue: config::DEFAULT_HUE.to_string(),
            saturation: config::DEFAULT_SATURATION.to_string(),
            value: config::DEFAULT_VALUE.to_string(),
            step: config::DEFAULT_STEP.to_string(),
            count: config::DEFAULT_COUNT.to_string(),
        }
    }
}

fn parse_field(field: &'static str, input: &str) -> Result<i64, RampError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| RampError::InvalidInteger {
            field,
            input: input.to_string(),
        })
}

fn check_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<(), RampError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(RampError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// Narrows a parsed field to `i32`, saturating at the type bounds.
fn narrow(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

impl RampForm {
    pub fn new(hue: &str, saturation: &str, value: &str, step: &str, count: &str) -> Self {
        Self {
            hue: hue.to_string(),
            saturation: saturation.to_string(),
            value: value.to_string(),
            step: step.to_string(),
            count: count.to_string(),
        }
    }

    /// Parses all five fields.
    ///
    /// Every field must be an integer (surrounding whitespace is ignored).
    /// Under [`RangePolicy::Permissive`] a negative count means an empty ramp.
    pub fn parse(&self, policy: RangePolicy) -> Result<RampRequest, RampError> {
        let hue = parse_field("hue", &self.hue)?;
        let saturation = parse_field("saturation", &self.saturation)?;
        let value = parse_field("value", &self.value)?;
        let step = parse_field("step", &self.step)?;
        let count = parse_field("count", &self.count)?;

        if policy == RangePolicy::Strict {
            check_range("hue", hue, 0, 359)?;
            check_range("saturation", saturation, 0, 255)?;
            check_range("value", value, 0, 255)?;
            check_range("step", step, 0, i64::from(i32::MAX))?;
            check_range("count", count, 0, i64::MAX)?;
        }

        Ok(RampRequest {
            hue: narrow(hue),
            saturation: narrow(saturation),
            value: narrow(value),
            step: narrow(step),
            count: usize::try_from(count).unwrap_or(0),
        })
    }

    /// Replaces the hue, saturation and value text with `color`.
    /// Step and count are left as they are.
    pub fn seed(&mut self, color: Hsv) {
        self.hue = color.h.to_string();
        self.saturation = color.s.to_string();
        self.value = color.v.to_string();
    }
}

impl From<RampRequest> for RampForm {
    fn from(req: RampRequest) -> Self {
        Self {
            hue: req.hue.to_string(),
            saturation: req.saturation.to_string(),
            value: req.value.to_string(),
            step: req.step.to_string(),
            count: req.count.to_string(),
        }
    }
}
