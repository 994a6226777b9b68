//! Explicit UI state for one ramp window: the form, the rendered rows, and
//! whether the eyedropper is armed.
//!
//! A host owns one [`RampController`] and routes events into it. Row
//! selection hands back the row itself, so click handlers only need the
//! row index and field.

use crate::color::{rgb_to_hsv, Hsv};
use crate::error::RampError;
use crate::host::{Clipboard, PixelSampler};
use crate::input::{RampForm, RangePolicy};
use crate::ramp::{ColorRow, RowField};

#[derive(Debug, Clone, Default)]
pub struct RampController {
    form: RampForm,
    policy: RangePolicy,
    rows: Vec<ColorRow>,
    eyedropper_active: bool,
}

impl RampController {
    /// Creates a controller with no rows rendered yet. Call
    /// [`refresh`](Self::refresh) to produce the first ramp.
    pub fn new(form: RampForm, policy: RangePolicy) -> Self {
        Self {
            form,
            policy,
            rows: Vec::new(),
            eyedropper_active: false,
        }
    }

    pub fn form(&self) -> &RampForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RampForm {
        &mut self.form
    }

    pub fn policy(&self) -> RangePolicy {
        self.policy
    }

    /// Rows of the last successful refresh.
    pub fn rows(&self) -> &[ColorRow] {
        &self.rows
    }

    /// Parses the form and replaces all rows.
    ///
    /// On a parse error the previous rows are kept untouched and the error is
    /// returned for the host to display or ignore.
    pub fn refresh(&mut self) -> Result<&[ColorRow], RampError> {
        match self.form.parse(self.policy) {
            Ok(request) => {
                self.rows = request.generate();
                Ok(&self.rows)
            }
            Err(e) => {
                log::warn!("keeping previous ramp: {e}");
                Err(e)
            }
        }
    }

    /// Looks up a row by its 1-based index.
    pub fn row(&self, index: usize) -> Result<&ColorRow, RampError> {
        index
            .checked_sub(1)
            .and_then(|i| self.rows.get(i))
            .ok_or(RampError::RowNotFound {
                index,
                len: self.rows.len(),
            })
    }

    /// Copies one field of row `index` (1-based) and returns the copied text.
    pub fn copy(
        &self,
        index: usize,
        field: RowField,
        clipboard: &mut dyn Clipboard,
    ) -> Result<String, RampError> {
        let text = self.row(index)?.copy_text(field);
        clipboard.write_text(&text)?;
        log::debug!("copied row {index} {field}: {text}");
        Ok(text)
    }

    pub fn is_eyedropper_active(&self) -> bool {
        self.eyedropper_active
    }

    /// Arms the eyedropper, or cancels it if already armed. Returns the new
    /// state.
    pub fn toggle_eyedropper(&mut self) -> bool {
        if self.eyedropper_active {
            self.cancel_eyedropper();
        } else {
            self.eyedropper_active = true;
        }
        self.eyedropper_active
    }

    pub fn cancel_eyedropper(&mut self) {
        self.eyedropper_active = false;
    }

    /// Samples `(x, y)` and seeds the form's color fields from it, then
    /// refreshes the ramp.
    ///
    /// Does nothing and returns `Ok(None)` when the eyedropper is not armed.
    /// The eyedropper is disarmed after every pick attempt, successful or not.
    pub fn pick(
        &mut self,
        sampler: &dyn PixelSampler,
        x: u32,
        y: u32,
    ) -> Result<Option<Hsv>, RampError> {
        if !self.eyedropper_active {
            return Ok(None);
        }
        let result = self.pick_armed(sampler, x, y);
        self.cancel_eyedropper();
        if let Err(e) = &result {
            log::warn!("color pick at ({x}, {y}) failed: {e}");
        }
        result.map(Some)
    }

    fn pick_armed(&mut self, sampler: &dyn PixelSampler, x: u32, y: u32) -> Result<Hsv, RampError> {
        let rgb = sampler.sample(x, y)?;
        let hsv = rgb_to_hsv(rgb);
        log::debug!("picked {rgb} at ({x}, {y}) -> {hsv}");
        self.form.seed(hsv);
        self.refresh()?;
        Ok(hsv)
    }
}
