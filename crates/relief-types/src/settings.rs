use serde::{Deserialize, Serialize};

use crate::errors::InputError;

/// One generation run's worth of user-facing parameters.
///
/// Immutable per invocation; the UI rebuilds the whole struct on every
/// slider change rather than mutating a shared copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Luminance cutoff as a fraction of full white, in [0, 1].
    pub threshold: f32,
    /// Elevation of raised regions, in millimeters. Must be positive.
    pub extrude_height: f32,
    /// Elevation of flat regions, in millimeters. May be zero.
    pub base_height: f32,
    /// Length of the longer planar dimension of the model, in millimeters.
    pub scale: f32,
    /// Flip which side of the cutoff counts as raised.
    pub invert: bool,
    /// Majority-filter radius hint in pixels; 0 disables smoothing.
    pub smoothing: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            extrude_height: 5.0,
            base_height: 1.0,
            scale: 50.0,
            invert: false,
            smoothing: 1.0,
        }
    }
}

impl Settings {
    /// Check every field against its documented range.
    pub fn validate(&self) -> Result<(), InputError> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(setting_error("threshold", "must be within [0, 1]"));
        }
        if !self.extrude_height.is_finite() || self.extrude_height <= 0.0 {
            return Err(setting_error("extrude_height", "must be positive"));
        }
        if !self.base_height.is_finite() || self.base_height < 0.0 {
            return Err(setting_error("base_height", "must be zero or positive"));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(setting_error("scale", "must be positive"));
        }
        if !self.smoothing.is_finite() || self.smoothing < 0.0 {
            return Err(setting_error("smoothing", "must be zero or positive"));
        }
        Ok(())
    }
}

fn setting_error(name: &'static str, reason: &str) -> InputError {
    InputError::Setting {
        name,
        reason: reason.to_string(),
    }
}
