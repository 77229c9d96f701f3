use std::path::Path;

use serde_derive::{Deserialize, Serialize};

use crate::error::Error;

/// Max center-to-center distance (px, 640x480 frame) for a detection to continue a track.
pub const TRACKING_THRESHOLD: f32 = 80.0;
pub const SMOOTHING_FACTOR: f32 = 0.3;
// f64: a 0.9 -> 0.95 step must compare as exactly 0.05, not above it.
pub const MIN_CONFIDENCE_CHANGE: f64 = 0.05;
pub const CONFIDENCE_SMOOTHING: f64 = 0.2;
/// A track not matched for longer than this is dropped.
pub const FACE_TIMEOUT_MS: u64 = 1000;

/// Tuning knobs of the identity tracker.
///
/// Missing fields of a JSON document fall back to the defaults above.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TrackerConfig {
    /// Gate in pixels, compared with strict `<`.
    pub tracking_threshold: f32,
    /// Fraction of the remaining distance the display box moves per match.
    pub smoothing_factor: f32,
    /// Confidence jump above which a same-label match counts as a new identity.
    pub min_confidence_change: f64,
    pub confidence_smoothing: f64,
    pub face_timeout_ms: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            tracking_threshold: TRACKING_THRESHOLD,
            smoothing_factor: SMOOTHING_FACTOR,
            min_confidence_change: MIN_CONFIDENCE_CHANGE,
            confidence_smoothing: CONFIDENCE_SMOOTHING,
            face_timeout_ms: FACE_TIMEOUT_MS,
        }
    }
}

impl TrackerConfig {
    pub fn from_json(s: &str) -> Result<Self, Error> {
        let config: TrackerConfig = serde_json::from_str(s)?;
        config.validate()?;

        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)?;

        Self::from_json(&content)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !self.tracking_threshold.is_finite() || self.tracking_threshold <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "tracking_threshold must be a positive number, got {}",
                self.tracking_threshold
            )));
        }

        for (name, value) in [
            ("smoothing_factor", self.smoothing_factor as f64),
            ("confidence_smoothing", self.confidence_smoothing),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(Error::InvalidConfig(format!(
                    "{} must be in (0, 1], got {}",
                    name, value
                )));
            }
        }

        if !self.min_confidence_change.is_finite() || self.min_confidence_change < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "min_confidence_change must be non-negative, got {}",
                self.min_confidence_change
            )));
        }

        Ok(())
    }
}
