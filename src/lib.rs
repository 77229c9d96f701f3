pub mod bbox;
pub mod config;
pub mod detection;
pub mod error;
pub mod frame;
pub mod math;
pub mod scene;
pub mod tracker;

mod track;

pub use config::TrackerConfig;
pub use detection::Detection;
pub use frame::Frame;
pub use track::{Track, TrackId};

use error::Error;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::{debug, warn};

/// Milliseconds on the caller's clock; must not decrease between ticks of a source.
pub type Timestamp = u64;

pub trait Tracking {
    fn update(&mut self, frames: &[Frame], src: &str) -> Result<(), Error>;
    fn tracks(&self, src: &str) -> Rc<[Track]>;
}

/// Face tracker keeping one independent [`scene::Scene`] per camera source.
///
/// Not meant to be shared: callers serialize ticks, one frame batch at a time.
pub struct FaceTracker {
    config: TrackerConfig,
    scenes: HashMap<String, scene::Scene>,
}

impl FaceTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            scenes: HashMap::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Drops all state of `src`, e.g. when its camera session ends.
    pub fn reset(&mut self, src: &str) -> bool {
        let removed = self.scenes.remove(src).is_some();
        if removed {
            debug!(src, "scene reset");
        }

        removed
    }
}

impl Default for FaceTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl crate::Tracking for FaceTracker {
    /// Applies `frames` in order, or none of them: the whole batch is checked
    /// for non-decreasing timestamps before the scene is touched.
    fn update(&mut self, frames: &[Frame], src: &str) -> Result<(), Error> {
        let mut last = self.scenes.get(src).and_then(|s| s.last_timestamp());

        for frame in frames {
            if let Some(last) = last {
                if frame.timestamp < last {
                    warn!(src, ts = frame.timestamp, last, "frame out of order, batch rejected");

                    return Err(Error::NonMonotonicTimestamp {
                        src: src.to_string(),
                        ts: frame.timestamp,
                        last,
                    });
                }
            }

            last = Some(frame.timestamp);
        }

        if frames.is_empty() {
            return Ok(());
        }

        let config = &self.config;
        let scene = self.scenes.entry(src.to_string()).or_insert_with(|| {
            debug!(src, "new scene");
            scene::Scene::new(config.clone())
        });

        for frame in frames {
            scene.update(frame.timestamp, &frame.detections);
        }

        Ok(())
    }

    #[inline]
    fn tracks(&self, src: &str) -> Rc<[Track]> {
        if let Some(scene) = self.scenes.get(src) {
            return scene.tracks().into_boxed_slice().into();
        }

        Rc::new([])
    }
}
