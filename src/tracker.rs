use crate::bbox::BBox;
use crate::config::TrackerConfig;
use crate::math;
use crate::track::TrackId;
use crate::{Detection, Timestamp};

/// Per-face state owned by a [`Scene`](crate::scene::Scene).
#[derive(Debug, Clone)]
pub struct Face {
    pub id: TrackId,
    pub raw_bbox: BBox,
    pub display_bbox: BBox,
    pub label: String,
    pub relation: Option<String>,
    pub confidence: f64,
    pub last_seen_at: Timestamp,
}

impl Face {
    /// First appearance: no smoothing, the detection is taken as-is.
    pub fn new(ts: Timestamp, det: &Detection) -> Self {
        Self {
            id: TrackId::next(),
            raw_bbox: det.bbox,
            display_bbox: det.bbox,
            label: det.label.clone(),
            relation: det.relation.clone(),
            confidence: det.confidence,
            last_seen_at: ts,
        }
    }

    #[inline]
    pub fn identity_changed(&self, det: &Detection, min_change: f64) -> bool {
        det.label != self.label || (det.confidence - self.confidence).abs() > min_change
    }

    pub fn update(&mut self, ts: Timestamp, det: &Detection, config: &TrackerConfig) {
        self.raw_bbox = det.bbox;
        self.display_bbox = self.display_bbox.lerp(&det.bbox, config.smoothing_factor);

        if self.identity_changed(det, config.min_confidence_change) {
            self.label.clone_from(&det.label);
            self.relation.clone_from(&det.relation);
            self.confidence = det.confidence;
        } else {
            self.confidence =
                math::lerp(self.confidence, det.confidence, config.confidence_smoothing);
        }

        self.last_seen_at = ts;
    }

    #[inline]
    pub fn time_since_update(&self, ts: Timestamp) -> u64 {
        ts.saturating_sub(self.last_seen_at)
    }

    #[inline]
    pub fn is_stale(&self, ts: Timestamp, timeout: u64) -> bool {
        self.time_since_update(ts) > timeout
    }
}

impl From<&Face> for crate::Track {
    fn from(f: &Face) -> crate::Track {
        crate::Track {
            id: f.id,
            bbox: f.display_bbox,
            label: f.label.clone(),
            relation: f.relation.clone(),
            confidence: f.confidence,
        }
    }
}
