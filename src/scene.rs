use tracing::{debug, trace};

use crate::config::TrackerConfig;
use crate::tracker::Face;
use crate::{Detection, Timestamp};

/// Result of associating one batch of detections with the live faces.
///
/// Indexes refer to `Scene::faces` and to the batch the mapping was built from.
pub struct DetectionsMapping<'a> {
    timestamp: Timestamp,
    detections: &'a [Detection],
    // (face, detection, center distance)
    matched: Vec<(usize, usize, f32)>,
    missed: Vec<usize>,
}

impl<'a> DetectionsMapping<'a> {
    #[inline]
    pub fn matched(&self) -> &[(usize, usize, f32)] {
        &self.matched
    }

    #[inline]
    pub fn missed(&self) -> &[usize] {
        &self.missed
    }
}

/// Identity tracker of a single camera stream.
///
/// Faces are kept in ascending id order: new ones are appended with fresh
/// ids and eviction preserves the order of the rest.
pub struct Scene {
    pub(crate) faces: Vec<Face>,
    config: TrackerConfig,
    last_timestamp: Option<Timestamp>,
}

impl Scene {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            faces: Vec::with_capacity(8),
            config,
            last_timestamp: None,
        }
    }

    #[inline]
    pub fn last_timestamp(&self) -> Option<Timestamp> {
        self.last_timestamp
    }

    /// Greedy nearest-center association, single pass over `detections` in
    /// their given order. Each face accepts at most one detection per batch;
    /// equal distances go to the face scanned first (lowest id).
    pub fn map_detections<'a>(
        &self,
        ts: Timestamp,
        detections: &'a [Detection],
    ) -> DetectionsMapping<'a> {
        let mut taken = vec![false; self.faces.len()];
        let mut matched = Vec::new();
        let mut missed = Vec::new();

        for (j, det) in detections.iter().enumerate() {
            let mut best: Option<(usize, f32)> = None;

            for (i, face) in self.faces.iter().enumerate() {
                if taken[i] {
                    continue;
                }

                let dist = face.raw_bbox.center_distance(&det.bbox);
                if dist < self.config.tracking_threshold && best.map_or(true, |(_, d)| dist < d) {
                    best = Some((i, dist));
                }
            }

            if let Some((i, dist)) = best {
                trace!(track_id = %self.faces[i].id, detection = j, dist, "matched");
                taken[i] = true;
                matched.push((i, j, dist));
            } else {
                trace!(detection = j, "unmatched");
                missed.push(j);
            }
        }

        DetectionsMapping {
            timestamp: ts,
            detections,
            matched,
            missed,
        }
    }

    /// Applies a mapping: updates matched faces, creates faces for the missed
    /// detections, then evicts every face silent for longer than the timeout.
    pub fn apply(&mut self, mapping: DetectionsMapping<'_>) {
        let time = mapping.timestamp;
        let dets = mapping.detections;

        for (i, j, _) in mapping.matched {
            self.faces[i].update(time, &dets[j], &self.config);
        }

        for j in mapping.missed {
            let face = Face::new(time, &dets[j]);
            debug!(track_id = %face.id, label = %face.label, "new track");
            self.faces.push(face);
        }

        let timeout = self.config.face_timeout_ms;
        self.faces.retain(|f| {
            if f.is_stale(time, timeout) {
                debug!(
                    track_id = %f.id,
                    silent_ms = f.time_since_update(time),
                    "track evicted"
                );
                return false;
            }

            true
        });

        self.last_timestamp = Some(time);
    }

    /// Runs one tick and returns the live tracks.
    pub fn update(&mut self, ts: Timestamp, detections: &[Detection]) -> Vec<crate::Track> {
        let mapping = self.map_detections(ts, detections);
        self.apply(mapping);
        self.tracks()
    }

    pub fn tracks(&self) -> Vec<crate::Track> {
        self.faces.iter().map(Into::into).collect()
    }
}
