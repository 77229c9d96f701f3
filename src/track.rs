use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde_derive::{Deserialize, Serialize};

use crate::bbox::BBox;
use crate::detection::UNKNOWN_LABEL;

static SEQ_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique track identifier. Never reused, even after eviction.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrackId(u64);

impl TrackId {
    pub(crate) fn next() -> Self {
        TrackId(SEQ_ID.fetch_add(1, Ordering::SeqCst))
    }

    #[inline]
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display-ready snapshot of a live face track.
///
/// `id` is the only key that stays stable across ticks; `label` can repeat
/// between simultaneous faces (several `"Unknown"`s, for instance).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Track {
    pub id: TrackId,
    // smoothed
    pub bbox: BBox,
    #[serde(rename = "name")]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,
    pub confidence: f64,
}

impl Track {
    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.label == UNKNOWN_LABEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_increasing() {
        let a = TrackId::next();
        let b = TrackId::next();
        let c = TrackId::next();

        assert!(a < b && b < c);
        assert_ne!(a, c);
    }

    #[test]
    fn test_serialize_output_record() {
        let track = Track {
            id: TrackId(7),
            bbox: BBox::ltrb(103.0, 100.0, 200.0, 200.0),
            label: "Alice".into(),
            relation: Some("Friend".into()),
            confidence: 0.5,
        };

        assert_eq!(
            serde_json::to_string(&track).unwrap(),
            r#"{"id":7,"bbox":[103.0,100.0,200.0,200.0],"name":"Alice","relation":"Friend","confidence":0.5}"#
        );
        assert!(!track.is_unknown());
        assert_eq!(track.id.to_string(), "7");
    }
}
