use serde_derive::{Deserialize, Serialize};

use crate::bbox::BBox;

/// Label the recognition service uses for faces it could not identify.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// One raw face detection as returned by the recognition service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Detection {
    pub bbox: BBox,
    #[serde(rename = "name")]
    pub label: String,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,
}

impl Detection {
    pub fn new(bbox: BBox, label: impl Into<String>, confidence: f64) -> Self {
        Self {
            bbox,
            label: label.into(),
            confidence,
            relation: None,
        }
    }

    pub fn with_relation(mut self, relation: impl Into<String>) -> Self {
        self.relation = Some(relation.into());
        self
    }

    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.label == UNKNOWN_LABEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_service_payload() {
        let dets: Vec<Detection> = serde_json::from_str(
            r#"[
                {"bbox": [100, 100, 200, 200], "name": "Alice", "confidence": 0.9, "relation": "Sister"},
                {"bbox": [300, 120, 380, 210], "name": "Unknown", "confidence": 0.41}
            ]"#,
        )
        .unwrap();

        assert_eq!(dets.len(), 2);
        assert_eq!(dets[0].label, "Alice");
        assert_eq!(dets[0].relation.as_deref(), Some("Sister"));
        assert!(!dets[0].is_unknown());

        assert_eq!(dets[1].bbox, BBox::ltrb(300.0, 120.0, 380.0, 210.0));
        assert_eq!(dets[1].relation, None);
        assert!(dets[1].is_unknown());
    }

    #[test]
    fn test_serialize_skips_missing_relation() {
        let det = Detection::new(BBox::ltrb(0.0, 0.0, 1.0, 1.0), "Bob", 0.5);
        let json = serde_json::to_string(&det).unwrap();

        assert_eq!(
            json,
            r#"{"bbox":[0.0,0.0,1.0,1.0],"name":"Bob","confidence":0.5}"#
        );
    }
}
