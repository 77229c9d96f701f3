use serde_derive::{Deserialize, Serialize};

use crate::detection::Detection;
use crate::error::Error;
use crate::Timestamp;

/// All detections the recognition service returned for one captured frame.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Frame {
    pub timestamp: Timestamp, // in milliseconds
    pub detections: Vec<Detection>,
}

impl Frame {
    pub fn new(timestamp: Timestamp, detections: Vec<Detection>) -> Self {
        Self {
            timestamp,
            detections,
        }
    }

    /// Parses one line of a detections dump: `<ts_ms>:<json array of detections>`.
    pub fn parse_line(line: &str) -> Result<Self, Error> {
        let idx = line.find(':').ok_or(Error::DumpFormat("expected `:`"))?;
        let (ts, vector) = line.split_at(idx);

        let timestamp = ts
            .trim()
            .parse::<Timestamp>()
            .map_err(|_| Error::DumpFormat("parse timestamp failed"))?;
        let detections = serde_json::from_str(&vector[1..])?;

        Ok(Self {
            timestamp,
            detections,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.detections.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }
}
