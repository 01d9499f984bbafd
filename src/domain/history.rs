//! Resolved submissions and the session history
//!
//! The hit-check service returns the full history on every successful
//! submission; the local copy is replaced wholesale and never edited.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::core::GraphPoint;
use crate::domain::region::Radius;

/// One submission as resolved by the hit-check service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    pub x: f64,
    pub y: f64,
    /// Radius as reported by the service
    pub r: f64,
    pub hit: bool,
    pub timestamp: NaiveDateTime,
    pub exec_time_nanos: u64,
}

impl SubmissionResult {
    pub fn point(&self) -> GraphPoint {
        GraphPoint::new(self.x, self.y)
    }

    /// The enumerated radius this entry was submitted with, if it is one
    pub fn radius(&self) -> Option<Radius> {
        Radius::from_value(self.r)
    }
}

/// Ordered record of resolved submissions, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    entries: Vec<SubmissionResult>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[SubmissionResult] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recently resolved submission
    pub fn latest(&self) -> Option<&SubmissionResult> {
        self.entries.last()
    }

    /// Replaces the local copy with the history returned by the service
    pub fn replace(&mut self, entries: Vec<SubmissionResult>) -> Option<&SubmissionResult> {
        self.entries = entries;
        self.entries.last()
    }

    /// Entries submitted with `radius`, in insertion order
    pub fn for_radius(&self, radius: Radius) -> impl Iterator<Item = &SubmissionResult> + '_ {
        self.entries.iter().filter(move |entry| radius.matches(entry.r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(x: f64, y: f64, r: f64, hit: bool) -> SubmissionResult {
        SubmissionResult {
            x,
            y,
            r,
            hit,
            timestamp: NaiveDateTime::parse_from_str("2024-10-19T12:00:00", "%Y-%m-%dT%H:%M:%S")
                .unwrap(),
            exec_time_nanos: 1500,
        }
    }

    #[test]
    fn deserializes_service_payload() {
        let payload = r#"[
            {"x":1.00,"y":2.00,"r":2.00,"hit":true,"timestamp":"2024-10-19T12:34:56.123456789","execTimeNanos":1500},
            {"x":-1.50,"y":0.25,"r":1.50,"hit":false,"timestamp":"2024-10-19T12:35:00","execTimeNanos":900}
        ]"#;

        let entries: Vec<SubmissionResult> = serde_json::from_str(payload).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].point(), GraphPoint::new(1.0, 2.0));
        assert_eq!(entries[0].radius(), Some(Radius::Two));
        assert!(entries[0].hit);
        assert_eq!(entries[0].exec_time_nanos, 1500);
        assert_eq!(entries[1].radius(), Some(Radius::OneAndHalf));
    }

    #[test]
    fn replace_returns_latest_entry() {
        let mut history = History::new();
        assert!(history.latest().is_none());

        let latest = history
            .replace(vec![entry(0.0, 0.0, 1.0, true), entry(1.0, 2.0, 2.0, true)])
            .cloned();
        assert_eq!(latest, Some(entry(1.0, 2.0, 2.0, true)));
        assert_eq!(history.len(), 2);

        history.replace(vec![entry(0.5, 0.5, 3.0, false)]);
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest(), Some(&entry(0.5, 0.5, 3.0, false)));
    }

    #[test]
    fn filters_by_radius_in_insertion_order() {
        let mut history = History::new();
        history.replace(vec![
            entry(1.0, 1.0, 2.0, true),
            entry(2.0, 2.0, 1.0, false),
            entry(3.0, 3.0, 2.0, false),
            entry(4.0, 4.0, 4.0, false),
        ]);

        let xs: Vec<f64> = history.for_radius(Radius::Two).map(|e| e.x).collect();
        assert_eq!(xs, vec![1.0, 3.0]);
        assert_eq!(history.for_radius(Radius::Three).count(), 0);
    }
}
