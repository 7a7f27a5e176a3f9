//! Detection statistics for the session report

use crate::Detection;
use crate::class::WasteClass;

/// Per-class occurrence counts over a set of detections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectionSummary {
    counts: [usize; WasteClass::ALL.len()],
}

impl DetectionSummary {
    /// Empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Summarize a list of detections.
    pub fn from_detections(detections: &[Detection]) -> Self {
        let mut summary = Self::new();
        for d in detections {
            summary.record(d.class);
        }
        summary
    }

    /// Record one detection.
    pub fn record(&mut self, class: WasteClass) {
        self.counts[class.index()] += 1;
    }

    /// Fold another summary into this one (session accumulation).
    pub fn merge(&mut self, other: &DetectionSummary) {
        for (a, b) in self.counts.iter_mut().zip(&other.counts) {
            *a += b;
        }
    }

    /// Occurrences of one class.
    pub fn count(&self, class: WasteClass) -> usize {
        self.counts[class.index()]
    }

    /// Total detections recorded.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Number of distinct classes seen.
    pub fn unique_classes(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Nothing detected: the water reads as clear.
    pub fn is_clear(&self) -> bool {
        self.total() == 0
    }

    /// The most frequent class and its count. Ties resolve to the lowest
    /// model index.
    pub fn most_common(&self) -> Option<(WasteClass, usize)> {
        let (idx, &count) = self
            .counts
            .iter()
            .enumerate()
            .max_by(|(ia, a), (ib, b)| a.cmp(b).then(ib.cmp(ia)))?;
        if count == 0 {
            return None;
        }
        Some((WasteClass::ALL[idx], count))
    }
}
