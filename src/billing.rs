//! Billing rollup
//!
//! A detection counts as correctly sorted when the classifier was
//! confident and no violation was flagged; everything else draws a
//! flat per-item fine. The summary is recomputed from the logs on
//! every request, nothing here is persisted.

use crate::models::{BillingSummary, DetectionRecord};

const CONFIDENCE_THRESHOLD: f64 = 0.8;
const PENALTY_PER_ITEM: u64 = 10;

/// Summarize a detection history into a billing statement.
pub fn summarize(logs: &[DetectionRecord]) -> BillingSummary {
    let total_items = logs.len() as u64;
    let correct = logs
        .iter()
        .filter(|r| r.confidence >= CONFIDENCE_THRESHOLD && !r.is_violation)
        .count() as u64;
    let incorrect = total_items - correct;
    let penalty = incorrect * PENALTY_PER_ITEM;

    BillingSummary {
        total_items,
        correct,
        incorrect,
        penalty,
        final_bill: penalty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Moisture, WasteClass};

    fn record(confidence: f64, is_violation: bool) -> DetectionRecord {
        DetectionRecord {
            class: WasteClass::Organic,
            wet_dry: Moisture::Wet,
            confidence,
            is_mixed: false,
            is_violation,
            snapshot_path: String::new(),
            timestamp: "2025-01-01T00:00:00".to_string(),
        }
    }

    #[test]
    fn test_empty_logs_bill_zero() {
        assert_eq!(summarize(&[]), BillingSummary::default());
    }

    #[test]
    fn test_mixed_history() {
        // Only the first is correct: confident and not a violation.
        let logs = vec![record(0.9, false), record(0.5, false), record(0.85, true)];

        let summary = summarize(&logs);
        assert_eq!(summary.total_items, 3);
        assert_eq!(summary.correct, 1);
        assert_eq!(summary.incorrect, 2);
        assert_eq!(summary.penalty, 20);
        assert_eq!(summary.final_bill, summary.penalty);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let summary = summarize(&[record(0.8, false)]);
        assert_eq!(summary.correct, 1);
        assert_eq!(summary.penalty, 0);
    }

    #[test]
    fn test_confident_violation_still_fined() {
        let summary = summarize(&[record(0.99, true)]);
        assert_eq!(summary.correct, 0);
        assert_eq!(summary.final_bill, 10);
    }

    #[test]
    fn test_deterministic() {
        let logs = vec![record(0.9, false), record(0.3, true)];
        assert_eq!(summarize(&logs), summarize(&logs));
    }
}
