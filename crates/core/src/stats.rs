//! Dashboard summary counters.

use serde::Serialize;
use uuid::Uuid;

use crate::complaint::{Complaint, ComplaintStatus};

/// Per-student complaint counts driving the dashboard summary tiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintStats {
    /// All complaints filed by the student, regardless of status.
    pub total: usize,
    /// Complaints still open.
    pub submitted: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

/// Count a student's complaints by status.
///
/// Complaints by other students are ignored; no match means all-zero counts,
/// never an error. A complaint whose status is not one of the three
/// recognized values still counts toward `total` but lands in no bucket, so
/// records written by newer schema versions pass through silently.
pub fn compute_stats(complaints: &[Complaint], student_id: Uuid) -> ComplaintStats {
    let mut stats = ComplaintStats::default();

    for complaint in complaints.iter().filter(|c| c.student_id == student_id) {
        stats.total += 1;
        match complaint.status {
            ComplaintStatus::Open => stats.submitted += 1,
            ComplaintStatus::InProgress => stats.in_progress += 1,
            ComplaintStatus::Resolved => stats.resolved += 1,
            ComplaintStatus::Unknown => {}
        }
    }

    stats
}
