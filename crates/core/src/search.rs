//! Free-text search and status-facet filtering over complaint lists.
//!
//! This lives in `core` (zero internal deps) so the API layer and any future
//! CLI or worker tooling share one filtering semantics.

use crate::complaint::{Complaint, ComplaintStatus};

/// Status facet applied alongside free-text search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Matches every status, recognized or not.
    #[default]
    All,
    /// Matches exactly one recognized status.
    Only(ComplaintStatus),
}

impl StatusFilter {
    /// Parse a facet string: `all`, or any recognized status spelling
    /// (including the `pending` alias for `open`).
    pub fn parse(value: &str) -> Option<Self> {
        if value == "all" {
            return Some(StatusFilter::All);
        }
        ComplaintStatus::parse(value).map(StatusFilter::Only)
    }

    fn matches(self, status: ComplaintStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => status == wanted,
        }
    }
}

/// Filter a complaint list by free-text query plus a status facet.
///
/// A record matches the query when it is a case-insensitive substring of the
/// title, category, room number, or hostel block -- no tokenization, no fuzzy
/// matching. The empty query matches every record. Results keep the input's
/// relative order and borrow from it; nothing is cloned or mutated.
pub fn filter_complaints<'a>(
    complaints: &'a [Complaint],
    query: &str,
    status: StatusFilter,
) -> Vec<&'a Complaint> {
    let needle = query.to_lowercase();

    complaints
        .iter()
        .filter(|c| status.matches(c.status))
        .filter(|c| matches_query(c, &needle))
        .collect()
}

/// Case-insensitive substring match against the searchable fields.
/// `needle` must already be lower-cased.
fn matches_query(complaint: &Complaint, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    complaint.title.to_lowercase().contains(needle)
        || complaint.category.as_str().to_lowercase().contains(needle)
        || complaint.room_number.to_lowercase().contains(needle)
        || complaint.hostel_block.as_str().to_lowercase().contains(needle)
}
