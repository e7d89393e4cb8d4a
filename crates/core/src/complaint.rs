//! The complaint record and its closed enumerations.
//!
//! Wire field names are camelCase to stay compatible with the records the
//! mobile client already persists (`studentId`, `hostelBlock`, ...).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Timestamp;

/// Maximum number of image attachments per complaint.
pub const MAX_IMAGES: usize = 5;

/// Complaint category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Maintenance,
    Plumbing,
    Electrical,
    Internet,
    Cleaning,
    Security,
    Furniture,
    Other,
}

impl Category {
    /// All selectable categories, in the order the client presents them.
    pub const ALL: &'static [Category] = &[
        Category::Maintenance,
        Category::Plumbing,
        Category::Electrical,
        Category::Internet,
        Category::Cleaning,
        Category::Security,
        Category::Furniture,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Maintenance => "Maintenance",
            Category::Plumbing => "Plumbing",
            Category::Electrical => "Electrical",
            Category::Internet => "Internet",
            Category::Cleaning => "Cleaning",
            Category::Security => "Security",
            Category::Furniture => "Furniture",
            Category::Other => "Other",
        }
    }

    /// Parse a category from its wire string.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == value)
    }
}

/// Complaint priority. Defaults to [`Priority::Medium`] on new submissions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Low" => Some(Priority::Low),
            "Medium" => Some(Priority::Medium),
            "High" => Some(Priority::High),
            "Urgent" => Some(Priority::Urgent),
            _ => None,
        }
    }
}

/// Hostel block identifier (blocks A through F).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostelBlock {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl HostelBlock {
    pub fn as_str(self) -> &'static str {
        match self {
            HostelBlock::A => "A",
            HostelBlock::B => "B",
            HostelBlock::C => "C",
            HostelBlock::D => "D",
            HostelBlock::E => "E",
            HostelBlock::F => "F",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "A" => Some(HostelBlock::A),
            "B" => Some(HostelBlock::B),
            "C" => Some(HostelBlock::C),
            "D" => Some(HostelBlock::D),
            "E" => Some(HostelBlock::E),
            "F" => Some(HostelBlock::F),
            _ => None,
        }
    }
}

/// Complaint lifecycle status.
///
/// The canonical spelling of the initial status is `open`; `pending` is
/// accepted as an input alias because older client builds wrote it. Statuses
/// from newer schema versions deserialize to [`ComplaintStatus::Unknown`]
/// instead of failing, so aggregation stays total under schema drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplaintStatus {
    #[serde(rename = "open", alias = "pending")]
    Open,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "resolved")]
    Resolved,
    #[serde(other, rename = "unknown")]
    Unknown,
}

impl ComplaintStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ComplaintStatus::Open => "open",
            ComplaintStatus::InProgress => "in-progress",
            ComplaintStatus::Resolved => "resolved",
            ComplaintStatus::Unknown => "unknown",
        }
    }

    /// Parse a status from its wire string, accepting the `pending` alias.
    /// Unrecognized strings are `None` here; only deserialization of stored
    /// records maps them to [`ComplaintStatus::Unknown`].
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "open" | "pending" => Some(ComplaintStatus::Open),
            "in-progress" => Some(ComplaintStatus::InProgress),
            "resolved" => Some(ComplaintStatus::Resolved),
            _ => None,
        }
    }
}

/// A persisted complaint record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: Uuid,
    pub student_id: Uuid,
    pub title: String,
    pub category: Category,
    #[serde(default)]
    pub priority: Priority,
    pub hostel_block: HostelBlock,
    pub room_number: String,
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub status: ComplaintStatus,
    #[serde(default)]
    pub upvotes: u32,
    pub created_at: Timestamp,
}
