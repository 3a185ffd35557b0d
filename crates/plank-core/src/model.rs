use serde::{Deserialize, Serialize};

/// A unit of work as delivered by the snapshot feed.
///
/// Field shapes follow the feed: camelCase keys, optional assignee
/// reference, integer priority rank. Every field defaults when absent so a
/// sparse record degrades instead of failing the whole snapshot decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub title: String,
    /// Open string dimension; the feed guarantees no closed set of values.
    pub status: String,
    /// Assignee reference. `None` means unassigned.
    pub user_id: Option<String>,
    /// Raw priority rank. 0–4 map to the labelled scale; anything else is
    /// tolerated and labelled "Unknown Priority".
    pub priority: i64,
}

/// A user record from the snapshot feed.
///
/// Display attributes beyond the name are not relevant to the board and are
/// ignored on decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub name: String,
}

/// One decoded fetch payload: the read-only snapshot a board derives from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub tickets: Vec<Ticket>,
    pub users: Vec<User>,
}

/// The labelled priority scale, from rank 0 up to rank 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    NoPriority,
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// The rank carried on the wire for this level.
    #[must_use]
    pub const fn rank(self) -> i64 {
        match self {
            Self::NoPriority => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Urgent => 4,
        }
    }

    /// Map a raw rank back to a level, if it is on the labelled scale.
    #[must_use]
    pub const fn from_rank(rank: i64) -> Option<Self> {
        match rank {
            0 => Some(Self::NoPriority),
            1 => Some(Self::Low),
            2 => Some(Self::Medium),
            3 => Some(Self::High),
            4 => Some(Self::Urgent),
            _ => None,
        }
    }

    /// Fixed display label for this level.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoPriority => "No priority",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }
}

/// Display label for a raw priority rank, total over all integers.
#[must_use]
pub fn priority_label(rank: i64) -> &'static str {
    Priority::from_rank(rank).map_or("Unknown Priority", Priority::label)
}
