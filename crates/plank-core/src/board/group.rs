use crate::model::Ticket;
use crate::prefs::GroupBy;
use indexmap::IndexMap;

/// Identity of one column: the grouping dimension's value for its tickets.
///
/// Typed per dimension, so an unassigned ticket can never collide with a
/// real user id and a status string can never collide with a priority rank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Status(String),
    Assignee(Option<String>),
    Priority(i64),
}

impl Key {
    /// The grouping key of `ticket` along the `mode` dimension.
    #[must_use]
    pub fn of(ticket: &Ticket, mode: GroupBy) -> Self {
        match mode {
            GroupBy::Status => Self::Status(ticket.status.clone()),
            GroupBy::User => Self::Assignee(ticket.user_id.clone()),
            GroupBy::Priority => Self::Priority(ticket.priority),
        }
    }

    /// The priority rank, for keys along the priority dimension.
    #[must_use]
    pub const fn priority_rank(&self) -> Option<i64> {
        match self {
            Self::Priority(rank) => Some(*rank),
            Self::Status(_) | Self::Assignee(_) => None,
        }
    }
}

/// Stable partition of `tickets` along the `mode` dimension.
///
/// Total and disjoint: every ticket lands in exactly one bucket. Within a
/// bucket tickets keep their relative input order, and buckets appear in
/// first-encounter order.
#[must_use]
pub fn partition<'a, I>(tickets: I, mode: GroupBy) -> IndexMap<Key, Vec<&'a Ticket>>
where
    I: IntoIterator<Item = &'a Ticket>,
{
    let mut buckets: IndexMap<Key, Vec<&'a Ticket>> = IndexMap::new();
    for ticket in tickets {
        buckets
            .entry(Key::of(ticket, mode))
            .or_default()
            .push(ticket);
    }
    buckets
}
