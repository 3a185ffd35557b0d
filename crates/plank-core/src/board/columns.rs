use super::group::{self, Key};
use super::sort;
use super::users::UserIndex;
use crate::model::{Snapshot, Ticket, priority_label};
use crate::prefs::{GroupBy, Preferences};
use serde::Serialize;
use std::cmp::Reverse;

/// A ticket enriched for direct rendering: resolved assignee display name,
/// priority label, and whether an avatar can be shown for the assignee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketView {
    pub id: String,
    pub title: String,
    pub status: String,
    pub priority: i64,
    pub priority_label: &'static str,
    pub assignee: String,
    pub has_avatar: bool,
}

impl TicketView {
    fn new(ticket: &Ticket, users: &UserIndex<'_>) -> Self {
        Self {
            id: ticket.id.clone(),
            title: ticket.title.clone(),
            status: ticket.status.clone(),
            priority: ticket.priority,
            priority_label: priority_label(ticket.priority),
            assignee: users.display_name(ticket.user_id.as_deref()).to_string(),
            has_avatar: users.resolve(ticket.user_id.as_deref()).is_some(),
        }
    }
}

/// A labelled, ordered view of the tickets sharing one grouping-key value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    #[serde(skip)]
    pub key: Key,
    pub label: String,
    pub tickets: Vec<TicketView>,
}

/// Derive the full board: one ordered column per grouping-key value present
/// in the snapshot.
///
/// The pipeline builds the user index once, orders the flat ticket list
/// along the sort dimension, partitions the ordered sequence along the
/// grouping dimension, then labels each column. Pure and total: an empty or
/// partial snapshot produces an empty or partial board, never an error.
#[must_use]
pub fn build_board(snapshot: &Snapshot, prefs: Preferences) -> Vec<Column> {
    let users = UserIndex::new(&snapshot.users);

    let mut ordered: Vec<&Ticket> = snapshot.tickets.iter().collect();
    sort::tickets(&mut ordered, prefs.sort_by);

    let buckets = group::partition(ordered.iter().copied(), prefs.group_by);
    let mut columns: Vec<Column> = buckets
        .into_iter()
        .map(|(key, members)| Column {
            label: label_for(&key, &users),
            tickets: members
                .into_iter()
                .map(|ticket| TicketView::new(ticket, &users))
                .collect(),
            key,
        })
        .collect();

    // Column placement: priority columns read urgent-first; every other
    // dimension keeps first-encounter order from the sorted sequence.
    if prefs.group_by == GroupBy::Priority {
        columns.sort_by_key(|column| Reverse(column.key.priority_rank().unwrap_or(i64::MIN)));
    }

    columns
}

/// Human-readable label for a column key.
#[must_use]
pub fn label_for(key: &Key, users: &UserIndex<'_>) -> String {
    match key {
        Key::Status(status) => status.clone(),
        Key::Assignee(user_id) => users.display_name(user_id.as_deref()).to_string(),
        Key::Priority(rank) => priority_label(*rank).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{build_board, label_for};
    use crate::board::group::Key;
    use crate::board::users::{UNASSIGNED_LABEL, UserIndex};
    use crate::model::{Snapshot, Ticket, User};
    use crate::prefs::{GroupBy, Preferences, SortBy};

    fn ticket(id: &str, title: &str, status: &str, user_id: Option<&str>, priority: i64) -> Ticket {
        Ticket {
            id: id.to_string(),
            title: title.to_string(),
            status: status.to_string(),
            user_id: user_id.map(str::to_string),
            priority,
        }
    }

    fn user(id: &str, name: &str) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn snapshot() -> Snapshot {
        Snapshot {
            tickets: vec![
                ticket("t1", "Fix login", "Todo", Some("u1"), 3),
                ticket("t2", "Add search", "In Progress", None, 4),
                ticket("t3", "Update docs", "Todo", Some("ghost"), 0),
                ticket("t4", "Retry queue", "Done", Some("u2"), 9),
            ],
            users: vec![user("u1", "Ana"), user("u2", "Bo")],
        }
    }

    #[test]
    fn empty_snapshot_builds_empty_board() {
        let columns = build_board(&Snapshot::default(), Preferences::default());
        assert!(columns.is_empty());
    }

    #[test]
    fn labels_follow_the_grouping_dimension() {
        let users = [user("u1", "Ana")];
        let index = UserIndex::new(&users);

        assert_eq!(
            label_for(&Key::Status("Todo".to_string()), &index),
            "Todo"
        );
        assert_eq!(
            label_for(&Key::Assignee(Some("u1".to_string())), &index),
            "Ana"
        );
        assert_eq!(label_for(&Key::Assignee(None), &index), UNASSIGNED_LABEL);
        assert_eq!(
            label_for(&Key::Assignee(Some("ghost".to_string())), &index),
            UNASSIGNED_LABEL
        );
        assert_eq!(label_for(&Key::Priority(4), &index), "Urgent");
        assert_eq!(label_for(&Key::Priority(9), &index), "Unknown Priority");
    }

    #[test]
    fn views_resolve_assignee_and_avatar() {
        let columns = build_board(&snapshot(), Preferences::default());
        let views: Vec<_> = columns.iter().flat_map(|c| &c.tickets).collect();

        let t1 = views.iter().find(|v| v.id == "t1").expect("t1 present");
        assert_eq!(t1.assignee, "Ana");
        assert!(t1.has_avatar);
        assert_eq!(t1.priority_label, "High");

        // Dangling reference degrades, it never fails.
        let t3 = views.iter().find(|v| v.id == "t3").expect("t3 present");
        assert_eq!(t3.assignee, UNASSIGNED_LABEL);
        assert!(!t3.has_avatar);

        let t4 = views.iter().find(|v| v.id == "t4").expect("t4 present");
        assert_eq!(t4.priority_label, "Unknown Priority");
    }

    #[test]
    fn board_is_total_over_input_tickets() {
        for group_by in [GroupBy::Status, GroupBy::User, GroupBy::Priority] {
            for sort_by in [SortBy::Priority, SortBy::Title] {
                let columns = build_board(&snapshot(), Preferences { group_by, sort_by });
                let mut ids: Vec<String> = columns
                    .iter()
                    .flat_map(|c| c.tickets.iter().map(|t| t.id.clone()))
                    .collect();
                ids.sort();
                assert_eq!(ids, vec!["t1", "t2", "t3", "t4"], "{group_by:?}/{sort_by:?}");
            }
        }
    }

    #[test]
    fn priority_grouping_orders_columns_urgent_first() {
        let columns = build_board(&snapshot(), Preferences {
            group_by: GroupBy::Priority,
            sort_by: SortBy::Title,
        });

        let labels: Vec<&str> = columns.iter().map(|c| c.label.as_str()).collect();
        // Ranks present: 9, 4, 3, 0 — descending regardless of title order.
        assert_eq!(labels, vec!["Unknown Priority", "Urgent", "High", "No priority"]);
    }

    #[test]
    fn status_grouping_keeps_first_encounter_column_order() {
        let columns = build_board(&snapshot(), Preferences {
            group_by: GroupBy::Status,
            sort_by: SortBy::Priority,
        });

        // Priority order over the flat list: t4(9), t2(4), t1(3), t3(0),
        // so columns are first encountered as Done, In Progress, Todo.
        let labels: Vec<&str> = columns.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Done", "In Progress", "Todo"]);
    }

    #[test]
    fn json_shape_omits_the_internal_key() {
        let columns = build_board(&snapshot(), Preferences::default());
        let json = serde_json::to_value(&columns).expect("columns serialize");

        let first = json
            .get(0)
            .and_then(|c| c.as_object())
            .expect("array of objects");
        assert!(first.contains_key("label"));
        assert!(first.contains_key("tickets"));
        assert!(!first.contains_key("key"));
    }
}
