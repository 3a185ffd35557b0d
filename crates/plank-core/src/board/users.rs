use crate::model::User;
use std::collections::HashMap;

/// Label used wherever a ticket has no resolvable assignee.
pub const UNASSIGNED_LABEL: &str = "Unassigned";

/// O(1) average lookup from user id to user record.
///
/// Duplicate ids resolve last-write-wins over the input order, which keeps
/// the index deterministic for a given snapshot.
#[derive(Debug, Clone)]
pub struct UserIndex<'a> {
    by_id: HashMap<&'a str, &'a User>,
}

impl<'a> UserIndex<'a> {
    #[must_use]
    pub fn new(users: &'a [User]) -> Self {
        let mut by_id = HashMap::with_capacity(users.len());
        for user in users {
            by_id.insert(user.id.as_str(), user);
        }
        Self { by_id }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'a User> {
        self.by_id.get(id).copied()
    }

    /// Resolve an optional assignee reference to a user record.
    #[must_use]
    pub fn resolve(&self, user_id: Option<&str>) -> Option<&'a User> {
        user_id.and_then(|id| self.get(id))
    }

    /// Display name for an optional assignee reference.
    ///
    /// Missing and dangling references both degrade to [`UNASSIGNED_LABEL`];
    /// resolution never fails.
    #[must_use]
    pub fn display_name(&self, user_id: Option<&str>) -> &'a str {
        self.resolve(user_id)
            .map_or(UNASSIGNED_LABEL, |user| user.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
