use crate::model::Ticket;
use crate::prefs::SortBy;
use std::cmp::Ordering;

/// Order `tickets` in place along the `mode` dimension.
///
/// Both orderings are stable: tickets comparing equal keep their relative
/// input order.
///
/// - [`SortBy::Priority`]: rank descending, urgent first. Out-of-scale
///   ranks participate as plain integers.
/// - [`SortBy::Title`]: case-aware lexicographic, ascending, over the flat
///   list regardless of any grouping.
pub fn tickets(tickets: &mut [&Ticket], mode: SortBy) {
    match mode {
        SortBy::Priority => tickets.sort_by(|a, b| b.priority.cmp(&a.priority)),
        SortBy::Title => tickets.sort_by(|a, b| compare_titles(&a.title, &b.title)),
    }
}

/// Case-aware lexicographic title comparison.
///
/// Compares char-wise case-folded text first, then falls back to an exact
/// comparison so titles differing only in case still order deterministically.
/// Not a full locale collation; board titles do not warrant a collator.
#[must_use]
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    if folded == Ordering::Equal { a.cmp(b) } else { folded }
}
