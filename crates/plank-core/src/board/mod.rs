//! The board derivation pipeline.
//!
//! Four pieces compose into [`build_board`]: a user index (leaf lookup), a
//! grouper (stable partition by the grouping dimension), a sorter (stable
//! per-ticket ordering) and a column builder (labels plus render-ready
//! ticket views). The whole pipeline re-runs from scratch on every
//! derivation; columns have no identity between runs.

pub mod columns;
pub mod group;
pub mod sort;
pub mod users;

pub use columns::{Column, TicketView, build_board};
pub use group::Key;
pub use users::{UNASSIGNED_LABEL, UserIndex};
