#![forbid(unsafe_code)]
//! plank-core: the ticket classification and ordering engine.
//!
//! Pure data transformation: a flat snapshot of tickets and users plus a
//! pair of board preferences in, labelled and ordered columns out. No I/O,
//! no internal state between derivations; identical inputs always produce
//! an identical board.
//!
//! # Conventions
//!
//! - **Errors**: the derivation pipeline is infallible by construction —
//!   degenerate input degrades to a degenerate board, never an error.
//!   Strict parsing surfaces return typed errors.
//! - **Logging**: `tracing` macros (`warn!`, `debug!`), used sparingly.

pub mod board;
pub mod model;
pub mod prefs;

pub use board::{Column, TicketView, build_board};
pub use model::{Priority, Snapshot, Ticket, User, priority_label};
pub use prefs::{GroupBy, Preferences, SortBy};
