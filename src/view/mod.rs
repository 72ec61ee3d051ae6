// src/view/mod.rs
//
// Pure derivation of leaderboard views from a fetched page:
// filter -> tab -> paginate -> sort visible rows.

pub mod analytics;
pub mod compose;
pub mod filter;
pub mod pagination;
pub mod sort;
pub mod subject;
pub mod tab;

pub use compose::{ComposedView, DisplayRow, ViewStatus, compose};
