// src/models/mod.rs

pub mod analytics;
pub mod entry;
pub mod filter;
pub mod query;
pub mod view_state;
