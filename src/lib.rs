// src/lib.rs

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod source;
pub mod state;
pub mod view;

pub use routes::create_router;
