pub mod api;
pub mod config;
pub mod error;
pub mod flows;
pub mod models;
pub mod observability;
pub mod state;
pub mod store;
pub mod sync;
