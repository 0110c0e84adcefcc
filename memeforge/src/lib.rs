pub mod api;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod render;
