//! Configuration and data model shared by every layer.

pub mod config;
pub mod models;
