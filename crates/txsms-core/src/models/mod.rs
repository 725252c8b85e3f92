//! Data models.

pub mod config;
pub mod message;
pub mod transaction;
