//! Shared types for Meetcross
//!
//! Common types used by the server and any future clients: entity models,
//! API request/response DTOs and small utilities.

pub mod client;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
