//! HTTP API modules
//!
//! One module per resource, each exposing a `router()` in the same shape:
//! a nested path under `/api` with its handlers in `handler.rs`.

pub mod announcements;
pub mod auth;
pub mod donations;
pub mod events;
pub mod families;
pub mod health;
pub mod members;
pub mod settings;
pub mod users;
