//! # Citaflow Core
//!
//! Shared domain types for the citaflow booking front-end: the wire DTOs
//! consumed from the booking backend and the error taxonomy used across the
//! client and UI state crates.
//!
//! All authoritative state lives server-side; these types only describe the
//! JSON shapes the backend sends and accepts.

pub mod errors;
pub mod models;
