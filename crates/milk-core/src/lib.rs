//! # milk-core
//!
//! Core types and error types for CeialMilk.
//!
//! This crate provides the foundational types shared across all CeialMilk crates:
//! - Entity structs for every REST resource (farms, animals, milk production,
//!   reproductive events, batches, users)
//! - The authenticated `Identity` and its `Role`
//! - Domain enums (sex, health status, milk quality, theme)
//! - The `{data, message, timestamp}` response envelope used by the API
//! - Cross-cutting error types

pub mod entities;
pub mod envelope;
pub mod enums;
pub mod errors;
pub mod identity;

pub use entities::*;
pub use envelope::{ApiEnvelope, ApiErrorBody};
pub use enums::{HealthStatus, MilkQuality, Sex, Theme};
pub use errors::CoreError;
pub use identity::{Identity, Role};
