//! Infrastructure layer - external integrations and utilities.
//!
//! - Platform-specific appearance detection
//! - Error types

pub mod error;
pub mod platform;
