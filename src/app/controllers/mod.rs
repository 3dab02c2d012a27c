//! Controllers layer - orchestration and coordination.
//!
//! - The accessory strip model and its listener contract
//! - The editor host that owns the strip and dispatches edits

pub mod dispatcher;
pub mod palette;
