//! Services layer - operations against the hosted document.
//!
//! - Edit operations and their script text
//! - The script bridge into the page
//! - Page loading

pub mod edit_ops;
pub mod page;
pub mod script_bridge;
