//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Command, PaletteConfig, Settings, Messages)
//! - `controllers/` - Orchestration (CommandPalette, RichTextEditor)
//! - `services/` - Edit operations, the script bridge and page loading
//! - `infrastructure/` - Platform detection and error types

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-exports for convenient external access
pub use controllers::dispatcher::RichTextEditor;
pub use controllers::palette::{CommandElement, CommandPalette, ToolbarListener};
pub use domain::{AppSettings, Appearance, Command, Message, PaletteConfig, Rgb};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::platform::detect_system_appearance;
pub use services::edit_ops::EditOperation;
pub use services::script_bridge::{ClosureBridge, RecordingBridge, ScriptBridge};
