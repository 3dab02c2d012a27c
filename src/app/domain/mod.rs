//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Toolbar commands and their icons
//! - Palette configuration and colors
//! - Application settings
//! - Message types for the event system

pub mod color;
pub mod command;
pub mod messages;
pub mod palette_config;
pub mod settings;

pub use color::Rgb;
pub use command::{Command, Icon};
pub use messages::Message;
pub use palette_config::{Appearance, PaletteConfig, PaletteStyle};
pub use settings::{AppSettings, ThemeMode};
