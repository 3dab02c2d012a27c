//! A rich-text editor host with a horizontally scrolling formatting toolbar.
//!
//! The toolbar ([`CommandPalette`]) forwards each tap to a
//! [`ToolbarListener`]; [`RichTextEditor`] is that listener and turns every
//! notification into one [`EditOperation`] run through a [`ScriptBridge`].

pub mod app;
pub mod ui;

pub use app::{
    AppError, Appearance, Command, CommandPalette, EditOperation, PaletteConfig, RichTextEditor,
    ScriptBridge, ToolbarListener,
};
