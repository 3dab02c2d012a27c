use std::cell::RefCell;
use std::rc::Weak;

use crate::app::domain::color::Rgb;
use crate::app::domain::command::{Command, Icon};
use crate::app::domain::palette_config::{Appearance, PaletteConfig, PaletteStyle};

pub const ELEMENT_WIDTH: i32 = 40;
pub const ELEMENT_HEIGHT: i32 = 50;
/// Horizontal gap before the first and after the last element.
pub const STRIP_INSET: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

pub const ELEMENT_SIZE: Size = Size {
    w: ELEMENT_WIDTH,
    h: ELEMENT_HEIGHT,
};

/// A slot rectangle in strip content coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// Receives toolbar activations, one method per command.
pub trait ToolbarListener {
    fn on_bold_press(&mut self);
    fn on_italic_press(&mut self);
    fn on_text_align_left(&mut self);
    fn on_text_align_center(&mut self);
    fn on_text_align_right(&mut self);
    fn on_indent_press(&mut self);
    fn on_outdent_press(&mut self);
    fn on_clear_press(&mut self);
    fn on_undo_press(&mut self);
    fn on_redo_press(&mut self);
}

/// Route `command` to the matching listener method.
pub fn notify(listener: &mut dyn ToolbarListener, command: Command) {
    match command {
        Command::Bold => listener.on_bold_press(),
        Command::Italic => listener.on_italic_press(),
        Command::AlignLeft => listener.on_text_align_left(),
        Command::AlignCenter => listener.on_text_align_center(),
        Command::AlignRight => listener.on_text_align_right(),
        Command::Indent => listener.on_indent_press(),
        Command::Outdent => listener.on_outdent_press(),
        Command::Clear => listener.on_clear_press(),
        Command::Undo => listener.on_undo_press(),
        Command::Redo => listener.on_redo_press(),
    }
}

/// Visual state of one recyclable slot. The background is always
/// transparent; the strip paints behind it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandElement {
    icon: Option<Icon>,
    tint: Option<Rgb>,
}

impl CommandElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites everything a previous bind left behind.
    pub fn configure(&mut self, icon: Icon, tint: Rgb) {
        self.icon = Some(icon);
        self.tint = Some(tint);
    }

    pub fn reset(&mut self) {
        self.icon = None;
        self.tint = None;
    }

    pub fn icon(&self) -> Option<Icon> {
        self.icon
    }

    pub fn tint(&self) -> Option<Rgb> {
        self.tint
    }

    pub fn size(&self) -> Size {
        ELEMENT_SIZE
    }
}

/// The accessory strip model: a frozen command sequence and style plus a
/// non-owning reference to whoever handles activations.
pub struct CommandPalette {
    commands: Vec<Command>,
    style: PaletteStyle,
    listener: RefCell<Option<Weak<RefCell<dyn ToolbarListener>>>>,
}

impl CommandPalette {
    pub fn new(config: &PaletteConfig, appearance: Appearance) -> Self {
        let dupes = config.duplicates();
        if !dupes.is_empty() {
            tracing::warn!(?dupes, "toolbar configuration lists commands more than once");
        }
        Self::with_style(config.commands.clone(), config.resolve_style(appearance))
    }

    pub fn with_style(commands: Vec<Command>, style: PaletteStyle) -> Self {
        Self {
            commands,
            style,
            listener: RefCell::new(None),
        }
    }

    pub fn set_listener(&self, listener: Weak<RefCell<dyn ToolbarListener>>) {
        *self.listener.borrow_mut() = Some(listener);
    }

    pub fn clear_listener(&self) {
        *self.listener.borrow_mut() = None;
    }

    /// True while a listener is set and still alive.
    pub fn has_listener(&self) -> bool {
        self.listener
            .borrow()
            .as_ref()
            .is_some_and(|weak| weak.strong_count() > 0)
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn style(&self) -> PaletteStyle {
        self.style
    }

    pub fn item_count(&self) -> usize {
        self.commands.len()
    }

    pub fn command_at(&self, index: usize) -> Option<Command> {
        self.commands.get(index).copied()
    }

    /// Bind the command at `index` into a recycled element.
    /// The element is reset first, so an out-of-range index leaves it empty.
    pub fn element_at(&self, index: usize, element: &mut CommandElement) -> Option<Command> {
        element.reset();
        let command = self.command_at(index)?;
        element.configure(command.icon(), self.style.tint);
        Some(command)
    }

    pub fn size_for_element(&self, _index: usize) -> Size {
        ELEMENT_SIZE
    }

    /// Notify the listener for the command at `index`. Dropped silently when
    /// there is no live listener or the index is out of range.
    pub fn activate(&self, index: usize) {
        let Some(command) = self.command_at(index) else {
            tracing::debug!(index, "activation outside the command list");
            return;
        };

        let listener = self.listener.borrow().as_ref().and_then(Weak::upgrade);
        let Some(listener) = listener else {
            tracing::debug!(?command, "no toolbar listener attached, dropping activation");
            return;
        };

        match listener.try_borrow_mut() {
            Ok(mut listener) => {
                tracing::debug!(?command, "toolbar activation");
                notify(&mut *listener, command);
            }
            Err(_) => tracing::warn!(?command, "toolbar listener busy, dropping activation"),
        }
    }

    pub fn content_width(&self) -> i32 {
        if self.commands.is_empty() {
            return 0;
        }
        STRIP_INSET * 2 + ELEMENT_WIDTH * self.commands.len() as i32
    }

    pub fn slot_rect(&self, index: usize) -> Option<SlotRect> {
        if index >= self.commands.len() {
            return None;
        }
        Some(SlotRect {
            x: STRIP_INSET + ELEMENT_WIDTH * index as i32,
            y: 0,
            w: ELEMENT_WIDTH,
            h: ELEMENT_HEIGHT,
        })
    }

    /// Which slot contains content x-coordinate `x`, if any.
    pub fn slot_at(&self, x: i32) -> Option<usize> {
        let offset = x - STRIP_INSET;
        if offset < 0 {
            return None;
        }
        let index = (offset / ELEMENT_WIDTH) as usize;
        (index < self.commands.len()).then_some(index)
    }
}
