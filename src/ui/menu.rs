use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::command::Command;
use crate::app::domain::messages::Message;
use crate::app::domain::palette_config::Appearance;

fn format_shortcut(command: Command) -> Shortcut {
    match command {
        Command::Bold => Shortcut::Ctrl | 'b',
        Command::Italic => Shortcut::Ctrl | 'i',
        Command::AlignLeft => Shortcut::Ctrl | 'l',
        Command::AlignCenter => Shortcut::Ctrl | 'e',
        Command::AlignRight => Shortcut::Ctrl | 'r',
        Command::Indent => Shortcut::Ctrl | ']',
        Command::Outdent => Shortcut::Ctrl | '[',
        Command::Clear => Shortcut::Ctrl | '\\',
        Command::Undo => Shortcut::Ctrl | 'z',
        Command::Redo => Shortcut::Ctrl | Shortcut::Shift | 'z',
    }
}

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, toolbar_enabled: bool, appearance: Appearance) {
    let s = sender;

    // File
    menu.add("File/Open Page...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::OpenPage) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Quit) });

    // Format: same notifications the toolbar sends
    for command in Command::ALL {
        let path = format!("Format/{}", command.label());
        menu.add(&path, format_shortcut(command), MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Format(command)) });
    }

    // View
    let tb_flag = if toolbar_enabled { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Show Toolbar", Shortcut::None, tb_flag, { let s = *s; move |_| s.send(Message::ToggleToolbar) });
    menu.add("View/Reload Toolbar Settings", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ReloadToolbar) });
    let dm_flag = if appearance == Appearance::Dark { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Toggle Dark Mode", Shortcut::None, dm_flag, { let s = *s; move |_| s.send(Message::ToggleDarkMode) });
    menu.add("View/Clear Console", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ClearConsole) });
}

/// Bring the View toggles in line with state changed outside the menu.
pub fn sync_view_toggles(menu: &mut MenuBar, toolbar_enabled: bool, appearance: Appearance) {
    let toggles = [
        ("View/Show Toolbar", toolbar_enabled),
        ("View/Toggle Dark Mode", appearance == Appearance::Dark),
    ];
    for (path, on) in toggles {
        let Some(mut item) = menu.find_item(path) else {
            continue;
        };
        if on { item.set() } else { item.clear() }
    }
}
