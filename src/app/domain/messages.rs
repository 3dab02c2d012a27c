use super::command::Command;

/// All messages that can be sent through the FLTK channel.
/// Menu callbacks send one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // File
    OpenPage,
    Quit,

    // Toolbar
    Format(Command),
    ToggleToolbar,
    ReloadToolbar,

    // View
    ToggleDarkMode,
    ClearConsole,
}
