use serde::{Deserialize, Serialize};

use super::color::Rgb;

/// A bundled toolbar icon. The SVG strokes with `currentColor`, which
/// [`Icon::tinted_svg`] replaces with a concrete color before rasterizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    pub name: &'static str,
    svg: &'static str,
}

impl Icon {
    const fn new(name: &'static str, svg: &'static str) -> Self {
        Self { name, svg }
    }

    pub fn svg(&self) -> &'static str {
        self.svg
    }

    pub fn tinted_svg(&self, tint: Rgb) -> String {
        self.svg.replace("currentColor", &tint.to_hex())
    }
}

/// One formatting action offered by the accessory strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    Bold,
    Italic,
    AlignLeft,
    AlignCenter,
    AlignRight,
    Indent,
    Outdent,
    Clear,
    Undo,
    Redo,
}

impl Command {
    pub const ALL: [Command; 10] = [
        Command::Bold,
        Command::Italic,
        Command::AlignLeft,
        Command::AlignCenter,
        Command::AlignRight,
        Command::Indent,
        Command::Outdent,
        Command::Clear,
        Command::Undo,
        Command::Redo,
    ];

    /// Left-to-right order used when no sequence is configured.
    pub const DEFAULT_ORDER: [Command; 10] = [
        Command::Bold,
        Command::Italic,
        Command::AlignRight,
        Command::AlignCenter,
        Command::AlignLeft,
        Command::Indent,
        Command::Outdent,
        Command::Clear,
        Command::Undo,
        Command::Redo,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Command::Bold => "Bold",
            Command::Italic => "Italic",
            Command::AlignLeft => "Left",
            Command::AlignCenter => "Center",
            Command::AlignRight => "Right",
            Command::Indent => "Indent",
            Command::Outdent => "Outdent",
            Command::Clear => "Clear",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Command::Bold => Icon::new("bold", include_str!("../../../assets/icons/bold.svg")),
            Command::Italic => {
                Icon::new("italic", include_str!("../../../assets/icons/italic.svg"))
            }
            Command::AlignLeft => {
                Icon::new("alignLeft", include_str!("../../../assets/icons/alignLeft.svg"))
            }
            Command::AlignCenter => {
                Icon::new("alignCenter", include_str!("../../../assets/icons/alignCenter.svg"))
            }
            Command::AlignRight => {
                Icon::new("alignRight", include_str!("../../../assets/icons/alignRight.svg"))
            }
            Command::Indent => {
                Icon::new("indent", include_str!("../../../assets/icons/indent.svg"))
            }
            Command::Outdent => {
                Icon::new("outdent", include_str!("../../../assets/icons/outdent.svg"))
            }
            Command::Clear => Icon::new("clear", include_str!("../../../assets/icons/clear.svg")),
            Command::Undo => Icon::new("undo", include_str!("../../../assets/icons/undo.svg")),
            Command::Redo => Icon::new("redo", include_str!("../../../assets/icons/redo.svg")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_command_has_label_and_icon() {
        for command in Command::ALL {
            assert!(!command.label().is_empty());
            let icon = command.icon();
            assert!(!icon.name.is_empty());
            assert!(icon.svg().contains("<svg"), "{:?} icon is not an SVG", command);
            assert_eq!(command.label(), command.label());
            assert_eq!(icon, command.icon());
        }
    }

    #[test]
    fn test_icons_are_distinct() {
        let names: HashSet<_> = Command::ALL.iter().map(|c| c.icon().name).collect();
        assert_eq!(names.len(), Command::ALL.len());
    }

    #[test]
    fn test_default_order() {
        assert_eq!(Command::DEFAULT_ORDER[2], Command::AlignRight);
        assert_eq!(Command::DEFAULT_ORDER[4], Command::AlignLeft);
        let unique: HashSet<_> = Command::DEFAULT_ORDER.iter().collect();
        assert_eq!(unique.len(), Command::ALL.len());
    }

    #[test]
    fn test_tinted_svg_replaces_current_color() {
        let svg = Command::Bold.icon().tinted_svg(Rgb::new(0xff, 0, 0));
        assert!(!svg.contains("currentColor"));
        assert!(svg.contains("#ff0000"));
    }

    #[test]
    fn test_command_serializes_by_name() {
        let json = serde_json::to_string(&Command::AlignCenter).unwrap();
        assert_eq!(json, "\"AlignCenter\"");
    }
}
