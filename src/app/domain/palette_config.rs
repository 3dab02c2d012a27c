use serde::{Deserialize, Serialize};

use super::color::Rgb;
use super::command::Command;

/// System light/dark appearance, used to fill in colors the host left unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    pub fn default_background(self) -> Rgb {
        match self {
            Self::Light => Rgb::new(0xff, 0xff, 0xff),
            Self::Dark => Rgb::new(0x1c, 0x1c, 0x1e),
        }
    }

    pub fn default_tint(self) -> Rgb {
        match self {
            Self::Light => Rgb::new(0x3c, 0x3c, 0x43),
            Self::Dark => Rgb::new(0xeb, 0xeb, 0xf5),
        }
    }
}

/// Presentation overrides for the accessory strip.
///
/// Read once when the strip is materialized; see
/// `RichTextEditor::input_accessory` in [`crate::app::controllers::dispatcher`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteConfig {
    #[serde(default)]
    pub background: Option<Rgb>,

    #[serde(default)]
    pub tint: Option<Rgb>,

    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default = "default_commands")]
    pub commands: Vec<Command>,
}

fn default_enabled() -> bool {
    true
}

fn default_commands() -> Vec<Command> {
    Command::DEFAULT_ORDER.to_vec()
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            background: None,
            tint: None,
            enabled: default_enabled(),
            commands: default_commands(),
        }
    }
}

impl PaletteConfig {
    /// Commands that appear more than once, in order of their second occurrence.
    pub fn duplicates(&self) -> Vec<Command> {
        let mut seen = Vec::with_capacity(self.commands.len());
        let mut dupes = Vec::new();
        for &command in &self.commands {
            if seen.contains(&command) {
                if !dupes.contains(&command) {
                    dupes.push(command);
                }
            } else {
                seen.push(command);
            }
        }
        dupes
    }

    pub fn resolve_style(&self, appearance: Appearance) -> PaletteStyle {
        PaletteStyle {
            background: self.background.unwrap_or_else(|| appearance.default_background()),
            tint: self.tint.unwrap_or_else(|| appearance.default_tint()),
        }
    }
}

/// Concrete colors frozen into a materialized palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteStyle {
    pub background: Rgb,
    pub tint: Rgb,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PaletteConfig::default();
        assert!(config.enabled);
        assert_eq!(config.background, None);
        assert_eq!(config.tint, None);
        assert_eq!(config.commands, Command::DEFAULT_ORDER.to_vec());
        assert!(config.duplicates().is_empty());
    }

    #[test]
    fn test_duplicates_reported_once() {
        let config = PaletteConfig {
            commands: vec![Command::Bold, Command::Undo, Command::Bold, Command::Bold],
            ..Default::default()
        };
        assert_eq!(config.duplicates(), vec![Command::Bold]);
    }

    #[test]
    fn test_resolve_style_prefers_overrides() {
        let config = PaletteConfig {
            tint: Some(Rgb::new(1, 2, 3)),
            ..Default::default()
        };
        let style = config.resolve_style(Appearance::Dark);
        assert_eq!(style.tint, Rgb::new(1, 2, 3));
        assert_eq!(style.background, Appearance::Dark.default_background());

        let light = PaletteConfig::default().resolve_style(Appearance::Light);
        assert_eq!(light.background, Rgb::new(0xff, 0xff, 0xff));
        assert_ne!(light.tint, Appearance::Dark.default_tint());
    }

    #[test]
    fn test_partial_config() {
        let json = r##"{"tint": "#112233"}"##;
        let config: PaletteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.tint, Some(Rgb::new(0x11, 0x22, 0x33)));
        assert!(config.enabled);
        assert_eq!(config.commands.len(), 10);
    }

    #[test]
    fn test_command_order_preserved() {
        let json = r#"{"commands": ["Redo", "Bold", "Clear"]}"#;
        let config: PaletteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.commands, vec![Command::Redo, Command::Bold, Command::Clear]);
    }
}
