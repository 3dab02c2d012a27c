use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::app::controllers::palette::{CommandPalette, ToolbarListener};
use crate::app::domain::palette_config::{Appearance, PaletteConfig};
use crate::app::infrastructure::error::Result;
use crate::app::services::edit_ops::EditOperation;
use crate::app::services::script_bridge::ScriptBridge;

/// Hosts the rich-text document and owns its accessory strip.
///
/// The strip only holds a weak reference back to the editor, so dropping
/// the last `Rc` to the editor is enough to tear everything down.
pub struct RichTextEditor {
    bridge: Box<dyn ScriptBridge>,
    config: PaletteConfig,
    appearance: Appearance,
    accessory: Option<Rc<CommandPalette>>,
    self_ref: Weak<RefCell<RichTextEditor>>,
    failed_operations: usize,
}

impl RichTextEditor {
    pub fn new(
        bridge: Box<dyn ScriptBridge>,
        config: PaletteConfig,
        appearance: Appearance,
    ) -> Rc<RefCell<Self>> {
        Rc::new_cyclic(|self_ref| {
            RefCell::new(Self {
                bridge,
                config,
                appearance,
                accessory: None,
                self_ref: self_ref.clone(),
                failed_operations: 0,
            })
        })
    }

    pub fn config(&self) -> &PaletteConfig {
        &self.config
    }

    /// Changes here reach the strip only after [`Self::invalidate_accessory`].
    pub fn config_mut(&mut self) -> &mut PaletteConfig {
        &mut self.config
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    pub fn set_appearance(&mut self, appearance: Appearance) {
        self.appearance = appearance;
    }

    /// The accessory strip, built from the current configuration on first
    /// request and cached afterwards. Returns `None` without building
    /// anything while the configuration is disabled and nothing is cached.
    pub fn input_accessory(&mut self) -> Option<Rc<CommandPalette>> {
        if self.config.enabled && self.accessory.is_none() {
            let palette = CommandPalette::new(&self.config, self.appearance);
            let listener = self.self_ref.clone();
            let listener: Weak<RefCell<dyn ToolbarListener>> = listener;
            palette.set_listener(listener);
            tracing::info!(items = palette.item_count(), "materialized toolbar");
            self.accessory = Some(Rc::new(palette));
        }
        self.accessory.clone()
    }

    /// Replace the cached strip. `None` forces a rebuild on the next
    /// [`Self::input_accessory`] call; a supplied palette is used as is.
    pub fn set_input_accessory(&mut self, accessory: Option<Rc<CommandPalette>>) {
        self.accessory = accessory;
    }

    pub fn invalidate_accessory(&mut self) {
        if self.accessory.take().is_some() {
            tracing::debug!("toolbar invalidated");
        }
    }

    pub fn is_accessory_materialized(&self) -> bool {
        self.accessory.is_some()
    }

    /// Run one edit inside the hosted document.
    pub fn perform(&mut self, op: EditOperation) -> Result<()> {
        tracing::debug!(?op, "performing edit");
        self.bridge.evaluate(&op.script())
    }

    /// Number of edits the bridge rejected since creation.
    pub fn failed_operations(&self) -> usize {
        self.failed_operations
    }

    fn request(&mut self, op: EditOperation) {
        if let Err(e) = self.perform(op) {
            self.failed_operations += 1;
            tracing::warn!(?op, "edit failed: {e}");
        }
    }
}

impl ToolbarListener for RichTextEditor {
    fn on_bold_press(&mut self) {
        self.request(EditOperation::ToggleBold);
    }

    fn on_italic_press(&mut self) {
        self.request(EditOperation::ToggleItalic);
    }

    fn on_text_align_left(&mut self) {
        self.request(EditOperation::JustifyLeft);
    }

    fn on_text_align_center(&mut self) {
        self.request(EditOperation::JustifyCenter);
    }

    fn on_text_align_right(&mut self) {
        self.request(EditOperation::JustifyRight);
    }

    fn on_indent_press(&mut self) {
        self.request(EditOperation::Indent);
    }

    fn on_outdent_press(&mut self) {
        self.request(EditOperation::Outdent);
    }

    fn on_clear_press(&mut self) {
        self.request(EditOperation::RemoveFormat);
    }

    fn on_undo_press(&mut self) {
        self.request(EditOperation::Undo);
    }

    fn on_redo_press(&mut self) {
        self.request(EditOperation::Redo);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::color::Rgb;
    use crate::app::domain::command::Command;
    use crate::app::infrastructure::error::AppError;
    use crate::app::services::script_bridge::{ClosureBridge, RecordingBridge};

    fn editor_with(config: PaletteConfig) -> (Rc<RefCell<RichTextEditor>>, RecordingBridge) {
        let bridge = RecordingBridge::new();
        let editor = RichTextEditor::new(Box::new(bridge.clone()), config, Appearance::Light);
        (editor, bridge)
    }

    #[test]
    fn test_disabled_toolbar_is_never_built() {
        let (editor, _) = editor_with(PaletteConfig {
            enabled: false,
            ..Default::default()
        });
        assert!(editor.borrow_mut().input_accessory().is_none());
        assert!(!editor.borrow().is_accessory_materialized());
    }

    #[test]
    fn test_accessory_is_cached() {
        let (editor, _) = editor_with(PaletteConfig::default());
        assert!(!editor.borrow().is_accessory_materialized());

        let first = editor.borrow_mut().input_accessory().unwrap();
        let second = editor.borrow_mut().input_accessory().unwrap();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(first.commands(), &Command::DEFAULT_ORDER);
    }

    #[test]
    fn test_config_is_frozen_until_invalidated() {
        let (editor, _) = editor_with(PaletteConfig::default());
        let before = editor.borrow_mut().input_accessory().unwrap();

        {
            let mut ed = editor.borrow_mut();
            let config = ed.config_mut();
            config.tint = Some(Rgb::new(1, 2, 3));
            config.commands = vec![Command::Undo];
            config.enabled = false;
        }
        let cached = editor.borrow_mut().input_accessory().unwrap();
        assert!(Rc::ptr_eq(&before, &cached));
        assert_eq!(cached.item_count(), 10);

        // Disabled at rebuild time: nothing is shown
        editor.borrow_mut().invalidate_accessory();
        assert!(editor.borrow_mut().input_accessory().is_none());

        editor.borrow_mut().config_mut().enabled = true;
        let rebuilt = editor.borrow_mut().input_accessory().unwrap();
        assert!(!Rc::ptr_eq(&before, &rebuilt));
        assert_eq!(rebuilt.commands(), &[Command::Undo]);
        assert_eq!(rebuilt.style().tint, Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_set_input_accessory() {
        let (editor, bridge) = editor_with(PaletteConfig::default());
        let first = editor.borrow_mut().input_accessory().unwrap();

        editor.borrow_mut().set_input_accessory(None);
        let rebuilt = editor.borrow_mut().input_accessory().unwrap();
        assert!(!Rc::ptr_eq(&first, &rebuilt));

        // A caller-supplied palette has no listener until the caller sets one
        let custom = Rc::new(CommandPalette::new(
            &PaletteConfig {
                commands: vec![Command::Bold],
                ..Default::default()
            },
            Appearance::Dark,
        ));
        editor.borrow_mut().set_input_accessory(Some(custom.clone()));
        let current = editor.borrow_mut().input_accessory().unwrap();
        assert!(Rc::ptr_eq(&custom, &current));
        current.activate(0);
        assert!(bridge.scripts().is_empty());
    }

    #[test]
    fn test_each_command_performs_one_edit() {
        let (editor, bridge) = editor_with(PaletteConfig {
            commands: Command::ALL.to_vec(),
            ..Default::default()
        });
        let palette = editor.borrow_mut().input_accessory().unwrap();
        for index in 0..palette.item_count() {
            palette.activate(index);
        }

        let expected: Vec<String> = [
            "bold",
            "italic",
            "justifyLeft",
            "justifyCenter",
            "justifyRight",
            "indent",
            "outdent",
            "removeFormat",
            "undo",
            "redo",
        ]
        .iter()
        .map(|name| format!("document.execCommand('{name}', false, null);"))
        .collect();
        assert_eq!(bridge.scripts(), expected);
    }

    #[test]
    fn test_dropped_editor_makes_activation_a_no_op() {
        let (editor, bridge) = editor_with(PaletteConfig::default());
        let palette = editor.borrow_mut().input_accessory().unwrap();
        assert!(palette.has_listener());

        drop(editor);
        assert!(!palette.has_listener());
        palette.activate(0);
        assert!(bridge.scripts().is_empty());
    }

    #[test]
    fn test_activation_while_editor_borrowed_is_dropped() {
        let (editor, bridge) = editor_with(PaletteConfig::default());
        let palette = editor.borrow_mut().input_accessory().unwrap();

        let guard = editor.borrow();
        palette.activate(0);
        drop(guard);
        assert!(bridge.scripts().is_empty());

        palette.activate(0);
        assert_eq!(bridge.scripts().len(), 1);
    }

    #[test]
    fn test_bridge_failure_is_counted() {
        let bridge =
            ClosureBridge::new(|_: &str| Err(AppError::Script("page not loaded".to_string())));
        let editor =
            RichTextEditor::new(Box::new(bridge), PaletteConfig::default(), Appearance::Dark);
        let palette = editor.borrow_mut().input_accessory().unwrap();

        palette.activate(0);
        palette.activate(1);
        assert_eq!(editor.borrow().failed_operations(), 2);
        assert!(matches!(
            editor.borrow_mut().perform(EditOperation::Undo),
            Err(AppError::Script(_))
        ));
    }

    #[test]
    fn test_appearance_applies_on_rebuild() {
        let (editor, _) = editor_with(PaletteConfig::default());
        let light = editor.borrow_mut().input_accessory().unwrap();
        assert_eq!(light.style().background, Appearance::Light.default_background());

        editor.borrow_mut().set_appearance(Appearance::Dark);
        editor.borrow_mut().invalidate_accessory();
        let dark = editor.borrow_mut().input_accessory().unwrap();
        assert_eq!(dark.style().background, Appearance::Dark.default_background());
    }
}
