/// An edit requested against the hosted document.
///
/// Each variant maps to one `document.execCommand` call inside the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditOperation {
    ToggleBold,
    ToggleItalic,
    JustifyLeft,
    JustifyCenter,
    JustifyRight,
    Indent,
    Outdent,
    RemoveFormat,
    Undo,
    Redo,
}

impl EditOperation {
    /// Name understood by `document.execCommand`.
    pub fn exec_command_name(self) -> &'static str {
        match self {
            Self::ToggleBold => "bold",
            Self::ToggleItalic => "italic",
            Self::JustifyLeft => "justifyLeft",
            Self::JustifyCenter => "justifyCenter",
            Self::JustifyRight => "justifyRight",
            Self::Indent => "indent",
            Self::Outdent => "outdent",
            Self::RemoveFormat => "removeFormat",
            Self::Undo => "undo",
            Self::Redo => "redo",
        }
    }

    pub fn script(self) -> String {
        format!("document.execCommand('{}', false, null);", self.exec_command_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_text() {
        assert_eq!(
            EditOperation::ToggleBold.script(),
            "document.execCommand('bold', false, null);"
        );
        assert_eq!(
            EditOperation::RemoveFormat.script(),
            "document.execCommand('removeFormat', false, null);"
        );
    }

    #[test]
    fn test_command_names_are_distinct() {
        let ops = [
            EditOperation::ToggleBold,
            EditOperation::ToggleItalic,
            EditOperation::JustifyLeft,
            EditOperation::JustifyCenter,
            EditOperation::JustifyRight,
            EditOperation::Indent,
            EditOperation::Outdent,
            EditOperation::RemoveFormat,
            EditOperation::Undo,
            EditOperation::Redo,
        ];
        let names: std::collections::HashSet<_> =
            ops.iter().map(|op| op.exec_command_name()).collect();
        assert_eq!(names.len(), ops.len());
    }
}
