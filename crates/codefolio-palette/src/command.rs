//! Palette commands

use codefolio_tabs::TabId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "tab", rename_all = "snake_case")]
pub enum CommandAction {
    /// Open a file in the editor
    OpenFile(TabId),
    ToggleTheme,
    CloseActiveTab,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteCommand {
    pub label: String,
    /// Keyboard shortcut shown next to the label
    pub hint: Option<String>,
    pub action: CommandAction,
}

impl PaletteCommand {
    pub fn new(label: impl Into<String>, action: CommandAction) -> Self {
        Self {
            label: label.into(),
            hint: None,
            action,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Case-insensitive substring match against the label.
    pub fn matches(&self, query: &str) -> bool {
        self.label.to_lowercase().contains(&query.to_lowercase())
    }
}

/// The entries listed when the palette opens.
pub fn default_commands() -> Vec<PaletteCommand> {
    let mut commands: Vec<PaletteCommand> = TabId::ALL
        .into_iter()
        .map(|id| {
            let label = format!("Open {}", id.metadata().file_name);
            PaletteCommand::new(label, CommandAction::OpenFile(id))
        })
        .collect();

    let toggle_theme = PaletteCommand::new("Toggle Theme", CommandAction::ToggleTheme);
    commands.push(toggle_theme.with_hint("Ctrl+T"));

    let close_editor = PaletteCommand::new("Close Editor", CommandAction::CloseActiveTab);
    commands.push(close_editor.with_hint("Ctrl+W"));

    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_is_case_insensitive() {
        let cmd = PaletteCommand::new("Open README.md", CommandAction::OpenFile(TabId::About));
        assert!(cmd.matches("readme"));
        assert!(cmd.matches("OPEN"));
        assert!(cmd.matches(""));
        assert!(!cmd.matches("skills"));
    }

    #[test]
    fn test_default_commands() {
        let commands = default_commands();
        assert_eq!(commands.len(), 7);
        assert_eq!(commands[1].label, "Open skills.json");
        assert_eq!(commands[5].action, CommandAction::ToggleTheme);
        assert_eq!(commands[6].hint.as_deref(), Some("Ctrl+W"));
    }

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_value(CommandAction::OpenFile(TabId::Projects)).unwrap();
        assert_eq!(json["type"], "open_file");
        assert_eq!(json["tab"], "projects");

        let action: CommandAction = serde_json::from_str(r#"{"type":"toggle_theme"}"#).unwrap();
        assert_eq!(action, CommandAction::ToggleTheme);
    }
}
