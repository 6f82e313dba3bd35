//! Palette overlay state

use serde::Serialize;

use crate::command::{CommandAction, PaletteCommand};

/// Which element inside the palette holds keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum PaletteFocus {
    Input,
    Entry(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteEntryView {
    pub label: String,
    pub hint: Option<String>,
    pub visible: bool,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteView {
    pub class_name: &'static str,
    pub shown: bool,
    pub query: String,
    pub entries: Vec<PaletteEntryView>,
}

pub struct CommandPalette {
    commands: Vec<PaletteCommand>,
    visible: Vec<bool>,
    query: String,
    shown: bool,
    focus: Option<PaletteFocus>,
}

impl CommandPalette {
    pub fn new(commands: Vec<PaletteCommand>) -> Self {
        let visible = vec![true; commands.len()];
        Self {
            commands,
            visible,
            query: String::new(),
            shown: false,
            focus: None,
        }
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn focus(&self) -> Option<PaletteFocus> {
        self.focus
    }

    pub fn commands(&self) -> &[PaletteCommand] {
        &self.commands
    }

    /// Show the overlay with focus in the input.
    pub fn open(&mut self) {
        self.shown = true;
        self.focus = Some(PaletteFocus::Input);
        tracing::debug!("Opened command palette");
    }

    /// Hide the overlay and clear the query.
    pub fn close(&mut self) {
        if self.shown {
            tracing::debug!("Closed command palette");
        }
        self.shown = false;
        self.focus = None;
        self.set_query("");
    }

    /// Filter entries against `query`.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        for (visible, command) in self.visible.iter_mut().zip(&self.commands) {
            *visible = command.matches(query);
        }

        if let Some(PaletteFocus::Entry(index)) = self.focus {
            if !self.visible[index] {
                self.focus = Some(PaletteFocus::Input);
            }
        }
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        self.visible
            .iter()
            .enumerate()
            .filter(|(_, visible)| **visible)
            .map(|(i, _)| i)
            .collect()
    }

    /// Move focus for a Tab (or Shift+Tab) press, wrapping at both ends.
    ///
    /// Returns the new focus, or `None` when the palette is hidden and the
    /// key should keep its normal meaning.
    pub fn cycle_focus(&mut self, backwards: bool) -> Option<PaletteFocus> {
        if !self.shown {
            return None;
        }

        let mut ring = vec![PaletteFocus::Input];
        ring.extend(self.visible_indices().into_iter().map(PaletteFocus::Entry));

        let current = self
            .focus
            .and_then(|focus| ring.iter().position(|f| *f == focus))
            .unwrap_or(0);

        let next = if backwards {
            (current + ring.len() - 1) % ring.len()
        } else {
            (current + 1) % ring.len()
        };

        self.focus = Some(ring[next]);
        self.focus
    }

    /// Run the entry at `index` if it is visible, closing the palette.
    pub fn execute(&mut self, index: usize) -> Option<CommandAction> {
        if !self.visible.get(index).copied().unwrap_or(false) {
            tracing::debug!(index, "Ignoring palette selection");
            return None;
        }

        let action = self.commands[index].action;
        tracing::info!(command = %self.commands[index].label, "Running palette command");
        self.close();
        Some(action)
    }

    /// Enter: run the focused entry, or the first visible one from the input.
    pub fn execute_focused(&mut self) -> Option<CommandAction> {
        if !self.shown {
            return None;
        }

        match self.focus {
            Some(PaletteFocus::Entry(index)) => self.execute(index),
            _ => {
                let first = self.visible_indices().first().copied()?;
                self.execute(first)
            }
        }
    }

    pub fn view(&self) -> PaletteView {
        let entries = self
            .commands
            .iter()
            .zip(&self.visible)
            .enumerate()
            .map(|(i, (command, visible))| PaletteEntryView {
                label: command.label.clone(),
                hint: command.hint.clone(),
                visible: *visible,
                focused: self.focus == Some(PaletteFocus::Entry(i)),
            })
            .collect();

        PaletteView {
            class_name: if self.shown {
                "command-palette show"
            } else {
                "command-palette"
            },
            shown: self.shown,
            query: self.query.clone(),
            entries,
        }
    }
}

impl Default for CommandPalette {
    fn default() -> Self {
        Self::new(crate::command::default_commands())
    }
}
