//! Input events from the page and what the page should do in response

use codefolio_tabs::TabId;
use serde::{Deserialize, Serialize};

use crate::contact::ContactField;
use crate::keymap::KeyPress;

/// Where a plain click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickTarget {
    /// Inside the editor content area
    ContentArea,
    /// Inside the command palette overlay
    Palette,
    Elsewhere,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    /// A file entry in the explorer
    FileClick { tab: TabId },
    TabClick { tab: TabId },
    TabClose { tab: TabId },
    FolderToggle { folder: String },
    ThemeToggle,
    SidebarToggle,
    /// An element carrying `command-palette-trigger`
    PaletteTrigger,
    PaletteInput { query: String },
    PaletteSelect { index: usize },
    Click { target: ClickTarget },
    Link {
        href: String,
        #[serde(default)]
        text: String,
        #[serde(default)]
        social: bool,
    },
    KeyDown(KeyPress),
    MouseDown,
    Resize { width: u32 },
    ContactInput {
        field: ContactField,
        value: String,
    },
    ContactSubmit,
}

impl UiEvent {
    /// Clicks that land outside the palette overlay.
    pub fn is_click_outside_palette(&self) -> bool {
        match self {
            UiEvent::FileClick { .. }
            | UiEvent::TabClick { .. }
            | UiEvent::TabClose { .. }
            | UiEvent::FolderToggle { .. }
            | UiEvent::ThemeToggle
            | UiEvent::SidebarToggle
            | UiEvent::Link { .. } => true,
            UiEvent::Click { target } => *target != ClickTarget::Palette,
            _ => false,
        }
    }
}

/// Work only the page can do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "target", rename_all = "snake_case")]
pub enum HostEffect {
    FocusPaletteInput,
    FocusPaletteEntry(usize),
    /// Smooth-scroll the element with this id into view
    ScrollIntoView(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventOutcome {
    /// Suppress the browser's default action for the event
    pub prevent_default: bool,
    pub effects: Vec<HostEffect>,
}

impl EventOutcome {
    pub fn prevent_default(&mut self) {
        self.prevent_default = true;
    }
}
