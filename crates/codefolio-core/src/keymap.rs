//! Keyboard shortcuts and the konami sequence

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A keydown as reported by the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPress {
    /// `KeyboardEvent.key`
    pub key: String,
    /// Legacy `KeyboardEvent.keyCode`
    #[serde(default)]
    pub key_code: u32,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub meta: bool,
    #[serde(default)]
    pub shift: bool,
}

impl KeyPress {
    pub fn new(key: impl Into<String>, key_code: u32) -> Self {
        Self {
            key: key.into(),
            key_code,
            ..Self::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shortcut {
    OpenPalette,
    CloseActiveTab,
    ToggleTheme,
}

impl Shortcut {
    /// Ctrl or Cmd combined with `p`, Shift+`P`, `w` or `t`.
    pub fn from_key(press: &KeyPress) -> Option<Self> {
        if !(press.ctrl || press.meta) {
            return None;
        }

        match press.key.as_str() {
            "p" => Some(Shortcut::OpenPalette),
            "P" if press.shift => Some(Shortcut::OpenPalette),
            "w" => Some(Shortcut::CloseActiveTab),
            "t" => Some(Shortcut::ToggleTheme),
            _ => None,
        }
    }
}

/// ↑ ↑ ↓ ↓ ← → ← → B A
pub const KONAMI_CODE: [u32; 10] = [38, 38, 40, 40, 37, 39, 37, 39, 66, 65];

/// Remembers the most recent key codes and spots the konami sequence.
#[derive(Debug, Default)]
pub struct KonamiDetector {
    recent: VecDeque<u32>,
}

impl KonamiDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key code; true when it completes the sequence.
    pub fn push(&mut self, key_code: u32) -> bool {
        self.recent.push_back(key_code);
        while self.recent.len() > KONAMI_CODE.len() {
            self.recent.pop_front();
        }
        self.recent.iter().eq(KONAMI_CODE.iter())
    }
}
