//! Codefolio Command Palette
//!
//! An overlay list over a fixed set of commands:
//! - typing filters entries by case-insensitive substring
//! - Escape or an outside click closes it
//! - Tab / Shift+Tab stay trapped inside while it is shown

mod command;
mod palette;

pub use command::{default_commands, CommandAction, PaletteCommand};
pub use palette::{CommandPalette, PaletteEntryView, PaletteFocus, PaletteView};
