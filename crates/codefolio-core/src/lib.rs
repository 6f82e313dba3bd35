//! Codefolio Core
//!
//! State and event handling for the editor-styled portfolio page.
//! Rust owns all state; the page forwards input events and paints the
//! [`WorkbenchView`] it gets back.

mod analytics;
mod config;
mod contact;
mod effects;
mod error;
mod event;
mod explorer;
mod keymap;
mod scheduler;
mod status;
mod terminal;
mod theme;
mod view;
mod workbench;

pub use analytics::{Analytics, AnalyticsEvent};
pub use config::{Config, FolderSpec, OwnerProfile, SocialLink};
pub use contact::{ContactField, ContactForm, ContactView, SendButtonView, SendPhase};
pub use effects::{LinkTarget, MatrixGlyph, MatrixRain};
pub use error::CoreError;
pub use event::{ClickTarget, EventOutcome, HostEffect, UiEvent};
pub use explorer::{Explorer, ExplorerView, FileEntryView, FolderView, Sidebar, SidebarView};
pub use keymap::{KeyPress, KonamiDetector, Shortcut, KONAMI_CODE};
pub use scheduler::{Scheduler, TimerId};
pub use status::{StatusBar, StatusBarView};
pub use terminal::{MessageKind, Terminal, TerminalLineView, TerminalView};
pub use theme::{Theme, ThemeView, THEME_SETTING_KEY};
pub use view::WorkbenchView;
pub use workbench::Workbench;

// Re-export component crates
pub use codefolio_palette::{
    CommandAction, CommandPalette, PaletteCommand, PaletteEntryView, PaletteFocus, PaletteView,
};
pub use codefolio_storage::{Database, StorageError};
pub use codefolio_tabs::{
    IgnoreReason, PanelRegistry, TabController, TabError, TabId, TabState, TabsView, Transition,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
///
/// Logs go to stderr; stdout is left to the host.
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
