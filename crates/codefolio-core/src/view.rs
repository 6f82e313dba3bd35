//! The full view model handed to the page after every change

use codefolio_palette::PaletteView;
use codefolio_tabs::TabsView;
use serde::Serialize;

use crate::contact::ContactView;
use crate::effects::MatrixRain;
use crate::explorer::{ExplorerView, SidebarView};
use crate::status::StatusBarView;
use crate::terminal::TerminalView;
use crate::theme::ThemeView;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkbenchView {
    /// Classes on `<body>`: the theme class, plus `keyboard-focus` while
    /// navigating with Tab
    pub body_classes: Vec<&'static str>,
    pub theme: ThemeView,
    pub tabs: TabsView,
    /// Panels currently carrying `fade-in`
    pub fading_panels: Vec<String>,
    pub explorer: ExplorerView,
    pub sidebar: SidebarView,
    pub palette: PaletteView,
    pub terminal: TerminalView,
    pub contact: ContactView,
    pub status_bar: StatusBarView,
    /// Links currently carrying `loading`
    pub loading_links: Vec<String>,
    pub matrix: Option<MatrixRain>,
}
