//! File explorer tree and the mobile sidebar drawer

use codefolio_tabs::TabId;
use serde::Serialize;

use crate::config::FolderSpec;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntryView {
    pub tab: TabId,
    pub name: &'static str,
    pub icon: &'static str,
    pub class_name: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderView {
    pub id: String,
    pub label: String,
    pub class_name: &'static str,
    pub collapsed: bool,
    /// Rotation applied to the folder chevron, in degrees
    pub icon_rotation: i32,
    pub files: Vec<FileEntryView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplorerView {
    pub folders: Vec<FolderView>,
}

struct Folder {
    spec: FolderSpec,
    collapsed: bool,
}

pub struct Explorer {
    folders: Vec<Folder>,
}

impl Explorer {
    pub fn new(specs: Vec<FolderSpec>) -> Self {
        Self {
            folders: specs
                .into_iter()
                .map(|spec| Folder {
                    spec,
                    collapsed: false,
                })
                .collect(),
        }
    }

    /// Collapse or expand a folder. Unknown ids are ignored.
    pub fn toggle_folder(&mut self, folder_id: &str) -> bool {
        let Some(folder) = self.folders.iter_mut().find(|f| f.spec.id == folder_id) else {
            tracing::debug!(folder = %folder_id, "Unknown folder");
            return false;
        };

        folder.collapsed = !folder.collapsed;
        tracing::debug!(folder = %folder_id, collapsed = folder.collapsed, "Toggled folder");
        true
    }

    pub fn is_collapsed(&self, folder_id: &str) -> Option<bool> {
        self.folders
            .iter()
            .find(|f| f.spec.id == folder_id)
            .map(|f| f.collapsed)
    }

    /// Collapsed folders list no files. The entry for `active` is highlighted.
    pub fn view(&self, active: TabId) -> ExplorerView {
        let folders = self
            .folders
            .iter()
            .map(|folder| {
                let files = if folder.collapsed {
                    Vec::new()
                } else {
                    folder
                        .spec
                        .files
                        .iter()
                        .map(|&tab| {
                            let meta = tab.metadata();
                            let is_active = tab == active;
                            FileEntryView {
                                tab,
                                name: meta.file_name,
                                icon: meta.icon,
                                class_name: if is_active {
                                    "file-item active"
                                } else {
                                    "file-item"
                                },
                                active: is_active,
                            }
                        })
                        .collect()
                };

                FolderView {
                    id: folder.spec.id.clone(),
                    label: folder.spec.label.clone(),
                    class_name: if folder.collapsed {
                        "folder-header collapsed"
                    } else {
                        "folder-header"
                    },
                    collapsed: folder.collapsed,
                    icon_rotation: if folder.collapsed { -90 } else { 0 },
                    files,
                }
            })
            .collect();

        ExplorerView { folders }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarView {
    pub class_name: &'static str,
    pub shown: bool,
}

/// The sidebar as an off-canvas drawer on narrow viewports.
pub struct Sidebar {
    breakpoint: u32,
    viewport_width: Option<u32>,
    shown: bool,
}

impl Sidebar {
    pub fn new(breakpoint: u32) -> Self {
        Self {
            breakpoint,
            viewport_width: None,
            shown: false,
        }
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn is_narrow(&self) -> bool {
        self.viewport_width
            .map(|width| width <= self.breakpoint)
            .unwrap_or(false)
    }

    pub fn toggle(&mut self) {
        self.shown = !self.shown;
    }

    /// A click in the content area closes the drawer on narrow viewports.
    pub fn content_clicked(&mut self) {
        if self.is_narrow() {
            self.shown = false;
        }
    }

    pub fn resized(&mut self, width: u32) {
        self.viewport_width = Some(width);
        if width > self.breakpoint {
            self.shown = false;
        }
    }

    pub fn view(&self) -> SidebarView {
        SidebarView {
            class_name: if self.shown { "sidebar show" } else { "sidebar" },
            shown: self.shown,
        }
    }
}
