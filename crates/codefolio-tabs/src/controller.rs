//! Tab/panel controller
//!
//! Wraps [`TabState`] with logging and a render step. Rendering is a pure
//! function of the state and of which content panels the page provides.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::state::{TabState, Transition};
use crate::tab::TabId;

/// Content panels that exist on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelRegistry {
    panels: BTreeSet<TabId>,
}

impl PanelRegistry {
    pub fn new(panels: impl IntoIterator<Item = TabId>) -> Self {
        Self {
            panels: panels.into_iter().collect(),
        }
    }

    pub fn contains(&self, id: TabId) -> bool {
        self.panels.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = TabId> + '_ {
        self.panels.iter().copied()
    }
}

impl Default for PanelRegistry {
    fn default() -> Self {
        Self::new(TabId::ALL)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabEntryView {
    pub id: TabId,
    pub icon: &'static str,
    pub file_name: &'static str,
    pub class_name: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelView {
    /// DOM id, `<tab>-content`
    pub id: String,
    pub tab: TabId,
    pub active: bool,
}

/// Everything the page needs to paint the tab bar and the content area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabsView {
    pub tab_bar: Vec<TabEntryView>,
    pub panels: Vec<PanelView>,
    /// Panel currently shown, if the page provides one for the active tab
    pub visible_panel: Option<String>,
    pub active_tab: TabId,
}

pub struct TabController {
    state: TabState,
    panels: PanelRegistry,
}

impl TabController {
    pub fn new(panels: PanelRegistry) -> Self {
        Self {
            state: TabState::new(),
            panels,
        }
    }

    pub fn state(&self) -> &TabState {
        &self.state
    }

    pub fn active_tab(&self) -> TabId {
        self.state.active()
    }

    pub fn panels(&self) -> &PanelRegistry {
        &self.panels
    }

    /// Open a tab (or focus it if already open).
    pub fn open_tab(&mut self, id: TabId) -> Transition {
        let transition = self.state.open(id);
        tracing::debug!(tab = %id, open = self.state.len(), "Opened tab");
        transition
    }

    /// Open a tab by its string identifier. Unknown identifiers do nothing.
    pub fn open_tab_named(&mut self, name: &str) -> Option<Transition> {
        match name.parse::<TabId>() {
            Ok(id) => Some(self.open_tab(id)),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring open request");
                None
            }
        }
    }

    /// Close a tab. Closing the last open tab is refused.
    pub fn close_tab(&mut self, id: TabId) -> Transition {
        let transition = self.state.close(id);
        match transition {
            Transition::Applied => tracing::debug!(
                tab = %id,
                active = %self.state.active(),
                "Closed tab"
            ),
            Transition::Ignored(reason) => {
                tracing::debug!(tab = %id, ?reason, "Close ignored")
            }
        }
        transition
    }

    pub fn close_active_tab(&mut self) -> Transition {
        self.close_tab(self.state.active())
    }

    /// Activate an already open tab.
    pub fn switch_to_tab(&mut self, id: TabId) -> Transition {
        let transition = self.state.switch_to(id);
        if let Transition::Ignored(reason) = transition {
            tracing::debug!(tab = %id, ?reason, "Switch ignored");
        }
        transition
    }

    pub fn render(&self) -> TabsView {
        render(&self.state, &self.panels)
    }
}

impl Default for TabController {
    fn default() -> Self {
        Self::new(PanelRegistry::default())
    }
}

/// Pure projection of tab state onto the tab bar and content panels.
fn render(state: &TabState, panels: &PanelRegistry) -> TabsView {
    let active = state.active();

    let tab_bar = state
        .open_tabs()
        .iter()
        .map(|&id| {
            let meta = id.metadata();
            let is_active = id == active;
            TabEntryView {
                id,
                icon: meta.icon,
                file_name: meta.file_name,
                class_name: if is_active { "tab active" } else { "tab" },
                active: is_active,
            }
        })
        .collect();

    let panels_view = panels
        .iter()
        .map(|id| PanelView {
            id: id.panel_id(),
            tab: id,
            active: id == active,
        })
        .collect();

    let visible_panel = panels.contains(active).then(|| active.panel_id());

    TabsView {
        tab_bar,
        panels: panels_view,
        visible_panel,
        active_tab: active,
    }
}
