//! Tab State Machine
//!
//! States are `OpenTabSet × ActiveTab`, starting at `({about}, about)`.
//! Two invariants hold after every transition:
//! - the open set is never empty
//! - the active tab is a member of the open set

use serde::Serialize;

use crate::tab::TabId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// Closing would leave no tab open
    LastOpenTab,
    /// The tab is not in the open set
    NotOpen,
}

/// Outcome of a transition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    Applied,
    Ignored(IgnoreReason),
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabState {
    /// Open tabs in insertion order (display order of the tab bar)
    open: Vec<TabId>,
    active: TabId,
}

impl TabState {
    pub fn new() -> Self {
        Self {
            open: vec![TabId::About],
            active: TabId::About,
        }
    }

    pub fn open_tabs(&self) -> &[TabId] {
        &self.open
    }

    pub fn active(&self) -> TabId {
        self.active
    }

    pub fn is_open(&self, id: TabId) -> bool {
        self.open.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Add `id` to the open set (if absent) and make it active.
    pub fn open(&mut self, id: TabId) -> Transition {
        if !self.open.contains(&id) {
            self.open.push(id);
        }
        self.active = id;
        Transition::Applied
    }

    /// Remove `id` from the open set.
    ///
    /// When the closed tab was active the first remaining tab in insertion
    /// order becomes active. That choice is arbitrary rather than a "previous
    /// tab" policy.
    pub fn close(&mut self, id: TabId) -> Transition {
        if self.open.len() <= 1 {
            return Transition::Ignored(IgnoreReason::LastOpenTab);
        }

        let Some(index) = self.open.iter().position(|open| *open == id) else {
            return Transition::Ignored(IgnoreReason::NotOpen);
        };
        self.open.remove(index);

        if self.active == id {
            self.active = self.open[0];
        }

        Transition::Applied
    }

    /// Make an already open tab active. The open set is unchanged.
    pub fn switch_to(&mut self, id: TabId) -> Transition {
        if !self.open.contains(&id) {
            return Transition::Ignored(IgnoreReason::NotOpen);
        }
        self.active = id;
        Transition::Applied
    }
}

impl Default for TabState {
    fn default() -> Self {
        Self::new()
    }
}
