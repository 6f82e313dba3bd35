//! Application state management
use codefolio_core::{Config, HostEffect, Result, Workbench, WorkbenchView};
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Unsolicited messages written to stdout
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum Push {
    ViewChanged {
        view: WorkbenchView,
        effects: Vec<HostEffect>,
    },
}

/// Thread-safe application state wrapper
#[derive(Clone)]
pub struct AppState {
    workbench: Arc<Mutex<Workbench>>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let workbench = Workbench::new(config)?;
        Ok(Self::from_workbench(workbench))
    }

    fn from_workbench(workbench: Workbench) -> Self {
        Self {
            workbench: Arc::new(Mutex::new(workbench)),
        }
    }

    pub fn initialize(&self) -> Result<()> {
        self.workbench.lock().initialize()
    }

    pub fn with_workbench<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Workbench) -> Result<T>,
    {
        let mut guard = self.workbench.lock();
        f(&mut guard)
    }

    /// Advance the workbench clock. Returns a push when anything fired.
    pub fn advance(&self, elapsed: Duration) -> Option<Push> {
        let mut workbench = self.workbench.lock();
        if workbench.advance(elapsed) == 0 {
            return None;
        }

        Some(Push::ViewChanged {
            view: workbench.view(),
            effects: workbench.take_effects(),
        })
    }

    pub fn shutdown(&self) -> usize {
        self.workbench.lock().shutdown()
    }
}

/// Fresh state over an in-memory database.
#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    let config = Config::new(std::path::PathBuf::from("/tmp/codefolio-test"));
    let db = codefolio_core::Database::open_in_memory().unwrap();
    AppState::from_workbench(Workbench::with_database(config, db))
}
