//! Tab management commands
use codefolio_core::{TabsView, Transition, Workbench};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

impl<T> From<codefolio_core::Result<T>> for CommandResult<T> {
    fn from(result: codefolio_core::Result<T>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::err(e.to_string()),
        }
    }
}

/// Apply `op` to the named tab. Unknown names leave the tabs untouched.
fn with_named_tab<F>(state: &AppState, tab: &str, op: F) -> CommandResult<TabsView>
where
    F: FnOnce(&mut Workbench, codefolio_core::TabId) -> Transition,
{
    state
        .with_workbench(|workbench| {
            match tab.parse() {
                Ok(id) => {
                    op(workbench, id);
                }
                Err(e) => tracing::debug!(error = %e, "Ignoring tab command"),
            }
            Ok(workbench.tabs().render())
        })
        .into()
}

pub fn open_tab(state: &AppState, tab: &str) -> CommandResult<TabsView> {
    with_named_tab(state, tab, Workbench::open_tab)
}

pub fn close_tab(state: &AppState, tab: &str) -> CommandResult<TabsView> {
    with_named_tab(state, tab, Workbench::close_tab)
}

pub fn switch_to_tab(state: &AppState, tab: &str) -> CommandResult<TabsView> {
    with_named_tab(state, tab, Workbench::switch_to_tab)
}

pub fn close_active_tab(state: &AppState) -> CommandResult<TabsView> {
    state
        .with_workbench(|workbench| {
            workbench.close_active_tab();
            Ok(workbench.tabs().render())
        })
        .into()
}

pub fn get_tabs(state: &AppState) -> CommandResult<TabsView> {
    state
        .with_workbench(|workbench| Ok(workbench.tabs().render()))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;
    use codefolio_core::TabId;

    fn state() -> AppState {
        test_state()
    }

    #[test]
    fn test_open_and_close() {
        let state = state();

        let result = open_tab(&state, "skills");
        assert!(result.success);
        assert_eq!(result.data.unwrap().active_tab, TabId::Skills);

        let result = close_tab(&state, "skills");
        let tabs = result.data.unwrap();
        assert_eq!(tabs.tab_bar.len(), 1);
        assert_eq!(tabs.active_tab, TabId::About);
    }

    #[test]
    fn test_unknown_tab_is_ignored() {
        let state = state();
        let result = open_tab(&state, "blog");
        assert!(result.success);
        assert_eq!(result.data.unwrap().tab_bar.len(), 1);
    }

    #[test]
    fn test_last_tab_survives() {
        let state = state();
        let result = close_active_tab(&state);
        assert_eq!(result.data.unwrap().active_tab, TabId::About);
        assert_eq!(get_tabs(&state).data.unwrap().tab_bar.len(), 1);
    }

    #[test]
    fn test_command_result_shape() {
        let json = serde_json::to_value(CommandResult::<()>::err("boom".to_string())).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["data"], serde_json::Value::Null);
        assert_eq!(json["error"], "boom");
    }
}
