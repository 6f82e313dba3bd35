//! Settings commands

use codefolio_core::ThemeView;

use super::tabs::CommandResult;
use crate::state::AppState;

pub fn get_theme(state: &AppState) -> CommandResult<ThemeView> {
    state
        .with_workbench(|workbench| Ok(workbench.theme().view()))
        .into()
}

pub fn toggle_theme(state: &AppState) -> CommandResult<ThemeView> {
    state
        .with_workbench(|workbench| Ok(workbench.toggle_theme().view()))
        .into()
}
