//! Command palette commands

use codefolio_core::{PaletteView, Workbench};

use super::tabs::CommandResult;
use super::WithEffects;
use crate::state::AppState;

fn palette_view(workbench: &Workbench) -> PaletteView {
    workbench.view().palette
}

pub fn open_palette(state: &AppState) -> CommandResult<WithEffects<PaletteView>> {
    state
        .with_workbench(|workbench| {
            let effects = workbench.open_palette();
            Ok(WithEffects {
                data: palette_view(workbench),
                effects,
            })
        })
        .into()
}

pub fn close_palette(state: &AppState) -> CommandResult<PaletteView> {
    state
        .with_workbench(|workbench| {
            workbench.close_palette();
            Ok(palette_view(workbench))
        })
        .into()
}

pub fn filter_palette(state: &AppState, query: String) -> CommandResult<PaletteView> {
    state
        .with_workbench(|workbench| {
            workbench.set_palette_query(&query);
            Ok(palette_view(workbench))
        })
        .into()
}

/// Run a palette entry. Hidden or out-of-range entries do nothing.
pub fn run_palette_entry(state: &AppState, index: usize) -> CommandResult<PaletteView> {
    state
        .with_workbench(|workbench| {
            workbench.run_palette_entry(index);
            Ok(palette_view(workbench))
        })
        .into()
}
