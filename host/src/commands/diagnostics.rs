use codefolio_core::AnalyticsEvent;

use super::tabs::CommandResult;
use crate::state::AppState;

/// The page finished loading. `width` is its viewport width, when known.
pub fn frontend_ready(state: &AppState, width: Option<u32>) -> CommandResult<()> {
    tracing::info!(?width, "Frontend ready");
    state
        .with_workbench(|workbench| {
            if let Some(width) = width {
                workbench.set_viewport_width(width);
            }
            workbench.track("page_view", "frontend_ready");
            Ok(())
        })
        .into()
}

pub fn recent_events(state: &AppState) -> CommandResult<Vec<AnalyticsEvent>> {
    state
        .with_workbench(|workbench| Ok(workbench.analytics().recent()))
        .into()
}
