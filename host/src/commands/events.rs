//! Page event forwarding

use codefolio_core::{EventOutcome, UiEvent, WorkbenchView};
use serde::Serialize;

use super::tabs::CommandResult;
use crate::state::AppState;

/// What the page needs after an event: the outcome and a fresh view.
#[derive(Debug, Serialize)]
pub struct EventReply {
    pub outcome: EventOutcome,
    pub view: WorkbenchView,
}

pub fn dispatch_event(state: &AppState, event: UiEvent) -> CommandResult<EventReply> {
    state
        .with_workbench(|workbench| {
            let outcome = workbench.dispatch(event);
            Ok(EventReply {
                outcome,
                view: workbench.view(),
            })
        })
        .into()
}

pub fn get_view(state: &AppState) -> CommandResult<WorkbenchView> {
    state.with_workbench(|workbench| Ok(workbench.view())).into()
}
