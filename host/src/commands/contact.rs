//! Contact form commands

use codefolio_core::{ContactField, ContactView};

use super::tabs::CommandResult;
use super::WithEffects;
use crate::state::AppState;

pub fn set_contact_field(
    state: &AppState,
    field: ContactField,
    value: String,
) -> CommandResult<ContactView> {
    state
        .with_workbench(|workbench| {
            workbench.set_contact_field(field, value);
            Ok(workbench.view().contact)
        })
        .into()
}

/// Validate and start sending. The reply carries the new button state.
pub fn submit_contact(state: &AppState) -> CommandResult<WithEffects<ContactView>> {
    state
        .with_workbench(|workbench| {
            let effects = workbench.submit_contact();
            Ok(WithEffects {
                data: workbench.view().contact,
                effects,
            })
        })
        .into()
}
