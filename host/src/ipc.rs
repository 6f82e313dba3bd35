//! JSON-lines request handling
//!
//! One request object per line on stdin, one `CommandResult` per line on
//! stdout, in request order.

use codefolio_core::{ContactField, UiEvent};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::commands::tabs::CommandResult;
use crate::commands::{contact, diagnostics, events, palette, settings, tabs};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Request {
    FrontendReady {
        /// Viewport width at load
        #[serde(default)]
        width: Option<u32>,
    },
    RecentEvents,
    GetView,
    Event { event: UiEvent },
    GetTabs,
    OpenTab { tab: String },
    CloseTab { tab: String },
    SwitchTab { tab: String },
    CloseActiveTab,
    GetTheme,
    ToggleTheme,
    OpenPalette,
    ClosePalette,
    FilterPalette { query: String },
    RunPaletteEntry { index: usize },
    SetContactField {
        field: ContactField,
        value: String,
    },
    SubmitContact,
}

impl Request {
    pub fn handle(self, state: &AppState) -> Value {
        match self {
            Request::FrontendReady { width } => encode(diagnostics::frontend_ready(state, width)),
            Request::RecentEvents => encode(diagnostics::recent_events(state)),
            Request::GetView => encode(events::get_view(state)),
            Request::Event { event } => encode(events::dispatch_event(state, event)),
            Request::GetTabs => encode(tabs::get_tabs(state)),
            Request::OpenTab { tab } => encode(tabs::open_tab(state, &tab)),
            Request::CloseTab { tab } => encode(tabs::close_tab(state, &tab)),
            Request::SwitchTab { tab } => encode(tabs::switch_to_tab(state, &tab)),
            Request::CloseActiveTab => encode(tabs::close_active_tab(state)),
            Request::GetTheme => encode(settings::get_theme(state)),
            Request::ToggleTheme => encode(settings::toggle_theme(state)),
            Request::OpenPalette => encode(palette::open_palette(state)),
            Request::ClosePalette => encode(palette::close_palette(state)),
            Request::FilterPalette { query } => encode(palette::filter_palette(state, query)),
            Request::RunPaletteEntry { index } => {
                encode(palette::run_palette_entry(state, index))
            }
            Request::SetContactField { field, value } => {
                encode(contact::set_contact_field(state, field, value))
            }
            Request::SubmitContact => encode(contact::submit_contact(state)),
        }
    }
}

fn encode<T: Serialize>(result: CommandResult<T>) -> Value {
    serde_json::to_value(result).unwrap_or_else(|e| failure(format!("Serialization error: {e}")))
}

fn failure(message: String) -> Value {
    serde_json::json!({
        "success": false,
        "data": null,
        "error": message,
    })
}

/// Parse and run one request line, returning the reply line.
pub fn handle_line(state: &AppState, line: &str) -> String {
    let reply = match serde_json::from_str::<Request>(line) {
        Ok(request) => {
            tracing::debug!(?request, "IPC request");
            request.handle(state)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Rejected IPC request");
            failure(format!("Invalid request: {e}"))
        }
    };

    reply.to_string()
}
