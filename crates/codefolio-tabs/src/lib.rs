//! Codefolio Tab Management
//!
//! Owns the set of open editor tabs, the active tab, and the pure render step
//! that turns that state into a tab bar and a visible content panel.
//!
//! ```text
//! ({about}, about) --open(x)--> (open ∪ {x}, x)
//!                  --close(x)-> (open \ {x}, first remaining if x was active)
//!                  --switch(x)> (open, x)
//! ```

mod controller;
mod error;
mod state;
mod tab;

pub use controller::{PanelRegistry, PanelView, TabController, TabEntryView, TabsView};
pub use error::TabError;
pub use state::{IgnoreReason, TabState, Transition};
pub use tab::{TabId, TabMetadata};
