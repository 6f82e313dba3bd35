//! IPC commands
//!
//! These commands bridge the page to the Rust core.
//! Rust owns all state; the page only renders what it is given.

pub mod contact;
pub mod diagnostics;
pub mod events;
pub mod palette;
pub mod settings;
pub mod tabs;

use codefolio_core::HostEffect;
use serde::Serialize;

/// A reply that also asks the page to do something.
#[derive(Debug, Serialize)]
pub struct WithEffects<T> {
    #[serde(flatten)]
    pub data: T,
    pub effects: Vec<HostEffect>,
}
