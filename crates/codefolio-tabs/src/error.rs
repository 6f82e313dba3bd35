//! Tab error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    #[error("Unknown tab: {0}")]
    UnknownTab(String),
}
