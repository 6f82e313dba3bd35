//! Interaction analytics
//!
//! Events go to the log and into a short in-memory ring the host can read.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;

const MAX_EVENTS: usize = 50;

pub const DEFAULT_CATEGORY: &str = "Portfolio";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsEvent {
    pub action: String,
    pub category: String,
    pub label: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct Analytics {
    events: VecDeque<AnalyticsEvent>,
}

impl Analytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&mut self, action: &str, category: &str, label: &str) {
        tracing::info!(
            target: "codefolio::analytics",
            action = %action,
            category = %category,
            label = %label,
            "Analytics: {} - {} - {}",
            category,
            action,
            label
        );

        self.events.push_back(AnalyticsEvent {
            action: action.to_string(),
            category: category.to_string(),
            label: label.to_string(),
            at: Utc::now(),
        });

        if self.events.len() > MAX_EVENTS {
            let overflow = self.events.len() - MAX_EVENTS;
            self.events.drain(0..overflow);
        }
    }

    /// Oldest first.
    pub fn recent(&self) -> Vec<AnalyticsEvent> {
        self.events.iter().cloned().collect()
    }

    pub fn count(&self, action: &str) -> usize {
        self.events.iter().filter(|e| e.action == action).count()
    }
}
