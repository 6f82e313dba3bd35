//! Status bar

use chrono::{NaiveTime, Timelike};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBarView {
    pub branch: &'static str,
    pub language: &'static str,
    pub encoding: &'static str,
    pub theme: &'static str,
    pub clock: String,
}

#[derive(Debug, Default)]
pub struct StatusBar {
    clock: String,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// 24-hour `HH:MM`.
    pub fn set_time(&mut self, time: NaiveTime) {
        self.clock = format!("{:02}:{:02}", time.hour(), time.minute());
    }

    pub fn clock(&self) -> &str {
        &self.clock
    }

    pub fn view(&self, language: &'static str, theme: &'static str) -> StatusBarView {
        StatusBarView {
            branch: "main",
            language,
            encoding: "UTF-8",
            theme,
            clock: self.clock.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_format() {
        let mut status = StatusBar::new();
        assert_eq!(status.clock(), "");

        status.set_time(NaiveTime::from_hms_opt(7, 5, 59).unwrap());
        assert_eq!(status.clock(), "07:05");

        status.set_time(NaiveTime::from_hms_opt(23, 40, 0).unwrap());
        let view = status.view("Python", "dark");
        assert_eq!(view.clock, "23:40");
        assert_eq!(view.language, "Python");
        assert_eq!(view.branch, "main");
    }
}
