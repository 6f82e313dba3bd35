//! Color theme
//!
//! The only persisted preference: stored as `dark` or `light` under
//! [`THEME_SETTING_KEY`].

use codefolio_storage::Database;
use serde::{Deserialize, Serialize};

use crate::Result;

pub const THEME_SETTING_KEY: &str = "vscode-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeView {
    pub theme: Theme,
    pub body_class: &'static str,
    pub toggle_icon: &'static str,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn body_class(&self) -> &'static str {
        match self {
            Theme::Dark => "dark-theme",
            Theme::Light => "light-theme",
        }
    }

    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Dark => "fas fa-moon",
            Theme::Light => "fas fa-sun",
        }
    }

    /// Read the stored preference. Unrecognized values fall back to dark.
    pub fn load(db: &Database) -> Result<Theme> {
        let stored = db.get_setting(THEME_SETTING_KEY)?;
        Ok(match stored.as_deref().map(str::parse::<Theme>) {
            Some(Ok(theme)) => theme,
            Some(Err(value)) => {
                tracing::debug!(value = %value, "Ignoring stored theme");
                Theme::default()
            }
            None => Theme::default(),
        })
    }

    pub fn save(&self, db: &Database) -> Result<()> {
        db.set_setting(THEME_SETTING_KEY, self.as_str())?;
        Ok(())
    }

    pub fn view(&self) -> ThemeView {
        ThemeView {
            theme: *self,
            body_class: self.body_class(),
            toggle_icon: self.toggle_icon(),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(s.to_string()),
        }
    }
}
