//! Tab identifiers and their static display metadata

use serde::{Deserialize, Serialize};

use crate::error::TabError;

/// A logical document that can be open in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabId {
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

/// Icon and file name shown for a tab, plus the language the status bar reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabMetadata {
    pub icon: &'static str,
    pub file_name: &'static str,
    pub language: &'static str,
}

const ABOUT: TabMetadata = TabMetadata {
    icon: "fab fa-markdown",
    file_name: "README.md",
    language: "Markdown",
};

const SKILLS: TabMetadata = TabMetadata {
    icon: "fas fa-code",
    file_name: "skills.json",
    language: "JSON",
};

const PROJECTS: TabMetadata = TabMetadata {
    icon: "fab fa-js-square",
    file_name: "projects.ts",
    language: "TypeScript",
};

const EXPERIENCE: TabMetadata = TabMetadata {
    icon: "fab fa-python",
    file_name: "experience.py",
    language: "Python",
};

const CONTACT: TabMetadata = TabMetadata {
    icon: "fab fa-html5",
    file_name: "contact.html",
    language: "HTML",
};

impl TabId {
    pub const ALL: [TabId; 5] = [
        TabId::About,
        TabId::Skills,
        TabId::Projects,
        TabId::Experience,
        TabId::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TabId::About => "about",
            TabId::Skills => "skills",
            TabId::Projects => "projects",
            TabId::Experience => "experience",
            TabId::Contact => "contact",
        }
    }

    pub fn metadata(&self) -> &'static TabMetadata {
        match self {
            TabId::About => &ABOUT,
            TabId::Skills => &SKILLS,
            TabId::Projects => &PROJECTS,
            TabId::Experience => &EXPERIENCE,
            TabId::Contact => &CONTACT,
        }
    }

    /// DOM id of the content panel, `<tab>-content`.
    pub fn panel_id(&self) -> String {
        format!("{}-content", self.as_str())
    }

    /// Look a tab up by the file name shown in the explorer.
    pub fn from_file_name(file_name: &str) -> Option<TabId> {
        TabId::ALL
            .into_iter()
            .find(|id| id.metadata().file_name == file_name)
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TabId {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "about" => Ok(TabId::About),
            "skills" => Ok(TabId::Skills),
            "projects" => Ok(TabId::Projects),
            "experience" => Ok(TabId::Experience),
            "contact" => Ok(TabId::Contact),
            _ => Err(TabError::UnknownTab(s.to_string())),
        }
    }
}
