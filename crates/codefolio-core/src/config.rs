//! Workbench configuration

use codefolio_tabs::{PanelRegistry, TabId};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::Result;

/// A folder in the file explorer and the files listed under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderSpec {
    pub id: String,
    pub label: String,
    pub files: Vec<TabId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// Whose portfolio this is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerProfile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub links: Vec<SocialLink>,
}

impl Default for OwnerProfile {
    fn default() -> Self {
        Self {
            name: "Portfolio Owner".to_string(),
            email: "hello@example.com".to_string(),
            links: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the preferences database
    pub database_path: PathBuf,
    /// Viewport width (px) at or below which the sidebar behaves as a drawer
    pub mobile_breakpoint: u32,
    /// Content panels present on the page
    pub panels: PanelRegistry,
    pub explorer: Vec<FolderSpec>,
    pub owner: OwnerProfile,
    /// Lines already printed in the contact terminal, revealed one by one
    pub terminal_intro: Vec<String>,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("codefolio.db"),
            mobile_breakpoint: 768,
            panels: PanelRegistry::default(),
            explorer: default_explorer(),
            owner: OwnerProfile::default(),
            terminal_intro: vec![
                "$ cat contact.html".to_string(),
                "$ echo \"Let's build something together\"".to_string(),
                "$ ./send-message --interactive".to_string(),
            ],
        }
    }

    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;

        if config.explorer.iter().any(|folder| folder.id.trim().is_empty()) {
            return Err(CoreError::Config(format!(
                "{}: explorer folder ids cannot be empty",
                path.display()
            )));
        }

        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("Codefolio"))
            .unwrap_or_else(|| PathBuf::from(".codefolio"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

fn default_explorer() -> Vec<FolderSpec> {
    vec![
        FolderSpec {
            id: "portfolio".to_string(),
            label: "PORTFOLIO".to_string(),
            files: vec![TabId::About],
        },
        FolderSpec {
            id: "src".to_string(),
            label: "src".to_string(),
            files: vec![
                TabId::Skills,
                TabId::Projects,
                TabId::Experience,
                TabId::Contact,
            ],
        },
    ]
}

mod dirs {
    use std::path::PathBuf;

    pub fn data_local_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("LOCALAPPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}
