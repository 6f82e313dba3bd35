//! Contact form and its terminal-styled submit button
//!
//! Submission is simulated: nothing leaves the process.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Required fields left blank. Presence is the only check.
    pub fn missing_fields(&self) -> Vec<ContactField> {
        [
            (ContactField::Name, &self.name),
            (ContactField::Email, &self.email),
            (ContactField::Message, &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SendPhase {
    #[default]
    Idle,
    Sending,
    Sent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendButtonView {
    pub class_name: &'static str,
    pub prompt: &'static str,
    pub command: &'static str,
    pub flag: &'static str,
    pub border_color: Option<&'static str>,
}

impl SendPhase {
    pub fn button_view(&self) -> SendButtonView {
        let (class_name, command, flag, border_color) = match self {
            SendPhase::Idle => ("terminal-button", "send", "--message", None),
            SendPhase::Sending => ("terminal-button loading", "sending", "--please-wait", None),
            SendPhase::Sent => ("terminal-button", "sent", "--success", Some("#6a9955")),
        };

        SendButtonView {
            class_name,
            prompt: "$",
            command,
            flag,
            border_color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactView {
    pub form: ContactForm,
    pub phase: SendPhase,
    pub button: SendButtonView,
}
