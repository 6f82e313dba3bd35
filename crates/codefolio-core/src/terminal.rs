//! Terminal panel output

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Success,
    Error,
    Info,
}

impl MessageKind {
    pub fn icon(&self) -> &'static str {
        match self {
            MessageKind::Success => "✓",
            MessageKind::Error => "✗",
            MessageKind::Info => "ℹ",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            MessageKind::Success => "#6a9955",
            MessageKind::Error => "#f44747",
            MessageKind::Info => "#007acc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TerminalLine {
    text: String,
    kind: Option<MessageKind>,
    visible: bool,
    slide_in: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerminalLineView {
    /// DOM id, used as the scroll target
    pub id: String,
    pub class_name: &'static str,
    pub text: String,
    pub icon: Option<&'static str>,
    pub color: Option<&'static str>,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerminalView {
    pub lines: Vec<TerminalLineView>,
}

pub struct Terminal {
    lines: Vec<TerminalLine>,
}

impl Terminal {
    pub fn new(intro: &[String]) -> Self {
        Self {
            lines: intro
                .iter()
                .map(|text| TerminalLine {
                    text: text.clone(),
                    kind: None,
                    visible: true,
                    slide_in: false,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_id(index: usize) -> String {
        format!("terminal-line-{index}")
    }

    /// Hide every line ahead of the typewriter reveal. Returns how many.
    pub fn hide_all(&mut self) -> usize {
        for line in &mut self.lines {
            line.visible = false;
            line.slide_in = false;
        }
        self.lines.len()
    }

    pub fn reveal(&mut self, index: usize) {
        if let Some(line) = self.lines.get_mut(index) {
            line.visible = true;
            line.slide_in = true;
        }
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.lines.get(index).map(|l| l.visible).unwrap_or(false)
    }

    /// Append a status message and return its index.
    pub fn push_message(&mut self, kind: MessageKind, text: impl Into<String>) -> usize {
        self.lines.push(TerminalLine {
            text: text.into(),
            kind: Some(kind),
            visible: true,
            slide_in: false,
        });
        self.lines.len() - 1
    }

    pub fn view(&self) -> TerminalView {
        TerminalView {
            lines: self
                .lines
                .iter()
                .enumerate()
                .map(|(i, line)| TerminalLineView {
                    id: Self::line_id(i),
                    class_name: if line.slide_in {
                        "terminal-line slide-in"
                    } else {
                        "terminal-line"
                    },
                    text: match line.kind {
                        Some(kind) => format!("{} {}", kind.icon(), line.text),
                        None => line.text.clone(),
                    },
                    icon: line.kind.map(|k| k.icon()),
                    color: line.kind.map(|k| k.color()),
                    visible: line.visible,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let mut terminal = Terminal::new(&["$ whoami".to_string()]);
        let index = terminal.push_message(MessageKind::Error, "Missing field: email");
        assert_eq!(index, 1);

        let view = terminal.view();
        assert_eq!(view.lines[0].text, "$ whoami");
        assert_eq!(view.lines[0].color, None);
        assert_eq!(view.lines[1].id, "terminal-line-1");
        assert_eq!(view.lines[1].text, "✗ Missing field: email");
        assert_eq!(view.lines[1].color, Some("#f44747"));
    }

    #[test]
    fn test_hide_and_reveal() {
        let mut terminal = Terminal::new(&["a".to_string(), "b".to_string()]);
        assert_eq!(terminal.hide_all(), 2);
        assert!(!terminal.is_visible(0));

        terminal.reveal(1);
        terminal.reveal(9);
        let view = terminal.view();
        assert!(!view.lines[0].visible);
        assert!(view.lines[1].visible);
        assert_eq!(view.lines[1].class_name, "terminal-line slide-in");
    }
}
