//! Main workbench state container
//!
//! Owns every piece of page state and applies input events to it. All
//! handlers run to completion; anything deferred goes through the
//! [`Scheduler`] and is applied when the owner advances the clock.

use codefolio_palette::{CommandAction, CommandPalette, PaletteFocus};
use codefolio_storage::Database;
use codefolio_tabs::{TabController, TabId, Transition};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::analytics::{Analytics, DEFAULT_CATEGORY};
use crate::config::Config;
use crate::contact::{ContactField, ContactForm, ContactView, SendPhase};
use crate::effects::{LinkTarget, MatrixRain};
use crate::event::{ClickTarget, EventOutcome, HostEffect, UiEvent};
use crate::explorer::{Explorer, Sidebar};
use crate::keymap::{KeyPress, KonamiDetector, Shortcut};
use crate::scheduler::{Scheduler, TimerId};
use crate::status::StatusBar;
use crate::terminal::{MessageKind, Terminal};
use crate::theme::Theme;
use crate::view::WorkbenchView;
use crate::Result;

const FADE_IN: Duration = Duration::from_millis(300);
const TYPEWRITER_STEP: Duration = Duration::from_millis(100);
const SEND_DELAY: Duration = Duration::from_millis(2000);
const SEND_RESET: Duration = Duration::from_millis(3000);
const LINK_LOADING: Duration = Duration::from_millis(1000);
const MATRIX_DURATION: Duration = Duration::from_millis(5000);
const CLOCK_REFRESH: Duration = Duration::from_secs(30);

const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Task {
    EndFadeIn(TabId),
    RevealLine(usize),
    FinishSend,
    ResetSendButton,
    EndLinkLoading(String),
    EndMatrix,
    RefreshClock,
}

pub struct Workbench {
    config: Config,
    db: Database,
    tabs: TabController,
    theme: Theme,
    palette: CommandPalette,
    explorer: Explorer,
    sidebar: Sidebar,
    terminal: Terminal,
    form: ContactForm,
    send_phase: SendPhase,
    status: StatusBar,
    analytics: Analytics,
    konami: KonamiDetector,
    matrix: Option<MatrixRain>,
    keyboard_focus: bool,
    scheduler: Scheduler<Task>,
    fade_timers: BTreeMap<TabId, TimerId>,
    link_timers: BTreeMap<String, TimerId>,
    send_timer: Option<TimerId>,
    matrix_timer: Option<TimerId>,
    /// Effects waiting for the host. Every public entry point that can queue
    /// one hands the queue back before returning; scheduled tasks leave
    /// theirs for `take_effects`.
    effects: Vec<HostEffect>,
    created_at: Instant,
}

impl Workbench {
    /// Open the preferences database named in `config` and build a workbench.
    pub fn new(config: Config) -> Result<Self> {
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        Ok(Self::with_database(config, db))
    }

    pub fn with_database(config: Config, db: Database) -> Self {
        Self {
            tabs: TabController::new(config.panels.clone()),
            theme: Theme::default(),
            palette: CommandPalette::default(),
            explorer: Explorer::new(config.explorer.clone()),
            sidebar: Sidebar::new(config.mobile_breakpoint),
            terminal: Terminal::new(&config.terminal_intro),
            form: ContactForm::default(),
            send_phase: SendPhase::Idle,
            status: StatusBar::new(),
            analytics: Analytics::new(),
            konami: KonamiDetector::new(),
            matrix: None,
            keyboard_focus: false,
            scheduler: Scheduler::new(),
            fade_timers: BTreeMap::new(),
            link_timers: BTreeMap::new(),
            send_timer: None,
            matrix_timer: None,
            effects: Vec::new(),
            created_at: Instant::now(),
            config,
            db,
        }
    }

    /// Apply the stored theme and start the startup animations.
    pub fn initialize(&mut self) -> Result<()> {
        self.theme = Theme::load(&self.db)?;

        let lines = self.terminal.hide_all();
        for index in 0..lines {
            self.scheduler
                .schedule(TYPEWRITER_STEP * index as u32, Task::RevealLine(index));
        }

        self.refresh_clock();
        self.scheduler.schedule(CLOCK_REFRESH, Task::RefreshClock);

        let owner = &self.config.owner;
        tracing::info!(
            owner = %owner.name,
            email = %owner.email,
            links = owner.links.len(),
            "Welcome to the portfolio of {}",
            owner.name
        );
        tracing::info!(
            theme = %self.theme,
            "Codefolio loaded in {:.2}ms",
            self.created_at.elapsed().as_secs_f64() * 1000.0
        );

        Ok(())
    }

    // === Tab operations ===

    pub fn tabs(&self) -> &TabController {
        &self.tabs
    }

    pub fn open_tab(&mut self, id: TabId) -> Transition {
        let transition = self.tabs.open_tab(id);
        self.start_fade_in(id);
        transition
    }

    /// Open a tab by name; unknown names are ignored.
    pub fn open_tab_named(&mut self, name: &str) -> Option<Transition> {
        let id = name.parse::<TabId>().ok()?;
        Some(self.open_tab(id))
    }

    pub fn close_tab(&mut self, id: TabId) -> Transition {
        self.tabs.close_tab(id)
    }

    pub fn close_active_tab(&mut self) -> Transition {
        self.tabs.close_active_tab()
    }

    pub fn switch_to_tab(&mut self, id: TabId) -> Transition {
        self.tabs.switch_to_tab(id)
    }

    fn start_fade_in(&mut self, id: TabId) {
        if !self.tabs.panels().contains(id) {
            return;
        }

        if let Some(previous) = self.fade_timers.remove(&id) {
            self.scheduler.cancel(previous);
        }
        let timer = self.scheduler.schedule(FADE_IN, Task::EndFadeIn(id));
        self.fade_timers.insert(id, timer);
    }

    // === Theme ===

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme and persist it. A failed write is logged, not undone.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();

        if let Err(e) = self.theme.save(&self.db) {
            tracing::warn!(error = %e, "Failed to save theme preference");
        }

        self.analytics.track("theme_toggle", "UI", self.theme.as_str());
        self.theme
    }

    // === Command palette ===

    /// Show the palette. Returns the effects the page should apply.
    pub fn open_palette(&mut self) -> Vec<HostEffect> {
        self.show_palette();
        self.take_effects()
    }

    fn show_palette(&mut self) {
        self.palette.open();
        self.effects.push(HostEffect::FocusPaletteInput);
    }

    pub fn close_palette(&mut self) {
        self.palette.close();
    }

    pub fn set_palette_query(&mut self, query: &str) {
        self.palette.set_query(query);
    }

    /// Run the palette entry at `index`. Hidden entries do nothing.
    pub fn run_palette_entry(&mut self, index: usize) {
        if let Some(action) = self.palette.execute(index) {
            self.run_command(action);
        }
    }

    pub fn run_command(&mut self, action: CommandAction) {
        match action {
            CommandAction::OpenFile(id) => {
                self.open_tab(id);
            }
            CommandAction::ToggleTheme => {
                self.toggle_theme();
            }
            CommandAction::CloseActiveTab => {
                self.close_active_tab();
            }
        }
    }

    // === Contact form ===

    pub fn set_contact_field(&mut self, field: ContactField, value: String) {
        self.form.set(field, value);
    }

    pub fn send_phase(&self) -> SendPhase {
        self.send_phase
    }

    /// Validate and start the simulated send. Returns the effects the page
    /// should apply.
    pub fn submit_contact(&mut self) -> Vec<HostEffect> {
        self.start_send();
        self.take_effects()
    }

    /// Returns false when nothing was started.
    fn start_send(&mut self) -> bool {
        if self.send_phase == SendPhase::Sending {
            tracing::debug!("Contact submission already in flight");
            return false;
        }

        let missing = self.form.missing_fields();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(ContactField::as_str).collect();
            self.print(
                MessageKind::Error,
                format!("Missing required field: {}", names.join(", ")),
            );
            return false;
        }

        // A new send supersedes the pending button reset
        if let Some(timer) = self.send_timer.take() {
            self.scheduler.cancel(timer);
        }

        self.send_phase = SendPhase::Sending;
        self.send_timer = Some(self.scheduler.schedule(SEND_DELAY, Task::FinishSend));
        tracing::info!(from = %self.form.email, "Sending contact message");
        true
    }

    fn print(&mut self, kind: MessageKind, text: String) {
        let index = self.terminal.push_message(kind, text);
        self.effects
            .push(HostEffect::ScrollIntoView(Terminal::line_id(index)));
    }

    // === Explorer ===

    pub fn toggle_folder(&mut self, folder_id: &str) -> bool {
        self.explorer.toggle_folder(folder_id)
    }

    /// Record the viewport width, as reported on load and on every resize.
    pub fn set_viewport_width(&mut self, width: u32) {
        self.sidebar.resized(width);
    }

    // === Events ===

    pub fn dispatch(&mut self, event: UiEvent) -> EventOutcome {
        let mut outcome = EventOutcome::default();

        if event.is_click_outside_palette() && self.palette.is_shown() {
            self.palette.close();
        }

        match event {
            UiEvent::FileClick { tab } => {
                self.open_tab(tab);
                self.analytics
                    .track("file_opened", "Navigation", tab.metadata().file_name);
            }
            UiEvent::TabClick { tab } => {
                self.switch_to_tab(tab);
            }
            UiEvent::TabClose { tab } => {
                self.close_tab(tab);
            }
            UiEvent::FolderToggle { folder } => {
                self.toggle_folder(&folder);
            }
            UiEvent::ThemeToggle => {
                self.toggle_theme();
            }
            UiEvent::SidebarToggle => self.sidebar.toggle(),
            UiEvent::PaletteTrigger => self.show_palette(),
            UiEvent::PaletteInput { query } => self.set_palette_query(&query),
            UiEvent::PaletteSelect { index } => self.run_palette_entry(index),
            UiEvent::Click { target } => {
                if target == ClickTarget::ContentArea {
                    self.sidebar.content_clicked();
                }
            }
            UiEvent::Link { href, text, social } => {
                self.follow_link(&href, &mut outcome);
                if social {
                    self.analytics.track("social_click", "Contact", text.trim());
                }
            }
            UiEvent::KeyDown(press) => self.key_down(&press, &mut outcome),
            UiEvent::MouseDown => self.keyboard_focus = false,
            UiEvent::Resize { width } => self.set_viewport_width(width),
            UiEvent::ContactInput { field, value } => self.set_contact_field(field, value),
            UiEvent::ContactSubmit => {
                outcome.prevent_default();
                self.start_send();
            }
        }

        outcome.effects.append(&mut self.effects);
        outcome
    }

    fn key_down(&mut self, press: &KeyPress, outcome: &mut EventOutcome) {
        if self.konami.push(press.key_code) {
            self.start_matrix();
            self.analytics.track("konami_code", "Easter Egg", "");
        }

        if press.key == "Tab" {
            self.keyboard_focus = true;
            if let Some(focus) = self.palette.cycle_focus(press.shift) {
                outcome.prevent_default();
                self.effects.push(match focus {
                    PaletteFocus::Input => HostEffect::FocusPaletteInput,
                    PaletteFocus::Entry(index) => HostEffect::FocusPaletteEntry(index),
                });
            }
        }

        if self.palette.is_shown() {
            match press.key.as_str() {
                "Escape" => self.palette.close(),
                "Enter" => {
                    if let Some(action) = self.palette.execute_focused() {
                        outcome.prevent_default();
                        self.run_command(action);
                    }
                }
                _ => {}
            }
        }

        if let Some(shortcut) = Shortcut::from_key(press) {
            outcome.prevent_default();
            tracing::debug!(?shortcut, "Keyboard shortcut");
            match shortcut {
                Shortcut::OpenPalette => self.show_palette(),
                Shortcut::CloseActiveTab => {
                    self.close_active_tab();
                }
                Shortcut::ToggleTheme => {
                    self.toggle_theme();
                }
            }
        }
    }

    fn follow_link(&mut self, href: &str, outcome: &mut EventOutcome) {
        match LinkTarget::classify(href) {
            LinkTarget::Anchor(anchor) => {
                if !anchor.is_empty() {
                    outcome.prevent_default();
                    self.effects.push(HostEffect::ScrollIntoView(anchor));
                }
            }
            LinkTarget::External(url) => {
                tracing::debug!(url = %url, "Following external link");
                if let Some(previous) = self.link_timers.remove(href) {
                    self.scheduler.cancel(previous);
                }
                let timer = self
                    .scheduler
                    .schedule(LINK_LOADING, Task::EndLinkLoading(href.to_string()));
                self.link_timers.insert(href.to_string(), timer);
            }
            LinkTarget::Other => {}
        }
    }

    fn start_matrix(&mut self) {
        if let Some(previous) = self.matrix_timer.take() {
            self.scheduler.cancel(previous);
        }
        self.matrix = Some(MatrixRain::generate(&mut rand::thread_rng()));
        self.matrix_timer = Some(self.scheduler.schedule(MATRIX_DURATION, Task::EndMatrix));
    }

    fn refresh_clock(&mut self) {
        self.status.set_time(chrono::Local::now().time());
    }

    // === Clock ===

    /// Advance the logical clock, running every task that comes due.
    /// Returns how many tasks ran.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let until = self.scheduler.now() + elapsed;
        let mut fired = 0;

        while let Some(task) = self.scheduler.pop_due(until) {
            self.run_task(task);
            fired += 1;
        }

        self.scheduler.settle(until);
        fired
    }

    fn run_task(&mut self, task: Task) {
        tracing::trace!(?task, "Running scheduled task");

        match task {
            Task::EndFadeIn(id) => {
                self.fade_timers.remove(&id);
            }
            Task::RevealLine(index) => self.terminal.reveal(index),
            Task::FinishSend => {
                self.send_phase = SendPhase::Sent;
                self.print(MessageKind::Success, SENT_MESSAGE.to_string());
                self.form.reset();
                self.send_timer = Some(self.scheduler.schedule(SEND_RESET, Task::ResetSendButton));
            }
            Task::ResetSendButton => {
                self.send_phase = SendPhase::Idle;
                self.send_timer = None;
            }
            Task::EndLinkLoading(href) => {
                self.link_timers.remove(&href);
            }
            Task::EndMatrix => {
                self.matrix = None;
                self.matrix_timer = None;
            }
            Task::RefreshClock => {
                self.refresh_clock();
                self.scheduler.schedule(CLOCK_REFRESH, Task::RefreshClock);
            }
        }
    }

    /// Effects produced by scheduled tasks since the last call.
    pub fn take_effects(&mut self) -> Vec<HostEffect> {
        std::mem::take(&mut self.effects)
    }

    /// Cancel everything still pending. Returns how many tasks were dropped.
    pub fn shutdown(&mut self) -> usize {
        let dropped = self.scheduler.clear();
        self.fade_timers.clear();
        self.link_timers.clear();
        self.send_timer = None;
        self.matrix_timer = None;
        tracing::info!(dropped, "Workbench shut down");
        dropped
    }

    // === View ===

    pub fn view(&self) -> WorkbenchView {
        let tabs = self.tabs.render();
        let active = tabs.active_tab;

        let mut body_classes = vec![self.theme.body_class()];
        if self.keyboard_focus {
            body_classes.push("keyboard-focus");
        }

        WorkbenchView {
            body_classes,
            theme: self.theme.view(),
            fading_panels: self.fade_timers.keys().map(TabId::panel_id).collect(),
            explorer: self.explorer.view(active),
            sidebar: self.sidebar.view(),
            palette: self.palette.view(),
            terminal: self.terminal.view(),
            contact: ContactView {
                form: self.form.clone(),
                phase: self.send_phase,
                button: self.send_phase.button_view(),
            },
            status_bar: self
                .status
                .view(active.metadata().language, self.theme.as_str()),
            loading_links: self.link_timers.keys().cloned().collect(),
            matrix: self.matrix.clone(),
            tabs,
        }
    }

    pub fn analytics(&self) -> &Analytics {
        &self.analytics
    }

    /// Log an event under the default category.
    pub fn track(&mut self, action: &str, label: &str) {
        self.analytics.track(action, DEFAULT_CATEGORY, label);
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::KONAMI_CODE;
    use crate::theme::THEME_SETTING_KEY;
    use codefolio_tabs::{IgnoreReason, PanelRegistry};
    use std::path::PathBuf;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn test_config() -> Config {
        Config::new(PathBuf::from("/tmp/codefolio-test"))
    }

    fn workbench() -> Workbench {
        let db = Database::open_in_memory().unwrap();
        let mut workbench = Workbench::with_database(test_config(), db);
        workbench.initialize().unwrap();
        workbench
    }

    fn key(key: &str, code: u32) -> UiEvent {
        UiEvent::KeyDown(KeyPress::new(key, code))
    }

    fn fill_form(workbench: &mut Workbench) {
        for (field, value) in [
            (ContactField::Name, "Ada"),
            (ContactField::Email, "ada@example.com"),
            (ContactField::Message, "Hello there"),
        ] {
            workbench.dispatch(UiEvent::ContactInput {
                field,
                value: value.to_string(),
            });
        }
    }

    #[test]
    fn test_tab_walkthrough() {
        let mut workbench = workbench();

        workbench.dispatch(UiEvent::FileClick { tab: TabId::Skills });
        workbench.dispatch(UiEvent::FileClick {
            tab: TabId::Projects,
        });
        workbench.dispatch(UiEvent::TabClose { tab: TabId::Skills });
        assert_eq!(
            workbench.tabs().state().open_tabs(),
            &[TabId::About, TabId::Projects]
        );
        assert_eq!(workbench.tabs().active_tab(), TabId::Projects);

        workbench.dispatch(UiEvent::TabClose {
            tab: TabId::Projects,
        });
        workbench.dispatch(UiEvent::TabClose { tab: TabId::About });

        let view = workbench.view();
        assert_eq!(view.tabs.tab_bar.len(), 1);
        assert_eq!(view.tabs.visible_panel.as_deref(), Some("about-content"));
        assert_eq!(workbench.analytics().count("file_opened"), 2);
    }

    #[test]
    fn test_explorer_and_status_follow_active_tab() {
        let mut workbench = workbench();
        workbench.open_tab(TabId::Experience);
        workbench.dispatch(UiEvent::TabClick { tab: TabId::About });

        let view = workbench.view();
        let highlighted: Vec<_> = view
            .explorer
            .folders
            .iter()
            .flat_map(|f| f.files.iter())
            .filter(|f| f.active)
            .map(|f| f.tab)
            .collect();
        assert_eq!(highlighted, vec![TabId::About]);
        assert_eq!(view.status_bar.language, "Markdown");
    }

    #[test]
    fn test_open_unknown_name_is_ignored() {
        let mut workbench = workbench();
        assert_eq!(workbench.open_tab_named("blog"), None);
        assert_eq!(workbench.tabs().state().len(), 1);
    }

    #[test]
    fn test_fade_in() {
        let mut workbench = workbench();
        workbench.open_tab(TabId::Skills);
        assert_eq!(workbench.view().fading_panels, vec!["skills-content"]);

        workbench.advance(ms(299));
        assert_eq!(workbench.view().fading_panels.len(), 1);
        workbench.advance(ms(1));
        assert!(workbench.view().fading_panels.is_empty());
    }

    #[test]
    fn test_reopen_restarts_fade() {
        let mut workbench = workbench();
        workbench.open_tab(TabId::Skills);
        workbench.advance(ms(200));
        workbench.open_tab(TabId::Skills);
        workbench.advance(ms(200));
        assert_eq!(workbench.view().fading_panels, vec!["skills-content"]);
        workbench.advance(ms(100));
        assert!(workbench.view().fading_panels.is_empty());
    }

    #[test]
    fn test_missing_panel_has_no_fade() {
        let mut config = test_config();
        config.panels = PanelRegistry::new([TabId::About]);
        let mut workbench = Workbench::with_database(config, Database::open_in_memory().unwrap());
        workbench.initialize().unwrap();

        workbench.open_tab(TabId::Contact);
        let view = workbench.view();
        assert!(view.fading_panels.is_empty());
        assert_eq!(view.tabs.visible_panel, None);
    }

    #[test]
    fn test_theme_round_trip() {
        let mut workbench = workbench();
        let original = workbench.view().theme;

        workbench.dispatch(UiEvent::ThemeToggle);
        assert_eq!(workbench.theme(), Theme::Light);
        assert_eq!(workbench.view().body_classes, vec!["light-theme"]);
        assert_eq!(
            workbench
                .database()
                .get_setting(THEME_SETTING_KEY)
                .unwrap()
                .as_deref(),
            Some("light")
        );

        workbench.dispatch(UiEvent::ThemeToggle);
        assert_eq!(workbench.view().theme, original);
        assert_eq!(
            workbench
                .database()
                .get_setting(THEME_SETTING_KEY)
                .unwrap()
                .as_deref(),
            Some("dark")
        );

        let events = workbench.analytics().recent();
        let labels: Vec<_> = events.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["light", "dark"]);
    }

    #[test]
    fn test_stored_theme_applied_on_initialize() {
        let db = Database::open_in_memory().unwrap();
        db.set_setting(THEME_SETTING_KEY, "light").unwrap();

        let mut workbench = Workbench::with_database(test_config(), db);
        assert_eq!(workbench.theme(), Theme::Dark);
        workbench.initialize().unwrap();
        assert_eq!(workbench.theme(), Theme::Light);
        assert_eq!(workbench.view().theme.toggle_icon, "fas fa-sun");
    }

    #[test]
    fn test_typewriter_reveal() {
        let mut workbench = workbench();
        let lines = workbench.config().terminal_intro.len();
        assert_eq!(lines, 3);
        assert!(workbench.view().terminal.lines.iter().all(|l| !l.visible));

        workbench.advance(Duration::ZERO);
        let view = workbench.view();
        assert!(view.terminal.lines[0].visible);
        assert!(!view.terminal.lines[1].visible);

        workbench.advance(ms(100));
        assert!(workbench.view().terminal.lines[1].visible);
        assert!(!workbench.view().terminal.lines[2].visible);

        workbench.advance(ms(100));
        let view = workbench.view();
        assert!(view.terminal.lines.iter().all(|l| l.visible));
        assert_eq!(view.terminal.lines[2].class_name, "terminal-line slide-in");
    }

    #[test]
    fn test_contact_requires_fields() {
        let mut workbench = workbench();
        let outcome = workbench.dispatch(UiEvent::ContactSubmit);

        assert!(outcome.prevent_default);
        assert_eq!(workbench.send_phase(), SendPhase::Idle);

        let view = workbench.view();
        let last = view.terminal.lines.last().unwrap();
        assert_eq!(last.color, Some("#f44747"));
        assert!(last.text.contains("name, email, message"));
        assert_eq!(
            outcome.effects,
            vec![HostEffect::ScrollIntoView(last.id.clone())]
        );
    }

    #[test]
    fn test_contact_timeline() {
        let mut workbench = workbench();
        fill_form(&mut workbench);

        workbench.dispatch(UiEvent::ContactSubmit);
        assert_eq!(workbench.send_phase(), SendPhase::Sending);
        assert_eq!(
            workbench.view().contact.button.class_name,
            "terminal-button loading"
        );

        // Second submit while in flight is ignored
        assert!(workbench.submit_contact().is_empty());
        assert_eq!(workbench.send_phase(), SendPhase::Sending);

        workbench.advance(ms(1999));
        assert_eq!(workbench.send_phase(), SendPhase::Sending);

        workbench.advance(ms(1));
        let view = workbench.view();
        assert_eq!(view.contact.phase, SendPhase::Sent);
        assert_eq!(view.contact.button.border_color, Some("#6a9955"));
        assert_eq!(view.contact.form, ContactForm::default());
        let last = view.terminal.lines.last().unwrap();
        assert_eq!(last.text, format!("✓ {SENT_MESSAGE}"));
        assert_eq!(
            workbench.take_effects(),
            vec![HostEffect::ScrollIntoView(last.id.clone())]
        );

        workbench.advance(ms(3000));
        assert_eq!(workbench.send_phase(), SendPhase::Idle);
        assert_eq!(workbench.view().contact.button.command, "send");
    }

    #[test]
    fn test_contact_chain_in_one_advance() {
        let mut workbench = workbench();
        fill_form(&mut workbench);
        workbench.submit_contact();

        workbench.advance(Duration::from_secs(10));
        assert_eq!(workbench.send_phase(), SendPhase::Idle);
    }

    #[test]
    fn test_shutdown_cancels_pending() {
        let mut workbench = workbench();
        fill_form(&mut workbench);
        workbench.submit_contact();
        workbench.open_tab(TabId::Contact);

        assert!(workbench.shutdown() > 0);
        assert_eq!(workbench.advance(Duration::from_secs(60)), 0);
        assert_eq!(workbench.send_phase(), SendPhase::Sending);
        assert!(workbench.view().fading_panels.is_empty());
    }

    #[test]
    fn test_shortcuts() {
        let mut workbench = workbench();
        workbench.open_tab(TabId::Skills);

        let outcome = workbench.dispatch(UiEvent::KeyDown(KeyPress::new("p", 80).with_ctrl()));
        assert!(outcome.prevent_default);
        assert_eq!(outcome.effects, vec![HostEffect::FocusPaletteInput]);
        assert!(workbench.view().palette.shown);

        workbench.dispatch(key("Escape", 27));
        assert!(!workbench.view().palette.shown);

        let outcome = workbench.dispatch(UiEvent::KeyDown(KeyPress::new("w", 87).with_meta()));
        assert!(outcome.prevent_default);
        assert_eq!(workbench.tabs().state().open_tabs(), &[TabId::About]);

        // Ctrl+W on the last tab is swallowed but changes nothing
        let outcome = workbench.dispatch(UiEvent::KeyDown(KeyPress::new("w", 87).with_ctrl()));
        assert!(outcome.prevent_default);
        assert_eq!(
            workbench.close_active_tab(),
            Transition::Ignored(IgnoreReason::LastOpenTab)
        );

        workbench.dispatch(UiEvent::KeyDown(KeyPress::new("t", 84).with_ctrl()));
        assert_eq!(workbench.theme(), Theme::Light);

        let outcome = workbench.dispatch(key("p", 80));
        assert!(!outcome.prevent_default);
    }

    #[test]
    fn test_palette_flow() {
        let mut workbench = workbench();
        workbench.dispatch(UiEvent::PaletteTrigger);
        workbench.dispatch(UiEvent::PaletteInput {
            query: "PROJ".to_string(),
        });

        let view = workbench.view();
        let visible: Vec<_> = view
            .palette
            .entries
            .iter()
            .filter(|e| e.visible)
            .map(|e| e.label.as_str())
            .collect();
        assert_eq!(visible, vec!["Open projects.ts"]);

        let outcome = workbench.dispatch(key("Enter", 13));
        assert!(outcome.prevent_default);
        assert_eq!(workbench.tabs().active_tab(), TabId::Projects);
        assert!(!workbench.view().palette.shown);
        assert_eq!(workbench.view().palette.query, "");
    }

    #[test]
    fn test_palette_select_and_outside_click() {
        let mut workbench = workbench();
        workbench.open_palette();
        workbench.dispatch(UiEvent::Click {
            target: ClickTarget::Palette,
        });
        assert!(workbench.view().palette.shown);

        workbench.dispatch(UiEvent::Click {
            target: ClickTarget::Elsewhere,
        });
        assert!(!workbench.view().palette.shown);

        workbench.open_palette();
        workbench.dispatch(UiEvent::PaletteSelect { index: 5 });
        assert_eq!(workbench.theme(), Theme::Light);
        assert!(!workbench.view().palette.shown);
    }

    #[test]
    fn test_effects_are_handed_back_once() {
        let mut workbench = workbench();

        let effects = workbench.open_palette();
        assert_eq!(effects, vec![HostEffect::FocusPaletteInput]);
        workbench.close_palette();
        let outcome = workbench.dispatch(UiEvent::MouseDown);
        assert!(outcome.effects.is_empty());

        let effects = workbench.submit_contact();
        assert_eq!(effects.len(), 1);
        assert!(workbench.take_effects().is_empty());
        assert!(workbench.dispatch(UiEvent::MouseDown).effects.is_empty());
    }

    #[test]
    fn test_viewport_width_at_load() {
        let mut workbench = workbench();
        workbench.set_viewport_width(480);
        workbench.dispatch(UiEvent::SidebarToggle);

        workbench.dispatch(UiEvent::Click {
            target: ClickTarget::ContentArea,
        });
        assert!(!workbench.view().sidebar.shown);
    }

    #[test]
    fn test_focus_trap() {
        let mut workbench = workbench();

        let outcome = workbench.dispatch(key("Tab", 9));
        assert!(!outcome.prevent_default);
        assert_eq!(
            workbench.view().body_classes,
            vec!["dark-theme", "keyboard-focus"]
        );

        workbench.dispatch(UiEvent::PaletteTrigger);
        let outcome = workbench.dispatch(UiEvent::KeyDown(KeyPress::new("Tab", 9).with_shift()));
        assert!(outcome.prevent_default);
        assert_eq!(outcome.effects, vec![HostEffect::FocusPaletteEntry(6)]);

        let outcome = workbench.dispatch(key("Tab", 9));
        assert_eq!(outcome.effects, vec![HostEffect::FocusPaletteInput]);

        workbench.dispatch(UiEvent::MouseDown);
        assert_eq!(workbench.view().body_classes, vec!["dark-theme"]);
    }

    #[test]
    fn test_konami() {
        let mut workbench = workbench();
        for code in KONAMI_CODE {
            workbench.dispatch(UiEvent::KeyDown(KeyPress::new("", code)));
        }

        let view = workbench.view();
        assert_eq!(view.matrix.map(|m| m.glyphs.len()), Some(100));
        assert_eq!(workbench.analytics().count("konami_code"), 1);

        workbench.advance(ms(4999));
        assert!(workbench.view().matrix.is_some());
        workbench.advance(ms(1));
        assert!(workbench.view().matrix.is_none());
    }

    #[test]
    fn test_links() {
        let mut workbench = workbench();

        let outcome = workbench.dispatch(UiEvent::Link {
            href: "#projects".to_string(),
            text: String::new(),
            social: false,
        });
        assert!(outcome.prevent_default);
        assert_eq!(
            outcome.effects,
            vec![HostEffect::ScrollIntoView("projects".to_string())]
        );

        let href = "https://github.com/codefolio".to_string();
        let outcome = workbench.dispatch(UiEvent::Link {
            href: href.clone(),
            text: " GitHub ".to_string(),
            social: true,
        });
        assert!(!outcome.prevent_default);
        assert_eq!(workbench.view().loading_links, vec![href]);
        let events = workbench.analytics().recent();
        assert_eq!(events.last().unwrap().label, "GitHub");

        workbench.advance(ms(1000));
        assert!(workbench.view().loading_links.is_empty());
    }

    #[test]
    fn test_sidebar_and_folders() {
        let mut workbench = workbench();
        workbench.dispatch(UiEvent::Resize { width: 600 });
        workbench.dispatch(UiEvent::SidebarToggle);
        assert!(workbench.view().sidebar.shown);

        workbench.dispatch(UiEvent::Click {
            target: ClickTarget::ContentArea,
        });
        assert!(!workbench.view().sidebar.shown);

        workbench.dispatch(UiEvent::FolderToggle {
            folder: "src".to_string(),
        });
        let view = workbench.view();
        assert!(view.explorer.folders[1].collapsed);
        assert!(view.explorer.folders[1].files.is_empty());
    }

    #[test]
    fn test_clock_is_set_on_initialize() {
        let workbench = workbench();
        let clock = workbench.view().status_bar.clock;
        assert_eq!(clock.len(), 5);
        assert_eq!(&clock[2..3], ":");
    }

    #[test]
    fn test_view_serializes() {
        let mut workbench = workbench();
        workbench.open_tab(TabId::Contact);
        let json = serde_json::to_value(workbench.view()).unwrap();
        assert_eq!(json["tabs"]["active_tab"], "contact");
        assert_eq!(json["theme"]["body_class"], "dark-theme");
        assert_eq!(json["contact"]["phase"], "idle");
    }
}
