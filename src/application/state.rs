//! Application state for the navigation shell.
//!
//! [`App`] is the single controller: it owns one navigation engine and one
//! toast manager, plus the small amount of UI state the terminal front end
//! needs (prompt buffer, link selection, scroll offsets).

use std::time::{Duration, Instant};

use super::scheduler::{Clock, SystemClock};
use super::toasts::{DEFAULT_TOAST_TTL, ToastManager};
use crate::domain::{
    DomainError, DomainResult, NavigationEngine, Role, SessionSnapshot, Severity, ToastId,
    ViewTarget,
};

/// Determines how key presses are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Moving between links on the current page
    Browse,
    /// Typing a path to navigate to
    GoTo,
    /// Typing `<severity> <message>` to post a toast
    PostToast,
    /// Help screen is displayed
    Help,
}

/// Splits prompt input of the form `<severity> <message>`.
///
/// # Examples
///
/// ```
/// use paperdesk::application::parse_toast_request;
/// use paperdesk::domain::Severity;
///
/// let (severity, message) = parse_toast_request("error Upload failed").unwrap();
/// assert_eq!(severity, Severity::Error);
/// assert_eq!(message, "Upload failed");
/// ```
pub fn parse_toast_request(input: &str) -> DomainResult<(Severity, String)> {
    let input = input.trim();
    let (severity, message) = input.split_once(char::is_whitespace).unwrap_or((input, ""));
    let severity = severity.parse::<Severity>()?;
    let message = message.trim();
    if message.is_empty() {
        return Err(DomainError::EmptyToastMessage);
    }
    Ok((severity, message.to_string()))
}

/// Main controller holding navigation, toasts and UI state.
///
/// # Examples
///
/// ```
/// use paperdesk::application::App;
/// use paperdesk::domain::Role;
///
/// let mut app = App::default();
/// app.navigate("/admin/users");
/// assert_eq!(app.role(), Role::Admin);
/// ```
#[derive(Debug)]
pub struct App<C: Clock = SystemClock> {
    navigation: NavigationEngine,
    toasts: ToastManager<C>,
    /// Current input mode
    pub mode: AppMode,
    /// Prompt input buffer (go-to and post-toast modes)
    pub input: String,
    /// Cursor position within the input buffer, in chars
    pub cursor_position: usize,
    /// Index of the highlighted link on the current page
    pub selected_link: usize,
    /// First visible line of the page body
    pub scroll: usize,
    /// Scroll position in help text
    pub help_scroll: usize,
}

impl Default for App<SystemClock> {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_TTL)
    }
}

impl App<SystemClock> {
    pub fn new(toast_ttl: Duration) -> Self {
        Self::with_toasts(ToastManager::new(toast_ttl))
    }
}

impl<C: Clock> App<C> {
    pub fn with_toasts(toasts: ToastManager<C>) -> Self {
        Self {
            navigation: NavigationEngine::new(),
            toasts,
            mode: AppMode::Browse,
            input: String::new(),
            cursor_position: 0,
            selected_link: 0,
            scroll: 0,
            help_scroll: 0,
        }
    }

    /// Moves to `path`, updating the role per the navigation rules, and
    /// resets the page to its top.
    pub fn navigate(&mut self, path: &str) {
        self.navigation.navigate(path);
        self.scroll = 0;
        self.selected_link = 0;
    }

    pub fn role(&self) -> Role {
        self.navigation.role()
    }

    pub fn current_path(&self) -> &str {
        self.navigation.current_path()
    }

    pub fn view(&self) -> ViewTarget {
        self.navigation.view()
    }

    pub fn navigation(&self) -> &NavigationEngine {
        &self.navigation
    }

    pub fn toasts(&self) -> &ToastManager<C> {
        &self.toasts
    }

    pub fn show_toast(&mut self, message: impl Into<String>, severity: Severity) {
        self.toasts.show(message, severity);
    }

    pub fn dismiss_toast(&mut self, id: ToastId) {
        self.toasts.dismiss(id);
    }

    pub fn dismiss_latest_toast(&mut self) {
        if let Some(id) = self.toasts.latest() {
            self.toasts.dismiss(id);
        }
    }

    /// Runs deferred work that has come due. Called from the event loop.
    pub fn tick(&mut self) -> Vec<ToastId> {
        self.toasts.expire_due()
    }

    /// Earliest instant at which [`App::tick`] has something to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.toasts.next_deadline()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            path: self.current_path().to_string(),
            role: self.role(),
            view: self.view(),
            toasts: self.toasts.snapshot(),
        }
    }

    /// Reports the outcome of a snapshot export as a toast.
    pub fn set_export_result<E: std::fmt::Display>(&mut self, result: Result<String, E>) {
        match result {
            Ok(filename) => self.show_toast(format!("Snapshot saved to {filename}"), Severity::Success),
            Err(error) => self.show_toast(format!("Snapshot failed: {error}"), Severity::Error),
        }
    }

    /// Opens the go-to prompt pre-filled with the current path.
    pub fn start_goto(&mut self) {
        self.mode = AppMode::GoTo;
        self.input = self.current_path().to_string();
        self.cursor_position = self.input.chars().count();
    }

    /// Navigates to the prompt input. Blank input cancels.
    pub fn finish_goto(&mut self) {
        let path = self.input.trim().to_string();
        self.cancel_prompt();
        if !path.is_empty() {
            self.navigate(&path);
        }
    }

    pub fn start_post_toast(&mut self) {
        self.mode = AppMode::PostToast;
        self.input.clear();
        self.cursor_position = 0;
    }

    /// Posts the prompt input as a toast, or an error toast explaining why
    /// the input was rejected.
    pub fn finish_post_toast(&mut self) {
        let request = parse_toast_request(&self.input);
        self.cancel_prompt();
        match request {
            Ok((severity, message)) => self.show_toast(message, severity),
            Err(error) => self.show_toast(error.to_string(), Severity::Error),
        }
    }

    pub fn cancel_prompt(&mut self) {
        self.mode = AppMode::Browse;
        self.input.clear();
        self.cursor_position = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        let index = self.byte_index();
        self.input.insert(index, c);
        self.cursor_position += 1;
    }

    /// Deletes the char before the cursor.
    pub fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        self.cursor_position -= 1;
        let index = self.byte_index();
        self.input.remove(index);
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor_position = (self.cursor_position + 1).min(self.input.chars().count());
    }

    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor_position)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    /// Moves the link highlight down, wrapping around `link_count`.
    pub fn select_next_link(&mut self, link_count: usize) {
        if link_count > 0 {
            self.selected_link = (self.selected_link + 1) % link_count;
        }
    }

    pub fn select_previous_link(&mut self, link_count: usize) {
        if link_count > 0 {
            self.selected_link = (self.selected_link + link_count - 1) % link_count;
        }
    }

    pub fn scroll_down(&mut self) {
        self.scroll += 1;
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn open_help(&mut self) {
        self.mode = AppMode::Help;
        self.help_scroll = 0;
    }

    pub fn close_help(&mut self) {
        self.mode = AppMode::Browse;
    }
}
