use crate::application::{App, AppMode, Clock};
use crate::infrastructure::SnapshotRepository;
use crate::presentation::pages::page_for;
use crossterm::event::{KeyCode, KeyModifiers};
use std::path::PathBuf;

/// Routes key presses to the controller according to the current mode.
pub struct InputHandler {
    snapshot_file: PathBuf,
}

impl InputHandler {
    pub fn new(snapshot_file: impl Into<PathBuf>) -> Self {
        Self {
            snapshot_file: snapshot_file.into(),
        }
    }

    pub fn handle_key_event<C: Clock>(&self, app: &mut App<C>, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Browse => self.handle_browse_mode(app, key, modifiers),
            AppMode::GoTo => Self::handle_prompt_mode(app, key, App::<C>::finish_goto),
            AppMode::PostToast => Self::handle_prompt_mode(app, key, App::<C>::finish_post_toast),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_browse_mode<C: Clock>(&self, app: &mut App<C>, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if key == KeyCode::Char('s') {
                let result = SnapshotRepository::export(&app.snapshot(), &self.snapshot_file);
                if let Err(error) = &result {
                    tracing::warn!(%error, "snapshot export failed");
                }
                app.set_export_result(result);
            }
            return;
        }

        let page = page_for(&app.view(), app.role());
        match key {
            KeyCode::Up | KeyCode::Char('k') => app.select_previous_link(page.links.len()),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                app.select_next_link(page.links.len())
            }
            KeyCode::Enter => {
                if let Some(link) = page.links.get(app.selected_link) {
                    app.navigate(&link.path);
                }
            }
            KeyCode::PageDown => app.scroll_down(),
            KeyCode::PageUp => app.scroll_up(),
            KeyCode::Home => app.navigate("/"),
            KeyCode::Char('g') | KeyCode::Char(':') => app.start_goto(),
            KeyCode::Char('t') => app.start_post_toast(),
            KeyCode::Backspace | KeyCode::Delete | KeyCode::Esc => app.dismiss_latest_toast(),
            KeyCode::F(1) | KeyCode::Char('?') => app.open_help(),
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            KeyCode::Char(c) => {
                if let Some(action) = page.action_for(c) {
                    app.show_toast(action.message.clone(), action.severity);
                }
            }
            _ => {}
        }
    }

    fn handle_prompt_mode<C: Clock>(app: &mut App<C>, key: KeyCode, finish: fn(&mut App<C>)) {
        match key {
            KeyCode::Enter => finish(app),
            KeyCode::Esc => app.cancel_prompt(),
            KeyCode::Backspace => app.delete_char(),
            KeyCode::Left => app.move_cursor_left(),
            KeyCode::Right => app.move_cursor_right(),
            KeyCode::Home => app.cursor_position = 0,
            KeyCode::End => app.cursor_position = app.input.chars().count(),
            KeyCode::Char(c) => app.insert_char(c),
            _ => {}
        }
    }

    fn handle_help_mode<C: Clock>(app: &mut App<C>, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.close_help();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.help_scroll = app.help_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}
