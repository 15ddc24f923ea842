use crate::app::state::{App, AppScreen};
use crate::config::save_theme_preference;
use crate::view::ViewEvent;
use crossterm::event::KeyCode;

pub fn handle_input(app: &mut App, key: KeyCode) {
    if app.searching && app.screen == AppScreen::Projects {
        handle_search_input(app, key);
        return;
    }

    if handle_global_input(app, key) {
        return;
    }

    if app.screen == AppScreen::Projects {
        handle_projects_input(app, key);
    }
}

fn handle_global_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => {
            app.running = false;
            true
        }
        KeyCode::Tab => {
            app.screen = app.screen.next();
            true
        }
        KeyCode::BackTab => {
            app.screen = app.screen.prev();
            true
        }
        KeyCode::Char(c @ '1'..='5') => {
            let index = (c as usize) - ('1' as usize);
            if let Some(screen) = AppScreen::from_nav_index(index) {
                app.screen = screen;
            }
            true
        }
        KeyCode::Char('t') => {
            cycle_theme(app);
            true
        }
        _ => false,
    }
}

fn cycle_theme(app: &mut App) {
    app.theme = app.theme.next();
    app.status_message = format!("Theme: {}", app.theme.label());

    // Persist the selection; a write failure costs only the persistence.
    if let Err(e) = save_theme_preference(&app.config.theme_store, app.theme) {
        log::error!("failed to persist theme preference: {e}");
        app.status_message = format!("Theme: {} (not saved)", app.theme.label());
    }
}

/// Keystrokes while the search box has focus. Every edit is a live filter
/// change and triggers a full resync on the next draw.
fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::Enter => {
            app.searching = false;
        }
        KeyCode::Char(c) => {
            let mut query = app.filter.query.clone();
            query.push(c);
            app.filter.apply(ViewEvent::SearchChanged(query));
            after_query_change(app);
        }
        KeyCode::Backspace => {
            let mut query = app.filter.query.clone();
            query.pop();
            app.filter.apply(ViewEvent::SearchChanged(query));
            after_query_change(app);
        }
        _ => {}
    }
}

/// The aggregates may have shifted under the cursor; keep it in bounds and
/// re-announce what it now points at.
fn after_query_change(app: &mut App) {
    app.clamp_legend_cursor();
    app.list_scroll = 0;
    sync_hover_to_cursor(app);
}

fn handle_projects_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('/') => {
            app.searching = true;
        }
        KeyCode::Up => {
            app.legend_cursor = app.legend_cursor.saturating_sub(1);
            sync_hover_to_cursor(app);
        }
        KeyCode::Down => {
            let last = app.legend_len().saturating_sub(1);
            if app.legend_cursor < last {
                app.legend_cursor += 1;
            }
            sync_hover_to_cursor(app);
        }
        KeyCode::Home => {
            app.legend_cursor = 0;
            sync_hover_to_cursor(app);
        }
        KeyCode::End => {
            app.legend_cursor = app.legend_len().saturating_sub(1);
            sync_hover_to_cursor(app);
        }
        KeyCode::Enter => {
            app.filter.apply(ViewEvent::LegendToggle(app.cursor_year()));
            app.list_scroll = 0;
        }
        KeyCode::Esc => {
            app.filter.apply(ViewEvent::LegendToggle(None));
            app.list_scroll = 0;
        }
        KeyCode::PageDown => {
            app.list_scroll = app.list_scroll.saturating_add(5);
        }
        KeyCode::PageUp => {
            app.list_scroll = app.list_scroll.saturating_sub(5);
        }
        _ => {}
    }
}

/// Cursor movement is the hover analog: entering a year row emphasizes that
/// slice, the "All years" row reads as leaving the chart. The state machine
/// suppresses both while a year is locked.
fn sync_hover_to_cursor(app: &mut App) {
    match app.cursor_year() {
        Some(year) => app.filter.apply(ViewEvent::HoverEnter(year)),
        None => app.filter.apply(ViewEvent::HoverLeave),
    };
}
