// UI module for portfolio-tui
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::{App, AppScreen};
use crate::nav::build_nav;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Tabs};
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let palette = app.theme.palette();

    // Explicit light/dark override paints the whole frame; auto leaves the
    // terminal's own colors in place.
    if palette.background != Color::Reset {
        f.render_widget(
            Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
            f.area(),
        );
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Nav bar
            Constraint::Length(1), // Theme + status line
            Constraint::Min(5),    // Screen content
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area());

    render_nav(app, f, chunks[0]);
    render_status_line(app, f, chunks[1]);

    match app.screen {
        AppScreen::Home => screens::home::render_home(app, f, chunks[2]),
        AppScreen::Projects => screens::projects::render_projects(app, f, chunks[2]),
        AppScreen::Contact | AppScreen::Cv | AppScreen::Github => {
            screens::page::render_page(app, f, chunks[2]);
        }
    }

    render_shortcuts(app, f, chunks[3]);
}

fn render_nav(app: &App, f: &mut Frame<'_>, area: Rect) {
    let palette = app.theme.palette();
    let entries = build_nav(&app.config.base_path, &app.current_path());

    let titles = entries
        .iter()
        .map(|entry| {
            let mut style = Style::default().fg(palette.dim_text);
            if entry.current {
                style = style.fg(palette.accent).add_modifier(Modifier::UNDERLINED);
            }
            let label = if entry.external {
                format!("{} ↗", entry.title)
            } else {
                entry.title.to_string()
            };
            Line::from(Span::styled(label, style))
        })
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .select(app.screen.nav_index())
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));

    f.render_widget(tabs, area);
}

fn render_status_line(app: &App, f: &mut Frame<'_>, area: Rect) {
    let palette = app.theme.palette();

    let line = Line::from(vec![
        Span::styled("Theme: ", Style::default().fg(palette.dim_text)),
        Span::styled(app.theme.label(), Style::default().fg(palette.accent)),
        Span::styled("  ", Style::default()),
        Span::styled(
            app.status_message.clone(),
            Style::default().fg(palette.dim_text),
        ),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

fn render_shortcuts(app: &App, f: &mut Frame<'_>, area: Rect) {
    let palette = app.theme.palette();

    let text = match app.screen {
        AppScreen::Projects if app.searching => "type to filter   Enter/Esc: leave search",
        AppScreen::Projects => {
            "/: search   ↑/↓: hover   Enter: lock/unlock year   Esc: all years   Tab: screens   t: theme   q: quit"
        }
        _ => "Tab: screens   1-5: jump   t: theme   q: quit",
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(palette.dim_text),
    )))
    .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(paragraph, area);
}
