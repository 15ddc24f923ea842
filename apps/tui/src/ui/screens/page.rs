use crate::app::App;
use crate::nav::build_nav;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// Stub screen for the pages that exist only as site URLs (contact, CV) and
/// for external entries. Shows where the resolved link points.
pub fn render_page(app: &App, f: &mut Frame<'_>, area: Rect) {
    let palette = app.theme.palette();

    let entries = build_nav(&app.config.base_path, &app.current_path());
    let Some(entry) = entries.get(app.screen.nav_index()) else {
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            entry.title.to_string(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Link: ", Style::default().fg(palette.dim_text)),
            Span::styled(entry.href.clone(), Style::default().fg(palette.accent)),
        ]),
    ];

    if entry.external {
        let rel = entry.rel.unwrap_or_default();
        lines.push(Line::from(Span::styled(
            format!("Opens in a new context (rel=\"{rel}\")."),
            Style::default().fg(palette.dim_text),
        )));
    }

    let block = Block::default()
        .title(format!(" {} ", entry.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
