//! The projects screen: search box, project list, pie chart, and legend, all
//! rendered from one view model so every surface reflects the same filter
//! state on every draw.

use crate::app::App;
use crate::ui::widgets::legend::legend_lines;
use crate::ui::widgets::list::project_lines;
use crate::ui::widgets::pie::render_pie;
use crate::ui::widgets::scroll::scroll_offset;
use crate::view::{build_view_model, ViewModel};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_projects(app: &App, f: &mut Frame<'_>, area: Rect) {
    // Full resync: subset, aggregates, legend, and slices are recomputed
    // from scratch for the current filter state.
    let model = build_view_model(app.dataset(), &app.filter);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(5)])
        .split(area);

    render_header(app, f, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_list(app, &model, f, body[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(body[1]);

    render_chart(app, &model, f, right[0]);
    render_legend(app, &model, f, right[1]);
}

fn render_header(app: &App, f: &mut Frame<'_>, area: Rect) {
    let palette = app.theme.palette();

    let title = Line::from(Span::styled(
        format!("{} Projects", app.total_projects()),
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
    ));

    let search = if app.searching {
        Line::from(vec![
            Span::styled("Search: ", Style::default().fg(palette.accent)),
            Span::styled(app.filter.query.clone(), Style::default().fg(palette.text)),
            Span::styled("█", Style::default().fg(palette.accent)),
        ])
    } else if app.filter.query.is_empty() {
        Line::from(Span::styled(
            "Search: (press / to search)",
            Style::default().fg(palette.dim_text),
        ))
    } else {
        Line::from(vec![
            Span::styled("Search: ", Style::default().fg(palette.dim_text)),
            Span::styled(app.filter.query.clone(), Style::default().fg(palette.text)),
        ])
    };

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.border));

    f.render_widget(Paragraph::new(vec![title, search]).block(block), area);
}

fn render_list(app: &App, model: &ViewModel<'_>, f: &mut Frame<'_>, area: Rect) {
    let palette = app.theme.palette();

    let lines = project_lines(&model.visible, "h2", palette);

    let block = Block::default()
        .title(format!(
            " Projects ({} visible) ",
            model.visible.len()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    let max_scroll = lines.len().saturating_sub(1);
    let scroll = u16::try_from(app.list_scroll.min(max_scroll)).unwrap_or(u16::MAX);

    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .scroll((scroll, 0)),
        area,
    );
}

fn render_chart(app: &App, model: &ViewModel<'_>, f: &mut Frame<'_>, area: Rect) {
    let palette = app.theme.palette();

    let block = Block::default()
        .title(" Projects by Year ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if model.slices.is_empty() {
        let paragraph = Paragraph::new("No projects to chart")
            .style(Style::default().fg(palette.dim_text))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, inner);
        return;
    }

    render_pie(f, inner, &model.slices, palette);
}

fn render_legend(app: &App, model: &ViewModel<'_>, f: &mut Frame<'_>, area: Rect) {
    let palette = app.theme.palette();

    let block = Block::default()
        .title(" Legend ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = legend_lines(&model.legend, app.legend_cursor, palette);

    let visible_rows = inner.height as usize;
    let offset = scroll_offset(lines.len(), visible_rows.max(1), app.legend_cursor);
    let scroll = u16::try_from(offset).unwrap_or(u16::MAX);

    f.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}
