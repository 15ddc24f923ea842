use crate::app::App;
use crate::domain::latest;
use crate::ui::widgets::list::project_lines;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// How many entries the home screen shows; the dataset is newest-first.
const LATEST_COUNT: usize = 3;

pub fn render_home(app: &App, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_latest_projects(app, f, chunks[0]);
    render_profile_stats(app, f, chunks[1]);
}

fn render_latest_projects(app: &App, f: &mut Frame<'_>, area: Rect) {
    let palette = app.theme.palette();

    let newest = latest(app.dataset(), LATEST_COUNT);
    let refs: Vec<_> = newest.iter().collect();
    let lines = project_lines(&refs, "h2", palette);

    let block = Block::default()
        .title(" Latest Projects ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_profile_stats(app: &App, f: &mut Frame<'_>, area: Rect) {
    let palette = app.theme.palette();

    let block = Block::default()
        .title(" GitHub Profile ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    let lines = app.profile.map_or_else(
        || {
            vec![Line::from(Span::styled(
                "Profile unavailable.",
                Style::default().fg(palette.dim_text),
            ))]
        },
        |profile| {
            let mut lines = vec![
                Line::from(Span::styled(
                    app.config.github_username.clone(),
                    Style::default()
                        .fg(palette.text)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                stat_line("Public Repos", profile.public_repos, app),
                stat_line("Public Gists", profile.public_gists, app),
                stat_line("Followers", profile.followers, app),
                stat_line("Following", profile.following, app),
            ];

            if let Some(fetched_at) = app.profile_fetched_at {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("fetched {}", fetched_at.format("%H:%M")),
                    Style::default().fg(palette.dim_text),
                )));
            }

            lines
        },
    );

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn stat_line(name: &str, value: u64, app: &App) -> Line<'static> {
    let palette = app.theme.palette();
    Line::from(vec![
        Span::styled(
            format!("{name}: "),
            Style::default().fg(palette.dim_text),
        ),
        Span::styled(value.to_string(), Style::default().fg(palette.text)),
    ])
}
