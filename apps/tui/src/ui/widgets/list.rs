//! Project list renderer: maps an ordered sequence of project records to
//! styled lines. The output is rebuilt from scratch on every call, so a
//! render with the same input is idempotent.

use crate::domain::Project;
use crate::theme::Palette;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub const PLACEHOLDER: &str = "No projects to show.";

/// Validates a heading tag against levels 1-6; anything else falls back to
/// level 2, matching the renderer contract.
pub fn heading_level(tag: &str) -> u8 {
    match tag {
        "h1" => 1,
        "h2" => 2,
        "h3" => 3,
        "h4" => 4,
        "h5" => 5,
        "h6" => 6,
        _ => 2,
    }
}

fn heading_style(level: u8, palette: &Palette) -> Style {
    let base = Style::default().fg(palette.text);
    match level {
        1 => base.add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        2 => base.add_modifier(Modifier::BOLD),
        3 => base.add_modifier(Modifier::UNDERLINED),
        _ => base.add_modifier(Modifier::ITALIC),
    }
}

/// Renders the records in input order: heading (title, with the year in a
/// distinct inline span when present), an image reference when present, and
/// the description paragraph.
pub fn project_lines(
    projects: &[&Project],
    heading_tag: &str,
    palette: &Palette,
) -> Vec<Line<'static>> {
    if projects.is_empty() {
        return vec![Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(palette.dim_text),
        ))];
    }

    let level = heading_level(heading_tag);
    let mut lines = Vec::new();

    for (index, project) in projects.iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(""));
        }

        let mut heading = vec![Span::styled(
            project.title.clone(),
            heading_style(level, palette),
        )];
        if let Some(year) = project.year {
            heading.push(Span::styled(
                format!(" ({year})"),
                Style::default().fg(palette.dim_text),
            ));
        }
        lines.push(Line::from(heading));

        if let Some(image) = &project.image {
            lines.push(Line::from(Span::styled(
                format!("[image: {image}]"),
                Style::default()
                    .fg(palette.dim_text)
                    .add_modifier(Modifier::ITALIC),
            )));
        }

        let description = project.description.clone().unwrap_or_default();
        lines.push(Line::from(Span::styled(
            description,
            Style::default().fg(palette.text),
        )));
    }

    lines
}
