//! Legend rows for the year aggregates, with a cursor bar standing in for
//! the pointer.

use crate::theme::{dim_color, Palette, ACTIVE_COLOR};
use crate::view::LegendRow;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Swatch glyphs: solid for year rows, open for the "All years" reset row.
const SWATCH: &str = "■ ";
const SWATCH_OPEN: &str = "▢ ";

pub fn legend_lines(
    rows: &[LegendRow],
    cursor: usize,
    palette: &Palette,
) -> Vec<Line<'static>> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| legend_line(row, index == cursor, palette))
        .collect()
}

fn legend_line(row: &LegendRow, under_cursor: bool, palette: &Palette) -> Line<'static> {
    let swatch = match row.color {
        Some(color) => Span::styled(
            SWATCH,
            Style::default().fg(if row.dimmed { dim_color(color) } else { color }),
        ),
        None => Span::styled(SWATCH_OPEN, Style::default().fg(palette.dim_text)),
    };

    let mut label_style = Style::default().fg(if row.dimmed {
        palette.dim_text
    } else {
        palette.text
    });
    if row.active {
        label_style = label_style.fg(ACTIVE_COLOR).add_modifier(Modifier::BOLD);
    }

    let mut spans = vec![
        Span::raw(if under_cursor { "> " } else { "  " }),
        swatch,
        Span::styled(row.label.clone(), label_style),
    ];
    if row.active {
        spans.push(Span::styled(
            " [active]",
            Style::default().fg(ACTIVE_COLOR),
        ));
    }

    let mut line = Line::from(spans);
    if under_cursor {
        line = line.style(Style::default().add_modifier(Modifier::REVERSED));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    fn rows() -> Vec<LegendRow> {
        vec![
            LegendRow {
                year: None,
                label: "All years (3)".to_string(),
                color: None,
                active: false,
                dimmed: false,
            },
            LegendRow {
                year: Some(2020),
                label: "2020 (2)".to_string(),
                color: Some(ACTIVE_COLOR),
                active: true,
                dimmed: false,
            },
        ]
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn one_line_per_row_with_cursor_marker() {
        let lines = legend_lines(&rows(), 1, Theme::Auto.palette());

        assert_eq!(lines.len(), 2);
        assert!(line_text(&lines[0]).starts_with("  ▢ All years (3)"));
        assert!(line_text(&lines[1]).starts_with("> ■ 2020 (2)"));
    }

    #[test]
    fn active_row_is_marked() {
        let lines = legend_lines(&rows(), 0, Theme::Auto.palette());
        assert!(line_text(&lines[1]).ends_with("[active]"));
    }
}
