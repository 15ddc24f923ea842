//! Canvas pie chart. Slice geometry comes from `view::pie`; this module only
//! turns arcs into radial strokes and prints the labels.

use crate::theme::Palette;
use crate::view::pie::{centroid, point_at, EMPHASIS_FACTOR};
use crate::view::Slice;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};
use ratatui::Frame;

/// Angular step between fill strokes. Small enough to read as a filled
/// slice at typical chart sizes.
const STROKE_STEP: f64 = 0.03;

pub fn render_pie(f: &mut Frame<'_>, area: Rect, slices: &[Slice], palette: &Palette) {
    if area.width < 4 || area.height < 4 || slices.is_empty() {
        return;
    }

    let size = area.width.min(area.height);
    let square = Rect {
        x: area.x + (area.width - size) / 2,
        y: area.y + (area.height - size) / 2,
        width: size,
        height: size,
    };

    let text_color = palette.text;

    f.render_widget(
        Canvas::default()
            .paint(move |ctx| {
                let width = f64::from(square.width);
                let height = f64::from(square.height);
                let center_x = width / 2.0;
                let center_y = height / 2.0;
                let base_radius = width.min(height) / 2.0 * 0.85;

                for slice in slices {
                    let radius = if slice.emphasized {
                        base_radius * EMPHASIS_FACTOR
                    } else {
                        base_radius
                    };

                    let mut angle = slice.arc.start;
                    while angle <= slice.arc.end {
                        let (dx, dy) = point_at(angle, radius);
                        ctx.draw(&CanvasLine {
                            x1: center_x,
                            y1: center_y,
                            x2: center_x + dx,
                            y2: center_y + dy,
                            color: slice.color,
                        });
                        angle += STROKE_STEP;
                    }

                    // Closing edge so thin slices always show their bounds.
                    let (dx, dy) = point_at(slice.arc.end, radius);
                    ctx.draw(&CanvasLine {
                        x1: center_x,
                        y1: center_y,
                        x2: center_x + dx,
                        y2: center_y + dy,
                        color: slice.color,
                    });
                }

                // Labels go on top of the strokes, anchored at the base
                // centroid so an enlarged slice never moves its label.
                for slice in slices {
                    let (dx, dy) = centroid(slice.arc, base_radius);
                    ctx.print(
                        center_x + dx,
                        center_y + dy,
                        Line::styled(slice.label.clone(), Style::default().fg(text_color)),
                    );
                }
            })
            .x_bounds([0.0, f64::from(square.width)])
            .y_bounds([0.0, f64::from(square.height)]),
        square,
    );
}
