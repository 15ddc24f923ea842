//! The view synchronizer: one pure function from (dataset, filter state) to
//! everything the projects screen draws. A full resync rebuilds this model
//! from scratch; rendering then has no state of its own.

use crate::domain::{visible_projects, year_counts, Project, YearCount};
use crate::theme::{dim_color, slice_color};
use crate::view::lock::FilterState;
use crate::view::pie::{self, Arc};
use ratatui::style::Color;

/// One legend row. `year == None` is the synthetic "All years" reset row.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendRow {
    pub year: Option<i32>,
    pub label: String,
    pub color: Option<Color>,
    pub active: bool,
    pub dimmed: bool,
}

/// One chart slice, keyed by year identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub year: i32,
    pub count: usize,
    pub arc: Arc,
    pub color: Color,
    pub label: String,
    pub emphasized: bool,
    pub dimmed: bool,
}

/// Everything a render pass needs, derived fresh on every state change.
#[derive(Debug)]
pub struct ViewModel<'a> {
    /// Post-filter subset (year lock + search), original order; feeds the
    /// project list.
    pub visible: Vec<&'a Project>,
    /// Aggregates of the search-filtered subset, ascending by year; feeds
    /// the legend and the chart so a locked year dims the rest instead of
    /// removing them.
    pub counts: Vec<YearCount>,
    pub legend: Vec<LegendRow>,
    pub slices: Vec<Slice>,
}

pub fn build_view_model<'a>(all: &'a [Project], filter: &FilterState) -> ViewModel<'a> {
    let visible = visible_projects(all, filter.lock.active_year(), &filter.query);

    let chart_subset = visible_projects(all, None, &filter.query);
    let counts = year_counts(&chart_subset);

    let hovered = if filter.lock.hover_allowed() {
        filter.hovered
    } else {
        None
    };

    let legend = build_legend(&counts, filter, visible.len(), hovered);
    let slices = build_slices(&counts, filter, hovered);

    ViewModel {
        visible,
        counts,
        legend,
        slices,
    }
}

fn build_legend(
    counts: &[YearCount],
    filter: &FilterState,
    visible_count: usize,
    hovered: Option<i32>,
) -> Vec<LegendRow> {
    let mut rows = Vec::with_capacity(counts.len() + 1);

    rows.push(LegendRow {
        year: None,
        label: format!("All years ({visible_count})"),
        color: None,
        active: false,
        dimmed: false,
    });

    for (index, entry) in counts.iter().enumerate() {
        let is_active = filter.lock.active_year() == Some(entry.year);
        let base = slice_color(index, is_active);

        rows.push(LegendRow {
            year: Some(entry.year),
            label: format!("{} ({})", entry.year, entry.count),
            color: Some(base),
            active: is_active,
            dimmed: is_dimmed(entry.year, is_active, filter, hovered),
        });
    }

    rows
}

fn build_slices(counts: &[YearCount], filter: &FilterState, hovered: Option<i32>) -> Vec<Slice> {
    let arcs = pie::layout(counts);

    counts
        .iter()
        .zip(arcs)
        .enumerate()
        .map(|(index, (entry, arc))| {
            let is_active = filter.lock.active_year() == Some(entry.year);
            let dimmed = is_dimmed(entry.year, is_active, filter, hovered);
            let base = slice_color(index, is_active);

            Slice {
                year: entry.year,
                count: entry.count,
                arc,
                color: if dimmed { dim_color(base) } else { base },
                // Label text never changes with active state.
                label: format!("{}: {}", entry.year, entry.count),
                emphasized: is_active || hovered == Some(entry.year),
                dimmed,
            }
        })
        .collect()
}

/// While locked, everything except the active year dims; while hovering,
/// everything except the hovered year dims.
fn is_dimmed(year: i32, is_active: bool, filter: &FilterState, hovered: Option<i32>) -> bool {
    if filter.lock.is_locked() {
        return !is_active;
    }
    hovered.is_some_and(|h| h != year)
}
