//! Interaction state machine for the projects screen.
//!
//! The lock holds the single active year; hover is transient visual state
//! that only exists while unlocked. Toggle and hover rules live here so the
//! transitions are testable on their own, away from any rendering.

use std::fmt;

/// At most one year can be active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lock {
    #[default]
    Unlocked,
    Locked(i32),
}

impl Lock {
    /// Click semantics shared by the legend and the slices: selecting the
    /// already-locked year unlocks, anything else locks that year.
    pub const fn toggle(self, year: i32) -> Self {
        match self {
            Self::Locked(active) if active == year => Self::Unlocked,
            _ => Self::Locked(year),
        }
    }

    pub const fn active_year(self) -> Option<i32> {
        match self {
            Self::Unlocked => None,
            Self::Locked(year) => Some(year),
        }
    }

    pub const fn is_locked(self) -> bool {
        matches!(self, Self::Locked(_))
    }

    /// Hover emphasis is suppressed while a year is locked.
    pub const fn hover_allowed(self) -> bool {
        matches!(self, Self::Unlocked)
    }
}

impl fmt::Display for Lock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlocked => write!(f, "Unlocked"),
            Self::Locked(year) => write!(f, "Locked({year})"),
        }
    }
}

/// User actions that can change what the projects screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// A search keystroke replaced the query text.
    SearchChanged(String),
    /// Legend row selected; `None` is the synthetic "All years" row.
    LegendToggle(Option<i32>),
    /// Slice selected; identical toggle semantics to the legend.
    SliceToggle(i32),
    HoverEnter(i32),
    HoverLeave,
}

/// What a processed event requires of the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// Recompute subset, aggregates, legend, chart, and list.
    Full,
    /// Only hover emphasis changed.
    Hover,
    /// Nothing changed (the event was suppressed).
    None,
}

/// The two filter values plus the transient hover, owned by the app and
/// passed into the pure derivation functions.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub lock: Lock,
    pub query: String,
    pub hovered: Option<i32>,
}

impl FilterState {
    pub fn apply(&mut self, event: ViewEvent) -> Refresh {
        match event {
            ViewEvent::SearchChanged(query) => {
                self.query = query;
                Refresh::Full
            }
            ViewEvent::LegendToggle(None) => {
                self.lock = Lock::Unlocked;
                self.hovered = None;
                Refresh::Full
            }
            ViewEvent::LegendToggle(Some(year)) | ViewEvent::SliceToggle(year) => {
                self.lock = self.lock.toggle(year);
                self.hovered = None;
                Refresh::Full
            }
            ViewEvent::HoverEnter(year) => {
                if !self.lock.hover_allowed() {
                    return Refresh::None;
                }
                self.hovered = Some(year);
                Refresh::Hover
            }
            ViewEvent::HoverLeave => {
                if !self.lock.hover_allowed() {
                    return Refresh::None;
                }
                self.hovered = None;
                Refresh::Hover
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_the_same_year_twice_is_idempotent() {
        let lock = Lock::Unlocked.toggle(2020);
        assert_eq!(lock, Lock::Locked(2020));
        assert_eq!(lock.toggle(2020), Lock::Unlocked);
    }

    #[test]
    fn toggling_a_different_year_moves_the_lock() {
        let lock = Lock::Locked(2020).toggle(2021);
        assert_eq!(lock, Lock::Locked(2021));
    }

    #[test]
    fn slice_and_legend_toggles_share_semantics() {
        let mut by_legend = FilterState::default();
        let mut by_slice = FilterState::default();

        by_legend.apply(ViewEvent::LegendToggle(Some(2020)));
        by_slice.apply(ViewEvent::SliceToggle(2020));

        assert_eq!(by_legend.lock, by_slice.lock);
    }

    #[test]
    fn all_years_row_always_clears_the_lock() {
        let mut state = FilterState::default();
        state.apply(ViewEvent::SliceToggle(2020));

        assert_eq!(state.apply(ViewEvent::LegendToggle(None)), Refresh::Full);
        assert_eq!(state.lock, Lock::Unlocked);
    }

    #[test]
    fn hover_is_suppressed_while_locked() {
        let mut state = FilterState::default();
        state.apply(ViewEvent::SliceToggle(2020));

        assert_eq!(state.apply(ViewEvent::HoverEnter(2021)), Refresh::None);
        assert_eq!(state.hovered, None);

        assert_eq!(state.apply(ViewEvent::HoverLeave), Refresh::None);
    }

    #[test]
    fn hover_marks_and_clears_while_unlocked() {
        let mut state = FilterState::default();

        assert_eq!(state.apply(ViewEvent::HoverEnter(2021)), Refresh::Hover);
        assert_eq!(state.hovered, Some(2021));

        assert_eq!(state.apply(ViewEvent::HoverLeave), Refresh::Hover);
        assert_eq!(state.hovered, None);
    }

    #[test]
    fn locking_clears_any_pending_hover() {
        let mut state = FilterState::default();
        state.apply(ViewEvent::HoverEnter(2020));
        state.apply(ViewEvent::SliceToggle(2021));

        assert_eq!(state.hovered, None);
        assert_eq!(state.lock, Lock::Locked(2021));
    }

    #[test]
    fn search_keystrokes_request_a_full_resync() {
        let mut state = FilterState::default();
        assert_eq!(
            state.apply(ViewEvent::SearchChanged("dash".to_string())),
            Refresh::Full
        );
        assert_eq!(state.query, "dash");
    }
}
