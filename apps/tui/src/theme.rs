//! Color scheme handling: the `{auto, light, dark}` selector plus the slice
//! palette used by the pie chart and the legend.

use ratatui::style::Color;

/// Storage key under which the preference is persisted.
pub const THEME_KEY: &str = "color-scheme-preference";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Auto,
    Light,
    Dark,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Absence or an unrecognized value both fall back to auto.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "light" => Self::Light,
            "dark" => Self::Dark,
            _ => Self::Auto,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Auto => "Automatic",
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// Cycle order shown in the selector.
    pub const fn next(self) -> Self {
        match self {
            Self::Auto => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::Auto,
        }
    }

    pub const fn palette(self) -> &'static Palette {
        match self {
            // Auto carries no explicit override; the terminal defaults govern.
            Self::Auto => &AUTO,
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }
}

/// Colors for one scheme. `text`/`background` stay `Reset` in the auto
/// palette so the terminal's own scheme shows through.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub text: Color,
    pub dim_text: Color,
    pub background: Color,
    pub border: Color,
    pub accent: Color,
}

const AUTO: Palette = Palette {
    text: Color::Reset,
    dim_text: Color::DarkGray,
    background: Color::Reset,
    border: Color::Cyan,
    accent: Color::Cyan,
};

const LIGHT: Palette = Palette {
    text: Color::Black,
    dim_text: Color::Rgb(0x72, 0x71, 0x69),
    background: Color::Rgb(0xF2, 0xEF, 0xE7),
    border: Color::Rgb(0x3B, 0x82, 0xF6),
    accent: Color::Rgb(0x0C, 0x25, 0xC3),
};

const DARK: Palette = Palette {
    text: Color::Rgb(0xC5, 0xC9, 0xC5),
    dim_text: Color::Rgb(0x72, 0x71, 0x69),
    background: Color::Rgb(0x18, 0x16, 0x16),
    border: Color::Rgb(0x8B, 0xA4, 0xB0),
    accent: Color::Rgb(0x7F, 0xB4, 0xCA),
};

/// Base slice colors, keyed by position in the aggregate sequence.
pub const SLICE_COLORS: &[Color] = &[
    Color::Rgb(0x3B, 0x82, 0xF6), // blue
    Color::Rgb(0x4D, 0xB3, 0xE9), // pale green-blue
    Color::Rgb(0x0C, 0x25, 0xC3), // deep blue
];

/// Highlight color for the locked year.
pub const ACTIVE_COLOR: Color = Color::Rgb(0xEF, 0x44, 0x44);

/// Deterministic palette lookup; the active year always takes the highlight
/// color regardless of position.
pub fn slice_color(index: usize, is_active: bool) -> Color {
    if is_active {
        return ACTIVE_COLOR;
    }
    SLICE_COLORS[index % SLICE_COLORS.len()]
}

/// Dimmed variant of a slice color, for non-active slices while a year is
/// locked or another slice is hovered.
pub fn dim_color(color: Color) -> Color {
    if let Color::Rgb(r, g, b) = color {
        Color::Rgb(r / 2, g / 2, b / 2)
    } else {
        color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults_to_auto() {
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse(" dark \n"), Theme::Dark);
        assert_eq!(Theme::parse(""), Theme::Auto);
        assert_eq!(Theme::parse("solarized"), Theme::Auto);
    }

    #[test]
    fn parse_round_trips_as_str() {
        for theme in [Theme::Auto, Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), theme);
        }
    }

    #[test]
    fn selector_cycle_visits_all_three() {
        let start = Theme::Auto;
        assert_eq!(start.next().next().next(), start);
    }

    #[test]
    fn palette_keys_by_position_and_active_wins() {
        assert_eq!(slice_color(0, false), SLICE_COLORS[0]);
        assert_eq!(slice_color(SLICE_COLORS.len(), false), SLICE_COLORS[0]);
        assert_eq!(slice_color(1, true), ACTIVE_COLOR);
    }

    #[test]
    fn dimming_halves_rgb_channels() {
        assert_eq!(
            dim_color(Color::Rgb(0x80, 0x40, 0x20)),
            Color::Rgb(0x40, 0x20, 0x10)
        );
        // Named colors pass through untouched.
        assert_eq!(dim_color(Color::Cyan), Color::Cyan);
    }
}
