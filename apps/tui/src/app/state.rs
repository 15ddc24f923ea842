use crate::config::AppConfig;
use crate::data::GithubProfile;
use crate::domain::{visible_projects, year_counts, Project};
use crate::theme::Theme;
use crate::view::FilterState;
use chrono::{DateTime, Local};

/// Screens mirror the nav page list one-to-one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppScreen {
    #[default]
    Home,
    Projects,
    Contact,
    Cv,
    Github,
}

impl AppScreen {
    pub const fn nav_index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::Projects => 1,
            Self::Contact => 2,
            Self::Cv => 3,
            Self::Github => 4,
        }
    }

    pub const fn from_nav_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Home),
            1 => Some(Self::Projects),
            2 => Some(Self::Contact),
            3 => Some(Self::Cv),
            4 => Some(Self::Github),
            _ => None,
        }
    }

    /// Relative URL of the page this screen stands in for.
    pub const fn relative_url(self) -> &'static str {
        match self {
            Self::Home | Self::Github => "",
            Self::Projects => "projects/",
            Self::Contact => "contact/",
            Self::Cv => "cv/",
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Home => Self::Projects,
            Self::Projects => Self::Contact,
            Self::Contact => Self::Cv,
            Self::Cv => Self::Github,
            Self::Github => Self::Home,
        }
    }

    pub const fn prev(self) -> Self {
        match self {
            Self::Home => Self::Github,
            Self::Projects => Self::Home,
            Self::Contact => Self::Projects,
            Self::Cv => Self::Contact,
            Self::Github => Self::Cv,
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub config: AppConfig,
    pub theme: Theme,
    /// `None` when the dataset fetch failed; the projects screen degrades to
    /// a placeholder instead of crashing.
    pub projects: Option<Vec<Project>>,
    pub profile: Option<GithubProfile>,
    pub profile_fetched_at: Option<DateTime<Local>>,
    pub filter: FilterState,
    /// Cursor over the legend rows; row 0 is "All years".
    pub legend_cursor: usize,
    pub list_scroll: usize,
    pub searching: bool,
    pub status_message: String,
}

impl App {
    pub fn new(config: AppConfig, theme: Theme) -> Self {
        Self {
            running: true,
            screen: AppScreen::Home,
            config,
            theme,
            projects: None,
            profile: None,
            profile_fetched_at: None,
            filter: FilterState::default(),
            legend_cursor: 0,
            list_scroll: 0,
            searching: false,
            status_message: String::new(),
        }
    }

    pub fn dataset(&self) -> &[Project] {
        self.projects.as_deref().unwrap_or_default()
    }

    pub fn total_projects(&self) -> usize {
        self.dataset().len()
    }

    /// Number of legend rows under the current query: the "All years" row
    /// plus one per aggregate year.
    pub fn legend_len(&self) -> usize {
        let subset = visible_projects(self.dataset(), None, &self.filter.query);
        year_counts(&subset).len() + 1
    }

    /// Year under the legend cursor; `None` for the "All years" row.
    pub fn cursor_year(&self) -> Option<i32> {
        if self.legend_cursor == 0 {
            return None;
        }
        let subset = visible_projects(self.dataset(), None, &self.filter.query);
        year_counts(&subset)
            .get(self.legend_cursor - 1)
            .map(|entry| entry.year)
    }

    pub fn clamp_legend_cursor(&mut self) {
        let last = self.legend_len().saturating_sub(1);
        if self.legend_cursor > last {
            self.legend_cursor = last;
        }
    }

    /// Path of the current screen as the nav model sees it, for current-page
    /// marking.
    pub fn current_path(&self) -> String {
        format!("{}{}", self.config.base_path, self.screen.relative_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ViewEvent;
    use std::path::PathBuf;

    fn test_app() -> App {
        let config = AppConfig {
            projects_source: "./lib/projects.json".to_string(),
            github_username: "someone".to_string(),
            base_path: "/portfolio/".to_string(),
            theme_store: PathBuf::from("./theme"),
        };
        let mut app = App::new(config, Theme::Auto);
        app.projects = Some(vec![
            Project::new("A", Some(2020)),
            Project::new("B", Some(2020)),
            Project::new("C", Some(2021)),
        ]);
        app
    }

    #[test]
    fn screen_and_nav_indices_round_trip() {
        for index in 0..5 {
            let screen = AppScreen::from_nav_index(index).unwrap();
            assert_eq!(screen.nav_index(), index);
        }
        assert_eq!(AppScreen::from_nav_index(5), None);
    }

    #[test]
    fn screen_cycle_visits_every_screen() {
        let mut screen = AppScreen::Home;
        for _ in 0..5 {
            screen = screen.next();
        }
        assert_eq!(screen, AppScreen::Home);
        assert_eq!(AppScreen::Home.prev(), AppScreen::Github);
    }

    #[test]
    fn legend_length_tracks_the_query() {
        let mut app = test_app();
        assert_eq!(app.legend_len(), 3); // All years + 2020 + 2021

        app.filter.apply(ViewEvent::SearchChanged("C".to_string()));
        assert_eq!(app.legend_len(), 2); // All years + 2021
    }

    #[test]
    fn cursor_year_resolves_against_current_aggregates() {
        let mut app = test_app();
        assert_eq!(app.cursor_year(), None);

        app.legend_cursor = 1;
        assert_eq!(app.cursor_year(), Some(2020));

        app.legend_cursor = 2;
        assert_eq!(app.cursor_year(), Some(2021));

        app.legend_cursor = 9;
        assert_eq!(app.cursor_year(), None);
        app.clamp_legend_cursor();
        assert_eq!(app.legend_cursor, 2);
    }

    #[test]
    fn missing_dataset_degrades_to_empty() {
        let mut app = test_app();
        app.projects = None;

        assert_eq!(app.total_projects(), 0);
        assert_eq!(app.legend_len(), 1);
    }

    #[test]
    fn current_path_combines_base_path_and_screen() {
        let mut app = test_app();
        app.screen = AppScreen::Projects;
        assert_eq!(app.current_path(), "/portfolio/projects/");
    }
}
