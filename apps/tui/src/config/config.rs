use crate::nav::default_base_path;
use crate::theme::{Theme, THEME_KEY};
use color_eyre::Result;
use dotenv::dotenv;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolved application configuration, sourced from `.env` / environment
/// variables with CLI overrides applied beforehand.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Dataset source: a local path or an `http(s)://` URL.
    pub projects_source: String,
    /// GitHub username for the profile panel.
    pub github_username: String,
    /// Prefix applied to internal navigation URLs.
    pub base_path: String,
    /// File persisting the theme preference.
    pub theme_store: PathBuf,
}

/// Initializes the application configuration.
pub fn init_app_config() -> Result<AppConfig> {
    // Load environment variables from .env file
    dotenv().ok();

    let projects_source =
        env::var("PROJECTS_SOURCE").unwrap_or_else(|_| "./lib/projects.json".to_string());

    let github_username =
        env::var("GITHUB_USERNAME").unwrap_or_else(|_| "ArtienVoskanian".to_string());

    // Explicit BASE_PATH wins; otherwise derive it from the host the site
    // would be served from (local hosts sit at the root).
    let base_path = env::var("BASE_PATH").unwrap_or_else(|_| {
        let host = env::var("PORTFOLIO_HOST").unwrap_or_else(|_| "localhost".to_string());
        default_base_path(&host).to_string()
    });

    let theme_store = env::var("THEME_STORE")
        .map_or_else(|_| PathBuf::from(format!("./.{THEME_KEY}")), PathBuf::from);

    Ok(AppConfig {
        projects_source,
        github_username,
        base_path,
        theme_store,
    })
}

/// Reads the persisted theme preference. A missing or unreadable store means
/// no explicit override: auto.
pub fn load_theme_preference(store: &Path) -> Theme {
    fs::read_to_string(store).map_or(Theme::Auto, |contents| Theme::parse(&contents))
}

/// Persists the theme preference as a single line under the fixed key file.
pub fn save_theme_preference(store: &Path, theme: Theme) -> Result<()> {
    if let Some(parent) = store.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(store, format!("{}\n", theme.as_str()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_store_means_auto() {
        let dir = tempdir().unwrap();
        let store = dir.path().join("theme");

        assert_eq!(load_theme_preference(&store), Theme::Auto);
    }

    #[test]
    fn preference_round_trips_through_the_store() {
        let dir = tempdir().unwrap();
        let store = dir.path().join("nested").join("theme");

        save_theme_preference(&store, Theme::Dark).unwrap();
        assert_eq!(load_theme_preference(&store), Theme::Dark);

        save_theme_preference(&store, Theme::Auto).unwrap();
        assert_eq!(load_theme_preference(&store), Theme::Auto);
    }

    #[test]
    fn garbage_in_the_store_falls_back_to_auto() {
        let dir = tempdir().unwrap();
        let store = dir.path().join("theme");
        std::fs::write(&store, "mauve\n").unwrap();

        assert_eq!(load_theme_preference(&store), Theme::Auto);
    }
}
