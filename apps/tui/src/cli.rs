use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "portfolio-tui", version, about = "Portfolio TUI")]
pub struct CliArgs {
    /// Print stats and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless stats as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the projects dataset (path or http(s) URL)
    #[arg(long, value_name = "PATH_OR_URL")]
    pub projects: Option<String>,

    /// Override the GitHub username for the profile panel
    #[arg(long, value_name = "NAME")]
    pub user: Option<String>,

    /// Override the navigation base path
    #[arg(long = "base-path", value_name = "PATH")]
    pub base_path: Option<String>,

    /// Override the theme preference store
    #[arg(long = "theme-store", value_name = "PATH")]
    pub theme_store: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(source) = &self.projects {
            std::env::set_var("PROJECTS_SOURCE", source);
        }
        if let Some(user) = &self.user {
            std::env::set_var("GITHUB_USERNAME", user);
        }
        if let Some(path) = &self.base_path {
            std::env::set_var("BASE_PATH", path);
        }
        if let Some(store) = &self.theme_store {
            std::env::set_var("THEME_STORE", store);
        }
        if self.debug && std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "debug");
        }
    }
}
