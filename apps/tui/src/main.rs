mod app;
mod cli;
mod config;
mod data;
mod domain;
mod event;
mod nav;
mod terminal;
mod theme;
mod ui;
mod view;

use app::App;
use clap::Parser;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = cli::CliArgs::parse();
    args.apply_env_overrides();

    env_logger::init();

    let app_config = config::init_app_config()?;
    let theme = config::load_theme_preference(&app_config.theme_store);
    let mut app = App::new(app_config.clone(), theme);

    // Both fetches are one-shot and unordered relative to each other; the
    // app starts with whatever arrived.
    let client = reqwest::Client::new();
    let (projects, profile) = tokio::join!(
        data::load_projects(&client, &app_config.projects_source),
        data::fetch_github_profile(&client, &app_config.github_username),
    );

    match projects {
        Ok(list) => app.projects = Some(list),
        Err(e) => log::error!(
            "failed to load projects from {}: {e}",
            app_config.projects_source
        ),
    }
    match profile {
        Ok(fetched) => {
            app.profile = Some(fetched);
            app.profile_fetched_at = Some(chrono::Local::now());
        }
        Err(e) => log::error!(
            "failed to fetch GitHub profile for {}: {e}",
            app_config.github_username
        ),
    }

    if args.headless || !is_terminal() {
        return event::run_headless(&app, args.json);
    }

    // Setup terminal
    let mut terminal = terminal::setup()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app);

    // Restore terminal
    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
