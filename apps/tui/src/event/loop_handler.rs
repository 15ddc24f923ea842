use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;

use crate::app::{handle_input, App};
use crate::domain::{latest, visible_projects, year_counts, YearCount};
use crate::ui;

/// Run the main application event loop.
pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    loop {
        // Each draw is a full resync of every surface from current state.
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_))
                | Err(_) => {
                    // Ignore non-key events
                }
            }
        }
    }

    Ok(())
}

/// Run without a terminal UI: print dataset stats and exit.
pub fn run_headless(app: &App, json: bool) -> Result<()> {
    if app.projects.is_none() {
        println!("No dataset available.");
        return Ok(());
    }

    let stats = build_headless_stats(app);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        render_headless_stats(&stats);
    }

    Ok(())
}

fn render_headless_stats(stats: &HeadlessStats) {
    println!("\nPortfolio Stats");
    println!("===============");
    println!("Total projects: {}", stats.total_projects);

    println!("\nProjects by Year:");
    for entry in &stats.by_year {
        println!("- {}: {}", entry.year, entry.count);
    }

    println!("\nLatest Projects:");
    for project in &stats.latest {
        match project.year {
            Some(year) => println!("- {} ({year})", project.title),
            None => println!("- {}", project.title),
        }
    }
}

fn build_headless_stats(app: &App) -> HeadlessStats {
    let dataset = app.dataset();
    let subset = visible_projects(dataset, None, "");

    let latest = latest(dataset, 3)
        .iter()
        .map(|project| HeadlessProject {
            title: project.title.clone(),
            year: project.year,
        })
        .collect();

    HeadlessStats {
        total_projects: dataset.len(),
        by_year: year_counts(&subset),
        latest,
    }
}

#[derive(serde::Serialize)]
struct HeadlessStats {
    total_projects: usize,
    by_year: Vec<YearCount>,
    latest: Vec<HeadlessProject>,
}

#[derive(serde::Serialize)]
struct HeadlessProject {
    title: String,
    year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::domain::Project;
    use crate::theme::Theme;
    use std::path::PathBuf;

    fn test_app() -> App {
        let config = AppConfig {
            projects_source: "./lib/projects.json".to_string(),
            github_username: "someone".to_string(),
            base_path: "/".to_string(),
            theme_store: PathBuf::from("./theme"),
        };
        let mut app = App::new(config, Theme::Auto);
        app.projects = Some(vec![
            Project::new("Newest", Some(2024)),
            Project::new("Middle", Some(2024)),
            Project::new("Oldest", Some(2020)),
            Project::new("Undated", None),
        ]);
        app
    }

    #[test]
    fn stats_cover_totals_counts_and_latest() {
        let app = test_app();
        let stats = build_headless_stats(&app);

        assert_eq!(stats.total_projects, 4);
        assert_eq!(stats.by_year.len(), 2);
        assert_eq!(stats.by_year[0].year, 2020);
        assert_eq!(stats.by_year[1].count, 2);

        let titles: Vec<&str> = stats.latest.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Newest", "Middle", "Oldest"]);
    }

    #[test]
    fn stats_serialize_to_json() {
        let app = test_app();
        let stats = build_headless_stats(&app);

        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"total_projects\":4"));
        assert!(json.contains("\"year\":2020"));
    }
}
