use color_eyre::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{stdout, Stdout};

/// Puts the terminal into raw mode on the alternate screen and hands back a
/// ready backend. On failure, anything already enabled is rolled back.
pub fn setup() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;

    if let Err(e) = execute!(stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    let backend = CrosstermBackend::new(stdout());
    match Terminal::new(backend) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            cleanup(true, true);
            Err(e.into())
        }
    }
}

/// Restores the terminal state acquired by `setup`. Failures are logged and
/// otherwise ignored: there is nothing further to do on the way out.
pub fn cleanup(raw_mode: bool, alternate_screen: bool) {
    if alternate_screen {
        if let Err(e) = execute!(stdout(), LeaveAlternateScreen) {
            log::debug!("failed to leave alternate screen: {e}");
        }
    }

    if raw_mode {
        if let Err(e) = disable_raw_mode() {
            log::debug!("failed to disable raw mode: {e}");
        }
    }
}
