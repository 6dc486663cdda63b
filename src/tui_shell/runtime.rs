use std::io::{IsTerminal, Stdout};

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::CrosstermBackend;
use tracing::debug;

use super::*;

/// Raw mode + alternate screen for the lifetime of the value. Dropping it
/// restores the terminal, including during a panic unwind.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn enter() -> Result<Self> {
        if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
            anyhow::bail!("TUI requires an interactive terminal (TTY)");
        }

        let mut stdout = io::stdout();
        enable_raw_mode().context("enable raw mode")?;
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            disable_raw_mode().ok();
            return Err(err).context("enter alternate screen");
        }

        let backend = CrosstermBackend::new(stdout);
        let terminal = match Terminal::new(backend) {
            Ok(t) => t,
            Err(err) => {
                disable_raw_mode().ok();
                execute!(io::stdout(), LeaveAlternateScreen).ok();
                return Err(err).context("create terminal");
            }
        };
        let mut session = Self { terminal };
        session.terminal.clear().ok();
        debug!("terminal session started");
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        disable_raw_mode().ok();
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen).ok();
        self.terminal.show_cursor().ok();
        debug!("terminal session restored");
    }
}

/// Runs the interactive browser until the user quits.
pub fn run<R: Registry>(browser: &mut Browser<R>) -> Result<()> {
    let mut session = TerminalSession::enter()?;
    let size = session.terminal.size().context("terminal size")?;
    browser.resize(tree_height(size.height));

    event_loop::run_loop(&mut session.terminal, browser, event_loop::read_event)
}
