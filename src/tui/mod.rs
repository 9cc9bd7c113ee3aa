pub mod app;
pub mod draw;

/// Restores the terminal when the interactive session ends, panics included.
pub struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        ratatui::restore();
    }
}
