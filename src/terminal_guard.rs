use std::io;

use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

/// 进入原始模式与备用屏幕；drop 时尽力恢复终端
pub struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            cursor::SetCursorStyle::BlinkingBar
        )?;
        Ok(Self { restored: false })
    }

    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        let mut first_err: Option<io::Error> = None;
        if let Err(err) = disable_raw_mode() {
            first_err.get_or_insert(err);
        }
        if let Err(err) = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            cursor::SetCursorStyle::DefaultUserShape
        ) {
            first_err.get_or_insert(err);
        }

        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
