use std::io;
use std::process::{Command, Stdio};

use super::env::Snapshot;

pub const DEFAULT_COLUMNS: u16 = 80;
pub const DEFAULT_ROWS: u16 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermSize {
    pub rows: u16,
    pub cols: u16,
}

impl Default for TermSize {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLUMNS,
        }
    }
}

/// Queries the terminal attached to stdout. `None` when stdout is not a
/// terminal or reports a zero size.
pub fn size() -> Option<TermSize> {
    let mut ws = libc::winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };

    // SAFETY: TIOCGWINSZ only writes into the winsize we pass.
    let rc = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ.into(), &mut ws) };
    if rc != 0 || ws.ws_col == 0 {
        return None;
    }

    Some(TermSize {
        rows: ws.ws_row,
        cols: ws.ws_col,
    })
}

/// Clears the screen with the system `clear` program.
pub fn clear_screen(snapshot: &Snapshot) -> io::Result<()> {
    let status = Command::new("clear")
        .env_clear()
        .envs(snapshot.iter())
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    if !status.success() {
        log::debug!("clear exited with {}", status);
    }
    Ok(())
}
