//  ____  ____     __        __    __  __           _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | __ _ ___| |_ ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \| |\/| |/ _` / __| __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | | (_| \__ \ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\__,_|___/\__\___|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-19
// Version : 0.1.0
// License : Mulan PSL v2
//
// Clipboard handler

use std::{env, fmt, io, process, thread, time::Duration};

pub const DAEMON_ENV: &str = "RPAWOGEN_CLIPBOARD_DAEMON";
pub const SECRET_ENV: &str = "RPAWOGEN_CLIPBOARD_SECRET";
pub const DELAY_ENV: &str = "RPAWOGEN_CLIPBOARD_DELAY";

#[derive(Debug)]
pub enum ClipboardError {
    Clipboard(arboard::Error),
    Spawn(io::Error),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Clipboard(e) => write!(f, "clipboard unavailable: {}", e),
            ClipboardError::Spawn(e) => write!(f, "failed to start clipboard cleaner: {}", e),
        }
    }
}

impl std::error::Error for ClipboardError {}

impl From<arboard::Error> for ClipboardError {
    fn from(err: arboard::Error) -> Self {
        ClipboardError::Clipboard(err)
    }
}

impl From<io::Error> for ClipboardError {
    fn from(err: io::Error) -> Self {
        ClipboardError::Spawn(err)
    }
}

/// Where the form sends a password on copy.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Arranges for `text` to be cleared later. Called only after a
    /// successful `set_text`.
    fn schedule_clear(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Ok(())
    }
}

/// Read and clear access used by the clipboard cleaner.
pub trait ClipboardContents {
    fn get_text(&mut self) -> Option<String>;
    fn clear(&mut self) -> Result<(), ClipboardError>;
}

impl ClipboardContents for arboard::Clipboard {
    fn get_text(&mut self) -> Option<String> {
        arboard::Clipboard::get_text(self).ok()
    }

    fn clear(&mut self) -> Result<(), ClipboardError> {
        arboard::Clipboard::clear(self)?;
        Ok(())
    }
}

/// System clipboard. Optionally clears the copied text after a delay
/// from a detached helper process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard {
    pub clear_after_secs: u64,
}

impl SystemClipboard {
    pub fn new(clear_after_secs: u64) -> Self {
        Self { clear_after_secs }
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut ctx = arboard::Clipboard::new()?;
        ctx.set_text(text)?;
        Ok(())
    }

    fn schedule_clear(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.clear_after_secs > 0 {
            spawn_daemon(text, self.clear_after_secs)?;
        }
        Ok(())
    }
}

fn spawn_daemon(secret: &str, delay: u64) -> Result<(), ClipboardError> {
    let exe_path = env::current_exe()?;
    let mut cmd = process::Command::new(exe_path);
    cmd.env(DAEMON_ENV, "1")
       .env(SECRET_ENV, secret)
       .env(DELAY_ENV, delay.to_string())
       .stdout(process::Stdio::null())
       .stderr(process::Stdio::inherit());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        cmd.creation_flags(0x08000000); // CREATE_NO_WINDOW
    }

    cmd.spawn()?;
    log::debug!("clipboard cleaner scheduled in {}s", delay);
    Ok(())
}

/// Work handed to the detached helper process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearTask {
    pub secret: String,
    pub delay_secs: u64,
}

impl ClearTask {
    /// Reads the task from the process environment.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a task when the daemon marker is present. A missing or
    /// unparsable delay clears immediately.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(DAEMON_ENV)?;
        let secret = lookup(SECRET_ENV)?;
        let delay_secs = lookup(DELAY_ENV)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0);
        Some(Self { secret, delay_secs })
    }

    pub fn run(&self) {
        thread::sleep(Duration::from_secs(self.delay_secs));

        let mut ctx = match arboard::Clipboard::new() {
            Ok(ctx) => ctx,
            Err(e) => {
                log::error!("clipboard cleaner could not open clipboard: {}", e);
                return;
            }
        };

        match self.clear_if_unchanged(&mut ctx) {
            Ok(ClearOutcome::Cleared) => log::info!("clipboard cleared"),
            Ok(ClearOutcome::Changed) => log::info!("clipboard changed since copy, leaving it alone"),
            Err(e) => log::error!("failed to clear clipboard: {}", e),
        }
    }

    /// Only clears when the clipboard still holds the copied secret.
    pub fn clear_if_unchanged<C: ClipboardContents + ?Sized>(
        &self,
        clipboard: &mut C,
    ) -> Result<ClearOutcome, ClipboardError> {
        let current_content = clipboard.get_text().unwrap_or_default();
        if current_content == self.secret {
            clipboard.clear()?;
            Ok(ClearOutcome::Cleared)
        } else {
            Ok(ClearOutcome::Changed)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared,
    Changed,
}
