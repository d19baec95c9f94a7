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
// Password form state and text rendering

use std::fmt::{self, Write};
use unicode_segmentation::UnicodeSegmentation;

use crate::passgen::{self, GenerationConfig, RandomSource};
use crate::setclip::Clipboard;
use crate::strength::{self, StrengthResult, StrengthTier};

const METER_WIDTH: usize = 20;
const TICK_INTERVAL: usize = 4;
const MASK_CHAR: char = '•';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    pub min: usize,
    pub max: usize,
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self { min: 8, max: 32 }
    }
}

impl LengthBounds {
    pub fn clamp(&self, length: usize) -> usize {
        length.clamp(self.min, self.max)
    }

    /// Labelled ticks of the length scale, one every four steps.
    pub fn scale_labels(&self) -> Vec<usize> {
        (self.min..=self.max).step_by(TICK_INTERVAL).collect()
    }
}

/// Result of a copy action, shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyNotice {
    Copied,
    /// Copied, but the delayed clear could not be arranged.
    CopiedWithoutAutoClear(String),
    NothingToCopy,
    Failed(String),
}

impl fmt::Display for CopyNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopyNotice::Copied => write!(f, "Password copied to clipboard!"),
            CopyNotice::CopiedWithoutAutoClear(reason) => write!(
                f,
                "Password copied to clipboard, but it will not be cleared automatically: {}",
                reason
            ),
            CopyNotice::NothingToCopy => write!(f, "Nothing to copy yet, generate a password first."),
            CopyNotice::Failed(reason) => write!(f, "Could not copy password: {}", reason),
        }
    }
}

/// A single user action on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Generate,
    ToggleVisibility,
    Copy,
    SetLength(usize),
    Increase,
    Decrease,
    Help,
    Quit,
}

impl FormAction {
    pub fn parse(input: &str) -> Result<Self, String> {
        let mut parts = input.split_whitespace();
        let command = parts.next().ok_or_else(|| "Empty command".to_string())?;
        let action = match command {
            "g" | "gen" | "generate" => FormAction::Generate,
            "v" | "toggle" => FormAction::ToggleVisibility,
            "c" | "copy" => FormAction::Copy,
            "+" => FormAction::Increase,
            "-" => FormAction::Decrease,
            "h" | "help" | "?" => FormAction::Help,
            "q" | "quit" | "exit" => FormAction::Quit,
            "l" | "len" | "length" => {
                let value = parts.next().ok_or_else(|| "Missing length value".to_string())?;
                let length = value.parse::<usize>()
                    .map_err(|_| format!("Invalid length: {}", value))?;
                FormAction::SetLength(length)
            }
            other => return Err(format!("Unknown command: {}", other)),
        };
        if parts.next().is_some() {
            return Err(format!("Too many arguments for '{}'", command));
        }
        Ok(action)
    }
}

pub const HELP_TEXT: &str = "\
Commands:
  g        generate a new password
  v        show / hide the password
  c        copy the password to the clipboard
  l <n>    set the password length
  + / -    increase / decrease the length by one
  h        show this help
  q        quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Continue(Option<String>),
    Quit,
}

/// UI state of the generator form.
#[derive(Debug, Clone)]
pub struct PasswordForm {
    password: String,
    visible: bool,
    length: usize,
    bounds: LengthBounds,
}

impl PasswordForm {
    pub fn new(bounds: LengthBounds, length: usize, visible: bool) -> Self {
        Self {
            password: String::new(),
            visible,
            length: bounds.clamp(length),
            bounds,
        }
    }

    /// Form showing an existing password, used for checking.
    pub fn with_password(password: &str, visible: bool) -> Self {
        let mut form = Self::new(LengthBounds::default(), password.chars().count(), visible);
        form.password = password.to_string();
        form
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn bounds(&self) -> LengthBounds {
        self.bounds
    }

    /// Sets the desired length, clamped to the bounds. Returns the stored value.
    pub fn set_length(&mut self, length: usize) -> usize {
        self.length = self.bounds.clamp(length);
        self.length
    }

    pub fn step_length(&mut self, increase: bool) -> usize {
        let target = if increase {
            self.length.saturating_add(1)
        } else {
            self.length.saturating_sub(1)
        };
        self.set_length(target)
    }

    pub fn toggle_visibility(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    pub fn generate<S: RandomSource + ?Sized>(&mut self, source: &mut S) -> &str {
        let config = GenerationConfig::new(self.length);
        self.password = passgen::generate(&config, source);
        &self.password
    }

    /// Re-evaluated on every call.
    pub fn strength(&self) -> StrengthResult {
        strength::evaluate(&self.password)
    }

    pub fn copy<C: Clipboard + ?Sized>(&self, clipboard: &mut C) -> CopyNotice {
        if self.password.is_empty() {
            return CopyNotice::NothingToCopy;
        }
        if let Err(e) = clipboard.set_text(&self.password) {
            log::warn!("copy to clipboard failed: {}", e);
            return CopyNotice::Failed(e.to_string());
        }
        match clipboard.schedule_clear(&self.password) {
            Ok(()) => CopyNotice::Copied,
            Err(e) => {
                log::warn!("clipboard auto-clear not scheduled: {}", e);
                CopyNotice::CopiedWithoutAutoClear(e.to_string())
            }
        }
    }

    pub fn apply<S, C>(&mut self, action: FormAction, source: &mut S, clipboard: &mut C) -> ActionOutcome
    where
        S: RandomSource + ?Sized,
        C: Clipboard + ?Sized,
    {
        let notice = match action {
            FormAction::Generate => {
                self.generate(source);
                None
            }
            FormAction::ToggleVisibility => {
                self.toggle_visibility();
                None
            }
            FormAction::Copy => Some(self.copy(clipboard).to_string()),
            FormAction::SetLength(length) => {
                let stored = self.set_length(length);
                (stored != length).then(|| {
                    format!("Length must be between {} and {}, using {}", self.bounds.min, self.bounds.max, stored)
                })
            }
            FormAction::Increase => {
                self.step_length(true);
                None
            }
            FormAction::Decrease => {
                self.step_length(false);
                None
            }
            FormAction::Help => Some(HELP_TEXT.to_string()),
            FormAction::Quit => return ActionOutcome::Quit,
        };
        ActionOutcome::Continue(notice)
    }

    /// Password as shown, one mask character per grapheme when hidden.
    pub fn displayed_password(&self) -> String {
        if self.visible {
            self.password.clone()
        } else {
            self.password.graphemes(true).map(|_| MASK_CHAR).collect()
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let shown = if self.password.is_empty() { "(none)".to_string() } else { self.displayed_password() };
        let _ = writeln!(out, "Generated Password: {}  [{}]", shown, if self.visible { "shown" } else { "hidden" });
        let _ = writeln!(out, "Password Length: {}", self.length);
        let _ = writeln!(out, "{}", render_scale(self.bounds, self.length));
        out.push_str(&render_strength(&self.strength()));
        out
    }
}

/// Length scale with labelled ticks and a marker under the current length.
///
/// Every label column is at least one wider than the widest label.
pub fn render_scale(bounds: LengthBounds, current: usize) -> String {
    let ticks = bounds.scale_labels();
    let widest = ticks.iter().map(|t| t.to_string().len()).max().unwrap_or(0);
    let column = TICK_INTERVAL.max(widest + 1);
    let labels: String = ticks.iter().map(|t| format!("{:<width$}", t, width = column)).collect();
    let offset = bounds.clamp(current) - bounds.min;
    let marker = offset / TICK_INTERVAL * column + offset % TICK_INTERVAL * column / TICK_INTERVAL;
    format!("  {}\n  {}^", labels.trim_end(), " ".repeat(marker))
}

/// Reminder printed when a generated password is neither shown nor copied.
pub fn hidden_password_hint(visible: bool, copied: bool) -> Option<&'static str> {
    (!visible && !copied).then_some(
        "The password is hidden, run again with --show to print it or --copy to copy it.",
    )
}

pub fn tier_marker(tier: StrengthTier) -> &'static str {
    match tier {
        StrengthTier::Neutral => "",
        StrengthTier::Critical => "!!",
        StrengthTier::Caution => "!",
        StrengthTier::Good => "+",
        StrengthTier::Excellent => "++",
    }
}

pub fn render_meter(result: &StrengthResult) -> String {
    let filled = result.score as usize * METER_WIDTH / strength::MAX_SCORE as usize;
    format!(
        "[{}{}] {}% {}",
        "█".repeat(filled),
        "░".repeat(METER_WIDTH - filled),
        result.fill_percent(),
        tier_marker(result.tier())
    )
    .trim_end()
    .to_string()
}

/// Meter, label line and the requirement checklist.
pub fn render_strength(result: &StrengthResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", render_meter(result));
    let _ = writeln!(out, "{}. Must contain:", result.label());
    for req in &result.requirements {
        let (mark, status) = if req.met {
            ("✓", "Requirement met")
        } else {
            ("✗", "Requirement not met")
        };
        let _ = writeln!(out, "  {} {} - {}", mark, req.description, status);
    }
    out
}
