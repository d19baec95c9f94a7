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
// Password strength evaluation

use zxcvbn::zxcvbn;
use zxcvbn::Score;

pub const MIN_LENGTH: usize = 8;
pub const MAX_SCORE: u8 = 5;

const SPECIAL_CHARS: &str = "!@#$%^&*()_+~|}{[]></-=";

/// A named check over a password.
#[derive(Debug, Clone, Copy)]
pub struct Requirement {
    pub description: &'static str,
    pub predicate: fn(&str) -> bool,
}

/// Requirements in display order.
pub const REQUIREMENTS: [Requirement; 5] = [
    Requirement { description: "At least 8 characters", predicate: has_min_length },
    Requirement { description: "At least 1 number", predicate: has_digit },
    Requirement { description: "At least 1 lowercase letter", predicate: has_lowercase },
    Requirement { description: "At least 1 uppercase letter", predicate: has_uppercase },
    Requirement { description: "At least 1 special character", predicate: has_special },
];

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

// 连续的非换行字符数达到最小长度
fn has_min_length(password: &str) -> bool {
    password
        .split(is_line_terminator)
        .any(|line| line.chars().count() >= MIN_LENGTH)
}

fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

fn has_special(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARS.contains(c))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequirementStatus {
    pub met: bool,
    pub description: &'static str,
}

/// Visual tier of a strength score. Renderers map it to their own colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthTier {
    Neutral,
    Critical,
    Caution,
    Good,
    Excellent,
}

impl StrengthTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => StrengthTier::Neutral,
            1..=2 => StrengthTier::Critical,
            3 => StrengthTier::Caution,
            4 => StrengthTier::Good,
            _ => StrengthTier::Excellent,
        }
    }
}

pub fn strength_label(score: u8) -> &'static str {
    match score {
        0 => "Enter a password",
        1..=2 => "Weak password",
        3 => "Medium password",
        4 => "Strong password",
        _ => "Very strong password",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthResult {
    pub requirements: Vec<RequirementStatus>,
    pub score: u8,
}

impl StrengthResult {
    pub fn label(&self) -> &'static str {
        strength_label(self.score)
    }

    pub fn tier(&self) -> StrengthTier {
        StrengthTier::from_score(self.score)
    }

    /// Meter fill, `score / 5` as a percentage.
    pub fn fill_percent(&self) -> u8 {
        (u16::from(self.score) * 100 / u16::from(MAX_SCORE)) as u8
    }
}

/// Checks `password` against every requirement, keeping their order.
pub fn evaluate(password: &str) -> StrengthResult {
    let requirements: Vec<RequirementStatus> = REQUIREMENTS
        .iter()
        .map(|req| RequirementStatus {
            met: (req.predicate)(password),
            description: req.description,
        })
        .collect();
    let score = requirements.iter().filter(|req| req.met).count() as u8;
    StrengthResult { requirements, score }
}

/// zxcvbn based guessability estimate, shown next to the checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessEstimate {
    pub score: u8,
    pub rating: &'static str,
    pub suggestions: String,
}

pub fn estimate_guessability(password: &str) -> GuessEstimate {
    let entropy = zxcvbn(password, &[]);
    let score = entropy.score();
    let suggestions = entropy.feedback().map_or_else(
        String::new,
        |f| f.suggestions().iter().map(|s| s.to_string()).collect::<Vec<_>>().join(" ")
    );

    let (score, rating) = match score {
        Score::Zero => (0, "very weak"),
        Score::One => (1, "weak"),
        Score::Two => (2, "fair"),
        Score::Three => (3, "strong"),
        Score::Four => (4, "very strong"),
        _ => (0, "unknown"),
    };

    GuessEstimate { score, rating, suggestions }
}
