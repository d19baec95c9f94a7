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
// Password generator

use rand::rngs::OsRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// A fixed, named set of characters used to seed and fill passwords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// All classes in seeding order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterClass::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            CharacterClass::Digits => "0123456789",
            CharacterClass::Symbols => "@#$%^&*()_+~|}{[]></-=",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Digits => "digits",
            CharacterClass::Symbols => "symbols",
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.chars().contains(c)
    }
}

/// Union of the given classes, in class order.
pub fn combined_alphabet(classes: &[CharacterClass]) -> Vec<char> {
    classes.iter().flat_map(|class| class.chars().chars()).collect()
}

// 生成选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub classes: Vec<CharacterClass>,
}

impl GenerationConfig {
    /// Config using every character class.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            classes: CharacterClass::ALL.to_vec(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(12)
    }
}

/// Uniform random index source.
///
/// This is the one place where randomness enters generation. Every
/// `RngCore` qualifies, so `OsRng` (the default, backed by the operating
/// system CSPRNG) can be swapped for a seeded `ChaCha20Rng` or anything
/// else without touching the generator.
pub trait RandomSource {
    /// Returns an index drawn uniformly from `[0, upper)`. `upper` is never zero.
    fn index(&mut self, upper: usize) -> usize;
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn index(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }
}

/// Deterministic source for reproducible output.
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

fn pick<S: RandomSource + ?Sized>(source: &mut S, chars: &[char]) -> char {
    chars[source.index(chars.len())]
}

/// Generates a password with one character of every configured class
/// followed by characters from their union until `config.length` is reached.
///
/// Every class is always seeded, so when `config.length` is smaller than the
/// number of classes the result is longer than requested (one character
/// per class). It is never truncated and never shorter than requested.
/// With no classes configured there is nothing to draw from and the result
/// is empty.
pub fn generate<S: RandomSource + ?Sized>(config: &GenerationConfig, source: &mut S) -> String {
    let alphabet = combined_alphabet(&config.classes);
    if alphabet.is_empty() {
        log::warn!("no character classes configured, nothing to generate");
        return String::new();
    }

    let mut password = String::with_capacity(config.length.max(config.classes.len()));
    let mut count = 0;

    for class in &config.classes {
        let chars: Vec<char> = class.chars().chars().collect();
        password.push(pick(source, &chars));
        count += 1;
    }

    while count < config.length {
        password.push(pick(source, &alphabet));
        count += 1;
    }

    if config.length < config.classes.len() {
        log::debug!(
            "requested length {} is below the {} mandatory classes, returning {} characters",
            config.length,
            config.classes.len(),
            count
        );
    }
    password
}

/// Generates a password using the operating system random source.
pub fn generate_password(config: &GenerationConfig) -> String {
    generate(config, &mut OsRng)
}
