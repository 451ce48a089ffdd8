//! Password-guessing terminal (RobCo style).
//!
//! A memory dump of 12 rows hides up to 8 candidate words. Each wrong guess
//! costs one of four attempts and reports how many letters sit in the right
//! position.

use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use rand::Rng;

use super::ModeSignal;
use crate::input_key::InputKey;

pub const WORDS: [&str; 14] = [
    "SYSTEM", "SERVER", "SOCKET", "KERNEL", "BUFFER", "OBJECT", "SCRIPT", "DEPLOY", "OUTPUT",
    "MEMORY", "ACCESS", "CONFIG", "BRIDGE", "VECTOR",
];

const GARBAGE: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>/?`~";

pub const ROWS: usize = 12;
pub const ROW_WIDTH: usize = 12;
pub const MAX_ATTEMPTS: u8 = 4;
const CANDIDATES: usize = 8;
const WORD_CHANCE: f64 = 0.7;
const WIN_DELAY: Duration = Duration::from_millis(2000);

/// One line of the memory dump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpRow {
    /// `0x` followed by uppercase hex
    pub address: String,
    /// Exactly [`ROW_WIDTH`] characters
    pub content: String,
    /// Byte offset and word when the row hides a candidate
    pub word: Option<(usize, &'static str)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HackOutcome {
    Playing,
    Won { at: Instant },
    Locked,
}

#[derive(Debug, Clone)]
pub struct HackingGame {
    password: &'static str,
    rows: Vec<DumpRow>,
    /// Index into the rows that carry a word
    selected: usize,
    attempts: u8,
    /// Newest first
    log: Vec<String>,
    outcome: HackOutcome,
}

impl HackingGame {
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut pool = WORDS.to_vec();
        pool.shuffle(rng);
        let mut candidates: Vec<&'static str> = pool.into_iter().take(CANDIDATES).collect();
        let password = candidates[rng.gen_range(0..candidates.len())];
        candidates.shuffle(rng);

        let mut rows = Vec::with_capacity(ROWS);
        let mut next_word = 0;
        for _ in 0..ROWS {
            let address = format!("0x{:X}", rng.gen_range(0..60000u32) + 4096);
            let word = if next_word < candidates.len() && rng.gen_bool(WORD_CHANCE) {
                next_word += 1;
                Some(candidates[next_word - 1])
            } else {
                None
            };
            rows.push(fill_row(address, word, rng));
        }

        // the password must be reachable, even on an unlucky layout
        if !rows.iter().any(|r| r.word.is_some_and(|(_, w)| w == password)) {
            let placed: Vec<usize> = rows
                .iter()
                .enumerate()
                .filter(|(_, r)| r.word.is_some())
                .map(|(i, _)| i)
                .collect();
            let idx = placed
                .choose(rng)
                .copied()
                .unwrap_or_else(|| rng.gen_range(0..ROWS));
            let address = rows[idx].address.clone();
            rows[idx] = fill_row(address, Some(password), rng);
        }

        Self::from_parts(password, rows)
    }

    /// Build a game from a known layout
    pub fn from_parts(password: &'static str, rows: Vec<DumpRow>) -> Self {
        Self {
            password,
            rows,
            selected: 0,
            attempts: MAX_ATTEMPTS,
            log: Vec::new(),
            outcome: HackOutcome::Playing,
        }
    }

    pub fn rows(&self) -> &[DumpRow] {
        &self.rows
    }

    pub fn attempts(&self) -> u8 {
        self.attempts
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn outcome(&self) -> HackOutcome {
        self.outcome
    }

    pub fn password(&self) -> &'static str {
        self.password
    }

    /// Candidate words in display order
    pub fn words(&self) -> Vec<&'static str> {
        self.rows
            .iter()
            .filter_map(|r| r.word.map(|(_, w)| w))
            .collect()
    }

    /// Word under the selection cursor
    pub fn selected_word(&self) -> Option<&'static str> {
        self.words().get(self.selected).copied()
    }

    fn move_selection(&mut self, delta: isize) {
        let count = self.words().len();
        if count == 0 {
            return;
        }
        self.selected = (self.selected as isize + delta).rem_euclid(count as isize) as usize;
    }

    /// Submit a guess. Ignored once the game is won or locked.
    pub fn guess(&mut self, word: &str, now: Instant) {
        if self.outcome != HackOutcome::Playing {
            return;
        }

        let mut entry = vec![format!("> {word}")];
        if word == self.password {
            entry.push("> EXACT MATCH!".into());
            entry.push("> LOGIN ACCEPTED.".into());
            self.outcome = HackOutcome::Won { at: now };
        } else {
            self.attempts = self.attempts.saturating_sub(1);
            entry.push("> ENTRY DENIED.".into());
            entry.push(format!("> LIKENESS={}", likeness(word, self.password)));
            if self.attempts == 0 {
                self.outcome = HackOutcome::Locked;
                entry.insert(0, "> TERMINAL LOCKED.".into());
            }
        }
        self.log.splice(0..0, entry);
    }

    pub fn handle_key(&mut self, key: &InputKey, now: Instant) -> ModeSignal {
        match key {
            InputKey::Esc => return ModeSignal::Exit,
            InputKey::Enter => match self.outcome {
                HackOutcome::Playing => {
                    if let Some(word) = self.selected_word() {
                        self.guess(word, now);
                    }
                }
                // EXIT button on the locked screen
                HackOutcome::Locked => return ModeSignal::Exit,
                HackOutcome::Won { .. } => {}
            },
            InputKey::Up | InputKey::Left | InputKey::Char('k') => self.move_selection(-1),
            InputKey::Down | InputKey::Right | InputKey::Char('j') => self.move_selection(1),
            _ => {}
        }
        ModeSignal::Continue
    }

    pub fn tick(&mut self, now: Instant) -> ModeSignal {
        match self.outcome {
            HackOutcome::Won { at } if now.saturating_duration_since(at) >= WIN_DELAY => {
                ModeSignal::Won
            }
            _ => ModeSignal::Continue,
        }
    }
}

/// Number of positions where both words carry the same letter
pub fn likeness(guess: &str, target: &str) -> usize {
    guess
        .bytes()
        .zip(target.bytes())
        .filter(|(a, b)| a == b)
        .count()
}

fn fill_row(address: String, word: Option<&'static str>, rng: &mut impl Rng) -> DumpRow {
    let mut content: std::collections::VecDeque<u8> = word.unwrap_or("").bytes().collect();
    let mut offset = 0;
    while content.len() < ROW_WIDTH {
        let junk = GARBAGE[rng.gen_range(0..GARBAGE.len())];
        if rng.gen_bool(0.5) {
            content.push_back(junk);
        } else {
            content.push_front(junk);
            offset += 1;
        }
    }
    let content: String = content.into_iter().map(char::from).collect();
    DumpRow {
        address,
        content,
        word: word.map(|w| (offset, w)),
    }
}
