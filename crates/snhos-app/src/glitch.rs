//! Glitch effect on the name in the About section.
//!
//! Every few seconds a short burst swaps a couple of characters for noise
//! glyphs. Outside a burst the text renders unchanged.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const NOISE: &[char] = &['#', '%', '&', '@', '$', '!', '?', '*', '/', '\\', '_', '='];
const BURST_LENGTH: Duration = Duration::from_millis(180);
const MIN_QUIET_MS: u64 = 2000;
const MAX_QUIET_MS: u64 = 5000;
/// Characters swapped per burst, at most
const MAX_SWAPS: usize = 3;

#[derive(Debug, Clone)]
pub struct GlitchText {
    text: String,
    /// `(char index, glyph)` while a burst is on
    swaps: Vec<(usize, char)>,
    burst_until: Option<Instant>,
    next_burst: Instant,
    rng: StdRng,
}

impl GlitchText {
    pub fn new(text: &str, now: Instant, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let quiet = Duration::from_millis(rng.gen_range(MIN_QUIET_MS..=MAX_QUIET_MS));
        Self {
            text: text.to_string(),
            swaps: Vec::new(),
            burst_until: None,
            next_burst: now + quiet,
            rng,
        }
    }

    pub fn is_glitching(&self) -> bool {
        self.burst_until.is_some()
    }

    /// The text as it should be drawn right now
    pub fn render(&self) -> String {
        self.text
            .chars()
            .enumerate()
            .map(|(idx, ch)| {
                self.swaps
                    .iter()
                    .find(|(at, _)| *at == idx)
                    .map_or(ch, |(_, glyph)| *glyph)
            })
            .collect()
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(until) = self.burst_until {
            if now >= until {
                self.burst_until = None;
                self.swaps.clear();
                let quiet = self.rng.gen_range(MIN_QUIET_MS..=MAX_QUIET_MS);
                self.next_burst = now + Duration::from_millis(quiet);
            }
            return;
        }

        if now >= self.next_burst {
            self.start_burst(now);
        }
    }

    fn start_burst(&mut self, now: Instant) {
        let len = self.text.chars().count();
        if len == 0 {
            return;
        }
        let count = self.rng.gen_range(1..=MAX_SWAPS.min(len));
        self.swaps = (0..count)
            .map(|_| {
                let idx = self.rng.gen_range(0..len);
                let glyph = NOISE[self.rng.gen_range(0..NOISE.len())];
                (idx, glyph)
            })
            .collect();
        self.burst_until = Some(now + BURST_LENGTH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_text_is_unchanged() {
        let now = Instant::now();
        let glitch = GlitchText::new("Syed", now, 1);
        assert_eq!(glitch.render(), "Syed");
        assert!(!glitch.is_glitching());
    }

    #[test]
    fn test_burst_then_recover() {
        let now = Instant::now();
        let mut glitch = GlitchText::new("Syed Nisar", now, 3);

        let burst_at = now + Duration::from_millis(MAX_QUIET_MS);
        glitch.tick(burst_at);
        assert!(glitch.is_glitching());
        assert_eq!(glitch.render().chars().count(), "Syed Nisar".chars().count());

        glitch.tick(burst_at + BURST_LENGTH);
        assert!(!glitch.is_glitching());
        assert_eq!(glitch.render(), "Syed Nisar");
    }

    #[test]
    fn test_empty_text_never_glitches() {
        let now = Instant::now();
        let mut glitch = GlitchText::new("", now, 9);
        glitch.tick(now + Duration::from_secs(60));
        assert!(!glitch.is_glitching());
    }
}
