//! Digital rain inside the terminal panel

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::ModeSignal;
use crate::input_key::InputKey;

pub const GLYPHS: &[char] = &[
    '0', '1', '0', '1', '0', '1', '0', '1', 'X', 'Y', 'Z', 'Ω', '≈', 'ç', '√', '∫',
];

const FRAME: Duration = Duration::from_millis(50);
/// Chance that a column past the bottom restarts on a given frame
const RESET_CHANCE: f64 = 0.025;
/// Frames a glyph stays visible after it was drawn
pub const GLYPH_TTL: u8 = 10;

/// A glyph left behind by a falling drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    /// Frames left before the glyph disappears, `GLYPH_TTL` at the head
    pub ttl: u8,
}

#[derive(Debug)]
pub struct MatrixRain {
    width: u16,
    height: u16,
    /// Row of the next glyph per column
    drops: Vec<u16>,
    cells: Vec<Option<Glyph>>,
    last_frame: Instant,
    rng: StdRng,
}

impl MatrixRain {
    pub fn new(now: Instant, seed: u64) -> Self {
        Self {
            width: 0,
            height: 0,
            drops: Vec::new(),
            cells: Vec::new(),
            last_frame: now,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Match the rain to the panel. Clears the field when the size changes.
    pub fn resize(&mut self, width: u16, height: u16) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.drops = vec![1; width as usize];
        self.cells = vec![None; width as usize * height as usize];
    }

    pub fn glyph_at(&self, x: u16, y: u16) -> Option<Glyph> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Advance one frame: fade every glyph, then drop a new one per column
    pub fn step(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = cell.and_then(|g| {
                g.ttl
                    .checked_sub(1)
                    .filter(|t| *t > 0)
                    .map(|ttl| Glyph { ttl, ..g })
            });
        }

        for x in 0..self.width {
            let y = self.drops[x as usize];
            if y < self.height {
                let ch = GLYPHS[self.rng.gen_range(0..GLYPHS.len())];
                self.cells[y as usize * self.width as usize + x as usize] =
                    Some(Glyph { ch, ttl: GLYPH_TTL });
            }
            if y >= self.height && self.rng.gen_bool(RESET_CHANCE) {
                self.drops[x as usize] = 0;
            } else {
                self.drops[x as usize] = y.saturating_add(1);
            }
        }
    }

    pub fn tick(&mut self, now: Instant) -> ModeSignal {
        while now.saturating_duration_since(self.last_frame) >= FRAME {
            self.last_frame += FRAME;
            self.step();
        }
        ModeSignal::Continue
    }

    /// Any key leaves the rain
    pub fn handle_key(&mut self, _key: &InputKey) -> ModeSignal {
        ModeSignal::Exit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_draws_head_and_fades_trail() {
        let mut rain = MatrixRain::new(Instant::now(), 7);
        rain.resize(3, 5);

        rain.step();
        // drops start at row 1
        for x in 0..3 {
            assert_eq!(rain.glyph_at(x, 1).map(|g| g.ttl), Some(GLYPH_TTL));
            assert!(rain.glyph_at(x, 0).is_none());
        }

        rain.step();
        assert_eq!(rain.glyph_at(0, 1).map(|g| g.ttl), Some(GLYPH_TTL - 1));
        assert_eq!(rain.glyph_at(0, 2).map(|g| g.ttl), Some(GLYPH_TTL));
    }

    #[test]
    fn test_glyphs_expire() {
        let mut rain = MatrixRain::new(Instant::now(), 1);
        rain.resize(1, 40);
        rain.step();
        for _ in 0..GLYPH_TTL {
            rain.step();
        }
        assert!(rain.glyph_at(0, 1).is_none());
    }

    #[test]
    fn test_glyphs_come_from_charset() {
        let mut rain = MatrixRain::new(Instant::now(), 3);
        rain.resize(20, 10);
        for _ in 0..8 {
            rain.step();
        }
        for y in 0..10 {
            for x in 0..20 {
                if let Some(g) = rain.glyph_at(x, y) {
                    assert!(GLYPHS.contains(&g.ch));
                }
            }
        }
    }

    #[test]
    fn test_tick_runs_one_frame_per_50ms() {
        let t0 = Instant::now();
        let mut rain = MatrixRain::new(t0, 9);
        rain.resize(1, 100);
        rain.tick(t0 + Duration::from_millis(120));
        // two frames: rows 1 and 2 drawn
        assert!(rain.glyph_at(0, 2).is_some());
        assert!(rain.glyph_at(0, 3).is_none());
    }

    #[test]
    fn test_any_key_exits() {
        let mut rain = MatrixRain::new(Instant::now(), 0);
        assert_eq!(rain.handle_key(&InputKey::Char('q')), ModeSignal::Exit);
    }

    #[test]
    fn test_out_of_bounds_is_empty() {
        let rain = MatrixRain::new(Instant::now(), 0);
        assert!(rain.glyph_at(0, 0).is_none());
    }
}
