//! Endless lane runner: dodge `#`, collect `$`

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::ModeSignal;
use crate::input_key::InputKey;

pub const WIDTH: i32 = 30;
pub const HEIGHT: i32 = 20;
pub const PLAYER_Y: i32 = HEIGHT - 2;
const BASE_PERIOD_MS: u64 = 100;
const MIN_PERIOD_MS: u64 = 30;
const COIN_CHANCE: f64 = 0.1;
const COIN_VALUE: u32 = 50;
/// Steps replayed in one tick at most; time beyond that is skipped
const MAX_CATCH_UP: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub x: i32,
    pub y: i32,
}

/// What occupies a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Road,
    Obstacle,
    Coin,
    Player,
    Wreck,
}

impl Cell {
    pub fn glyph(&self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Road => '.',
            Cell::Obstacle => '#',
            Cell::Coin => '$',
            Cell::Player => 'A',
            Cell::Wreck => 'X',
        }
    }
}

#[derive(Debug)]
pub struct RunnerGame {
    player_x: i32,
    obstacles: Vec<Item>,
    coins: Vec<Item>,
    score: u32,
    ticks: u64,
    crashed: bool,
    last_step: Instant,
    rng: StdRng,
}

impl RunnerGame {
    pub fn new(now: Instant, seed: u64) -> Self {
        Self {
            player_x: WIDTH / 2,
            obstacles: Vec::new(),
            coins: Vec::new(),
            score: 0,
            ticks: 0,
            crashed: false,
            last_step: now,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_crashed(&self) -> bool {
        self.crashed
    }

    pub fn player_x(&self) -> i32 {
        self.player_x
    }

    /// Speed label shown in the status bar
    pub fn speed_level(&self) -> u32 {
        self.score / 100 + 1
    }

    /// Milliseconds between steps, shrinking as the score grows
    pub fn step_period(&self) -> Duration {
        let faster = u64::from(self.score / 100) * 5;
        Duration::from_millis(BASE_PERIOD_MS.saturating_sub(faster).max(MIN_PERIOD_MS))
    }

    pub fn obstacles(&self) -> &[Item] {
        &self.obstacles
    }

    pub fn coins(&self) -> &[Item] {
        &self.coins
    }

    pub fn cell(&self, x: i32, y: i32) -> Cell {
        let at = |items: &[Item]| items.iter().any(|i| i.x == x && i.y == y);
        if y == PLAYER_Y && x == self.player_x {
            if self.crashed {
                Cell::Wreck
            } else {
                Cell::Player
            }
        } else if at(&self.obstacles) {
            Cell::Obstacle
        } else if at(&self.coins) {
            Cell::Coin
        } else if (x == 1 || x == WIDTH - 2) && i64::from(y) % 4 == (self.ticks % 4) as i64 {
            Cell::Road
        } else {
            Cell::Empty
        }
    }

    /// Place an obstacle directly, used by tests
    pub fn add_obstacle(&mut self, x: i32, y: i32) {
        self.obstacles.push(Item { x, y });
    }

    /// Place a coin directly, used by tests
    pub fn add_coin(&mut self, x: i32, y: i32) {
        self.coins.push(Item { x, y });
    }

    /// One game step: scroll, spawn, score, collide
    pub fn step(&mut self) {
        if self.crashed {
            return;
        }
        self.ticks += 1;

        for o in &mut self.obstacles {
            o.y += 1;
        }
        self.obstacles.retain(|o| o.y < HEIGHT);
        let obstacle_chance = (0.2 + f64::from(self.score) / 2000.0).min(1.0);
        if self.rng.gen_bool(obstacle_chance) {
            let x = self.rng.gen_range(0..WIDTH - 2) + 1;
            if !self.obstacles.iter().any(|o| o.y == 0 && o.x == x) {
                self.obstacles.push(Item { x, y: 0 });
            }
        }

        for c in &mut self.coins {
            c.y += 1;
        }
        self.coins.retain(|c| c.y < HEIGHT);
        if self.rng.gen_bool(COIN_CHANCE) {
            let x = self.rng.gen_range(0..WIDTH - 2) + 1;
            self.coins.push(Item { x, y: 0 });
        }

        self.score += 1;
        self.collide();
    }

    fn collide(&mut self) {
        let px = self.player_x;
        if self.obstacles.iter().any(|o| o.x == px && o.y == PLAYER_Y) {
            self.crashed = true;
        }
        let before = self.coins.len();
        self.coins.retain(|c| !(c.x == px && c.y == PLAYER_Y));
        let collected = (before - self.coins.len()) as u32;
        self.score += collected * COIN_VALUE;
    }

    fn restart(&mut self, now: Instant) {
        self.player_x = WIDTH / 2;
        self.obstacles.clear();
        self.coins.clear();
        self.score = 0;
        self.crashed = false;
        self.last_step = now;
    }

    pub fn handle_key(&mut self, key: &InputKey, now: Instant) -> ModeSignal {
        if self.crashed {
            match key {
                InputKey::Enter => self.restart(now),
                InputKey::Esc => return ModeSignal::Exit,
                _ => {}
            }
            return ModeSignal::Continue;
        }

        match key {
            InputKey::Left | InputKey::Char('a') | InputKey::Char('h') => {
                self.player_x = (self.player_x - 1).max(1);
                self.collide();
            }
            InputKey::Right | InputKey::Char('d') | InputKey::Char('l') => {
                self.player_x = (self.player_x + 1).min(WIDTH - 2);
                self.collide();
            }
            InputKey::Esc => return ModeSignal::Exit,
            _ => {}
        }
        ModeSignal::Continue
    }

    pub fn tick(&mut self, now: Instant) -> ModeSignal {
        if self.crashed {
            self.last_step = now;
            return ModeSignal::Continue;
        }
        let mut steps = 0;
        loop {
            let period = self.step_period();
            if now.saturating_duration_since(self.last_step) < period || self.crashed {
                break;
            }
            if steps == MAX_CATCH_UP {
                self.last_step = now;
                break;
            }
            self.last_step += period;
            self.step();
            steps += 1;
        }
        ModeSignal::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> RunnerGame {
        RunnerGame::new(Instant::now(), 42)
    }

    #[test]
    fn test_step_period_shrinks_and_floors() {
        let mut g = game();
        assert_eq!(g.step_period(), Duration::from_millis(100));
        g.score = 250;
        assert_eq!(g.step_period(), Duration::from_millis(90));
        assert_eq!(g.speed_level(), 3);
        g.score = 10_000;
        assert_eq!(g.step_period(), Duration::from_millis(30));
    }

    #[test]
    fn test_step_scores_and_scrolls() {
        let mut g = game();
        g.add_obstacle(3, 5);
        g.step();
        assert!(g.obstacles().iter().any(|o| o.x == 3 && o.y == 6));
        assert!(g.score() >= 1);
    }

    #[test]
    fn test_stalled_tick_replays_a_bounded_number_of_steps() {
        let t0 = Instant::now();
        let mut g = RunnerGame::new(t0, 42);
        g.tick(t0 + Duration::from_secs(60));
        assert!(g.score() <= MAX_CATCH_UP * (1 + COIN_VALUE));

        // the missed minute is dropped, not queued
        let score = g.score();
        g.tick(t0 + Duration::from_secs(60) + Duration::from_millis(20));
        assert_eq!(g.score(), score);
    }

    #[test]
    fn test_items_leave_the_field() {
        let mut g = game();
        g.add_obstacle(3, HEIGHT - 1);
        g.step();
        assert!(!g.obstacles().iter().any(|o| o.x == 3 && o.y >= HEIGHT));
    }

    #[test]
    fn test_obstacle_hit_crashes() {
        let mut g = game();
        let x = g.player_x();
        g.add_obstacle(x, PLAYER_Y - 1);
        g.step();
        assert!(g.is_crashed());
        assert_eq!(g.cell(x, PLAYER_Y), Cell::Wreck);

        // no more scoring after the crash
        let score = g.score();
        g.step();
        assert_eq!(g.score(), score);
    }

    #[test]
    fn test_moving_into_coin_collects_it() {
        let mut g = game();
        let x = g.player_x();
        g.add_coin(x + 1, PLAYER_Y);
        g.handle_key(&InputKey::Right, Instant::now());
        assert_eq!(g.score(), 50);
        assert!(g.coins().is_empty());
    }

    #[test]
    fn test_player_stays_in_lanes() {
        let mut g = game();
        let now = Instant::now();
        for _ in 0..40 {
            g.handle_key(&InputKey::Left, now);
        }
        assert_eq!(g.player_x(), 1);
        for _ in 0..40 {
            g.handle_key(&InputKey::Right, now);
        }
        assert_eq!(g.player_x(), WIDTH - 2);
    }

    #[test]
    fn test_enter_restarts_after_crash() {
        let mut g = game();
        let now = Instant::now();
        let x = g.player_x();
        g.add_obstacle(x, PLAYER_Y - 1);
        g.step();
        assert!(g.is_crashed());

        assert_eq!(g.handle_key(&InputKey::Left, now), ModeSignal::Continue);
        assert!(g.is_crashed());

        g.handle_key(&InputKey::Enter, now);
        assert!(!g.is_crashed());
        assert_eq!(g.score(), 0);
        assert!(g.obstacles().is_empty());
        assert_eq!(g.player_x(), WIDTH / 2);
    }

    #[test]
    fn test_esc_exits() {
        let mut g = game();
        assert_eq!(g.handle_key(&InputKey::Esc, Instant::now()), ModeSignal::Exit);
    }

    #[test]
    fn test_spawns_stay_inside_walls() {
        let mut g = game();
        for _ in 0..500 {
            g.step();
            if g.is_crashed() {
                g.restart(Instant::now());
            }
        }
        for item in g.obstacles().iter().chain(g.coins()) {
            assert!((1..=WIDTH - 2).contains(&item.x));
        }
    }
}
