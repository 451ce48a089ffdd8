//! Pong against a simple tracking AI.
//!
//! Simulated in a fixed 600×400 field at 60 steps per second; the view
//! scales the field onto whatever cells the panel has. The player owns the
//! left paddle.

use std::time::{Duration, Instant};

use super::ModeSignal;
use crate::input_key::InputKey;

pub const FIELD_WIDTH: f64 = 600.0;
pub const FIELD_HEIGHT: f64 = 400.0;
pub const PADDLE_WIDTH: f64 = 10.0;
pub const PADDLE_HEIGHT: f64 = 60.0;
pub const BALL_SIZE: f64 = 8.0;
pub const WIN_SCORE: u32 = 5;

const STEP: Duration = Duration::from_micros(16_667);
const AI_SPEED: f64 = 4.0;
const AI_DEAD_ZONE: f64 = 35.0;
const PLAYER_STEP: f64 = 20.0;
const SPIN: f64 = 0.35;
const SPEED_UP: f64 = 0.5;
/// Longest stretch simulated in one tick, so a stalled loop does not fast-forward
const MAX_CATCH_UP: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
}

#[derive(Debug, Clone)]
pub struct PongGame {
    player_y: f64,
    ai_y: f64,
    ball: Ball,
    player_score: u32,
    ai_score: u32,
    last_step: Instant,
}

impl PongGame {
    pub fn new(now: Instant) -> Self {
        let paddle_y = FIELD_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0;
        Self {
            player_y: paddle_y,
            ai_y: paddle_y,
            ball: Ball {
                x: FIELD_WIDTH / 2.0,
                y: FIELD_HEIGHT / 2.0,
                dx: 5.0,
                dy: 3.0,
            },
            player_score: 0,
            ai_score: 0,
            last_step: now,
        }
    }

    pub fn ball(&self) -> Ball {
        self.ball
    }

    pub fn player_y(&self) -> f64 {
        self.player_y
    }

    pub fn ai_y(&self) -> f64 {
        self.ai_y
    }

    pub fn scores(&self) -> (u32, u32) {
        (self.player_score, self.ai_score)
    }

    pub fn is_over(&self) -> bool {
        self.player_score >= WIN_SCORE || self.ai_score >= WIN_SCORE
    }

    pub fn player_won(&self) -> bool {
        self.player_score > self.ai_score
    }

    /// Banner shown once the match is decided
    pub fn result_label(&self) -> &'static str {
        if self.player_won() {
            "YOU WIN"
        } else {
            "GAME OVER"
        }
    }

    fn clamp_paddle(y: f64) -> f64 {
        y.clamp(0.0, FIELD_HEIGHT - PADDLE_HEIGHT)
    }

    pub fn move_player(&mut self, delta: f64) {
        self.player_y = Self::clamp_paddle(self.player_y + delta);
    }

    #[cfg(test)]
    fn set_ball(&mut self, ball: Ball) {
        self.ball = ball;
    }

    /// One simulation step
    pub fn step(&mut self) {
        if self.is_over() {
            return;
        }

        let ai_center = self.ai_y + PADDLE_HEIGHT / 2.0;
        if ai_center < self.ball.y - AI_DEAD_ZONE {
            self.ai_y += AI_SPEED;
        } else if ai_center > self.ball.y + AI_DEAD_ZONE {
            self.ai_y -= AI_SPEED;
        }
        self.ai_y = Self::clamp_paddle(self.ai_y);

        let ball = &mut self.ball;
        ball.x += ball.dx;
        ball.y += ball.dy;

        if ball.y < 0.0 || ball.y > FIELD_HEIGHT {
            ball.dy = -ball.dy;
        }

        // only reflect when travelling towards the paddle, so the ball
        // cannot get stuck flipping inside it
        if ball.dx < 0.0 && ball.x < PADDLE_WIDTH {
            Self::deflect(ball, self.player_y);
        }
        if ball.dx > 0.0 && ball.x > FIELD_WIDTH - PADDLE_WIDTH {
            Self::deflect(ball, self.ai_y);
        }

        if self.ball.x < 0.0 {
            self.ai_score += 1;
            self.serve();
        } else if self.ball.x > FIELD_WIDTH {
            self.player_score += 1;
            self.serve();
        }
    }

    fn deflect(ball: &mut Ball, paddle_y: f64) {
        if ball.y > paddle_y && ball.y < paddle_y + PADDLE_HEIGHT {
            ball.dx = -ball.dx;
            ball.dy = (ball.y - (paddle_y + PADDLE_HEIGHT / 2.0)) * SPIN;
            ball.dx += SPEED_UP * ball.dx.signum();
        }
    }

    /// Centre the ball and send it back the way it came from
    fn serve(&mut self) {
        self.ball.x = FIELD_WIDTH / 2.0;
        self.ball.y = FIELD_HEIGHT / 2.0;
        self.ball.dx = -self.ball.dx;
        self.ball.dy = 3.0;
    }

    fn restart(&mut self, now: Instant) {
        *self = Self::new(now);
    }

    pub fn handle_key(&mut self, key: &InputKey, now: Instant) -> ModeSignal {
        match key {
            InputKey::Esc => return ModeSignal::Exit,
            InputKey::Enter if self.is_over() => self.restart(now),
            InputKey::Up | InputKey::Char('w') | InputKey::Char('k') => {
                self.move_player(-PLAYER_STEP)
            }
            InputKey::Down | InputKey::Char('s') | InputKey::Char('j') => {
                self.move_player(PLAYER_STEP)
            }
            _ => {}
        }
        ModeSignal::Continue
    }

    pub fn tick(&mut self, now: Instant) -> ModeSignal {
        let mut steps = 0;
        while now.saturating_duration_since(self.last_step) >= STEP {
            self.last_step += STEP;
            if steps < MAX_CATCH_UP {
                self.step();
                steps += 1;
            }
        }
        ModeSignal::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> PongGame {
        PongGame::new(Instant::now())
    }

    #[test]
    fn test_initial_state() {
        let g = game();
        assert_eq!(g.scores(), (0, 0));
        assert_eq!(g.ball().dx, 5.0);
        assert_eq!(g.player_y(), 170.0);
        assert!(!g.is_over());
    }

    #[test]
    fn test_wall_bounce() {
        let mut g = game();
        g.set_ball(Ball { x: 300.0, y: 398.0, dx: 5.0, dy: 3.0 });
        g.step();
        assert_eq!(g.ball().dy, -3.0);
    }

    #[test]
    fn test_player_paddle_reflects_and_speeds_up() {
        let mut g = game();
        // paddle spans 170..230, centre 200
        g.set_ball(Ball { x: 12.0, y: 210.0, dx: -5.0, dy: 0.0 });
        g.step();
        let ball = g.ball();
        assert_eq!(ball.dx, 5.5);
        assert!((ball.dy - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_miss_scores_for_ai_and_serves_back() {
        let mut g = game();
        g.move_player(-1000.0);
        g.set_ball(Ball { x: 2.0, y: 390.0, dx: -5.0, dy: 0.0 });
        g.step();
        assert_eq!(g.scores(), (0, 1));
        let ball = g.ball();
        assert_eq!((ball.x, ball.y), (300.0, 200.0));
        assert_eq!(ball.dx, 5.0);
        assert_eq!(ball.dy, 3.0);
    }

    #[test]
    fn test_first_to_five_ends_match() {
        let mut g = game();
        g.player_score = 5;
        assert!(g.is_over());
        assert_eq!(g.result_label(), "YOU WIN");

        let before = g.ball();
        g.step();
        assert_eq!(g.ball(), before);

        g.player_score = 2;
        g.ai_score = 5;
        assert_eq!(g.result_label(), "GAME OVER");

        g.handle_key(&InputKey::Enter, Instant::now());
        assert_eq!(g.scores(), (0, 0));
    }

    #[test]
    fn test_player_paddle_is_clamped() {
        let mut g = game();
        let now = Instant::now();
        for _ in 0..50 {
            g.handle_key(&InputKey::Down, now);
        }
        assert_eq!(g.player_y(), FIELD_HEIGHT - PADDLE_HEIGHT);
        for _ in 0..50 {
            g.handle_key(&InputKey::Char('w'), now);
        }
        assert_eq!(g.player_y(), 0.0);
    }

    #[test]
    fn test_ai_tracks_outside_dead_zone() {
        let mut g = game();
        g.set_ball(Ball { x: 300.0, y: 350.0, dx: 0.0, dy: 0.0 });
        g.step();
        assert_eq!(g.ai_y(), 174.0);

        let mut g = game();
        g.set_ball(Ball { x: 300.0, y: 220.0, dx: 0.0, dy: 0.0 });
        g.step();
        assert_eq!(g.ai_y(), 170.0);
    }

    #[test]
    fn test_tick_runs_fixed_steps() {
        let t0 = Instant::now();
        let mut g = PongGame::new(t0);
        g.tick(t0 + Duration::from_millis(51));
        // three 16.7ms steps
        assert_eq!(g.ball().x, 315.0);
    }
}
