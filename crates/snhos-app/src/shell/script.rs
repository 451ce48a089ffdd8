//! Timed output: scripted lines and the `sl` train.
//!
//! Nothing here owns a timer. Players hold their start instant and are
//! advanced by the app tick; dropping a player is all it takes to cancel it.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::output::OutputLine;

/// Ordered `(delay, line)` pairs, delays relative to the start
#[derive(Debug, Clone, Default)]
pub struct TimedScript {
    steps: Vec<(Duration, OutputLine)>,
}

impl TimedScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reveal `line` once `at_ms` milliseconds have passed
    pub fn at(mut self, at_ms: u64, line: OutputLine) -> Self {
        self.steps.push((Duration::from_millis(at_ms), line));
        self
    }

    /// Reveal several lines at the same moment, in order
    pub fn at_all(mut self, at_ms: u64, lines: impl IntoIterator<Item = OutputLine>) -> Self {
        let delay = Duration::from_millis(at_ms);
        self.steps.extend(lines.into_iter().map(|l| (delay, l)));
        self
    }

    pub fn start(mut self, now: Instant) -> ScriptPlayer {
        // stable: equal delays keep insertion order
        self.steps.sort_by_key(|(d, _)| *d);
        ScriptPlayer {
            pending: self.steps.into(),
            started: now,
        }
    }
}

/// A running [`TimedScript`]
#[derive(Debug)]
pub struct ScriptPlayer {
    pending: VecDeque<(Duration, OutputLine)>,
    started: Instant,
}

impl ScriptPlayer {
    /// Lines whose delay has elapsed at `now` and were not returned before
    pub fn advance(&mut self, now: Instant) -> Vec<OutputLine> {
        let elapsed = now.saturating_duration_since(self.started);
        let mut due = Vec::new();
        while self
            .pending
            .front()
            .is_some_and(|(delay, _)| *delay <= elapsed)
        {
            if let Some((_, line)) = self.pending.pop_front() {
                due.push(line);
            }
        }
        due
    }

    /// Stop revealing lines. Already revealed lines stay where they are.
    pub fn cancel(&mut self) {
        self.pending.clear();
    }

    pub fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Drawn by the view while a [`TrainRide`] is live
pub const TRAIN_ART: &str = r"      ====        ________                ___________
  _D _|  |_______/        \__I_I_____===__|_________|
   |(_)---  |   H\________/ |   |        |    |
   /     |  |   H  |  |     |   |        |    |
  |      |  |   H  |__-----------------------------|
  | ________|___H__/__|_____/[][]~\_______|___|___|
  |/ |   |-----------I_____I [][] []  D   |   |
__/  |   |  |    |   |  | _  __  _   _  |   |
|    |   |  |    |   |  |  |  |   |   | |   |
|____|___|__|____|___|__|__|__|___|___|_|___|";

/// Horizontal offset of the train in percent of the panel width
const TRAIN_START: i32 = 100;
const TRAIN_END: i32 = -100;
const TRAIN_STEP: Duration = Duration::from_millis(30);

/// The `sl` locomotive. Moves one percent to the left every 30ms from
/// fully off-screen right until it has left on the left.
#[derive(Debug, Clone)]
pub struct TrainRide {
    position: i32,
    last_step: Instant,
}

impl TrainRide {
    pub fn start(now: Instant) -> Self {
        Self {
            position: TRAIN_START,
            last_step: now,
        }
    }

    /// Current offset, `100` = just off the right edge, `-100` = gone left
    pub fn position(&self) -> i32 {
        self.position
    }

    /// Returns `false` once the train has left the panel
    pub fn advance(&mut self, now: Instant) -> bool {
        while now.saturating_duration_since(self.last_step) >= TRAIN_STEP {
            self.last_step += TRAIN_STEP;
            self.position -= 1;
            if self.position < TRAIN_END {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_script_reveals_lines_after_delay() {
        let t0 = Instant::now();
        let mut player = TimedScript::new()
            .at(400, OutputLine::plain("b"))
            .at(0, OutputLine::plain("a"))
            .at(800, OutputLine::plain("c"))
            .start(t0);

        let texts = |v: Vec<OutputLine>| v.iter().map(OutputLine::text).collect::<Vec<_>>();

        assert_eq!(texts(player.advance(t0)), vec!["a"]);
        assert!(player.advance(t0 + ms(399)).is_empty());
        assert_eq!(texts(player.advance(t0 + ms(400))), vec!["b"]);
        assert!(!player.is_finished());
        assert_eq!(texts(player.advance(t0 + ms(5000))), vec!["c"]);
        assert!(player.is_finished());
    }

    #[test]
    fn test_same_delay_keeps_insertion_order() {
        let t0 = Instant::now();
        let mut player = TimedScript::new()
            .at_all(
                100,
                [OutputLine::plain("1"), OutputLine::plain("2")],
            )
            .at(100, OutputLine::plain("3"))
            .start(t0);
        let got: Vec<String> = player.advance(t0 + ms(100)).iter().map(OutputLine::text).collect();
        assert_eq!(got, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_cancel_stops_reveal() {
        let t0 = Instant::now();
        let mut player = TimedScript::new()
            .at(100, OutputLine::plain("x"))
            .start(t0);
        player.cancel();
        assert!(player.advance(t0 + ms(1000)).is_empty());
        assert!(player.is_finished());
    }

    #[test]
    fn test_train_crosses_then_stops() {
        let t0 = Instant::now();
        let mut ride = TrainRide::start(t0);
        assert_eq!(ride.position(), 100);

        assert!(ride.advance(t0 + ms(300)));
        assert_eq!(ride.position(), 90);

        // 201 steps take it past -100
        assert!(!ride.advance(t0 + ms(30 * 201)));
    }
}
