//! Boot sequence shown before the desktop.
//!
//! Log lines appear every 400ms while the progress bar climbs 2% every
//! 30ms. The sequence is done 800ms after the bar reaches 100%.

use std::time::{Duration, Instant};

pub const BOOT_LINES: [&str; 8] = [
    "Initializing BIOS...",
    "Checking CPU... OK",
    "Checking RAM... 32GB OK",
    "Loading Kernel... SNH-510 v2.0",
    "Mounting File System...",
    "Loading Portfolio Assets...",
    "Establishing Secure Connection...",
    "Access Granted.",
];

const LINE_INTERVAL: Duration = Duration::from_millis(400);
const PROGRESS_INTERVAL: Duration = Duration::from_millis(30);
const PROGRESS_STEP: u8 = 2;
const GRACE: Duration = Duration::from_millis(800);

#[derive(Debug, Clone)]
pub struct BootSequence {
    started: Instant,
    visible: usize,
    progress: u8,
    /// When the bar hit 100%
    full_at: Option<Instant>,
    finished: bool,
}

impl BootSequence {
    pub fn new(now: Instant) -> Self {
        Self {
            started: now,
            visible: 0,
            progress: 0,
            full_at: None,
            finished: false,
        }
    }

    /// Lines revealed so far
    pub fn lines(&self) -> &[&'static str] {
        &BOOT_LINES[..self.visible]
    }

    /// `[0.1200]`-style timestamp for line `idx`
    pub fn stamp(idx: usize) -> String {
        format!("[{:.4}]", idx as f64 * 0.12)
    }

    /// Percent, 0..=100
    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Jump to the end
    pub fn skip(&mut self) {
        self.finished = true;
    }

    /// Advance to `now`. Returns `true` once the sequence is complete.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.finished {
            return true;
        }
        let elapsed = now.saturating_duration_since(self.started);

        let lines_due = (elapsed.as_millis() / LINE_INTERVAL.as_millis()) as usize;
        self.visible = lines_due.min(BOOT_LINES.len());

        let steps = elapsed.as_millis() / PROGRESS_INTERVAL.as_millis();
        let progress = (steps * u128::from(PROGRESS_STEP)).min(100) as u8;
        if progress == 100 && self.full_at.is_none() {
            // the bar is full on the step that reaches it
            let step_ms = (100 / u64::from(PROGRESS_STEP)) * PROGRESS_INTERVAL.as_millis() as u64;
            self.full_at = Some(self.started + Duration::from_millis(step_ms));
        }
        self.progress = progress;

        if let Some(full_at) = self.full_at {
            if now.saturating_duration_since(full_at) >= GRACE {
                self.finished = true;
            }
        }
        self.finished
    }
}
