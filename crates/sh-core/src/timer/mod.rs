//! Study timer state machine.
//!
//! A Pomodoro-style countdown cycling between work and break intervals.
//! The machine is pure: the caller drives it with one `tick()` per second
//! while it is running and owns the tick source (a single scheduled tick at
//! a time, torn down whenever the timer stops or the view goes away).

use serde::{Deserialize, Serialize};

/// Timer interval kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerMode {
    Work,
    Break,
}

impl TimerMode {
    /// Canonical interval length in minutes for this mode.
    pub fn default_minutes(&self) -> u32 {
        match self {
            Self::Work => 25,
            Self::Break => 5,
        }
    }

    /// The mode that follows this one when an interval completes.
    pub fn next(&self) -> Self {
        match self {
            Self::Work => Self::Break,
            Self::Break => Self::Work,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Work => "Work time",
            Self::Break => "Break",
        }
    }
}

/// Countdown timer state. Transient and process-local, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub minutes: u32,
    pub seconds: u32,
    pub mode: TimerMode,
    pub running: bool,
}

impl Default for Timer {
    fn default() -> Self {
        Self {
            minutes: TimerMode::Work.default_minutes(),
            seconds: 0,
            mode: TimerMode::Work,
            running: false,
        }
    }
}

impl Timer {
    /// Fresh timer: work mode, 25:00, stopped.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one second. No-op while stopped.
    ///
    /// Reaching 0:00 completes the interval: the timer stops, the mode
    /// flips, and the next interval's canonical time is armed. The end of
    /// one interval is always the ready-to-start state of the next, never a
    /// true halt.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        if self.seconds > 0 {
            self.seconds -= 1;
        } else if self.minutes > 0 {
            self.minutes -= 1;
            self.seconds = 59;
        }
        if self.minutes == 0 && self.seconds == 0 {
            self.complete_interval();
        }
    }

    /// Flip running. Toggling at 0:00 simply starts the just-armed interval.
    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    /// Stop and restore the canonical start time for the *current* mode.
    /// Does not switch modes.
    pub fn reset(&mut self) {
        self.running = false;
        self.minutes = self.mode.default_minutes();
        self.seconds = 0;
    }

    /// Force a mode and minute count, stopped at :00. Backs the manual
    /// 25/5/15-minute shortcuts; the 15-minute break is an irregular length
    /// outside the normal cycle and deliberately allowed.
    pub fn select_preset(&mut self, mode: TimerMode, minutes: u32) {
        self.mode = mode;
        self.minutes = minutes;
        self.seconds = 0;
        self.running = false;
    }

    /// `MM:SS` display string.
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.minutes, self.seconds)
    }

    fn complete_interval(&mut self) {
        self.running = false;
        self.mode = self.mode.next();
        self.minutes = self.mode.default_minutes();
        self.seconds = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let timer = Timer::new();
        assert_eq!(timer.mode, TimerMode::Work);
        assert_eq!(timer.minutes, 25);
        assert_eq!(timer.seconds, 0);
        assert!(!timer.running);
    }

    #[test]
    fn test_tick_is_noop_while_stopped() {
        let mut timer = Timer::new();
        timer.tick();
        assert_eq!(timer, Timer::new());
    }

    #[test]
    fn test_tick_decrements_and_borrows() {
        let mut timer = Timer::new();
        timer.toggle_running();
        timer.tick();
        assert_eq!((timer.minutes, timer.seconds), (24, 59));
        timer.tick();
        assert_eq!((timer.minutes, timer.seconds), (24, 58));
    }

    #[test]
    fn test_work_interval_completes_after_1500_ticks() {
        let mut timer = Timer::new();
        timer.toggle_running();
        for _ in 0..1500 {
            timer.tick();
        }
        // Auto-switched to a fresh break interval, stopped.
        assert_eq!(timer.mode, TimerMode::Break);
        assert_eq!((timer.minutes, timer.seconds), (5, 0));
        assert!(!timer.running);
    }

    #[test]
    fn test_reset_keeps_current_mode() {
        let mut timer = Timer::new();
        timer.toggle_running();
        for _ in 0..1500 {
            timer.tick();
        }
        // Now in break mode; run a bit, then reset.
        timer.toggle_running();
        timer.tick();
        timer.tick();
        timer.reset();
        assert_eq!(timer.mode, TimerMode::Break);
        assert_eq!((timer.minutes, timer.seconds), (5, 0));
        assert!(!timer.running);
    }

    #[test]
    fn test_break_rolls_back_to_work() {
        let mut timer = Timer::new();
        timer.select_preset(TimerMode::Break, 5);
        timer.toggle_running();
        for _ in 0..300 {
            timer.tick();
        }
        assert_eq!(timer.mode, TimerMode::Work);
        assert_eq!((timer.minutes, timer.seconds), (25, 0));
        assert!(!timer.running);
    }

    #[test]
    fn test_fifteen_minute_break_preset() {
        let mut timer = Timer::new();
        timer.select_preset(TimerMode::Break, 15);
        assert_eq!(timer.mode, TimerMode::Break);
        assert_eq!((timer.minutes, timer.seconds), (15, 0));
        assert!(!timer.running);
        // Reset after a preset restores the canonical break length, not 15.
        timer.reset();
        assert_eq!(timer.minutes, 5);
    }

    #[test]
    fn test_toggle_at_armed_interval_starts_it() {
        let mut timer = Timer::new();
        timer.toggle_running();
        for _ in 0..1500 {
            timer.tick();
        }
        timer.toggle_running();
        assert!(timer.running);
        timer.tick();
        assert_eq!((timer.minutes, timer.seconds), (4, 59));
    }

    #[test]
    fn test_display_pads() {
        let mut timer = Timer::new();
        assert_eq!(timer.display(), "25:00");
        timer.toggle_running();
        timer.tick();
        assert_eq!(timer.display(), "24:59");
    }
}
