//! Game clock with Fischer increment support
//!
//! Each side starts with a base time in whole seconds. One second is taken
//! from the side to move per tick while the clock runs. After a completed
//! move the mover is credited the increment (0 by default, i.e. a plain
//! sudden-death clock).
//!
//! Example: 600 + 5 means ten minutes base time with five seconds per move.

use crate::game::GameResult;
use chess_engine::Color;

/// Per-side remaining time in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameClock {
    /// White's remaining time in seconds
    pub white: u32,
    /// Black's remaining time in seconds
    pub black: u32,
    /// Seconds added to the mover after each completed move
    pub increment: u32,
    /// Whether ticks currently take time off
    pub running: bool,
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new(600, 0)
    }
}

impl GameClock {
    /// A stopped clock with `seconds` for each side
    pub fn new(seconds: u32, increment: u32) -> Self {
        Self {
            white: seconds,
            black: seconds,
            increment,
            running: false,
        }
    }

    pub fn remaining(&self, color: Color) -> u32 {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    fn remaining_mut(&mut self, color: Color) -> &mut u32 {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Restore both sides to `seconds` and stop
    pub fn reset(&mut self, seconds: u32) {
        *self = Self::new(seconds, self.increment);
    }

    /// Take one second from `to_move`
    ///
    /// Returns `TimeOut(opponent)` the moment `to_move` reaches zero; the
    /// clock stops at that point. A stopped clock never changes.
    pub fn tick(&mut self, to_move: Color) -> Option<GameResult> {
        if !self.running {
            return None;
        }

        let left = self.remaining_mut(to_move);
        *left = left.saturating_sub(1);
        if *left == 0 {
            self.running = false;
            return Some(GameResult::TimeOut(to_move.other()));
        }
        None
    }

    /// Credit the increment to the side that just moved
    pub fn apply_increment(&mut self, mover: Color) {
        if self.increment > 0 {
            let increment = self.increment;
            *self.remaining_mut(mover) += increment;
        }
    }

    /// Remaining time as `MM:SS`
    pub fn format(&self, color: Color) -> String {
        let seconds = self.remaining(color);
        format!("{:02}:{:02}", seconds / 60, seconds % 60)
    }
}
