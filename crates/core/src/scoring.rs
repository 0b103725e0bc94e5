//! Scoring module - score counter, level and descent speed
//!
//! Classic flat scoring: every freeze and every cleared row is worth a fixed
//! number of points times the current level. The same events feed a progress
//! counter; once it reaches the goal the level goes up by one and progress
//! restarts from zero.

use crate::types::{
    BASE_DROP_MS, DROP_MS_PER_LEVEL, FREEZE_POINTS, LEVEL_UP_POINTS, LINE_POINTS, START_LEVEL,
};

/// Score and level bookkeeping for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    counter: u32,
    level: u32,
    next: u32,
    next_max: u32,
}

impl Score {
    pub fn new() -> Self {
        Self {
            counter: 0,
            level: START_LEVEL,
            next: 0,
            next_max: LEVEL_UP_POINTS,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_level(level: u32) -> Self {
        Self {
            level,
            ..Self::new()
        }
    }

    /// Total points
    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Progress toward the next level
    pub fn next(&self) -> u32 {
        self.next
    }

    /// Progress needed for the next level
    pub fn next_max(&self) -> u32 {
        self.next_max
    }

    /// Award the points for a frozen piece
    pub fn on_freeze(&mut self) {
        self.counter = self
            .counter
            .saturating_add(FREEZE_POINTS.saturating_mul(self.level));
        self.next = self.next.saturating_add(FREEZE_POINTS);
    }

    /// Award the points for `lines` cleared rows
    pub fn on_lines_cleared(&mut self, lines: u32) {
        if lines == 0 {
            return;
        }
        let points = LINE_POINTS.saturating_mul(self.level).saturating_mul(lines);
        self.counter = self.counter.saturating_add(points);
        self.next = self.next.saturating_add(LINE_POINTS.saturating_mul(lines));
    }

    /// Advance one level if the progress goal has been reached.
    ///
    /// Returns true if the level changed.
    pub fn apply_level_up(&mut self) -> bool {
        if self.next < self.next_max {
            return false;
        }
        self.next = 0;
        self.level += 1;
        true
    }

    /// Descent interval for the current level, `None` if it is not positive
    pub fn drop_interval_ms(&self) -> Option<u32> {
        drop_interval_ms(self.level)
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::new()
    }
}

/// Descent interval in milliseconds for `level`.
///
/// The interval is never clamped: from level 50 on it is not positive and the
/// caller treats that as the end of the game.
pub fn drop_interval_ms(level: u32) -> Option<u32> {
    let ms = BASE_DROP_MS as i64 - DROP_MS_PER_LEVEL as i64 * level as i64;
    if ms <= 0 {
        None
    } else {
        Some(ms as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_score() {
        let score = Score::new();
        assert_eq!(score.counter(), 0);
        assert_eq!(score.level(), 1);
        assert_eq!(score.next(), 0);
        assert_eq!(score.next_max(), 500);
    }

    #[test]
    fn test_freeze_points_scale_with_level() {
        let mut score = Score::with_level(3);
        score.on_freeze();
        assert_eq!(score.counter(), 30);
        assert_eq!(score.next(), 10);
    }

    #[test]
    fn test_line_points_per_row() {
        let mut score = Score::with_level(2);
        score.on_lines_cleared(4);
        assert_eq!(score.counter(), 800);
        assert_eq!(score.next(), 400);

        score.on_lines_cleared(0);
        assert_eq!(score.counter(), 800);
    }

    #[test]
    fn test_level_up_resets_progress() {
        let mut score = Score::new();
        score.on_lines_cleared(4);
        assert!(!score.apply_level_up());

        score.on_lines_cleared(1);
        assert_eq!(score.next(), 500);
        assert!(score.apply_level_up());
        assert_eq!(score.level(), 2);
        assert_eq!(score.next(), 0);
        assert!(!score.apply_level_up());
    }

    #[test]
    fn test_drop_interval() {
        assert_eq!(drop_interval_ms(0), Some(500));
        assert_eq!(drop_interval_ms(1), Some(490));
        assert_eq!(drop_interval_ms(49), Some(10));
        assert_eq!(drop_interval_ms(50), None);
        assert_eq!(drop_interval_ms(1000), None);
        assert_eq!(Score::new().drop_interval_ms(), Some(490));
    }
}
