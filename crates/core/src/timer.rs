//! Timer module - the single event queue driving the game loop
//!
//! Input and automatic descent share one FIFO. The descent timer is not a
//! thread: the loop reports elapsed wall time with [`EventQueue::advance`] and
//! the queue appends one [`GameEvent::Tick`] per elapsed interval.

use std::collections::VecDeque;

use crate::types::GameAction;

/// Everything the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A discrete player action
    Input(GameAction),
    /// Automatic descent timer fired
    Tick,
    /// Player asked to leave
    Quit,
}

/// Periodic timer measured in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTimer {
    interval_ms: u32,
    elapsed_ms: u32,
}

impl DropTimer {
    /// Create a timer firing every `interval_ms` (at least 1ms)
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Add elapsed time and return how many times the timer fired
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let total = self.elapsed_ms as u64 + elapsed_ms as u64;
        let fired = total / self.interval_ms as u64;
        self.elapsed_ms = (total % self.interval_ms as u64) as u32;
        fired as u32
    }

    /// Milliseconds until the next firing
    pub fn remaining_ms(&self) -> u32 {
        self.interval_ms - self.elapsed_ms
    }
}

/// FIFO of pending events plus the optional descent timer
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    pending: VecDeque<GameEvent>,
    timer: Option<DropTimer>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.pending.push_back(event);
    }

    pub fn pop(&mut self) -> Option<GameEvent> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Start (or restart) periodic ticks
    pub fn arm(&mut self, interval_ms: u32) {
        self.timer = Some(DropTimer::new(interval_ms));
    }

    /// Stop periodic ticks
    pub fn disarm(&mut self) {
        self.timer = None;
    }

    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// Account for elapsed wall time, queueing a `Tick` per fired interval.
    ///
    /// Returns the number of ticks queued.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let Some(timer) = self.timer.as_mut() else {
            return 0;
        };
        let fired = timer.advance(elapsed_ms);
        for _ in 0..fired {
            self.pending.push_back(GameEvent::Tick);
        }
        fired
    }

    /// Milliseconds until the timer fires, `None` when disarmed
    pub fn until_next_tick_ms(&self) -> Option<u32> {
        self.timer.map(|t| t.remaining_ms())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_timer_fires_on_interval() {
        let mut timer = DropTimer::new(490);
        assert_eq!(timer.advance(489), 0);
        assert_eq!(timer.remaining_ms(), 1);
        assert_eq!(timer.advance(1), 1);
        assert_eq!(timer.remaining_ms(), 490);
        assert_eq!(timer.advance(1000), 2);
        assert_eq!(timer.remaining_ms(), 470);
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let mut timer = DropTimer::new(0);
        assert_eq!(timer.interval_ms(), 1);
        assert_eq!(timer.advance(3), 3);
    }

    #[test]
    fn test_queue_is_fifo() {
        let mut queue = EventQueue::new();
        queue.push(GameEvent::Input(GameAction::MoveLeft));
        queue.push(GameEvent::Quit);

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop(), Some(GameEvent::Input(GameAction::MoveLeft)));
        assert_eq!(queue.pop(), Some(GameEvent::Quit));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_disarmed_queue_never_ticks() {
        let mut queue = EventQueue::new();
        assert_eq!(queue.advance(10_000), 0);
        assert!(queue.is_empty());
        assert_eq!(queue.until_next_tick_ms(), None);
    }

    #[test]
    fn test_ticks_interleave_with_input() {
        let mut queue = EventQueue::new();
        queue.arm(100);
        queue.push(GameEvent::Input(GameAction::RotateCw));
        assert_eq!(queue.advance(250), 2);
        assert_eq!(queue.until_next_tick_ms(), Some(50));

        assert_eq!(queue.pop(), Some(GameEvent::Input(GameAction::RotateCw)));
        assert_eq!(queue.pop(), Some(GameEvent::Tick));
        assert_eq!(queue.pop(), Some(GameEvent::Tick));
        assert!(queue.is_empty());

        queue.disarm();
        assert!(!queue.is_armed());
    }
}
