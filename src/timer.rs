//! Delayed screen/card transitions. The original UI chained `setTimeout`
//! callbacks; here the round controller schedules a transition against a
//! deadline and the main loop polls it, so tests can drive the delays with
//! manufactured instants instead of sleeping.

use std::time::{Duration, Instant};

/// Pause between a resolved drop and the next card.
pub const ADVANCE_DELAY: Duration = Duration::from_millis(1500);
/// Pause between round completion and the finish screen.
pub const FINISH_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    NextCard,
    Finish,
}

/// Single-slot scheduler. The round never has more than one pending
/// transition; a second schedule while one is pending is ignored, which is
/// what makes duplicate resolution events harmless.
#[derive(Debug, Default)]
pub struct Scheduler {
    pending: Option<(Instant, Transition)>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, at: Instant, transition: Transition) {
        if self.pending.is_none() {
            self.pending = Some((at, transition));
        }
    }

    /// Takes the pending transition if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<Transition> {
        match self.pending {
            Some((deadline, transition)) if now >= deadline => {
                self.pending = None;
                Some(transition)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_only_at_deadline() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(start + ADVANCE_DELAY, Transition::NextCard);

        assert_eq!(scheduler.poll(start), None);
        assert_eq!(scheduler.poll(start + Duration::from_millis(1499)), None);
        assert_eq!(
            scheduler.poll(start + ADVANCE_DELAY),
            Some(Transition::NextCard)
        );
        assert!(!scheduler.is_pending());
    }

    #[test]
    fn test_fires_once() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(start, Transition::Finish);
        assert_eq!(scheduler.poll(start), Some(Transition::Finish));
        assert_eq!(scheduler.poll(start + FINISH_DELAY), None);
    }

    #[test]
    fn test_second_schedule_ignored_while_pending() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(start + ADVANCE_DELAY, Transition::NextCard);
        scheduler.schedule(start, Transition::Finish);
        assert_eq!(scheduler.poll(start), None);
        assert_eq!(
            scheduler.poll(start + ADVANCE_DELAY),
            Some(Transition::NextCard)
        );
    }

    #[test]
    fn test_empty_scheduler_polls_nothing() {
        let mut scheduler = Scheduler::new();
        assert_eq!(scheduler.poll(Instant::now()), None);
        assert!(!scheduler.is_pending());
    }
}
