use std::time::Duration;

/// What a [`CycleTimer`] did while catching up to the current elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleEvent {
    /// The repeating timer fired; the active window opens now.
    Fired,
    /// The one-shot elapsed; the active window closes now.
    Reverted,
}

/// A repeating timer composed with a cancellable one-shot.
///
/// Fires every `period`, first at `t = period`. Each firing arms a one-shot
/// that reverts `hold` later. Re-arming cancels any pending one-shot, so at
/// most one revert is in flight at a time.
#[derive(Debug, Clone)]
pub struct CycleTimer {
    period: Duration,
    hold: Duration,
    next_fire: Duration,
    revert_at: Option<Duration>,
}

impl CycleTimer {
    pub fn new(period: Duration, hold: Duration) -> Self {
        Self {
            period,
            hold,
            next_fire: period,
            revert_at: None,
        }
    }

    /// True while a revert is pending, i.e. inside the hold window.
    pub fn is_active(&self) -> bool {
        self.revert_at.is_some()
    }

    /// Replays every firing and revert due by `elapsed`, oldest first.
    ///
    /// A revert and a firing due at the same instant resolve revert-first, so
    /// a catch-up over a period boundary still ends with the window open.
    pub fn advance<F: FnMut(CycleEvent)>(&mut self, elapsed: Duration, mut on_event: F) {
        loop {
            match self.revert_at {
                Some(at) if at <= elapsed && (self.next_fire > elapsed || at <= self.next_fire) => {
                    self.revert_at = None;
                    on_event(CycleEvent::Reverted);
                }
                _ if self.next_fire <= elapsed => {
                    self.revert_at = Some(self.next_fire + self.hold);
                    self.next_fire += self.period;
                    on_event(CycleEvent::Fired);
                }
                _ => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    fn drain(timer: &mut CycleTimer, elapsed: Duration) -> Vec<CycleEvent> {
        let mut events = Vec::new();
        timer.advance(elapsed, |event| events.push(event));
        events
    }

    #[test]
    fn first_firing_waits_a_full_period() {
        let mut timer = CycleTimer::new(secs(7), secs(5));
        assert!(drain(&mut timer, Duration::from_millis(6_999)).is_empty());
        assert!(!timer.is_active());
        assert_eq!(drain(&mut timer, secs(7)), [CycleEvent::Fired]);
        assert!(timer.is_active());
    }

    #[test]
    fn reverts_after_hold_elapses() {
        let mut timer = CycleTimer::new(secs(7), secs(5));
        assert_eq!(
            drain(&mut timer, secs(13)),
            [CycleEvent::Fired, CycleEvent::Reverted]
        );
        assert!(!timer.is_active());
    }

    #[test]
    fn rearm_cancels_pending_revert() {
        // hold longer than the period forces every firing to land on a
        // still-pending revert
        let mut timer = CycleTimer::new(secs(4), secs(10));
        assert_eq!(drain(&mut timer, secs(4)), [CycleEvent::Fired]);
        assert_eq!(drain(&mut timer, secs(9)), [CycleEvent::Fired]);
        assert!(timer.is_active());
        // the revert armed at t=4 (due t=14) was cancelled; only the one from
        // t=8 (due t=18) remains, and the next firing at t=12 replaces it too
        assert_eq!(drain(&mut timer, secs(13)), [CycleEvent::Fired]);
        assert_eq!(drain(&mut timer, secs(30)), [
            CycleEvent::Fired,
            CycleEvent::Fired,
            CycleEvent::Fired,
            CycleEvent::Fired,
        ]);
    }

    #[test]
    fn catch_up_replays_in_order() {
        let mut timer = CycleTimer::new(secs(7), secs(5));
        // firings at 7, 14, 21, 28; reverts at 12, 19, 26; 33 still pending
        assert_eq!(drain(&mut timer, secs(30)), [
            CycleEvent::Fired,
            CycleEvent::Reverted,
            CycleEvent::Fired,
            CycleEvent::Reverted,
            CycleEvent::Fired,
            CycleEvent::Reverted,
            CycleEvent::Fired,
        ]);
        assert!(timer.is_active());
    }

    #[test]
    fn advance_to_same_time_is_idempotent() {
        let mut timer = CycleTimer::new(secs(7), secs(5));
        assert_eq!(drain(&mut timer, secs(13)).len(), 2);
        assert!(drain(&mut timer, secs(13)).is_empty());
        assert!(drain(&mut timer, Duration::from_millis(13_900)).is_empty());
    }
}
