//! One-shot timer queue driven by the host loop
//!
//! The controller schedules one-shot timers; the host polls for due ones and
//! feeds them back. `TimerQueue` is a cheap-clone handle, so the controller
//! can own one clone behind the `Scheduler` trait while the host polls
//! another.

use instant::Instant;
use splatview_core::{Scheduler, TimerId};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Default)]
struct TimerQueueState {
    next_id: u64,
    pending: Vec<(Instant, TimerId)>,
}

/// Real-time one-shot timer queue
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    state: Rc<RefCell<TimerQueueState>>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timers due at or before `now`, in firing order
    pub fn poll_due(&self, now: Instant) -> Vec<TimerId> {
        let mut state = self.state.borrow_mut();
        state.pending.sort_by_key(|&(deadline, _)| deadline);
        let due = state.pending.partition_point(|&(deadline, _)| deadline <= now);
        state.pending.drain(..due).map(|(_, id)| id).collect()
    }

    /// Number of timers still pending
    pub fn pending_count(&self) -> usize {
        self.state.borrow().pending.len()
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = TimerId(state.next_id);
        state.pending.push((Instant::now() + delay, id));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.state
            .borrow_mut()
            .pending
            .retain(|&(_, pending)| pending != id);
    }
}
