//! One-shot deferred actions keyed to host time.
//!
//! Each action occupies a slot; scheduling into an occupied slot replaces the
//! pending action, so a serve can never be queued twice.

use crate::Side;

/// Something to do once its due time has passed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Give the parked ball its serve velocity
    Launch(Side),
    /// Clear the point message and start a new serve
    Reserve(Side),
    /// Stop a paddle's glow
    ClearBounce(Side),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Serve,
    Bounce(Side),
}

impl Deferred {
    pub fn slot(&self) -> Slot {
        match self {
            Deferred::Launch(_) | Deferred::Reserve(_) => Slot::Serve,
            Deferred::ClearBounce(side) => Slot::Bounce(*side),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    due: f64,
    action: Deferred,
}

#[derive(Debug, Clone, Default)]
pub struct Timers {
    pending: Vec<Pending>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `action` once `now + delay_ms` has passed, replacing whatever
    /// occupied the same slot
    pub fn schedule(&mut self, action: Deferred, now: f64, delay_ms: f64) {
        self.cancel(action.slot());
        self.pending.push(Pending {
            due: now + delay_ms,
            action,
        });
    }

    pub fn cancel(&mut self, slot: Slot) {
        self.pending.retain(|p| p.action.slot() != slot);
    }

    /// Remove and return every action due at `now`, earliest first
    pub fn drain_due(&mut self, now: f64) -> Vec<Deferred> {
        let mut due: Vec<Pending> = Vec::new();
        self.pending.retain(|p| {
            if p.due <= now {
                due.push(*p);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.due.total_cmp(&b.due));
        due.into_iter().map(|p| p.action).collect()
    }

    pub fn is_pending(&self, slot: Slot) -> bool {
        self.pending.iter().any(|p| p.action.slot() == slot)
    }

    /// Pending action in `slot` and when it fires
    pub fn peek(&self, slot: Slot) -> Option<(Deferred, f64)> {
        self.pending
            .iter()
            .find(|p| p.action.slot() == slot)
            .map(|p| (p.action, p.due))
    }
}
