//! Per-rally counters built from the frame events

use game_core::{Events, Side};

/// How a finished rally went
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RallySummary {
    pub scorer: Side,
    pub paddle_hits: u32,
    pub wall_bounces: u32,
}

#[derive(Debug, Default)]
pub struct RallyLog {
    paddle_hits: u32,
    wall_bounces: u32,
}

impl RallyLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one frame's events in. Returns the summary when the rally ends.
    pub fn observe(&mut self, events: &Events) -> Option<RallySummary> {
        // A serve and the first step can share a frame
        if events.served {
            *self = Self::default();
        }
        if events.ball_hit_wall {
            self.wall_bounces += 1;
        }
        if events.ball_hit_paddle.is_some() {
            self.paddle_hits += 1;
        }

        events.scored.map(|scorer| RallySummary {
            scorer,
            paddle_hits: self.paddle_hits,
            wall_bounces: self.wall_bounces,
        })
    }
}
