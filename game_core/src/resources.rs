use crate::Side;

/// Host clock for the current frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub now: f64, // Milliseconds, as reported by the host
}

impl Time {
    pub fn new(now: f64) -> Self {
        Self { now }
    }

    pub fn advance(&mut self, now: f64) {
        // Ignore a clock that steps backwards
        self.now = self.now.max(now);
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,  // Human
    pub right: u8, // Opponent
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Whether physics is suspended for a serve or a finished match
#[derive(Debug, Clone, Copy, Default)]
pub struct ServeState {
    serving: bool,
}

impl ServeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_serving(&self) -> bool {
        self.serving
    }

    pub fn suspend(&mut self) {
        self.serving = true;
    }

    pub fn resume(&mut self) {
        self.serving = false;
    }
}

/// Text shown next to the scores
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hud {
    pub message: Option<String>,
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear(&mut self) {
        self.message = None;
    }

    pub fn point_message(scorer: Side) -> &'static str {
        match scorer {
            Side::Left => "You scored!",
            Side::Right => "AI scored!",
        }
    }

    pub fn win_message(winner: Side) -> &'static str {
        match winner {
            Side::Left => "You win! Click to restart.",
            Side::Right => "AI wins! Click to restart.",
        }
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: Option<Side>,
    pub scored: Option<Side>,
    pub match_won: Option<Side>,
    pub served: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
