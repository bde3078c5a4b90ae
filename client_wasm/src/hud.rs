//! Score and message display state

use game_core::Game;

/// What the score and message elements should currently show
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HudView {
    pub player_score: String,
    pub ai_score: String,
    pub message: String,
}

impl HudView {
    pub fn from_game(game: &Game) -> Self {
        Self {
            player_score: game.score.left.to_string(),
            ai_score: game.score.right.to_string(),
            message: game.hud.message.clone().unwrap_or_default(),
        }
    }
}

/// Remembers the last view written to the page so the DOM is touched only
/// when something changed
#[derive(Debug, Default)]
pub struct HudTracker {
    last: Option<HudView>,
}

impl HudTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The view to write, or None if the page is already up to date
    pub fn update(&mut self, game: &Game) -> Option<HudView> {
        let view = HudView::from_game(game);
        if self.last.as_ref() == Some(&view) {
            return None;
        }
        self.last = Some(view.clone());
        Some(view)
    }
}
