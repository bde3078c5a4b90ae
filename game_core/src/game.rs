//! A single-player match against the tracking opponent.
//!
//! The host calls [`Game::frame`] once per display refresh with its clock in
//! milliseconds, forwards pointer and click input, and draws with
//! [`crate::draw_frame`]. Everything else, including the serve delays, runs
//! inside the frame call.

use glam::Vec2;
use hecs::World;
use tracing::{debug, info};

use crate::{
    apply_pointer, create_ball, create_paddle, step, Ball, Config, Deferred, Events, GameMap,
    GameRng, Hud, OpponentPolicy, Paddle, PerfectTracker, Score, ServeState, Side, Slot, Time,
    Timers, Trail,
};

pub struct Game {
    pub world: World,
    pub time: Time,
    pub map: GameMap,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub hud: Hud,
    pub timers: Timers,
    pub serve: ServeState,
    pub rng: GameRng,
    policy: Box<dyn OpponentPolicy>,
}

impl Game {
    pub fn new(seed: u64, now: f64) -> Self {
        Self::with_config(Config::new(), seed, now)
    }

    /// Set up both paddles and the ball, then serve in a random direction
    pub fn with_config(config: Config, seed: u64, now: f64) -> Self {
        let map = GameMap::new(&config);
        let mut world = World::new();

        let paddle_y = config.centered_paddle_y();
        create_paddle(&mut world, Side::Left, paddle_y);
        create_paddle(&mut world, Side::Right, paddle_y);
        create_ball(&mut world, map.ball_spawn(), Vec2::ZERO, &config);

        let mut game = Self {
            world,
            time: Time::new(now),
            map,
            config,
            score: Score::new(),
            events: Events::new(),
            hud: Hud::new(),
            timers: Timers::new(),
            serve: ServeState::new(),
            rng: GameRng::new(seed),
            policy: Box::new(PerfectTracker::default()),
        };

        let toward = Side::random(&mut game.rng);
        game.start_serve(toward);
        game
    }

    /// Replace the opponent's behaviour
    pub fn with_policy(mut self, policy: impl OpponentPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Run one animation frame at host time `now`
    pub fn frame(&mut self, now: f64) {
        self.time.advance(now);
        self.events.clear();

        for action in self.timers.drain_due(self.time.now) {
            self.run_deferred(action);
        }

        if self.serve.is_serving() {
            return;
        }

        step(
            &mut self.world,
            &self.map,
            &self.config,
            self.policy.as_ref(),
            &mut self.score,
            &mut self.events,
        );

        if let Some(side) = self.events.ball_hit_paddle {
            debug!(?side, "paddle struck");
            self.timers.schedule(
                Deferred::ClearBounce(side),
                self.time.now,
                self.config.bounce_glow_ms,
            );
        }

        if let Some(scorer) = self.events.scored {
            self.award_point(scorer);
        }
    }

    /// Human paddle follows the pointer's vertical position
    pub fn pointer_moved(&mut self, pointer_y: f32) {
        apply_pointer(&mut self.world, Side::Left, pointer_y, &self.config);
    }

    /// Restart after a finished match. Returns false (and does nothing)
    /// while the match is still being played.
    pub fn click(&mut self) -> bool {
        if self.winner().is_none() {
            return false;
        }

        info!("match restarted");
        self.score.reset();
        self.hud.clear();
        self.timers.cancel(Slot::Serve);
        let toward = Side::random(&mut self.rng);
        self.start_serve(toward);
        true
    }

    /// Park the ball at the centre and launch it toward `toward` after the
    /// serve delay
    pub fn start_serve(&mut self, toward: Side) {
        let center = self.map.ball_spawn();
        for (_entity, (ball, trail)) in self.world.query_mut::<(&mut Ball, &mut Trail)>() {
            ball.reset(center);
            trail.clear();
        }
        self.serve.suspend();
        self.timers.schedule(
            Deferred::Launch(toward),
            self.time.now,
            self.config.serve_delay_ms,
        );
        debug!(?toward, "serve pending");
    }

    fn award_point(&mut self, scorer: Side) {
        self.serve.suspend();
        info!(
            ?scorer,
            left = self.score.left,
            right = self.score.right,
            "point scored"
        );

        if let Some(winner) = self.score.has_winner(self.config.win_score) {
            self.events.match_won = Some(winner);
            self.timers.cancel(Slot::Serve);
            self.hud.show(Hud::win_message(winner));
            info!(?winner, "match over");
        } else {
            self.hud.show(Hud::point_message(scorer));
            self.timers.schedule(
                Deferred::Reserve(scorer.opposite()),
                self.time.now,
                self.config.reserve_delay_ms,
            );
        }
    }

    fn run_deferred(&mut self, action: Deferred) {
        match action {
            Deferred::Launch(toward) => {
                let (config, rng) = (&self.config, &mut self.rng);
                for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
                    ball.launch(toward, config, rng);
                }
                self.serve.resume();
                self.events.served = true;
                debug!(?toward, "ball served");
            }
            Deferred::Reserve(toward) => {
                self.hud.clear();
                self.start_serve(toward);
            }
            Deferred::ClearBounce(side) => {
                for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
                    if paddle.side == side {
                        paddle.bounce = false;
                    }
                }
            }
        }
    }

    pub fn winner(&self) -> Option<Side> {
        self.score.has_winner(self.config.win_score)
    }

    pub fn is_serving(&self) -> bool {
        self.serve.is_serving()
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    /// Trail points, oldest first
    pub fn trail(&self) -> Vec<Vec2> {
        self.world
            .query::<&Trail>()
            .iter()
            .next()
            .map(|(_e, trail)| trail.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Overwrite the ball's state; used to set up rallies in tests and demos
    pub fn place_ball(&mut self, pos: Vec2, vel: Vec2) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Params;

    const T0: f64 = 1000.0;

    /// A game whose opening serve has just launched
    fn rally() -> Game {
        let mut game = Game::new(42, T0);
        game.frame(T0 + Params::SERVE_DELAY_MS);
        assert!(!game.is_serving());
        game
    }

    #[test]
    fn test_new_game_waits_for_serve() {
        let mut game = Game::new(1, T0);
        assert!(game.is_serving());
        assert_eq!(game.ball().unwrap().vel, Vec2::ZERO);

        game.frame(T0 + 400.0);
        assert!(game.is_serving(), "Serve delay not yet elapsed");
        assert_eq!(game.ball().unwrap().pos, game.map.ball_spawn());

        game.frame(T0 + 800.0);
        assert!(!game.is_serving());
        assert!(game.events.served);
        let vel = game.ball().unwrap().vel;
        assert_eq!(vel.x.abs(), Params::SERVE_SPEED_X);
        assert_eq!(vel.y.abs(), Params::SERVE_SPEED_Y);
    }

    #[test]
    fn test_ball_moves_once_served() {
        let mut game = rally();
        let before = game.ball().unwrap();
        game.frame(T0 + 816.0);
        let after = game.ball().unwrap();
        assert_eq!(after.pos, before.pos + before.vel);
        // One entry from the launch frame, one from this frame
        assert_eq!(game.trail().len(), 2);
        assert_eq!(game.trail().last(), Some(&after.pos));
    }

    #[test]
    fn test_left_exit_scores_for_opponent() {
        let mut game = rally();
        game.place_ball(Vec2::new(5.0, 300.0), Vec2::new(-4.0, 0.0));

        game.frame(T0 + 816.0);

        assert_eq!(game.events.scored, Some(Side::Right));
        assert_eq!(game.score, Score { left: 0, right: 1 });
        assert!(game.is_serving());
        assert_eq!(game.ball().unwrap().pos, game.map.ball_spawn());
        assert_eq!(game.ball().unwrap().vel, Vec2::ZERO);
        assert!(game.trail().is_empty());
        assert_eq!(game.hud.message.as_deref(), Some("AI scored!"));
        assert_eq!(
            game.timers.peek(Slot::Serve),
            Some((
                Deferred::Reserve(Side::Left),
                T0 + 816.0 + Params::RESERVE_DELAY_MS
            ))
        );
    }

    #[test]
    fn test_reserve_clears_message_then_launches() {
        let mut game = rally();
        game.place_ball(Vec2::new(595.0, 100.0), Vec2::new(4.0, 0.0));
        game.frame(T0 + 816.0);
        assert_eq!(game.score.left, 1);
        assert_eq!(game.hud.message.as_deref(), Some("You scored!"));

        let reserve_at = T0 + 816.0 + Params::RESERVE_DELAY_MS;
        game.frame(reserve_at);
        assert!(game.hud.message.is_none());
        assert!(game.is_serving());
        assert_eq!(
            game.timers.peek(Slot::Serve),
            Some((Deferred::Launch(Side::Right), reserve_at + Params::SERVE_DELAY_MS))
        );

        game.frame(reserve_at + Params::SERVE_DELAY_MS);
        assert!(!game.is_serving());
        assert_eq!(game.ball().unwrap().vel.x, Params::SERVE_SPEED_X);
    }

    #[test]
    fn test_paddle_glow_clears_after_delay() {
        let mut game = rally();
        let left_y = game.paddle(Side::Left).unwrap().y;
        game.place_ball(Vec2::new(39.0, left_y + 40.0), Vec2::new(-4.0, 0.0));

        let hit_at = T0 + 816.0;
        game.frame(hit_at);
        assert_eq!(game.events.ball_hit_paddle, Some(Side::Left));
        assert!(game.paddle(Side::Left).unwrap().bounce);

        game.frame(hit_at + 100.0);
        assert!(game.paddle(Side::Left).unwrap().bounce);

        game.frame(hit_at + Params::BOUNCE_GLOW_MS);
        assert!(!game.paddle(Side::Left).unwrap().bounce);
    }

    #[test]
    fn test_opponent_does_not_move_while_serving() {
        let mut game = Game::new(3, T0);
        let before = game.paddle(Side::Right).unwrap().y;
        game.place_ball(Vec2::new(300.0, 390.0), Vec2::ZERO);
        game.frame(T0 + 16.0);
        assert_eq!(game.paddle(Side::Right).unwrap().y, before);
    }

    #[test]
    fn test_pointer_moves_human_paddle_even_while_serving() {
        let mut game = Game::new(3, T0);
        game.pointer_moved(100.0);
        assert_eq!(game.paddle(Side::Left).unwrap().y, 60.0);
        game.pointer_moved(-40.0);
        assert_eq!(game.paddle(Side::Left).unwrap().y, 0.0);
    }

    #[test]
    fn test_click_ignored_mid_match() {
        let mut game = rally();
        game.score = Score { left: 4, right: 4 };
        assert!(!game.click());
        assert_eq!(game.score, Score { left: 4, right: 4 });
        assert!(!game.is_serving());
    }

    #[test]
    fn test_win_halts_serving_and_click_restarts() {
        let mut game = rally();
        game.score = Score { left: 2, right: 4 };
        game.place_ball(Vec2::new(5.0, 300.0), Vec2::new(-4.0, 0.0));

        let won_at = T0 + 816.0;
        game.frame(won_at);
        assert_eq!(game.events.match_won, Some(Side::Right));
        assert_eq!(game.winner(), Some(Side::Right));
        assert_eq!(game.hud.message.as_deref(), Some("AI wins! Click to restart."));
        assert!(!game.timers.is_pending(Slot::Serve));

        game.frame(won_at + 10_000.0);
        assert!(game.is_serving(), "Finished match stays halted");

        assert!(game.click());
        assert_eq!(game.score, Score::new());
        assert!(game.hud.message.is_none());
        assert!(game.is_serving());
        assert!(matches!(
            game.timers.peek(Slot::Serve),
            Some((Deferred::Launch(_), _))
        ));

        game.frame(won_at + 10_000.0 + Params::SERVE_DELAY_MS);
        assert!(!game.is_serving());
    }

    #[test]
    fn test_human_reaching_five_wins() {
        let mut game = rally();
        game.score = Score { left: 4, right: 0 };
        game.place_ball(Vec2::new(595.0, 100.0), Vec2::new(4.0, 0.0));

        game.frame(T0 + 816.0);

        assert_eq!(game.events.scored, Some(Side::Left));
        assert_eq!(game.events.match_won, Some(Side::Left));
        assert_eq!(game.winner(), Some(Side::Left));
        assert_eq!(game.hud.message.as_deref(), Some("You win! Click to restart."));
        assert!(!game.timers.is_pending(Slot::Serve));
        assert!(game.is_serving());
    }

    #[test]
    fn test_custom_policy_is_used() {
        struct Frozen;
        impl OpponentPolicy for Frozen {
            fn next_y(&self, paddle_y: f32, _ball: &Ball, _config: &Config) -> f32 {
                paddle_y
            }
        }

        let mut game = Game::new(5, T0).with_policy(Frozen);
        game.frame(T0 + Params::SERVE_DELAY_MS);
        game.place_ball(Vec2::new(300.0, 380.0), Vec2::new(4.0, 0.0));
        let before = game.paddle(Side::Right).unwrap().y;

        game.frame(T0 + 816.0);

        assert_eq!(game.paddle(Side::Right).unwrap().y, before);
    }
}
