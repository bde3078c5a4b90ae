use crate::{Ball, Config, Paddle, Params, Side};
use hecs::World;

/// Decides where the opponent paddle goes next frame
pub trait OpponentPolicy {
    /// Next top Y for the paddle. The caller clamps the result.
    fn next_y(&self, paddle_y: f32, ball: &Ball, config: &Config) -> f32;
}

/// Moves the paddle centre onto the ball faster than the ball can travel
/// vertically, so it never misses.
#[derive(Debug, Clone, Copy)]
pub struct PerfectTracker {
    pub speed: f32,
    pub dead_zone: f32,
}

impl Default for PerfectTracker {
    fn default() -> Self {
        Self {
            speed: Params::OPPONENT_SPEED,
            dead_zone: Params::OPPONENT_DEAD_ZONE,
        }
    }
}

impl OpponentPolicy for PerfectTracker {
    fn next_y(&self, paddle_y: f32, ball: &Ball, config: &Config) -> f32 {
        let center = paddle_y + config.paddle_height / 2.0;
        let target = ball.pos.y;

        if center < target - self.dead_zone {
            paddle_y + self.speed
        } else if center > target + self.dead_zone {
            paddle_y - self.speed
        } else {
            paddle_y
        }
    }
}

/// Move the opponent paddle per `policy`, clamped to the surface
pub fn track_opponent(world: &mut World, policy: &dyn OpponentPolicy, config: &Config) {
    let ball = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| *ball);
    let Some(ball) = ball else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Right {
            paddle.y = config.clamp_paddle_y(policy.next_y(paddle.y, &ball, config));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn opponent_y(world: &World) -> f32 {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == Side::Right)
            .map(|(_e, p)| p.y)
            .unwrap()
    }

    #[test]
    fn test_tracker_steps_toward_ball() {
        let config = Config::new();
        let tracker = PerfectTracker::default();
        let below = Ball::new(Vec2::new(300.0, 350.0), Vec2::ZERO);
        let above = Ball::new(Vec2::new(300.0, 20.0), Vec2::ZERO);

        assert_eq!(tracker.next_y(160.0, &below, &config), 200.0);
        assert_eq!(tracker.next_y(160.0, &above, &config), 120.0);
    }

    #[test]
    fn test_tracker_holds_inside_dead_zone() {
        let config = Config::new();
        let tracker = PerfectTracker::default();
        let ball = Ball::new(Vec2::new(300.0, 200.5), Vec2::ZERO);

        assert_eq!(tracker.next_y(160.0, &ball, &config), 160.0);
    }

    #[test]
    fn test_track_opponent_clamps() {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Side::Right, 300.0);
        create_ball(&mut world, Vec2::new(300.0, 395.0), Vec2::ZERO, &config);

        track_opponent(&mut world, &PerfectTracker::default(), &config);

        assert_eq!(opponent_y(&world), config.max_paddle_y());
    }

    #[test]
    fn test_track_opponent_leaves_human_alone() {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, 0.0);
        create_paddle(&mut world, Side::Right, 0.0);
        create_ball(&mut world, Vec2::new(300.0, 300.0), Vec2::ZERO, &config);

        track_opponent(&mut world, &PerfectTracker::default(), &config);

        for (_e, paddle) in world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Left => assert_eq!(paddle.y, 0.0),
                Side::Right => assert_eq!(paddle.y, 40.0),
            }
        }
    }

    #[test]
    fn test_custom_policy() {
        struct Frozen;
        impl OpponentPolicy for Frozen {
            fn next_y(&self, paddle_y: f32, _ball: &Ball, _config: &Config) -> f32 {
                paddle_y
            }
        }

        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Side::Right, 10.0);
        create_ball(&mut world, Vec2::new(300.0, 390.0), Vec2::ZERO, &config);

        track_opponent(&mut world, &Frozen, &config);

        assert_eq!(opponent_y(&world), 10.0);
    }
}
