use crate::{Ball, Config, Events, GameMap, Paddle, Side};
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, map: &GameMap, config: &Config, events: &mut Events) {
    let paddles: Vec<(hecs::Entity, Paddle)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(e, p)| (e, *p))
        .collect();

    let mut struck = None;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if bounce_off_walls(ball, map, config) {
            events.ball_hit_wall = true;
        }

        for (entity, paddle) in &paddles {
            if bounce_off_paddle(ball, paddle, config) {
                struck = Some((*entity, paddle.side));
                break;
            }
        }
    }

    if let Some((entity, side)) = struck {
        if let Ok(mut paddle) = world.get::<&mut Paddle>(entity) {
            paddle.bounce = true;
        }
        events.ball_hit_paddle = Some(side);
    }
}

/// Reflect off the top and bottom edges. Returns true on contact.
pub fn bounce_off_walls(ball: &mut Ball, map: &GameMap, config: &Config) -> bool {
    let r = config.ball_radius;
    if ball.pos.y - r < 0.0 {
        ball.pos.y = r;
        ball.vel.y = -ball.vel.y;
        true
    } else if ball.pos.y + r > map.height {
        ball.pos.y = map.height - r;
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Return the ball off a paddle face. Returns true on contact.
///
/// The horizontal speed grows by a fixed step up to the cap and always points
/// away from the paddle; the vertical speed depends only on where the ball
/// met the paddle, from -1 at the top edge to +1 at the bottom.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, config: &Config) -> bool {
    let rect = paddle.rect(config);
    if !ball.bounds(config.ball_radius).overlaps(&rect) {
        return false;
    }

    // Push ball out of paddle
    ball.pos.x = match paddle.side {
        Side::Left => rect.max.x + config.ball_radius,
        Side::Right => rect.min.x - config.ball_radius,
    };

    let speed = (ball.vel.x.abs() + config.ball_speed_increment).min(config.max_ball_speed);
    ball.vel.x = -paddle.side.direction() * speed;

    let half_height = config.paddle_height / 2.0;
    // Hits past the paddle tips deflect no harder than a tip hit
    let hit_relative_y = ((ball.pos.y - paddle.center_y(config)) / half_height).clamp(-1.0, 1.0);
    ball.vel.y = hit_relative_y * config.deflection_speed;

    true
}
