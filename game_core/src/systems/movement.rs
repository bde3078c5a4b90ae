use crate::{Ball, Config, Paddle, Trail};
use hecs::World;

/// Move ball by its velocity and record the new position in its trail
pub fn move_ball(world: &mut World) {
    for (_entity, (ball, trail)) in world.query_mut::<(&mut Ball, &mut Trail)>() {
        ball.pos += ball.vel;
        trail.push(ball.pos);
    }
}

/// Keep every paddle on the surface
pub fn clamp_paddles(world: &mut World, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}
