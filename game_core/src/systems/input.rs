use crate::{Config, Paddle, Side};
use hecs::World;

/// Centre a paddle on the pointer's vertical position
pub fn apply_pointer(world: &mut World, side: Side, pointer_y: f32, config: &Config) {
    let target = config.clamp_paddle_y(pointer_y - config.paddle_height / 2.0);
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == side {
            paddle.y = target;
        }
    }
}
