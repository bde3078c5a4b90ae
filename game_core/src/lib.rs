//! Simulation core for single-player Pong.
//!
//! No browser types live here. Progress is reported through `tracing`
//! events, which reach a subscriber only when a native embedder installs
//! one; the wasm client logs to the console itself.

pub mod components;
pub mod config;
pub mod game;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;
pub mod timers;

pub use components::*;
pub use config::*;
pub use game::*;
pub use map::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use systems::*;
pub use timers::*;

use hecs::World;

/// Advance the rally by one frame: move, collide, score, then let the
/// opponent react. Callers skip this while a serve is pending.
pub fn step(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    policy: &dyn OpponentPolicy,
    score: &mut Score,
    events: &mut Events,
) {
    // 1. Human paddle may have been pushed by input since last frame
    clamp_paddles(world, config);

    // 2. Move ball and record trail
    move_ball(world);

    // 3. Walls and paddles
    check_collisions(world, map, config, events);

    // 4. Ball out of court
    check_scoring(world, map, config, score, events);

    // 5. Opponent follows the ball
    track_opponent(world, policy, config);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the ball entity with an empty trail
pub fn create_ball(
    world: &mut World,
    pos: glam::Vec2,
    vel: glam::Vec2,
    config: &Config,
) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel), Trail::new(config.trail_len)))
}
