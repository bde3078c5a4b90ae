use crate::{Ball, Config, Events, GameMap, Score, Side, Trail};
use hecs::World;

/// Check if ball left the court. The ball is parked at the centre when a
/// point is scored; returns the scoring side.
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) -> Option<Side> {
    for (_entity, (ball, trail)) in world.query_mut::<(&mut Ball, &mut Trail)>() {
        let scorer = if ball.pos.x - config.ball_radius < 0.0 {
            Some(Side::Right)
        } else if ball.pos.x + config.ball_radius > map.width {
            Some(Side::Left)
        } else {
            None
        };

        if let Some(side) = scorer {
            score.increment(side);
            events.scored = Some(side);
            ball.reset(map.ball_spawn());
            trail.clear();
            return Some(side);
        }
    }
    None
}
