use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng;

use crate::{Aabb, Config, GameRng};

/// Which half of the court: the human plays Left, the opponent plays Right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal sign of travel toward this side
    pub fn direction(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn random(rng: &mut GameRng) -> Self {
        if rng.0.gen_bool(0.5) {
            Side::Right
        } else {
            Side::Left
        }
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,       // Top edge, clamped to the surface
    pub bounce: bool, // Glows while set
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self {
            side,
            y,
            bounce: false,
        }
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.y + config.paddle_height / 2.0
    }

    pub fn rect(&self, config: &Config) -> Aabb {
        Aabb::from_top_left(
            Vec2::new(config.paddle_x(self.side), self.y),
            Vec2::new(config.paddle_width, config.paddle_height),
        )
    }
}

/// Ball component - position and velocity in pixels per frame
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Park the ball at `center` with no velocity
    pub fn reset(&mut self, center: Vec2) {
        self.pos = center;
        self.vel = Vec2::ZERO;
    }

    /// Launch toward `toward` with a random vertical sign
    pub fn launch(&mut self, toward: Side, config: &Config, rng: &mut GameRng) {
        let vy_sign = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(
            toward.direction() * config.serve_speed_x,
            vy_sign * config.serve_speed_y,
        );
    }

    pub fn bounds(&self, radius: f32) -> Aabb {
        Aabb::around_circle(self.pos, radius)
    }
}

/// Recent ball positions, oldest first
#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<Vec2>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, pos: Vec2) {
        self.points.push_back(pos);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.points.iter()
    }

    /// Opacity for the i-th point: newer points are more opaque
    pub fn alpha(&self, index: usize) -> f32 {
        if self.points.is_empty() {
            return 0.0;
        }
        (index + 1) as f32 / self.points.len() as f32 * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_evicts_oldest_first() {
        let mut trail = Trail::new(3);
        for i in 0..5 {
            trail.push(Vec2::new(i as f32, 0.0));
        }
        let xs: Vec<f32> = trail.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_trail_alpha_ramps_to_half() {
        let mut trail = Trail::new(12);
        for i in 0..4 {
            trail.push(Vec2::new(i as f32, 0.0));
        }
        assert_eq!(trail.alpha(0), 0.125);
        assert_eq!(trail.alpha(3), 0.5);
    }

    #[test]
    fn test_launch_direction_and_speed() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);

        ball.launch(Side::Left, &config, &mut rng);
        assert_eq!(ball.vel.x, -config.serve_speed_x);
        assert_eq!(ball.vel.y.abs(), config.serve_speed_y);

        ball.launch(Side::Right, &config, &mut rng);
        assert_eq!(ball.vel.x, config.serve_speed_x);
    }

    #[test]
    fn test_paddle_rect() {
        let config = Config::new();
        let paddle = Paddle::new(Side::Right, 100.0);
        let rect = paddle.rect(&config);
        assert_eq!(rect.min, Vec2::new(570.0, 100.0));
        assert_eq!(rect.max, Vec2::new(580.0, 180.0));
        assert_eq!(paddle.center_y(&config), 140.0);
    }

    #[test]
    fn test_side_helpers() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Left.direction(), -1.0);
        assert_eq!(Side::Right.direction(), 1.0);
    }
}
