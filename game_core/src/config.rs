use crate::{Params, Side};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub surface_width: f32,
    pub surface_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub ball_radius: f32,
    pub serve_speed_x: f32,
    pub serve_speed_y: f32,
    pub max_ball_speed: f32,
    pub ball_speed_increment: f32,
    pub deflection_speed: f32,
    pub trail_len: usize,
    pub win_score: u8,
    pub serve_delay_ms: f64,
    pub reserve_delay_ms: f64,
    pub bounce_glow_ms: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface_width: Params::SURFACE_WIDTH,
            surface_height: Params::SURFACE_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            ball_radius: Params::BALL_RADIUS,
            serve_speed_x: Params::SERVE_SPEED_X,
            serve_speed_y: Params::SERVE_SPEED_Y,
            max_ball_speed: Params::MAX_BALL_SPEED,
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
            deflection_speed: Params::DEFLECTION_SPEED,
            trail_len: Params::TRAIL_LEN,
            win_score: Params::WIN_SCORE,
            serve_delay_ms: Params::SERVE_DELAY_MS,
            reserve_delay_ms: Params::RESERVE_DELAY_MS,
            bounce_glow_ms: Params::BOUNCE_GLOW_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same tuning on a surface of a different size
    pub fn with_surface(width: f32, height: f32) -> Self {
        Self {
            surface_width: width,
            surface_height: height,
            ..Self::default()
        }
    }

    /// Get the X of the paddle's left edge for a side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_inset,
            Side::Right => self.surface_width - self.paddle_inset - self.paddle_width,
        }
    }

    /// Clamp paddle top Y to surface bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.max_paddle_y())
    }

    pub fn max_paddle_y(&self) -> f32 {
        (self.surface_height - self.paddle_height).max(0.0)
    }

    /// Paddle top Y that centres it vertically
    pub fn centered_paddle_y(&self) -> f32 {
        (self.surface_height - self.paddle_height) / 2.0
    }
}
