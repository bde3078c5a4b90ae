/// Game tuning parameters for Pong
///
/// Distances are in canvas pixels, speeds in pixels per frame and delays in
/// milliseconds of host time.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Surface
    pub const SURFACE_WIDTH: f32 = 600.0;
    pub const SURFACE_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_INSET: f32 = 20.0; // Gap between side wall and paddle

    // Ball
    pub const BALL_RADIUS: f32 = 9.0;
    pub const SERVE_SPEED_X: f32 = 4.0;
    pub const SERVE_SPEED_Y: f32 = 3.0;
    pub const MAX_BALL_SPEED: f32 = 10.0; // Cap on horizontal speed
    pub const BALL_SPEED_INCREMENT: f32 = 0.3; // Added on every paddle hit
    pub const DEFLECTION_SPEED: f32 = 5.0; // Vertical speed at the paddle tips
    pub const TRAIL_LEN: usize = 12;

    // Opponent
    pub const OPPONENT_SPEED: f32 = 40.0;
    pub const OPPONENT_DEAD_ZONE: f32 = 1.0;

    // Score
    pub const WIN_SCORE: u8 = 5; // First to 5 wins

    // Timing (ms)
    pub const SERVE_DELAY_MS: f64 = 800.0;
    pub const RESERVE_DELAY_MS: f64 = 1200.0;
    pub const BOUNCE_GLOW_MS: f64 = 200.0;
}
