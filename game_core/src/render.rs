//! Scene drawing against an abstract 2D surface.
//!
//! The browser client implements [`Surface`] over a canvas context; tests use
//! a recorder.

use glam::Vec2;

use crate::{Aabb, Game, GameMap, Paddle, Side, Trail};

/// RGBA colour; alpha in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS colour string, e.g. `rgba(0,229,255,0.2)`
    pub fn to_css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Soft shadow drawn around a shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub color: Color,
    pub blur: f32,
}

pub struct Palette;

impl Palette {
    pub const PADDLE: Color = Color::rgb(255, 255, 255);
    pub const BALL: Color = Color::rgb(0, 229, 255);
    pub const TRAIL: Color = Color::rgba(0, 229, 255, 0.2);
    pub const NET: Color = Color::rgb(57, 255, 247);
    pub const BACKGROUND_LINE: Color = Color::rgb(0, 229, 255);
    pub const PADDLE_GLOW: Glow = Glow {
        color: Color::rgb(0, 229, 255),
        blur: 18.0,
    };
    pub const NET_DASH: [f32; 2] = [9.0, 13.0];
}

/// Primitive drawing operations the scene is built from
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, rect: Aabb, color: Color, glow: Option<Glow>);
    /// `alpha` multiplies the colour's own alpha
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, alpha: f32);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32);
    fn dashed_line(&mut self, from: Vec2, to: Vec2, color: Color, dash: [f32; 2]);
}

/// Draw the whole scene; `now_ms` animates the background
pub fn draw_frame<S: Surface + ?Sized>(game: &Game, surface: &mut S, now_ms: f64) {
    surface.clear(game.map.width, game.map.height);
    draw_background(surface, &game.map, now_ms);
    draw_net(surface, &game.map);

    for side in [Side::Left, Side::Right] {
        if let Some(paddle) = game.paddle(side) {
            draw_paddle(surface, &paddle, game);
        }
    }

    let radius = game.config.ball_radius;
    for (_e, trail) in game.world.query::<&Trail>().iter() {
        for (i, point) in trail.iter().enumerate() {
            surface.fill_circle(*point, radius, Palette::TRAIL, trail.alpha(i));
        }
    }

    if let Some(ball) = game.ball() {
        surface.fill_circle(ball.pos, radius, Palette::BALL, 1.0);
    }
}

/// Three slowly drifting diagonal lines
fn draw_background<S: Surface + ?Sized>(surface: &mut S, map: &GameMap, now_ms: f64) {
    let t = now_ms * 0.002;
    for i in 0..3 {
        let fi = i as f64;
        let y = 80.0 + fi * 100.0 + (t + fi).sin() * 15.0;
        let y_end = y + (t + fi * 2.0).cos() * 15.0;
        let color = Palette::BACKGROUND_LINE.with_alpha(0.08 + 0.04 * i as f32);
        surface.stroke_line(
            Vec2::new(0.0, y as f32),
            Vec2::new(map.width, y_end as f32),
            color,
            3.0 + i as f32,
        );
    }
}

fn draw_net<S: Surface + ?Sized>(surface: &mut S, map: &GameMap) {
    let x = map.width / 2.0;
    surface.dashed_line(
        Vec2::new(x, 0.0),
        Vec2::new(x, map.height),
        Palette::NET,
        Palette::NET_DASH,
    );
}

fn draw_paddle<S: Surface + ?Sized>(surface: &mut S, paddle: &Paddle, game: &Game) {
    let glow = paddle.bounce.then_some(Palette::PADDLE_GLOW);
    surface.fill_rect(paddle.rect(&game.config), Palette::PADDLE, glow);
}
