//! Canvas 2D implementation of the game's drawing surface

use game_core::{Aabb, Color, Glow, Surface};
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::diag::console_warn;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, rect: Aabb, color: Color, glow: Option<Glow>) {
        let size = rect.size();
        self.ctx.save();
        if let Some(glow) = glow {
            self.ctx.set_shadow_color(&glow.color.to_css());
            self.ctx.set_shadow_blur(glow.blur as f64);
        }
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(
            rect.min.x as f64,
            rect.min.y as f64,
            size.x as f64,
            size.y as f64,
        );
        self.ctx.restore();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, alpha: f32) {
        self.ctx.save();
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            console_warn!("arc failed: {:?}", e);
        }
        self.ctx.close_path();
        self.ctx.fill();
        self.ctx.restore();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.ctx.save();
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
        self.ctx.restore();
    }

    fn dashed_line(&mut self, from: Vec2, to: Vec2, color: Color, dash: [f32; 2]) {
        let pattern = js_sys::Array::of2(&(dash[0] as f64).into(), &(dash[1] as f64).into());
        self.ctx.save();
        self.ctx.set_stroke_style_str(&color.to_css());
        if let Err(e) = self.ctx.set_line_dash(&pattern) {
            console_warn!("set_line_dash failed: {:?}", e);
        }
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
        // Restoring also resets the dash pattern
        self.ctx.restore();
    }
}
