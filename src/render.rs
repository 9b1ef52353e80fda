use crate::core::{DrawSurface, Hsla};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Acquire the 2-D context of the overlay canvas.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// [`DrawSurface`] backed by a canvas 2-D context.
///
/// Draw calls cannot meaningfully fail mid-frame, so JS-side errors are
/// discarded.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl DrawSurface for CanvasSurface {
    fn clear_region(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx
            .clear_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Hsla) {
        self.ctx.begin_path();
        _ = self.ctx.arc(cx as f64, cy as f64, radius as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }
}
