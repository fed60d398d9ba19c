//! Drawing-surface boundary
//!
//! The sim draws through this trait and never touches the platform. The
//! production implementation is the canvas 2D adapter on wasm; tests plug in
//! their own recorder.

use crate::sim::ball::Hsl;

/// A surface the session can paint a frame onto. Coordinates are logical
/// units, matching the bounds the session was given.
pub trait DrawSurface {
    /// Wipe the whole surface.
    fn clear(&mut self);

    /// Filled circle centered at `(x, y)`.
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Hsl);
}

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

#[cfg(target_arch = "wasm32")]
mod canvas {
    use std::f64::consts::TAU;

    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use super::DrawSurface;
    use crate::sim::ball::Hsl;

    /// Canvas 2D adapter. Drawing happens in logical (CSS pixel) units; the
    /// backing store is scaled for the device pixel ratio.
    pub struct CanvasSurface {
        ctx: CanvasRenderingContext2d,
        width: f32,
        height: f32,
    }

    impl CanvasSurface {
        pub fn new(canvas: &HtmlCanvasElement, dpr: f64) -> Result<Self, JsValue> {
            let ctx: CanvasRenderingContext2d = canvas
                .get_context("2d")?
                .ok_or_else(|| JsValue::from_str("no 2d context"))?
                .dyn_into()?;
            let width = canvas.client_width() as f32;
            let height = canvas.client_height() as f32;
            let mut surface = Self { ctx, width, height };
            surface.resize(width, height, dpr);
            Ok(surface)
        }

        /// Match the backing store to a new CSS size, keeping logical-unit
        /// drawing intact. Setting the canvas size resets the context state,
        /// so the scale transform is reapplied each time.
        pub fn resize(&mut self, width: f32, height: f32, dpr: f64) {
            self.width = width;
            self.height = height;
            if let Some(canvas) = self.ctx.canvas() {
                canvas.set_width((width as f64 * dpr) as u32);
                canvas.set_height((height as f64 * dpr) as u32);
            }
            let _ = self.ctx.scale(dpr, dpr);
        }

        pub fn size(&self) -> (f32, f32) {
            (self.width, self.height)
        }
    }

    impl DrawSurface for CanvasSurface {
        fn clear(&mut self) {
            self.ctx
                .clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        }

        fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Hsl) {
            self.ctx.set_fill_style_str(&color.to_css());
            self.ctx.begin_path();
            let _ = self
                .ctx
                .arc(x as f64, y as f64, radius as f64, 0.0, TAU);
            self.ctx.fill();
        }
    }
}
