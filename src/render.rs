use trail_core::{PathSegment, StrokeStyle, Surface};
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] backed by a 2D canvas context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// `None` when the browser cannot hand out a 2D context for this canvas.
    pub fn new(canvas: &web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            canvas: canvas.clone(),
            ctx,
        })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear(&mut self) {
        _ = self.ctx.set_global_composite_operation("source-over");
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn begin_stroke(&mut self, style: &StrokeStyle<'_>) {
        if let Err(e) = self.ctx.set_global_composite_operation(style.composite) {
            log::debug!("[render] composite {:?} rejected: {:?}", style.composite, e);
        }
        self.ctx.set_stroke_style_str(&style.css_color());
        self.ctx.set_line_width(style.line_width);
    }

    fn draw_path(&mut self, path: &[PathSegment]) {
        if path.is_empty() {
            return;
        }
        self.ctx.begin_path();
        for segment in path {
            match *segment {
                PathSegment::MoveTo(p) => self.ctx.move_to(p.x as f64, p.y as f64),
                PathSegment::QuadTo { ctrl, to } => self.ctx.quadratic_curve_to(
                    ctrl.x as f64,
                    ctrl.y as f64,
                    to.x as f64,
                    to.y as f64,
                ),
            }
        }
        self.ctx.stroke();
        self.ctx.close_path();
    }
}
