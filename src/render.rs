use crate::core::{hsla, BeamPlacement, BeamSurface, GradientStop, Viewport};
use web_sys as web;

/// `BeamSurface` backed by a 2D canvas context.
pub struct Canvas2dSurface {
    ctx: web::CanvasRenderingContext2d,
    dpr: f64,
}

impl Canvas2dSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx, dpr: 1.0 }
    }

    pub fn set_device_pixel_ratio(&mut self, dpr: f64) {
        self.dpr = dpr;
    }
}

impl BeamSurface for Canvas2dSurface {
    fn begin_frame(&mut self, viewport: Viewport, blur_px: f32) {
        // Simulation works in CSS pixels; scale once per frame for the backing store.
        _ = self
            .ctx
            .set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0);
        self.ctx
            .clear_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
        self.ctx.set_filter(&format!("blur({}px)", blur_px));
    }

    fn fill_beam(&mut self, placement: &BeamPlacement, hue: f32, stops: &[GradientStop]) {
        let ctx = &self.ctx;
        ctx.save();
        _ = ctx.translate(placement.origin.x as f64, placement.origin.y as f64);
        _ = ctx.rotate(placement.angle_rad as f64);

        let length = placement.length as f64;
        let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, length);
        for stop in stops {
            if let Err(e) = gradient.add_color_stop(stop.offset, &hsla(hue, stop.alpha)) {
                log::debug!("gradient stop rejected: {:?}", e);
            }
        }
        #[allow(deprecated)]
        ctx.set_fill_style(&gradient);
        let width = placement.width as f64;
        ctx.fill_rect(-width / 2.0, 0.0, width, length);
        ctx.restore();
    }
}
