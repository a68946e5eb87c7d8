use crate::config::StrokeSettings;
use crate::path::PathSegment;

/// Drawing target for the trail. The web front-end wraps a 2D canvas context;
/// tests record calls.
pub trait Surface {
    /// Backing size in pixels.
    fn size(&self) -> (f64, f64);
    fn clear(&mut self);
    fn begin_stroke(&mut self, style: &StrokeStyle<'_>);
    fn draw_path(&mut self, path: &[PathSegment]);
}

#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle<'a> {
    pub hue: i32,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: f32,
    pub line_width: f64,
    pub composite: &'a str,
}

impl<'a> StrokeStyle<'a> {
    pub fn new(hue: i32, settings: &'a StrokeSettings) -> Self {
        Self {
            hue,
            saturation: settings.saturation,
            lightness: settings.lightness,
            alpha: settings.alpha,
            line_width: settings.line_width,
            composite: &settings.composite,
        }
    }

    pub fn css_color(&self) -> String {
        format!(
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

/// True when a surface has something to draw into.
#[inline]
pub fn has_area(size: (f64, f64)) -> bool {
    size.0 > 0.0 && size.1 > 0.0
}
