// Host-side fakes for the trail-core seams: a frame host, a recording surface
// and a tiny element tree.

#![allow(dead_code)]

use glam::Vec2;
use trail_core::{ElementQuery, FrameHost, FrameToken, PathSegment, StrokeStyle, Surface};

#[derive(Default)]
pub struct FakeHost {
    pub next_id: i32,
    pub pending: Vec<FrameToken>,
    pub cancelled: Vec<FrameToken>,
    pub requests: usize,
    pub refuse: bool,
}

impl FrameHost for FakeHost {
    fn request_frame(&mut self) -> Option<FrameToken> {
        if self.refuse {
            return None;
        }
        self.next_id += 1;
        self.requests += 1;
        let token = FrameToken(self.next_id);
        self.pending.push(token);
        Some(token)
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.pending.retain(|t| *t != token);
        self.cancelled.push(token);
    }
}

impl FakeHost {
    /// Dequeue everything pending, as one display refresh would. Returns the
    /// tokens of the callbacks that fire.
    pub fn refresh(&mut self) -> Vec<FrameToken> {
        std::mem::take(&mut self.pending)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Clear,
    BeginStroke { color: String, composite: String, line_width: f64 },
    Path(Vec<PathSegment>),
}

pub struct RecordingSurface {
    pub width: f64,
    pub height: f64,
    pub calls: Vec<Call>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    pub fn paths(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, Call::Path(_))).count()
    }

    pub fn strokes(&self) -> Vec<&Call> {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::BeginStroke { .. }))
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.calls.push(Call::Clear);
    }

    fn begin_stroke(&mut self, style: &StrokeStyle<'_>) {
        self.calls.push(Call::BeginStroke {
            color: style.css_color(),
            composite: style.composite.to_string(),
            line_width: style.line_width,
        });
    }

    fn draw_path(&mut self, path: &[PathSegment]) {
        self.calls.push(Call::Path(path.to_vec()));
    }
}

pub struct FakeElement {
    pub parent: Option<usize>,
    pub attributes: Vec<&'static str>,
    /// Axis-aligned box: min, max.
    pub rect: (Vec2, Vec2),
}

/// Elements later in the list paint above earlier ones.
#[derive(Default)]
pub struct FakeDom {
    pub elements: Vec<FakeElement>,
}

impl FakeDom {
    pub fn add(
        &mut self,
        parent: Option<usize>,
        attributes: &[&'static str],
        min: (f32, f32),
        max: (f32, f32),
    ) -> usize {
        self.elements.push(FakeElement {
            parent,
            attributes: attributes.to_vec(),
            rect: (Vec2::new(min.0, min.1), Vec2::new(max.0, max.1)),
        });
        self.elements.len() - 1
    }
}

impl ElementQuery for FakeDom {
    type Element = usize;

    fn element_at(&self, point: Vec2) -> Option<usize> {
        self.elements
            .iter()
            .enumerate()
            .rev()
            .find(|(_, el)| {
                let (min, max) = el.rect;
                point.x >= min.x && point.y >= min.y && point.x <= max.x && point.y <= max.y
            })
            .map(|(i, _)| i)
    }

    fn parent(&self, element: &usize) -> Option<usize> {
        self.elements.get(*element).and_then(|el| el.parent)
    }

    fn has_attribute(&self, element: &usize, name: &str) -> bool {
        self.elements
            .get(*element)
            .map(|el| el.attributes.iter().any(|a| *a == name))
            .unwrap_or(false)
    }
}

/// A page with a full-viewport body and a marked photo at (100..200, 100..200)
/// containing an unmarked caption.
pub fn page_with_photo() -> FakeDom {
    let mut dom = FakeDom::default();
    let body = dom.add(None, &[], (0.0, 0.0), (1920.0, 1080.0));
    let photo = dom.add(Some(body), &["data-hide-cursor"], (100.0, 100.0), (200.0, 200.0));
    dom.add(Some(photo), &[], (120.0, 180.0), (180.0, 195.0));
    dom
}
