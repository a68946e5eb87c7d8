use glam::Vec2;
use trail_core::ElementQuery;
use web_sys as web;

/// Live DOM lookups for the occlusion filter; nothing is cached between frames.
pub struct DomQuery {
    document: web::Document,
}

impl DomQuery {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

impl ElementQuery for DomQuery {
    type Element = web::Element;

    fn element_at(&self, point: Vec2) -> Option<web::Element> {
        self.document.element_from_point(point.x, point.y)
    }

    fn parent(&self, element: &web::Element) -> Option<web::Element> {
        element.parent_element()
    }

    fn has_attribute(&self, element: &web::Element, name: &str) -> bool {
        element.has_attribute(name)
    }
}
