use glam::Vec2;

/// Read-only view of the element tree under the overlay.
pub trait ElementQuery {
    type Element;

    /// Topmost element at a viewport point, if any.
    fn element_at(&self, point: Vec2) -> Option<Self::Element>;
    fn parent(&self, element: &Self::Element) -> Option<Self::Element>;
    fn has_attribute(&self, element: &Self::Element, name: &str) -> bool;
}

/// Hides the trail for a frame while the pointer sits over content that carries
/// the marker attribute, either directly or on an ancestor.
#[derive(Clone, Debug)]
pub struct OcclusionFilter {
    marker: String,
}

impl OcclusionFilter {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Evaluated fresh every frame. Any lookup that comes back empty means
    /// "draw normally".
    pub fn should_hide<Q: ElementQuery>(&self, query: &Q, point: Vec2) -> bool {
        if !point.is_finite() {
            return false;
        }
        let mut current = query.element_at(point);
        while let Some(element) = current {
            if query.has_attribute(&element, &self.marker) {
                return true;
            }
            current = query.parent(&element);
        }
        false
    }
}
