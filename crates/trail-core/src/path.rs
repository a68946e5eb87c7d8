use crate::chain::Node;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    MoveTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
}

/// Smooth curve through a chain: each interior node becomes the control point
/// of a quadratic ending halfway to its successor, and the last segment runs
/// from the second-to-last node straight into the tail.
///
/// Fewer than two nodes produce no path.
pub fn smooth_path_into(nodes: &[Node], out: &mut Vec<PathSegment>) {
    out.clear();
    let n = nodes.len();
    if n < 2 {
        return;
    }
    out.push(PathSegment::MoveTo(nodes[0].pos));
    for pair in nodes[1..n - 1].windows(2) {
        let (a, b) = (pair[0].pos, pair[1].pos);
        out.push(PathSegment::QuadTo {
            ctrl: a,
            to: a.lerp(b, 0.5),
        });
    }
    out.push(PathSegment::QuadTo {
        ctrl: nodes[n - 2].pos,
        to: nodes[n - 1].pos,
    });
}

pub fn smooth_path(nodes: &[Node]) -> Vec<PathSegment> {
    let mut out = Vec::with_capacity(nodes.len());
    smooth_path_into(nodes, &mut out);
    out
}
