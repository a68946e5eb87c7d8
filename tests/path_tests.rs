// Host-side tests for curve smoothing through chain nodes.

use glam::Vec2;
use trail_core::{smooth_path, smooth_path_into, Node, PathSegment};

fn nodes(n: usize) -> Vec<Node> {
    (0..n)
        .map(|i| Node::at(Vec2::new(i as f32 * 10.0, (i * i) as f32)))
        .collect()
}

#[test]
fn fifty_nodes_give_one_move_and_forty_eight_curves() {
    let chain = nodes(50);
    let path = smooth_path(&chain);
    assert_eq!(path.len(), 49);
    assert_eq!(path[0], PathSegment::MoveTo(chain[0].pos));
    assert_eq!(
        path[48],
        PathSegment::QuadTo {
            ctrl: chain[48].pos,
            to: chain[49].pos
        }
    );
}

#[test]
fn interior_curves_end_at_midpoints() {
    let chain = nodes(6);
    let path = smooth_path(&chain);
    for (i, segment) in path[1..path.len() - 1].iter().enumerate() {
        let a = chain[i + 1].pos;
        let b = chain[i + 2].pos;
        assert_eq!(
            *segment,
            PathSegment::QuadTo {
                ctrl: a,
                to: (a + b) * 0.5
            }
        );
    }
}

#[test]
fn three_nodes_are_one_curve() {
    let chain = nodes(3);
    assert_eq!(
        smooth_path(&chain),
        vec![
            PathSegment::MoveTo(chain[0].pos),
            PathSegment::QuadTo {
                ctrl: chain[1].pos,
                to: chain[2].pos
            },
        ]
    );
}

#[test]
fn two_nodes_degrade_to_a_straight_curve() {
    let chain = nodes(2);
    assert_eq!(
        smooth_path(&chain),
        vec![
            PathSegment::MoveTo(chain[0].pos),
            PathSegment::QuadTo {
                ctrl: chain[0].pos,
                to: chain[1].pos
            },
        ]
    );
}

#[test]
fn fewer_than_two_nodes_draw_nothing() {
    assert!(smooth_path(&[]).is_empty());
    assert!(smooth_path(&nodes(1)).is_empty());
}

#[test]
fn scratch_buffer_is_replaced_not_appended() {
    let mut scratch = Vec::new();
    smooth_path_into(&nodes(10), &mut scratch);
    assert_eq!(scratch.len(), 9);
    smooth_path_into(&nodes(4), &mut scratch);
    assert_eq!(scratch.len(), 3);
}
