//! Spring-damper particle chains.
//!
//! A chain is a contiguous run of [`Node`]s. The head is pulled toward the
//! pointer, every later node toward its predecessor. Stepping walks the slice
//! front to back so node `i` always reads node `i - 1` as already advanced for
//! the current tick; that ordering is what makes the strand whip.

use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Node {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Node {
    #[inline]
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
        }
    }
}

/// Coupling shared by every chain of an effect instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coupling {
    pub dampening: f32,
    pub tension: f32,
}

#[derive(Clone, Debug)]
pub struct Chain {
    nodes: Vec<Node>,
    spring: f32,
    friction: f32,
}

impl Chain {
    pub fn new(spring: f32, friction: f32, size: usize, origin: Vec2) -> Self {
        Self {
            nodes: vec![Node::at(origin); size],
            spring,
            friction,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn spring(&self) -> f32 {
        self.spring
    }

    pub fn friction(&self) -> f32 {
        self.friction
    }

    pub fn head(&self) -> Option<&Node> {
        self.nodes.first()
    }

    pub fn step(&mut self, target: Vec2, coupling: Coupling) {
        step_nodes(&mut self.nodes, target, self.spring, self.friction, coupling);
    }
}

/// Advance one tick with explicit Euler integration.
///
/// No clamping is applied: a fast pointer flick produces a large excursion
/// that friction pulls back within a few frames.
pub fn step_nodes(nodes: &mut [Node], target: Vec2, spring: f32, friction: f32, coupling: Coupling) {
    let Some((head, tail)) = nodes.split_first_mut() else {
        return;
    };
    let mut k = spring;
    head.vel += (target - head.pos) * k;
    head.vel *= friction;
    head.pos += head.vel;
    k *= coupling.tension;

    let mut prev = *head;
    for node in tail {
        node.vel += (prev.pos - node.pos) * k;
        node.vel += prev.vel * coupling.dampening;
        node.vel *= friction;
        node.pos += node.vel;
        k *= coupling.tension;
        prev = *node;
    }
}
