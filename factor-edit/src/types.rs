use std::fmt;

use nalgebra::UnitQuaternion;

/// Identifier of a node in the remote pose graph.
pub type Key = u64;

/// A directed edge between two pose graph nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: Key,
    pub to: Key,
}

impl Edge {
    pub fn new(from: Key, to: Key) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// A loop closure factor to be submitted to the pose graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Factor {
    pub edge: Edge,
    pub rotation: UnitQuaternion<f64>,
}

impl Factor {
    pub fn new(edge: Edge, rotation: UnitQuaternion<f64>) -> Self {
        Self { edge, rotation }
    }

    /// Factor with the identity rotation.
    pub fn null(edge: Edge) -> Self {
        Self::new(edge, UnitQuaternion::identity())
    }

    /// Rotation components in `(w, x, y, z)` order.
    pub fn quaternion_wxyz(&self) -> [f64; 4] {
        let q = self.rotation.quaternion();
        [q.w, q.i, q.j, q.k]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_factor() {
        let factor = Factor::null(Edge::new(3, 7));
        assert_eq!(factor.quaternion_wxyz(), [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(factor.edge.to_string(), "3 -> 7");
    }
}
