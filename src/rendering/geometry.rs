//! Static strip meshes: the unit flat square and the cuboid.
//!
//! Two clearly separate buffers, one shape each. Both are unit-size
//! around the origin with half extent [`BLOCK_HALF_EXTENT`] and get
//! their world placement entirely from the per-instance matrix.

use crate::sequencer::constants::BLOCK_HALF_EXTENT;

use super::Vertex;

const L: f32 = BLOCK_HALF_EXTENT;

/// Flat square in the z = 0 plane, one 4-vertex triangle strip. Drawn
/// for the static letter cells and every trail entry.
pub const QUAD_STRIP: [Vertex; 4] = [
    Vertex::new(-L, -L, 0.0),
    Vertex::new(-L, L, 0.0),
    Vertex::new(L, -L, 0.0),
    Vertex::new(L, L, 0.0),
];

/// Cuboid as a single 14-vertex triangle strip covering all six faces.
/// Drawn once per moving actor.
pub const CUBOID_STRIP: [Vertex; 14] = [
    Vertex::new(-L, L, L),
    Vertex::new(L, L, L),
    Vertex::new(-L, -L, L),
    Vertex::new(L, -L, L),
    Vertex::new(L, -L, -L),
    Vertex::new(L, L, L),
    Vertex::new(L, L, -L),
    Vertex::new(-L, L, L),
    Vertex::new(-L, L, -L),
    Vertex::new(-L, -L, L),
    Vertex::new(-L, -L, -L),
    Vertex::new(L, -L, -L),
    Vertex::new(-L, L, -L),
    Vertex::new(L, L, -L),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meshes_stay_within_half_extent() {
        for v in QUAD_STRIP.iter().chain(CUBOID_STRIP.iter()) {
            for c in v.position {
                assert!(c.abs() <= L);
            }
        }
        // The quad is flat, the cuboid is not.
        assert!(QUAD_STRIP.iter().all(|v| v.position[2] == 0.0));
        assert!(CUBOID_STRIP.iter().any(|v| v.position[2] != 0.0));
    }

    #[test]
    fn cuboid_strip_touches_all_eight_corners() {
        let mut corners: Vec<[f32; 3]> = CUBOID_STRIP.iter().map(|v| v.position).collect();
        corners.sort_by(|a, b| a.partial_cmp(b).unwrap());
        corners.dedup();
        assert_eq!(corners.len(), 8);
    }
}
