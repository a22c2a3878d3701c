//! Edge column extents of an unstructured mesh.
//!
//! The forcing kernel only needs two things from the mesh: how many edges the
//! local partition owns, and how many vertical levels are active at each edge
//! (fewer near the seafloor). [`EdgeColumns`] is that boundary; [`EdgeMesh`]
//! is a plain implementation holding the arrays directly.
//!
//! Edges are numbered owned-first, so halo edges occupy
//! `n_edges_owned()..n_edges()` and are never touched by forcing terms.

use crate::error::{RayleighError, Result};
use crate::types::EdgeIndex;

/// Per-edge vertical extents supplied by the mesh.
///
/// Implementations must be thread-safe (`Send + Sync`) so column loops can
/// run in parallel.
pub trait EdgeColumns: Send + Sync {
    /// Number of edges updated by this partition.
    fn n_edges_owned(&self) -> usize;

    /// Number of active levels at `edge`. Level `max_level(edge) - 1` is the
    /// deepest one above the seafloor.
    fn max_level(&self, edge: EdgeIndex) -> usize;
}

/// Mesh extents stored as flat arrays.
///
/// # Example
///
/// ```
/// use rayleigh_rs::mesh::{EdgeColumns, EdgeMesh};
/// use rayleigh_rs::types::EdgeIndex;
///
/// // Three edges, one of them a halo edge, up to 4 levels.
/// let mesh = EdgeMesh::new(4, vec![4, 2, 3], 2).unwrap();
/// assert_eq!(mesh.n_edges_owned(), 2);
/// assert_eq!(mesh.max_level(EdgeIndex::new(1)), 2);
/// ```
#[derive(Clone, Debug)]
pub struct EdgeMesh {
    n_levels: usize,
    max_level_edge: Vec<usize>,
    n_edges_owned: usize,
}

impl EdgeMesh {
    /// Create a mesh from per-edge active level counts.
    ///
    /// # Arguments
    /// * `n_levels` - Vertical levels in the full-depth column
    /// * `max_level_edge` - Active levels per edge (owned edges first)
    /// * `n_edges_owned` - How many leading edges this partition owns
    pub fn new(n_levels: usize, max_level_edge: Vec<usize>, n_edges_owned: usize) -> Result<Self> {
        if n_edges_owned > max_level_edge.len() {
            return Err(RayleighError::ShapeMismatch {
                expected: n_edges_owned,
                actual: max_level_edge.len(),
            });
        }
        if let Some((edge, &levels)) = max_level_edge
            .iter()
            .enumerate()
            .find(|(_, &levels)| levels > n_levels)
        {
            return Err(RayleighError::InvalidExtent {
                edge,
                levels,
                max_levels: n_levels,
            });
        }

        Ok(Self {
            n_levels,
            max_level_edge,
            n_edges_owned,
        })
    }

    /// Every edge owned and active over the full depth.
    pub fn uniform(n_levels: usize, n_edges: usize) -> Self {
        Self {
            n_levels,
            max_level_edge: vec![n_levels; n_edges],
            n_edges_owned: n_edges,
        }
    }

    /// Vertical levels in a full-depth column.
    pub fn n_levels(&self) -> usize {
        self.n_levels
    }

    /// Total edges, including halo edges.
    pub fn n_edges(&self) -> usize {
        self.max_level_edge.len()
    }

    /// Active level counts for all edges.
    pub fn max_level_edge(&self) -> &[usize] {
        &self.max_level_edge
    }
}

impl EdgeColumns for EdgeMesh {
    #[inline]
    fn n_edges_owned(&self) -> usize {
        self.n_edges_owned
    }

    #[inline]
    fn max_level(&self, edge: EdgeIndex) -> usize {
        self.max_level_edge[edge.get()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_mesh() {
        let mesh = EdgeMesh::uniform(10, 5);
        assert_eq!(mesh.n_edges(), 5);
        assert_eq!(mesh.n_edges_owned(), 5);
        for e in EdgeIndex::iter(5) {
            assert_eq!(mesh.max_level(e), 10);
        }
    }

    #[test]
    fn test_extent_above_depth_rejected() {
        let err = EdgeMesh::new(3, vec![3, 4], 2).unwrap_err();
        match err {
            RayleighError::InvalidExtent {
                edge,
                levels,
                max_levels,
            } => {
                assert_eq!(edge, 1);
                assert_eq!(levels, 4);
                assert_eq!(max_levels, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_owned_count_too_large() {
        let err = EdgeMesh::new(3, vec![3, 3], 3).unwrap_err();
        assert!(matches!(err, RayleighError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_land_edge_allowed() {
        let mesh = EdgeMesh::new(5, vec![0, 5], 2).unwrap();
        assert_eq!(mesh.max_level(EdgeIndex::ZERO), 0);
    }

    #[test]
    fn test_stepped_extents() {
        // Deep ocean to land, last edge is halo.
        let mesh = EdgeMesh::new(4, vec![4, 3, 2, 1, 0], 4).unwrap();

        assert_eq!(mesh.n_levels(), 4);
        assert_eq!(mesh.n_edges(), 5);
        assert_eq!(mesh.max_level_edge(), &[4, 3, 2, 1, 0]);
        assert_eq!(mesh.n_edges_owned(), 4);
    }
}
