//! Edge-centred vertical fields.
//!
//! Normal velocity and its tendency share one layout: a value per
//! (level, edge) pair, stored column by column so that one edge's levels are
//! contiguous:
//!
//! ```text
//! data[edge * n_levels + level]
//! ```
//!
//! Column-major storage keeps each edge's writes in a disjoint slice, which
//! is what lets the forcing kernels hand out columns to worker threads.

use crate::error::{RayleighError, Result};
use crate::scalar::Real;
use crate::types::{EdgeIndex, LevelIndex};

/// Field defined at every (level, edge) point.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeField<S> {
    /// Values in column-major order.
    pub data: Vec<S>,
    /// Levels per column.
    pub n_levels: usize,
    /// Number of edges (owned and halo).
    pub n_edges: usize,
}

impl<S: Real> EdgeField<S> {
    /// Zero-initialised field.
    pub fn zeros(n_levels: usize, n_edges: usize) -> Self {
        Self {
            data: vec![S::zero(); n_levels * n_edges],
            n_levels,
            n_edges,
        }
    }

    /// Field with every value set to `value`.
    pub fn filled(n_levels: usize, n_edges: usize, value: S) -> Self {
        Self {
            data: vec![value; n_levels * n_edges],
            n_levels,
            n_edges,
        }
    }

    /// Wrap existing column-major data.
    pub fn from_vec(n_levels: usize, n_edges: usize, data: Vec<S>) -> Result<Self> {
        if data.len() != n_levels * n_edges {
            return Err(RayleighError::ShapeMismatch {
                expected: n_levels * n_edges,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            n_levels,
            n_edges,
        })
    }

    /// Build a field by evaluating `f(level, edge)` at every point.
    pub fn from_fn<F>(n_levels: usize, n_edges: usize, mut f: F) -> Self
    where
        F: FnMut(LevelIndex, EdgeIndex) -> S,
    {
        let mut data = Vec::with_capacity(n_levels * n_edges);
        for e in EdgeIndex::iter(n_edges) {
            for k in LevelIndex::iter(n_levels) {
                data.push(f(k, e));
            }
        }
        Self {
            data,
            n_levels,
            n_edges,
        }
    }

    #[inline]
    fn offset(&self, level: LevelIndex, edge: EdgeIndex) -> usize {
        debug_assert!(
            level.get() < self.n_levels,
            "level {level} outside {} levels",
            self.n_levels
        );
        debug_assert!(
            edge.get() < self.n_edges,
            "edge {edge} outside {} edges",
            self.n_edges
        );
        edge.get() * self.n_levels + level.get()
    }

    /// Value at (level, edge).
    #[inline]
    pub fn get(&self, level: LevelIndex, edge: EdgeIndex) -> S {
        self.data[self.offset(level, edge)]
    }

    /// Set the value at (level, edge).
    #[inline]
    pub fn set(&mut self, level: LevelIndex, edge: EdgeIndex, value: S) {
        let idx = self.offset(level, edge);
        self.data[idx] = value;
    }

    /// All levels of one edge.
    #[inline]
    pub fn column(&self, edge: EdgeIndex) -> &[S] {
        debug_assert!(edge.get() < self.n_edges);
        let start = edge.get() * self.n_levels;
        &self.data[start..start + self.n_levels]
    }

    /// All levels of one edge, mutably.
    #[inline]
    pub fn column_mut(&mut self, edge: EdgeIndex) -> &mut [S] {
        debug_assert!(edge.get() < self.n_edges);
        let start = edge.get() * self.n_levels;
        &mut self.data[start..start + self.n_levels]
    }

    /// Whether `other` has the same dimensions.
    pub fn same_shape(&self, other: &Self) -> bool {
        self.n_levels == other.n_levels && self.n_edges == other.n_edges
    }

    /// Set every value to zero (start of a new tendency stage).
    pub fn fill_zero(&mut self) {
        self.data.fill(S::zero());
    }

    /// Add c * other to self (axpy operation).
    pub fn axpy(&mut self, c: S, other: &Self) {
        assert!(self.same_shape(other));
        for (a, &b) in self.data.iter_mut().zip(other.data.iter()) {
            *a += c * b;
        }
    }

    /// Maximum absolute value.
    pub fn max_abs(&self) -> S {
        self.data
            .iter()
            .fold(S::zero(), |acc, &x| acc.max(x.abs()))
    }
}
