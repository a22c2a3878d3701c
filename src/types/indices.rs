//! Strongly-typed index newtypes.
//!
//! Keeps edge and vertical level indices apart in the per-edge column
//! loops, where both are plain `usize` underneath.

use std::fmt;

/// Macro to generate index newtypes with common functionality.
macro_rules! define_index {
    (
        $(#[$meta:meta])*
        $name:ident, $display_prefix:literal
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Create a new index.
            #[inline]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Get the raw index value.
            #[inline]
            pub const fn get(self) -> usize {
                self.0
            }

            /// First index (0).
            pub const ZERO: Self = Self(0);

            /// Create an iterator over [0, n) indices.
            pub fn iter(n: usize) -> impl ExactSizeIterator<Item = $name> {
                (0..n).map($name)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(index: usize) -> Self {
                Self(index)
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(idx: $name) -> usize {
                idx.0
            }
        }
    };
}

define_index!(
    /// Edge index in an unstructured horizontal mesh.
    ///
    /// Normal velocity lives on edges; owned edges come first, halo
    /// edges follow.
    ///
    /// # Example
    ///
    /// ```
    /// use rayleigh_rs::types::EdgeIndex;
    ///
    /// let edge = EdgeIndex::new(42);
    /// assert_eq!(edge.get(), 42);
    /// assert_eq!(edge.to_string(), "E42");
    /// ```
    EdgeIndex,
    "E"
);

define_index!(
    /// Vertical level index, 0 at the surface.
    ///
    /// The deepest active level of an edge with `n` active levels is `n - 1`.
    ///
    /// # Example
    ///
    /// ```
    /// use rayleigh_rs::types::LevelIndex;
    ///
    /// let level = LevelIndex::new(5);
    /// assert_eq!(level.get(), 5);
    /// ```
    LevelIndex,
    "L"
);
