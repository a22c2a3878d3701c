//! Strongly-typed domain types for safer APIs.
//!
//! Edge and level indices are distinct newtypes so a column loop cannot
//! swap them by accident. All newtypes are `#[repr(transparent)]`.
//!
//! # Example
//!
//! ```
//! use rayleigh_rs::types::{EdgeIndex, LevelIndex};
//!
//! let edge = EdgeIndex::new(10);
//! let level = LevelIndex::new(3);
//! assert_eq!(edge.get() + level.get(), 13);
//! ```

mod indices;

pub use indices::{EdgeIndex, LevelIndex};
