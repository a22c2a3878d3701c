//! # rayleigh-rs
//!
//! Rayleigh friction forcing for the normal-velocity momentum equation of
//! an unstructured-mesh ocean model.
//!
//! The crate provides:
//! - Configuration lookup and resolution of the friction switches and rates
//! - Edge-centred vertical fields for velocity and tendency
//! - Mesh column extents (active levels per edge, owned edge count)
//! - The tendency kernel, serial and (with the `parallel` feature) Rayon-based
//! - A forcing trait so the term slots into a larger tendency accumulator
//!
//! # Example
//!
//! ```
//! use rayleigh_rs::{EdgeField, EdgeMesh, RayleighConfig, RayleighFriction};
//!
//! let config = RayleighConfig::disabled().with_friction(1.0e-4);
//! let friction = RayleighFriction::init(&config).unwrap();
//!
//! let mesh = EdgeMesh::new(3, vec![3, 2], 2).unwrap();
//! let velocity = EdgeField::filled(3, 2, 0.5_f64);
//! let mut tendency = EdgeField::zeros(3, 2);
//!
//! friction.apply_tendency(&mesh, &velocity, &mut tendency).unwrap();
//! assert!(tendency.data.iter().all(|&t| t <= 0.0));
//! ```

pub mod config;
pub mod error;
pub mod field;
pub mod forcing;
pub mod mesh;
pub mod scalar;
pub mod types;

pub use config::{ConfigStore, JsonConfigStore, RayleighConfig};
pub use error::{status_of, RayleighError, Result, STATUS_SUCCESS};
pub use field::EdgeField;
pub use forcing::{CombinedForcing, RayleighFriction, VelocityForcing, RAYLEIGH_SPAN};
pub use mesh::{EdgeColumns, EdgeMesh};
pub use scalar::Real;
pub use types::{EdgeIndex, LevelIndex};
