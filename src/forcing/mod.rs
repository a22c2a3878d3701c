//! Velocity forcing terms for the momentum tendency.
//!
//! # Submodules
//!
//! - [`traits`]: The [`VelocityForcing`] trait and [`CombinedForcing`]
//! - [`rayleigh`]: Rayleigh (linear) friction, full column and bottom level

pub mod rayleigh;
pub mod traits;

pub use rayleigh::{RayleighFriction, RAYLEIGH_SPAN};
pub use traits::{CombinedForcing, VelocityForcing};
