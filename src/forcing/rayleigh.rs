//! Rayleigh friction on normal velocity.
//!
//! Linear damping of the velocity toward rest:
//!
//! ```text
//! du/dt = ... - c · u
//! ```
//!
//! Used mainly to absorb the transients of a cold start, where the initial
//! velocity and layer thickness fields are not in balance. Two independent
//! terms are available:
//!
//! - **Full column**: applied at every active level of every owned edge.
//! - **Bottom only**: applied at the deepest active level of each edge.
//!
//! When both are on they stack at the bottom level.
//!
//! The bottom term is applied with the full-column rate `damping_coeff`.
//! `bottom_damping_coeff` is read and stored but does not enter the tendency.

use tracing::{info, info_span, warn};

use crate::config::{ConfigStore, RayleighConfig};
use crate::error::Result;
use crate::field::EdgeField;
use crate::forcing::VelocityForcing;
use crate::mesh::EdgeColumns;
use crate::scalar::Real;
use crate::types::EdgeIndex;

/// Name of the timing span opened around an active evaluation.
pub const RAYLEIGH_SPAN: &str = "rayleigh_friction";

/// Resolved Rayleigh friction state.
///
/// Built once before time stepping and passed by reference to every
/// tendency evaluation. A disabled term always carries a zero coefficient.
///
/// # Example
///
/// ```
/// use rayleigh_rs::config::RayleighConfig;
/// use rayleigh_rs::field::EdgeField;
/// use rayleigh_rs::forcing::RayleighFriction;
/// use rayleigh_rs::mesh::EdgeMesh;
///
/// let friction = RayleighFriction::init(&RayleighConfig::disabled().with_friction(0.1)).unwrap();
///
/// let mesh = EdgeMesh::uniform(3, 1);
/// let velocity = EdgeField::from_vec(3, 1, vec![1.0, 2.0, 3.0]).unwrap();
/// let mut tendency = EdgeField::zeros(3, 1);
///
/// friction.apply_tendency(&mesh, &velocity, &mut tendency).unwrap();
/// for (got, want) in tendency.data.iter().zip([-0.1_f64, -0.2, -0.3]) {
///     assert!((got - want).abs() < 1e-15);
/// }
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RayleighFriction {
    friction_enabled: bool,
    bottom_friction_enabled: bool,
    damping_coeff: f64,
    bottom_damping_coeff: f64,
}

impl RayleighFriction {
    /// State with both terms off.
    pub const fn disabled() -> Self {
        Self {
            friction_enabled: false,
            bottom_friction_enabled: false,
            damping_coeff: 0.0,
            bottom_damping_coeff: 0.0,
        }
    }

    /// Resolve friction state from configuration.
    ///
    /// Coefficients start at zero and take their configured value only when
    /// the matching switch is on. Values are not range checked.
    pub fn init(config: &RayleighConfig) -> Result<Self> {
        let mut damping_coeff = 0.0;
        let mut bottom_damping_coeff = 0.0;

        if config.friction_enabled {
            damping_coeff = config.damping_coeff;
        }
        if config.bottom_friction_enabled {
            bottom_damping_coeff = config.bottom_damping_coeff;
        }

        let friction = Self {
            friction_enabled: config.friction_enabled,
            bottom_friction_enabled: config.bottom_friction_enabled,
            damping_coeff,
            bottom_damping_coeff,
        };

        info!(
            friction = friction.friction_enabled,
            damping_coeff = friction.damping_coeff,
            bottom_friction = friction.bottom_friction_enabled,
            bottom_damping_coeff = friction.bottom_damping_coeff,
            "Rayleigh friction initialised"
        );
        if friction.bottom_friction_enabled && friction.bottom_damping_coeff != friction.damping_coeff {
            warn!(
                damping_coeff = friction.damping_coeff,
                bottom_damping_coeff = friction.bottom_damping_coeff,
                "bottom Rayleigh friction uses the full-column damping coefficient"
            );
        }

        Ok(friction)
    }

    /// Look the four settings up by name and resolve them.
    pub fn from_store<C: ConfigStore + ?Sized>(store: &C) -> Result<Self> {
        Self::init(&RayleighConfig::from_store(store)?)
    }

    /// Whether full-column damping is on.
    pub fn friction_enabled(&self) -> bool {
        self.friction_enabled
    }

    /// Whether bottom-level damping is on.
    pub fn bottom_friction_enabled(&self) -> bool {
        self.bottom_friction_enabled
    }

    /// Damping rate applied by both terms (1/s).
    pub fn damping_coeff(&self) -> f64 {
        self.damping_coeff
    }

    /// Configured bottom damping rate (1/s). Not applied to the tendency.
    pub fn bottom_damping_coeff(&self) -> f64 {
        self.bottom_damping_coeff
    }

    /// Whether either term is on.
    pub fn is_active(&self) -> bool {
        self.friction_enabled || self.bottom_friction_enabled
    }

    /// Damp one edge column in place.
    #[inline]
    fn damp_column<S: Real>(&self, tend: &mut [S], vel: &[S], max_level: usize, coeff: S) {
        debug_assert!(max_level <= tend.len() && max_level <= vel.len());

        if self.friction_enabled {
            for (t, &u) in tend[..max_level].iter_mut().zip(&vel[..max_level]) {
                *t -= coeff * u;
            }
        }

        // Land edges have no bottom level.
        if self.bottom_friction_enabled && max_level > 0 {
            let k = max_level - 1;
            tend[k] -= coeff * vel[k];
        }
    }

    /// Add Rayleigh friction to the normal-velocity tendency.
    ///
    /// Visits every owned edge and every active level of it; halo edges and
    /// levels below the seafloor are left untouched. Returns immediately,
    /// without opening the timing span, when both terms are off.
    ///
    /// # Arguments
    /// * `mesh` - Owned edge count and active levels per edge
    /// * `velocity` - Normal velocity
    /// * `tendency` - Tendency accumulator (added to, never reset)
    pub fn apply_tendency<S, M>(&self, mesh: &M, velocity: &EdgeField<S>, tendency: &mut EdgeField<S>) -> Result<()>
    where
        S: Real,
        M: EdgeColumns + ?Sized,
    {
        if !self.is_active() {
            return Ok(());
        }

        let n_edges = mesh.n_edges_owned();
        let _span = info_span!(RAYLEIGH_SPAN, n_edges).entered();

        debug_assert!(velocity.same_shape(tendency));
        debug_assert!(n_edges <= tendency.n_edges);

        let coeff = S::from_config(self.damping_coeff);
        for edge in EdgeIndex::iter(n_edges) {
            self.damp_column(
                tendency.column_mut(edge),
                velocity.column(edge),
                mesh.max_level(edge),
                coeff,
            );
        }

        Ok(())
    }

    /// Parallel version of [`apply_tendency`](Self::apply_tendency) using Rayon.
    ///
    /// Each worker owns whole edge columns, so no two threads write the same
    /// accumulator cell.
    #[cfg(feature = "parallel")]
    pub fn apply_tendency_parallel<S, M>(
        &self,
        mesh: &M,
        velocity: &EdgeField<S>,
        tendency: &mut EdgeField<S>,
    ) -> Result<()>
    where
        S: Real,
        M: EdgeColumns + ?Sized,
    {
        use rayon::prelude::*;

        if !self.is_active() {
            return Ok(());
        }

        let n_edges = mesh.n_edges_owned();
        let _span = info_span!(RAYLEIGH_SPAN, n_edges).entered();

        debug_assert!(velocity.same_shape(tendency));
        debug_assert!(n_edges <= tendency.n_edges);

        let n_levels = tendency.n_levels;
        if n_levels == 0 {
            return Ok(());
        }

        let coeff = S::from_config(self.damping_coeff);
        tendency
            .data
            .par_chunks_mut(n_levels)
            .take(n_edges)
            .enumerate()
            .for_each(|(e, tend_col)| {
                let edge = EdgeIndex::new(e);
                self.damp_column(tend_col, velocity.column(edge), mesh.max_level(edge), coeff);
            });

        Ok(())
    }
}

impl<S: Real> VelocityForcing<S> for RayleighFriction {
    fn accumulate(
        &self,
        mesh: &dyn EdgeColumns,
        velocity: &EdgeField<S>,
        tendency: &mut EdgeField<S>,
    ) -> Result<()> {
        #[cfg(feature = "parallel")]
        {
            self.apply_tendency_parallel(mesh, velocity, tendency)
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.apply_tendency(mesh, velocity, tendency)
        }
    }

    fn name(&self) -> &'static str {
        "rayleigh_friction"
    }

    fn is_active(&self) -> bool {
        RayleighFriction::is_active(self)
    }
}
