//! Velocity forcing terms.
//!
//! A forcing term adds its contribution to the normal-velocity tendency:
//!
//! ```text
//! du/dt = ... + F(u)
//! ```
//!
//! Terms accumulate into a tendency array owned by the time stepper and must
//! never overwrite what other terms have already added.

use crate::error::Result;
use crate::field::EdgeField;
use crate::mesh::EdgeColumns;
use crate::scalar::Real;

/// A term that adds to the normal-velocity tendency.
///
/// Implementations must be thread-safe (`Send + Sync`) for parallel computation.
pub trait VelocityForcing<S: Real>: Send + Sync {
    /// Add this term's contribution into `tendency`.
    ///
    /// # Arguments
    /// * `mesh` - Edge column extents
    /// * `velocity` - Current normal velocity (read only)
    /// * `tendency` - Accumulator, updated in place
    fn accumulate(
        &self,
        mesh: &dyn EdgeColumns,
        velocity: &EdgeField<S>,
        tendency: &mut EdgeField<S>,
    ) -> Result<()>;

    /// Name of this forcing term for debugging and logging.
    fn name(&self) -> &'static str;

    /// Whether the term contributes anything at all.
    fn is_active(&self) -> bool {
        true
    }
}

/// Apply several forcing terms in sequence to one accumulator.
///
/// # Example
/// ```
/// use rayleigh_rs::config::RayleighConfig;
/// use rayleigh_rs::field::EdgeField;
/// use rayleigh_rs::forcing::{CombinedForcing, RayleighFriction, VelocityForcing};
/// use rayleigh_rs::mesh::EdgeMesh;
///
/// let friction = RayleighFriction::init(&RayleighConfig::disabled().with_friction(0.5)).unwrap();
/// let combined = CombinedForcing::<f64>::new(vec![&friction]);
///
/// let mesh = EdgeMesh::uniform(2, 1);
/// let velocity = EdgeField::filled(2, 1, 1.0);
/// let mut tendency = EdgeField::zeros(2, 1);
/// combined.accumulate(&mesh, &velocity, &mut tendency).unwrap();
/// assert_eq!(tendency.data, vec![-0.5, -0.5]);
/// ```
pub struct CombinedForcing<'a, S: Real> {
    terms: Vec<&'a dyn VelocityForcing<S>>,
}

impl<'a, S: Real> CombinedForcing<'a, S> {
    /// Create a combined forcing from a list of terms.
    pub fn new(terms: Vec<&'a dyn VelocityForcing<S>>) -> Self {
        Self { terms }
    }

    /// Add a term to the combination.
    pub fn add(&mut self, term: &'a dyn VelocityForcing<S>) {
        self.terms.push(term);
    }

    /// Number of terms in the combination.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the combination is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<S: Real> VelocityForcing<S> for CombinedForcing<'_, S> {
    fn accumulate(
        &self,
        mesh: &dyn EdgeColumns,
        velocity: &EdgeField<S>,
        tendency: &mut EdgeField<S>,
    ) -> Result<()> {
        for term in self.terms.iter().filter(|t| t.is_active()) {
            term.accumulate(mesh, velocity, tendency)?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "combined"
    }

    fn is_active(&self) -> bool {
        self.terms.iter().any(|t| t.is_active())
    }
}
