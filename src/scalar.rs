//! Working precision for field data.
//!
//! The surrounding solver picks `f32` or `f64` for its velocity and tendency
//! arrays. Configuration values (damping coefficients) always stay `f64` and
//! are converted to the working precision once per kernel call.

use std::fmt::Debug;

use num_traits::{Float, NumAssign};

/// Floating-point type usable as field storage.
///
/// # Example
///
/// ```
/// use rayleigh_rs::Real;
///
/// fn damp<S: Real>(tend: S, coeff: f64, u: S) -> S {
///     tend - S::from_config(coeff) * u
/// }
///
/// assert_eq!(damp(0.0_f64, 0.5, 2.0), -1.0);
/// assert_eq!(damp(0.0_f32, 0.5, 2.0), -1.0);
/// ```
pub trait Real: Float + NumAssign + Debug + Send + Sync + 'static {
    /// Convert a configuration value into the working precision.
    fn from_config(value: f64) -> Self;
}

impl Real for f32 {
    #[inline]
    fn from_config(value: f64) -> Self {
        value as f32
    }
}

impl Real for f64 {
    #[inline]
    fn from_config(value: f64) -> Self {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f64_is_exact() {
        assert_eq!(f64::from_config(1e-5), 1e-5);
    }

    #[test]
    fn test_f32_narrows() {
        let c = f32::from_config(0.1);
        assert_eq!(c, 0.1_f32);
        assert!((f64::from(c) - 0.1).abs() < 1e-7);
    }
}
