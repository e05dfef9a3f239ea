//! Rankine-type body from a row of collinear sources/sinks
//!
//! The body is approximated by [`N_SOURCES`] point singularities on the
//! x-axis superposed on a uniform freestream. [`Rankine2D`] evaluates
//! the flow field and the constraint residuals on the strengths.
use crate::types::FloatNum;
use std::convert::TryInto;
use thiserror::Error;

pub mod constraints;
pub mod flow;
pub mod functions;
pub use flow::Rankine2D;

/// Number of point sources along the body axis
pub const N_SOURCES: usize = 5;

/// Number of constraint equations on the strengths
pub const N_EQUATIONS: usize = 5;

/// Strength vector, one entry per source location.
/// Positive entries emit fluid (source), negative absorb (sink).
pub type Strengths<A> = [A; N_SOURCES];

/// Invalid strength-vector input
#[derive(Debug, Error)]
pub enum StrengthError {
    /// Strength slice does not hold one entry per source
    #[error("invalid strength-vector length: expected {expected}, got {got}")]
    InvalidLength {
        /// Required number of entries (= number of sources)
        expected: usize,
        /// Number of entries supplied
        got: usize,
    },
}

/// Convert a solver-supplied slice into a strength vector.
///
/// The fixed-size [`Strengths`] type makes wrong lengths
/// unrepresentable in the evaluation methods; this is the fail-fast
/// boundary for callers which hold strengths in a slice or `Vec`.
///
/// # Errors
/// [`StrengthError::InvalidLength`] if `q.len() != N_SOURCES`.
///
/// # Example
/// ```
/// use potflow::rankine::{strengths_from_slice, N_SOURCES};
///
/// let q = strengths_from_slice(&[1., -1., 2., -2., 0.]).unwrap();
/// assert_eq!(q.len(), N_SOURCES);
/// assert!(strengths_from_slice::<f64>(&[1., -1.]).is_err());
/// ```
pub fn strengths_from_slice<A: FloatNum>(q: &[A]) -> Result<Strengths<A>, StrengthError> {
    q.try_into().map_err(|_| StrengthError::InvalidLength {
        expected: N_SOURCES,
        got: q.len(),
    })
}
