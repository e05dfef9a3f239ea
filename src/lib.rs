//! # `potflow`: Superposition models of 2-D potential flow
//!
//! Incompressible, irrotational flow is linear: elementary solutions of
//! the Laplace equation superpose. This library builds the flow around a
//! closed body from a uniform freestream and a row of point
//! sources/sinks, and exposes the algebraic constraints that the source
//! strengths must satisfy for the superposition to represent a solid
//! body:
//!
//! - flow tangency at two probe points on the body surface,
//! - a single stream-function value along the surface streamline,
//! - zero net source strength (mass conservation).
//!
//! The constraints are packaged as a residual vector and a
//! sum-of-squares error, see [`ConstraintSystem`]. Driving the error to
//! zero is left to an external root-finder or minimizer; this crate only
//! defines the objective.
//!
//! # Example
//! Evaluate the objective for a candidate strength vector
//! ```
//! use potflow::rankine::Rankine2D;
//!
//! let u_inf = 1.0;
//! let scale = 1.0;
//! let flow = Rankine2D::new(u_inf, scale);
//! let q = [1.0, -0.25, -0.25, -0.25, -0.25];
//! let err = flow.constraint_error(&q);
//! assert!(err >= 0.0);
//! ```
//!
//! ## Degenerate inputs
//!
//! Evaluating exactly on a source location, or constructing with
//! `scale = 0`, yields non-finite values instead of a panic. A consuming
//! solver must reject non-finite objective values itself.
#![warn(missing_docs)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
pub mod field;
pub mod rankine;
pub mod types;
pub use rankine::Rankine2D;

/// System of residual equations driven to zero by an external
/// root search.
///
/// `N` is the number of unknowns, which here equals the number of
/// residuals (square system).
pub trait ConstraintSystem<A, const N: usize> {
    /// Residual vector at `q`. Every component vanishes iff `q`
    /// satisfies every constraint.
    fn residuals(&self, q: &[A; N]) -> [A; N];
    /// Nonnegative scalar aggregate of the residuals, zero iff all
    /// residuals are exactly zero.
    fn error(&self, q: &[A; N]) -> A;
}
