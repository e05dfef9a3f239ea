//! Constraint equations on the source strengths
//!
//! Five residuals define the physically correct strengths: the flow
//! must be tangent to the body surface at two probe points, the stream
//! function must take the surface value (zero) at both, and the net
//! source strength must vanish. All residuals are zero simultaneously
//! iff the strengths close the body.
use super::flow::Rankine2D;
use super::functions::dot;
use super::{Strengths, N_EQUATIONS};
use crate::types::FloatNum;
use crate::ConstraintSystem;

impl<A: FloatNum> Rankine2D<A> {
    /// Probe point on the fore upper surface, `(-2D, D/4)`
    fn probe_fore(&self) -> (A, A) {
        let two = A::one() + A::one();
        let four = two * two;
        (-two * self.scale, self.scale / four)
    }

    /// Probe point above the body centre, `(0, D/2)`
    fn probe_mid(&self) -> (A, A) {
        let two = A::one() + A::one();
        (A::zero(), self.scale / two)
    }

    /// Surface tangency at the fore probe point:
    /// `velocity(-2D, D/4) . (-1, 8) = 0`
    pub fn eq_tangency_fore(&self, q: &Strengths<A>) -> A {
        let two = A::one() + A::one();
        let eight = two * two * two;
        let (x, y) = self.probe_fore();
        let normal = [-A::one(), eight];
        dot(&normal, &self.velocity(x, y, q))
    }

    /// Surface tangency at the mid probe point:
    /// `velocity(0, D/2) . (1, 4) = 0`
    pub fn eq_tangency_mid(&self, q: &Strengths<A>) -> A {
        let two = A::one() + A::one();
        let four = two * two;
        let (x, y) = self.probe_mid();
        let normal = [A::one(), four];
        dot(&normal, &self.velocity(x, y, q))
    }

    /// Stream function vanishes at the fore probe point. Zero is the
    /// surface value: the stagnation streamline leaves the x-axis,
    /// where `psi = 0`, and wraps the body.
    pub fn eq_stream_fore(&self, q: &Strengths<A>) -> A {
        let (x, y) = self.probe_fore();
        self.stream_function(x, y, q)
    }

    /// Stream function vanishes at the mid probe point, so both probes
    /// lie on the same (surface) streamline.
    pub fn eq_stream_mid(&self, q: &Strengths<A>) -> A {
        let (x, y) = self.probe_mid();
        self.stream_function(x, y, q)
    }

    /// Net source strength. Must vanish for the body to be closed
    /// (mass conservation).
    pub fn eq_mass_balance(&self, q: &Strengths<A>) -> A {
        q.iter().copied().sum()
    }

    /// All five constraint residuals, tangency first, then stream
    /// function, then mass balance.
    pub fn residuals(&self, q: &Strengths<A>) -> [A; N_EQUATIONS] {
        [
            self.eq_tangency_fore(q),
            self.eq_tangency_mid(q),
            self.eq_stream_fore(q),
            self.eq_stream_mid(q),
            self.eq_mass_balance(q),
        ]
    }

    /// Sum of squared residuals.
    ///
    /// Nonnegative, zero iff every constraint holds exactly. This is
    /// the objective an external minimizer drives to zero by varying
    /// `q`.
    ///
    /// # Example
    /// ```
    /// use potflow::rankine::Rankine2D;
    ///
    /// let flow = Rankine2D::new(1.0, 1.0);
    /// let q = [0.5, -0.5, 0.25, -0.25, 0.0];
    /// let r = flow.residuals(&q);
    /// let err: f64 = r.iter().map(|x| x * x).sum();
    /// assert_eq!(flow.constraint_error(&q), err);
    /// ```
    pub fn constraint_error(&self, q: &Strengths<A>) -> A {
        self.residuals(q).iter().map(|r| r.powi(2)).sum()
    }
}

impl<A: FloatNum> ConstraintSystem<A, N_EQUATIONS> for Rankine2D<A> {
    fn residuals(&self, q: &[A; N_EQUATIONS]) -> [A; N_EQUATIONS] {
        Rankine2D::residuals(self, q)
    }

    fn error(&self, q: &[A; N_EQUATIONS]) -> A {
        self.constraint_error(q)
    }
}
