//! Superposition of a uniform stream and a row of point sources
use super::{Strengths, N_SOURCES};
use crate::types::{FloatNum, Vec2};
use num_complex::Complex;

/// Potential flow around a Rankine-type body.
///
/// The body is modelled by five point sources/sinks on the x-axis,
/// located at `[-3D, -2D, -D, 0, D]` for body scale `D`, superposed on
/// a uniform freestream along x. The strengths `q` are not stored;
/// every evaluation takes a candidate strength vector, so a solver can
/// probe the strength space without rebuilding the flow.
///
/// # Example
/// Zero strengths recover the undisturbed freestream
/// ```
/// use potflow::rankine::Rankine2D;
///
/// let flow = Rankine2D::new(2.0, 1.0);
/// let [u, v] = flow.velocity(0.3, 0.7, &[0.; 5]);
/// assert_eq!((u, v), (2.0, 0.0));
/// ```
#[derive(Clone, Debug)]
pub struct Rankine2D<A> {
    /// Freestream velocity magnitude (x direction)
    pub u_inf: A,
    /// Characteristic body length `D`
    pub scale: A,
    /// Source x-positions, derived from `scale`
    x_src: [A; N_SOURCES],
}

impl<A: FloatNum> Rankine2D<A> {
    /// Create a new flow for freestream speed `u_inf` and body scale
    /// `scale`.
    ///
    /// `scale = 0` collapses all sources onto the origin; evaluations
    /// near the origin then return non-finite values.
    pub fn new(u_inf: A, scale: A) -> Self {
        let two = A::one() + A::one();
        let three = two + A::one();
        let x_src = [
            -three * scale,
            -two * scale,
            -scale,
            A::zero(),
            scale,
        ];
        Self { u_inf, scale, x_src }
    }

    /// Source x-positions on the body axis
    pub fn source_locations(&self) -> &[A; N_SOURCES] {
        &self.x_src
    }

    /// Flow velocity `[u, v]` at `(x, y)` for strengths `q`.
    ///
    /// Each source contributes a radial field of strength `q_i`,
    /// $$
    /// u = U + \sum_i q_i (x - x_i) / (2\pi r_i^2), \quad
    /// v = \sum_i q_i y / (2\pi r_i^2)
    /// $$
    /// with `r_i^2 = (x - x_i)^2 + y^2`. Evaluating exactly on a source
    /// location divides by zero and returns non-finite components.
    pub fn velocity(&self, x: A, y: A, q: &Strengths<A>) -> Vec2<A> {
        let two = A::one() + A::one();
        let two_pi = two * A::PI();
        let mut u = self.u_inf;
        let mut v = A::zero();
        for (qi, xi) in q.iter().zip(self.x_src.iter()) {
            let dx = x - *xi;
            let denom = two_pi * (dx * dx + y * y);
            u += *qi * dx / denom;
            v += *qi * y / denom;
        }
        [u, v]
    }

    /// Stream function at `(x, y)` for strengths `q`,
    /// $$
    /// \psi = U y + \sum_i q_i \mathrm{atan2}(y, x - x_i) / (2\pi)
    /// $$
    /// Contours of the stream function are streamlines. The branch of
    /// each source term follows the standard two-argument arctangent,
    /// range `(-pi, pi]`.
    pub fn stream_function(&self, x: A, y: A, q: &Strengths<A>) -> A {
        let two = A::one() + A::one();
        let two_pi = two * A::PI();
        let mut psi = self.u_inf * y;
        for (qi, xi) in q.iter().zip(self.x_src.iter()) {
            psi += *qi * y.atan2(x - *xi) / two_pi;
        }
        psi
    }

    /// Complex potential `w(z) = U z + sum_i q_i ln(z - z_i) / (2 pi)`.
    ///
    /// The imaginary part equals [`Self::stream_function`] since the
    /// principal logarithm shares the arctangent's branch cut.
    pub fn complex_potential(&self, z: Complex<A>, q: &Strengths<A>) -> Complex<A> {
        let two = A::one() + A::one();
        let two_pi = two * A::PI();
        let mut w = z * self.u_inf;
        for (qi, xi) in q.iter().zip(self.x_src.iter()) {
            w = w + (z - Complex::new(*xi, A::zero())).ln() * (*qi / two_pi);
        }
        w
    }

    /// Complex velocity `dw/dz = U + sum_i q_i / (2 pi (z - z_i))`.
    ///
    /// Relates to [`Self::velocity`] by `dw/dz = u - i v`.
    pub fn complex_velocity(&self, z: Complex<A>, q: &Strengths<A>) -> Complex<A> {
        let two = A::one() + A::one();
        let two_pi = two * A::PI();
        let mut dw = Complex::new(self.u_inf, A::zero());
        for (qi, xi) in q.iter().zip(self.x_src.iter()) {
            dw = dw + (z - Complex::new(*xi, A::zero())).inv() * (*qi / two_pi);
        }
        dw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) {
        let dif = 1e-12;
        if (a - b).abs() > dif {
            panic!("Large difference of values, got {} expected {}.", b, a)
        }
    }

    #[test]
    fn test_source_locations() {
        let flow = Rankine2D::new(1.0, 2.0);
        assert_eq!(flow.source_locations(), &[-6., -4., -2., 0., 2.]);
    }

    #[test]
    fn test_freestream_recovery() {
        // Zero strengths leave the uniform stream undisturbed
        let flow = Rankine2D::new(3.5, 1.0);
        let q = [0.; 5];
        for &(x, y) in &[(0.3, 0.7), (-4.0, -1.2), (10., 0.01)] {
            let [u, v] = flow.velocity(x, y, &q);
            approx_eq(u, 3.5);
            approx_eq(v, 0.);
            approx_eq(flow.stream_function(x, y, &q), 3.5 * y);
        }
    }

    #[test]
    fn test_symmetry_about_source_axis() {
        // Without freestream: psi odd in y, v odd in y, u even in y
        let flow = Rankine2D::new(0.0, 1.0);
        let q = [1.0, -0.5, 0.25, 0.75, -1.5];
        for &(x, y) in &[(0.5, 0.8), (-2.3, 1.1), (4.0, 0.2)] {
            approx_eq(flow.stream_function(x, y, &q), -flow.stream_function(x, -y, &q));
            let [u_p, v_p] = flow.velocity(x, y, &q);
            let [u_m, v_m] = flow.velocity(x, -y, &q);
            approx_eq(u_p, u_m);
            approx_eq(v_p, -v_m);
        }
    }

    #[test]
    fn test_stream_function_scaling() {
        // atan2 terms are invariant under joint scaling of point and
        // source coordinates; the freestream term rescales with 1/k
        let (u_inf, d, k) = (1.3, 0.7, 2.5);
        let flow = Rankine2D::new(u_inf, d);
        let scaled = Rankine2D::new(u_inf / k, k * d);
        let q = [0.6, -0.2, 0.8, -1.0, -0.2];
        for &(x, y) in &[(0.5, 0.8), (-2.3, 1.1), (4.0, 0.2)] {
            approx_eq(
                scaled.stream_function(k * x, k * y, &q),
                flow.stream_function(x, y, &q),
            );
        }
    }

    #[test]
    fn test_singular_point_is_non_finite() {
        let flow = Rankine2D::new(1.0, 1.0);
        let q = [1.0; 5];
        // (x, y) exactly on the source at x = -3
        let [u, v]: Vec2<f64> = flow.velocity(-3.0, 0.0, &q);
        assert!(!u.is_finite() || !v.is_finite());
    }

    #[test]
    fn test_complex_potential_matches_stream_function() {
        let flow = Rankine2D::new(1.2, 0.9);
        let q = [0.4, -0.1, 0.7, -0.6, -0.4];
        for &(x, y) in &[(0.5, 0.8), (-2.3, 1.1), (4.0, -0.7)] {
            let w = flow.complex_potential(Complex::new(x, y), &q);
            approx_eq(w.im, flow.stream_function(x, y, &q));
        }
    }

    #[test]
    fn test_complex_velocity_matches_velocity() {
        let flow = Rankine2D::new(1.2, 0.9);
        let q = [0.4, -0.1, 0.7, -0.6, -0.4];
        for &(x, y) in &[(0.5, 0.8), (-2.3, 1.1), (4.0, -0.7)] {
            let dw = flow.complex_velocity(Complex::new(x, y), &q);
            let [u, v] = flow.velocity(x, y, &q);
            approx_eq(dw.re, u);
            approx_eq(-dw.im, v);
        }
    }
}
