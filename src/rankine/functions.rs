//! Some useful helper functions
use super::{Strengths, N_SOURCES};
use crate::types::{FloatNum, Vec2};
use ndarray::Array1;

/// Dot product of two 2-vectors
pub fn dot<A: FloatNum>(a: &Vec2<A>, b: &Vec2<A>) -> A {
    a[0] * b[0] + a[1] * b[1]
}

/// Random strength vector with entries drawn uniformly from `[-c, c]`.
///
/// Useful to seed multi-start searches of the strength space.
pub fn random_strengths(c: f64) -> Strengths<f64> {
    use ndarray_rand::rand_distr::Uniform;
    use ndarray_rand::RandomExt;
    let rand: Array1<f64> = Array1::random(N_SOURCES, Uniform::new(-c, c));
    let mut q = [0.; N_SOURCES];
    for (qi, r) in q.iter_mut().zip(rand.iter()) {
        *qi = *r;
    }
    q
}
