//! Sample flow quantities on a rectilinear grid
//!
//! Evaluates velocity and stream function over the outer product of two
//! coordinate axes. Output arrays are indexed `[i, j]` for `(x[i], y[j])`.
//! The `_par` variants parallelize over grid points with rayon and give
//! bitwise the same result as their serial counterparts.
use crate::rankine::{Rankine2D, Strengths};
use crate::types::FloatNum;
use ndarray::{Array1, Array2, Zip};

/// Stream function on the grid spanned by `x` and `y`
pub fn stream_function_grid<A: FloatNum>(
    flow: &Rankine2D<A>,
    x: &Array1<A>,
    y: &Array1<A>,
    q: &Strengths<A>,
) -> Array2<A> {
    let mut psi = Array2::zeros((x.len(), y.len()));
    for (i, xi) in x.iter().enumerate() {
        for (j, yj) in y.iter().enumerate() {
            psi[[i, j]] = flow.stream_function(*xi, *yj, q);
        }
    }
    psi
}

/// Parallel version of [`stream_function_grid`]
pub fn stream_function_grid_par<A: FloatNum>(
    flow: &Rankine2D<A>,
    x: &Array1<A>,
    y: &Array1<A>,
    q: &Strengths<A>,
) -> Array2<A> {
    let mut psi = Array2::zeros((x.len(), y.len()));
    Zip::indexed(&mut psi).par_for_each(|(i, j), p| {
        *p = flow.stream_function(x[i], y[j], q);
    });
    psi
}

/// Velocity components `(u, v)` on the grid spanned by `x` and `y`
pub fn velocity_grid<A: FloatNum>(
    flow: &Rankine2D<A>,
    x: &Array1<A>,
    y: &Array1<A>,
    q: &Strengths<A>,
) -> (Array2<A>, Array2<A>) {
    let mut u = Array2::zeros((x.len(), y.len()));
    let mut v = Array2::zeros((x.len(), y.len()));
    for (i, xi) in x.iter().enumerate() {
        for (j, yj) in y.iter().enumerate() {
            let vel = flow.velocity(*xi, *yj, q);
            u[[i, j]] = vel[0];
            v[[i, j]] = vel[1];
        }
    }
    (u, v)
}

/// Parallel version of [`velocity_grid`]
pub fn velocity_grid_par<A: FloatNum>(
    flow: &Rankine2D<A>,
    x: &Array1<A>,
    y: &Array1<A>,
    q: &Strengths<A>,
) -> (Array2<A>, Array2<A>) {
    let mut u = Array2::zeros((x.len(), y.len()));
    let mut v = Array2::zeros((x.len(), y.len()));
    Zip::indexed(&mut u)
        .and(&mut v)
        .par_for_each(|(i, j), uu, vv| {
            let vel = flow.velocity(x[i], y[j], q);
            *uu = vel[0];
            *vv = vel[1];
        });
    (u, v)
}
