//! Types and traits for real numbers
use num_traits::{Float, FloatConst, FromPrimitive, Signed};
use std::fmt::Debug;
use std::iter::Sum;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Real scalar type, used throughout this crate for arithmetic operations
pub trait FloatNum:
    Float
    + FloatConst
    + FromPrimitive
    + Signed
    + Sum
    + SubAssign
    + AddAssign
    + MulAssign
    + DivAssign
    + Debug
    + Send
    + Sync
    + 'static
{
}

impl<T> FloatNum for T where
    T: Float
        + FloatConst
        + FromPrimitive
        + Signed
        + Sum
        + SubAssign
        + AddAssign
        + MulAssign
        + DivAssign
        + Debug
        + Send
        + Sync
        + 'static
{
}

/// Two-component vector in the x-y plane
pub type Vec2<A> = [A; 2];
