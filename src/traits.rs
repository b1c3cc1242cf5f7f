use core::fmt::{Debug, Display};
#[cfg(any(feature = "std", feature = "libm"))]
use num_traits::Float;
use num_traits::{Num, One, Signed, Zero};

/// Trait for types that can be used as quaternion coefficients.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for ordered, signed coefficients.
///
/// Required by conjugation, negation and the canonical display form,
/// which need `abs`, sign tests and a `Display` impl.
/// Covers `f32`, `f64`, and the signed integer types.
pub trait SignedScalar: Scalar + Signed + PartialOrd + Display {}

impl<T: Scalar + Signed + PartialOrd + Display> SignedScalar for T {}

/// Trait for floating-point coefficients.
///
/// Required by operations that need `sqrt` or a reciprocal
/// (norm, inverse). Under `no_std` enable the `libm` feature.
#[cfg(any(feature = "std", feature = "libm"))]
pub trait FloatScalar: SignedScalar + Float {}

#[cfg(any(feature = "std", feature = "libm"))]
impl<T: SignedScalar + Float> FloatScalar for T {}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_scalar<T: Scalar>() {}
    fn is_signed<T: SignedScalar>() {}
    #[cfg(any(feature = "std", feature = "libm"))]
    fn is_float<T: FloatScalar>() {}

    #[test]
    fn blanket_impls() {
        is_scalar::<u8>();
        is_scalar::<i64>();
        is_scalar::<f32>();
        is_signed::<i32>();
        is_signed::<f64>();
    }

    #[test]
    #[cfg(any(feature = "std", feature = "libm"))]
    fn float_blanket_impl() {
        is_float::<f32>();
        is_float::<f64>();
    }
}
