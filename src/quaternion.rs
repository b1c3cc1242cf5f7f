use core::fmt::{self, Write as _};
use core::iter::{Product, Sum};
use core::ops::{Add, Mul, Neg, Sub};

use num_traits::{CheckedNeg, NumCast};

#[cfg(any(feature = "std", feature = "libm"))]
use crate::traits::FloatScalar;
use crate::traits::{Scalar, SignedScalar};

/// Immutable quaternion `a + b·i + c·j + d·k`.
///
/// Scalar-first convention: `a` is the real part, `(b, c, d)` are the
/// `i`, `j`, `k` coefficients. Every operation returns a new value.
///
/// `Display` gives the canonical algebraic form, `Debug` the
/// reconstructable `Quaternion(a, b, c, d)` form:
///
/// ```
/// use quatern::Quaternion;
///
/// let q = Quaternion::new(1.0, -2.0, 3.0, -4.0);
/// assert_eq!(q.to_string(), "1.0-2.0i+3.0j-4.0k");
/// assert_eq!(format!("{:?}", q), "Quaternion(1.0, -2.0, 3.0, -4.0)");
/// ```
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Quaternion<T> {
    pub a: T,
    pub b: T,
    pub c: T,
    pub d: T,
}

// ── Constructors ─────────────────────────────────────────────────────

impl<T: Scalar> Quaternion<T> {
    /// Create a quaternion from its four coefficients, real part first.
    #[inline]
    pub fn new(a: T, b: T, c: T, d: T) -> Self {
        Self { a, b, c, d }
    }

    /// Purely real quaternion `a + 0i + 0j + 0k`.
    #[inline]
    pub fn real(a: T) -> Self {
        Self::new(a, T::zero(), T::zero(), T::zero())
    }

    /// Additive identity.
    #[inline]
    pub fn zero() -> Self {
        Self::real(T::zero())
    }

    /// Multiplicative identity.
    #[inline]
    pub fn one() -> Self {
        Self::real(T::one())
    }

    /// Basis element `i`.
    #[inline]
    pub fn i() -> Self {
        Self::new(T::zero(), T::one(), T::zero(), T::zero())
    }

    /// Basis element `j`.
    #[inline]
    pub fn j() -> Self {
        Self::new(T::zero(), T::zero(), T::one(), T::zero())
    }

    /// Basis element `k`.
    #[inline]
    pub fn k() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }
}

// ── Core operations ──────────────────────────────────────────────────

impl<T: Scalar> Quaternion<T> {
    /// Coefficients as an ordered tuple `(a, b, c, d)`.
    #[inline]
    pub fn coefficients(&self) -> (T, T, T, T) {
        (self.a, self.b, self.c, self.d)
    }

    /// Coefficients as an array `[a, b, c, d]`.
    #[inline]
    pub fn to_array(&self) -> [T; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// True when all four coefficients are zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.a.is_zero() && self.b.is_zero() && self.c.is_zero() && self.d.is_zero()
    }

    /// Multiply every coefficient by a real scalar.
    #[inline]
    pub fn scale(&self, s: T) -> Self {
        Self::new(self.a * s, self.b * s, self.c * s, self.d * s)
    }

    /// Convert the coefficients to another numeric type.
    ///
    /// Returns `None` if any coefficient is not representable in `U`.
    /// This is how integer and float quaternions are compared:
    ///
    /// ```
    /// use quatern::Quaternion;
    ///
    /// let q = Quaternion::new(1, 0, -2, 0);
    /// assert_eq!(q.cast::<f64>(), Some(Quaternion::new(1.0, 0.0, -2.0, 0.0)));
    /// ```
    pub fn cast<U: Scalar + NumCast>(&self) -> Option<Quaternion<U>>
    where
        T: NumCast,
    {
        Some(Quaternion::new(
            num_traits::cast(self.a)?,
            num_traits::cast(self.b)?,
            num_traits::cast(self.c)?,
            num_traits::cast(self.d)?,
        ))
    }
}

impl<T: SignedScalar> Quaternion<T> {
    /// Conjugate: `(a, -b, -c, -d)`.
    ///
    /// # Panics
    ///
    /// For integer coefficients, negating `MIN` overflows: this panics in
    /// debug builds and wraps in release builds. Use
    /// [`checked_conjugate`](Self::checked_conjugate) when `MIN` can occur.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.a, -self.b, -self.c, -self.d)
    }

    /// Conjugate, or `None` if negating an imaginary coefficient overflows.
    pub fn checked_conjugate(&self) -> Option<Self>
    where
        T: CheckedNeg,
    {
        Some(Self::new(
            self.a,
            self.b.checked_neg()?,
            self.c.checked_neg()?,
            self.d.checked_neg()?,
        ))
    }

    /// Coefficient-wise comparison with an absolute tolerance.
    ///
    /// `approx_eq(other, 0)` is exact equality.
    pub fn approx_eq(&self, other: &Self, eps: T) -> bool {
        (self.a - other.a).abs() <= eps
            && (self.b - other.b).abs() <= eps
            && (self.c - other.c).abs() <= eps
            && (self.d - other.d).abs() <= eps
    }
}

#[cfg(any(feature = "std", feature = "libm"))]
impl<T: FloatScalar> Quaternion<T> {
    /// Squared norm: `a² + b² + c² + d²`.
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    /// Norm (magnitude).
    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Dot product of the coefficient vectors.
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self.a * rhs.a + self.b * rhs.b + self.c * rhs.c + self.d * rhs.d
    }

    /// Multiplicative inverse: `conjugate / norm²`.
    ///
    /// The zero quaternion has no inverse; its coefficients come back non-finite.
    #[inline]
    pub fn inverse(&self) -> Self {
        self.conjugate().scale(T::one() / self.norm_squared())
    }
}

// ── Conversions ──────────────────────────────────────────────────────

impl<T: Scalar> From<T> for Quaternion<T> {
    fn from(a: T) -> Self {
        Self::real(a)
    }
}

impl<T: Scalar> From<[T; 4]> for Quaternion<T> {
    fn from([a, b, c, d]: [T; 4]) -> Self {
        Self::new(a, b, c, d)
    }
}

impl<T: Scalar> From<(T, T, T, T)> for Quaternion<T> {
    fn from((a, b, c, d): (T, T, T, T)) -> Self {
        Self::new(a, b, c, d)
    }
}

impl<T: Scalar> From<Quaternion<T>> for [T; 4] {
    fn from(q: Quaternion<T>) -> Self {
        q.to_array()
    }
}

// ── Operators ────────────────────────────────────────────────────────

impl<T: Scalar> Add for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.a + rhs.a, self.b + rhs.b, self.c + rhs.c, self.d + rhs.d)
    }
}

impl<T: Scalar> Sub for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.a - rhs.a, self.b - rhs.b, self.c - rhs.c, self.d - rhs.d)
    }
}

// Hamilton product: q1 * q2
impl<T: Scalar> Mul for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let (a1, b1, c1, d1) = self.coefficients();
        let (a2, b2, c2, d2) = rhs.coefficients();
        Self {
            a: a1 * a2 - b1 * b2 - c1 * c2 - d1 * d2,
            b: a1 * b2 + b1 * a2 + c1 * d2 - d1 * c2,
            c: a1 * c2 - b1 * d2 + c1 * a2 + d1 * b2,
            d: a1 * d2 + b1 * c2 - c1 * b2 + d1 * a2,
        }
    }
}

// Reference variants, forwarding to the by-value impls.
macro_rules! impl_ref_binop {
    ($($trait:ident :: $method:ident),*) => {
        $(
            impl<T: Scalar> $trait<Quaternion<T>> for &Quaternion<T> {
                type Output = Quaternion<T>;
                #[inline]
                fn $method(self, rhs: Quaternion<T>) -> Quaternion<T> {
                    (*self).$method(rhs)
                }
            }

            impl<T: Scalar> $trait<&Quaternion<T>> for Quaternion<T> {
                type Output = Quaternion<T>;
                #[inline]
                fn $method(self, rhs: &Quaternion<T>) -> Quaternion<T> {
                    self.$method(*rhs)
                }
            }

            impl<T: Scalar> $trait<&Quaternion<T>> for &Quaternion<T> {
                type Output = Quaternion<T>;
                #[inline]
                fn $method(self, rhs: &Quaternion<T>) -> Quaternion<T> {
                    (*self).$method(*rhs)
                }
            }
        )*
    };
}

impl_ref_binop!(Add::add, Sub::sub, Mul::mul);

// Negation. Like `conjugate`, overflows on an integer `MIN` coefficient.
impl<T: SignedScalar> Neg for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.a, -self.b, -self.c, -self.d)
    }
}

impl<T: SignedScalar> Neg for &Quaternion<T> {
    type Output = Quaternion<T>;

    #[inline]
    fn neg(self) -> Quaternion<T> {
        (*self).neg()
    }
}

impl<T: Scalar> Sum for Quaternion<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

// Left fold, so the iteration order is the multiplication order.
impl<T: Scalar> Product for Quaternion<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), Mul::mul)
    }
}

// ── Display ──────────────────────────────────────────────────────────

/// Forwards to a formatter, dropping a leading `-` from the first
/// non-empty chunk written.
struct Unsigned<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    started: bool,
}

impl fmt::Write for Unsigned<'_, '_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let s = if !self.started && !s.is_empty() {
            self.started = true;
            s.strip_prefix('-').unwrap_or(s)
        } else {
            s
        };
        self.f.write_str(s)
    }
}

/// Write the magnitude of one coefficient: whole values get exactly one
/// decimal place, anything else uses the element type's own `Display`.
///
/// The sign is stripped from the formatted text rather than taking `abs`,
/// which would overflow on a signed integer `MIN`.
fn write_magnitude<T: SignedScalar>(f: &mut fmt::Formatter<'_>, value: T) -> fmt::Result {
    let mut out = Unsigned { f, started: false };
    if (value % T::one()).is_zero() {
        write!(out, "{}.0", value)
    } else {
        write!(out, "{}", value)
    }
}

impl<T: SignedScalar> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }

        let one = T::one();
        let minus_one = T::zero() - one;
        let terms = [(self.a, ""), (self.b, "i"), (self.c, "j"), (self.d, "k")];
        let mut leading = true;
        for (value, unit) in terms {
            if value.is_zero() {
                continue;
            }
            if value < T::zero() {
                f.write_str("-")?;
            } else if !leading {
                f.write_str("+")?;
            }
            // A unit imaginary coefficient is written as the bare symbol.
            if unit.is_empty() || (value != one && value != minus_one) {
                write_magnitude(f, value)?;
            }
            f.write_str(unit)?;
            leading = false;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quaternion({:?}, {:?}, {:?}, {:?})", self.a, self.b, self.c, self.d)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
