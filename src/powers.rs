//! Lazy sequence of successive integer powers.

use core::iter::FusedIterator;

use num_traits::CheckedMul;

use crate::traits::Scalar;

/// Iterator over `1, base, base², …` up to an inclusive limit.
///
/// Created by [`powers`]. The iterator is consumed as it runs and cannot
/// be rewound; call [`powers`] again for a fresh sequence.
///
/// A base of `0`, `1` or `-1` never exceeds the limit, so the sequence
/// only ends when the caller stops pulling (e.g. with `take`).
#[derive(Debug)]
pub struct Powers<T> {
    base: T,
    limit: T,
    next: Option<T>,
}

/// Powers of `base`, starting at `1`, while the power is `<= limit`.
///
/// ```
/// use quatern::powers::powers;
///
/// let p: Vec<u32> = powers(2, 10).collect();
/// assert_eq!(p, vec![1, 2, 4, 8]);
/// ```
pub fn powers<T>(base: T, limit: T) -> Powers<T>
where
    T: Scalar + PartialOrd + CheckedMul,
{
    Powers {
        base,
        limit,
        next: Some(T::one()),
    }
}

impl<T> Iterator for Powers<T>
where
    T: Scalar + PartialOrd + CheckedMul,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.next.take()?;
        if current > self.limit {
            return None;
        }
        self.next = current.checked_mul(&self.base);
        if self.next.is_none() {
            log::trace!("powers of {:?} overflow after {:?}", self.base, current);
        }
        Some(current)
    }
}

impl<T> FusedIterator for Powers<T> where T: Scalar + PartialOrd + CheckedMul {}
