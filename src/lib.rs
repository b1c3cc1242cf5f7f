//! # quatern
//!
//! Immutable quaternion value type with canonical formatting, plus a handful
//! of small standalone utilities. `no_std` compatible apart from file I/O.
//!
//! ## Quick start
//!
//! ```
//! use quatern::Quaternion;
//!
//! let i = Quaternion::new(0.0_f64, 1.0, 0.0, 0.0);
//! let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
//! assert_eq!((i * j).to_string(), "k");
//! assert_eq!((j * i).to_string(), "-k");
//! assert_eq!((i + j).conjugate().to_string(), "-i-j");
//! ```
//!
//! ## Modules
//!
//! - [`quaternion`] — `Quaternion<T>` with addition, Hamilton product,
//!   conjugate, coefficient access, structural equality, canonical
//!   `Display` (`"1.0-2.0i+3.0j-4.0k"`) and reconstructable `Debug`
//!   (`"Quaternion(1.0, -2.0, 3.0, -4.0)"`).
//!
//! - [`seq`] — [`seq::first_then_apply`]: transform the first element
//!   matching a predicate.
//!
//! - [`phrase`] — [`phrase::Say`] sentence builder (requires `alloc`).
//!
//! - [`powers`] — [`powers::powers`]: lazy powers of a base up to an
//!   inclusive limit.
//!
//! - [`lines`] — [`lines::meaningful_line_count`]: count non-blank,
//!   non-comment lines of a file (requires `std`).
//!
//! - [`traits`] — coefficient trait hierarchy:
//!   - [`Scalar`] — all coefficients (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`SignedScalar`] — signed, ordered, displayable; used by conjugate and `Display`
//!   - [`FloatScalar`] — real floats; used by norm and inverse
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Implies `alloc`. File line counting, hardware FPU via system libm |
//! | `alloc` | via std  | `Say` builder, `first_then_lowercase` |
//! | `libm`  | no       | Pure-Rust software float fallback for `no_std` |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Unit tests use `std` collections and formatting even in `no_std` builds.
#[cfg(all(test, not(feature = "std")))]
#[macro_use]
extern crate std;

#[cfg(feature = "std")]
pub mod lines;
#[cfg(feature = "alloc")]
pub mod phrase;
pub mod powers;
pub mod quaternion;
pub mod seq;
pub mod traits;

pub use quaternion::Quaternion;
pub use traits::{Scalar, SignedScalar};
#[cfg(any(feature = "std", feature = "libm"))]
pub use traits::FloatScalar;
