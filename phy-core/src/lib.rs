//! Core type system for statically checked physical quantities.
//!
//! `phy-core` provides an exact, integer-backed units model:
//!
//! - A *dimension* is a zero-sized [`Dim`] carrying seven SI base exponents as `typenum` integers.
//! - A *scale* is a zero-sized marker implementing [`Scale`], whose exact [`Ratio`] says how many base units one
//!   unit of that representation is worth.
//! - A value is a [`Quantity<D, S>`], backed by an `i64`.
//! - Conversion between scales is an explicit, truncating [`Quantity::cast`]; the conversion factor is a
//!   compile-time constant.
//! - Multiplying and dividing quantities composes both the dimension and the scale.
//!
//! Most users should depend on `phy` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of dimensions: comparing, adding or casting metres against seconds does not
//!   type-check.
//! - Exact conversions between scales (`1 m == 1000 mm` holds exactly, `1 m != 1001 mm` too).
//! - Zero runtime overhead for dimension and scale tags (phantom types only).
//!
//! # What this crate does not try to solve
//!
//! - Fractional values: every quantity is an integer count of its scale, and conversions truncate toward zero.
//! - Fractional exponents or units outside the seven SI base dimensions.
//! - Formatting and parsing of unit symbols.
//!
//! # Quick start
//!
//! ```rust
//! use phy_core::length::{Kilometres, Length, Millimetres};
//!
//! let km = Kilometres::new(3);
//! let m: Length = km.cast();
//! assert_eq!(m.value(), 3_000);
//! assert!(km == Millimetres::new(3_000_000));
//! ```
//!
//! Derived dimensions fall out of the operators:
//!
//! ```rust
//! use phy_core::length::Length;
//! use phy_core::mechanics::MeterSecond;
//! use phy_core::time::Hertz;
//! use phy_core::Quantity;
//!
//! let v: MeterSecond = (Length::new(5) * Quantity::<Hertz>::new(2)).cast();
//! assert_eq!(v.value(), 10);
//! ```
//!
//! # Truncation
//!
//! Values are integers at their own scale, so every conversion that lands on a coarser scale truncates toward
//! zero. This includes compound assignment, which keeps the destination's scale:
//!
//! ```rust
//! use phy_core::length::{Length, Millimetres};
//!
//! let mut d = Length::new(5);
//! d += Millimetres::new(5);
//! assert_eq!(d.value(), 5);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `phy-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! phy-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support (and `std::error::Error` for [`QuantityError`]).
//! - `serde`: enables `serde` support for `Quantity<D, S>`; serialization is the raw `i64` value only. See
//!   [`serde_with_scale`] for a form that records the scale.
//!
//! # Panics and errors
//!
//! Dimension mismatches are compile errors. A scale with a zero denominator is also a compile error, since
//! every scale ratio is an associated constant. At runtime, quantity division returns
//! `Result<_, QuantityError>` and fails with [`QuantityError::DivisionByZero`]; the `checked_*` and `try_*`
//! methods report [`QuantityError::Overflow`]. The plain operators and [`Quantity::cast`] follow `i64`
//! arithmetic: on overflow they panic when debug assertions are enabled and wrap otherwise.
//!
//! A scale whose ratio is zero or negative is a compile error as soon as a quantity uses it.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
mod error;
mod macros;
mod quantity;
mod ratio;

pub mod affine;
pub mod literals;
pub mod scale;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{
    dims_equal, Dim, DimDiv, DimMul, Dimension, Dimensionless, Product, Quotient, SameDimension,
};
pub use error::{QuantityError, Result};
pub use quantity::{qty_cast, Quantity, QuantityType};
pub use ratio::Ratio;
pub use scale::Scale;

#[cfg(feature = "serde")]
pub use quantity::serde_with_scale;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined quantity aliases (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined dimensions, scales and quantity aliases.
pub mod units;

pub use units::angular;
pub use units::electric;
pub use units::length;
pub use units::mass;
pub use units::mechanics;
pub use units::thermal;
pub use units::time;

#[cfg(test)]
mod tests {
    use super::*;
    use phy_derive::Scale;
    use typenum::{P1, Z0};

    // ─────────────────────────────────────────────────────────────────────────────
    // Test dimension and scales for lib.rs tests
    // ─────────────────────────────────────────────────────────────────────────────

    type TestDim = Dim<Z0, Z0, Z0, Z0, Z0, Z0, P1>;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Scale)]
    #[scale(num = 2)]
    struct Double;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Scale)]
    #[scale(num = 1, den = 2)]
    struct Half;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Scale)]
    #[scale(num = 6, den = 4)]
    struct ThreeHalves;

    type Tu = Quantity<TestDim>;
    type Dtu = Quantity<TestDim, Double>;
    type Htu = Quantity<TestDim, Half>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Derived scales
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn derived_ratios_are_reduced() {
        assert_eq!(Double::RATIO, Ratio::new(2, 1));
        assert_eq!(Half::RATIO, Ratio::new(1, 2));
        assert_eq!(ThreeHalves::RATIO, Ratio::new(3, 2));
    }

    #[test]
    fn test_dimension_is_candela() {
        assert_eq!(TestDim::EXPONENTS, [0, 0, 0, 0, 0, 0, 1]);
        assert!(dims_equal::<TestDim, thermal::Candela>());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Quantity core behavior
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn default_is_zero() {
        assert!(Tu::default().is_zero());
        assert_eq!(Dtu::ZERO.value(), 0);
    }

    #[test]
    fn from_i64() {
        let q: Htu = 7.into();
        assert_eq!(q.value(), 7);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversion via `cast`
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn cast_between_test_scales() {
        assert_eq!(Dtu::new(5).cast::<Half>().value(), 20);
        assert_eq!(Htu::new(5).cast::<Double>().value(), 1);
        assert_eq!(Tu::new(3).cast::<ThreeHalves>().value(), 2);
    }

    #[test]
    fn qty_cast_through_quantity_type() {
        let q: Htu = qty_cast(Dtu::new(3));
        assert_eq!(q.value(), 12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Operators
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn mixed_scale_operators() {
        assert!(Dtu::new(1) == Htu::new(4));
        assert!(Dtu::new(1) < Tu::new(3));
        assert_eq!((Tu::new(3) + Htu::new(3)).value(), 4);
        assert_eq!((Htu::new(3) + Tu::new(3)).value(), 9);
        assert_eq!((-Dtu::new(2)).value(), -2);
    }

    #[test]
    fn product_scale_composes() {
        let p = Dtu::new(3) * Htu::new(5);
        assert_eq!(p.value(), 15);
        assert!(p.cast::<scale::Unity>().value() == 15);
        assert_eq!(Quantity::<Product<TestDim, TestDim>, Double>::scale(), Ratio::new(2, 1));
    }

    #[test]
    fn division_reports_zero_divisor() {
        assert_eq!(Tu::new(1) / Dtu::new(0), Err(QuantityError::DivisionByZero));
        let q = (Dtu::new(9) / Htu::new(3)).unwrap();
        assert!(q == Quantity::<Dimensionless>::new(12));
    }
}
