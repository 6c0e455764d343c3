//! Statically checked physical quantities with exact rational scales.
//!
//! `phy` is the user-facing crate in this workspace. It re-exports the full API from `phy-core` plus the
//! predefined dimensions and quantity aliases (lengths, masses, times, electrical and mechanical quantities).
//!
//! A value is always a `Quantity<D, S>`: `D` is a seven-exponent SI dimension and `S` an exact rational scale,
//! both zero-sized. The value itself is an `i64` count of `S`-sized units.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions: metres never compare, add or cast against seconds.
//! - Derives the dimension of products and quotients automatically (`Length * Frequency` is a speed).
//! - Keeps scale conversions exact and explicit (`cast::<TargetScale>()`), with compile-time factors.
//!
//! # What this crate does not try to solve
//!
//! - Fractional values: conversions to coarser scales truncate toward zero.
//! - Unit symbols, formatting or parsing.
//!
//! # Quick start
//!
//! ```rust
//! use phy::{Kilometres, Length, Miles};
//!
//! let d = Kilometres::new(42);
//! let m: Length = d.cast();
//! assert_eq!(m.value(), 42_000);
//! assert!(d > Miles::new(26));
//! ```
//!
//! Dimensions compose under `*` and `/`; division reports a zero divisor:
//!
//! ```rust
//! use phy::{Length, MeterSecond, QuantityError, Time};
//!
//! let v: MeterSecond = (Length::new(100) / Time::new(20)).unwrap().cast();
//! assert_eq!(v.value(), 5);
//! assert_eq!(Length::new(1) / Time::new(0), Err(QuantityError::DivisionByZero));
//! ```
//!
//! # Incorrect usage (type errors)
//!
//! Adding quantities of different dimensions:
//!
//! ```compile_fail
//! use phy::{Length, Time};
//!
//! let _ = Length::new(1) + Time::new(1);
//! ```
//!
//! Comparing them:
//!
//! ```compile_fail
//! use phy::{Length, Time};
//!
//! let _ = Length::new(1) == Time::new(1);
//! ```
//!
//! Casting between them:
//!
//! ```compile_fail
//! use phy::{qty_cast, Length, Mass};
//!
//! let _: Mass = qty_cast(Length::new(1));
//! ```
//!
//! Ordering them:
//!
//! ```compile_fail
//! use phy::{Length, Time};
//!
//! let _ = Length::new(1) < Time::new(1);
//! ```
//!
//! ```compile_fail
//! use phy::{Kilometres, Mass};
//!
//! let _ = Kilometres::new(1) >= Mass::new(1);
//! ```
//!
//! Inequality is rejected like equality:
//!
//! ```compile_fail
//! use phy::{Current, ElectricPotential};
//!
//! let _ = Current::new(1) != ElectricPotential::new(1);
//! ```
//!
//! Subtraction and the compound assignments:
//!
//! ```compile_fail
//! use phy::{Length, Time};
//!
//! let _ = Length::new(3) - Time::new(1);
//! ```
//!
//! ```compile_fail
//! use phy::{Length, Time};
//!
//! let mut d = Length::new(1);
//! d += Time::new(1);
//! ```
//!
//! ```compile_fail
//! use phy::{Millimetres, Temperature};
//!
//! let mut d = Millimetres::new(1);
//! d -= Temperature::new(1);
//! ```
//!
//! The checked forms carry the same bound:
//!
//! ```compile_fail
//! use phy::{Length, Time};
//!
//! let _ = Length::new(1).checked_add(Time::new(1));
//! ```
//!
//! ```compile_fail
//! use phy::{Length, Time};
//!
//! let _ = Length::new(1).checked_sub(Time::new(1));
//! ```
//!
//! A scale whose ratio is negative or zero is rejected as soon as a quantity uses it:
//!
//! ```compile_fail
//! use phy::{Metre, Quantity, Ratio, Scale};
//!
//! #[derive(Clone, Copy, Debug)]
//! struct Flipped;
//! impl Scale for Flipped {
//!     const RATIO: Ratio = Ratio::new(-1, 1);
//! }
//!
//! let a = Quantity::<Metre, Flipped>::new(1);
//! let b = Quantity::<Metre, Flipped>::new(2);
//! assert!(a > b);
//! ```
//!
//! ```compile_fail
//! use phy::{Metre, Quantity, Ratio, Scale};
//!
//! #[derive(Clone, Copy, Debug)]
//! struct Nothing;
//! impl Scale for Nothing {
//!     const RATIO: Ratio = Ratio::new(0, 7);
//! }
//!
//! let _ = Quantity::<Metre, Nothing>::new(1);
//! ```
//!
//! The same scale with a positive ratio compiles:
//!
//! ```rust
//! use phy::{Length, Metre, Quantity, Ratio, Scale};
//!
//! #[derive(Clone, Copy, Debug)]
//! struct Fathom;
//! impl Scale for Fathom {
//!     const RATIO: Ratio = Ratio::new(18_288, 10_000);
//! }
//!
//! let a = Quantity::<Metre, Fathom>::new(1);
//! let b = Quantity::<Metre, Fathom>::new(2);
//! assert!(a < b);
//! assert!(b > Length::new(3));
//! ```
//!
//! A scale with a zero denominator is rejected when its ratio is evaluated:
//!
//! ```compile_fail
//! use phy::{Length, Ratio, Scale};
//!
//! #[derive(Clone, Copy, Debug)]
//! struct Broken;
//! impl Scale for Broken {
//!     const RATIO: Ratio = Ratio::new(1, 0);
//! }
//!
//! let _ = Length::new(1).cast::<Broken>();
//! ```
//!
//! # Modules
//!
//! Aliases are grouped by dimension under modules (also re-exported at the crate root for convenience):
//!
//! - `phy::length` (metres, kilometres, miles, inches, area)
//! - `phy::mass` (kilograms, grams, tonnes, pounds)
//! - `phy::time` (seconds, minutes, hours, hertz)
//! - `phy::electric` (amperes, volts, ohms, coulombs)
//! - `phy::thermal` (kelvins, moles, candelas)
//! - `phy::mechanics` (speed, acceleration, force, pressure, energy, power)
//! - `phy::angular` (radians)
//!
//! Offset temperature scales live in [`affine`]; constructor functions such as `metres(5)` or `celsius(20)` live in
//! [`literals`].
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `phy-core`.
//! - `serde`: enables `serde` support for `Quantity<D, S>`; serialization is the raw `i64` value only.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! phy = { version = "0.1.0", default-features = false }
//! ```
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use phy_core::*;

/// Derive macro used by `phy-core` to define scale marker types.
///
/// This macro expands in terms of `crate::Scale` and `crate::Ratio`, so it is intended for use inside `phy-core`
/// (or crates exposing the same crate-root API). Most users should implement [`Scale`] by hand instead.
pub use phy_derive::Scale;

pub use phy_core::units::angular;
pub use phy_core::units::electric;
pub use phy_core::units::length;
pub use phy_core::units::mass;
pub use phy_core::units::mechanics;
pub use phy_core::units::thermal;
pub use phy_core::units::time;

pub use phy_core::units::angular::*;
pub use phy_core::units::electric::*;
pub use phy_core::units::length::*;
pub use phy_core::units::mass::*;
pub use phy_core::units::mechanics::*;
pub use phy_core::units::thermal::*;
pub use phy_core::units::time::*;
