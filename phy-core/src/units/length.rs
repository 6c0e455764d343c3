//! Length quantities.
//!
//! The base scale for this dimension is the metre ([`Length`] is `Quantity<Metre, Unity>`). Every other length
//! alias pairs the [`Metre`] dimension with an exact rational scale.
//!
//! This module provides:
//!
//! - **SI ladder**: kilometre down to nanometre, using the shared prefix scales.
//! - **International yard and pound units**: mile, yard, foot and inch, all exact (the inch is `0.0254 m`).
//! - **Area**: the [`Area`] dimension (`m^2`), which falls out of multiplying two lengths.
//!
//! ```rust
//! use phy_core::length::{Feet, Inches, Miles, Yards};
//!
//! assert!(Miles::new(1) == Yards::new(1_760));
//! assert!(Yards::new(1) == Feet::new(3));
//! assert!(Feet::new(1) == Inches::new(12));
//! ```

use crate::dimension::Dim;
use crate::quantity::QuantityType;
use crate::scale::{Centi, Kilo, Micro, Milli, Nano};
use crate::Quantity;
use phy_derive::Scale;
use typenum::{P1, P2, Z0};

/// Dimension of length (`m`).
pub type Metre = Dim<P1, Z0, Z0, Z0, Z0, Z0, Z0>;

/// Dimension of area (`m^2`).
pub type Area = Dim<P2, Z0, Z0, Z0, Z0, Z0, Z0>;

/// Marker trait for any [`Quantity`] whose dimension is [`Metre`].
pub trait LengthQuantity: QuantityType<Dim = Metre> {}
impl<T: QuantityType<Dim = Metre>> LengthQuantity for T {}

// ─────────────────────────────────────────────────────────────────────────────
// SI
// ─────────────────────────────────────────────────────────────────────────────

/// A length in metres.
pub type Length = Quantity<Metre>;
/// One metre.
pub const M: Length = Length::new(1);

/// A length in kilometres.
pub type Kilometres = Quantity<Metre, Kilo>;
/// One kilometre.
pub const KM: Kilometres = Kilometres::new(1);

/// A length in centimetres.
pub type Centimetres = Quantity<Metre, Centi>;

/// A length in millimetres.
pub type Millimetres = Quantity<Metre, Milli>;
/// One millimetre.
pub const MM: Millimetres = Millimetres::new(1);

/// A length in micrometres.
pub type Micrometres = Quantity<Metre, Micro>;

/// A length in nanometres.
pub type Nanometres = Quantity<Metre, Nano>;

/// An area in square metres.
pub type AreaQty = Quantity<Area>;

// ─────────────────────────────────────────────────────────────────────────────
// International yard and pound
// ─────────────────────────────────────────────────────────────────────────────

/// Statute mile (`1609.344 m`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Scale)]
#[scale(num = 1_609_344, den = 1_000)]
pub struct Mile;
/// A length in miles.
pub type Miles = Quantity<Metre, Mile>;

/// Yard (`0.9144 m`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Scale)]
#[scale(num = 9_144, den = 10_000)]
pub struct Yard;
/// A length in yards.
pub type Yards = Quantity<Metre, Yard>;

/// Foot (`0.3048 m`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Scale)]
#[scale(num = 3_048, den = 10_000)]
pub struct Foot;
/// A length in feet.
pub type Feet = Quantity<Metre, Foot>;

/// Inch (`0.0254 m`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Scale)]
#[scale(num = 254, den = 10_000)]
pub struct Inch;
/// A length in inches.
pub type Inches = Quantity<Metre, Inch>;
