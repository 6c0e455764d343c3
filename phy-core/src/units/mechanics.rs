//! Derived mechanical quantities: kinematics, force, pressure, energy and power.
//!
//! Each dimension here is a composition of [`Metre`](crate::length::Metre), [`Kilogram`](crate::mass::Kilogram)
//! and [`Second`](crate::time::Second). Multiplying or dividing quantities of those dimensions produces these
//! types directly; the aliases only fix the scale.
//!
//! ```rust
//! use phy_core::length::Length;
//! use phy_core::mechanics::MeterSecond;
//! use phy_core::time::Time;
//!
//! let v: MeterSecond = (Length::new(100) / Time::new(20)).unwrap().cast();
//! assert_eq!(v.value(), 5);
//! ```

use crate::dimension::Dim;
use crate::scale::{Kilo, Mega};
use crate::Quantity;
use phy_derive::Scale;
use typenum::{N1, N2, N3, P1, P2, Z0};

/// Dimension of speed (`m·s^-1`).
pub type Speed = Dim<P1, Z0, N1, Z0, Z0, Z0, Z0>;

/// Dimension of acceleration (`m·s^-2`).
pub type Acceleration = Dim<P1, Z0, N2, Z0, Z0, Z0, Z0>;

/// Dimension of force (`kg·m·s^-2`).
pub type Newton = Dim<P1, P1, N2, Z0, Z0, Z0, Z0>;

/// Dimension of pressure (`kg·m^-1·s^-2`).
pub type Pascal = Dim<N1, P1, N2, Z0, Z0, Z0, Z0>;

/// Dimension of energy (`kg·m^2·s^-2`).
pub type Joule = Dim<P2, P1, N2, Z0, Z0, Z0, Z0>;

/// Dimension of power (`kg·m^2·s^-3`).
pub type Watt = Dim<P2, P1, N3, Z0, Z0, Z0, Z0>;

// ─────────────────────────────────────────────────────────────────────────────
// Speed
// ─────────────────────────────────────────────────────────────────────────────

/// Kilometre per hour (`5/18 m·s^-1`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Scale)]
#[scale(num = 1_000, den = 3_600)]
pub struct KilometrePerHour;

/// Knot, one nautical mile per hour (`1852/3600 m·s^-1`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Scale)]
#[scale(num = 1_852, den = 3_600)]
pub struct Knot;

/// A speed in metres per second.
pub type MeterSecond = Quantity<Speed>;
/// A speed in kilometres per hour.
pub type KilometresPerHour = Quantity<Speed, KilometrePerHour>;
/// A speed in knots.
pub type Knots = Quantity<Speed, Knot>;

/// An acceleration in metres per second squared.
pub type AccelerationQty = Quantity<Acceleration>;

// ─────────────────────────────────────────────────────────────────────────────
// Force, pressure, energy, power
// ─────────────────────────────────────────────────────────────────────────────

/// A force in newtons.
pub type Force = Quantity<Newton>;
/// A force in kilonewtons.
pub type Kilonewtons = Quantity<Newton, Kilo>;

/// A pressure in pascals.
pub type Pressure = Quantity<Pascal>;
/// A pressure in kilopascals.
pub type Kilopascals = Quantity<Pascal, Kilo>;

/// An energy in joules.
pub type Energy = Quantity<Joule>;
/// An energy in kilojoules.
pub type Kilojoules = Quantity<Joule, Kilo>;

/// A power in watts.
pub type Power = Quantity<Watt>;
/// A power in kilowatts.
pub type Kilowatts = Quantity<Watt, Kilo>;
/// A power in megawatts.
pub type Megawatts = Quantity<Watt, Mega>;
