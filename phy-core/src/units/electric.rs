//! Electromagnetic quantities.
//!
//! Only the ampere is a base dimension; charge, potential and resistance are compositions of it with the
//! mechanical base dimensions, so Ohm's law type-checks on its own:
//!
//! ```rust
//! use phy_core::electric::{Current, ElectricPotential, ElectricalResistance};
//!
//! let v: ElectricPotential = (Current::new(2) * ElectricalResistance::new(5)).cast();
//! assert_eq!(v.value(), 10);
//! ```

use crate::dimension::Dim;
use crate::scale::{Kilo, Milli};
use crate::Quantity;
use typenum::{N1, N2, N3, P1, P2, Z0};

/// Dimension of electric current (`A`).
pub type Ampere = Dim<Z0, Z0, Z0, P1, Z0, Z0, Z0>;

/// Dimension of electric charge (`A·s`).
pub type Coulomb = Dim<Z0, Z0, P1, P1, Z0, Z0, Z0>;

/// Dimension of electric potential (`kg·m^2·s^-3·A^-1`).
pub type Volt = Dim<P2, P1, N3, N1, Z0, Z0, Z0>;

/// Dimension of electrical resistance (`kg·m^2·s^-3·A^-2`).
pub type Ohm = Dim<P2, P1, N3, N2, Z0, Z0, Z0>;

/// A current in amperes.
pub type Current = Quantity<Ampere>;
/// A current in milliamperes.
pub type Milliamperes = Quantity<Ampere, Milli>;

/// A charge in coulombs.
pub type Charge = Quantity<Coulomb>;

/// A potential in volts.
pub type ElectricPotential = Quantity<Volt>;
/// A potential in millivolts.
pub type Millivolts = Quantity<Volt, Milli>;
/// A potential in kilovolts.
pub type Kilovolts = Quantity<Volt, Kilo>;

/// A resistance in ohms.
pub type ElectricalResistance = Quantity<Ohm>;
/// A resistance in kiloohms.
pub type Kiloohms = Quantity<Ohm, Kilo>;
