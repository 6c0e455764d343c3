//! Temperature, amount of substance and luminous intensity.
//!
//! Temperatures here are absolute (kelvin-based) and linear. Readings on offset scales such as Celsius go through
//! [`crate::affine`], which maps them onto [`Centikelvins`] so the 273.15 K offset stays exact.

use crate::dimension::Dim;
use crate::scale::{Centi, Milli};
use crate::Quantity;
use typenum::{P1, Z0};

/// Dimension of thermodynamic temperature (`K`).
pub type Kelvin = Dim<Z0, Z0, Z0, Z0, P1, Z0, Z0>;

/// Dimension of amount of substance (`mol`).
pub type Mole = Dim<Z0, Z0, Z0, Z0, Z0, P1, Z0>;

/// Dimension of luminous intensity (`cd`).
pub type Candela = Dim<Z0, Z0, Z0, Z0, Z0, Z0, P1>;

/// A temperature in kelvins.
pub type Temperature = Quantity<Kelvin>;
/// A temperature in hundredths of a kelvin.
pub type Centikelvins = Quantity<Kelvin, Centi>;
/// A temperature in millikelvins.
pub type Millikelvins = Quantity<Kelvin, Milli>;

/// An amount of substance in moles.
pub type Amount = Quantity<Mole>;
/// An amount of substance in millimoles.
pub type Millimoles = Quantity<Mole, Milli>;

/// A luminous intensity in candelas.
pub type LuminousIntensity = Quantity<Candela>;
