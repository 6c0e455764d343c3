//! Mass quantities.
//!
//! The base scale for this dimension is the kilogram, which is the SI base unit even though it carries a prefix.
//! The gram is therefore [`Milli`]-scaled and the tonne [`Kilo`]-scaled.
//!
//! ```rust
//! use phy_core::mass::{Grams, Mass, Tonnes};
//!
//! assert!(Tonnes::new(1) == Mass::new(1_000));
//! assert!(Mass::new(1) == Grams::new(1_000));
//! ```

use crate::dimension::Dim;
use crate::scale::{Kilo, Micro, Milli};
use crate::Quantity;
use phy_derive::Scale;
use typenum::{P1, Z0};

/// Dimension of mass (`kg`).
pub type Kilogram = Dim<Z0, P1, Z0, Z0, Z0, Z0, Z0>;

/// A mass in kilograms.
pub type Mass = Quantity<Kilogram>;
/// One kilogram.
pub const KG: Mass = Mass::new(1);

/// A mass in grams.
pub type Grams = Quantity<Kilogram, Milli>;
/// A mass in milligrams.
pub type Milligrams = Quantity<Kilogram, Micro>;
/// A mass in tonnes.
pub type Tonnes = Quantity<Kilogram, Kilo>;

/// International avoirdupois pound (`0.45359237 kg`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Scale)]
#[scale(num = 45_359_237, den = 100_000_000)]
pub struct Pound;
/// A mass in pounds.
pub type Pounds = Quantity<Kilogram, Pound>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::Unity;

    #[test]
    fn grams_to_kilograms_truncates() {
        assert_eq!(Grams::new(2_500).cast::<Unity>().value(), 2);
    }

    #[test]
    fn milligrams_are_exact_in_grams() {
        assert_eq!(Milligrams::new(7_000).cast::<Milli>().value(), 7);
        assert!(Milligrams::new(1_000_000) == KG);
    }

    #[test]
    fn pounds_to_grams() {
        // 453.59237 g
        assert_eq!(Pounds::new(1).cast::<Milli>().value(), 453);
        assert_eq!(Pounds::new(100).cast::<Milli>().value(), 45_359);
        assert!(Pounds::new(1) < Grams::new(454));
        assert!(Pounds::new(1) > Grams::new(453));
    }
}
