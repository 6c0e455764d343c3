//! Constructor functions for the base-scale quantities.
//!
//! ```rust
//! use phy_core::literals::{celsius, metres, seconds};
//! use phy_core::mechanics::MeterSecond;
//!
//! let v: MeterSecond = (metres(100) / seconds(20)).unwrap().cast();
//! assert_eq!(v.value(), 5);
//! assert_eq!(celsius(0).value(), 27_315);
//! ```

use crate::affine::{from_reading, Celsius, Fahrenheit};
use crate::electric::Current;
use crate::length::Length;
use crate::mass::Mass;
use crate::scale::Centi;
use crate::thermal::{Amount, Centikelvins, LuminousIntensity, Temperature};
use crate::time::Time;

crate::quantity_literals! {
    /// A length of `value` metres.
    metres => Length;
    /// A mass of `value` kilograms.
    kilograms => Mass;
    /// A time of `value` seconds.
    seconds => Time;
    /// A current of `value` amperes.
    amperes => Current;
    /// A temperature of `value` kelvins.
    kelvins => Temperature;
    /// An amount of `value` moles.
    moles => Amount;
    /// A luminous intensity of `value` candelas.
    candelas => LuminousIntensity;
}

/// A Celsius reading as an absolute temperature in centikelvins.
#[inline]
pub const fn celsius(value: i64) -> Centikelvins {
    from_reading::<Celsius, Centi>(value)
}

/// A Fahrenheit reading as an absolute temperature in centikelvins, truncated toward zero.
#[inline]
pub const fn fahrenheit(value: i64) -> Centikelvins {
    from_reading::<Fahrenheit, Centi>(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::Millimetres;

    #[test]
    fn base_literals() {
        assert!(metres(2) == Millimetres::new(2_000));
        assert_eq!(kilograms(3).value(), 3);
        assert_eq!(amperes(-1).value(), -1);
        assert!(kelvins(1) == Centikelvins::new(100));
        assert_eq!(moles(6).value() + candelas(1).value(), 7);
    }

    #[test]
    fn literals_are_const() {
        const RUN: Length = metres(400);
        assert_eq!(RUN.value(), 400);
        const FREEZING: Centikelvins = celsius(0);
        assert!(FREEZING == fahrenheit(32));
    }

    #[test]
    fn offset_literals() {
        assert!(celsius(100) == fahrenheit(212));
        assert!(celsius(-273) > kelvins(0));
        assert!(celsius(20) - celsius(15) == kelvins(5));
        // 1 °F is 255.927... K
        assert_eq!(fahrenheit(1).value(), 25_592);
    }
}
