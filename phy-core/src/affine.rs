//! Offset temperature scales.
//!
//! A thermometer reading in degrees Celsius or Fahrenheit is not a [`Scale`]: converting it to kelvin needs an
//! additive offset as well as a factor. [`Affine`] describes that map,
//!
//! ```text
//! kelvin = reading * RATIO + OFFSET
//! ```
//!
//! and [`from_reading`] / [`to_reading`] move between readings and linear [`Kelvin`] quantities. Once a reading
//! is a `Quantity<Kelvin, S>` it behaves like any other quantity; differences between two temperatures, in
//! particular, are plain kelvin values.
//!
//! The Celsius offset is 273.15 K, so readings are best mapped onto [`Centi`](crate::scale::Centi) or a finer
//! scale to stay exact:
//!
//! ```rust
//! use phy_core::affine::{from_reading, to_reading, Celsius, Fahrenheit};
//! use phy_core::scale::Centi;
//! use phy_core::thermal::Centikelvins;
//!
//! let boiling: Centikelvins = from_reading::<Celsius, Centi>(100);
//! assert_eq!(boiling.value(), 37_315);
//! assert_eq!(to_reading::<Fahrenheit, Centi>(boiling), 212);
//! ```

use crate::error::{QuantityError, Result};
use crate::scale::Scale;
use crate::thermal::Kelvin;
use crate::{Quantity, Ratio};
use core::fmt::Debug;

/// An affine temperature scale: `kelvin = reading * RATIO + OFFSET`.
pub trait Affine: Copy + Debug + 'static {
    /// Kelvins per degree.
    const RATIO: Ratio;
    /// Kelvin value of a zero reading.
    const OFFSET: Ratio;
}

/// Degrees Celsius (`K = °C + 273.15`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Celsius;

impl Affine for Celsius {
    const RATIO: Ratio = Ratio::ONE;
    const OFFSET: Ratio = Ratio::new(27_315, 100);
}

/// Degrees Fahrenheit (`K = (°F + 459.67) * 5/9`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Fahrenheit;

impl Affine for Fahrenheit {
    const RATIO: Ratio = Ratio::new(5, 9);
    const OFFSET: Ratio = Ratio::new(45_967, 180);
}

/// Degrees Rankine (`K = °R * 5/9`).
///
/// Linear, but kept here so readings on all Fahrenheit-sized scales go through the same API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rankine;

impl Affine for Rankine {
    const RATIO: Ratio = Ratio::new(5, 9);
    const OFFSET: Ratio = Ratio::new(0, 1);
}

/// `(v * a + b)` truncated toward zero, with `a` and `b` folded into one fraction.
const fn affine_wrapping(v: i64, a: Ratio, b: Ratio) -> i128 {
    let num = (v as i128)
        .wrapping_mul(a.num() as i128)
        .wrapping_mul(b.den() as i128)
        .wrapping_add((b.num() as i128).wrapping_mul(a.den() as i128));
    let wide = num / (a.den() as i128 * b.den() as i128);
    debug_assert!(
        wide >= i64::MIN as i128 && wide <= i64::MAX as i128,
        "temperature conversion overflows i64"
    );
    wide
}

fn affine_checked(v: i64, a: Ratio, b: Ratio) -> Option<i64> {
    let num = i128::from(v)
        .checked_mul(i128::from(a.num()))?
        .checked_mul(i128::from(b.den()))?
        .checked_add(i128::from(b.num()).checked_mul(i128::from(a.den()))?)?;
    let den = i128::from(a.den()).checked_mul(i128::from(b.den()))?;
    i64::try_from(num / den).ok()
}

/// Converts a reading on scale `A` into a temperature stored at scale `S`, truncating toward zero.
///
/// # Panics
///
/// Overflow follows [`Quantity::cast`]: a panic when debug assertions are enabled, wrapping otherwise. Use
/// [`try_from_reading`] when the input is untrusted.
#[inline]
pub const fn from_reading<A: Affine, S: Scale>(reading: i64) -> Quantity<Kelvin, S> {
    let a = A::RATIO.div(S::RATIO);
    let b = A::OFFSET.div(S::RATIO);
    Quantity::new(affine_wrapping(reading, a, b) as i64)
}

/// Checked [`from_reading`].
pub fn try_from_reading<A: Affine, S: Scale>(reading: i64) -> Result<Quantity<Kelvin, S>> {
    let a = A::RATIO.div(S::RATIO);
    let b = A::OFFSET.div(S::RATIO);
    affine_checked(reading, a, b).map(Quantity::new).ok_or_else(|| {
        log::debug!("reading {reading} overflows when mapped onto scale {:?}", S::RATIO);
        QuantityError::Overflow
    })
}

/// Converts a temperature back into a reading on scale `A`, truncating toward zero.
///
/// Overflow is handled as in [`from_reading`]; see [`try_to_reading`].
#[inline]
pub const fn to_reading<A: Affine, S: Scale>(temperature: Quantity<Kelvin, S>) -> i64 {
    let c = S::RATIO.div(A::RATIO);
    let d = A::OFFSET.div(A::RATIO);
    affine_wrapping(temperature.value(), c, Ratio::new(-d.num(), d.den())) as i64
}

/// Checked [`to_reading`].
pub fn try_to_reading<A: Affine, S: Scale>(temperature: Quantity<Kelvin, S>) -> Result<i64> {
    let c = S::RATIO.div(A::RATIO);
    let d = A::OFFSET.div(A::RATIO);
    affine_checked(temperature.value(), c, Ratio::new(-d.num(), d.den())).ok_or_else(|| {
        log::debug!(
            "temperature {} at scale {:?} overflows as a reading",
            temperature.value(),
            S::RATIO
        );
        QuantityError::Overflow
    })
}
