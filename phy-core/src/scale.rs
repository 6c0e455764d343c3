//! Scale markers: exact rational factors relating a representation to its base unit.

use crate::Ratio;
use core::fmt::Debug;
use core::marker::PhantomData;
use phy_derive::Scale;

/// Trait implemented by every **scale** marker.
///
/// `RATIO` answers "how many base units is one unit of this representation". For lengths, [`Kilo`] has
/// `RATIO == 1000/1` because one kilometre is a thousand metres, and [`Milli`] has `RATIO == 1/1000`.
///
/// Scales are independent of dimension: the same [`Milli`] marker scales metres, seconds or volts.
///
/// # Invariants
///
/// - Implementations are zero-sized marker types.
/// - `RATIO` is built with [`Ratio::new`], so it is reduced and has a positive denominator.
/// - `RATIO` is positive. A zero or negative ratio would reverse or collapse the ordering of quantities, so
///   [`Quantity::new`](crate::Quantity::new) rejects it at compile time.
///
/// Most scales are declared with the `Scale` derive:
///
/// ```rust,ignore
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Scale)]
/// #[scale(num = 1_609_344, den = 1_000)]
/// pub struct Mile;
/// ```
pub trait Scale: Copy + Debug + 'static {
    /// Factor from this scale to the base (`1/1`) scale.
    const RATIO: Ratio;
}

/// Base scale (`1/1`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Scale)]
#[scale(num = 1)]
pub struct Unity;

/// Scale obtained by multiplying two scales; produced by quantity multiplication.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct ScaleProduct<A: Scale, B: Scale>(PhantomData<(A, B)>);

impl<A: Scale, B: Scale> Scale for ScaleProduct<A, B> {
    const RATIO: Ratio = A::RATIO.mul(B::RATIO);
}

/// Scale obtained by dividing two scales; produced by quantity division.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct ScaleQuotient<A: Scale, B: Scale>(PhantomData<(A, B)>);

impl<A: Scale, B: Scale> Scale for ScaleQuotient<A, B> {
    const RATIO: Ratio = A::RATIO.div(B::RATIO);
}

/// Conversion factor from scale `From` to scale `To`, evaluated at compile time.
///
/// A value `v` expressed in `From` equals `v * RATIO` expressed in `To`.
#[derive(Clone, Copy, Debug)]
pub struct Conversion<From: Scale, To: Scale>(PhantomData<(From, To)>);

impl<From: Scale, To: Scale> Conversion<From, To> {
    /// `From::RATIO / To::RATIO`.
    pub const RATIO: Ratio = From::RATIO.div(To::RATIO);
}

/// Returns the factor converting a value in scale `F` to scale `T`.
///
/// ```rust
/// use phy_core::scale::{conversion, Kilo, Milli};
/// use phy_core::Ratio;
///
/// assert_eq!(conversion::<Kilo, Milli>(), Ratio::new(1_000_000, 1));
/// ```
#[inline]
pub const fn conversion<F: Scale, T: Scale>() -> Ratio {
    Conversion::<F, T>::RATIO
}

// ─────────────────────────────────────────────────────────────────────────────
// SI prefixes
// ─────────────────────────────────────────────────────────────────────────────

/// `10^-9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Scale)]
#[scale(num = 1, den = 1_000_000_000)]
pub struct Nano;

/// `10^-6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Scale)]
#[scale(num = 1, den = 1_000_000)]
pub struct Micro;

/// `10^-3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Scale)]
#[scale(num = 1, den = 1_000)]
pub struct Milli;

/// `10^-2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Scale)]
#[scale(num = 1, den = 100)]
pub struct Centi;

/// `10^-1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Scale)]
#[scale(num = 1, den = 10)]
pub struct Deci;

/// `10^1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Scale)]
#[scale(num = 10)]
pub struct Deca;

/// `10^2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Scale)]
#[scale(num = 100)]
pub struct Hecto;

/// `10^3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Scale)]
#[scale(num = 1_000)]
pub struct Kilo;

/// `10^6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Scale)]
#[scale(num = 1_000_000)]
pub struct Mega;

/// `10^9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Scale)]
#[scale(num = 1_000_000_000)]
pub struct Giga;
