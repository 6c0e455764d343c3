//! Quantity type and its implementations.

use crate::dimension::{DimDiv, DimMul, Dimension, Product, Quotient, SameDimension};
use crate::error::{QuantityError, Result};
use crate::scale::{Conversion, Scale, ScaleProduct, ScaleQuotient, Unity};
use crate::Ratio;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An integer value tagged with a dimension `D` and a scale `S`.
///
/// The physical magnitude represented is `value * S::RATIO` base units of `D`. Both tags are phantom types, so a
/// `Quantity` is exactly as large as its `i64`.
///
/// - Comparison, `+`, `-`, `+=` and `-=` require equal dimensions but accept any pair of scales.
/// - `*` and `/` accept any dimensions and compose both the dimension and the scale.
/// - Scale conversion truncates toward zero; it never rounds and never reports lost precision.
///
/// # Examples
///
/// ```rust
/// use phy_core::length::{Centimetres, Length};
///
/// let a = Length::new(5);
/// let b = Centimetres::new(500);
/// assert!(a == b);
///
/// let mut c = Length::new(1);
/// c += Centimetres::new(250);
/// assert_eq!(c.value(), 3);
/// ```
pub struct Quantity<D: Dimension, S: Scale = Unity> {
    value: i64,
    _marker: PhantomData<(D, S)>,
}

impl<D: Dimension, S: Scale> Quantity<D, S> {
    /// The zero quantity.
    pub const ZERO: Self = Self::new(0);

    /// Largest representable quantity.
    pub const MAX: Self = Self::new(i64::MAX);

    /// Smallest representable quantity.
    pub const MIN: Self = Self::new(i64::MIN);

    const POSITIVE_SCALE: () = assert!(S::RATIO.num() > 0, "scale ratio must be positive");

    /// Creates a new quantity from a raw value expressed in scale `S`.
    ///
    /// A scale whose ratio is zero or negative is rejected at compile time when this is instantiated.
    ///
    /// ```rust
    /// use phy_core::length::Millimetres;
    /// let d = Millimetres::new(3);
    /// assert_eq!(d.value(), 3);
    /// ```
    #[inline]
    pub const fn new(value: i64) -> Self {
        let () = Self::POSITIVE_SCALE;
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Returns the raw value, expressed in scale `S`.
    #[inline]
    pub const fn value(self) -> i64 {
        self.value
    }

    /// The scale factor of this quantity type.
    #[inline]
    pub const fn scale() -> Ratio {
        S::RATIO
    }

    /// Converts this quantity to scale `T`, truncating toward zero.
    ///
    /// The product is computed in `i128` and narrowed to `i64` with the same overflow behavior as plain `i64`
    /// arithmetic. Use [`Quantity::try_cast`] to detect overflow instead.
    ///
    /// # Panics
    ///
    /// Panics if the result does not fit in an `i64` and debug assertions are enabled; it wraps otherwise. The
    /// same holds for `+=`, `-=`, `+`, `-` and [`qty_cast`], which convert through this method.
    ///
    /// ```rust
    /// use phy_core::length::{Length, Millimetres};
    /// use phy_core::scale::Unity;
    ///
    /// assert_eq!(Length::new(2).cast::<phy_core::scale::Milli>().value(), 2_000);
    /// assert_eq!(Millimetres::new(1_999).cast::<Unity>().value(), 1);
    /// ```
    #[inline]
    pub const fn cast<T: Scale>(self) -> Quantity<D, T> {
        let wide = Conversion::<S, T>::RATIO.apply(self.value);
        debug_assert!(
            wide >= i64::MIN as i128 && wide <= i64::MAX as i128,
            "quantity cast overflows i64"
        );
        Quantity::new(wide as i64)
    }

    /// Converts this quantity to scale `T`, reporting [`QuantityError::Overflow`] if the result does not fit.
    ///
    /// ```rust
    /// use phy_core::length::Kilometres;
    /// use phy_core::scale::Nano;
    /// use phy_core::QuantityError;
    ///
    /// assert_eq!(Kilometres::new(1).try_cast::<Nano>().unwrap().value(), 1_000_000_000_000);
    /// assert_eq!(Kilometres::new(i64::MAX).try_cast::<Nano>(), Err(QuantityError::Overflow));
    /// ```
    pub fn try_cast<T: Scale>(self) -> Result<Quantity<D, T>> {
        let wide = Conversion::<S, T>::RATIO.apply(self.value);
        i64::try_from(wide).map(Quantity::new).map_err(|_| {
            log::debug!(
                "cast of {} from {:?} to {:?} overflows i64",
                self.value,
                S::RATIO,
                T::RATIO
            );
            QuantityError::Overflow
        })
    }

    /// Returns `true` if the value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.value == 0
    }

    /// Returns the absolute value.
    ///
    /// # Panics
    ///
    /// Like [`i64::abs`], panics on [`Quantity::MIN`] when debug assertions are enabled. See
    /// [`Quantity::checked_abs`].
    ///
    /// ```rust
    /// use phy_core::time::Time;
    /// assert_eq!(Time::new(-10).abs().value(), 10);
    /// ```
    #[inline]
    pub const fn abs(self) -> Self {
        Self::new(self.value.abs())
    }

    /// Absolute value, reporting [`QuantityError::Overflow`] for [`Quantity::MIN`].
    pub fn checked_abs(self) -> Result<Self> {
        self.value
            .checked_abs()
            .map(Self::new)
            .ok_or(QuantityError::Overflow)
    }

    /// Negation, reporting [`QuantityError::Overflow`] for [`Quantity::MIN`].
    pub fn checked_neg(self) -> Result<Self> {
        self.value
            .checked_neg()
            .map(Self::new)
            .ok_or(QuantityError::Overflow)
    }

    /// Returns `-1`, `0` or `1` according to the sign of the value.
    #[inline]
    pub const fn signum(self) -> i64 {
        self.value.signum()
    }

    /// Returns the smaller of two quantities of the same type.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if self.value <= other.value {
            self
        } else {
            other
        }
    }

    /// Returns the larger of two quantities of the same type.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if self.value >= other.value {
            self
        } else {
            other
        }
    }

    /// `self + rhs` in the scale of `self`, reporting overflow instead of wrapping or panicking.
    pub fn checked_add<D2, S2>(self, rhs: Quantity<D2, S2>) -> Result<Self>
    where
        D2: SameDimension<D>,
        S2: Scale,
    {
        let rhs = rhs.try_cast::<S>()?;
        self.value
            .checked_add(rhs.value)
            .map(Self::new)
            .ok_or(QuantityError::Overflow)
    }

    /// `self - rhs` in the scale of `self`, reporting overflow instead of wrapping or panicking.
    pub fn checked_sub<D2, S2>(self, rhs: Quantity<D2, S2>) -> Result<Self>
    where
        D2: SameDimension<D>,
        S2: Scale,
    {
        let rhs = rhs.try_cast::<S>()?;
        self.value
            .checked_sub(rhs.value)
            .map(Self::new)
            .ok_or(QuantityError::Overflow)
    }

    /// `self * rhs`, reporting overflow instead of wrapping or panicking.
    pub fn checked_mul<D2, S2>(
        self,
        rhs: Quantity<D2, S2>,
    ) -> Result<Quantity<Product<D, D2>, ScaleProduct<S, S2>>>
    where
        D: DimMul<D2>,
        D2: Dimension,
        S2: Scale,
    {
        self.value
            .checked_mul(rhs.value)
            .map(Quantity::new)
            .ok_or(QuantityError::Overflow)
    }

    /// `self / rhs` with truncating integer division.
    ///
    /// Returns [`QuantityError::DivisionByZero`] when `rhs` is zero and [`QuantityError::Overflow`] for
    /// `i64::MIN / -1`. The `/` operator delegates here.
    pub fn checked_div<D2, S2>(
        self,
        rhs: Quantity<D2, S2>,
    ) -> Result<Quantity<Quotient<D, D2>, ScaleQuotient<S, S2>>>
    where
        D: DimDiv<D2>,
        D2: Dimension,
        S2: Scale,
    {
        if rhs.value == 0 {
            log::debug!("rejected division of {} by a zero-valued quantity", self.value);
            return Err(QuantityError::DivisionByZero);
        }
        self.value
            .checked_div(rhs.value)
            .map(Quantity::new)
            .ok_or(QuantityError::Overflow)
    }
}

/// Type-level view of a [`Quantity`]: its dimension and scale.
///
/// Lets generic code name "some quantity type" and recover its tags, as [`qty_cast`] does.
pub trait QuantityType: Copy {
    /// Dimension tag.
    type Dim: Dimension;
    /// Scale tag.
    type Scale: Scale;

    /// Builds the quantity from a raw value in its own scale.
    fn from_value(value: i64) -> Self;

    /// Raw value in its own scale.
    fn to_value(self) -> i64;
}

impl<D: Dimension, S: Scale> QuantityType for Quantity<D, S> {
    type Dim = D;
    type Scale = S;

    #[inline]
    fn from_value(value: i64) -> Self {
        Self::new(value)
    }

    #[inline]
    fn to_value(self) -> i64 {
        self.value
    }
}

/// Converts `q` to the quantity type `R`, which must have the same dimension.
///
/// Same semantics as [`Quantity::cast`], but the target is named as a quantity alias rather than a scale.
///
/// ```rust
/// use phy_core::qty_cast;
/// use phy_core::length::{Feet, Inches};
///
/// let foot: Inches = qty_cast(Feet::new(1));
/// assert_eq!(foot.value(), 12);
/// ```
///
/// ```compile_fail
/// use phy_core::qty_cast;
/// use phy_core::length::Length;
/// use phy_core::time::Time;
///
/// let _: Time = qty_cast(Length::new(1)); // cast requires identical dimensions
/// ```
#[inline]
pub fn qty_cast<R, D, S>(q: Quantity<D, S>) -> R
where
    R: QuantityType,
    R::Dim: SameDimension<D>,
    D: Dimension,
    S: Scale,
{
    R::from_value(q.cast::<R::Scale>().value)
}

/// Exact three-way comparison of `a` (in scale `S1`) and `b` (in scale `S2`).
///
/// `a * S1 <=> b * S2` is evaluated as `a * n <=> b * d` with `n/d = S1/S2` reduced, so no precision is lost.
#[inline]
fn compare_scaled<S1: Scale, S2: Scale>(a: i64, b: i64) -> Ordering {
    let conv = Conversion::<S1, S2>::RATIO;
    let lhs = a as i128 * conv.num() as i128;
    let rhs = b as i128 * conv.den() as i128;
    lhs.cmp(&rhs)
}

// ─────────────────────────────────────────────────────────────────────────────
// Structural impls
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension, S: Scale> Clone for Quantity<D, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dimension, S: Scale> Copy for Quantity<D, S> {}

impl<D: Dimension, S: Scale> Default for Quantity<D, S> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<D: Dimension, S: Scale> fmt::Debug for Quantity<D, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("value", &self.value)
            .field("dimension", &D::EXPONENTS)
            .field("scale", &S::RATIO)
            .finish()
    }
}

impl<D: Dimension, S: Scale> Hash for Quantity<D, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<D: Dimension, S: Scale> From<i64> for Quantity<D, S> {
    #[inline]
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison (same dimension, any scales)
// ─────────────────────────────────────────────────────────────────────────────

impl<D1, S1, D2, S2> PartialEq<Quantity<D2, S2>> for Quantity<D1, S1>
where
    D1: Dimension,
    D2: SameDimension<D1>,
    S1: Scale,
    S2: Scale,
{
    #[inline]
    fn eq(&self, other: &Quantity<D2, S2>) -> bool {
        compare_scaled::<S1, S2>(self.value, other.value) == Ordering::Equal
    }
}

impl<D: Dimension, S: Scale> Eq for Quantity<D, S> {}

impl<D1, S1, D2, S2> PartialOrd<Quantity<D2, S2>> for Quantity<D1, S1>
where
    D1: Dimension,
    D2: SameDimension<D1>,
    S1: Scale,
    S2: Scale,
{
    #[inline]
    fn partial_cmp(&self, other: &Quantity<D2, S2>) -> Option<Ordering> {
        Some(compare_scaled::<S1, S2>(self.value, other.value))
    }
}

impl<D: Dimension, S: Scale> Ord for Quantity<D, S> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Additive operators (same dimension, any scales; left scale wins)
// ─────────────────────────────────────────────────────────────────────────────

impl<D1, S1, D2, S2> AddAssign<Quantity<D2, S2>> for Quantity<D1, S1>
where
    D1: Dimension,
    D2: SameDimension<D1>,
    S1: Scale,
    S2: Scale,
{
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<D2, S2>) {
        self.value += rhs.cast::<S1>().value;
    }
}

impl<D1, S1, D2, S2> SubAssign<Quantity<D2, S2>> for Quantity<D1, S1>
where
    D1: Dimension,
    D2: SameDimension<D1>,
    S1: Scale,
    S2: Scale,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<D2, S2>) {
        self.value -= rhs.cast::<S1>().value;
    }
}

impl<D1, S1, D2, S2> Add<Quantity<D2, S2>> for Quantity<D1, S1>
where
    D1: Dimension,
    D2: SameDimension<D1>,
    S1: Scale,
    S2: Scale,
{
    type Output = Self;
    #[inline]
    fn add(mut self, rhs: Quantity<D2, S2>) -> Self {
        self += rhs;
        self
    }
}

impl<D1, S1, D2, S2> Sub<Quantity<D2, S2>> for Quantity<D1, S1>
where
    D1: Dimension,
    D2: SameDimension<D1>,
    S1: Scale,
    S2: Scale,
{
    type Output = Self;
    #[inline]
    fn sub(mut self, rhs: Quantity<D2, S2>) -> Self {
        self -= rhs;
        self
    }
}

/// # Panics
///
/// Negating [`Quantity::MIN`] panics when debug assertions are enabled, as for `i64`. See
/// [`Quantity::checked_neg`].
impl<D: Dimension, S: Scale> Neg for Quantity<D, S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Multiplicative operators (any dimensions, any scales)
// ─────────────────────────────────────────────────────────────────────────────

impl<D1, S1, D2, S2> Mul<Quantity<D2, S2>> for Quantity<D1, S1>
where
    D1: DimMul<D2>,
    D2: Dimension,
    S1: Scale,
    S2: Scale,
{
    type Output = Quantity<Product<D1, D2>, ScaleProduct<S1, S2>>;
    #[inline]
    fn mul(self, rhs: Quantity<D2, S2>) -> Self::Output {
        Quantity::new(self.value * rhs.value)
    }
}

/// Division can fail at runtime, so the operator yields a [`Result`].
impl<D1, S1, D2, S2> Div<Quantity<D2, S2>> for Quantity<D1, S1>
where
    D1: DimDiv<D2>,
    D2: Dimension,
    S1: Scale,
    S2: Scale,
{
    type Output = Result<Quantity<Quotient<D1, D2>, ScaleQuotient<S1, S2>>>;
    #[inline]
    fn div(self, rhs: Quantity<D2, S2>) -> Self::Output {
        self.checked_div(rhs)
    }
}

impl<D: Dimension, S: Scale> Mul<i64> for Quantity<D, S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i64) -> Self {
        Self::new(self.value * rhs)
    }
}

impl<D: Dimension, S: Scale> Mul<Quantity<D, S>> for i64 {
    type Output = Quantity<D, S>;
    #[inline]
    fn mul(self, rhs: Quantity<D, S>) -> Self::Output {
        rhs * self
    }
}

impl<D: Dimension, S: Scale> MulAssign<i64> for Quantity<D, S> {
    #[inline]
    fn mul_assign(&mut self, rhs: i64) {
        self.value *= rhs;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<D: Dimension, S: Scale> Serialize for Quantity<D, S> {
    fn serialize<Ser>(&self, serializer: Ser) -> core::result::Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, D: Dimension, S: Scale> Deserialize<'de> for Quantity<D, S> {
    fn deserialize<De>(deserializer: De) -> core::result::Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Ok(Quantity::new(value))
    }
}

/// Serde helper module for serializing quantities together with their scale.
///
/// Use this with the `#[serde(with = "...")]` attribute when the consumer of the data needs to know which scale a
/// raw integer is expressed in.
///
/// # Examples
///
/// ```rust
/// use phy_core::length::Millimetres;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Part {
///     #[serde(with = "phy_core::serde_with_scale")]
///     width: Millimetres, // {"value": 12, "num": 1, "den": 1000}
///
///     depth: Millimetres, // 40 (default, compact)
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_scale {
    use super::*;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;

    /// Serializes a `Quantity<D, S>` as a struct with `value`, `num` and `den` fields.
    pub fn serialize<D, S, Ser>(
        quantity: &Quantity<D, S>,
        serializer: Ser,
    ) -> core::result::Result<Ser::Ok, Ser::Error>
    where
        D: Dimension,
        S: Scale,
        Ser: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 3)?;
        state.serialize_field("value", &quantity.value())?;
        state.serialize_field("num", &S::RATIO.num())?;
        state.serialize_field("den", &S::RATIO.den())?;
        state.end()
    }

    /// Deserializes a `Quantity<D, S>` from a struct with `value` and optionally `num`/`den` fields.
    ///
    /// When present, `num`/`den` must denote the same ratio as `S`; they need not be reduced.
    pub fn deserialize<'de, D, S, De>(deserializer: De) -> core::result::Result<Quantity<D, S>, De::Error>
    where
        D: Dimension,
        S: Scale,
        De: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Num,
            Den,
        }

        struct QuantityVisitor<D, S>(PhantomData<(D, S)>);

        impl<'de, D: Dimension, S: Scale> Visitor<'de> for QuantityVisitor<D, S> {
            type Value = Quantity<D, S>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("struct Quantity with value, num and den fields")
            }

            fn visit_map<V>(self, mut map: V) -> core::result::Result<Quantity<D, S>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<i64> = None;
                let mut num: Option<i64> = None;
                let mut den: Option<i64> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Num => {
                            if num.is_some() {
                                return Err(de::Error::duplicate_field("num"));
                            }
                            num = Some(map.next_value()?);
                        }
                        Field::Den => {
                            if den.is_some() {
                                return Err(de::Error::duplicate_field("den"));
                            }
                            den = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                if num.is_some() || den.is_some() {
                    let num = num.unwrap_or(1);
                    let den = den.unwrap_or(1);
                    if den == 0 {
                        return Err(de::Error::custom("scale denominator must be non-zero"));
                    }
                    let same = i128::from(num) * i128::from(S::RATIO.den())
                        == i128::from(den) * i128::from(S::RATIO.num());
                    if !same {
                        return Err(de::Error::custom(format_args!(
                            "scale mismatch: expected {}/{}, found {}/{}",
                            S::RATIO.num(),
                            S::RATIO.den(),
                            num,
                            den
                        )));
                    }
                }

                Ok(Quantity::new(value))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "num", "den"],
            QuantityVisitor(PhantomData),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::{Centimetres, Length, Metre, Millimetres};
    use crate::mechanics::{MeterSecond, Speed};
    use crate::length::Kilometres;
    use crate::scale::{Centi, Kilo, Milli, Unity};
    use crate::time::{Frequency, Hertz, Second, Time};
    use core::any::TypeId;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn default_is_zero() {
        assert_eq!(Length::default().value(), 0);
        assert!(Length::default().is_zero());
    }

    #[test]
    fn from_raw_integer() {
        let q: Length = 42.into();
        assert_eq!(q.value(), 42);
    }

    #[test]
    fn scale_is_exposed() {
        assert_eq!(Millimetres::scale(), Ratio::new(1, 1_000));
        assert!(Length::scale().is_one());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Cast
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn cast_to_finer_scale_is_exact() {
        assert_eq!(Length::new(5).cast::<Centi>().value(), 500);
    }

    #[test]
    fn cast_to_coarser_scale_truncates_toward_zero() {
        assert_eq!(Millimetres::new(1_999).cast::<Unity>().value(), 1);
        assert_eq!(Millimetres::new(-1_999).cast::<Unity>().value(), -1);
        assert_eq!(Millimetres::new(999).cast::<Unity>().value(), 0);
    }

    #[test]
    fn cast_round_trip_through_finer_scale() {
        let q = Length::new(-37);
        assert_eq!(q.cast::<Milli>().cast::<Unity>(), q);
        assert_eq!(q.cast::<Milli>().cast::<Unity>().value(), -37);
    }

    #[test]
    fn try_cast_reports_overflow() {
        assert_eq!(
            Quantity::<Metre, Kilo>::new(i64::MAX).try_cast::<Milli>(),
            Err(QuantityError::Overflow)
        );
        assert_eq!(Length::new(7).try_cast::<Milli>().map(|q| q.value()), Ok(7_000));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "quantity cast overflows i64")]
    fn cast_overflow_panics_with_debug_assertions() {
        let _ = Kilometres::new(i64::MAX / 10).cast::<Unity>();
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "quantity cast overflows i64")]
    fn add_assign_overflowing_cast_panics_with_debug_assertions() {
        let mut d = Length::new(0);
        d += Kilometres::new(i64::MAX / 10);
    }

    #[test]
    fn try_cast_catches_what_cast_would_overflow() {
        assert_eq!(
            Kilometres::new(i64::MAX / 10).try_cast::<Unity>(),
            Err(QuantityError::Overflow)
        );
        assert_eq!(Kilometres::new(-7).try_cast::<Unity>().map(|q| q.value()), Ok(-7_000));
    }

    #[test]
    fn qty_cast_targets_alias() {
        let cm: Centimetres = qty_cast(Length::new(3));
        assert_eq!(cm.value(), 300);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Comparison
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn equality_across_scales() {
        assert!(Length::new(5) == Centimetres::new(500));
        assert!(Centimetres::new(500) == Length::new(5));
        assert!(!(Length::new(5) != Centimetres::new(500)));
    }

    #[test]
    fn metre_is_not_1001_millimetres() {
        assert!(!(Length::new(1) == Millimetres::new(1_001)));
        assert!(Length::new(1) != Millimetres::new(1_001));
        assert!(Length::new(1) < Millimetres::new(1_001));
    }

    #[test]
    fn ordering_across_scales() {
        assert!(Length::new(1) > Centimetres::new(99));
        assert!(Length::new(1) >= Centimetres::new(100));
        assert!(Length::new(1) <= Centimetres::new(100));
        assert!(Centimetres::new(-101) < Length::new(-1));
        assert_eq!(
            Length::new(2).partial_cmp(&Millimetres::new(2_000)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn checked_abs_and_neg() {
        assert_eq!(Length::MIN.checked_abs(), Err(QuantityError::Overflow));
        assert_eq!(Length::MIN.checked_neg(), Err(QuantityError::Overflow));
        assert_eq!(Length::new(-3).checked_abs(), Ok(Length::new(3)));
        assert_eq!(Length::new(-3).checked_neg(), Ok(Length::new(3)));
        assert_eq!(Length::MAX.checked_neg(), Ok(Length::new(-i64::MAX)));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn abs_of_min_panics_with_debug_assertions() {
        let _ = Length::MIN.abs();
    }

    #[test]
    fn ord_within_one_scale() {
        let mut v = [Length::new(3), Length::new(-1), Length::new(2)];
        v.sort();
        assert_eq!(v.map(|q| q.value()), [-1, 2, 3]);
        assert_eq!(Length::new(3).min(Length::new(4)).value(), 3);
        assert_eq!(Length::new(3).max(Length::new(4)).value(), 4);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Additive operators
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn add_assign_same_scale() {
        let mut q = Length::new(5);
        q += Length::new(5);
        assert_eq!(q.value(), 10);
    }

    #[test]
    fn add_assign_finer_operand_truncates() {
        // 5 mm is 0.005 m, which contributes zero whole metres.
        let mut q = Length::new(5);
        q += Quantity::<Metre, Milli>::new(5);
        assert_eq!(q.value(), 5);
    }

    #[test]
    fn add_assign_coarser_operand_is_exact() {
        let mut q = Millimetres::new(5);
        q += Length::new(5);
        assert_eq!(q.value(), 5_005);
    }

    #[test]
    fn sub_assign_goes_negative() {
        let mut q = Length::new(5);
        q -= Length::new(15);
        assert_eq!(q.value(), -10);
    }

    #[test]
    fn binary_add_sub_keep_left_scale() {
        let sum = Centimetres::new(50) + Length::new(2);
        assert_eq!(sum.value(), 250);
        let diff = Length::new(2) - Centimetres::new(50);
        assert_eq!(diff.value(), 2);
        assert_eq!((-Length::new(4)).value(), -4);
    }

    #[test]
    fn checked_additive_ops() {
        assert_eq!(Length::MAX.checked_add(Length::new(1)), Err(QuantityError::Overflow));
        assert_eq!(Length::MIN.checked_sub(Length::new(1)), Err(QuantityError::Overflow));
        assert_eq!(
            Length::new(1).checked_add(Centimetres::new(100)).map(|q| q.value()),
            Ok(2)
        );
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Multiplicative operators
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn multiply_composes_dimensions() {
        let v = Length::new(6) * Frequency::new(7);
        assert_eq!(v.value(), 42);
        assert_eq!(TypeId::of::<Product<Metre, Hertz>>(), TypeId::of::<Speed>());
        let speed: MeterSecond = v.cast();
        assert_eq!(speed.value(), 42);
    }

    #[test]
    fn multiply_composes_scales() {
        let area = Centimetres::new(3) * Quantity::<Metre, Kilo>::new(2);
        assert_eq!(area.value(), 6);
        assert_eq!(
            <ScaleProduct<Centi, Kilo> as Scale>::RATIO,
            Ratio::new(10, 1)
        );
    }

    #[test]
    fn divide_composes_dimensions_and_truncates() {
        let v = (Length::new(7) / Time::new(2)).unwrap();
        assert_eq!(v.value(), 3);
        assert_eq!(TypeId::of::<Quotient<Metre, Second>>(), TypeId::of::<Speed>());
    }

    #[test]
    fn divide_by_zero_is_an_error() {
        assert_eq!(
            Length::new(7) / Time::new(0),
            Err(QuantityError::DivisionByZero)
        );
    }

    #[test]
    fn divide_min_by_minus_one_overflows() {
        assert_eq!(
            (Length::MIN / Length::new(-1)).map(|q| q.value()),
            Err(QuantityError::Overflow)
        );
    }

    #[test]
    fn scalar_multiplication() {
        assert_eq!((Length::new(4) * 3).value(), 12);
        assert_eq!((3 * Length::new(4)).value(), 12);
        let mut q = Length::new(2);
        q *= -5;
        assert_eq!(q.value(), -10);
    }

    #[test]
    fn checked_mul_reports_overflow() {
        assert_eq!(
            Length::MAX.checked_mul(Length::new(2)).map(|q| q.value()),
            Err(QuantityError::Overflow)
        );
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Properties
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_equality_symmetric_across_scales(v in -1_000_000_000i64..1_000_000_000) {
            let m = Length::new(v);
            let cm = Centimetres::new(v * 100);
            prop_assert!(m == cm);
            prop_assert!(cm == m);
        }

        #[test]
        fn prop_equality_transitive(v in -1_000_000i64..1_000_000) {
            let m = Length::new(v);
            let cm = Centimetres::new(v * 100);
            let mm = Millimetres::new(v * 1_000);
            prop_assert!(m == cm && cm == mm && m == mm);
        }

        #[test]
        fn prop_round_trip_via_finer_scale(v in -1_000_000_000i64..1_000_000_000) {
            let q = Length::new(v);
            prop_assert_eq!(q.cast::<Milli>().cast::<Unity>().value(), v);
        }

        #[test]
        fn prop_add_then_sub_restores(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
            let mut q = Millimetres::new(a);
            q += Length::new(b);
            q -= Length::new(b);
            prop_assert_eq!(q.value(), a);
        }

        #[test]
        fn prop_comparison_matches_exact_order(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
            let m = Length::new(a);
            let mm = Millimetres::new(b);
            prop_assert_eq!(m < mm, a * 1_000 < b);
            prop_assert_eq!(m == mm, a * 1_000 == b);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Serde tests
    // ─────────────────────────────────────────────────────────────────────────────

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;
        use serde::{Deserialize, Serialize};

        #[test]
        fn serialize_quantity_as_raw_value() {
            let json = serde_json::to_string(&Millimetres::new(42)).unwrap();
            assert_eq!(json, "42");
        }

        #[test]
        fn deserialize_quantity_from_raw_value() {
            let q: Millimetres = serde_json::from_str("-7").unwrap();
            assert_eq!(q.value(), -7);
        }

        #[derive(Serialize, Deserialize, Debug)]
        struct Part {
            #[serde(with = "crate::serde_with_scale")]
            width: Millimetres,
        }

        #[test]
        fn serde_with_scale_serialize() {
            let json = serde_json::to_string(&Part {
                width: Millimetres::new(12),
            })
            .unwrap();
            assert_eq!(json, r#"{"width":{"value":12,"num":1,"den":1000}}"#);
        }

        #[test]
        fn serde_with_scale_accepts_unreduced_scale() {
            let json = r#"{"width":{"value":12,"num":2,"den":2000}}"#;
            let part: Part = serde_json::from_str(json).unwrap();
            assert_eq!(part.width.value(), 12);
        }

        #[test]
        fn serde_with_scale_without_scale_fields() {
            let part: Part = serde_json::from_str(r#"{"width":{"value":3}}"#).unwrap();
            assert_eq!(part.width.value(), 3);
        }

        #[test]
        fn serde_with_scale_rejects_wrong_scale() {
            let json = r#"{"width":{"value":12,"num":1,"den":100}}"#;
            let err = serde_json::from_str::<Part>(json).unwrap_err().to_string();
            assert!(err.contains("scale mismatch"));
        }

        #[test]
        fn serde_with_scale_rejects_zero_denominator() {
            let json = r#"{"width":{"value":12,"num":1,"den":0}}"#;
            assert!(serde_json::from_str::<Part>(json).is_err());
        }

        #[test]
        fn serde_with_scale_missing_value() {
            let err = serde_json::from_str::<Part>(r#"{"width":{"num":1,"den":1000}}"#)
                .unwrap_err()
                .to_string();
            assert!(err.contains("missing field"));
        }

        #[test]
        fn serde_with_scale_duplicate_value() {
            let json = r#"{"width":{"value":1,"value":2}}"#;
            assert!(serde_json::from_str::<Part>(json).is_err());
        }

        #[test]
        fn serde_with_scale_rejects_non_object() {
            assert!(serde_json::from_str::<Part>(r#"{"width":"12 mm"}"#).is_err());
        }
    }
}
