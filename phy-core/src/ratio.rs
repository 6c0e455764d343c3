//! Exact rational numbers used as scale factors.

use core::ops::{Div, Mul};

/// A reduced fraction `num / den` with `den > 0`.
///
/// Every constructor normalises the sign onto the numerator and divides both terms by their greatest common
/// divisor, so two `Ratio`s are equal iff they denote the same rational number.
///
/// All operations are `const fn`. A `Ratio` that cannot be built (zero denominator, terms that no longer fit in
/// `i64` after reduction) panics; when the ratio lives in an associated constant, as every scale does, that panic
/// is reported as a compile error.
///
/// ```rust
/// use phy_core::Ratio;
///
/// let mile = Ratio::new(1_609_344, 1_000);
/// assert_eq!((mile.num(), mile.den()), (201_168, 125));
/// assert_eq!(Ratio::new(3, -6), Ratio::new(-1, 2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ratio {
    num: i64,
    den: i64,
}

const fn gcd(a: i128, b: i128) -> i128 {
    let mut a = if a < 0 { -a } else { a };
    let mut b = if b < 0 { -b } else { b };
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

impl Ratio {
    /// The ratio `1/1`.
    pub const ONE: Ratio = Ratio { num: 1, den: 1 };

    /// Builds a reduced ratio.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero.
    #[inline]
    pub const fn new(num: i64, den: i64) -> Self {
        Self::reduce(num as i128, den as i128)
    }

    const fn reduce(num: i128, den: i128) -> Self {
        assert!(den != 0, "scale denominator must be non-zero");
        let g = gcd(num, den);
        let (mut num, mut den) = (num / g, den / g);
        if den < 0 {
            num = -num;
            den = -den;
        }
        assert!(
            num >= i64::MIN as i128 && num <= i64::MAX as i128 && den <= i64::MAX as i128,
            "scale does not fit in 64 bits"
        );
        Ratio {
            num: num as i64,
            den: den as i64,
        }
    }

    /// Numerator (carries the sign).
    #[inline]
    pub const fn num(self) -> i64 {
        self.num
    }

    /// Denominator (always positive).
    #[inline]
    pub const fn den(self) -> i64 {
        self.den
    }

    /// Returns `true` for `1/1`.
    #[inline]
    pub const fn is_one(self) -> bool {
        self.num == 1 && self.den == 1
    }

    /// Exact product of two ratios.
    ///
    /// ```rust
    /// use phy_core::Ratio;
    /// assert_eq!(Ratio::new(1, 1000).mul(Ratio::new(1000, 1)), Ratio::ONE);
    /// ```
    #[inline]
    pub const fn mul(self, rhs: Ratio) -> Ratio {
        Self::reduce(
            self.num as i128 * rhs.num as i128,
            self.den as i128 * rhs.den as i128,
        )
    }

    /// Exact quotient of two ratios.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    pub const fn div(self, rhs: Ratio) -> Ratio {
        Self::reduce(
            self.num as i128 * rhs.den as i128,
            self.den as i128 * rhs.num as i128,
        )
    }

    /// Multiplicative inverse.
    #[inline]
    pub const fn recip(self) -> Ratio {
        Self::reduce(self.den as i128, self.num as i128)
    }

    /// Scales `value` by this ratio, truncating toward zero.
    ///
    /// The result is kept in `i128`; callers decide how to narrow it.
    ///
    /// ```rust
    /// use phy_core::Ratio;
    /// assert_eq!(Ratio::new(1, 1000).apply(1_999), 1);
    /// assert_eq!(Ratio::new(1, 1000).apply(-1_999), -1);
    /// ```
    #[inline]
    pub const fn apply(self, value: i64) -> i128 {
        value as i128 * self.num as i128 / self.den as i128
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Ratio::ONE
    }
}

impl Mul for Ratio {
    type Output = Ratio;
    #[inline]
    fn mul(self, rhs: Ratio) -> Ratio {
        Ratio::mul(self, rhs)
    }
}

impl Div for Ratio {
    type Output = Ratio;
    #[inline]
    fn div(self, rhs: Ratio) -> Ratio {
        Ratio::div(self, rhs)
    }
}
