//! Time and frequency quantities.
//!
//! The base scale for time is the SI second. Civil multiples use the conventional `1 min = 60 s` and
//! `1 h = 3600 s` (leap seconds ignored).
//!
//! Frequency is the reciprocal dimension ([`Hertz`], `s^-1`), so dividing a count by a time, or multiplying a
//! length by a frequency, lands on the right dimension without any extra declarations.
//!
//! ```rust
//! use phy_core::time::{Hours, Minutes, Time};
//!
//! assert!(Hours::new(2) == Minutes::new(120));
//! assert!(Minutes::new(1) == Time::new(60));
//! ```

use crate::dimension::Dim;
use crate::scale::{Kilo, Mega, Micro, Milli, Nano};
use crate::Quantity;
use phy_derive::Scale;
use typenum::{N1, P1, Z0};

/// Dimension of time (`s`).
pub type Second = Dim<Z0, Z0, P1, Z0, Z0, Z0, Z0>;

/// Dimension of frequency (`s^-1`).
pub type Hertz = Dim<Z0, Z0, N1, Z0, Z0, Z0, Z0>;

/// Minute (`60 s`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Scale)]
#[scale(num = 60)]
pub struct Minute;

/// Hour (`3600 s`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Scale)]
#[scale(num = 3_600)]
pub struct Hour;

/// A time in seconds.
pub type Time = Quantity<Second>;
/// One second.
pub const SEC: Time = Time::new(1);

/// A time in milliseconds.
pub type Milliseconds = Quantity<Second, Milli>;
/// A time in microseconds.
pub type Microseconds = Quantity<Second, Micro>;
/// A time in nanoseconds.
pub type Nanoseconds = Quantity<Second, Nano>;
/// A time in minutes.
pub type Minutes = Quantity<Second, Minute>;
/// A time in hours.
pub type Hours = Quantity<Second, Hour>;

/// A frequency in hertz.
pub type Frequency = Quantity<Hertz>;
/// A frequency in kilohertz.
pub type Kilohertz = Quantity<Hertz, Kilo>;
/// A frequency in megahertz.
pub type Megahertz = Quantity<Hertz, Mega>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::{Dimensionless, Quotient};
    use crate::scale::Unity;
    use crate::QuantityError;
    use core::any::TypeId;

    #[test]
    fn hours_to_seconds() {
        assert_eq!(Hours::new(3).cast::<Unity>().value(), 10_800);
    }

    #[test]
    fn seconds_to_minutes_truncates() {
        assert_eq!(Time::new(119).cast::<Minute>().value(), 1);
        assert_eq!(Time::new(-119).cast::<Minute>().value(), -1);
    }

    #[test]
    fn mixed_time_arithmetic() {
        let mut t = Minutes::new(90);
        t += Hours::new(1);
        assert!(t == Minutes::new(30) + Hours::new(2));
        // 59 s is less than one whole minute.
        t -= Time::new(59);
        assert_eq!(t.value(), 150);
    }

    #[test]
    fn frequency_is_reciprocal_time() {
        assert_eq!(
            TypeId::of::<Quotient<Dimensionless, Second>>(),
            TypeId::of::<Hertz>()
        );
    }

    #[test]
    fn period_times_frequency_is_dimensionless() {
        let cycles = Milliseconds::new(500) * Kilohertz::new(4);
        assert_eq!(cycles.value(), 2_000);
        let plain: Quantity<Dimensionless> = cycles.cast();
        assert_eq!(plain.value(), 2_000);
    }

    #[test]
    fn dividing_by_zero_duration_fails() {
        let count = Quantity::<Dimensionless>::new(10);
        assert_eq!(count / Time::new(0), Err(QuantityError::DivisionByZero));
        let f: Frequency = (count / Time::new(5)).unwrap().cast();
        assert!(f == Frequency::new(2));
        assert!(f < Megahertz::new(1));
    }

    #[test]
    fn nanoseconds_compare_exactly() {
        assert!(Nanoseconds::new(1_000_000_001) > SEC);
        assert!(Microseconds::new(1_000_000) == SEC);
    }
}
