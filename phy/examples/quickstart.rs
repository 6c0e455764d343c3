//! Minimal end-to-end example: exact scale conversions and a derived speed.

use phy::literals::{metres, seconds};
use phy::{Kilometres, KilometresPerHour, Length, MeterSecond, Miles, Millimetres};

fn main() {
    let marathon = Kilometres::new(42) + Length::new(195);
    assert_eq!(marathon.value(), 42);
    let marathon = Length::new(195) + Kilometres::new(42);
    assert_eq!(marathon.value(), 42_195);
    assert!(marathon > Miles::new(26));
    assert!(Length::new(1) != Millimetres::new(1_001));

    let v: MeterSecond = (metres(100) / seconds(10)).unwrap().cast();
    let kmh: KilometresPerHour = v.cast();
    assert_eq!(kmh.value(), 36);
}
