//! Offset temperature scales mapped onto centikelvins.

use phy::affine::{self, Celsius, Fahrenheit};
use phy::literals::{celsius, fahrenheit};
use phy::scale::Centi;
use phy::{Centikelvins, Temperature};

fn main() {
    let body: Centikelvins = fahrenheit(98);
    let reading = affine::to_reading::<Celsius, Centi>(body);
    assert_eq!(reading, 36);

    let rise = celsius(30) - celsius(12);
    assert!(rise == Temperature::new(18));

    match affine::try_from_reading::<Fahrenheit, Centi>(i64::MAX) {
        Ok(t) => unreachable!("{t:?} should not fit"),
        Err(err) => assert_eq!(err.to_string(), "quantity value overflow"),
    }
}
