//! Plane angles.
//!
//! The radian is a ratio of two lengths, so [`Radian`] is an alias of
//! [`Dimensionless`](crate::dimension::Dimensionless). An [`Angle`] therefore compares and adds with any other
//! dimensionless quantity, and `Length / Length` yields radians directly.

use crate::dimension::Dimensionless;
use crate::scale::{Micro, Milli};
use crate::Quantity;

/// Dimension of plane angle (`rad`, dimensionless).
pub type Radian = Dimensionless;

/// An angle in radians.
pub type Angle = Quantity<Radian>;
/// An angle in milliradians.
pub type Milliradians = Quantity<Radian, Milli>;
/// An angle in microradians.
pub type Microradians = Quantity<Radian, Micro>;
