//! Predefined quantity aliases grouped by dimension.
//!
//! Every module declares its dimensions as [`Dim`](crate::Dim) exponent vectors and pairs them with scales from
//! [`crate::scale`] (or its own derived scale markers). The aliases are conveniences only: any
//! `Quantity<D, S>` works with the operators whether or not it has a name here.
//!
//! ## Modules
//!
//! - [`length`]: metre ladder, international yard and pound lengths, area.
//! - [`mass`]: kilogram (the SI base), gram, tonne, pound.
//! - [`time`]: second, minute, hour, and frequency (`s^-1`).
//! - [`electric`]: ampere, coulomb, volt, ohm.
//! - [`thermal`]: kelvin, mole, candela.
//! - [`mechanics`]: speed, acceleration, force, pressure, energy, power.
//! - [`angular`]: radian (dimensionless).

pub mod angular;
pub mod electric;
pub mod length;
pub mod mass;
pub mod mechanics;
pub mod thermal;
pub mod time;
