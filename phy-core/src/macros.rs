//! Macros for declaring quantity constructors.

/// Declares `const fn` constructors that wrap a raw integer into a fixed quantity type.
///
/// Each entry `name => Type;` expands to `pub const fn name(value: i64) -> Type`. Attributes, including doc
/// comments, are forwarded to the generated function.
///
/// ```rust
/// use phy_core::length::Miles;
///
/// phy_core::quantity_literals! {
///     /// Builds a distance in miles.
///     miles => Miles;
/// }
///
/// assert_eq!(miles(26).value(), 26);
/// ```
#[macro_export]
macro_rules! quantity_literals {
    ($($(#[$meta:meta])* $name:ident => $qty:ty;)+) => {
        $(
            $(#[$meta])*
            #[inline]
            pub const fn $name(value: i64) -> $qty {
                <$qty>::new(value)
            }
        )+
    };
}
