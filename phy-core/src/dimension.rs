//! Dimension vectors and their composition.

use core::fmt::{self, Debug};
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::{Add, Sub};
use typenum::{Diff, Integer, Sum, Z0};

/// Marker trait for **dimensions**: a vector of seven SI base exponents.
///
/// The only implementor is [`Dim`], whose exponents are `typenum` integers. Because `typenum` integers are
/// canonical, two dimensions with the same exponents are the same Rust type; operators that need equal dimensions
/// simply require equal type parameters.
///
/// ```rust
/// use phy_core::Dimension;
/// use phy_core::length::Metre;
///
/// assert_eq!(Metre::EXPONENTS, [1, 0, 0, 0, 0, 0, 0]);
/// ```
pub trait Dimension: Copy + Debug + 'static {
    /// Length exponent.
    const METRE: i32;
    /// Mass exponent.
    const KILOGRAM: i32;
    /// Time exponent.
    const SECOND: i32;
    /// Electric current exponent.
    const AMPERE: i32;
    /// Thermodynamic temperature exponent.
    const KELVIN: i32;
    /// Amount of substance exponent.
    const MOLE: i32;
    /// Luminous intensity exponent.
    const CANDELA: i32;

    /// All seven exponents, in the order above.
    const EXPONENTS: [i32; 7] = [
        Self::METRE,
        Self::KILOGRAM,
        Self::SECOND,
        Self::AMPERE,
        Self::KELVIN,
        Self::MOLE,
        Self::CANDELA,
    ];
}

/// Dimension with exponents `L` (metre), `M` (kilogram), `T` (second), `I` (ampere), `Th` (kelvin), `N` (mole)
/// and `J` (candela).
///
/// Never instantiated at runtime; it only appears as a type parameter of [`Quantity`](crate::Quantity).
pub struct Dim<L, M, T, I, Th, N, J>(PhantomData<(L, M, T, I, Th, N, J)>);

// Manual impls: derives would require every exponent type to be `Copy + Debug`.

impl<L, M, T, I, Th, N, J> Clone for Dim<L, M, T, I, Th, N, J> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<L, M, T, I, Th, N, J> Copy for Dim<L, M, T, I, Th, N, J> {}

impl<L, M, T, I, Th, N, J> Default for Dim<L, M, T, I, Th, N, J> {
    #[inline]
    fn default() -> Self {
        Dim(PhantomData)
    }
}

impl<L, M, T, I, Th, N, J> PartialEq for Dim<L, M, T, I, Th, N, J> {
    #[inline]
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<L, M, T, I, Th, N, J> Eq for Dim<L, M, T, I, Th, N, J> {}

impl<L, M, T, I, Th, N, J> Hash for Dim<L, M, T, I, Th, N, J> {
    #[inline]
    fn hash<H: Hasher>(&self, _: &mut H) {}
}

impl<L, M, T, I, Th, N, J> fmt::Debug for Dim<L, M, T, I, Th, N, J>
where
    L: Integer,
    M: Integer,
    T: Integer,
    I: Integer,
    Th: Integer,
    N: Integer,
    J: Integer,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dim{:?}", <Self as Dimension>::EXPONENTS)
    }
}

impl<L, M, T, I, Th, N, J> Dimension for Dim<L, M, T, I, Th, N, J>
where
    L: Integer,
    M: Integer,
    T: Integer,
    I: Integer,
    Th: Integer,
    N: Integer,
    J: Integer,
{
    const METRE: i32 = L::I32;
    const KILOGRAM: i32 = M::I32;
    const SECOND: i32 = T::I32;
    const AMPERE: i32 = I::I32;
    const KELVIN: i32 = Th::I32;
    const MOLE: i32 = N::I32;
    const CANDELA: i32 = J::I32;
}

/// Dimension for dimensionless quantities (all exponents zero).
pub type Dimensionless = Dim<Z0, Z0, Z0, Z0, Z0, Z0, Z0>;

/// Dimension composition under multiplication: exponents add pairwise.
pub trait DimMul<Rhs: Dimension>: Dimension {
    /// The combined dimension.
    type Output: Dimension;
}

/// Dimension composition under division: exponents subtract pairwise.
pub trait DimDiv<Rhs: Dimension>: Dimension {
    /// The combined dimension.
    type Output: Dimension;
}

/// Dimension of `A * B`.
pub type Product<A, B> = <A as DimMul<B>>::Output;

/// Dimension of `A / B`.
pub type Quotient<A, B> = <A as DimDiv<B>>::Output;

impl<L1, M1, T1, I1, Th1, N1, J1, L2, M2, T2, I2, Th2, N2, J2> DimMul<Dim<L2, M2, T2, I2, Th2, N2, J2>>
    for Dim<L1, M1, T1, I1, Th1, N1, J1>
where
    L1: Integer + Add<L2>,
    M1: Integer + Add<M2>,
    T1: Integer + Add<T2>,
    I1: Integer + Add<I2>,
    Th1: Integer + Add<Th2>,
    N1: Integer + Add<N2>,
    J1: Integer + Add<J2>,
    L2: Integer,
    M2: Integer,
    T2: Integer,
    I2: Integer,
    Th2: Integer,
    N2: Integer,
    J2: Integer,
    Sum<L1, L2>: Integer,
    Sum<M1, M2>: Integer,
    Sum<T1, T2>: Integer,
    Sum<I1, I2>: Integer,
    Sum<Th1, Th2>: Integer,
    Sum<N1, N2>: Integer,
    Sum<J1, J2>: Integer,
{
    type Output = Dim<
        Sum<L1, L2>,
        Sum<M1, M2>,
        Sum<T1, T2>,
        Sum<I1, I2>,
        Sum<Th1, Th2>,
        Sum<N1, N2>,
        Sum<J1, J2>,
    >;
}

impl<L1, M1, T1, I1, Th1, N1, J1, L2, M2, T2, I2, Th2, N2, J2> DimDiv<Dim<L2, M2, T2, I2, Th2, N2, J2>>
    for Dim<L1, M1, T1, I1, Th1, N1, J1>
where
    L1: Integer + Sub<L2>,
    M1: Integer + Sub<M2>,
    T1: Integer + Sub<T2>,
    I1: Integer + Sub<I2>,
    Th1: Integer + Sub<Th2>,
    N1: Integer + Sub<N2>,
    J1: Integer + Sub<J2>,
    L2: Integer,
    M2: Integer,
    T2: Integer,
    I2: Integer,
    Th2: Integer,
    N2: Integer,
    J2: Integer,
    Diff<L1, L2>: Integer,
    Diff<M1, M2>: Integer,
    Diff<T1, T2>: Integer,
    Diff<I1, I2>: Integer,
    Diff<Th1, Th2>: Integer,
    Diff<N1, N2>: Integer,
    Diff<J1, J2>: Integer,
{
    type Output = Dim<
        Diff<L1, L2>,
        Diff<M1, M2>,
        Diff<T1, T2>,
        Diff<I1, I2>,
        Diff<Th1, Th2>,
        Diff<N1, N2>,
        Diff<J1, J2>,
    >;
}

/// Static proof that `Self` and `D` are the same dimension.
///
/// Implemented only reflexively. Every operator that requires matching dimensions (comparison, addition,
/// subtraction, casts between quantity types) carries this bound, so a mismatch is a compile error.
#[diagnostic::on_unimplemented(
    message = "dimension mismatch: `{Self}` is not `{D}`",
    label = "cast requires identical dimensions",
    note = "comparison, addition, subtraction and casts are only defined between quantities of the same dimension"
)]
pub trait SameDimension<D: Dimension>: Dimension {}

impl<D: Dimension> SameDimension<D> for D {}

/// Compares the exponent vectors of two dimensions.
///
/// Usable in `const` context, e.g. for const assertions on generic code.
///
/// ```rust
/// use phy_core::dims_equal;
/// use phy_core::length::Metre;
/// use phy_core::time::Second;
///
/// const _: () = assert!(dims_equal::<Metre, Metre>());
/// assert!(!dims_equal::<Metre, Second>());
/// ```
pub const fn dims_equal<A: Dimension, B: Dimension>() -> bool {
    let a = A::EXPONENTS;
    let b = B::EXPONENTS;
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}
