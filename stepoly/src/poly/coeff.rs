use std::fmt::{Debug, Display};
use std::ops::{AddAssign, Mul, Neg, SubAssign};
use std::str::FromStr;
use num_traits::Zero;

// Integer coefficients of a `SparsePoly`.
// Implemented for every type satisfying the bounds, e.g. `i64`, `i128`, `BigInt`.
pub trait Coeff: 
    Clone + Default + PartialEq + Zero + Display + Debug + FromStr + From<i64> + Neg<Output = Self> 
    + for<'x> AddAssign<&'x Self> 
    + for<'x> SubAssign<&'x Self> 
    + for<'x> Mul<&'x Self, Output = Self>
{}

impl<T> Coeff for T
where T: 
    Clone + Default + PartialEq + Zero + Display + Debug + FromStr + From<i64> + Neg<Output = T> 
    + for<'x> AddAssign<&'x T> 
    + for<'x> SubAssign<&'x T> 
    + for<'x> Mul<&'x T, Output = T>
{}
