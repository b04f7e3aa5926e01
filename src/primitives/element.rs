//! Numeric element bound shared by every matrix operation.

use std::fmt::{Debug, Display};

use num_traits::{Num, NumCast};

/// Scalar types a [`Matrix`](super::Matrix) can hold.
///
/// Implemented for every primitive integer and float type. Mixed-type
/// arithmetic converts the right operand through
/// [`AsPrimitive`](num_traits::AsPrimitive), so any pair of elements can be
/// combined.
///
/// Integer arithmetic wraps on overflow in every build profile; float
/// arithmetic follows IEEE 754.
pub trait Element: Copy + Debug + Display + PartialOrd + Num + NumCast + 'static {
    /// `self + rhs`, wrapping for integers.
    fn add_elem(self, rhs: Self) -> Self;
    /// `self - rhs`, wrapping for integers.
    fn sub_elem(self, rhs: Self) -> Self;
    /// `self * rhs`, wrapping for integers.
    fn mul_elem(self, rhs: Self) -> Self;
}

macro_rules! impl_element_int {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                #[inline]
                fn add_elem(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }
                #[inline]
                fn sub_elem(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }
                #[inline]
                fn mul_elem(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }
            }
        )*
    };
}

macro_rules! impl_element_float {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                #[inline]
                fn add_elem(self, rhs: Self) -> Self {
                    self + rhs
                }
                #[inline]
                fn sub_elem(self, rhs: Self) -> Self {
                    self - rhs
                }
                #[inline]
                fn mul_elem(self, rhs: Self) -> Self {
                    self * rhs
                }
            }
        )*
    };
}

impl_element_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_element_float!(f32, f64);
