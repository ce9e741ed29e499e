use num_traits::{AsPrimitive, NumCast};
use std::fmt;

/// Scalar types a [`Point`](super::Point) or [`Rectangle`](super::Rectangle)
/// can be built over. Sealed: only the primitive integer and float types
/// implement it.
///
/// Integer `+`, `-` and `*` wrap on overflow in every build profile, so an
/// unsigned `dx()` of an inverted rectangle yields a large value rather than a
/// panic. Integer division and remainder by zero still panic.
pub trait Number:
    sealed::Sealed
    + Copy
    + Default
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + AsPrimitive<isize>
    + NumCast
{
    const ZERO: Self;
    const TWO: Self;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;
    /// Panics for integers when `rhs` is zero.
    fn wrapping_div(self, rhs: Self) -> Self;
    /// Panics for integers when `rhs` is zero. Floats use `fmod` semantics.
    fn wrapping_rem(self, rhs: Self) -> Self;
}

macro_rules! impl_number_for_integers {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Number for $ty {
                const ZERO: Self = 0;
                const TWO: Self = 2;

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$ty>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$ty>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$ty>::wrapping_mul(self, rhs)
                }

                #[inline]
                fn wrapping_div(self, rhs: Self) -> Self {
                    <$ty>::wrapping_div(self, rhs)
                }

                #[inline]
                fn wrapping_rem(self, rhs: Self) -> Self {
                    <$ty>::wrapping_rem(self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_number_for_floats {
    ($($fty:ty),*) => {
        $(
            impl sealed::Sealed for $fty {}

            impl Number for $fty {
                const ZERO: Self = 0.0;
                const TWO: Self = 2.0;

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline]
                fn wrapping_div(self, rhs: Self) -> Self {
                    self / rhs
                }

                #[inline]
                fn wrapping_rem(self, rhs: Self) -> Self {
                    self % rhs
                }
            }
        )*
    };
}

impl_number_for_integers!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_number_for_floats!(f32, f64);

#[doc(hidden)]
mod sealed {
    pub trait Sealed {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_arithmetic_wraps() {
        assert_eq!(Number::wrapping_sub(3u8, 5), 254);
        assert_eq!(Number::wrapping_add(i8::MAX, 1), i8::MIN);
        assert_eq!(Number::wrapping_mul(200u8, 2), 144);
    }

    #[test]
    fn remainder_follows_the_scalar() {
        assert_eq!(Number::wrapping_rem(-7i32, 3), -1);
        assert_eq!(Number::wrapping_rem(7u32, 3), 1);
        assert_eq!(Number::wrapping_rem(-7.5f64, 2.0), -1.5);
    }

    #[test]
    #[should_panic]
    fn integer_division_by_zero_panics() {
        let zero = std::hint::black_box(0i32);
        Number::wrapping_div(1i32, zero);
    }

    #[test]
    fn float_division_by_zero_is_ieee() {
        assert_eq!(Number::wrapping_div(1.0f32, 0.0), f32::INFINITY);
        assert!(Number::wrapping_div(0.0f64, 0.0).is_nan());
        assert!(Number::wrapping_rem(1.0f64, 0.0).is_nan());
    }
}
