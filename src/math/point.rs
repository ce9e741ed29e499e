use crate::math::{Number, Rectangle};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

/// An X, Y coordinate pair. The axes increase right and down.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point<V> {
    pub x: V,
    pub y: V,
}

// SAFETY: repr(C) with two fields of the same type leaves no padding
#[cfg(feature = "bytemuck")]
unsafe impl<V: bytemuck::Zeroable> bytemuck::Zeroable for Point<V> {}
#[cfg(feature = "bytemuck")]
unsafe impl<V: bytemuck::Pod> bytemuck::Pod for Point<V> {}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub const fn pt<V>(x: V, y: V) -> Point<V> {
    Point::new(x, y)
}

impl<V> Point<V> {
    #[inline]
    pub const fn new(x: V, y: V) -> Self {
        Self { x, y }
    }
}

impl<V: Number> Point<V> {
    #[inline]
    pub fn zero() -> Self {
        Self::new(V::ZERO, V::ZERO)
    }

    #[inline]
    pub fn dot(self, q: Self) -> V {
        self.x.wrapping_mul(q.x).wrapping_add(self.y.wrapping_mul(q.y))
    }

    /// Reports whether `self` lies in the half-open range of `r`.
    #[inline]
    pub fn is_in(self, r: Rectangle<V>) -> bool {
        r.min.x <= self.x && self.x < r.max.x && r.min.y <= self.y && self.y < r.max.y
    }

    /// Returns the point q in `r` such that `self.x - q.x` is a multiple of
    /// `r.dx()` and `self.y - q.y` is a multiple of `r.dy()`.
    ///
    /// Uses the scalar's own remainder, so an integer rectangle with a zero
    /// width or height panics and a float one yields NaN. The width and
    /// height must be representable in `V`.
    pub fn modulo(self, r: Rectangle<V>) -> Self {
        Self::new(
            wrap_axis(self.x, r.min.x, r.max.x),
            wrap_axis(self.y, r.min.y, r.max.y),
        )
    }
}

/// Folds `v` into `[min, max)`. `v` and `min` are reduced separately so the
/// raw difference `v - min`, which may not fit in `V`, is never formed.
#[inline]
fn wrap_axis<V: Number>(v: V, min: V, max: V) -> V {
    let len = max.wrapping_sub(min);
    let a = floor_rem(v, len);
    let b = floor_rem(min, len);
    let offset = if a >= b {
        a.wrapping_sub(b)
    } else {
        len.wrapping_sub(b.wrapping_sub(a))
    };
    let q = min.wrapping_add(offset);
    // float rounding can land exactly on the exclusive bound
    if q >= max { min } else { q }
}

/// Remainder in `[0, len)` for a positive `len`.
#[inline]
fn floor_rem<V: Number>(v: V, len: V) -> V {
    let r = v.wrapping_rem(len);
    if r < V::ZERO { r.wrapping_add(len) } else { r }
}

impl<V: fmt::Display> fmt::Display for Point<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl<V: Number> Add for Point<V> {
    type Output = Self;

    #[inline]
    fn add(self, q: Self) -> Self {
        Self::new(self.x.wrapping_add(q.x), self.y.wrapping_add(q.y))
    }
}

impl<V: Number> AddAssign for Point<V> {
    #[inline]
    fn add_assign(&mut self, q: Self) {
        *self = *self + q;
    }
}

impl<V: Number> Sub for Point<V> {
    type Output = Self;

    #[inline]
    fn sub(self, q: Self) -> Self {
        Self::new(self.x.wrapping_sub(q.x), self.y.wrapping_sub(q.y))
    }
}

impl<V: Number> SubAssign for Point<V> {
    #[inline]
    fn sub_assign(&mut self, q: Self) {
        *self = *self - q;
    }
}

impl<V: Number> Mul<V> for Point<V> {
    type Output = Self;

    #[inline]
    fn mul(self, k: V) -> Self {
        Self::new(self.x.wrapping_mul(k), self.y.wrapping_mul(k))
    }
}

impl<V: Number> Div<V> for Point<V> {
    type Output = Self;

    #[inline]
    fn div(self, k: V) -> Self {
        Self::new(self.x.wrapping_div(k), self.y.wrapping_div(k))
    }
}
