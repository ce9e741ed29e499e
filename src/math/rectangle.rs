use crate::math::{Number, Point};
use std::fmt;
use std::ops::{Add, Sub};

/// Contains the points with `min.x <= x < max.x`, `min.y <= y < max.y`.
///
/// A rectangle is well-formed if `min.x <= max.x` and likewise for y. Points
/// are always well-formed. The methods here return well-formed outputs for
/// well-formed inputs; a struct literal or [`Rectangle::new`] is not checked,
/// so use [`rect`] or [`Rectangle::canon`] when the corners may be inverted.
///
/// Equality compares the point sets: every empty rectangle equals every other
/// empty rectangle, whatever its corners. Use [`Rectangle::same_corners`] for
/// a structural comparison.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct Rectangle<V> {
    pub min: Point<V>,
    pub max: Point<V>,
}

// SAFETY: repr(C) over two `Point<V>` leaves no padding
#[cfg(feature = "bytemuck")]
unsafe impl<V: bytemuck::Zeroable> bytemuck::Zeroable for Rectangle<V> {}
#[cfg(feature = "bytemuck")]
unsafe impl<V: bytemuck::Pod> bytemuck::Pod for Rectangle<V> {}

/// Builds the rectangle spanning `(x0, y0)` and `(x1, y1)`, swapping the
/// coordinates of each axis if needed so the result is well-formed.
#[inline]
pub fn rect<V: Number>(x0: V, y0: V, x1: V, y1: V) -> Rectangle<V> {
    let (x0, x1) = if x0 > x1 { (x1, x0) } else { (x0, x1) };
    let (y0, y1) = if y0 > y1 { (y1, y0) } else { (y0, y1) };
    Rectangle::new(Point::new(x0, y0), Point::new(x1, y1))
}

impl<V> Rectangle<V> {
    #[inline]
    pub const fn new(min: Point<V>, max: Point<V>) -> Self {
        Self { min, max }
    }
}

impl<V: Number> Rectangle<V> {
    /// The all-zero rectangle, the canonical empty value.
    #[inline]
    pub fn zero() -> Self {
        Self::new(Point::zero(), Point::zero())
    }

    /// Width. Wraps for an inverted unsigned rectangle.
    #[inline]
    pub fn dx(self) -> V {
        self.max.x.wrapping_sub(self.min.x)
    }

    /// Height. Wraps for an inverted unsigned rectangle.
    #[inline]
    pub fn dy(self) -> V {
        self.max.y.wrapping_sub(self.min.y)
    }

    #[inline]
    pub fn size(self) -> Point<V> {
        Point::new(self.dx(), self.dy())
    }

    /// Returns the same rectangle, translated by `p`.
    #[inline]
    pub fn translate(self, p: Point<V>) -> Self {
        Self::new(self.min + p, self.max + p)
    }

    /// Returns the rectangle shrunk by `n` on every side, or grown if `n` is
    /// negative. An axis shorter than `2 * n` collapses to its midpoint.
    pub fn inset(mut self, n: V) -> Self {
        let twice = V::TWO.wrapping_mul(n);
        if self.dx() < twice {
            log::trace!("inset {} collapses the x axis of {}", n, self);
            self.min.x = midpoint(self.min.x, self.max.x);
            self.max.x = self.min.x;
        } else {
            self.min.x = self.min.x.wrapping_add(n);
            self.max.x = self.max.x.wrapping_sub(n);
        }
        if self.dy() < twice {
            log::trace!("inset {} collapses the y axis of {}", n, self);
            self.min.y = midpoint(self.min.y, self.max.y);
            self.max.y = self.min.y;
        } else {
            self.min.y = self.min.y.wrapping_add(n);
            self.max.y = self.max.y.wrapping_sub(n);
        }
        self
    }

    /// Returns the largest rectangle contained by both `self` and `s`, or the
    /// zero rectangle if they do not overlap.
    pub fn intersect(mut self, s: Self) -> Self {
        if self.min.x < s.min.x {
            self.min.x = s.min.x;
        }
        if self.min.y < s.min.y {
            self.min.y = s.min.y;
        }
        if self.max.x > s.max.x {
            self.max.x = s.max.x;
        }
        if self.max.y > s.max.y {
            self.max.y = s.max.y;
        }
        if self.is_empty() {
            log::trace!("intersection {} is empty, returning zero rectangle", self);
            return Self::zero();
        }
        self
    }

    /// Returns the smallest rectangle containing both `self` and `s`. An empty
    /// operand contributes nothing.
    pub fn union(mut self, s: Self) -> Self {
        if self.is_empty() {
            return s;
        }
        if s.is_empty() {
            return self;
        }
        if self.min.x > s.min.x {
            self.min.x = s.min.x;
        }
        if self.min.y > s.min.y {
            self.min.y = s.min.y;
        }
        if self.max.x < s.max.x {
            self.max.x = s.max.x;
        }
        if self.max.y < s.max.y {
            self.max.y = s.max.y;
        }
        self
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    #[inline]
    pub fn is_well_formed(self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    /// Structural comparison of the corners, without the empty-rectangle
    /// equivalence of `==`.
    #[inline]
    pub fn same_corners(self, s: Self) -> bool {
        self.min == s.min && self.max == s.max
    }

    /// Reports whether `self` and `s` have a non-empty intersection.
    #[inline]
    pub fn overlaps(self, s: Self) -> bool {
        !self.is_empty()
            && !s.is_empty()
            && self.min.x < s.max.x
            && s.min.x < self.max.x
            && self.min.y < s.max.y
            && s.min.y < self.max.y
    }

    /// Reports whether every point in `self` is in `s`.
    pub fn is_in(self, s: Self) -> bool {
        if self.is_empty() {
            return true;
        }
        // max is exclusive, so it need not itself be in s
        s.min.x <= self.min.x
            && self.max.x <= s.max.x
            && s.min.y <= self.min.y
            && self.max.y <= s.max.y
    }

    /// Returns the rectangle with min and max coordinates swapped where
    /// needed so that it is well-formed.
    pub fn canon(mut self) -> Self {
        if self.max.x < self.min.x {
            std::mem::swap(&mut self.min.x, &mut self.max.x);
        }
        if self.max.y < self.min.y {
            std::mem::swap(&mut self.min.y, &mut self.max.y);
        }
        self
    }
}

#[inline]
fn midpoint<V: Number>(a: V, b: V) -> V {
    a.wrapping_add(b).wrapping_div(V::TWO)
}

impl<V: Number> PartialEq for Rectangle<V> {
    fn eq(&self, other: &Self) -> bool {
        self.same_corners(*other) || (self.is_empty() && other.is_empty())
    }
}

impl<V: Number + Eq> Eq for Rectangle<V> {}

impl<V: fmt::Display> fmt::Display for Rectangle<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl<V: Number> Add<Point<V>> for Rectangle<V> {
    type Output = Self;

    #[inline]
    fn add(self, p: Point<V>) -> Self {
        self.translate(p)
    }
}

impl<V: Number> Sub<Point<V>> for Rectangle<V> {
    type Output = Self;

    #[inline]
    fn sub(self, p: Point<V>) -> Self {
        Self::new(self.min - p, self.max - p)
    }
}
