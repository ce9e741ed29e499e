//! Conversions to and from euclid's geometry types.
//!
//! `StdPoint` / `StdRect` are the fixed-width forms used by code that
//! rasterizes on an `isize` pixel grid.

use crate::math::{Number, Point, Rectangle};
use num_traits::{AsPrimitive, NumCast};

pub type StdPoint = euclid::default::Point2D<isize>;
pub type StdRect = euclid::default::Box2D<isize>;

impl<V: Number> Point<V> {
    /// Narrows both coordinates with `as` semantics: floats truncate toward
    /// zero and saturate at the ends of the range, NaN becomes 0.
    #[inline]
    pub fn to_std(self) -> StdPoint {
        StdPoint::new(self.x.as_(), self.y.as_())
    }

    /// Like [`Point::to_std`], but fails instead of saturating when a
    /// coordinate has no `isize` value.
    pub fn try_to_std(self) -> anyhow::Result<StdPoint> {
        Ok(StdPoint::new(narrow(self.x)?, narrow(self.y)?))
    }

    #[inline]
    pub fn from_std(p: StdPoint) -> Self
    where
        isize: AsPrimitive<V>,
    {
        Self::new(p.x.as_(), p.y.as_())
    }
}

impl<V: Number> Rectangle<V> {
    #[inline]
    pub fn to_std(self) -> StdRect {
        StdRect::new(self.min.to_std(), self.max.to_std())
    }

    pub fn try_to_std(self) -> anyhow::Result<StdRect> {
        Ok(StdRect::new(self.min.try_to_std()?, self.max.try_to_std()?))
    }

    #[inline]
    pub fn from_std(r: StdRect) -> Self
    where
        isize: AsPrimitive<V>,
    {
        Self::new(Point::from_std(r.min), Point::from_std(r.max))
    }
}

fn narrow<V: Number>(v: V) -> anyhow::Result<isize> {
    <isize as NumCast>::from(v).ok_or_else(|| {
        log::debug!("coordinate {} has no isize value", v);
        anyhow::anyhow!("Coordinate {} is out of range for isize", v)
    })
}

impl<V, U> From<euclid::Point2D<V, U>> for Point<V> {
    #[inline]
    fn from(p: euclid::Point2D<V, U>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl<V, U> From<Point<V>> for euclid::Point2D<V, U> {
    #[inline]
    fn from(p: Point<V>) -> Self {
        euclid::Point2D::new(p.x, p.y)
    }
}

impl<V, U> From<euclid::Box2D<V, U>> for Rectangle<V> {
    #[inline]
    fn from(r: euclid::Box2D<V, U>) -> Self {
        Self::new(r.min.into(), r.max.into())
    }
}

impl<V, U> From<Rectangle<V>> for euclid::Box2D<V, U> {
    #[inline]
    fn from(r: Rectangle<V>) -> Self {
        euclid::Box2D::new(r.min.into(), r.max.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{pt, rect};
    use pretty_assertions::assert_eq;

    #[test]
    fn narrowing_truncates_toward_zero() {
        assert_eq!(pt(2.9f64, -2.9).to_std(), StdPoint::new(2, -2));
        assert_eq!(pt(-0.5f32, 0.5).to_std(), StdPoint::new(0, 0));
        assert_eq!(pt(7u8, 255).to_std(), StdPoint::new(7, 255));
        assert_eq!(pt(f64::NAN, f64::INFINITY).to_std(), StdPoint::new(0, isize::MAX));
    }

    #[test]
    fn float_rect_to_std() {
        let r = Rectangle::new(pt(0.2, 0.1) * 10.0, pt(1.6, 2.2) / 0.1);
        let std = r.to_std();
        assert_eq!(std.min, StdPoint::new(2, 1));
        assert_eq!(std.max, StdPoint::new(16, 22));
        assert_eq!(
            rect(-3i64, 4, 8, 9).to_std(),
            StdRect::new(StdPoint::new(-3, 4), StdPoint::new(8, 9))
        );
    }

    #[test]
    fn try_to_std_rejects_unrepresentable() {
        assert_eq!(pt(3.7f32, -1.2).try_to_std().unwrap(), StdPoint::new(3, -1));
        assert!(pt(f32::NAN, 0.0).try_to_std().is_err());
        assert!(pt(0u64, u64::MAX).try_to_std().is_err());
        assert!(rect(0.0, 0.0, 1e30, 1.0).try_to_std().is_err());
        assert!(rect(0u32, 0, 10, 10).try_to_std().is_ok());
    }

    #[test]
    fn from_std() {
        let s = StdRect::new(StdPoint::new(-1, 2), StdPoint::new(3, 4));
        assert!(Rectangle::<f32>::from_std(s).same_corners(rect(-1.0, 2.0, 3.0, 4.0)));
        assert_eq!(Point::<i16>::from_std(StdPoint::new(5, -6)), pt(5, -6));
    }

    #[test]
    fn euclid_round_trip_keeps_corners() {
        let inverted = Rectangle::new(pt(4, 4), pt(1, 1));
        let b: euclid::default::Box2D<i32> = inverted.into();
        assert_eq!(b.min, euclid::point2(4, 4));
        assert!(Rectangle::from(b).same_corners(inverted));

        let p: euclid::default::Point2D<f32> = pt(1.5, -2.0).into();
        assert_eq!(Point::from(p), pt(1.5, -2.0));
    }
}
