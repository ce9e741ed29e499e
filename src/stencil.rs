//! A rectangle viewed as a 1-bit stencil image: opaque inside, transparent
//! outside, with bounds equal to the rectangle itself.

use crate::color::{Alpha16, ColorModel};
use crate::math::{Number, Point, Rectangle};

/// Minimal sampled-image capability over scalar coordinates.
pub trait SampledImage<V> {
    fn color_model(&self) -> ColorModel;

    fn bounds(&self) -> Rectangle<V>;

    fn at(&self, x: V, y: V) -> Alpha16;

    /// Alpha-premultiplied 16-bit RGBA sample at `(x, y)`.
    #[inline]
    fn rgba64_at(&self, x: V, y: V) -> image::Rgba<u16> {
        self.at(x, y).into()
    }
}

impl<V: Number> SampledImage<V> for Rectangle<V> {
    #[inline]
    fn color_model(&self) -> ColorModel {
        ColorModel::Alpha16
    }

    #[inline]
    fn bounds(&self) -> Rectangle<V> {
        *self
    }

    #[inline]
    fn at(&self, x: V, y: V) -> Alpha16 {
        if Point::new(x, y).is_in(*self) {
            Alpha16::OPAQUE
        } else {
            Alpha16::TRANSPARENT
        }
    }
}
