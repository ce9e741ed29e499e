/// 16-bit alpha-only color, the sample type of a stencil image.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Alpha16(pub u16);

impl Alpha16 {
    pub const OPAQUE: Self = Self(0xffff);
    pub const TRANSPARENT: Self = Self(0);

    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.0 == 0xffff
    }
}

/// Alpha-premultiplied, so every channel carries the alpha value.
impl From<Alpha16> for image::Rgba<u16> {
    fn from(value: Alpha16) -> Self {
        Self([value.0; 4])
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ColorModel {
    Alpha16,
}

impl ColorModel {
    /// Converts an alpha-premultiplied color into this model.
    #[inline]
    pub fn convert(self, color: image::Rgba<u16>) -> Alpha16 {
        match self {
            ColorModel::Alpha16 => Alpha16(color.0[3]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn premultiplied_rgba() {
        assert_eq!(image::Rgba::<u16>::from(Alpha16::OPAQUE), image::Rgba([0xffff; 4]));
        assert_eq!(image::Rgba::<u16>::from(Alpha16::TRANSPARENT), image::Rgba([0; 4]));
        assert_eq!(image::Rgba::<u16>::from(Alpha16(0x8000)), image::Rgba([0x8000; 4]));
    }

    #[test]
    fn alpha16_model_keeps_alpha() {
        let model = ColorModel::Alpha16;
        assert_eq!(model.convert(image::Rgba([1, 2, 3, 0xffff])), Alpha16::OPAQUE);
        assert_eq!(model.convert(image::Rgba([0, 0, 0, 0])), Alpha16::TRANSPARENT);
        assert!(model.convert(Alpha16::OPAQUE.into()).is_opaque());
    }
}
