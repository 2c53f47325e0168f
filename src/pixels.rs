use std::fmt::Debug;

use num_traits::Zero;

/// Count of channels in one pixel (RGBA).
pub const CHANNELS: usize = 4;

/// Trait of types that can be used as the storage type of one pixel channel.
pub trait PixelComponent:
    Copy + Debug + Default + PartialEq + Zero + Send + Sync + 'static
{
    /// Arithmetic mean of the corresponding channel values of four pixels
    /// of a 2x2 block.
    fn box_average(p00: Self, p10: Self, p01: Self, p11: Self) -> Self;

    /// Channel value produced from an integer intensity in `0..=255`.
    fn from_intensity(value: u32) -> Self;
}

impl PixelComponent for f32 {
    #[inline(always)]
    fn box_average(p00: Self, p10: Self, p01: Self, p11: Self) -> Self {
        (p00 + p10 + p01 + p11) / 4.0
    }

    #[inline]
    fn from_intensity(value: u32) -> Self {
        value as f32
    }
}

impl PixelComponent for f64 {
    #[inline(always)]
    fn box_average(p00: Self, p10: Self, p01: Self, p11: Self) -> Self {
        (p00 + p10 + p01 + p11) / 4.0
    }

    #[inline]
    fn from_intensity(value: u32) -> Self {
        value as f64
    }
}
