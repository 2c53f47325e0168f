use crate::errors::PyramidBufferError;
use crate::layout::PyramidLayout;
use crate::pixels::{PixelComponent, CHANNELS};

/// Owned storage for a mipmap pyramid with all levels packed
/// back-to-back, the largest level first.
///
/// The buffer is allocated once with the exact size required by its
/// layout and is never resized.
#[derive(Debug, Clone)]
pub struct PyramidBuffer<T: PixelComponent> {
    layout: PyramidLayout,
    components: Vec<T>,
}

impl<T: PixelComponent> PyramidBuffer<T> {
    /// Creates a zero-filled buffer sized for all levels of `layout`.
    pub fn new(layout: PyramidLayout) -> Self {
        Self {
            layout,
            components: vec![T::zero(); layout.total_components()],
        }
    }

    /// Creates a buffer from a vector with channel values.
    pub fn from_components(
        layout: PyramidLayout,
        components: Vec<T>,
    ) -> Result<Self, PyramidBufferError> {
        if components.len() != layout.total_components() {
            return Err(PyramidBufferError::InvalidBufferSize);
        }
        Ok(Self { layout, components })
    }

    #[inline]
    pub fn layout(&self) -> PyramidLayout {
        self.layout
    }

    /// Buffer with channel values of all levels.
    #[inline]
    pub fn components(&self) -> &[T] {
        &self.components
    }

    /// Mutable buffer with channel values of all levels.
    #[inline]
    pub fn components_mut(&mut self) -> &mut [T] {
        &mut self.components
    }

    #[inline]
    pub fn into_components(self) -> Vec<T> {
        self.components
    }

    /// Channel values of one level.
    pub fn level_components(&self, level_index: u32) -> &[T] {
        let level = self.layout.level(level_index);
        &self.components[level.offset..level.offset + level.component_count()]
    }

    /// Mutable channel values of one level.
    pub fn level_components_mut(&mut self, level_index: u32) -> &mut [T] {
        let level = self.layout.level(level_index);
        &mut self.components[level.offset..level.offset + level.component_count()]
    }

    /// Fills the base level with a synthetic gradient pattern.
    ///
    /// The whole buffer is zero-filled first. After that the pixel `(x, y)`
    /// of the base level is set to `R = x mod 256`, `G = y mod 256`,
    /// `B = 0`, `A = 255`. The pattern has no meaning of its own, it only
    /// gives generation of mip levels a defined input.
    pub fn init_base_level(&mut self) {
        self.components.fill(T::zero());
        let base_size = self.layout.base_size() as usize;
        if base_size == 0 {
            return;
        }
        let alpha = T::from_intensity(255);
        let row_len = base_size * CHANNELS;
        let rows = self.components.chunks_exact_mut(row_len).take(base_size);
        for (y, row) in rows.enumerate() {
            let green = T::from_intensity(y as u32 % 256);
            for (x, pixel) in row.chunks_exact_mut(CHANNELS).enumerate() {
                pixel[0] = T::from_intensity(x as u32 % 256);
                pixel[1] = green;
                pixel[2] = T::zero();
                pixel[3] = alpha;
            }
        }
    }

    /// Fills one level with the 2x2 box-filtered copy of the previous level.
    ///
    /// Every channel of a destination pixel `(x, y)` is the arithmetic
    /// mean of the same channel of the four source pixels `(2x, 2y)`,
    /// `(2x + 1, 2y)`, `(2x, 2y + 1)` and `(2x + 1, 2y + 1)`. The level
    /// with index `level_index - 1` must be populated already.
    ///
    /// # Panics
    ///
    /// Panics if `level_index` is zero or isn't less than count of levels
    /// of the layout.
    pub fn generate_level(&mut self, level_index: u32) {
        assert!(
            level_index >= 1 && level_index < self.layout.level_count(),
            "invalid mip level index {}",
            level_index
        );
        let src_level = self.layout.level(level_index - 1);
        let dst_level = self.layout.level(level_index);

        // Source level is always stored in front of the destination one.
        let (src_part, dst_part) = self.components.split_at_mut(dst_level.offset);
        let src = &src_part[src_level.offset..];
        let dst = &mut dst_part[..dst_level.component_count()];

        let src_row_len = src_level.width as usize * CHANNELS;
        let dst_row_len = dst_level.width as usize * CHANNELS;
        for (dst_y, dst_row) in dst.chunks_exact_mut(dst_row_len).enumerate() {
            let src_row0 = &src[2 * dst_y * src_row_len..][..src_row_len];
            let src_row1 = &src[(2 * dst_y + 1) * src_row_len..][..src_row_len];
            for (dst_x, dst_pixel) in dst_row.chunks_exact_mut(CHANNELS).enumerate() {
                let left = 2 * dst_x * CHANNELS;
                let p00 = &src_row0[left..][..CHANNELS];
                let p10 = &src_row0[left + CHANNELS..][..CHANNELS];
                let p01 = &src_row1[left..][..CHANNELS];
                let p11 = &src_row1[left + CHANNELS..][..CHANNELS];
                for (channel, value) in dst_pixel.iter_mut().enumerate() {
                    *value =
                        T::box_average(p00[channel], p10[channel], p01[channel], p11[channel]);
                }
            }
        }
    }

    /// Generates all mip levels of the pyramid from the base level.
    ///
    /// Levels are generated in the increasing order of their indices
    /// because every level is built from the immediately preceding one.
    /// The base level must be populated before the call.
    pub fn generate_pyramid(&mut self) {
        for level_index in 1..self.layout.level_count() {
            self.generate_level(level_index);
        }
    }
}
