//! Decoded raster image supplied by the host for the image pattern

use crate::error::{EngineError, EngineResult};

/// Packed RGB pixels, row-major, 3 bytes per pixel
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    rgb: Vec<u8>,
}

impl Raster {
    /// Accepts RGBA (canvas `ImageData`) or RGB buffers; alpha is dropped
    pub fn from_pixels(width: u32, height: u32, data: &[u8]) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidImage {
            width,
            height,
            len: data.len(),
        };
        let pixels = (width as usize).checked_mul(height as usize).ok_or_else(invalid)?;
        if pixels == 0 {
            return Err(invalid());
        }

        let rgba_len = pixels.checked_mul(4);
        let rgb_len = pixels.checked_mul(3);
        let rgb = if rgba_len == Some(data.len()) {
            data.chunks_exact(4).flat_map(|px| [px[0], px[1], px[2]]).collect()
        } else if rgb_len == Some(data.len()) {
            data.to_vec()
        } else {
            return Err(invalid());
        };

        Ok(Self { width, height, rgb })
    }

    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        [self.rgb[idx], self.rgb[idx + 1], self.rgb[idx + 2]]
    }

    /// Mean brightness `(r+g+b)/3` over the pixel block that maps onto
    /// cell (`row`, `col`) of a `rows` x `cols` grid.
    ///
    /// Blocks are at least one pixel wide, so rasters smaller than the grid
    /// fall back to nearest-pixel sampling.
    pub fn cell_brightness(&self, row: usize, col: usize, rows: usize, cols: usize) -> f64 {
        let (x0, x1) = block_span(col, cols, self.width as usize);
        let (y0, y1) = block_span(row, rows, self.height as usize);

        let mut sum = 0u64;
        let mut count = 0u64;
        for y in y0..y1 {
            for x in x0..x1 {
                let [r, g, b] = self.pixel(x as u32, y as u32);
                sum += u64::from(r) + u64::from(g) + u64::from(b);
                count += 3;
            }
        }
        if count == 0 {
            return 0.0;
        }
        sum as f64 / count as f64
    }
}

/// Pixel range [start, end) covered by cell `i` of `cells` across `extent` pixels
fn block_span(i: usize, cells: usize, extent: usize) -> (usize, usize) {
    let start = (i * extent / cells).min(extent - 1);
    let end = ((i + 1) * extent / cells).clamp(start + 1, extent);
    (start, end)
}
