use std::path::Path;

use crate::color::Rgb8;

const CHANNELS: usize = 3;

/// Packed RGB8 raster, rows top to bottom.
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixel_data: Box<[u8]>,
}

/// Contiguous run of rows borrowed mutably out of a [`FrameBuffer`].
pub struct Band<'a> {
    first_row: usize,
    width: usize,
    pixel_data: &'a mut [u8],
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixel_data: vec![0; width * height * CHANNELS].into_boxed_slice(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_data(&self) -> &[u8] {
        &self.pixel_data
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let start = (x + y * self.width) * CHANNELS;
        let mut rgb = [0; CHANNELS];
        rgb.copy_from_slice(&self.pixel_data[start..start + CHANNELS]);
        rgb
    }

    /// Splits the rows into `count` disjoint bands of `height / count` rows,
    /// the last band also taking the remainder. `count` is clamped to
    /// `1..=height` so no band is empty unless the image is.
    pub fn bands_mut(&mut self, count: usize) -> Vec<Band<'_>> {
        let count = count.clamp(1, self.height.max(1));
        let band_rows = self.height / count;
        let row_len = self.width * CHANNELS;

        let mut bands = Vec::with_capacity(count);
        let mut rest: &mut [u8] = &mut self.pixel_data;
        for n in 0..count {
            let rows = if n + 1 == count {
                self.height - band_rows * n
            } else {
                band_rows
            };
            let (head, tail) = std::mem::take(&mut rest).split_at_mut(rows * row_len);
            bands.push(Band {
                first_row: band_rows * n,
                width: self.width,
                pixel_data: head,
            });
            rest = tail;
        }
        bands
    }

    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            image::Rgb(self.get_pixel(x as usize, y as usize))
        })
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), image::ImageError> {
        self.to_rgb_image()
            .save_with_format(path, image::ImageFormat::Png)
    }
}

impl<'a> Band<'a> {
    pub fn rows(&self) -> std::ops::Range<usize> {
        self.first_row..self.first_row + self.row_count()
    }

    pub fn row_count(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.pixel_data.len() / (self.width * CHANNELS)
        }
    }

    /// `y` is an image row, not a row index within the band.
    pub fn set_pixel<T: Rgb8>(&mut self, x: usize, y: usize, color: T) {
        let start = (x + (y - self.first_row) * self.width) * CHANNELS;
        self.pixel_data[start..start + CHANNELS].copy_from_slice(&color.to_rgb8());
    }
}
