//! Raster - the main image container
//!
//! `Raster` holds an 8-bit-per-channel RGB image as interleaved bytes in
//! row-major order. It is the type every stage of the restoration pipeline
//! consumes and produces.
//!
//! # Pixel layout
//!
//! - One pixel = 3 consecutive bytes, `[r, g, b]`
//! - Row `y` occupies bytes `y * width * 3 .. (y + 1) * width * 3`
//! - No row padding
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for cheap cloning (shared ownership). To write
//! pixels, convert to [`RasterMut`] via [`Raster::try_into_mut`] or
//! [`Raster::to_mut`], then convert back with `Into<Raster>`. Pipeline
//! stages never mutate their inputs; they build a fresh `RasterMut` and
//! freeze it on return.

use crate::error::{Error, Result};
use std::sync::Arc;

/// Number of interleaved channels per pixel.
pub const CHANNELS: usize = 3;

/// Internal raster data
#[derive(Debug)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Interleaved RGB bytes, row-major, no padding
    data: Vec<u8>,
}

/// Raster - immutable shared RGB image
///
/// # Examples
///
/// ```
/// use aquasense_core::Raster;
///
/// let raster = Raster::new(640, 480).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// assert_eq!(raster.get_pixel(0, 0).unwrap(), [0, 0, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new black raster with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize) * CHANNELS;
        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                data: vec![0u8; size],
            }),
        })
    }

    /// Create a raster from interleaved RGB bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for zero dimensions and
    /// [`Error::InvalidParameter`] if `data.len() != width * height * 3`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected = (width as usize) * (height as usize) * CHANNELS;
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{}x3 = {}",
                data.len(),
                width,
                height,
                expected
            )));
        }

        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                data,
            }),
        })
    }

    /// Get the image width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the image dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Get the RGB triple at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates are outside
    /// the image.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<[u8; 3]> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.inner.width as usize) + (x as usize),
                len: (self.inner.width as usize) * (self.inner.height as usize),
            });
        }
        Ok(self.get_pixel_unchecked(x, y))
    }

    /// Get the RGB triple at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = ((y as usize) * (self.inner.width as usize) + (x as usize)) * CHANNELS;
        [
            self.inner.data[idx],
            self.inner.data[idx + 1],
            self.inner.data[idx + 2],
        ]
    }

    /// Get raw access to the interleaved pixel bytes
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get a row of interleaved pixel bytes
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = (self.inner.width as usize) * CHANNELS;
        let start = (y as usize) * stride;
        &self.inner.data[start..start + stride]
    }

    /// Make a deep copy with its own buffer.
    pub fn deep_clone(&self) -> Raster {
        Raster {
            inner: Arc::new(RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Convert into a mutable raster without copying, if this is the only
    /// reference. Returns `Err(self)` when the data is shared.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Raster> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut {
                width: data.width,
                height: data.height,
                data: data.data,
            }),
            Err(inner) => Err(Raster { inner }),
        }
    }

    /// Get a mutable raster, copying the pixel data if it is shared.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            width: self.inner.width,
            height: self.inner.height,
            data: self.inner.data.clone(),
        }
    }
}

/// RasterMut - exclusively owned, writable RGB image
///
/// Produced by [`Raster::try_into_mut`] / [`Raster::to_mut`] or
/// [`RasterMut::new`]; frozen back into a shareable [`Raster`] with
/// `Into<Raster>`.
#[derive(Debug)]
pub struct RasterMut {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterMut {
    /// Create a new black writable raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let size = (width as usize) * (height as usize) * CHANNELS;
        Ok(RasterMut {
            width,
            height,
            data: vec![0u8; size],
        })
    }

    /// Get the image width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the RGB triple at (x, y) without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * CHANNELS;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }

    /// Set the RGB triple at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates are outside
    /// the image.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.width as usize) + (x as usize),
                len: (self.width as usize) * (self.height as usize),
            });
        }
        self.set_pixel_unchecked(x, y, rgb);
        Ok(())
    }

    /// Set the RGB triple at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * CHANNELS;
        self.data[idx] = rgb[0];
        self.data[idx + 1] = rgb[1];
        self.data[idx + 2] = rgb[2];
    }

    /// Fill the whole raster with one color.
    pub fn fill(&mut self, rgb: [u8; 3]) {
        for px in self.data.chunks_exact_mut(CHANNELS) {
            px[0] = rgb[0];
            px[1] = rgb[1];
            px[2] = rgb[2];
        }
    }

    /// Get mutable access to the interleaved pixel bytes
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl From<RasterMut> for Raster {
    fn from(m: RasterMut) -> Raster {
        Raster {
            inner: Arc::new(RasterData {
                width: m.width,
                height: m.height,
                data: m.data,
            }),
        }
    }
}
