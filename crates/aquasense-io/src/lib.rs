//! aquasense-io - image decode and encode
//!
//! The assessment pipeline operates on decoded [`Raster`] buffers; this
//! crate is the boundary where uploaded files become rasters and results
//! become files again. The system accepts the two formats its uploads
//! arrive in, each behind a feature:
//!
//! - `png-format` (default): PNG via the `png` crate
//! - `jpeg` (default): JPEG via `jpeg-decoder` / `jpeg-encoder`
//!
//! [`read_image_from_bytes`] sniffs the format from magic bytes, which is
//! how in-memory uploads are decoded; [`read_image`] / [`write_image`] are
//! the path-based equivalents.

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use aquasense_core::Raster;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor};
use std::path::Path;

/// Decode an image from in-memory bytes, sniffing the format.
pub fn read_image_from_bytes(data: &[u8]) -> IoResult<Raster> {
    let format = detect_format_from_bytes(data)?;
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(Cursor::new(data)),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(Cursor::new(data)),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            other
        ))),
    }
}

/// Read an image from a file path, sniffing the format from the header.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let format = detect_format(&path)?;
    let file = File::open(&path).map_err(IoError::Io)?;
    let reader = BufReader::new(file);
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => {
            // The PNG decoder wants Seek; the JPEG decoder just reads.
            jpeg::read_jpeg(reader)
        }
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            other
        ))),
    }
}

/// Write an image to a file path in the given format.
pub fn write_image<P: AsRef<Path>>(
    raster: &Raster,
    path: P,
    format: ImageFormat,
) -> IoResult<()> {
    let file = File::create(&path).map_err(IoError::Io)?;
    let writer = BufWriter::new(file);
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(raster, writer),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(raster, writer),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            other
        ))),
    }
}

#[cfg(all(test, feature = "png-format", feature = "jpeg"))]
mod tests {
    use super::*;
    use aquasense_core::RasterMut;

    fn sample() -> Raster {
        let mut m = RasterMut::new(12, 9).unwrap();
        for y in 0..9 {
            for x in 0..12 {
                m.set_pixel_unchecked(x, y, [(x * 20) as u8, (y * 25) as u8, 128]);
            }
        }
        m.into()
    }

    #[test]
    fn test_bytes_roundtrip_sniffs_png() {
        let raster = sample();
        let mut buffer = Vec::new();
        png::write_png(&raster, &mut buffer).unwrap();

        let decoded = read_image_from_bytes(&buffer).unwrap();
        assert_eq!(decoded.data(), raster.data());
    }

    #[test]
    fn test_bytes_roundtrip_sniffs_jpeg() {
        let raster = sample();
        let mut buffer = Vec::new();
        jpeg::write_jpeg(&raster, &mut buffer).unwrap();

        let decoded = read_image_from_bytes(&buffer).unwrap();
        assert_eq!(decoded.dimensions(), raster.dimensions());
    }

    #[test]
    fn test_bytes_unknown_format() {
        assert!(read_image_from_bytes(b"definitely not an image").is_err());
    }
}
