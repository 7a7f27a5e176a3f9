//! JPEG image format support
//!
//! Reads with the `jpeg-decoder` crate and writes with `jpeg-encoder`
//! (the decoder crate is decode-only).

use crate::{IoError, IoResult};
use aquasense_core::{Raster, RasterMut};
use jpeg_decoder::PixelFormat;
use std::io::{Read, Write};

/// Quality used when encoding, 1-100. Matches the common default of the
/// reference encoders.
const ENCODE_QUALITY: u8 = 90;

/// Read a JPEG image into an RGB raster.
///
/// Accepts 8-bit grayscale and RGB streams; grayscale is replicated
/// across the channels.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Raster> {
    let mut decoder = jpeg_decoder::Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG header info".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;

    let samples = match info.pixel_format {
        PixelFormat::L8 => 1usize,
        PixelFormat::RGB24 => 3,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {:?}",
                other
            )));
        }
    };

    let expected = (width as usize) * (height as usize) * samples;
    if data.len() < expected {
        return Err(IoError::InvalidData(format!(
            "JPEG data truncated: {} < {}",
            data.len(),
            expected
        )));
    }

    let mut out = RasterMut::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            let idx = ((y as usize) * (width as usize) + (x as usize)) * samples;
            let rgb = match samples {
                1 => [data[idx], data[idx], data[idx]],
                _ => [data[idx], data[idx + 1], data[idx + 2]],
            };
            out.set_pixel_unchecked(x, y, rgb);
        }
    }

    Ok(out.into())
}

/// Write a raster as an RGB JPEG.
pub fn write_jpeg<W: Write>(raster: &Raster, mut writer: W) -> IoResult<()> {
    let (width, height) = raster.dimensions();
    if width > u16::MAX as u32 || height > u16::MAX as u32 {
        return Err(IoError::EncodeError(format!(
            "image {}x{} exceeds the JPEG size limit",
            width, height
        )));
    }

    let mut buffer = Vec::new();
    let encoder = jpeg_encoder::Encoder::new(&mut buffer, ENCODE_QUALITY);
    encoder
        .encode(
            raster.data(),
            width as u16,
            height as u16,
            jpeg_encoder::ColorType::Rgb,
        )
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))?;

    writer.write_all(&buffer).map_err(IoError::Io)?;
    Ok(())
}
