//! PNG image format support

use crate::{IoError, IoResult};
use aquasense_core::{Raster, RasterMut};
use png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image into an RGB raster.
///
/// 8-bit grayscale, RGB and RGBA inputs are accepted; grayscale is
/// replicated across the channels and alpha is dropped.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG bit depth: {:?}",
            bit_depth
        )));
    }
    let samples = match color_type {
        ColorType::Grayscale => 1usize,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG color type: {:?}",
                color_type
            )));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut out = RasterMut::new(width, height)?;
    for y in 0..height {
        let row_start = y as usize * bytes_per_row;
        for x in 0..width {
            let idx = row_start + (x as usize) * samples;
            let rgb = match samples {
                1 => [data[idx], data[idx], data[idx]],
                _ => [data[idx], data[idx + 1], data[idx + 2]],
            };
            out.set_pixel_unchecked(x, y, rgb);
        }
    }

    Ok(out.into())
}

/// Write a raster as an 8-bit RGB PNG.
pub fn write_png<W: Write>(raster: &Raster, writer: W) -> IoResult<()> {
    let (width, height) = raster.dimensions();

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    // The raster's interleaved layout is already the PNG RGB wire layout.
    writer
        .write_image_data(raster.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_png_roundtrip_rgb() {
        let mut m = RasterMut::new(5, 5).unwrap();
        m.set_pixel(0, 0, [255, 0, 0]).unwrap();
        m.set_pixel(1, 1, [0, 255, 0]).unwrap();
        m.set_pixel(2, 2, [0, 0, 255]).unwrap();
        let raster: Raster = m.into();

        let mut buffer = Vec::new();
        write_png(&raster, &mut buffer).unwrap();

        let decoded = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(decoded.dimensions(), (5, 5));
        assert_eq!(decoded.get_pixel(0, 0).unwrap(), [255, 0, 0]);
        assert_eq!(decoded.get_pixel(1, 1).unwrap(), [0, 255, 0]);
        assert_eq!(decoded.get_pixel(2, 2).unwrap(), [0, 0, 255]);
        assert_eq!(decoded.data(), raster.data());
    }

    #[test]
    fn test_png_write_starts_with_signature() {
        let raster = Raster::new(4, 4).unwrap();
        let mut buffer = Vec::new();
        write_png(&raster, &mut buffer).unwrap();
        assert!(buffer.starts_with(&[0x89, 0x50, 0x4E, 0x47]));
    }

    #[test]
    fn test_png_read_garbage_fails() {
        let garbage = vec![0u8; 64];
        assert!(read_png(Cursor::new(garbage)).is_err());
    }
}
