use log::debug;

use crate::{
    chunks::{idat::IDATChunk, iend::IENDChunk, ihdr::IHDRChunk, EncodableChunk},
    config::EncoderConfig,
    error::EncodeError,
    image_data::compress_scanlines,
    pixel::Pixel,
    scanlines::filter_scanlines,
};

const SIGNATURE: &[u8; 8] = b"\x89PNG\x0d\x0a\x1a\x0a";

/// Encode a pixel grid into a complete PNG byte stream.
///
/// `rows` is indexed `[y][x]`, top to bottom. The grid must match the
/// configured dimensions and channel layout exactly; any mismatch is
/// reported as a specific [`EncodeError`] before a single output byte is
/// produced.
pub fn encode(config: &EncoderConfig, rows: &[Vec<Pixel>]) -> Result<Vec<u8>, EncodeError> {
    config.check_pixels(rows)?;

    let filtered = filter_scanlines(config, rows);
    let compressed = compress_scanlines(&filtered, config.compression_level());

    let ihdr = IHDRChunk {
        width: config.width(),
        height: config.height(),
        bit_depth: config.bit_depth(),
        color_type: config.color_type(),
    };
    let idat = IDATChunk { data: &compressed };

    let mut png = Vec::with_capacity(SIGNATURE.len() + 25 + compressed.len() + 12 + 12);
    png.extend(SIGNATURE);
    png.extend(ihdr.to_bytes());
    png.extend(idat.to_bytes());
    png.extend(IENDChunk.to_bytes());
    debug!(
        "assembled {} byte PNG for a {}x{} image",
        png.len(),
        config.width(),
        config.height()
    );
    Ok(png)
}
