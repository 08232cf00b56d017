use log::debug;

use crate::{config::EncoderConfig, pixel::Pixel};

/// Serialize one pixel row big-endian at the configured bit depth.
fn serialize_row(row: &[Pixel], bit_depth: u8, size: usize) -> Vec<u8> {
    let mut raw = Vec::with_capacity(size);
    for pixel in row {
        for component in pixel.components() {
            if bit_depth == 8 {
                raw.push(component as u8);
            } else {
                raw.extend(component.to_be_bytes());
            }
        }
    }
    raw
}

/// Filter every row with the configured filter, producing the byte stream
/// handed to compression: each scanline is tagged with the filter code and
/// coded against the previous raw row. The row above the first is all
/// zeroes, carried as an explicit buffer rather than a special case in the
/// byte loop.
pub(crate) fn filter_scanlines(config: &EncoderConfig, rows: &[Vec<Pixel>]) -> Vec<u8> {
    let bpp = config.bytes_per_pixel();
    let size = config.scanline_size();
    let filter = config.filter();

    let mut filtered = Vec::with_capacity(rows.len() * (size + 1));
    let mut previous = vec![0u8; size];
    for row in rows {
        let raw = serialize_row(row, config.bit_depth(), size);
        filtered.push(filter as u8);
        for x in 0..size {
            let a = if x >= bpp { raw[x - bpp] } else { 0 };
            let b = previous[x];
            let c = if x >= bpp { previous[x - bpp] } else { 0 };
            filtered.push(filter.filter(raw[x], a, b, c));
        }
        previous = raw;
    }
    debug!("filtered {} scanlines of {} bytes", rows.len(), size);
    filtered
}
