use log::debug;
use miniz_oxide::deflate::compress_to_vec_zlib;

/// Compression boundary: the filtered scanline stream goes in, a zlib
/// stream comes out. Levels 1-9 map directly onto miniz_oxide's scale.
pub(crate) fn compress_scanlines(filtered: &[u8], level: u8) -> Vec<u8> {
    let compressed = compress_to_vec_zlib(filtered, level);
    debug!(
        "compressed {} filtered bytes down to {} at level {}",
        filtered.len(),
        compressed.len(),
        level
    );
    compressed
}
