pub(crate) mod idat;
pub(crate) mod iend;
pub(crate) mod ihdr;

/// A chunk that serializes itself as `[length][type][body][crc]`, with the
/// length counting the body only and the CRC covering type + body.
pub(crate) trait EncodableChunk {
    type Output: AsRef<[u8]>;
    const HEADER: &'static [u8; 4];

    fn to_bytes(&self) -> Self::Output;
}

/// CRC-32 trailer for a chunk, computed over its type + body.
pub(crate) fn chunk_checksum(type_and_body: &[u8]) -> [u8; 4] {
    crc32fast::hash(type_and_body).to_be_bytes()
}
