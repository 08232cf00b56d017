use super::{chunk_checksum, EncodableChunk};

/// The single data chunk; borrows the compressed filtered stream.
#[derive(Debug)]
pub(crate) struct IDATChunk<'a> {
    pub(crate) data: &'a [u8],
}
impl EncodableChunk for IDATChunk<'_> {
    type Output = Vec<u8>;

    const HEADER: &'static [u8; 4] = b"IDAT";

    fn to_bytes(&self) -> Self::Output {
        let len = self.data.len() as u32;
        let mut bytes = len.to_be_bytes().to_vec();
        bytes.extend(Self::HEADER);
        bytes.extend(self.data);
        let crc = chunk_checksum(&bytes[4..]);
        bytes.extend(crc);
        bytes
    }
}
