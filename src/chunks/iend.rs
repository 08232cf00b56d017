use super::{chunk_checksum, EncodableChunk};

pub(crate) struct IENDChunk;
impl EncodableChunk for IENDChunk {
    type Output = [u8; 12];

    const HEADER: &'static [u8; 4] = b"IEND";

    fn to_bytes(&self) -> Self::Output {
        let mut data = [0, 0, 0, 0, b'I', b'E', b'N', b'D', 0, 0, 0, 0];
        let crc = chunk_checksum(&data[4..8]);
        data[8..].copy_from_slice(&crc);
        data
    }
}
