use super::{chunk_checksum, EncodableChunk};

#[derive(Debug)]
pub(crate) struct IHDRChunk {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) bit_depth: u8,
    pub(crate) color_type: ColorType,
}
impl EncodableChunk for IHDRChunk {
    type Output = Vec<u8>;

    const HEADER: &'static [u8; 4] = b"IHDR";

    fn to_bytes(&self) -> Self::Output {
        // 13-byte body; the trailing compression, filter and interlace
        // method bytes are always zero.
        let mut bytes = vec![0, 0, 0, 13];
        bytes.extend(Self::HEADER);
        bytes.extend(&self.width.to_be_bytes());
        bytes.extend(&self.height.to_be_bytes());
        bytes.extend(&[self.bit_depth, self.color_type as u8, 0, 0, 0]);
        let crc = chunk_checksum(&bytes[4..]);
        bytes.extend(crc);
        bytes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ColorType {
    Truecolor = 2,
    TruecolorWithAlpha = 6,
}
impl ColorType {
    pub(crate) fn channel_count(&self) -> u8 {
        match self {
            Self::Truecolor => 3,
            Self::TruecolorWithAlpha => 4,
        }
    }
}
