use crate::{chunks::ihdr::ColorType, error::EncodeError, filters::Filter, pixel::Pixel};

/// Settings for one encode run, validated at construction and immutable
/// afterwards. A configuration can be shared freely across calls and
/// threads; every encode owns its working buffers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderConfig {
    width: u32,
    height: u32,
    alpha: bool,
    bit_depth: u8,
    compression_level: u8,
    filter: Filter,
}

impl EncoderConfig {
    /// Validate and freeze the encoder settings.
    ///
    /// Rejects zero dimensions, a bit depth other than 8 or 16, a
    /// compression level outside [1, 9] and a filter type outside [0, 4].
    pub fn new(
        width: u32,
        height: u32,
        alpha: bool,
        bit_depth: u8,
        compression_level: u8,
        filter_type: u8,
    ) -> Result<Self, EncodeError> {
        if width == 0 || height == 0 {
            return Err(EncodeError::InvalidDimensions { width, height });
        }
        if !matches!(bit_depth, 8 | 16) {
            return Err(EncodeError::UnsupportedBitDepth(bit_depth));
        }
        if !(1..=9).contains(&compression_level) {
            return Err(EncodeError::InvalidCompressionLevel(compression_level));
        }
        let filter = Filter::try_from(filter_type)?;
        Ok(Self {
            width,
            height,
            alpha,
            bit_depth,
            compression_level,
            filter,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn alpha(&self) -> bool {
        self.alpha
    }

    pub fn bit_depth(&self) -> u8 {
        self.bit_depth
    }

    pub fn compression_level(&self) -> u8 {
        self.compression_level
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub(crate) fn color_type(&self) -> ColorType {
        if self.alpha {
            ColorType::TruecolorWithAlpha
        } else {
            ColorType::Truecolor
        }
    }

    pub(crate) fn channel_count(&self) -> u8 {
        self.color_type().channel_count()
    }

    /// Bytes per complete pixel: channel count times bytes per channel.
    pub(crate) fn bytes_per_pixel(&self) -> usize {
        self.channel_count() as usize * (self.bit_depth / 8) as usize
    }

    /// Raw scanline length in bytes, without the filter tag.
    pub(crate) fn scanline_size(&self) -> usize {
        self.width as usize * self.bytes_per_pixel()
    }

    pub(crate) fn max_component(&self) -> u16 {
        if self.bit_depth == 8 {
            u8::MAX as u16
        } else {
            u16::MAX
        }
    }

    /// Shape and range checks over the whole grid. Runs once per encode,
    /// before any scanline is built, so the filter engine and assembler
    /// never see malformed input.
    pub(crate) fn check_pixels(&self, rows: &[Vec<Pixel>]) -> Result<(), EncodeError> {
        if rows.len() != self.height as usize {
            return Err(EncodeError::RowCountMismatch {
                expected: self.height as usize,
                actual: rows.len(),
            });
        }
        let max = self.max_component();
        for (y, row) in rows.iter().enumerate() {
            if row.len() != self.width as usize {
                return Err(EncodeError::RowLengthMismatch {
                    row: y,
                    expected: self.width as usize,
                    actual: row.len(),
                });
            }
            for (x, pixel) in row.iter().enumerate() {
                if pixel.channel_count() != self.channel_count() {
                    return Err(EncodeError::ChannelCountMismatch {
                        row: y,
                        column: x,
                        expected: self.channel_count(),
                        actual: pixel.channel_count(),
                    });
                }
                if let Some(value) = pixel.components().find(|&v| v > max) {
                    return Err(EncodeError::ComponentOutOfRange {
                        row: y,
                        column: x,
                        value,
                        max,
                    });
                }
            }
        }
        Ok(())
    }
}
