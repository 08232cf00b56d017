use thiserror::Error;

/// Everything that can reject an encode before any output byte is produced.
///
/// The first four variants are configuration errors, the next three are
/// pixel-grid shape errors, the last is a component range error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    #[error("image dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("bit depth must be 8 or 16, got {0}")]
    UnsupportedBitDepth(u8),

    #[error("compression level must be within [1, 9], got {0}")]
    InvalidCompressionLevel(u8),

    #[error("filter type must be within [0, 4], got {0}")]
    UnknownFilterType(u8),

    #[error("pixel data has {actual} rows, configuration says {expected}")]
    RowCountMismatch { expected: usize, actual: usize },

    #[error("row {row} has {actual} pixels, configuration says {expected}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("pixel at row {row}, column {column} has {actual} channels, configuration says {expected}")]
    ChannelCountMismatch {
        row: usize,
        column: usize,
        expected: u8,
        actual: u8,
    },

    #[error("component {value} at row {row}, column {column} exceeds the bit depth maximum {max}")]
    ComponentOutOfRange {
        row: usize,
        column: usize,
        value: u16,
        max: u16,
    },
}
