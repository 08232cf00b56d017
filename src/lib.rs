//! Encode truecolor images into PNG byte streams.
//!
//! ```
//! use plainpng::{encode, EncoderConfig, Pixel};
//!
//! let config = EncoderConfig::new(2, 1, false, 8, 7, 4)?;
//! let rows = vec![vec![
//!     Pixel::rgb(0xff, 0x00, 0xff),
//!     Pixel::rgb(0x00, 0xff, 0xff),
//! ]];
//! let bytes = encode(&config, &rows)?;
//! assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
//! # Ok::<(), plainpng::EncodeError>(())
//! ```

mod chunks;
mod config;
mod error;
mod filters;
mod image_data;
mod pixel;
mod png;
mod scanlines;

pub use config::EncoderConfig;
pub use error::EncodeError;
pub use filters::Filter;
pub use pixel::Pixel;
pub use png::encode;
