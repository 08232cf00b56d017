use crate::error::EncodeError;

/// Per-byte predictive filters, filter method 0 of the PNG standard.
///
/// In the byte-level contract `x` is the byte being coded, `a` the raw byte
/// one pixel to its left, `b` the raw byte directly above, `c` the raw byte
/// above-left. Neighbours outside the image are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    None = 0,
    Sub = 1,
    Up = 2,
    Average = 3,
    Paeth = 4,
}
impl Filter {
    pub fn filter(&self, x: u8, a: u8, b: u8, c: u8) -> u8 {
        match self {
            Filter::None => x,
            Filter::Sub => x.wrapping_sub(a),
            Filter::Up => x.wrapping_sub(b),
            Filter::Average => x.wrapping_sub(average(a, b)),
            Filter::Paeth => x.wrapping_sub(paeth(a, b, c)),
        }
    }

    /// Inverse of [`Filter::filter`] given the same neighbour context.
    pub fn reconstruct(&self, x: u8, a: u8, b: u8, c: u8) -> u8 {
        match self {
            Filter::None => x,
            Filter::Sub => x.wrapping_add(a),
            Filter::Up => x.wrapping_add(b),
            Filter::Average => x.wrapping_add(average(a, b)),
            Filter::Paeth => x.wrapping_add(paeth(a, b, c)),
        }
    }
}
impl TryFrom<u8> for Filter {
    type Error = EncodeError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Sub),
            2 => Ok(Self::Up),
            3 => Ok(Self::Average),
            4 => Ok(Self::Paeth),
            i => Err(EncodeError::UnknownFilterType(i)),
        }
    }
}

fn average(a: u8, b: u8) -> u8 {
    ((a as u16 + b as u16) / 2) as u8
}

/// Predictor from <http://www.w3.org/TR/PNG/#9Filter-type-4-Paeth>.
/// Ties resolve left, then up, then up-left.
fn paeth(a: u8, b: u8, c: u8) -> u8 {
    let p = a as i16 + b as i16 - c as i16;
    let pa = (p - a as i16).abs();
    let pb = (p - b as i16).abs();
    let pc = (p - c as i16).abs();

    if pa <= pb && pa <= pc {
        a
    } else if pb <= pc {
        b
    } else {
        c
    }
}
