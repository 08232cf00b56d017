//! End-to-end checks of the encoder against a small reference reader built
//! on nom: every chunk is re-parsed with its declared length and CRC
//! verified, and the pixel data is inflated and de-filtered back to the
//! original grid.

use miniz_oxide::inflate::decompress_to_vec_zlib;
use nom::{
    bytes::complete::{tag, take},
    combinator::map,
    multi::length_data,
    number::complete::be_u32,
    sequence::{terminated, tuple},
    IResult,
};
use plainpng::{encode, EncoderConfig, Filter, Pixel};

const SIGNATURE: &[u8; 8] = b"\x89PNG\x0d\x0a\x1a\x0a";

struct Chunk<'a> {
    chunk_type: &'a [u8; 4],
    body: &'a [u8],
}

fn parse_signature(input: &[u8]) -> IResult<&[u8], &[u8]> {
    tag(SIGNATURE.as_slice())(input)
}

/// Takes one chunk, checking that the trailing CRC matches the checksum of
/// type + body. Fails the parse otherwise.
fn valid_chunk(input: &[u8]) -> IResult<&[u8], Chunk<'_>> {
    let (header_length, crc_length) = (4u32, 4u32);
    let (input, chunk_data) =
        length_data(map(be_u32, |v| v + header_length + crc_length))(input)?;
    let crc = crc32fast::hash(&chunk_data[..chunk_data.len() - crc_length as usize]).to_be_bytes();
    let (_, (chunk_type, body)) = tuple((
        map(take(header_length), |v: &[u8]| {
            v.try_into().expect("4 bytes should have been taken")
        }),
        terminated(
            take(chunk_data.len() - (header_length + crc_length) as usize),
            tag(crc),
        ),
    ))(chunk_data)?;
    Ok((input, Chunk { chunk_type, body }))
}

fn parse_png(bytes: &[u8]) -> Vec<Chunk<'_>> {
    let (mut input, _) = parse_signature(bytes).expect("output should start with the signature");
    let mut chunks = Vec::new();
    while !input.is_empty() {
        let (rest, chunk) = valid_chunk(input).expect("every chunk should carry a valid CRC");
        chunks.push(chunk);
        input = rest;
    }
    chunks
}

/// Undo the scanline filtering: strip each tag byte and reconstruct against
/// the previous raw row.
fn reconstruct_rows(filtered: &[u8], stride: usize, bpp: usize) -> Vec<Vec<u8>> {
    assert_eq!(filtered.len() % (stride + 1), 0);
    let mut rows: Vec<Vec<u8>> = Vec::new();
    let mut previous = vec![0u8; stride];
    for line in filtered.chunks(stride + 1) {
        let filter = Filter::try_from(line[0]).expect("tag byte should name a known filter");
        let mut raw: Vec<u8> = Vec::with_capacity(stride);
        for x in 0..stride {
            let a = if x >= bpp { raw[x - bpp] } else { 0 };
            let b = previous[x];
            let c = if x >= bpp { previous[x - bpp] } else { 0 };
            raw.push(filter.reconstruct(line[x + 1], a, b, c));
        }
        previous.clone_from(&raw);
        rows.push(raw);
    }
    rows
}

fn to_pixels(raw: &[u8], bit_depth: u8, alpha: bool) -> Vec<Pixel> {
    let bytes_per_channel = (bit_depth / 8) as usize;
    let channels = if alpha { 4 } else { 3 };
    raw.chunks(bytes_per_channel * channels)
        .map(|pixel| {
            let mut components = pixel.chunks(bytes_per_channel).map(|c| {
                if bytes_per_channel == 1 {
                    c[0] as u16
                } else {
                    u16::from_be_bytes([c[0], c[1]])
                }
            });
            let red = components.next().unwrap();
            let green = components.next().unwrap();
            let blue = components.next().unwrap();
            match components.next() {
                Some(a) => Pixel::rgba(red, green, blue, a),
                None => Pixel::rgb(red, green, blue),
            }
        })
        .collect()
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[test]
fn output_begins_with_signature_and_ends_with_iend() {
    let config = EncoderConfig::new(3, 2, true, 8, 9, 3).unwrap();
    let rows = vec![
        vec![Pixel::rgba(1, 2, 3, 4); 3],
        vec![Pixel::rgba(200, 100, 50, 255); 3],
    ];
    let bytes = encode(&config, &rows).unwrap();
    assert!(bytes.starts_with(SIGNATURE));
    insta::assert_snapshot!(
        hex(&bytes[bytes.len() - 12..]),
        @"0000000049454e44ae426082"
    );
}

#[test]
fn chunks_appear_in_order_with_matching_lengths() {
    let config = EncoderConfig::new(4, 4, false, 16, 2, 1).unwrap();
    let rows = vec![vec![Pixel::rgb(1000, 2000, 3000); 4]; 4];
    let bytes = encode(&config, &rows).unwrap();

    // valid_chunk rejects any chunk whose declared length or CRC is off,
    // so parsing alone already checks both properties per chunk
    let chunks = parse_png(&bytes);
    let types: Vec<_> = chunks.iter().map(|c| c.chunk_type).collect();
    assert_eq!(types, [b"IHDR", b"IDAT", b"IEND"]);
    assert_eq!(chunks[0].body.len(), 13);
    assert!(!chunks[1].body.is_empty());
    assert_eq!(chunks[2].body.len(), 0);
}

#[test]
fn one_pixel_image_round_trips() {
    let config = EncoderConfig::new(1, 1, false, 8, 6, 0).unwrap();
    let rows = vec![vec![Pixel::rgb(255, 0, 255)]];
    let bytes = encode(&config, &rows).unwrap();

    // signature + IHDR are byte-exact for this geometry
    insta::assert_snapshot!(
        hex(&bytes[..33]),
        @"89504e470d0a1a0a0000000d4948445200000001000000010802000000907753de"
    );

    let chunks = parse_png(&bytes);
    let filtered = decompress_to_vec_zlib(chunks[1].body).unwrap();
    assert_eq!(filtered, [0, 255, 0, 255]);

    let raw = reconstruct_rows(&filtered, 3, 3);
    assert_eq!(to_pixels(&raw[0], 8, false), rows[0]);
}

#[test]
fn rgba16_paeth_image_round_trips() {
    let config = EncoderConfig::new(2, 2, true, 16, 9, 4).unwrap();
    let rows = vec![
        vec![
            Pixel::rgba(0, 65535, 256, 4660),
            Pixel::rgba(1, 2, 3, 4),
        ],
        vec![
            Pixel::rgba(40000, 30000, 20000, 10000),
            Pixel::rgba(65535, 0, 65535, 65535),
        ],
    ];
    let bytes = encode(&config, &rows).unwrap();

    let chunks = parse_png(&bytes);
    let header = chunks[0].body;
    assert_eq!(&header[..4], &2u32.to_be_bytes());
    assert_eq!(&header[4..8], &2u32.to_be_bytes());
    // bit depth 16, colour type 6, then the three fixed zero method bytes
    assert_eq!(&header[8..], &[16, 6, 0, 0, 0]);

    let filtered = decompress_to_vec_zlib(chunks[1].body).unwrap();
    let raw = reconstruct_rows(&filtered, 2 * 8, 8);
    let decoded: Vec<Vec<Pixel>> = raw.iter().map(|row| to_pixels(row, 16, true)).collect();
    assert_eq!(decoded, rows);
}

#[test]
fn compression_level_changes_the_payload_not_the_image() {
    let config_fast = EncoderConfig::new(32, 32, false, 8, 1, 2).unwrap();
    let config_best = EncoderConfig::new(32, 32, false, 8, 9, 2).unwrap();
    let rows: Vec<Vec<Pixel>> = (0..32)
        .map(|y| (0..32).map(|x| Pixel::rgb(x * 8, y * 8, 128)).collect())
        .collect();

    let fast = encode(&config_fast, &rows).unwrap();
    let best = encode(&config_best, &rows).unwrap();

    for bytes in [&fast, &best] {
        let chunks = parse_png(bytes);
        let filtered = decompress_to_vec_zlib(chunks[1].body).unwrap();
        let raw = reconstruct_rows(&filtered, 32 * 3, 3);
        let decoded: Vec<Vec<Pixel>> = raw.iter().map(|row| to_pixels(row, 8, false)).collect();
        assert_eq!(decoded, rows);
    }
}
