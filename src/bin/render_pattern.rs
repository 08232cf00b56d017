use anyhow::Context;
use plainpng::{encode, EncoderConfig, Pixel};

/// Renders a 256x256 RGBA bitwise-arithmetic test pattern and writes it as
/// a PNG to the given path (default `pattern.png`).
fn main() -> anyhow::Result<()> {
    let args: Vec<_> = std::env::args().skip(1).collect();
    let verbosity = if args.first().map(String::as_str) == Some("-v") {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Error
    };
    pretty_env_logger::formatted_builder()
        .filter_level(verbosity)
        .init();
    let output = args
        .last()
        .filter(|a| !a.starts_with('-'))
        .map(String::as_str)
        .unwrap_or("pattern.png");

    let (width, height) = (256u32, 256u32);
    let config = EncoderConfig::new(width, height, true, 8, 7, 4)?;
    let mut rows = Vec::with_capacity(height as usize);
    for y in 0..height as u16 {
        let mut row = Vec::with_capacity(width as usize);
        for x in 0..width as u16 {
            let red = !(y & x) & 0xff;
            let green = (y | !x) & 0xff;
            let blue = (!y & x) & 0xff;
            let alpha = (y ^ x) & 0xff;
            row.push(Pixel::rgba(red, green, blue, alpha));
        }
        rows.push(row);
    }

    let bytes = encode(&config, &rows)?;
    std::fs::write(output, bytes).context(format!("Failed to write {output}"))?;
    Ok(())
}
