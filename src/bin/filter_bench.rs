use std::{fs, path::Path};

use anyhow::Context;
use plainpng::{encode, EncoderConfig, Pixel};

fn gradient(width: u32, height: u32) -> Vec<Vec<Pixel>> {
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| {
                    let red = (x * 255 / width) as u16;
                    let green = (y * 255 / height) as u16;
                    let blue = ((x + y) * 255 / (width + height)) as u16;
                    Pixel::rgb(red, green, blue)
                })
                .collect()
        })
        .collect()
}

/// Encodes one gradient scene once per filter type and compression level
/// and records the output sizes, so filter/level trade-offs can be compared
/// across changes.
fn main() -> anyhow::Result<()> {
    let output_dir = Path::new("benchmark");
    fs::create_dir_all(output_dir).context("Failed to create benchmark folder")?;
    let rows = gradient(128, 128);

    let mut sizes = serde_json::Map::new();
    for filter_type in 0..=4u8 {
        for level in [1u8, 6, 9] {
            let config = EncoderConfig::new(128, 128, false, 8, level, filter_type)?;
            let bytes = encode(&config, &rows)?;
            sizes.insert(
                format!("filter{filter_type}-level{level}"),
                bytes.len().into(),
            );
        }
    }

    let now = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Iso8601::DEFAULT)?;
    let results = serde_json::json!({
        "date": now,
        "scene": "gradient-128x128",
        "sizes": sizes,
    });
    fs::write(output_dir.join("filter_results.json"), results.to_string())?;
    Ok(())
}
