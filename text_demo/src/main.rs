//! MSDF text pipeline demo
//!
//! Loads a BMFont JSON descriptor, lays out a text block with wrapping,
//! and prints the geometry and shading data a host 3D engine would
//! upload. No GPU required: this exercises the full CPU-side pipeline.

use msdf_text::prelude::*;
use nalgebra::Vector3;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| {
        concat!(env!("CARGO_MANIFEST_DIR"), "/resources/demo-font.json").to_string()
    });

    log::info!("Loading font descriptor from {path}");
    let font = FontAtlas::from_json_file(&path)?;
    println!(
        "Font '{}': {} glyphs, native size {}px, atlas {:?}",
        font.face(),
        font.glyph_count(),
        font.native_size(),
        font.page_size()
    );

    let mut text = MsdfText::from_explicit(
        "hello world, wrapped msdf text!",
        &StyleOverrides {
            font_size_px: Some(32.0),
            width_px: Some(260.0),
            letter_spacing_px: Some(1.0),
            color: Some(Vector3::new(0.9, 0.85, 0.2)),
            ..StyleOverrides::default()
        },
        &font,
    )?;

    print_instance("initial layout", &text);

    // Same glyph count: the buffers are refreshed in place
    text.update_text("hello again, wrapped msdf text!");
    print_instance("after in-place text update", &text);

    // Different glyph count: buffers are replaced wholesale
    text.update(&TextUpdate {
        text: Some("short".to_string()),
        style: StyleOverrides {
            font_size_px: Some(16.0),
            ..StyleOverrides::default()
        },
    })?;
    print_instance("after shrink to a small font", &text);

    // Sample the shading model across the glyph edge
    text.material_mut().stroke_width = 0.2;
    text.material_mut().stroke_color = Vector3::new(0.1, 0.1, 0.1);
    println!("\nShading sweep (threshold {}):", text.material().threshold);
    for sample in [0.2f32, 0.4, 0.5, 0.6, 0.8] {
        let (color, alpha) = shade(Vector3::new(sample, sample, sample), 0.05, text.material());
        println!("  sample {sample:.2} -> alpha {alpha:.3}, color ({:.2}, {:.2}, {:.2})", color.x, color.y, color.z);
    }

    Ok(())
}

fn print_instance(label: &str, text: &MsdfText) {
    let buffers = text.buffers();
    let bounds = text.bounds();
    println!("\n{label}:");
    println!("  text: {:?}", text.metrics().text);
    println!(
        "  {} glyphs, block {:.1}x{:.1} px",
        buffers.glyph_count(),
        bounds.width(),
        bounds.height()
    );
    println!(
        "  buffers: {} position floats, {} uv floats, {} indices ({} bytes total)",
        buffers.positions().len(),
        buffers.uvs().len(),
        buffers.indices().len(),
        buffers.position_bytes().len()
            + buffers.uv_bytes().len()
            + buffers.center_bytes().len()
            + buffers.glyph_index_bytes().len()
            + buffers.index_bytes().len()
    );
    println!(
        "  needs upload: {}, reallocated: {}, smooth shading: {}",
        text.geometry().needs_upload(),
        text.geometry().buffers_replaced(),
        text.material().is_smooth
    );
}
