use std::io::Cursor;

use anyhow::Context as _;

use crate::foundation::error::{PatternError, PatternResult};

/// Largest raster edge we are willing to allocate for a preview.
const MAX_DIM: u32 = 16_384;

/// Parse an SVG document with usvg; errors if the markup is not well-formed.
pub fn parse_svg(svg: &str) -> PatternResult<usvg::Tree> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opts).context("parse svg tree")?;
    Ok(tree)
}

/// Rasterize a parsed tree into straight-alpha RGBA8 at `scale` times its declared size.
pub fn rasterize_rgba8(tree: &usvg::Tree, scale: f32) -> PatternResult<(u32, u32, Vec<u8>)> {
    fn to_px(v: f32) -> PatternResult<u32> {
        if !v.is_finite() || v <= 0.0 {
            return Err(PatternError::generation("svg has invalid width/height"));
        }
        Ok((v.ceil() as u32).max(1))
    }

    if !scale.is_finite() || scale <= 0.0 {
        return Err(PatternError::validation(format!(
            "raster scale must be > 0 (got {scale})"
        )));
    }
    let size = tree.size();
    let width = to_px(size.width() * scale)?;
    let height = to_px(size.height() * scale)?;
    if width > MAX_DIM || height > MAX_DIM {
        return Err(PatternError::validation(format!(
            "raster size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| PatternError::generation("failed to allocate pixmap"))?;
    let sx = (width as f32) / size.width();
    let sy = (height as f32) / size.height();
    resvg::render(
        tree,
        resvg::tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );

    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    Ok((width, height, rgba))
}

/// Render an SVG document to PNG bytes.
pub fn render_png(svg: &str, scale: f32) -> PatternResult<Vec<u8>> {
    let tree = parse_svg(svg)?;
    let (width, height, rgba) = rasterize_rgba8(&tree, scale)?;
    let img = image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| PatternError::generation("raster buffer size mismatch"))?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}
