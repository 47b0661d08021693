use std::fmt::Write as _;

use crate::{
    foundation::core::{Canvas, Point},
    foundation::math::fmt_num,
    scene::{Element, Glow, Layer, Scanline, Scene, Style},
};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Serialize a scene into a standalone SVG document.
///
/// Output depends only on the scene: numbers go through [`fmt_num`], ids are fixed, and
/// nothing platform- or locale-dependent is written.
pub fn render_svg(scene: &Scene) -> String {
    let Canvas { width, height } = scene.canvas;
    let mut out = String::with_capacity(256 + scene.element_count() * 96);

    let _ = write!(
        out,
        r#"<svg xmlns="{SVG_NS}" width="{width}" height="{height}" viewBox="0 0 {width} {height}" preserveAspectRatio="xMidYMid slice">"#
    );
    if let Some(title) = &scene.title {
        let _ = write!(out, "<title>{}</title>", escape_xml(title));
    }

    out.push_str("<defs>");
    let [bg0, bg1] = scene.background;
    let _ = write!(
        out,
        r#"<linearGradient id="bg" x1="0" y1="0" x2="1" y2="1"><stop offset="0" stop-color="{}"/><stop offset="1" stop-color="{}"/></linearGradient>"#,
        bg0.to_hex(),
        bg1.to_hex()
    );
    for (i, glow) in scene.glows.iter().enumerate() {
        write_glow_def(&mut out, i, glow);
    }
    if let Some(scan) = &scene.scanline {
        write_scanline_def(&mut out, scan);
    }
    out.push_str("</defs>");

    let full = format!(r#"width="{width}" height="{height}""#);
    let _ = write!(out, r#"<rect {full} fill="url(#bg)"/>"#);
    for i in 0..scene.glows.len() {
        let _ = write!(out, r#"<rect {full} fill="url(#glow{i})"/>"#);
    }

    for layer in &scene.layers {
        write_layer(&mut out, layer);
    }

    if scene.scanline.is_some() {
        let _ = write!(out, r#"<rect {full} fill="url(#scan)"/>"#);
    }

    out.push_str("</svg>");
    out
}

fn write_glow_def(out: &mut String, i: usize, glow: &Glow) {
    let color = glow.color.to_hex();
    let _ = write!(
        out,
        r#"<radialGradient id="glow{i}" cx="{}" cy="{}" r="{}" gradientUnits="userSpaceOnUse"><stop offset="0" stop-color="{color}" stop-opacity="{}"/><stop offset="1" stop-color="{color}" stop-opacity="0"/></radialGradient>"#,
        fmt_num(glow.center.x),
        fmt_num(glow.center.y),
        fmt_num(glow.radius),
        fmt_num(glow.opacity),
    );
}

fn write_scanline_def(out: &mut String, scan: &Scanline) {
    let spacing = fmt_num(scan.spacing);
    let _ = write!(
        out,
        r#"<pattern id="scan" width="{spacing}" height="{spacing}" patternUnits="userSpaceOnUse"><rect width="{spacing}" height="{}" fill="{}" fill-opacity="{}"/></pattern>"#,
        fmt_num(scan.thickness),
        scan.color.to_hex(),
        fmt_num(scan.opacity),
    );
}

fn write_layer(out: &mut String, layer: &Layer) {
    let _ = write!(out, r#"<g id="{}""#, escape_xml(layer.id));
    if layer.opacity < 1.0 {
        let _ = write!(out, r#" opacity="{}""#, fmt_num(layer.opacity));
    }
    out.push('>');
    for el in &layer.elements {
        write_element(out, el);
    }
    out.push_str("</g>");
}

fn write_element(out: &mut String, el: &Element) {
    match el {
        Element::Polygon { points, style } => {
            let _ = write!(out, r#"<polygon points="{}""#, points_attr(points));
            write_style(out, style);
        }
        Element::Polyline { points, style } => {
            let _ = write!(out, r#"<polyline points="{}""#, points_attr(points));
            write_style(out, style);
            out.push_str(r#" stroke-linejoin="round" stroke-linecap="round""#);
        }
        Element::Circle {
            center,
            radius,
            style,
        } => {
            let _ = write!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}""#,
                fmt_num(center.x),
                fmt_num(center.y),
                fmt_num(*radius)
            );
            write_style(out, style);
        }
        Element::Rect { rect, style } => {
            let _ = write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                fmt_num(rect.x0),
                fmt_num(rect.y0),
                fmt_num(rect.width().max(0.0)),
                fmt_num(rect.height().max(0.0))
            );
            write_style(out, style);
        }
    }
    out.push_str("/>");
}

fn write_style(out: &mut String, style: &Style) {
    match style.fill {
        Some(c) => {
            let _ = write!(out, r#" fill="{}""#, c.to_hex());
        }
        None => out.push_str(r#" fill="none""#),
    }
    if let Some(stroke) = style.stroke {
        let _ = write!(
            out,
            r#" stroke="{}" stroke-width="{}""#,
            stroke.color.to_hex(),
            fmt_num(stroke.width)
        );
    }
    if let Some(opacity) = style.opacity {
        let _ = write!(out, r#" opacity="{}""#, fmt_num(opacity));
    }
}

fn points_attr(points: &[Point]) -> String {
    let mut s = String::with_capacity(points.len() * 12);
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        let _ = write!(s, "{},{}", fmt_num(p.x), fmt_num(p.y));
    }
    s
}

/// Escape text for element content and double-quoted attributes.
///
/// Characters XML 1.0 cannot carry at all (most C0 controls) are dropped.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\t' | '\n' | '\r' => out.push(ch),
            c if (c as u32) < 0x20 || c == '\u{FFFE}' || c == '\u{FFFF}' => {}
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        foundation::core::{Rect, Rgb8},
        scene::{Layer, Stroke},
    };

    fn tiny_scene() -> Scene {
        let mut layer = Layer::new("mesh", 0.5);
        layer.elements.push(Element::Polygon {
            points: vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(0.0, 10.5),
            ],
            style: Style {
                fill: Some(Rgb8::new(255, 0, 0)),
                stroke: Some(Stroke {
                    color: Rgb8::new(0, 0, 255),
                    width: 0.6,
                }),
                opacity: None,
            },
        });
        layer.elements.push(Element::Rect {
            rect: Rect::new(1.0, 2.0, 4.0, 6.0),
            style: Style::fill(Rgb8::new(0, 255, 0)).with_opacity(0.25),
        });
        Scene {
            canvas: Canvas::sanitized(16, 12),
            title: Some(r#"<A & "B">"#.to_string()),
            background: [Rgb8::new(0, 0, 0), Rgb8::new(17, 17, 17)],
            glows: vec![],
            layers: vec![layer],
            scanline: Some(Scanline {
                spacing: 4.0,
                thickness: 1.0,
                color: Rgb8::new(255, 255, 255),
                opacity: 0.06,
            }),
        }
    }

    #[test]
    fn root_declares_requested_size() {
        let svg = render_svg(&tiny_scene());
        assert!(svg.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="12" viewBox="0 0 16 12""#
        ));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn elements_and_styles_are_serialized() {
        let svg = render_svg(&tiny_scene());
        assert!(svg.contains(
            r##"<polygon points="0,0 10,0 0,10.5" fill="#ff0000" stroke="#0000ff" stroke-width="0.6"/>"##
        ));
        assert!(svg.contains(
            r##"<rect x="1" y="2" width="3" height="4" fill="#00ff00" opacity="0.25"/>"##
        ));
        assert!(svg.contains(r#"<g id="mesh" opacity="0.5">"#));
        assert!(svg.contains(r#"fill="url(#scan)""#));
    }

    #[test]
    fn title_is_escaped() {
        let svg = render_svg(&tiny_scene());
        assert!(svg.contains("<title>&lt;A &amp; &quot;B&quot;&gt;</title>"));
    }

    #[test]
    fn escape_drops_invalid_controls() {
        assert_eq!(escape_xml("a\u{0}b\u{1b}c\td"), "abc\td");
        assert_eq!(escape_xml("it's"), "it&#39;s");
    }
}
