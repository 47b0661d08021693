//! Decorative layers painted over the mesh.
//!
//! Each builder documents how many draws it consumes; see [`super::compose_scene`] for the
//! order they run in.

use crate::{
    foundation::core::{Canvas, Point, Rect},
    foundation::math::{DIR8, DIR12},
    palette::ResolvedPalette,
    rng::SeedRng,
    scene::{Element, Glow, Layer, Scanline, Stroke, Style},
};

const GLOW_OPACITY: [f64; 2] = [0.55, 0.4];
const TRACE_WIDTH: f64 = 1.5;
const NODE_RADIUS_END: f64 = 3.0;
const NODE_RADIUS_JOINT: f64 = 1.6;

/// Two radial highlights; 3 draws each (center x, center y, radius).
pub fn glows(palette: &ResolvedPalette<'_>, canvas: Canvas, rng: &mut SeedRng) -> Vec<Glow> {
    let reach = canvas.w().max(canvas.h());
    palette
        .palette
        .glow
        .iter()
        .zip(GLOW_OPACITY)
        .map(|(&color, opacity)| {
            let cx = rng.range(0.0, canvas.w());
            let cy = rng.range(0.0, canvas.h());
            let radius = reach * rng.range(0.35, 0.7);
            Glow {
                center: Point::new(cx, cy),
                radius,
                color,
                opacity,
            }
        })
        .collect()
}

/// Translucent triangular "shards": 1 draw for the count (3..=6), then 8 per shard
/// (center x, center y, radius, rotation, three vertex radii, color).
pub fn shards(palette: &ResolvedPalette<'_>, canvas: Canvas, rng: &mut SeedRng) -> Layer {
    let mut layer = Layer::new("shards", 0.9);
    let count = rng.count(3, 4);
    let short = canvas.w().min(canvas.h());

    for _ in 0..count {
        let center = Point::new(rng.range(0.0, canvas.w()), rng.range(0.0, canvas.h()));
        let radius = short * rng.range(0.08, 0.22);
        let rot = rng.index(DIR12.len());
        let points = (0..3)
            .map(|k| {
                let dir = DIR12[(rot + k * 4) % DIR12.len()];
                center + dir * (radius * rng.range(0.6, 1.0))
            })
            .collect();
        let color = palette.decor_color(rng.next_f64());
        layer.elements.push(Element::Polygon {
            points,
            style: Style {
                fill: Some(color),
                stroke: Some(Stroke { color, width: 1.0 }),
                opacity: Some(0.18),
            },
        });
    }
    layer
}

/// Circuit-board traces plus their node markers.
///
/// 1 draw for the count (4..=8); per trace 2 draws for the start, 1 for the segment count
/// (3..=6), then 2 per segment (direction, length). Markers consume nothing.
pub fn circuits(
    palette: &ResolvedPalette<'_>,
    canvas: Canvas,
    cell: f64,
    rng: &mut SeedRng,
) -> (Layer, Layer) {
    let mut traces = Layer::new("circuits", 0.55);
    let mut nodes = Layer::new("nodes", 0.85);
    let step = (cell / 4.0).max(1.0);
    let snap = |v: f64| (v / step).round() * step;

    let count = rng.count(4, 5);
    for _ in 0..count {
        let start = canvas.clamp_point(Point::new(
            snap(rng.range(0.0, canvas.w())),
            snap(rng.range(0.0, canvas.h())),
        ));
        let segments = rng.count(3, 4);
        let mut points = Vec::with_capacity(segments + 1);
        points.push(start);
        let mut at = start;
        for _ in 0..segments {
            let dir = DIR8[rng.index(DIR8.len())];
            let len = step * rng.count(2, 5) as f64;
            at = canvas.clamp_point(at + dir * len);
            points.push(at);
        }

        let last = points.len() - 1;
        for (i, &p) in points.iter().enumerate() {
            let style = if i == 0 || i == last {
                Style {
                    fill: Some(palette.palette.background[0]),
                    stroke: Some(Stroke {
                        color: palette.palette.accent,
                        width: 1.2,
                    }),
                    opacity: None,
                }
            } else {
                Style::fill(palette.palette.accent)
            };
            let radius = if i == 0 || i == last {
                NODE_RADIUS_END
            } else {
                NODE_RADIUS_JOINT
            };
            nodes.elements.push(Element::Circle {
                center: p,
                radius,
                style,
            });
        }

        traces.elements.push(Element::Polyline {
            points,
            style: Style::stroke(palette.palette.line, TRACE_WIDTH),
        });
    }
    (traces, nodes)
}

/// Thin accent bars: 1 draw for the count (2..=4), then 5 per bar (x, y, width, height,
/// opacity).
pub fn accents(palette: &ResolvedPalette<'_>, canvas: Canvas, rng: &mut SeedRng) -> Layer {
    let mut layer = Layer::new("accents", 1.0);
    let count = rng.count(2, 3);
    for _ in 0..count {
        let x = rng.range(0.0, canvas.w());
        let y = rng.range(0.0, canvas.h());
        let w = canvas.w() * rng.range(0.04, 0.18);
        let h = (canvas.h() * rng.range(0.005, 0.02)).max(2.0);
        let opacity = rng.range(0.15, 0.45);
        layer.elements.push(Element::Rect {
            rect: Rect::new(x, y, x + w, y + h),
            style: Style::fill(palette.palette.accent).with_opacity(opacity),
        });
    }
    layer
}

/// Scanline period: 1 draw (4..=7 px).
pub fn scanline(palette: &ResolvedPalette<'_>, rng: &mut SeedRng) -> Scanline {
    Scanline {
        spacing: rng.count(4, 4) as f64,
        thickness: 1.0,
        color: palette.palette.line,
        opacity: 0.06,
    }
}

/// Hairline frame inset by half a pixel; no draws.
pub fn border(palette: &ResolvedPalette<'_>, canvas: Canvas) -> Layer {
    let mut layer = Layer::new("border", 0.35);
    layer.elements.push(Element::Rect {
        rect: Rect::new(
            0.5,
            0.5,
            (canvas.w() - 0.5).max(0.5),
            (canvas.h() - 0.5).max(0.5),
        ),
        style: Style::stroke(palette.palette.line, 1.0),
    });
    layer
}
