use crate::{
    config::PatternConfig,
    foundation::core::{Canvas, Point},
    palette::ResolvedPalette,
    rng::SeedRng,
    scene::{Element, Layer, Stroke, Style},
};

/// Seam-hiding outline drawn in each triangle's own fill color.
const SEAM_WIDTH: f64 = 0.6;

/// Jittered vertex grid that the mesh is triangulated from.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshGrid {
    pub cols: usize,
    pub rows: usize,
    /// Nominal cell edge in px.
    pub cell: f64,
    /// `(rows + 1) * (cols + 1)` vertices, row-major.
    pub vertices: Vec<Point>,
}

impl MeshGrid {
    /// Consumes `2 + 2 * (rows + 1) * (cols + 1)` draws: cell size, jitter amount, then a
    /// `(dx, dy)` pair per vertex.
    ///
    /// Boundary vertices still draw their pair but stay pinned to the edge they sit on,
    /// and the far edge is at least the canvas size, so the triangles always cover the
    /// whole canvas even when the cell size does not divide it.
    pub fn sample(config: &PatternConfig, canvas: Canvas, rng: &mut SeedRng) -> Self {
        let [cell_lo, cell_hi] = config.cell_fraction;
        let [jit_lo, jit_hi] = config.jitter_fraction;
        let base = (canvas.w() * canvas.h()).sqrt();
        let cell = base * rng.range(cell_lo, cell_hi);
        let jitter = rng.range(jit_lo, jit_hi);

        let cap = config.max_cells_per_axis.max(1) as usize;
        let cell = cell
            .max(canvas.w() / cap as f64)
            .max(canvas.h() / cap as f64);
        let cols = ((canvas.w() / cell).ceil() as usize).clamp(1, cap);
        let rows = ((canvas.h() / cell).ceil() as usize).clamp(1, cap);
        let extent_x = (cols as f64 * cell).max(canvas.w());
        let extent_y = (rows as f64 * cell).max(canvas.h());
        let amp = cell * jitter;

        let mut vertices = Vec::with_capacity((rows + 1) * (cols + 1));
        for r in 0..=rows {
            for c in 0..=cols {
                let dx = (rng.next_f64() - 0.5) * 2.0 * amp;
                let dy = (rng.next_f64() - 0.5) * 2.0 * amp;
                let x = match c {
                    0 => 0.0,
                    _ if c == cols => extent_x,
                    _ => c as f64 * cell + dx,
                };
                let y = match r {
                    0 => 0.0,
                    _ if r == rows => extent_y,
                    _ => r as f64 * cell + dy,
                };
                vertices.push(Point::new(x, y));
            }
        }

        Self {
            cols,
            rows,
            cell,
            vertices,
        }
    }

    pub fn vertex(&self, row: usize, col: usize) -> Point {
        self.vertices[row * (self.cols + 1) + col]
    }

    pub fn cell_count(&self) -> usize {
        self.cols * self.rows
    }
}

/// Splits every grid cell into two filled triangles.
///
/// Consumes 3 draws per cell, row-major: the diagonal (`> 0.5` runs top-left to
/// bottom-right), then one color draw per triangle.
pub fn triangulate(
    grid: &MeshGrid,
    palette: &ResolvedPalette<'_>,
    canvas: Canvas,
    rng: &mut SeedRng,
) -> Layer {
    let mut layer = Layer::new("mesh", 1.0);
    layer.elements.reserve(grid.cell_count() * 2);

    for r in 0..grid.rows {
        for c in 0..grid.cols {
            let a = grid.vertex(r, c);
            let b = grid.vertex(r, c + 1);
            let d = grid.vertex(r + 1, c + 1);
            let e = grid.vertex(r + 1, c);

            let tris = if rng.next_f64() > 0.5 {
                [[a, b, d], [a, d, e]]
            } else {
                [[a, b, e], [b, d, e]]
            };
            for tri in tris {
                let centroid = Point::new(
                    (tri[0].x + tri[1].x + tri[2].x) / 3.0,
                    (tri[0].y + tri[1].y + tri[2].y) / 3.0,
                );
                let color = palette.mesh_color(centroid, canvas, rng.next_f64());
                layer.elements.push(Element::Polygon {
                    points: tri.to_vec(),
                    style: Style {
                        fill: Some(color),
                        stroke: Some(Stroke {
                            color,
                            width: SEAM_WIDTH,
                        }),
                        opacity: None,
                    },
                });
            }
        }
    }
    layer
}
