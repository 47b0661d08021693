use crate::foundation::core::{Canvas, Point, Rect, Rgb8};

/// Fully composed pattern, ready for serialization.
///
/// Produced once per generation call and never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub canvas: Canvas,
    /// Resolved seed, written as `<title>` when present.
    pub title: Option<String>,
    /// Diagonal background gradient stops.
    pub background: [Rgb8; 2],
    pub glows: Vec<Glow>,
    /// Painter's order, bottom first.
    pub layers: Vec<Layer>,
    pub scanline: Option<Scanline>,
}

impl Scene {
    pub fn element_count(&self) -> usize {
        self.layers.iter().map(|l| l.elements.len()).sum()
    }

    pub fn layer(&self, id: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }
}

/// Soft radial highlight over the background.
#[derive(Clone, Debug, PartialEq)]
pub struct Glow {
    pub center: Point,
    pub radius: f64,
    pub color: Rgb8,
    pub opacity: f64,
}

/// Horizontal scanlines tiled across the whole canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scanline {
    /// Period in px.
    pub spacing: f64,
    /// Line thickness in px.
    pub thickness: f64,
    pub color: Rgb8,
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    pub id: &'static str,
    pub opacity: f64,
    pub elements: Vec<Element>,
}

impl Layer {
    pub fn new(id: &'static str, opacity: f64) -> Self {
        Self {
            id,
            opacity,
            elements: Vec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgb8,
    pub width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Style {
    pub fill: Option<Rgb8>,
    pub stroke: Option<Stroke>,
    /// `None` means fully opaque.
    pub opacity: Option<f64>,
}

impl Style {
    pub fn fill(color: Rgb8) -> Self {
        Self {
            fill: Some(color),
            ..Self::default()
        }
    }

    pub fn stroke(color: Rgb8, width: f64) -> Self {
        Self {
            stroke: Some(Stroke { color, width }),
            ..Self::default()
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }
}

/// A drawable primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Polygon { points: Vec<Point>, style: Style },
    Polyline { points: Vec<Point>, style: Style },
    Circle { center: Point, radius: f64, style: Style },
    Rect { rect: Rect, style: Style },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_opacity_is_clamped() {
        let s = Style::fill(Rgb8::new(1, 2, 3)).with_opacity(3.0);
        assert_eq!(s.opacity, Some(1.0));
        let s = Style::stroke(Rgb8::new(1, 2, 3), 1.0).with_opacity(-1.0);
        assert_eq!(s.opacity, Some(0.0));
    }

    #[test]
    fn element_count_sums_layers() {
        let mut a = Layer::new("a", 1.0);
        a.elements.push(Element::Circle {
            center: Point::new(1.0, 1.0),
            radius: 1.0,
            style: Style::default(),
        });
        let mut b = Layer::new("b", 1.0);
        b.elements.push(Element::Rect {
            rect: Rect::new(0.0, 0.0, 1.0, 1.0),
            style: Style::default(),
        });
        b.elements.push(Element::Rect {
            rect: Rect::new(0.0, 0.0, 2.0, 2.0),
            style: Style::default(),
        });
        let scene = Scene {
            canvas: Canvas::sanitized(4, 4),
            title: None,
            background: [Rgb8::new(0, 0, 0); 2],
            glows: vec![],
            layers: vec![a, b],
            scanline: None,
        };
        assert_eq!(scene.element_count(), 3);
        assert_eq!(scene.layer("b").map(|l| l.elements.len()), Some(2));
        assert!(scene.layer("c").is_none());
    }
}
