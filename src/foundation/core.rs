use crate::foundation::error::{PatternError, PatternResult};

pub use kurbo::{Point, Rect, Vec2};

/// Pixel dimensions of a generated pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> PatternResult<Self> {
        if width == 0 || height == 0 {
            return Err(PatternError::validation(format!(
                "canvas width/height must be > 0 (got {width}x{height})"
            )));
        }
        Ok(Self { width, height })
    }

    /// Infallible variant used by the public entry point: zero becomes one.
    pub fn sanitized(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Apply the caller-side floor (e.g. 320x200 for cover placeholders).
    pub fn clamped_to(self, min_width: u32, min_height: u32) -> Self {
        Self {
            width: self.width.max(min_width).max(1),
            height: self.height.max(min_height).max(1),
        }
    }

    pub fn w(self) -> f64 {
        f64::from(self.width)
    }

    pub fn h(self) -> f64 {
        f64::from(self.height)
    }

    /// Clamp a point into the canvas bounds.
    pub fn clamp_point(self, p: Point) -> Point {
        Point::new(p.x.clamp(0.0, self.w()), p.y.clamp(0.0, self.h()))
    }
}

/// Straight (non-premultiplied) 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse `#rrggbb` or `#rgb`.
    pub fn parse_hex(s: &str) -> PatternResult<Self> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| PatternError::validation(format!("color '{s}' must start with '#'")))?;
        let bad = || PatternError::validation(format!("invalid hex color '{s}'"));
        let nibble = |c: u8| -> PatternResult<u8> {
            (c as char)
                .to_digit(16)
                .map(|d| d as u8)
                .ok_or_else(bad)
        };
        let bytes = digits.as_bytes();
        match bytes.len() {
            6 => {
                let mut out = [0u8; 3];
                for (i, pair) in bytes.chunks_exact(2).enumerate() {
                    out[i] = (nibble(pair[0])? << 4) | nibble(pair[1])?;
                }
                Ok(Self::new(out[0], out[1], out[2]))
            }
            3 => {
                let r = nibble(bytes[0])?;
                let g = nibble(bytes[1])?;
                let b = nibble(bytes[2])?;
                Ok(Self::new(r * 17, g * 17, b * 17))
            }
            _ => Err(bad()),
        }
    }
}

impl TryFrom<String> for Rgb8 {
    type Error = PatternError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&s)
    }
}

impl From<Rgb8> for String {
    fn from(c: Rgb8) -> Self {
        c.to_hex()
    }
}

/// HSL color: hue in degrees, saturation and lightness in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 1.0),
            l: l.clamp(0.0, 1.0),
        }
    }

    // Only exactly-rounded IEEE operations here so output is identical on every platform.
    pub fn to_rgb8(self) -> Rgb8 {
        let c = (1.0 - (2.0 * self.l - 1.0).abs()) * self.s;
        let hp = self.h / 60.0;
        let x = c * (1.0 - (hp.rem_euclid(2.0) - 1.0).abs());
        let (r1, g1, b1) = match hp as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = self.l - c / 2.0;
        let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb8::new(to_u8(r1), to_u8(g1), to_u8(b1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_rejects_zero_and_sanitizes() {
        assert!(Canvas::new(0, 10).is_err());
        assert!(Canvas::new(10, 0).is_err());
        assert_eq!(
            Canvas::sanitized(0, 0),
            Canvas {
                width: 1,
                height: 1
            }
        );
    }

    #[test]
    fn canvas_clamp_applies_floor_only() {
        let c = Canvas::new(100, 900).unwrap().clamped_to(320, 200);
        assert_eq!((c.width, c.height), (320, 900));
    }

    #[test]
    fn hex_parse_and_format() {
        let c = Rgb8::parse_hex("#0a1B2c").unwrap();
        assert_eq!(c, Rgb8::new(0x0a, 0x1b, 0x2c));
        assert_eq!(c.to_hex(), "#0a1b2c");
        assert_eq!(Rgb8::parse_hex("#fff").unwrap(), Rgb8::new(255, 255, 255));
        assert!(Rgb8::parse_hex("0a1b2c").is_err());
        assert!(Rgb8::parse_hex("#0a1b2").is_err());
        assert!(Rgb8::parse_hex("#zzzzzz").is_err());
    }

    #[test]
    fn hsl_primaries() {
        assert_eq!(Hsl::new(0.0, 1.0, 0.5).to_rgb8(), Rgb8::new(255, 0, 0));
        assert_eq!(Hsl::new(120.0, 1.0, 0.5).to_rgb8(), Rgb8::new(0, 255, 0));
        assert_eq!(Hsl::new(240.0, 1.0, 0.5).to_rgb8(), Rgb8::new(0, 0, 255));
        assert_eq!(Hsl::new(360.0, 0.0, 1.0).to_rgb8(), Rgb8::new(255, 255, 255));
        assert_eq!(Hsl::new(-30.0, 0.0, 0.0).to_rgb8(), Rgb8::new(0, 0, 0));
    }
}
