use crate::{
    foundation::core::{Canvas, Hsl, Point, Rgb8},
    foundation::math::lerp,
    rng::SeedRng,
};

/// Maximum hue rotation (degrees, total span) applied on top of a palette's base hue.
const HUE_JITTER_DEG: f64 = 30.0;

/// A named color scheme the generator can pick from.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    pub name: String,
    /// Base hue of the mesh, in degrees.
    pub base_hue: f64,
    /// Hue drift across the canvas diagonal, in degrees.
    pub hue_spread: f64,
    /// Mesh saturation in `[0, 1]`.
    pub saturation: f64,
    /// Mesh lightness range `[lo, hi]` in `[0, 1]`.
    pub lightness: [f64; 2],
    /// Background gradient stops (top-left, bottom-right).
    pub background: [Rgb8; 2],
    pub glow: [Rgb8; 2],
    pub line: Rgb8,
    pub accent: Rgb8,
}

impl Palette {
    #[allow(clippy::too_many_arguments)]
    fn builtin(
        name: &str,
        base_hue: f64,
        hue_spread: f64,
        saturation: f64,
        lightness: [f64; 2],
        background: [Rgb8; 2],
        glow: [Rgb8; 2],
        line: Rgb8,
        accent: Rgb8,
    ) -> Self {
        Self {
            name: name.to_string(),
            base_hue,
            hue_spread,
            saturation,
            lightness,
            background,
            glow,
            line,
            accent,
        }
    }
}

/// The palettes shipped with the generator. Order matters: a draw indexes into it.
pub fn builtin_palettes() -> Vec<Palette> {
    vec![
        Palette::builtin(
            "midnight",
            222.0,
            40.0,
            0.55,
            [0.14, 0.30],
            [Rgb8::new(0x0b, 0x10, 0x20), Rgb8::new(0x1b, 0x2a, 0x4a)],
            [Rgb8::new(0x3b, 0x82, 0xf6), Rgb8::new(0xa8, 0x55, 0xf7)],
            Rgb8::new(0x60, 0xa5, 0xfa),
            Rgb8::new(0x22, 0xd3, 0xee),
        ),
        Palette::builtin(
            "ember",
            18.0,
            30.0,
            0.60,
            [0.16, 0.34],
            [Rgb8::new(0x1a, 0x0b, 0x0b), Rgb8::new(0x3a, 0x1a, 0x12)],
            [Rgb8::new(0xf9, 0x73, 0x16), Rgb8::new(0xef, 0x44, 0x44)],
            Rgb8::new(0xfd, 0xba, 0x74),
            Rgb8::new(0xfa, 0xcc, 0x15),
        ),
        Palette::builtin(
            "forest",
            152.0,
            36.0,
            0.45,
            [0.12, 0.28],
            [Rgb8::new(0x07, 0x14, 0x0f), Rgb8::new(0x12, 0x35, 0x24)],
            [Rgb8::new(0x10, 0xb9, 0x81), Rgb8::new(0x84, 0xcc, 0x16)],
            Rgb8::new(0x6e, 0xe7, 0xb7),
            Rgb8::new(0xa3, 0xe6, 0x35),
        ),
        Palette::builtin(
            "aurora",
            280.0,
            60.0,
            0.50,
            [0.15, 0.32],
            [Rgb8::new(0x0f, 0x0a, 0x1e), Rgb8::new(0x24, 0x12, 0x3d)],
            [Rgb8::new(0xec, 0x48, 0x99), Rgb8::new(0x8b, 0x5c, 0xf6)],
            Rgb8::new(0xf0, 0xab, 0xfc),
            Rgb8::new(0x38, 0xbd, 0xf8),
        ),
        Palette::builtin(
            "slate",
            210.0,
            20.0,
            0.18,
            [0.18, 0.34],
            [Rgb8::new(0x0f, 0x11, 0x15), Rgb8::new(0x1f, 0x29, 0x33)],
            [Rgb8::new(0x94, 0xa3, 0xb8), Rgb8::new(0x38, 0xbd, 0xf8)],
            Rgb8::new(0xcb, 0xd5, 0xe1),
            Rgb8::new(0xf5, 0x9e, 0x0b),
        ),
    ]
}

/// A palette picked for one pattern, plus that pattern's hue offset.
#[derive(Clone, Debug)]
pub struct ResolvedPalette<'a> {
    pub palette: &'a Palette,
    pub hue: f64,
}

impl<'a> ResolvedPalette<'a> {
    /// Consumes two draws: palette index, then hue offset.
    ///
    /// `palettes` must be non-empty (guaranteed by config validation).
    pub fn pick(palettes: &'a [Palette], rng: &mut SeedRng) -> Self {
        let palette = &palettes[rng.index(palettes.len())];
        let hue = palette.base_hue + (rng.next_f64() - 0.5) * HUE_JITTER_DEG;
        Self { palette, hue }
    }

    /// Mesh fill for a triangle: biased by centroid position, perturbed by one draw.
    pub fn mesh_color(&self, centroid: Point, canvas: Canvas, draw: f64) -> Rgb8 {
        let t = (0.6 * (centroid.x / canvas.w()) + 0.4 * (centroid.y / canvas.h())).clamp(0.0, 1.0);
        let [lo, hi] = self.palette.lightness;
        let hue = self.hue + (t - 0.5) * self.palette.hue_spread;
        let lightness = lerp(lo, hi, 0.7 * t + 0.3 * draw);
        Hsl::new(hue, self.palette.saturation, lightness).to_rgb8()
    }

    /// Decorative stroke color: line or accent, chosen by one draw.
    pub fn decor_color(&self, draw: f64) -> Rgb8 {
        if draw < 0.65 {
            self.palette.line
        } else {
            self.palette.accent
        }
    }
}
