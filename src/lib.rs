//! Deterministic cover patterns for articles without an uploaded image.
//!
//! A text seed (usually the article title) and pixel dimensions are turned into a
//! "tech/geometric" SVG: a jittered triangle mesh over a gradient background, decorated
//! with translucent shards, circuit traces with node markers, accent bars, scanlines and
//! a hairline border. The document is returned as a `data:image/svg+xml;utf8,` URI that
//! can be assigned directly as a CSS background.
//!
//! # Pipeline overview
//!
//! 1. **Seed**: the seed string is hashed into the state of a xorshift32 stream ([`SeedRng`])
//! 2. **Compose**: draws are consumed in a fixed order to build a [`Scene`]
//! 3. **Serialize**: the scene is written as SVG and wrapped in a data URI
//!
//! Guarantees:
//!
//! - **Deterministic**: same seed and dimensions give byte-identical output on every
//!   platform (wrapping `u32` arithmetic, no transcendental float functions).
//! - **Pure**: no IO, no globals mutated, nothing shared between calls.
//! - **Infallible**: [`generate_pattern`] cannot fail; the fallible surfaces are
//!   configuration loading, rasterization and the [`cover`] helpers.
//!
//! ```
//! let a = rosetta_pattern::generate_pattern("Hello World", 800, 500);
//! let b = rosetta_pattern::generate_pattern("Hello World", 800, 500);
//! assert_eq!(a, b);
//! assert!(a.starts_with("data:image/svg+xml;utf8,"));
//! ```
#![forbid(unsafe_code)]

mod compose;
mod config;
mod foundation;
mod generate;
mod palette;
mod render;
mod rng;
mod scene;

/// Caller-side helpers: seed fallback, size floor, background fallback.
pub mod cover;

pub use compose::{ComposeStats, compose_scene};
pub use config::{DEFAULT_FALLBACK_SEED, LayerToggles, PatternConfig};
pub use cover::{CoverBackground, CoverRequest, cover_background, cover_background_with};
pub use foundation::core::{Canvas, Hsl, Point, Rect, Rgb8, Vec2};
pub use foundation::error::{PatternError, PatternResult};
pub use generate::{PatternGenerator, generate_pattern};
pub use palette::{Palette, ResolvedPalette, builtin_palettes};
pub use render::data_uri::{
    BASE64_PREFIX, DataUriEncoding, UTF8_PREFIX, decode_data_uri, to_data_uri,
};
pub use render::raster::{parse_svg, rasterize_rgba8, render_png};
pub use render::svg::{escape_xml, render_svg};
pub use rng::{SeedRng, seed_hash};
pub use scene::{Element, Glow, Layer, Scanline, Scene, Stroke, Style};
