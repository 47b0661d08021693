use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::error::{PatternError, PatternResult},
    palette::{Palette, builtin_palettes},
};

/// Seed used when the caller supplies an empty one.
pub const DEFAULT_FALLBACK_SEED: &str = "Rosetta";

/// Which decorative layers are drawn on top of the mesh.
///
/// Disabled layers still consume their random draws, so switching one off never changes
/// the geometry of the others.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayerToggles {
    pub shards: bool,
    pub circuits: bool,
    pub accents: bool,
    pub scanlines: bool,
    pub border: bool,
}

impl Default for LayerToggles {
    fn default() -> Self {
        Self {
            shards: true,
            circuits: true,
            accents: true,
            scanlines: true,
            border: true,
        }
    }
}

/// Tunables for the generator.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    pub fallback_seed: String,
    /// Caller-side floor applied by [`crate::CoverRequest`].
    pub min_width: u32,
    pub min_height: u32,
    /// Mesh cell size as a fraction of `sqrt(width * height)`, `[lo, hi]`.
    pub cell_fraction: [f64; 2],
    /// Vertex jitter as a fraction of the cell size, `[lo, hi]`.
    pub jitter_fraction: [f64; 2],
    /// Upper bound on mesh columns and rows; cells grow to respect it.
    pub max_cells_per_axis: u32,
    pub palettes: Vec<Palette>,
    pub layers: LayerToggles,
    /// Write the resolved seed into a `<title>` element.
    pub embed_title: bool,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            fallback_seed: DEFAULT_FALLBACK_SEED.to_string(),
            min_width: 320,
            min_height: 200,
            cell_fraction: [0.12, 0.22],
            jitter_fraction: [0.18, 0.32],
            max_cells_per_axis: 48,
            palettes: builtin_palettes(),
            layers: LayerToggles::default(),
            embed_title: false,
        }
    }
}

impl PatternConfig {
    pub fn validate(&self) -> PatternResult<()> {
        if self.fallback_seed.is_empty() {
            return Err(PatternError::validation("fallback_seed must not be empty"));
        }
        if self.palettes.is_empty() {
            return Err(PatternError::validation("at least one palette is required"));
        }
        if self.max_cells_per_axis == 0 {
            return Err(PatternError::validation("max_cells_per_axis must be > 0"));
        }
        check_range("cell_fraction", self.cell_fraction, 0.0, 4.0)?;
        check_range("jitter_fraction", self.jitter_fraction, 0.0, 0.5)?;

        for p in &self.palettes {
            if p.name.trim().is_empty() {
                return Err(PatternError::validation("palette name must not be blank"));
            }
            if !(0.0..=1.0).contains(&p.saturation) {
                return Err(PatternError::validation(format!(
                    "palette '{}' saturation must be in [0, 1]",
                    p.name
                )));
            }
            check_range(&format!("palette '{}' lightness", p.name), p.lightness, 0.0, 1.0)?;
            if !p.base_hue.is_finite() || !p.hue_spread.is_finite() {
                return Err(PatternError::validation(format!(
                    "palette '{}' hue values must be finite",
                    p.name
                )));
            }
        }
        Ok(())
    }

    pub fn from_json_str(s: &str) -> PatternResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| PatternError::serde(format!("parse pattern config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_path(path: &Path) -> PatternResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read pattern config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// The seed a generation call will actually use.
    ///
    /// Only an empty seed falls back; whitespace is a seed like any other.
    pub fn resolve_seed<'a>(&'a self, seed: &'a str) -> &'a str {
        if seed.is_empty() {
            &self.fallback_seed
        } else {
            seed
        }
    }
}

fn check_range(what: &str, [lo, hi]: [f64; 2], min: f64, max: f64) -> PatternResult<()> {
    if !lo.is_finite() || !hi.is_finite() || lo < min || hi > max || lo > hi {
        return Err(PatternError::validation(format!(
            "{what} must satisfy {min} <= lo <= hi <= {max} (got [{lo}, {hi}])"
        )));
    }
    Ok(())
}
