//! Turns a seed into a [`Scene`].
//!
//! The order in which random draws are consumed is part of the output contract: changing
//! it changes every pattern generated for an existing seed. The order is
//!
//! 1. palette index, hue offset (2)
//! 2. mesh cell size, jitter amount, vertex jitter pairs ([`mesh::MeshGrid::sample`])
//! 3. mesh diagonals and triangle colors ([`mesh::triangulate`])
//! 4. glows, shards, circuits, accents, scanline period ([`decor`])
//!
//! The border consumes nothing. Layers switched off in [`LayerToggles`] are still
//! sampled, so toggles never shift the draws of the layers that remain.
//!
//! [`LayerToggles`]: crate::LayerToggles

pub mod decor;
pub mod mesh;

use crate::{
    config::PatternConfig,
    foundation::core::Canvas,
    palette::ResolvedPalette,
    rng::SeedRng,
    scene::Scene,
};

/// Statistics about a composed scene, reported through `tracing`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComposeStats {
    pub cols: usize,
    pub rows: usize,
    pub draws: u64,
}

/// Compose the scene for an already-resolved seed.
///
/// `config` is assumed valid (see [`PatternConfig::validate`]).
pub fn compose_scene(config: &PatternConfig, seed: &str, canvas: Canvas) -> (Scene, ComposeStats) {
    let mut rng = SeedRng::from_seed(seed);

    let palette = ResolvedPalette::pick(&config.palettes, &mut rng);

    let grid = mesh::MeshGrid::sample(config, canvas, &mut rng);
    let mesh_layer = mesh::triangulate(&grid, &palette, canvas, &mut rng);

    let glows = decor::glows(&palette, canvas, &mut rng);
    let shards = decor::shards(&palette, canvas, &mut rng);
    let (traces, nodes) = decor::circuits(&palette, canvas, grid.cell, &mut rng);
    let accents = decor::accents(&palette, canvas, &mut rng);
    let scanline = decor::scanline(&palette, &mut rng);
    let border = decor::border(&palette, canvas);

    let toggles = config.layers;
    let mut layers = vec![mesh_layer];
    if toggles.shards {
        layers.push(shards);
    }
    if toggles.circuits {
        layers.push(traces);
        layers.push(nodes);
    }
    if toggles.accents {
        layers.push(accents);
    }
    if toggles.border {
        layers.push(border);
    }

    let scene = Scene {
        canvas,
        title: config.embed_title.then(|| seed.to_string()),
        background: palette.palette.background,
        glows,
        layers,
        scanline: toggles.scanlines.then_some(scanline),
    };
    let stats = ComposeStats {
        cols: grid.cols,
        rows: grid.rows,
        draws: rng.draws(),
    };
    (scene, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayerToggles;

    #[test]
    fn same_seed_same_scene() {
        let cfg = PatternConfig::default();
        let canvas = Canvas::sanitized(800, 500);
        let (a, sa) = compose_scene(&cfg, "Hello World", canvas);
        let (b, sb) = compose_scene(&cfg, "Hello World", canvas);
        assert_eq!(a, b);
        assert_eq!(sa, sb);
    }

    #[test]
    fn toggles_do_not_shift_remaining_layers() {
        let canvas = Canvas::sanitized(800, 500);
        let full = PatternConfig::default();
        let sparse = PatternConfig {
            layers: LayerToggles {
                shards: false,
                circuits: true,
                accents: false,
                scanlines: false,
                border: true,
            },
            ..PatternConfig::default()
        };
        let (a, sa) = compose_scene(&full, "toggle", canvas);
        let (b, sb) = compose_scene(&sparse, "toggle", canvas);

        assert_eq!(sa.draws, sb.draws);
        for id in ["mesh", "circuits", "nodes", "border"] {
            assert_eq!(a.layer(id), b.layer(id), "layer {id}");
        }
        assert!(b.layer("shards").is_none());
        assert!(b.layer("accents").is_none());
        assert!(b.scanline.is_none());
    }

    #[test]
    fn mesh_draws_follow_palette_directly() {
        let cfg = PatternConfig::default();
        let canvas = Canvas::sanitized(640, 360);
        let (scene, _) = compose_scene(&cfg, "order", canvas);

        let mut rng = SeedRng::from_seed("order");
        let palette = ResolvedPalette::pick(&cfg.palettes, &mut rng);
        let grid = mesh::MeshGrid::sample(&cfg, canvas, &mut rng);
        let mesh_layer = mesh::triangulate(&grid, &palette, canvas, &mut rng);
        let glows = decor::glows(&palette, canvas, &mut rng);

        assert_eq!(scene.layer("mesh"), Some(&mesh_layer));
        assert_eq!(scene.glows, glows);
    }

    #[test]
    fn layer_order_is_painter_order() {
        let (scene, _) = compose_scene(&PatternConfig::default(), "order", Canvas::sanitized(640, 360));
        let ids: Vec<_> = scene.layers.iter().map(|l| l.id).collect();
        assert_eq!(ids, ["mesh", "shards", "circuits", "nodes", "accents", "border"]);
    }

    #[test]
    fn title_only_when_enabled() {
        let canvas = Canvas::sanitized(320, 200);
        let (plain, _) = compose_scene(&PatternConfig::default(), "T", canvas);
        assert!(plain.title.is_none());
        let cfg = PatternConfig {
            embed_title: true,
            ..PatternConfig::default()
        };
        let (titled, _) = compose_scene(&cfg, "T", canvas);
        assert_eq!(titled.title.as_deref(), Some("T"));
    }
}
