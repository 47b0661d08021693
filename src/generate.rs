use std::sync::OnceLock;

use crate::{
    compose::compose_scene,
    config::PatternConfig,
    foundation::core::Canvas,
    foundation::error::PatternResult,
    render::data_uri::{DataUriEncoding, to_data_uri},
    render::svg::render_svg,
    rng::seed_hash,
    scene::Scene,
};

/// Generate the cover pattern for `seed` at `width` x `height` as a
/// `data:image/svg+xml;utf8,` URI.
///
/// Pure and deterministic: the same arguments always produce the same bytes. An empty seed
/// behaves exactly like the default fallback seed (`"Rosetta"`); zero dimensions are
/// treated as 1. Callers that want the usual 320x200 floor should go
/// through [`crate::CoverRequest`].
pub fn generate_pattern(seed: &str, width: u32, height: u32) -> String {
    PatternGenerator::shared_default().generate(seed, width, height)
}

/// Pattern generator bound to a validated [`PatternConfig`].
///
/// Holds no per-call state, so one instance can be shared across threads.
#[derive(Clone, Debug)]
pub struct PatternGenerator {
    config: PatternConfig,
    encoding: DataUriEncoding,
}

impl Default for PatternGenerator {
    fn default() -> Self {
        Self {
            config: PatternConfig::default(),
            encoding: DataUriEncoding::Utf8Percent,
        }
    }
}

impl PatternGenerator {
    pub fn new(config: PatternConfig) -> PatternResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            encoding: DataUriEncoding::Utf8Percent,
        })
    }

    fn shared_default() -> &'static Self {
        static DEFAULT: OnceLock<PatternGenerator> = OnceLock::new();
        DEFAULT.get_or_init(Self::default)
    }

    pub fn with_encoding(mut self, encoding: DataUriEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn config(&self) -> &PatternConfig {
        &self.config
    }

    pub fn encoding(&self) -> DataUriEncoding {
        self.encoding
    }

    #[tracing::instrument(skip(self), fields(seed_hash))]
    pub fn generate_scene(&self, seed: &str, width: u32, height: u32) -> Scene {
        let seed = self.config.resolve_seed(seed);
        let canvas = Canvas::sanitized(width, height);
        tracing::Span::current().record("seed_hash", seed_hash(seed));

        let (scene, stats) = compose_scene(&self.config, seed, canvas);
        tracing::debug!(
            cols = stats.cols,
            rows = stats.rows,
            draws = stats.draws,
            elements = scene.element_count(),
            "composed pattern scene"
        );
        scene
    }

    pub fn generate_svg(&self, seed: &str, width: u32, height: u32) -> String {
        render_svg(&self.generate_scene(seed, width, height))
    }

    /// Data URI in this generator's encoding (percent-encoded UTF-8 unless changed).
    pub fn generate(&self, seed: &str, width: u32, height: u32) -> String {
        let svg = self.generate_svg(seed, width, height);
        to_data_uri(&svg, self.encoding)
    }
}
