//! Caller-side glue for using a pattern as a cover background.
//!
//! Resolves the seed and the minimum placeholder size, and turns any generation failure
//! into "no background" instead of an error.

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::{
    config::PatternConfig,
    foundation::core::Canvas,
    foundation::error::{PatternError, PatternResult},
    generate::PatternGenerator,
};

/// A placeholder asking for a cover: its title (if any) and rendered size.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CoverRequest {
    /// Primary seed, usually the article title.
    pub seed: Option<String>,
    /// Seed stored on the placeholder itself, used when there is no title.
    #[serde(default)]
    pub data_seed: Option<String>,
    pub width: u32,
    pub height: u32,
}

impl CoverRequest {
    pub fn new(seed: Option<&str>, width: u32, height: u32) -> Self {
        Self {
            seed: seed.map(str::to_string),
            data_seed: None,
            width,
            height,
        }
    }

    pub fn with_data_seed(mut self, data_seed: Option<&str>) -> Self {
        self.data_seed = data_seed.map(str::to_string);
        self
    }

    /// Seed and canvas actually used, and dimensions raised to the configured floor.
    ///
    /// The seed is the first non-empty of `seed`, `data_seed` and the configured fallback.
    pub fn resolve<'a>(&'a self, config: &'a PatternConfig) -> (&'a str, Canvas) {
        let requested = [&self.seed, &self.data_seed]
            .into_iter()
            .filter_map(|s| s.as_deref())
            .find(|s| !s.is_empty())
            .unwrap_or("");
        let seed = config.resolve_seed(requested);
        let canvas = Canvas::sanitized(self.width, self.height)
            .clamped_to(config.min_width, config.min_height);
        (seed, canvas)
    }
}

/// Background settings to apply to the placeholder element.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CoverBackground {
    /// Data URI, or `None` when generation failed and the background stays unset.
    pub image: Option<String>,
    pub size: &'static str,
    pub position: &'static str,
}

impl CoverBackground {
    pub fn with_image(uri: String) -> Self {
        Self {
            image: Some(uri),
            size: "cover",
            position: "center",
        }
    }

    pub fn unset() -> Self {
        Self {
            image: None,
            size: "cover",
            position: "center",
        }
    }

    /// Inline CSS declarations; empty when there is no image.
    pub fn to_css(&self) -> String {
        match &self.image {
            Some(uri) => format!(
                "background-image: url(\"{uri}\"); background-size: {}; background-position: {};",
                self.size, self.position
            ),
            None => String::new(),
        }
    }
}

pub fn cover_background(generator: &PatternGenerator, request: &CoverRequest) -> CoverBackground {
    cover_background_with(generator.config(), request, |seed, canvas| {
        Ok(generator.generate(seed, canvas.width, canvas.height))
    })
}

/// Like [`cover_background`], with a custom generation step.
///
/// Errors and panics from `generate` are logged and produce [`CoverBackground::unset`].
pub fn cover_background_with<F>(
    config: &PatternConfig,
    request: &CoverRequest,
    generate: F,
) -> CoverBackground
where
    F: FnOnce(&str, Canvas) -> PatternResult<String>,
{
    let (seed, canvas) = request.resolve(config);
    let outcome = catch_unwind(AssertUnwindSafe(|| generate(seed, canvas)))
        .unwrap_or_else(|_| Err(PatternError::generation("pattern generation panicked")));

    match outcome {
        Ok(uri) => CoverBackground::with_image(uri),
        Err(err) => {
            tracing::warn!(error = %err, "cover pattern unavailable; leaving background unset");
            CoverBackground::unset()
        }
    }
}
