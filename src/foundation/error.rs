pub type PatternResult<T> = Result<T, PatternError>;

/// Failures outside the infallible [`crate::generate_pattern`] path.
///
/// Generation itself cannot fail; these come from loading a [`crate::PatternConfig`],
/// decoding or rasterizing a finished document, and the [`crate::cover`] helpers.
#[derive(thiserror::Error, Debug)]
pub enum PatternError {
    /// Rejected input: a config range, palette or fallback seed, a zero canvas or bad raster
    /// scale, a malformed hex color, or a URI that is not an SVG data URI.
    #[error("validation error: {0}")]
    Validation(String),

    /// A pattern could not be produced or rasterized, including a caught panic in
    /// [`crate::cover_background_with`].
    #[error("generation error: {0}")]
    Generation(String),

    /// Config JSON that does not parse, or a data URI payload that is not UTF-8 / base64.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Config file IO and usvg/resvg/image failures, with context attached.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PatternError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            PatternError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            PatternError::generation("x")
                .to_string()
                .contains("generation error:")
        );
        assert!(
            PatternError::serde("x")
                .to_string()
                .contains("serialization error:")
        );
    }

    #[test]
    fn config_io_failure_keeps_context_and_source() {
        let err: PatternError = anyhow::Error::new(std::io::Error::other("disk gone"))
            .context("read pattern config 'cover.json'")
            .into();
        assert!(matches!(err, PatternError::Other(_)));
        assert_eq!(err.to_string(), "read pattern config 'cover.json'");
        let PatternError::Other(inner) = &err else {
            unreachable!()
        };
        assert!(inner.root_cause().to_string().contains("disk gone"));
    }
}
