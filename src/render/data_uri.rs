use base64::Engine as _;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::foundation::error::{PatternError, PatternResult};

pub const UTF8_PREFIX: &str = "data:image/svg+xml;utf8,";
pub const BASE64_PREFIX: &str = "data:image/svg+xml;base64,";

/// Everything except RFC 3986 unreserved characters is escaped, so the URI is safe inside
/// single- or double-quoted CSS `url()` and HTML attributes.
const SVG_URI_ESCAPES: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataUriEncoding {
    /// `data:image/svg+xml;utf8,` followed by the percent-encoded document.
    #[default]
    Utf8Percent,
    /// `data:image/svg+xml;base64,` followed by standard base64.
    Base64,
}

pub fn to_data_uri(svg: &str, encoding: DataUriEncoding) -> String {
    match encoding {
        DataUriEncoding::Utf8Percent => {
            let body = utf8_percent_encode(svg, SVG_URI_ESCAPES);
            let mut out = String::with_capacity(UTF8_PREFIX.len() + svg.len() * 2);
            out.push_str(UTF8_PREFIX);
            out.extend(body);
            out
        }
        DataUriEncoding::Base64 => {
            let body = base64::engine::general_purpose::STANDARD.encode(svg.as_bytes());
            format!("{BASE64_PREFIX}{body}")
        }
    }
}

/// Recover the SVG document from a URI produced by [`to_data_uri`].
pub fn decode_data_uri(uri: &str) -> PatternResult<String> {
    if let Some(body) = uri.strip_prefix(UTF8_PREFIX) {
        let text = percent_decode_str(body)
            .decode_utf8()
            .map_err(|e| PatternError::serde(format!("data URI payload is not UTF-8: {e}")))?;
        return Ok(text.into_owned());
    }
    if let Some(body) = uri.strip_prefix(BASE64_PREFIX) {
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(body)
            .map_err(|e| PatternError::serde(format!("data URI payload is not base64: {e}")))?;
        return String::from_utf8(bytes)
            .map_err(|e| PatternError::serde(format!("data URI payload is not UTF-8: {e}")));
    }
    Err(PatternError::validation(
        "not an image/svg+xml data URI".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="2" height="1"><rect fill="#0a0b0c"/></svg>"##;

    #[test]
    fn percent_encoding_escapes_markup_and_hash() {
        let uri = to_data_uri(DOC, DataUriEncoding::Utf8Percent);
        assert!(uri.starts_with(UTF8_PREFIX));
        let body = &uri[UTF8_PREFIX.len()..];
        for forbidden in ['<', '>', '"', '\'', '#', ' ', '(', ')'] {
            assert!(!body.contains(forbidden), "{forbidden:?} left unescaped");
        }
        assert!(body.contains("%230a0b0c"));
        assert_eq!(decode_data_uri(&uri).unwrap(), DOC);
    }

    #[test]
    fn non_ascii_is_utf8_percent_encoded() {
        let uri = to_data_uri("<t>é</t>", DataUriEncoding::Utf8Percent);
        assert!(uri.ends_with("%3Ct%3E%C3%A9%3C%2Ft%3E"));
    }

    #[test]
    fn base64_variant_decodes() {
        let uri = to_data_uri(DOC, DataUriEncoding::Base64);
        assert!(uri.starts_with(BASE64_PREFIX));
        assert_eq!(decode_data_uri(&uri).unwrap(), DOC);
    }

    #[test]
    fn decode_rejects_other_media_types() {
        assert!(decode_data_uri("data:image/png;base64,AAAA").is_err());
        assert!(decode_data_uri("data:image/svg+xml;base64,@@@").is_err());
    }
}
