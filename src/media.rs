//! Image payload preparation for inline attachments.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Attached images always go up as JPEG, whatever the data URI claimed.
pub const INLINE_IMAGE_MIME: &str = "image/jpeg";

/// Strips a `data:*;base64,` prefix, returning the bare base64 payload.
///
/// Everything up to and including the first comma is dropped; a string
/// without a comma is already bare and passes through unchanged.
pub fn strip_data_uri(image: &str) -> &str {
    match image.split_once(',') {
        Some((_, payload)) => payload,
        None => image,
    }
}

/// Base64-encodes raw JPEG bytes for use as an inline part.
pub fn inline_jpeg_from_bytes(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_a_jpeg_data_uri() {
        assert_eq!(strip_data_uri("data:image/jpeg;base64,QUJD"), "QUJD");
    }

    #[test]
    fn strips_any_data_uri_prefix() {
        // Camera captures occasionally arrive as PNG URIs; the payload is
        // taken as-is either way.
        assert_eq!(strip_data_uri("data:image/png;base64,QUJD"), "QUJD");
    }

    #[test]
    fn bare_base64_passes_through() {
        assert_eq!(strip_data_uri("QUJDREVG"), "QUJDREVG");
    }

    #[test]
    fn only_the_first_comma_splits() {
        assert_eq!(strip_data_uri("data:;base64,abc,def"), "abc,def");
    }

    #[test]
    fn encodes_raw_bytes() {
        assert_eq!(inline_jpeg_from_bytes(b"ABC"), "QUJD");
        assert_eq!(inline_jpeg_from_bytes(&[]), "");
    }
}
