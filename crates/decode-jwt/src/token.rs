use base64::engine::{GeneralPurpose, general_purpose};
use base64::{Engine, alphabet};
use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::error::{DecodeError, Result, Segment};

/// Header, payload and signature.
pub const SEGMENT_COUNT: usize = 3;

/// Unpadded base64url that tolerates non-zero bits in the final symbol.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    general_purpose::NO_PAD.with_decode_allow_trailing_bits(true),
);

/// A JSON object with keys kept in input order.
pub type Claims = IndexMap<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub struct DecodedToken {
    pub header: Claims,
    pub payload: Claims,
}

/// Decodes one base64url segment. Padding characters are rejected.
pub fn decode_segment(segment: Segment, raw: &str) -> Result<Vec<u8>> {
    URL_SAFE_LENIENT
        .decode(raw)
        .map_err(|source| DecodeError::Base64 { segment, source })
}

pub fn parse_segment(segment: Segment, bytes: &[u8]) -> Result<Claims> {
    serde_json::from_slice(bytes).map_err(|source| DecodeError::Json { segment, source })
}

/// Splits `token` into its three segments and decodes the first two.
///
/// Both segments are base64-decoded before either is parsed, and the first
/// failure stops processing. The signature is never inspected.
pub fn decode_token(token: &str) -> Result<DecodedToken> {
    let parts: Vec<&str> = token.split('.').collect();
    let [header, payload, _signature] = parts.as_slice() else {
        return Err(DecodeError::Format {
            expected: SEGMENT_COUNT,
            found: parts.len(),
        });
    };

    let header_bytes = decode_segment(Segment::Header, header)?;
    let payload_bytes = decode_segment(Segment::Payload, payload)?;
    debug!(
        header_len = header_bytes.len(),
        payload_len = payload_bytes.len(),
        "decoded token segments"
    );

    let header = parse_segment(Segment::Header, &header_bytes)?;
    let payload = parse_segment(Segment::Payload, &payload_bytes)?;

    Ok(DecodedToken { header, payload })
}

/// Renders the payload as JSON indented by two spaces.
pub fn render_payload(token: &DecodedToken) -> Result<String> {
    serde_json::to_string_pretty(&token.payload).map_err(DecodeError::Render)
}
