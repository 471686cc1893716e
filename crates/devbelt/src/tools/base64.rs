//! Base64 conversion with UTF-8 text on both sides.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::DecodePaddingMode;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};

use crate::error::Result;

/// Standard-alphabet engine that accepts padded and unpadded input
/// alike.
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode text as padded standard-alphabet Base64.
#[must_use]
pub fn encode(input: &str) -> String {
    STANDARD.encode(input)
}

/// Decode a Base64 string into UTF-8 text.
///
/// ASCII whitespace is ignored and padding is optional. Invalid
/// symbols and non-UTF-8 payloads surface as distinct errors.
pub fn decode(input: &str) -> Result<String> {
    let compact: String = input
        .chars()
        .filter(|ch| !ch.is_ascii_whitespace())
        .collect();
    let bytes = FORGIVING.decode(compact)?;
    Ok(String::from_utf8(bytes)?)
}
