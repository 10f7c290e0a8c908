//! Canonical byte encodings shared by the protocol and its serialized forms.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE_NO_PAD};
use base64::engine::DecodePaddingMode;
use base64::{DecodeError, Engine};
use num_bigint::BigUint;

/// Standard alphabet; writes no padding and accepts input with or without it.
const B64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Minimal big-endian encoding of `value`; zero encodes as a single `0x00`.
pub fn int_to_bytes(value: &BigUint) -> Vec<u8> {
    value.to_bytes_be()
}

/// Big-endian decoding; the empty slice decodes to zero.
pub fn bytes_to_int(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

pub fn b64_encode(data: impl AsRef<[u8]>) -> String {
    B64.encode(data)
}

pub fn b64_decode(data: &str) -> Result<Vec<u8>, DecodeError> {
    B64.decode(data)
}

pub(crate) fn b64url_encode(data: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(data)
}

pub(crate) fn b64url_decode(data: &str) -> Result<Vec<u8>, DecodeError> {
    URL_SAFE_NO_PAD.decode(data)
}

/// Turns an arbitrary message into text.
///
/// UTF-8 input is kept as is; anything else (such as the raw bytes of a
/// session token) is base64-encoded so no entropy is lost.
pub fn to_text(data: impl AsRef<[u8]>) -> String {
    let data = data.as_ref();
    match core::str::from_utf8(data) {
        Ok(text) => text.to_owned(),
        Err(_) => b64_encode(data),
    }
}

/// Serde adapter for byte fields: base64 text in human-readable formats,
/// raw bytes otherwise.
pub(crate) mod base64_bytes {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&super::b64_encode(bytes))
        } else {
            serializer.serialize_bytes(bytes)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        if deserializer.is_human_readable() {
            let text = String::deserialize(deserializer)?;
            super::b64_decode(&text).map_err(de::Error::custom)
        } else {
            Vec::<u8>::deserialize(deserializer)
        }
    }
}
