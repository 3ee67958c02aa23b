// Message Codec
// Lossless mapping between byte strings and big integers

use super::bigint::{from_bytes, to_bytes, RsaBigInt};
use super::error::Result;

/// Interpret `bytes` as a big-endian unsigned integer.
///
/// Leading zero bytes are not recorded, so only strings whose first byte is
/// non-zero survive a round trip through [`decode`].
pub fn encode(bytes: &[u8]) -> RsaBigInt {
    from_bytes(bytes)
}

/// Minimal big-endian bytes of `m`, with no leading zero byte.
pub fn decode(m: &RsaBigInt) -> Vec<u8> {
    to_bytes(m)
}

/// Encode a UTF-8 string
pub fn encode_str(s: &str) -> RsaBigInt {
    encode(s.as_bytes())
}

/// Decode to a string, failing if the bytes are not UTF-8
pub fn decode_utf8(m: &RsaBigInt) -> Result<String> {
    Ok(String::from_utf8(decode(m))?)
}

/// Parse a canonical decimal integer.
///
/// Accepts ASCII digits only: no sign, no separators and no leading zeros
/// other than `"0"` itself.
pub fn parse_decimal(s: &str) -> Option<RsaBigInt> {
    let bytes = s.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    RsaBigInt::parse_bytes(bytes, 10)
}
