// RSA Key File Format
// Text serialization of keys: one `name=decimal` field per line
//
//   n=3233
//   e=17
//   d=2753
//
// Public files carry n and e, private files carry n and d, optionally e.
// Blank lines and lines starting with '#' are ignored.

use super::bigint::RsaBigInt;
use super::codec::parse_decimal;
use super::error::{Result, RsaError};
use super::keygen::RsaKey;

/// Serialize the public half of `key`
pub fn write_public(key: &RsaKey) -> Result<String> {
    let e = key.e().ok_or(RsaError::NotAPublicKey)?;
    Ok(format!("n={}\ne={}\n", key.n(), e))
}

/// Serialize a private key: n, d, then e when the key knows it
pub fn write_private(key: &RsaKey) -> Result<String> {
    let d = key.d().ok_or(RsaError::NotAPrivateKey)?;

    Ok(match key.e() {
        Some(e) => format!("n={}\nd={}\ne={}\n", key.n(), d, e),
        None => format!("n={}\nd={}\n", key.n(), d),
    })
}

/// Parse a public key; a `d` field, if present, is dropped
pub fn read_public(text: &str) -> Result<RsaKey> {
    let fields = KeyFields::parse(text)?;
    let n = fields.n.ok_or_else(|| RsaError::malformed("missing field 'n'"))?;
    let e = fields.e.ok_or_else(|| RsaError::malformed("missing field 'e'"))?;
    RsaKey::new_public(n, e).map_err(as_malformed)
}

/// Parse a private key
pub fn read_private(text: &str) -> Result<RsaKey> {
    let fields = KeyFields::parse(text)?;
    let n = fields.n.ok_or_else(|| RsaError::malformed("missing field 'n'"))?;
    let d = fields.d.ok_or_else(|| RsaError::malformed("missing field 'd'"))?;
    RsaKey::new_private(n, d, fields.e).map_err(as_malformed)
}

#[derive(Default)]
struct KeyFields {
    n: Option<RsaBigInt>,
    e: Option<RsaBigInt>,
    d: Option<RsaBigInt>,
}

impl KeyFields {
    fn parse(text: &str) -> Result<Self> {
        let mut fields = KeyFields::default();

        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (name, value) = line.split_once('=').ok_or_else(|| {
                RsaError::malformed(format!("line {}: expected 'name=value'", line_no))
            })?;
            let name = name.trim();
            let value = parse_decimal(value.trim()).ok_or_else(|| {
                RsaError::malformed(format!(
                    "line {}: '{}' is not a non-negative decimal integer",
                    line_no, name
                ))
            })?;

            let slot = match name {
                "n" => &mut fields.n,
                "e" => &mut fields.e,
                "d" => &mut fields.d,
                other => {
                    return Err(RsaError::malformed(format!(
                        "line {}: unknown field '{}'",
                        line_no, other
                    )))
                }
            };
            if slot.replace(value).is_some() {
                return Err(RsaError::malformed(format!(
                    "line {}: duplicate field '{}'",
                    line_no, name
                )));
            }
        }

        Ok(fields)
    }
}

fn as_malformed(err: RsaError) -> RsaError {
    match err {
        RsaError::InvalidParameter(reason) => RsaError::MalformedKeyFile(reason),
        other => other,
    }
}
