//! HMAC-SHA256 signature generation for Biscoint API authentication.
//!
//! Biscoint private endpoints require a signature computed as:
//! ```text
//! hex(HMAC-SHA256(base64(canonical_json(params)), api_secret))
//! ```
//!
//! `canonical_json` is compact JSON with object keys sorted and DEL plus every
//! non-ASCII character escaped as `\uXXXX`. The request path travels inside
//! `params` under the `request` key. The signature is sent in the
//! `BSCNT-SIGN` header.

use std::io;

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use serde::Serialize;
use serde_json::ser::Formatter;
use sha2::Sha256;

use crate::auth::Credentials;
use crate::error::BiscointError;
use crate::rest::Params;

type HmacSha256 = Hmac<Sha256>;

/// Compact JSON formatter that escapes non-ASCII characters.
///
/// Separators are `,` and `:` with no padding; DEL and every code point above
/// it are written as lowercase `\uXXXX` escapes, using UTF-16 surrogate pairs
/// outside the basic multilingual plane. Control characters below U+0020 are
/// already escaped by serde_json.
struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            if ch.is_ascii() && ch != '\u{7f}' {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..idx])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = idx + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}

/// Serialize a value to the canonical JSON text used for signing.
///
/// Map keys are emitted in the order the value serializes them; pass a
/// sorted map (such as [`Params::signing_view`]) for a canonical result.
pub fn canonical_json<T>(value: &T) -> Result<String, BiscointError>
where
    T: Serialize + ?Sized,
{
    let mut buf = Vec::with_capacity(128);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, AsciiFormatter);
    value.serialize(&mut serializer)?;
    // Every non-ASCII character has been escaped, so the buffer is ASCII.
    String::from_utf8(buf).map_err(|e| BiscointError::Encoding(e.to_string()))
}

/// Sign an already-canonicalized JSON payload.
///
/// Returns the lowercase hex HMAC-SHA256 of the base64-encoded payload.
pub fn sign_payload(credentials: &Credentials, payload: &str) -> Result<String, BiscointError> {
    let encoded = BASE64.encode(payload.as_bytes());

    let mut hmac = HmacSha256::new_from_slice(credentials.expose_secret().as_bytes())
        .map_err(|e| BiscointError::Encoding(format!("Invalid HMAC key: {e}")))?;
    hmac.update(encoded.as_bytes());

    Ok(hex::encode(hmac.finalize().into_bytes()))
}

/// Sign a request's parameters for Biscoint's private API.
///
/// `params` must already have null values removed and the `request` path
/// key injected. Booleans are signed as native JSON booleans, before any
/// transport normalization.
///
/// # Example
///
/// ```rust
/// use biscoint_api_client::auth::{Credentials, sign_request};
/// use biscoint_api_client::rest::Params;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("api_key", "test_secret");
/// let params = Params::new().with("request", "v1/balance");
/// let signature = sign_request(&credentials, &params)?;
/// assert_eq!(
///     signature,
///     "118f5f2cd67c4a410bdda8682254a39f7d8e941a07315fd6c341624fd91064aa"
/// );
/// # Ok(())
/// # }
/// ```
pub fn sign_request(credentials: &Credentials, params: &Params) -> Result<String, BiscointError> {
    let payload = canonical_json(&params.signing_view())?;
    sign_payload(credentials, &payload)
}
