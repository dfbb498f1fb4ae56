use crate::error::{CodecError, Result};
use crate::wire::Wire;

/// Uppercase hex without separators, e.g. `C0A80101`.
pub fn to_hex(data: &[u8]) -> String {
    ::hex::encode_upper(data)
}

/// Hex dump of an item's wire form, or the reason it cannot be encoded.
pub(crate) fn wire_hex<T: Wire>(item: &T) -> String {
    match item.to_bytes() {
        Ok(bytes) => to_hex(&bytes),
        Err(err) => format!("unencodable: {}", err),
    }
}

/// Parses hex text, ignoring whitespace, `:` separators and a leading `0x`.
pub fn from_hex(s: &str) -> Result<Vec<u8>> {
    let s = s.trim();
    let s = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    let digits: String = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();

    ::hex::decode(&digits).map_err(|e| CodecError::invalid(format!("bad hex input: {}", e)))
}
