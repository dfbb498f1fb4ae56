//! Conversion between dotted domain names and the length-prefixed label
//! sequence used on the wire.
//!
//! `www.baidu.com` becomes `03 www 05 baidu 03 com 00`. Compression pointers
//! are neither written nor followed: a length byte with either of its top two
//! bits set is rejected with [`CodecError::UnsupportedLabel`].

use crate::error::{CodecError, Result};
use crate::parser::WireParser;
use crate::wire::check_capacity;
use crate::writer::WireWriter;

pub const MAX_LABEL_LEN: usize = 63;

const LABEL_TYPE_MASK: u8 = 0xC0;

fn split_labels(name: &str) -> Result<Vec<&str>> {
    let name = name.strip_suffix('.').unwrap_or(name);
    if name.is_empty() {
        return Ok(Vec::new());
    }

    let mut res = Vec::new();
    for label in name.split('.') {
        if label.is_empty() {
            return Err(CodecError::invalid(format!("empty label in name {:?}", name)));
        }

        if label.len() > MAX_LABEL_LEN {
            return Err(CodecError::invalid(format!(
                "label {:?} exceeds {} byte limit",
                label, MAX_LABEL_LEN
            )));
        }

        res.push(label);
    }

    Ok(res)
}

/// Number of bytes `name` occupies once encoded, terminator included.
pub fn encoded_size(name: &str) -> Result<usize> {
    let labels = split_labels(name)?;

    Ok(labels.iter().map(|label| label.len() + 1).sum::<usize>() + 1)
}

pub fn encode_into(name: &str, buf: &mut [u8]) -> Result<usize> {
    let labels = split_labels(name)?;
    let needed = labels.iter().map(|label| label.len() + 1).sum::<usize>() + 1;
    check_capacity(needed, buf.len())?;

    let mut writer = WireWriter::new(buf);
    for label in labels {
        writer.write_byte(label.len() as u8)?;
        writer.write_bytes(label.as_bytes())?;
    }
    writer.write_byte(0x00)?;

    Ok(writer.offset())
}

pub fn encode(name: &str) -> Result<Vec<u8>> {
    let mut res = vec![0u8; encoded_size(name)?];
    let n = encode_into(name, &mut res)?;
    res.truncate(n);

    Ok(res)
}

/// Scans the label sequence at the start of `data` and returns its length,
/// terminator included.
pub fn encoded_len(data: &[u8]) -> Result<usize> {
    let mut parser = WireParser::new(data);

    loop {
        let offset = parser.offset();
        let len = parser.next()?;

        if len & LABEL_TYPE_MASK != 0 {
            return Err(CodecError::UnsupportedLabel { offset, value: len });
        }

        if len == 0 {
            break;
        }

        parser.take(len as usize)?;
    }

    Ok(parser.offset())
}

pub fn decode(data: &[u8]) -> Result<String> {
    let mut res = String::new();
    let mut parser = WireParser::new(data);

    loop {
        let offset = parser.offset();
        let len = parser.next()?;

        if len & LABEL_TYPE_MASK != 0 {
            return Err(CodecError::UnsupportedLabel { offset, value: len });
        }

        if len == 0 {
            break;
        }

        if !res.is_empty() {
            res.push('.');
        }

        let bytes = parser.take(len as usize)?;
        res.push_str(&String::from_utf8_lossy(bytes));
    }

    Ok(res)
}

/// Renders each length byte in decimal followed by its label, e.g.
/// `3www5baidu3com`. Stops quietly at malformed input.
pub fn debug_string(data: &[u8]) -> String {
    let mut res = String::new();
    let mut pos = 0;

    while let Some(&len) = data.get(pos) {
        if len == 0 || len & LABEL_TYPE_MASK != 0 {
            break;
        }

        let start = pos + 1;
        let end = (start + len as usize).min(data.len());

        res.push_str(&len.to_string());
        res.push_str(&String::from_utf8_lossy(&data[start..end]));

        pos = end;
    }

    res
}

#[cfg(test)]
mod test {
    use super::*;

    const BAIDU: [u8; 15] = [
        0x03, b'w', b'w', b'w', 0x05, b'b', b'a', b'i', b'd', b'u', 0x03, b'c', b'o', b'm', 0x00,
    ];

    #[test]
    fn encodes_labels() {
        assert_eq!(encode("www.baidu.com").unwrap(), BAIDU.to_vec());
        assert_eq!(encode("www.baidu.com.").unwrap(), BAIDU.to_vec());
        assert_eq!(encoded_size("www.baidu.com"), Ok(15));
    }

    #[test]
    fn root_is_single_zero() {
        assert_eq!(encode("").unwrap(), vec![0]);
        assert_eq!(encode(".").unwrap(), vec![0]);
        assert_eq!(decode(&[0]).unwrap(), "");
    }

    #[test]
    fn decodes_labels() {
        assert_eq!(decode(&BAIDU).unwrap(), "www.baidu.com");
        assert_eq!(encoded_len(&BAIDU), Ok(15));

        // trailing bytes after the terminator are not part of the name
        let mut data = BAIDU.to_vec();
        data.extend_from_slice(&[0x00, 0x01]);
        assert_eq!(decode(&data).unwrap(), "www.baidu.com");
        assert_eq!(encoded_len(&data), Ok(15));
    }

    #[test]
    fn round_trips() {
        let long = "a".repeat(MAX_LABEL_LEN);
        let names = [
            "a",
            "example.com",
            "a.looooooooooong.example.com",
            "xn--bcher-kva.example",
            long.as_str(),
        ];

        for name in names {
            assert_eq!(decode(&encode(name).unwrap()).unwrap(), name);
        }
    }

    #[test]
    fn rejects_bad_names() {
        let long = format!("{}.com", "a".repeat(MAX_LABEL_LEN + 1));

        assert!(matches!(encode(&long), Err(CodecError::InvalidArgument(_))));
        assert!(matches!(encode("a..b"), Err(CodecError::InvalidArgument(_))));
        assert!(matches!(encode(".a"), Err(CodecError::InvalidArgument(_))));
    }

    #[test]
    fn encode_into_checks_capacity() {
        let mut buf = [0u8; 15];
        assert_eq!(encode_into("www.baidu.com", &mut buf), Ok(15));
        assert_eq!(buf, BAIDU);

        let mut short = [0u8; 14];
        assert_eq!(
            encode_into("www.baidu.com", &mut short),
            Err(CodecError::BufferTooSmall { needed: 15, available: 14 })
        );
    }

    #[test]
    fn rejects_truncated_labels() {
        // missing terminator
        assert!(matches!(
            decode(&BAIDU[..14]),
            Err(CodecError::TruncatedInput { .. })
        ));
        // label runs past the end
        assert!(matches!(
            decode(&[0x05, b'a', b'b']),
            Err(CodecError::TruncatedInput { .. })
        ));
        assert!(matches!(encoded_len(&[]), Err(CodecError::TruncatedInput { .. })));
    }

    #[test]
    fn rejects_compression_pointers() {
        let data = [0x03, b'w', b'w', b'w', 0xC0, 0x0C];

        assert_eq!(
            decode(&data),
            Err(CodecError::UnsupportedLabel { offset: 4, value: 0xC0 })
        );
        assert_eq!(
            encoded_len(&[0x40]),
            Err(CodecError::UnsupportedLabel { offset: 0, value: 0x40 })
        );
    }

    #[test]
    fn renders_debug_string() {
        assert_eq!(debug_string(&BAIDU), "3www5baidu3com");
        assert_eq!(debug_string(&[0]), "");
        assert_eq!(debug_string(&[0x03, b'w', b'w']), "3ww");
    }
}
