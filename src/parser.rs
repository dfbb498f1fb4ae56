use crate::error::{CodecError, Result};

/// Bounds-checked big-endian cursor over an input slice.
pub struct WireParser<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> WireParser<'a> {
    pub fn new(data: &'a [u8]) -> WireParser<'a> {
        WireParser {
            buf: data,
            offset: 0,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn next(&mut self) -> Result<u8> {
        let res = self.get(self.offset)?;
        self.offset += 1;

        Ok(res)
    }

    pub fn next_u16(&mut self) -> Result<u16> {
        let bytes = self.take(2)?;

        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn next_u32(&mut self) -> Result<u32> {
        let bytes = self.take(4)?;

        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Returns the next `len` bytes and advances past them.
    pub fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let res = self.range(self.offset, len)?;
        self.offset += len;

        Ok(res)
    }

    fn get(&self, n: usize) -> Result<u8> {
        match self.buf.get(n) {
            Some(byte) => Ok(*byte),
            None => Err(self.truncated(n + 1)),
        }
    }

    fn range(&self, start: usize, len: usize) -> Result<&'a [u8]> {
        let end = start
            .checked_add(len)
            .ok_or_else(|| CodecError::invalid("range overflows usize"))?;

        if end > self.buf.len() {
            return Err(self.truncated(end));
        }

        Ok(&self.buf[start..end])
    }

    fn truncated(&self, needed: usize) -> CodecError {
        CodecError::TruncatedInput {
            needed,
            available: self.buf.len(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reads_big_endian() {
        let data = [0x12, 0x34, 0xDE, 0xAD, 0xBE, 0xEF, 0x7F];
        let mut parser = WireParser::new(&data);

        assert_eq!(parser.next_u16(), Ok(0x1234));
        assert_eq!(parser.next_u32(), Ok(0xDEADBEEF));
        assert_eq!(parser.next(), Ok(0x7F));
        assert_eq!(parser.offset(), data.len());
    }

    #[test]
    fn stops_at_end_of_input() {
        let data = [0x00, 0x01, 0x02];
        let mut parser = WireParser::new(&data);

        assert_eq!(parser.next_u16(), Ok(1));
        assert_eq!(
            parser.next_u16(),
            Err(CodecError::TruncatedInput { needed: 4, available: 3 })
        );
        // a failed read does not move the cursor
        assert_eq!(parser.offset(), 2);
        assert_eq!(parser.take(1), Ok(&[0x02][..]));
        assert!(parser.next().is_err());
    }
}
