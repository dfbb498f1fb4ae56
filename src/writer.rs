use crate::error::{CodecError, Result};

/// Bounds-checked big-endian cursor over a caller-provided output slice.
pub struct WireWriter<'a> {
    buf: &'a mut [u8],
    offset: usize,
}

impl<'a> WireWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> WireWriter<'a> {
        WireWriter { buf, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn write_byte(&mut self, value: u8) -> Result<()> {
        self.write_bytes(&[value])
    }

    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        self.write_bytes(&value.to_be_bytes())
    }

    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        self.write_bytes(&value.to_be_bytes())
    }

    pub fn write_bytes(&mut self, values: &[u8]) -> Result<()> {
        let end = self.offset + values.len();
        if end > self.buf.len() {
            return Err(CodecError::BufferTooSmall {
                needed: end,
                available: self.buf.len(),
            });
        }

        self.buf[self.offset..end].copy_from_slice(values);
        self.offset = end;

        Ok(())
    }

    /// Hands the unwritten tail to a nested encoder and advances past
    /// whatever it reports as written.
    pub fn write_with<F>(&mut self, f: F) -> Result<usize>
    where
        F: FnOnce(&mut [u8]) -> Result<usize>,
    {
        let n = f(&mut self.buf[self.offset..])?;
        self.offset += n;

        Ok(n)
    }
}
