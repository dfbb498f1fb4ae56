use crate::error::{CodecError, Result};

/// Fixed rules for turning an entity into bytes and back.
///
/// `serialize` and `deserialize` report the number of bytes written or
/// consumed. A failed `serialize` leaves the entity untouched; a failed
/// `deserialize` leaves it cleared.
pub trait Wire {
    /// Exact number of bytes `serialize` will produce.
    fn wire_len(&self) -> usize;

    fn serialize(&self, buf: &mut [u8]) -> Result<usize>;

    fn deserialize(&mut self, data: &[u8]) -> Result<usize>;

    fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; self.wire_len()];
        let n = self.serialize(&mut buf)?;
        buf.truncate(n);

        Ok(buf)
    }
}

pub(crate) fn check_capacity(needed: usize, available: usize) -> Result<()> {
    if available < needed {
        return Err(CodecError::BufferTooSmall { needed, available });
    }

    Ok(())
}

/// Copies `data` into a freshly reserved buffer, reporting allocation
/// failure instead of aborting.
pub(crate) fn owned_copy(data: &[u8]) -> Result<Vec<u8>> {
    let mut res = Vec::new();
    res.try_reserve_exact(data.len())
        .map_err(|_| CodecError::AllocationFailure(data.len()))?;
    res.extend_from_slice(data);

    Ok(res)
}
