use super::error::PacketError;

pub struct PacketReader<'a> {
    payload: &'a [u8],
}

impl<'a> PacketReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), PacketError> {
        if self.payload.len() < needed {
            return Err(PacketError::PacketTooSmall {
                needed,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, PacketError> {
        self.payload
            .get(offset)
            .copied()
            .ok_or(PacketError::PacketTooSmall {
                needed: offset + 1,
                actual: self.payload.len(),
            })
    }

    pub fn read_u16_be(&self, range: std::ops::Range<usize>) -> Result<u16, PacketError> {
        let bytes = self.read_slice(range)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32_be(&self, range: std::ops::Range<usize>) -> Result<u32, PacketError> {
        let bytes = self.read_slice(range)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], PacketError> {
        self.payload
            .get(range.clone())
            .ok_or(PacketError::PacketTooSmall {
                needed: range.end,
                actual: self.payload.len(),
            })
    }
}
