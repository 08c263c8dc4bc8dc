use super::error::PacketError;
use super::layout;
use super::reader::PacketReader;

/// Zero-copy view of a decoded E1.31 data packet.
///
/// Fields are surfaced as they appear on the wire (multi-byte integers
/// already converted from network order). Decoding checks sizes only;
/// identity checks live in [`validate`].
#[derive(Debug)]
pub struct PacketView<'a> {
    pub preamble_size: u16,
    pub postamble_size: u16,
    pub acn_id: &'a [u8],
    pub root_flength: u16,
    pub root_vector: u32,
    pub cid: &'a [u8],
    pub frame_flength: u16,
    pub frame_vector: u32,
    pub source_name: &'a [u8],
    pub priority: u8,
    pub sequence_number: u8,
    pub options: u8,
    pub universe: u16,
    pub dmp_flength: u16,
    pub dmp_vector: u8,
    pub address_type: u8,
    pub first_address: u16,
    pub address_increment: u16,
    pub property_value_count: u16,
    /// Start code slot followed by the channel levels.
    pub property_values: &'a [u8],
}

impl<'a> PacketView<'a> {
    /// DMX channel levels, channel 1 at index 0 (start code slot skipped).
    pub fn channel_data(&self) -> &'a [u8] {
        &self.property_values[1..]
    }

    pub fn channel_count(&self) -> u16 {
        self.property_value_count - 1
    }
}

/// Decodes `payload` at the fixed E1.31 offsets without copying.
///
/// Sizes are checked before every read: a payload shorter than the header,
/// one claiming zero property values, or one claiming more values than the
/// datagram (or the wire format) can carry is `PacketTooSmall`.
pub fn decode(payload: &[u8]) -> Result<PacketView<'_>, PacketError> {
    let reader = PacketReader::new(payload);
    reader.require_len(layout::MIN_LEN)?;

    let property_value_count = reader.read_u16_be(layout::PROPERTY_VALUE_COUNT_RANGE)?;
    if property_value_count == 0 || property_value_count as usize > layout::PROPERTY_VALUES_MAX {
        return Err(PacketError::PacketTooSmall {
            needed: layout::PROPERTY_VALUES_OFFSET + 1,
            actual: payload.len(),
        });
    }
    let values_end = layout::PROPERTY_VALUES_OFFSET + property_value_count as usize;
    reader.require_len(values_end)?;

    Ok(PacketView {
        preamble_size: reader.read_u16_be(layout::PREAMBLE_SIZE_RANGE)?,
        postamble_size: reader.read_u16_be(layout::POSTAMBLE_SIZE_RANGE)?,
        acn_id: reader.read_slice(layout::ACN_ID_RANGE)?,
        root_flength: reader.read_u16_be(layout::ROOT_FLENGTH_RANGE)?,
        root_vector: reader.read_u32_be(layout::ROOT_VECTOR_RANGE)?,
        cid: reader.read_slice(layout::CID_RANGE)?,
        frame_flength: reader.read_u16_be(layout::FRAME_FLENGTH_RANGE)?,
        frame_vector: reader.read_u32_be(layout::FRAME_VECTOR_RANGE)?,
        source_name: reader.read_slice(layout::SOURCE_NAME_RANGE)?,
        priority: reader.read_u8(layout::PRIORITY_OFFSET)?,
        sequence_number: reader.read_u8(layout::SEQUENCE_OFFSET)?,
        options: reader.read_u8(layout::OPTIONS_OFFSET)?,
        universe: reader.read_u16_be(layout::UNIVERSE_RANGE)?,
        dmp_flength: reader.read_u16_be(layout::DMP_FLENGTH_RANGE)?,
        dmp_vector: reader.read_u8(layout::DMP_VECTOR_OFFSET)?,
        address_type: reader.read_u8(layout::ADDRESS_TYPE_OFFSET)?,
        first_address: reader.read_u16_be(layout::FIRST_ADDRESS_RANGE)?,
        address_increment: reader.read_u16_be(layout::ADDRESS_INCREMENT_RANGE)?,
        property_value_count,
        property_values: reader.read_slice(layout::PROPERTY_VALUES_OFFSET..values_end)?,
    })
}

/// Checks the packet identity fields in a fixed order, first failure wins.
///
/// Only the ACN packet identifier and the three layer vectors are checked.
/// Priority, options, CID and source name are accepted as-is.
pub fn validate(view: &PacketView<'_>) -> Result<(), PacketError> {
    if view.acn_id != layout::ACN_ID {
        return Err(PacketError::InvalidAcnIdentifier);
    }
    if view.root_vector != layout::ROOT_VECTOR_DATA {
        return Err(PacketError::InvalidRootVector {
            value: view.root_vector,
        });
    }
    if view.frame_vector != layout::FRAME_VECTOR_DATA {
        return Err(PacketError::InvalidFrameVector {
            value: view.frame_vector,
        });
    }
    if view.dmp_vector != layout::DMP_VECTOR_SET_PROPERTY {
        return Err(PacketError::InvalidDmpVector {
            value: view.dmp_vector,
        });
    }
    Ok(())
}
