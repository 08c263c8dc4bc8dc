pub const PREAMBLE_SIZE_RANGE: std::ops::Range<usize> = 0..2;
pub const POSTAMBLE_SIZE_RANGE: std::ops::Range<usize> = 2..4;
pub const ACN_ID_RANGE: std::ops::Range<usize> = 4..16;
pub const ROOT_FLENGTH_RANGE: std::ops::Range<usize> = 16..18;
pub const ROOT_VECTOR_RANGE: std::ops::Range<usize> = 18..22;
pub const CID_RANGE: std::ops::Range<usize> = 22..38;

pub const FRAME_FLENGTH_RANGE: std::ops::Range<usize> = 38..40;
pub const FRAME_VECTOR_RANGE: std::ops::Range<usize> = 40..44;
pub const SOURCE_NAME_RANGE: std::ops::Range<usize> = 44..108;
pub const PRIORITY_OFFSET: usize = 108;
pub const RESERVED_RANGE: std::ops::Range<usize> = 109..111;
pub const SEQUENCE_OFFSET: usize = 111;
pub const OPTIONS_OFFSET: usize = 112;
pub const UNIVERSE_RANGE: std::ops::Range<usize> = 113..115;

pub const DMP_FLENGTH_RANGE: std::ops::Range<usize> = 115..117;
pub const DMP_VECTOR_OFFSET: usize = 117;
pub const ADDRESS_TYPE_OFFSET: usize = 118;
pub const FIRST_ADDRESS_RANGE: std::ops::Range<usize> = 119..121;
pub const ADDRESS_INCREMENT_RANGE: std::ops::Range<usize> = 121..123;
pub const PROPERTY_VALUE_COUNT_RANGE: std::ops::Range<usize> = 123..125;
pub const PROPERTY_VALUES_OFFSET: usize = 125;

pub const ACN_ID: &[u8; 12] = b"ASC-E1.17\0\0\0";
pub const ROOT_VECTOR_DATA: u32 = 0x0000_0004;
pub const FRAME_VECTOR_DATA: u32 = 0x0000_0002;
pub const DMP_VECTOR_SET_PROPERTY: u8 = 0x02;

pub const DMX_MAX_SLOTS: usize = 512;
/// Start code slot plus up to 512 channel levels.
pub const PROPERTY_VALUES_MAX: usize = DMX_MAX_SLOTS + 1;

/// Header through the property-value-count field.
pub const MIN_LEN: usize = PROPERTY_VALUES_OFFSET;
pub const MAX_LEN: usize = PROPERTY_VALUES_OFFSET + PROPERTY_VALUES_MAX;
