use thiserror::Error;

/// Errors returned by packet decoding and validation.
///
/// Every variant is non-fatal: the offending datagram is dropped, the
/// receiver's `packet_errors` counter is bumped, and the previously
/// accepted packet stays visible. There is no retry path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PacketError {
    #[error("datagram too small: need {needed} bytes, got {actual}")]
    PacketTooSmall { needed: usize, actual: usize },
    #[error("invalid ACN packet identifier")]
    InvalidAcnIdentifier,
    #[error("invalid root layer vector: {value}")]
    InvalidRootVector { value: u32 },
    #[error("invalid framing layer vector: {value}")]
    InvalidFrameVector { value: u32 },
    #[error("invalid DMP layer vector: {value}")]
    InvalidDmpVector { value: u8 },
}
