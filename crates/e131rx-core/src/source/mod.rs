//! Datagram sources feeding the receiver.
//!
//! The receiver core never opens a network connection itself; it consumes
//! whatever bytes a [`DatagramSource`] hands it. This module holds the
//! source contract and the standard UDP implementation. All I/O lives
//! here, keeping the packet and receiver modules side-effect free.

mod udp;

pub use udp::{multicast_group, UdpDatagramSource, E131_DEFAULT_PORT};

use thiserror::Error;

/// Supplies at most one reassembled UDP payload per call.
pub trait DatagramSource {
    /// Writes the next datagram into `buf` and returns its length, or
    /// `Ok(None)` when no datagram is currently available.
    fn try_receive(&mut self, buf: &mut [u8]) -> Result<Option<usize>, SourceError>;
}

/// Errors raised by datagram transport, distinct from the packet
/// taxonomy: a transport failure never counts as a packet error.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("universe {universe} has no multicast group")]
    InvalidUniverse { universe: u16 },
}
