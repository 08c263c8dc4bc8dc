//! E1.31 (sACN) receiver core.
//!
//! This crate implements the receiving side of ANSI E1.31 data packets:
//! a byte-oriented decoder for the three-layer wire format (Root / Frame /
//! DMP), a validator with a closed error taxonomy, and a double-buffered
//! receiver that exposes the last accepted universe and DMX channel data.
//! Parsing is byte-oriented and side-effect free; all I/O is isolated in
//! the `source` module. Wire-format details are captured in
//! `packet::layout`, and safe reads live in `packet::reader`.
//!
//! Invariants:
//! - At any time exactly one packet buffer is committed and exposed; the
//!   other is working and never observed by the caller.
//! - A rejected datagram never disturbs the committed packet.
//! - Steady-state operation performs no heap allocation.
//!
//! Version française (résumé):
//! Cette crate fournit le cœur de réception E1.31 : décodeur d'octets
//! (layout/reader/parser), validation avec taxonomie d'erreurs fermée, et
//! récepteur à double tampon exposant l'univers et les canaux DMX du
//! dernier paquet valide. Les E/S restent dans `source`.
//!
//! # Examples
//! ```no_run
//! use e131rx_core::{DatagramSource, Receiver, UdpDatagramSource, E131_DEFAULT_PORT};
//!
//! let mut source = UdpDatagramSource::multicast(1, E131_DEFAULT_PORT)?;
//! let mut receiver = Receiver::new();
//! let mut buf = [0u8; e131rx_core::packet::layout::MAX_LEN];
//! if let Some(len) = source.try_receive(&mut buf)? {
//!     if receiver.parse_packet(&buf[..len]).is_ok() {
//!         println!("universe {}: {} channels", receiver.universe(), receiver.channel_count());
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::Serialize;

pub mod packet;
mod receiver;
mod source;

pub use packet::error::PacketError;
pub use receiver::Receiver;
pub use source::{DatagramSource, SourceError, UdpDatagramSource, E131_DEFAULT_PORT};

/// Running receiver counters.
///
/// Counters are monotonically increasing for the lifetime of a
/// [`Receiver`] and reset only when a new receiver is constructed.
/// A sequence discontinuity is an observability counter, not an error:
/// the packet is still accepted and exposed.
///
/// # Examples
/// ```
/// use e131rx_core::Stats;
///
/// let stats = Stats::default();
/// assert_eq!(stats.num_packets, 0);
/// assert_eq!(stats.packet_errors, 0);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Total packets accepted and committed.
    pub num_packets: u64,
    /// Sequence discontinuities observed on accepted packets.
    pub sequence_errors: u64,
    /// Datagrams rejected by decode or validation.
    pub packet_errors: u64,
}
