//! Double-buffered E1.31 receiver state.
//!
//! The receiver owns two packet-sized buffers. One is committed and backs
//! every view handed to the caller; the other is the target of the next
//! datagram. A successful parse swaps the roles by flipping an index, so
//! the caller never observes a partially written packet and the swap is
//! O(1) and allocation-free.

use crate::packet::error::PacketError;
use crate::packet::{layout, parser};
use crate::Stats;

/// Expected-sequence tracker for a single source.
///
/// The first accepted packet primes the tracker; from then on any accepted
/// packet whose sequence number differs from the expected value counts as
/// a discontinuity. The expected value always becomes the received number
/// plus one, wrapping at 256.
#[derive(Debug, Default)]
struct SequenceTracker {
    expected: Option<u8>,
}

impl SequenceTracker {
    /// Records `sequence` and reports whether it was continuous.
    fn observe(&mut self, sequence: u8) -> bool {
        let continuous = match self.expected {
            Some(expected) => expected == sequence,
            None => true,
        };
        self.expected = Some(sequence.wrapping_add(1));
        continuous
    }
}

/// E1.31 receiver for a single universe/source.
///
/// Feed datagrams through [`Receiver::parse_packet`]; read the last
/// accepted packet through the accessors. Views returned by [`data`],
/// [`cid`] and [`source_name`] are valid until the next successful
/// `parse_packet` call.
///
/// [`data`]: Receiver::data
/// [`cid`]: Receiver::cid
/// [`source_name`]: Receiver::source_name
///
/// # Examples
/// ```
/// use e131rx_core::Receiver;
///
/// let receiver = Receiver::new();
/// assert_eq!(receiver.universe(), 0);
/// assert_eq!(receiver.channel_count(), 0);
/// assert!(receiver.data().is_empty());
/// ```
#[derive(Debug)]
pub struct Receiver {
    buffers: [[u8; layout::MAX_LEN]; 2],
    committed: usize,
    universe: u16,
    channel_count: u16,
    priority: u8,
    sequence_number: u8,
    options: u8,
    tracker: SequenceTracker,
    stats: Stats,
}

impl Default for Receiver {
    fn default() -> Self {
        Self::new()
    }
}

impl Receiver {
    pub fn new() -> Self {
        Self {
            buffers: [[0; layout::MAX_LEN]; 2],
            committed: 0,
            universe: 0,
            channel_count: 0,
            priority: 0,
            sequence_number: 0,
            options: 0,
            tracker: SequenceTracker::default(),
            stats: Stats::default(),
        }
    }

    /// Decodes and validates one datagram, committing it on success.
    ///
    /// An empty `datagram` means no packet was available this call and
    /// returns `Ok(0)` without touching any state. A rejected datagram
    /// bumps `packet_errors` and leaves the committed packet untouched.
    /// On success the working buffer becomes the committed one, the
    /// sequence tracker is updated (a discontinuity bumps
    /// `sequence_errors` but still accepts the packet), and the DMX
    /// channel count is returned.
    ///
    /// Datagrams longer than [`layout::MAX_LEN`] are truncated to the
    /// wire-format maximum before decoding; the layout is fixed-offset
    /// and the property-value count is bounds-checked, so trailing bytes
    /// never affect the result.
    pub fn parse_packet(&mut self, datagram: &[u8]) -> Result<u16, PacketError> {
        if datagram.is_empty() {
            return Ok(0);
        }

        let len = datagram.len().min(layout::MAX_LEN);
        let working = 1 - self.committed;
        self.buffers[working][..len].copy_from_slice(&datagram[..len]);

        let (universe, channel_count, priority, sequence_number, options) =
            match Self::check(&self.buffers[working][..len]) {
                Ok(fields) => fields,
                Err(err) => {
                    self.stats.packet_errors += 1;
                    return Err(err);
                }
            };

        self.committed = working;
        self.universe = universe;
        self.channel_count = channel_count;
        self.priority = priority;
        self.sequence_number = sequence_number;
        self.options = options;
        if !self.tracker.observe(sequence_number) {
            self.stats.sequence_errors += 1;
        }
        self.stats.num_packets += 1;
        Ok(channel_count)
    }

    fn check(payload: &[u8]) -> Result<(u16, u16, u8, u8, u8), PacketError> {
        let view = parser::decode(payload)?;
        parser::validate(&view)?;
        Ok((
            view.universe,
            view.channel_count(),
            view.priority,
            view.sequence_number,
            view.options,
        ))
    }

    /// Universe number of the last accepted packet (0 before the first).
    pub fn universe(&self) -> u16 {
        self.universe
    }

    /// DMX channel levels of the last accepted packet, channel 1 at
    /// index 0.
    pub fn data(&self) -> &[u8] {
        let start = layout::PROPERTY_VALUES_OFFSET + 1;
        &self.buffers[self.committed][start..start + self.channel_count as usize]
    }

    pub fn channel_count(&self) -> u16 {
        self.channel_count
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }

    pub fn sequence_number(&self) -> u8 {
        self.sequence_number
    }

    /// Frame layer options of the last accepted packet. Decoded but not
    /// acted upon; enforcing preview-data or stream-terminated semantics
    /// is the caller's concern.
    pub fn options(&self) -> u8 {
        self.options
    }

    /// Component identifier of the last accepted packet's source.
    pub fn cid(&self) -> &[u8] {
        &self.buffers[self.committed][layout::CID_RANGE]
    }

    /// Source name of the last accepted packet, NUL padding trimmed.
    pub fn source_name(&self) -> String {
        let bytes = &self.buffers[self.committed][layout::SOURCE_NAME_RANGE];
        String::from_utf8_lossy(bytes)
            .trim_end_matches('\0')
            .trim()
            .to_string()
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::SequenceTracker;

    #[test]
    fn tracker_first_packet_primes() {
        let mut tracker = SequenceTracker::default();
        assert!(tracker.observe(42));
        assert!(tracker.observe(43));
    }

    #[test]
    fn tracker_gap_is_discontinuous() {
        let mut tracker = SequenceTracker::default();
        assert!(tracker.observe(0));
        assert!(!tracker.observe(2));
        assert!(tracker.observe(3));
    }

    #[test]
    fn tracker_wraps_at_256() {
        let mut tracker = SequenceTracker::default();
        assert!(tracker.observe(255));
        assert!(tracker.observe(0));
    }
}
