use e131rx_core::packet::layout;
use e131rx_core::{PacketError, Receiver};

/// Encodes a valid E1.31 data packet for `universe` carrying `channels`.
fn packet(universe: u16, sequence: u8, channels: &[u8]) -> Vec<u8> {
    assert!(channels.len() <= layout::DMX_MAX_SLOTS);
    let count = channels.len() + 1;
    let mut payload = vec![0u8; layout::PROPERTY_VALUES_OFFSET + count];

    payload[layout::PREAMBLE_SIZE_RANGE].copy_from_slice(&0x0010u16.to_be_bytes());
    payload[layout::ACN_ID_RANGE].copy_from_slice(layout::ACN_ID);
    payload[layout::ROOT_VECTOR_RANGE].copy_from_slice(&layout::ROOT_VECTOR_DATA.to_be_bytes());
    payload[layout::CID_RANGE].copy_from_slice(&[0xab; 16]);
    payload[layout::FRAME_VECTOR_RANGE].copy_from_slice(&layout::FRAME_VECTOR_DATA.to_be_bytes());
    payload[layout::SOURCE_NAME_RANGE.start..layout::SOURCE_NAME_RANGE.start + 4]
        .copy_from_slice(b"test");
    payload[layout::PRIORITY_OFFSET] = 100;
    payload[layout::SEQUENCE_OFFSET] = sequence;
    payload[layout::UNIVERSE_RANGE].copy_from_slice(&universe.to_be_bytes());
    payload[layout::DMP_VECTOR_OFFSET] = layout::DMP_VECTOR_SET_PROPERTY;
    payload[layout::PROPERTY_VALUE_COUNT_RANGE].copy_from_slice(&(count as u16).to_be_bytes());
    payload[layout::PROPERTY_VALUES_OFFSET + 1..].copy_from_slice(channels);
    payload
}

#[test]
fn accepts_valid_packet_and_exposes_view() {
    let mut receiver = Receiver::new();
    let channels = [1u8, 2, 3, 4, 5];
    let count = receiver.parse_packet(&packet(12, 0, &channels)).unwrap();

    assert_eq!(count, 5);
    assert_eq!(receiver.universe(), 12);
    assert_eq!(receiver.channel_count(), 5);
    assert_eq!(receiver.data(), &channels);
    assert_eq!(receiver.priority(), 100);
    assert_eq!(receiver.cid(), &[0xab; 16]);
    assert_eq!(receiver.source_name(), "test");
    assert_eq!(receiver.stats().num_packets, 1);
    assert_eq!(receiver.stats().packet_errors, 0);
}

#[test]
fn round_trips_universe_and_channel_data() {
    let mut receiver = Receiver::new();
    let channels: Vec<u8> = (0..=255).chain(0..=255).map(|v| v as u8).collect();
    assert_eq!(channels.len(), layout::DMX_MAX_SLOTS);

    let count = receiver
        .parse_packet(&packet(63999, 0, &channels))
        .unwrap();
    assert_eq!(count as usize, layout::DMX_MAX_SLOTS);
    assert_eq!(receiver.universe(), 63999);
    assert_eq!(receiver.data(), channels.as_slice());
}

#[test]
fn empty_datagram_is_not_an_error() {
    let mut receiver = Receiver::new();
    assert_eq!(receiver.parse_packet(&[]).unwrap(), 0);
    assert_eq!(receiver.stats().num_packets, 0);
    assert_eq!(receiver.stats().packet_errors, 0);
}

#[test]
fn rejected_datagram_preserves_committed_view() {
    let mut receiver = Receiver::new();
    let channels_a = [9u8, 8, 7];
    receiver.parse_packet(&packet(5, 0, &channels_a)).unwrap();

    let mut bad_acn = packet(6, 1, &[0xff; 3]);
    bad_acn[layout::ACN_ID_RANGE.start] ^= 0xff;
    let mut bad_root = packet(6, 1, &[0xff; 3]);
    bad_root[layout::ROOT_VECTOR_RANGE].copy_from_slice(&7u32.to_be_bytes());
    let mut bad_frame = packet(6, 1, &[0xff; 3]);
    bad_frame[layout::FRAME_VECTOR_RANGE].copy_from_slice(&7u32.to_be_bytes());
    let mut bad_dmp = packet(6, 1, &[0xff; 3]);
    bad_dmp[layout::DMP_VECTOR_OFFSET] = 0x03;

    assert_eq!(
        receiver.parse_packet(&bad_acn).unwrap_err(),
        PacketError::InvalidAcnIdentifier
    );
    assert_eq!(
        receiver.parse_packet(&bad_root).unwrap_err(),
        PacketError::InvalidRootVector { value: 7 }
    );
    assert_eq!(
        receiver.parse_packet(&bad_frame).unwrap_err(),
        PacketError::InvalidFrameVector { value: 7 }
    );
    assert_eq!(
        receiver.parse_packet(&bad_dmp).unwrap_err(),
        PacketError::InvalidDmpVector { value: 0x03 }
    );

    assert_eq!(receiver.universe(), 5);
    assert_eq!(receiver.data(), &channels_a);
    assert_eq!(receiver.stats().num_packets, 1);
    assert_eq!(receiver.stats().packet_errors, 4);
}

#[test]
fn continuous_sequence_counts_no_errors() {
    let mut receiver = Receiver::new();
    for seq in [0, 1, 2] {
        receiver.parse_packet(&packet(1, seq, &[0])).unwrap();
    }
    assert_eq!(receiver.stats().sequence_errors, 0);
    assert_eq!(receiver.stats().num_packets, 3);
}

#[test]
fn sequence_gap_counts_one_error_and_resynchronizes() {
    let mut receiver = Receiver::new();
    receiver.parse_packet(&packet(1, 0, &[0])).unwrap();
    receiver.parse_packet(&packet(1, 2, &[0])).unwrap();
    assert_eq!(receiver.stats().sequence_errors, 1);

    // Tracker resynchronized to 3 after the gap.
    receiver.parse_packet(&packet(1, 3, &[0])).unwrap();
    assert_eq!(receiver.stats().sequence_errors, 1);
}

#[test]
fn sequence_wraparound_is_continuous() {
    let mut receiver = Receiver::new();
    receiver.parse_packet(&packet(1, 255, &[0])).unwrap();
    receiver.parse_packet(&packet(1, 0, &[0])).unwrap();
    assert_eq!(receiver.stats().sequence_errors, 0);
}

#[test]
fn discontinuous_packet_is_still_accepted() {
    let mut receiver = Receiver::new();
    receiver.parse_packet(&packet(1, 0, &[10])).unwrap();
    receiver.parse_packet(&packet(1, 9, &[20])).unwrap();
    assert_eq!(receiver.stats().sequence_errors, 1);
    assert_eq!(receiver.stats().num_packets, 2);
    assert_eq!(receiver.data(), &[20]);
}

#[test]
fn repeated_rejection_is_idempotent() {
    let mut receiver = Receiver::new();
    receiver.parse_packet(&packet(3, 0, &[1, 2])).unwrap();

    let mut malformed = packet(4, 1, &[0; 2]);
    malformed[layout::ACN_ID_RANGE.start] ^= 0xff;
    for _ in 0..10 {
        assert!(receiver.parse_packet(&malformed).is_err());
    }

    assert_eq!(receiver.stats().packet_errors, 10);
    assert_eq!(receiver.stats().num_packets, 1);
    assert_eq!(receiver.universe(), 3);
    assert_eq!(receiver.data(), &[1, 2]);
}

#[test]
fn headerless_datagram_is_too_small() {
    let mut receiver = Receiver::new();
    let err = receiver.parse_packet(&[0u8; 124]).unwrap_err();
    assert_eq!(
        err,
        PacketError::PacketTooSmall {
            needed: layout::MIN_LEN,
            actual: 124
        }
    );
    assert_eq!(receiver.stats().packet_errors, 1);
}

#[test]
fn zero_property_values_is_rejected_not_wrapped() {
    let mut receiver = Receiver::new();
    let mut payload = packet(1, 0, &[1]);
    payload[layout::PROPERTY_VALUE_COUNT_RANGE].copy_from_slice(&0u16.to_be_bytes());

    assert!(matches!(
        receiver.parse_packet(&payload),
        Err(PacketError::PacketTooSmall { .. })
    ));
    assert_eq!(receiver.channel_count(), 0);
    assert_eq!(receiver.stats().packet_errors, 1);
}

#[test]
fn oversize_datagram_is_truncated_to_wire_maximum() {
    let mut receiver = Receiver::new();
    let mut payload = packet(2, 0, &[0x55; layout::DMX_MAX_SLOTS]);
    payload.extend_from_slice(&[0xee; 32]);

    let count = receiver.parse_packet(&payload).unwrap();
    assert_eq!(count as usize, layout::DMX_MAX_SLOTS);
    assert_eq!(receiver.data(), &[0x55; layout::DMX_MAX_SLOTS]);
}
