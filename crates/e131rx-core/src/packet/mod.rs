//! E1.31 (sACN) data packet decoding.
//!
//! The decoder interprets a datagram at fixed byte offsets as the Root,
//! Frame and DMP layers; the validator checks the ACN packet identifier
//! and the three layer vectors in a fixed order with the first failure
//! winning. Property-value-count constraints are enforced so an undersized
//! or self-contradicting datagram is reported, never read past.
//!
//! Errors report invalid identifiers, vectors, or sizes. Wire-format
//! details are defined in `layout`, while conventions and safe reads live
//! in `reader`.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use parser::{decode, validate, PacketView};
