use std::io::ErrorKind;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4, UdpSocket};

use super::{DatagramSource, SourceError};

/// ACN SDT multicast port used by E1.31.
pub const E131_DEFAULT_PORT: u16 = 5568;

const UNIVERSE_MAX: u16 = 63999;

/// Multicast group address for a universe, 239.255.hi.lo with hi/lo the
/// universe number's big-endian bytes. Universe 0 and universes above
/// 63999 are reserved and have no group.
pub fn multicast_group(universe: u16) -> Option<Ipv4Addr> {
    if universe == 0 || universe > UNIVERSE_MAX {
        return None;
    }
    let [hi, lo] = universe.to_be_bytes();
    Some(Ipv4Addr::new(239, 255, hi, lo))
}

/// Non-blocking UDP datagram source backed by a std socket.
#[derive(Debug)]
pub struct UdpDatagramSource {
    socket: UdpSocket,
}

impl UdpDatagramSource {
    /// Binds a plain unicast socket on `port` (all interfaces).
    pub fn unicast(port: u16) -> Result<Self, SourceError> {
        let socket = UdpSocket::bind(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, port))?;
        socket.set_nonblocking(true)?;
        Ok(Self { socket })
    }

    /// Binds on `port` and joins the multicast group for `universe`.
    pub fn multicast(universe: u16, port: u16) -> Result<Self, SourceError> {
        let group =
            multicast_group(universe).ok_or(SourceError::InvalidUniverse { universe })?;
        let socket = UdpSocket::bind(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, port))?;
        socket.join_multicast_v4(&group, &Ipv4Addr::UNSPECIFIED)?;
        socket.set_nonblocking(true)?;
        Ok(Self { socket })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, SourceError> {
        Ok(self.socket.local_addr()?)
    }
}

impl DatagramSource for UdpDatagramSource {
    fn try_receive(&mut self, buf: &mut [u8]) -> Result<Option<usize>, SourceError> {
        match self.socket.recv(buf) {
            Ok(len) => Ok(Some(len)),
            Err(err) if err.kind() == ErrorKind::WouldBlock => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}
