//! MAC address construction, parsing, and wire serialization
//!
//! A link-layer hardware address is exactly 6 octets, transmitted octet 0
//! first with no padding or length prefix. The canonical textual form is
//! uppercase colon-separated hex: `XX:XX:XX:XX:XX:XX`.

use crate::cursor::Cursor;
use crate::error::{Error, Result};
use bytes::BufMut;
use std::fmt;
use std::str::FromStr;

/// MAC address (6 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress(pub [u8; 6]);

impl MacAddress {
    /// Broadcast MAC address (FF:FF:FF:FF:FF:FF)
    pub const BROADCAST: MacAddress = MacAddress([0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);

    /// Zero MAC address (00:00:00:00:00:00)
    pub const ZERO: MacAddress = MacAddress([0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);

    /// Create a new MAC address from a byte array
    pub const fn new(bytes: [u8; 6]) -> Self {
        MacAddress(bytes)
    }

    /// Create a MAC address from the first 6 bytes of a slice
    ///
    /// Fails with [`Error::BufferExhausted`] if the slice holds fewer than
    /// 6 bytes.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        if slice.len() < Self::size() {
            return Err(Error::BufferExhausted {
                needed: Self::size(),
                remaining: slice.len(),
            });
        }
        let mut bytes = [0u8; 6];
        bytes.copy_from_slice(&slice[..Self::size()]);
        Ok(MacAddress(bytes))
    }

    /// Read 6 octets from the cursor, octet 0 first
    pub fn consume(cursor: &mut Cursor<'_>) -> Result<Self> {
        let mut bytes = [0u8; 6];
        for octet in bytes.iter_mut() {
            *octet = cursor.consume::<u8>()?;
        }
        Ok(MacAddress(bytes))
    }

    /// Write the 6 octets to the cursor, octet 0 first
    pub fn produce(&self, cursor: &mut Cursor<'_>) -> Result<()> {
        for &octet in &self.0 {
            cursor.produce::<u8>(octet)?;
        }
        Ok(())
    }

    /// Append the 6 octets to a growable buffer
    pub fn put<B: BufMut>(&self, buf: &mut B) {
        buf.put_slice(&self.0);
    }

    /// Serialized width of a MAC address in bytes
    pub const fn size() -> usize {
        6
    }

    /// Get the MAC address as a byte array
    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }

    /// Get the octets by value
    pub fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// Check if this is a broadcast address
    pub fn is_broadcast(&self) -> bool {
        self.0 == [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]
    }

    /// Check if this is a multicast address (bit 0 of first octet is 1)
    pub fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 == 0x01
    }

    /// Check if this is a unicast address
    pub fn is_unicast(&self) -> bool {
        !self.is_multicast() && !self.is_broadcast()
    }
}

impl FromStr for MacAddress {
    type Err = Error;

    /// Parse the canonical `XX:XX:XX:XX:XX:XX` form: exactly 17 characters,
    /// six two-digit hex groups separated by `:`. Anything else is rejected
    /// before any octet is stored.
    fn from_str(s: &str) -> Result<Self> {
        if s.len() != 17 {
            return Err(Error::malformed_address(
                s,
                "expected 17 characters (XX:XX:XX:XX:XX:XX)",
            ));
        }
        let mut bytes = [0u8; 6];
        for (i, group) in s.split(':').enumerate() {
            if i >= 6 {
                return Err(Error::malformed_address(s, "expected 6 colon-separated groups"));
            }
            if group.len() != 2 || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(Error::malformed_address(s, "expected two-digit hex groups"));
            }
            bytes[i] = u8::from_str_radix(group, 16)
                .map_err(|_| Error::malformed_address(s, "expected two-digit hex groups"))?;
        }
        Ok(MacAddress(bytes))
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

impl From<[u8; 6]> for MacAddress {
    fn from(bytes: [u8; 6]) -> Self {
        MacAddress(bytes)
    }
}

impl From<MacAddress> for [u8; 6] {
    fn from(mac: MacAddress) -> Self {
        mac.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;

    #[test]
    fn test_size() {
        assert_eq!(MacAddress::size(), 6);
    }

    #[test]
    fn test_display_uppercase() {
        let mac = MacAddress([0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x01]);
        assert_eq!(format!("{}", mac), "DE:AD:BE:EF:00:01");
    }

    #[test]
    fn test_from_str_roundtrip() {
        let mac: MacAddress = "DE:AD:BE:EF:00:01".parse().unwrap();
        assert_eq!(mac.octets(), [0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x01]);
        assert_eq!(mac.to_string(), "DE:AD:BE:EF:00:01");
    }

    #[test]
    fn test_from_str_case_normalized() {
        let mac: MacAddress = "de:ad:be:ef:00:01".parse().unwrap();
        assert_eq!(mac.to_string(), "DE:AD:BE:EF:00:01");
    }

    #[test]
    fn test_from_str_malformed() {
        for text in [
            "ZZ:11:22:33:44:55",   // non-hex group
            "0011223344",          // wrong length
            "00-11-22-33-44-55",   // wrong separator
            "00:11:22:33:44:5",    // short final group
            "00:11:22:33:44:55:",  // trailing separator
            "0:011:22:33:44:55",   // misplaced separator
            "",
        ] {
            let err = text.parse::<MacAddress>().unwrap_err();
            assert!(
                matches!(err, Error::MalformedAddress { .. }),
                "'{}' should be rejected as malformed",
                text
            );
        }
    }

    #[test]
    fn test_from_slice() {
        let mac = MacAddress::from_slice(&[0, 1, 2, 3, 4, 5, 6, 7]).unwrap();
        assert_eq!(mac.octets(), [0, 1, 2, 3, 4, 5]);

        assert!(matches!(
            MacAddress::from_slice(&[0, 1, 2]),
            Err(Error::BufferExhausted {
                needed: 6,
                remaining: 3
            })
        ));
    }

    #[test]
    fn test_produce_consume_roundtrip() {
        let mac: MacAddress = "DE:AD:BE:EF:00:01".parse().unwrap();

        let mut buf = [0u8; 6];
        let mut cursor = Cursor::new(&mut buf);
        mac.produce(&mut cursor).unwrap();
        assert_eq!(buf, [0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x01]);

        let mut cursor = Cursor::new(&mut buf);
        let parsed = MacAddress::consume(&mut cursor).unwrap();
        assert_eq!(parsed, mac);
        assert_eq!(parsed.to_string(), "DE:AD:BE:EF:00:01");
    }

    #[test]
    fn test_produce_short_buffer() {
        let mac = MacAddress::BROADCAST;
        let mut buf = [0u8; 4];
        let mut cursor = Cursor::new(&mut buf);
        assert!(mac.produce(&mut cursor).is_err());
    }

    #[test]
    fn test_put() {
        let mac = MacAddress([0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
        let mut buf = BytesMut::new();
        mac.put(&mut buf);
        assert_eq!(&buf[..], mac.as_bytes());
    }

    #[test]
    fn test_classifiers() {
        assert!(MacAddress::BROADCAST.is_broadcast());
        assert!(MacAddress::BROADCAST.is_multicast());
        assert!(!MacAddress::ZERO.is_broadcast());

        let unicast = MacAddress([0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
        assert!(unicast.is_unicast());
        assert!(!unicast.is_multicast());

        let multicast = MacAddress([0x01, 0x00, 0x5E, 0x00, 0x00, 0x01]);
        assert!(multicast.is_multicast());
        assert!(!multicast.is_unicast());
    }
}
