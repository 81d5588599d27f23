//! Network byte-order conversions for fixed-width integers
//!
//! Multi-byte fields on the wire are big-endian. This module provides the
//! conversions the rest of the crate is built on: value-level host/network
//! swaps and byte-level encode/decode, for exactly the three widths protocol
//! headers use (8, 16, and 32 bits).

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// A fixed-width integer with a defined network (big-endian) encoding.
///
/// Implemented for `u8`, `u16`, and `u32` only; no other width appears in
/// the wire formats this crate serves. All conversions are total functions.
///
/// Byte-level encode/decode is done with explicit shifts rather than by
/// reinterpreting memory, so it is well-defined on any host endianness.
pub trait NetworkOrder: sealed::Sealed + Copy {
    /// Encoded width in bytes: 1, 2, or 4.
    const WIDTH: usize;

    /// Converts a value read off the wire into host representation.
    fn to_host(self) -> Self;

    /// Converts a host value into its on-wire representation.
    fn to_network(self) -> Self;

    /// Decodes a big-endian value from the first `WIDTH` bytes of `bytes`.
    ///
    /// Callers must supply at least `WIDTH` bytes; the cursor checks this
    /// before delegating here.
    fn read_be(bytes: &[u8]) -> Self;

    /// Encodes `self` big-endian into the first `WIDTH` bytes of `out`.
    fn write_be(self, out: &mut [u8]);
}

impl NetworkOrder for u8 {
    const WIDTH: usize = 1;

    fn to_host(self) -> Self {
        self
    }

    fn to_network(self) -> Self {
        self
    }

    fn read_be(bytes: &[u8]) -> Self {
        bytes[0]
    }

    fn write_be(self, out: &mut [u8]) {
        out[0] = self;
    }
}

impl NetworkOrder for u16 {
    const WIDTH: usize = 2;

    fn to_host(self) -> Self {
        u16::from_be(self)
    }

    fn to_network(self) -> Self {
        self.to_be()
    }

    fn read_be(bytes: &[u8]) -> Self {
        (bytes[0] as u16) << 8 | bytes[1] as u16
    }

    fn write_be(self, out: &mut [u8]) {
        out[0] = (self >> 8) as u8;
        out[1] = self as u8;
    }
}

impl NetworkOrder for u32 {
    const WIDTH: usize = 4;

    fn to_host(self) -> Self {
        u32::from_be(self)
    }

    fn to_network(self) -> Self {
        self.to_be()
    }

    fn read_be(bytes: &[u8]) -> Self {
        (bytes[0] as u32) << 24 | (bytes[1] as u32) << 16 | (bytes[2] as u32) << 8 | bytes[3] as u32
    }

    fn write_be(self, out: &mut [u8]) {
        out[0] = (self >> 24) as u8;
        out[1] = (self >> 16) as u8;
        out[2] = (self >> 8) as u8;
        out[3] = self as u8;
    }
}
