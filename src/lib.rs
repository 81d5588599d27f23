//! Wire-format primitives for packet-processing stacks
//!
//! This crate is the byte-level foundation a protocol stack is built on. It
//! converts fixed-width integers between network byte order and host order,
//! walks caller-owned buffers with a bounds-checked cursor, serializes
//! 6-octet MAC addresses, and computes the RFC 1071 Internet checksum.
//! Higher layers (Ethernet frames, IP/TCP/UDP headers) are consumers of
//! these primitives, not part of this crate.
//!
//! # Architecture
//!
//! - [`byteorder`] - host/network conversion for `u8`, `u16`, `u32`
//! - [`cursor`] - sequential typed reads and writes over a byte buffer
//! - [`mac`] - MAC address construction, parsing, and wire serialization
//! - [`checksum`] - seedable ones'-complement Internet checksum
//! - [`error`] - error types shared by the fallible operations
//!
//! # Quick Start
//!
//! ```rust
//! use wireprim::{Cursor, MacAddress};
//! use wireprim::checksum::internet_checksum;
//!
//! let mut buf = [0u8; 10];
//! let mut cursor = Cursor::new(&mut buf);
//!
//! let src: MacAddress = "DE:AD:BE:EF:00:01".parse().unwrap();
//! src.produce(&mut cursor).unwrap();
//! cursor.produce::<u16>(0x0800).unwrap();
//!
//! let checksum = internet_checksum(&buf, 0);
//! # let _ = checksum;
//! ```
//!
//! Every read and write is checked against the end of the buffer and fails
//! with a recoverable [`Error`] instead of touching memory out of range.

pub mod byteorder;
pub mod checksum;
pub mod cursor;
pub mod error;
pub mod mac;

// Re-export commonly used types for convenience
pub use byteorder::NetworkOrder;
pub use checksum::{checksum_accumulate, internet_checksum, verify_checksum};
pub use cursor::Cursor;
pub use error::{Error, Result};
pub use mac::MacAddress;
