//! Internet checksum (RFC 1071) calculation
//!
//! The ones'-complement checksum used by IP, TCP, and UDP headers: the data
//! is summed as 16-bit words, end-around carries are folded back in, and the
//! result is complemented. Every function takes a caller-supplied seed so a
//! checksum can be composed across physically separate regions (pseudo-header
//! plus header plus payload) without copying them into one buffer.

/// Sums `data` as big-endian 16-bit words into `start_sum`.
///
/// An odd trailing byte is zero-padded on the right, i.e. added as
/// `byte << 8`. The returned sum is folded to 16 bits, so it can be passed
/// directly as the seed of a follow-up call over the next region.
pub fn checksum_accumulate(start_sum: u32, data: &[u8]) -> u32 {
    let mut sum = start_sum;

    let mut chunks = data.chunks_exact(2);
    for chunk in &mut chunks {
        let word = u16::from_be_bytes([chunk[0], chunk[1]]);
        sum += word as u32;
    }

    // Handle odd byte if present
    if let Some(&byte) = chunks.remainder().first() {
        sum += (byte as u32) << 8;
    }

    fold(sum)
}

/// Calculates the Internet checksum of `data` seeded with `start_sum`.
///
/// The seed is a partial sum from [`checksum_accumulate`] over earlier
/// regions, or 0 when the buffer stands alone. The returned value is ready
/// for host arithmetic and can be written straight into a header field with
/// `Cursor::produce::<u16>`.
///
/// An empty buffer with seed 0 yields `0xFFFF`, as does all-zero input —
/// a transmitted checksum of zero is a protocol-level convention this layer
/// does not interpret.
///
/// # Examples
///
/// ```
/// use wireprim::checksum::internet_checksum;
///
/// let header = [0x45u8, 0x00, 0x00, 0x3C];
/// let checksum = internet_checksum(&header, 0);
/// ```
pub fn internet_checksum(data: &[u8], start_sum: u32) -> u16 {
    let sum = checksum_accumulate(start_sum, data);
    !(fold(sum) as u16)
}

/// Verifies a region that carries its own checksum field.
///
/// Recomputing over the received bytes with the stored checksum included
/// must yield zero: the stored field is the complement of the sum of
/// everything else, so the full sum comes to all-ones, which complements
/// to `0x0000`. This is the one verification convention this crate defines;
/// protocols with a different reading compare against [`internet_checksum`]
/// directly.
pub fn verify_checksum(data: &[u8]) -> bool {
    internet_checksum(data, 0) == 0
}

/// Folds end-around carries until the sum fits in 16 bits.
fn fold(mut sum: u32) -> u32 {
    while (sum >> 16) != 0 {
        sum = (sum & 0xFFFF) + (sum >> 16);
    }
    sum
}
