/// Internet checksum (RFC 1071) of `bytes`.
///
/// Bytes are summed as big-endian 16-bit words, an odd trailing byte is
/// padded with a zero byte, carries are folded back into the low 16 bits and
/// the one's complement of the result is returned.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn checksum(bytes: &[u8]) -> u16 {
    let mut words = bytes.chunks_exact(2);
    let mut sum: u64 = words.by_ref().map(|word| u64::from(u16::from_be_bytes([word[0], word[1]]))).sum();
    if let [last] = words.remainder() {
        sum += u64::from(u16::from_be_bytes([*last, 0]));
    }
    while sum >> 16 != 0 {
        sum = (sum & 0xFFFF) + (sum >> 16);
    }
    !(sum as u16)
}

/// True if `message`, checksum field included, sums to all ones.
pub(crate) fn is_valid(message: &[u8]) -> bool {
    checksum(message) == 0
}
