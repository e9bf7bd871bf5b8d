use byteorder::{ByteOrder, LittleEndian};

/// Section checksum used by the GBA games: the sum of every little-endian u32 in the first
/// `length` bytes, folded into 16 bits by adding the upper half to the lower half.
pub fn section_checksum(data: &[u8], length: usize) -> u16 {
    let length = length.min(data.len());
    let checksum = data[..length]
        .chunks_exact(4)
        .fold(0u32, |sum, word| sum.wrapping_add(LittleEndian::read_u32(word)));

    let checksum_lower = (checksum & 0xffff) as u16;
    let checksum_upper = (checksum >> 16) as u16;
    checksum_upper.wrapping_add(checksum_lower)
}

/// Per-Pokemon checksum: the wrapping sum of every little-endian u16 of the decrypted data.
pub fn record_checksum(data: &[u8]) -> u16 {
    data.chunks_exact(2)
        .fold(0u16, |sum, word| sum.wrapping_add(LittleEndian::read_u16(word)))
}

/// CRC-16/CCITT (polynomial 0x1021, initial value 0xFFFF, MSB first, no final XOR), which
/// the DS games store in each block footer.
pub fn crc16_ccitt(data: &[u8]) -> u16 {
    const POLYNOMIAL: u16 = 0x1021;

    let mut crc = 0xffffu16;
    for byte in data {
        crc ^= (*byte as u16) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ POLYNOMIAL
            } else {
                crc << 1
            };
        }
    }
    crc
}
