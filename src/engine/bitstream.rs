/// Packs a logical bit sequence into bytes, most-significant bit first.
/// Unused low bits of the final byte stay zero; the exact meaningful bit
/// count travels with the bytes, since padding is otherwise indistinguishable
/// from real trailing zeros.
#[derive(Debug, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    current_byte: u8,
    bit_count: u8,
    total_bits: u64,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_bit(&mut self, bit: bool) {
        if bit {
            self.current_byte |= 1 << (7 - self.bit_count);
        }
        self.bit_count += 1;
        self.total_bits += 1;

        if self.bit_count == 8 {
            self.bytes.push(self.current_byte);
            self.current_byte = 0;
            self.bit_count = 0;
        }
    }

    pub fn push_code(&mut self, code: &[bool]) {
        for &bit in code {
            self.push_bit(bit);
        }
    }

    /// Flush the partial final byte and return (packed bytes, meaningful bit
    /// count).
    pub fn finish(mut self) -> (Vec<u8>, u64) {
        if self.bit_count > 0 {
            self.bytes.push(self.current_byte);
        }
        (self.bytes, self.total_bits)
    }
}

/// Walks a packed byte sequence bit by bit, stopping at the recorded bit
/// count so padding bits are never surfaced.
#[derive(Debug)]
pub struct BitReader<'a> {
    bytes: &'a [u8],
    bit_len: u64,
    pos: u64,
}

impl<'a> BitReader<'a> {
    pub fn new(bytes: &'a [u8], bit_len: u64) -> Self {
        Self { bytes, bit_len, pos: 0 }
    }

    pub fn next_bit(&mut self) -> Option<bool> {
        if self.pos >= self.bit_len {
            return None;
        }
        let byte = self.bytes[(self.pos / 8) as usize];
        let bit = (byte >> (7 - (self.pos % 8) as u8)) & 1 == 1;
        self.pos += 1;
        Some(bit)
    }

    pub fn remaining(&self) -> u64 {
        self.bit_len - self.pos
    }
}
