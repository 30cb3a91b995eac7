//! Symbol-level reader with bounded operations.

use crate::alphabet::{self, SYMBOL_BITS, SYMBOL_MASK};
use crate::error::{BitError, BitResult};

/// A bit-level reader over a token in the URL-safe alphabet.
///
/// All read operations are bounds-checked and return errors on failure.
/// The reader never panics on malformed input.
#[derive(Debug)]
pub struct SymbolReader {
    /// Symbol payloads, six bits each.
    symbols: Vec<u8>,
    bit_pos: usize,
}

impl SymbolReader {
    /// Maximum number of bits accepted by a single [`read_bits`](Self::read_bits).
    pub const MAX_READ_BITS: usize = 32;

    /// Creates a new `SymbolReader` over a token.
    ///
    /// Every character is resolved against the alphabet up front; symbol
    /// values are masked to their six payload bits, so the 65th alphabet
    /// character reads as zero bits.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::InvalidSymbol`] for any character outside the
    /// alphabet.
    pub fn new(token: &str) -> BitResult<Self> {
        let symbols = token
            .chars()
            .map(|ch| {
                alphabet::index_of(ch)
                    .map(|index| index & SYMBOL_MASK)
                    .ok_or(BitError::InvalidSymbol { ch })
            })
            .collect::<BitResult<Vec<u8>>>()?;
        Ok(Self {
            symbols,
            bit_pos: 0,
        })
    }

    /// Returns the number of bits remaining to read.
    #[must_use]
    pub fn bits_remaining(&self) -> usize {
        self.symbols
            .len()
            .saturating_mul(SYMBOL_BITS)
            .saturating_sub(self.bit_pos)
    }

    /// Returns `true` if there are no more bits to read.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits_remaining() == 0
    }

    /// Returns the current bit position.
    #[must_use]
    pub const fn bit_position(&self) -> usize {
        self.bit_pos
    }

    /// Reads a single bit.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::UnexpectedEnd`] at the end of the token.
    pub fn read_bit(&mut self) -> BitResult<bool> {
        if self.bits_remaining() == 0 {
            return Err(BitError::UnexpectedEnd {
                requested: 1,
                available: 0,
            });
        }
        let symbol = self.symbols[self.bit_pos / SYMBOL_BITS];
        let offset = self.bit_pos % SYMBOL_BITS;
        let bit = (symbol >> (SYMBOL_BITS - 1 - offset)) & 1;
        self.bit_pos += 1;
        Ok(bit == 1)
    }

    /// Reads `bits` bits, assembling the value least-significant-bit first.
    ///
    /// The bit order mirrors [`SymbolWriter::push_bits`]: the first bit
    /// pulled from the stream becomes the low bit of the result.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::InvalidBitCount`] if `bits > 32`.
    /// Returns [`BitError::UnexpectedEnd`] if the token is exhausted.
    ///
    /// [`SymbolWriter::push_bits`]: crate::SymbolWriter::push_bits
    pub fn read_bits(&mut self, bits: usize) -> BitResult<u32> {
        if bits > Self::MAX_READ_BITS {
            return Err(BitError::InvalidBitCount {
                bits,
                max_bits: Self::MAX_READ_BITS,
            });
        }
        if bits > self.bits_remaining() {
            return Err(BitError::UnexpectedEnd {
                requested: bits,
                available: self.bits_remaining(),
            });
        }

        let mut value = 0u32;
        for i in 0..bits {
            value |= u32::from(self.read_bit()?) << i;
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_reader() {
        let reader = SymbolReader::new("").unwrap();
        assert!(reader.is_empty());
        assert_eq!(reader.bits_remaining(), 0);
        assert_eq!(reader.bit_position(), 0);
    }

    #[test]
    fn read_from_empty_fails() {
        let mut reader = SymbolReader::new("").unwrap();
        let result = reader.read_bit();
        assert!(matches!(result, Err(BitError::UnexpectedEnd { .. })));
    }

    #[test]
    fn rejects_invalid_character() {
        let err = SymbolReader::new("AB%").unwrap_err();
        assert_eq!(err, BitError::InvalidSymbol { ch: '%' });
    }

    #[test]
    fn reads_symbol_bits_msb_first() {
        // 'g' is index 32 = 0b100000.
        let mut reader = SymbolReader::new("g").unwrap();
        assert!(reader.read_bit().unwrap());
        for _ in 0..5 {
            assert!(!reader.read_bit().unwrap());
        }
        assert!(reader.is_empty());
    }

    #[test]
    fn read_bits_assembles_lsb_first() {
        // 'g' = 0b100000: the leading stream bit becomes bit zero.
        let mut reader = SymbolReader::new("g").unwrap();
        assert_eq!(reader.read_bits(6).unwrap(), 1);
    }

    #[test]
    fn read_bits_across_symbols() {
        // "-w" was written as 0xFF over 8 bits.
        let mut reader = SymbolReader::new("-w").unwrap();
        assert_eq!(reader.read_bits(8).unwrap(), 0xFF);
        assert_eq!(reader.bits_remaining(), 4);
    }

    #[test]
    fn read_bits_zero_count() {
        let mut reader = SymbolReader::new("A").unwrap();
        assert_eq!(reader.read_bits(0).unwrap(), 0);
        assert_eq!(reader.bit_position(), 0);
    }

    #[test]
    fn read_bits_invalid_count() {
        let mut reader = SymbolReader::new("AAAAAAAAAA").unwrap();
        let result = reader.read_bits(33);
        assert!(matches!(
            result,
            Err(BitError::InvalidBitCount {
                bits: 33,
                max_bits: 32,
            })
        ));
    }

    #[test]
    fn read_past_end_reports_available() {
        let mut reader = SymbolReader::new("A").unwrap();
        reader.read_bits(4).unwrap();
        let err = reader.read_bits(8).unwrap_err();
        assert_eq!(
            err,
            BitError::UnexpectedEnd {
                requested: 8,
                available: 2,
            }
        );
    }

    #[test]
    fn failed_read_does_not_advance() {
        let mut reader = SymbolReader::new("A").unwrap();
        assert!(reader.read_bits(8).is_err());
        assert_eq!(reader.bit_position(), 0);
        assert_eq!(reader.read_bits(6).unwrap(), 0);
    }

    #[test]
    fn dollar_reads_as_zero_bits() {
        // '$' is alphabet index 64; its seventh bit is not payload.
        let mut reader = SymbolReader::new("$").unwrap();
        assert_eq!(reader.read_bits(6).unwrap(), 0);
    }
}
