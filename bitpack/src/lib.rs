//! Low-level symbol packing primitives for the lzurl codec.
//!
//! This crate provides [`SymbolWriter`] and [`SymbolReader`] for bit-level
//! encoding and decoding over a 65-character URL-safe alphabet. Each alphabet
//! symbol carries six payload bits; values are packed least-significant-bit
//! first and may span symbol boundaries.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads are bounds-checked against the token.
//! - **No domain knowledge** - This crate knows nothing about dictionaries,
//!   phrases, or code widths.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use bitpack::{SymbolReader, SymbolWriter};
//!
//! let mut writer = SymbolWriter::new();
//! writer.push_bits(0b101, 3).unwrap();
//! writer.push_bits(0xAB, 8).unwrap();
//! let token = writer.finish();
//!
//! let mut reader = SymbolReader::new(&token).unwrap();
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert_eq!(reader.read_bits(8).unwrap(), 0xAB);
//! ```

pub mod alphabet;
mod error;
mod reader;
mod writer;

pub use alphabet::{ALPHABET_LEN, SYMBOL_BITS};
pub use error::{BitError, BitResult};
pub use reader::SymbolReader;
pub use writer::SymbolWriter;
