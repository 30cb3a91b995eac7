//! Token decoding (decompression).

use std::borrow::Cow;

use bitpack::SymbolReader;

use crate::error::{DecodeError, DecodeResult};
use crate::width::CodeWidth;
use crate::{END_OF_STREAM, FIRST_PHRASE_CODE, LITERAL_16, LITERAL_8};

/// Width of the first dictionary reference. The stream's first emission is
/// always a literal, which ticks the schedule twice; starting one bit above
/// the encoder bakes those ticks in.
const START_BITS: usize = 3;

/// Recovers the text compressed into `token`.
///
/// Returns `Ok(None)` when the token is empty: "no data" rather than an
/// empty string, which a well-formed token can still carry. Spaces are
/// repaired to `+` before symbol lookup, since `+` decays to a space when a
/// token travels through a URL query string.
///
/// # Errors
///
/// Any malformed stream fails with a [`DecodeError`]; decoding never panics.
pub fn decode(token: &str) -> DecodeResult<Option<String>> {
    if token.is_empty() {
        return Ok(None);
    }

    let repaired: Cow<'_, str> = if token.contains(' ') {
        Cow::Owned(token.replace(' ', "+"))
    } else {
        Cow::Borrowed(token)
    };
    let mut reader = SymbolReader::new(&repaired)?;

    // The first emission is always a literal; its marker travels in the
    // encoder's two starting bits.
    let first_unit = match reader.read_bits(2)? {
        LITERAL_8 => reader.read_bits(8)? as u16,
        LITERAL_16 => reader.read_bits(16)? as u16,
        END_OF_STREAM => return Ok(Some(String::new())),
        marker => return Err(DecodeError::InvalidLiteralMarker { marker }),
    };

    // Slots 0-2 stand in for the control codes and are never dereferenced.
    let mut phrases: Vec<Vec<u16>> = (0..FIRST_PHRASE_CODE).map(|_| Vec::new()).collect();
    phrases.push(vec![first_unit]);

    let mut width = CodeWidth::starting_at(START_BITS);
    let mut previous = vec![first_unit];
    let mut out: Vec<u16> = vec![first_unit];

    loop {
        let entry: Vec<u16> = match reader.read_bits(width.bits())? {
            code @ (LITERAL_8 | LITERAL_16) => {
                let bits = if code == LITERAL_8 { 8 } else { 16 };
                let unit = reader.read_bits(bits)? as u16;
                phrases.push(vec![unit]);
                width.tick();
                vec![unit]
            }
            END_OF_STREAM => {
                return String::from_utf16(&out)
                    .map(Some)
                    .map_err(|_| DecodeError::InvalidUtf16);
            }
            code => {
                let next_code = phrases.len() as u32;
                if code < next_code {
                    phrases[code as usize].clone()
                } else if code == next_code {
                    // The phrase referenced here is the one being defined by
                    // this very step: previous phrase plus its own first unit.
                    let mut entry = previous.clone();
                    entry.push(previous[0]);
                    entry
                } else {
                    return Err(DecodeError::UnknownCode { code, next_code });
                }
            }
        };

        out.extend_from_slice(&entry);

        // Grow the dictionary in lockstep with the encoder.
        let mut grown = previous;
        grown.push(entry[0]);
        phrases.push(grown);
        width.tick();
        previous = entry;
    }
}
