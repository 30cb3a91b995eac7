//! Adaptive dictionary compression of text into URL-safe tokens.
//!
//! This is the main codec crate. It ties the symbol packing primitives of
//! `bitpack` to an adaptive dictionary state machine and exposes the two
//! operations everything else builds on: [`encode`] and [`decode`]. The
//! dictionary is never transmitted; both sides grow it from the stream under
//! an identical code-width schedule.
//!
//! See `TOKEN_FORMAT.md` for the complete stream layout.
//!
//! # Design Principles
//!
//! - **Correctness first** - Round-tripping is the contract; all invariants
//!   are documented and tested.
//! - **Call-local state** - Nothing is shared or cached between calls; any
//!   number of encodes and decodes may run concurrently.
//! - **No panics on malformed input** - Decoding a corrupted token returns a
//!   structured error.
//!
//! # Example
//!
//! ```
//! let token = codec::encode("to be or not to be");
//! let text = codec::decode(&token).unwrap();
//! assert_eq!(text.as_deref(), Some("to be or not to be"));
//! ```

mod decode;
mod encode;
mod error;
mod width;

pub use decode::decode;
pub use encode::encode;
pub use error::{DecodeError, DecodeResult};

/// Stream code marking an 8-bit literal escape.
pub(crate) const LITERAL_8: u32 = 0;
/// Stream code marking a 16-bit literal escape.
pub(crate) const LITERAL_16: u32 = 1;
/// Stream code marking the end of the stream.
pub(crate) const END_OF_STREAM: u32 = 2;
/// First code available for dictionary phrases.
pub(crate) const FIRST_PHRASE_CODE: u32 = 3;
