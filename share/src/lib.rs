//! Shareable project links carried as lzurl tokens.
//!
//! A project travels as a compact JSON record compressed into a URL-safe
//! token and appended to a page URL as a single query parameter. Opening the
//! link reverses the trip. The codec below this crate knows nothing about
//! JSON or projects; this crate knows nothing about bits.
//!
//! # Design Principles
//!
//! - **Links never crash the page** - Every recovery failure degrades to
//!   "no shared project", not an error the caller must not forget to handle.
//! - **Short tokens** - Record fields shrink to one letter on the wire.
//!
//! # Example
//!
//! ```
//! use share::{share_url, record_from_query, ProjectRecord};
//!
//! let record = ProjectRecord {
//!     name: "Reef".to_owned(),
//!     html: "<h1>Reef</h1>".to_owned(),
//!     ..ProjectRecord::default()
//! };
//! let url = share_url("https://example.org/builder.html", &record).unwrap();
//! let (_, query) = url.split_once('?').unwrap();
//! assert_eq!(record_from_query(query), Some(record));
//! ```

mod link;
mod record;

pub use link::{record_from_query, share_url, ShareError};
pub use record::{ProjectKind, ProjectRecord};
