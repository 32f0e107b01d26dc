//! VCF (vCard) serialization.
//!
//! Turns a [`ContactRecord`](hagaki_core::record::ContactRecord) into a
//! CRLF-terminated VCF document, supporting the vCard 3.0-and-below shape
//! (RFC 2426) and the 4.0 shape (RFC 6350).
//!
//! ## Usage
//!
//! ```rust
//! use hagaki_core::record::{ContactRecord, VcfVersion};
//! use hagaki_rfc::vcf::encode;
//!
//! let record = ContactRecord::builder(VcfVersion::V4)
//!     .formatted_name("Jane Doe")
//!     .email("jane@example.com")
//!     .build()
//!     .unwrap();
//!
//! let document = encode(&record);
//! assert!(document.starts_with("BEGIN:VCARD\r\n"));
//! assert!(document.contains("EMAIL:jane@example.com\r\n"));
//! assert!(document.ends_with("END:VCARD\r\n"));
//! ```
//!
//! Encoding is pure and reentrant: all working state is local to the
//! call, and the only external dependency is the injected clock behind
//! the `REV` timestamp (see
//! [`encode_with_clock`](build::encode_with_clock)).

pub mod build;

#[cfg(test)]
mod tests;

pub use build::{CRLF, encode, encode_with_clock, escape_text};
