//! VCF serialization.
//!
//! - Escape: text escaping and the CRLF line terminator
//! - Encode: full document serialization in the canonical property order

mod encode;
mod escape;

pub use encode::{encode, encode_with_clock};
pub use escape::{CRLF, escape_opt, escape_text};
