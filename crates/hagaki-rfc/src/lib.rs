//! VCF wire-format serialization for contact cards.

pub mod vcf;

pub use vcf::{encode, encode_with_clock};
