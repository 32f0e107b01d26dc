//! In-tree tests for VCF serialization.

mod encode;
