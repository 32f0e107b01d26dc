//! Core contact-card types for the hagaki workspace.
//!
//! Minimal-dependency crate holding the [`record`] model consumed by the
//! VCF encoder, the injectable [`clock`] service behind the `REV`
//! timestamp, and the shared [`error`] type.

pub mod clock;
pub mod error;
pub mod record;

pub use clock::{Clock, SystemClock};
pub use error::{RecordError, RecordResult};
pub use record::{
    Address, AddressValue, ContactRecord, ContactRecordBuilder, Extension, ExtensionValue, Phone,
    SocialProfile, StructuredName, VcfVersion,
};
