//! Contact-card record model.
//!
//! A [`ContactRecord`] is the read-only input to the VCF encoder. Records
//! are assembled with [`ContactRecordBuilder`], as struct literals, or by
//! deserializing the `camelCase` interchange shape:
//!
//! ```rust
//! use hagaki_core::record::{ContactRecord, VcfVersion};
//!
//! let record: ContactRecord = serde_json::from_str(
//!     r#"{
//!         "version": 4,
//!         "formattedName": "Jane Doe",
//!         "phones": {"type": "cell", "value": "555-1111"}
//!     }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(record.version, VcfVersion::V4);
//! assert_eq!(record.phones.len(), 1);
//! ```
//!
//! Repeatable fields are sequences from the start; the single-value
//! convenience form shown above is normalized into a one-element sequence
//! during deserialization, never inside the encoder.

mod builder;
mod structured;
mod version;

pub use builder::ContactRecordBuilder;
pub use structured::{Address, AddressValue, StructuredName};
pub use version::VcfVersion;

use serde::{Deserialize, Deserializer};

/// A contact card ready for encoding.
///
/// Scalar fields are emitted when present, including when present as an
/// empty string; only an absent field suppresses emission. Date fields are
/// pre-formatted strings and are not parsed or validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRecord {
    /// Format version selecting the serialization shape.
    pub version: VcfVersion,
    /// Formatted display name (FN). Synthesized from `name` when absent.
    pub formatted_name: Option<String>,
    /// Structured name (N).
    pub name: Option<StructuredName>,
    /// Nickname.
    pub nickname: Option<String>,
    /// Gender, emitted for 4.0 records only.
    pub gender: Option<String>,
    /// Pre-formatted birth date, emitted verbatim.
    pub birthday: Option<String>,
    /// Pre-formatted anniversary date, emitted verbatim for 4.0 records.
    pub anniversary: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Delivery addresses in emission order.
    #[serde(deserialize_with = "one_or_many")]
    pub addresses: Vec<Address>,
    /// Telephone numbers in emission order.
    #[serde(deserialize_with = "one_or_many")]
    pub phones: Vec<Phone>,
    /// Job title.
    pub title: Option<String>,
    /// Role or occupation.
    pub role: Option<String>,
    /// Organization name.
    pub organization: Option<String>,
    /// Web page.
    pub url: Option<String>,
    /// Free-form note.
    pub note: Option<String>,
    /// Custom x- properties in emission order.
    pub extensions: Vec<Extension>,
    /// URI the card can be refreshed from.
    pub source: Option<String>,
}

impl ContactRecord {
    /// Starts a builder for the given format version.
    #[must_use]
    pub fn builder(version: VcfVersion) -> ContactRecordBuilder {
        ContactRecordBuilder::new(version)
    }
}

/// Telephone number with its TYPE parameter value (TEL property).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Phone {
    /// TYPE parameter value (e.g., "cell", "home").
    #[serde(rename = "type")]
    pub kind: String,
    /// The number or telephone URI.
    pub value: String,
}

impl Phone {
    /// Creates a phone entry.
    #[must_use]
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }
}

/// Social-media handle carried by the reserved `x-socialprofile`
/// extension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SocialProfile {
    /// TYPE parameter value (e.g., "twitter").
    #[serde(rename = "type")]
    pub kind: String,
    /// Handle or profile URL.
    pub value: String,
}

impl SocialProfile {
    /// Creates a social profile entry.
    #[must_use]
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }
}

/// A custom extension property.
///
/// Extension names carry the `x-` prefix; the encoder upper-cases them on
/// the wire.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Extension {
    /// Property name, including the `x-` prefix.
    pub name: String,
    /// Scalar text or social profiles.
    pub value: ExtensionValue,
}

/// Value of an extension property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionValue {
    /// Scalar text, emitted as a single property line.
    Text(String),
    /// Social profiles, emitted as one parameterized line each.
    Profiles(Vec<SocialProfile>),
}

impl From<&str> for ExtensionValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ExtensionValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<SocialProfile>> for ExtensionValue {
    fn from(profiles: Vec<SocialProfile>) -> Self {
        Self::Profiles(profiles)
    }
}

impl<'de> Deserialize<'de> for ExtensionValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            One(SocialProfile),
            Many(Vec<SocialProfile>),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self::Text(s),
            Raw::One(profile) => Self::Profiles(vec![profile]),
            Raw::Many(profiles) => Self::Profiles(profiles),
        })
    }
}

/// Deserializes either a single value or a sequence into a `Vec`.
///
/// This is the ingestion-time normalization of the single-value
/// convenience form; downstream code only ever sees sequences.
fn one_or_many<'de, T, D>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        One(T),
        Many(Vec<T>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    })
}
