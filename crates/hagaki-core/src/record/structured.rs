//! Structured record components underlying the N and ADR properties.

use serde::Deserialize;

/// Structured personal name (N property).
///
/// All components are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StructuredName {
    /// Given name.
    pub first: Option<String>,
    /// Additional (middle) name.
    pub middle: Option<String>,
    /// Family name (surname).
    pub last: Option<String>,
    /// Honorific prefix (e.g., "Dr.").
    pub prefix: Option<String>,
    /// Honorific suffix (e.g., "Jr.").
    pub suffix: Option<String>,
}

impl StructuredName {
    /// Creates an empty structured name.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a structured name with first and last components.
    #[must_use]
    pub fn simple(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: Some(first.into()),
            last: Some(last.into()),
            ..Self::default()
        }
    }

    /// Joins the non-empty first, middle, and last components with single
    /// spaces.
    ///
    /// Used to synthesize the formatted name when none was given; never
    /// produces a leading or trailing space.
    #[must_use]
    pub fn display_name(&self) -> String {
        [
            self.first.as_deref(),
            self.middle.as_deref(),
            self.last.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Delivery address with its TYPE parameter value (ADR property).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Address {
    /// TYPE parameter value (e.g., "home", "work").
    #[serde(rename = "type")]
    pub kind: String,
    /// The address components.
    #[serde(default)]
    pub value: AddressValue,
}

impl Address {
    /// Creates an address with the given TYPE parameter value.
    #[must_use]
    pub fn new(kind: impl Into<String>, value: AddressValue) -> Self {
        Self {
            kind: kind.into(),
            value,
        }
    }
}

/// Components of a delivery address.
///
/// All components are optional. Presence means the field is set, even to
/// an empty string; an address with no component present is never emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressValue {
    /// Free-form delivery label.
    pub label: Option<String>,
    /// Street address.
    pub street: Option<String>,
    /// City or locality.
    pub city: Option<String>,
    /// State or province.
    pub state_province: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
    /// Country or region.
    pub country_region: Option<String>,
}

impl AddressValue {
    /// Returns whether no component is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.street.is_none()
            && self.city.is_none()
            && self.state_province.is_none()
            && self.postal_code.is_none()
            && self.country_region.is_none()
    }
}
