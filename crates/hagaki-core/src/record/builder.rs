//! Fluent construction of contact records.

use crate::error::{RecordError, RecordResult};

use super::{
    Address, ContactRecord, Extension, ExtensionValue, Phone, SocialProfile, StructuredName,
    VcfVersion,
};

/// Reserved extension name carrying social profiles.
const SOCIAL_PROFILE_NAME: &str = "x-socialprofile";

/// Assembles a [`ContactRecord`] field by field.
///
/// Setters are fluent; boundary rules are checked once in [`build`]:
/// a name must be derivable and extension names must carry the `x-`
/// prefix.
///
/// [`build`]: ContactRecordBuilder::build
#[derive(Debug, Clone, Default)]
pub struct ContactRecordBuilder {
    record: ContactRecord,
}

impl ContactRecordBuilder {
    /// Starts a record with the given format version.
    #[must_use]
    pub fn new(version: VcfVersion) -> Self {
        Self {
            record: ContactRecord {
                version,
                ..ContactRecord::default()
            },
        }
    }

    /// Sets the formatted display name (FN).
    #[must_use]
    pub fn formatted_name(mut self, value: impl Into<String>) -> Self {
        self.record.formatted_name = Some(value.into());
        self
    }

    /// Sets the structured name (N).
    #[must_use]
    pub fn name(mut self, name: StructuredName) -> Self {
        self.record.name = Some(name);
        self
    }

    /// Sets the nickname.
    #[must_use]
    pub fn nickname(mut self, value: impl Into<String>) -> Self {
        self.record.nickname = Some(value.into());
        self
    }

    /// Sets the gender (emitted for 4.0 records only).
    #[must_use]
    pub fn gender(mut self, value: impl Into<String>) -> Self {
        self.record.gender = Some(value.into());
        self
    }

    /// Sets the pre-formatted birth date.
    #[must_use]
    pub fn birthday(mut self, value: impl Into<String>) -> Self {
        self.record.birthday = Some(value.into());
        self
    }

    /// Sets the pre-formatted anniversary date (emitted for 4.0 records
    /// only).
    #[must_use]
    pub fn anniversary(mut self, value: impl Into<String>) -> Self {
        self.record.anniversary = Some(value.into());
        self
    }

    /// Sets the email address.
    #[must_use]
    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.record.email = Some(value.into());
        self
    }

    /// Appends a delivery address.
    #[must_use]
    pub fn address(mut self, address: Address) -> Self {
        self.record.addresses.push(address);
        self
    }

    /// Appends a telephone number.
    #[must_use]
    pub fn phone(mut self, kind: impl Into<String>, value: impl Into<String>) -> Self {
        self.record.phones.push(Phone::new(kind, value));
        self
    }

    /// Sets the job title.
    #[must_use]
    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.record.title = Some(value.into());
        self
    }

    /// Sets the role or occupation.
    #[must_use]
    pub fn role(mut self, value: impl Into<String>) -> Self {
        self.record.role = Some(value.into());
        self
    }

    /// Sets the organization name.
    #[must_use]
    pub fn organization(mut self, value: impl Into<String>) -> Self {
        self.record.organization = Some(value.into());
        self
    }

    /// Sets the web page.
    #[must_use]
    pub fn url(mut self, value: impl Into<String>) -> Self {
        self.record.url = Some(value.into());
        self
    }

    /// Sets the free-form note.
    #[must_use]
    pub fn note(mut self, value: impl Into<String>) -> Self {
        self.record.note = Some(value.into());
        self
    }

    /// Sets the source URI.
    #[must_use]
    pub fn source(mut self, value: impl Into<String>) -> Self {
        self.record.source = Some(value.into());
        self
    }

    /// Appends a social profile to the reserved `x-socialprofile`
    /// extension, creating the entry on first use.
    #[must_use]
    pub fn social_profile(mut self, kind: impl Into<String>, value: impl Into<String>) -> Self {
        let profile = SocialProfile::new(kind, value);
        let position = self.record.extensions.iter().position(|ext| {
            ext.name == SOCIAL_PROFILE_NAME && matches!(ext.value, ExtensionValue::Profiles(_))
        });
        if let Some(index) = position
            && let ExtensionValue::Profiles(profiles) = &mut self.record.extensions[index].value
        {
            profiles.push(profile);
        } else {
            self.record.extensions.push(Extension {
                name: SOCIAL_PROFILE_NAME.to_string(),
                value: ExtensionValue::Profiles(vec![profile]),
            });
        }
        self
    }

    /// Appends a custom x- property.
    #[must_use]
    pub fn extension(
        mut self,
        name: impl Into<String>,
        value: impl Into<ExtensionValue>,
    ) -> Self {
        self.record.extensions.push(Extension {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Finalizes the record.
    ///
    /// ## Errors
    /// Returns [`RecordError::MissingName`] when neither a formatted nor
    /// a structured name was set, and
    /// [`RecordError::InvalidExtensionName`] when an extension name does
    /// not start with `x-` (ASCII case-insensitive).
    pub fn build(self) -> RecordResult<ContactRecord> {
        if self.record.formatted_name.is_none() && self.record.name.is_none() {
            return Err(RecordError::MissingName);
        }

        for ext in &self.record.extensions {
            let has_prefix = ext
                .name
                .get(..2)
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case("x-"));
            if !has_prefix {
                return Err(RecordError::InvalidExtensionName(ext.name.clone()));
            }
        }

        Ok(self.record)
    }
}
