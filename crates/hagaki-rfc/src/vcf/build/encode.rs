//! VCF document encoder.
//!
//! Property order is fixed by the format and reproduced exactly; no
//! field's emission decision depends on another field except the major
//! version gate. The encoder never fails: absent optional fields are
//! skipped silently.

use chrono::SecondsFormat;
use hagaki_core::clock::{Clock, SystemClock};
use hagaki_core::record::{Address, ContactRecord, ExtensionValue, StructuredName, VcfVersion};

use super::escape::{CRLF, escape_opt, escape_text};

/// Encodes a record as a VCF document, stamping `REV` from the system
/// clock.
#[must_use]
pub fn encode(record: &ContactRecord) -> String {
    encode_with_clock(record, &SystemClock)
}

/// Encodes a record as a VCF document, stamping `REV` from `clock`.
///
/// Two calls on the same record differing only in the clock produce
/// identical output except for the `REV` line.
#[must_use]
pub fn encode_with_clock(record: &ContactRecord, clock: &impl Clock) -> String {
    let mut out = String::new();

    push_line(&mut out, "BEGIN:VCARD");
    push_line(&mut out, &format!("VERSION:{}", record.version));

    let formatted_name = record
        .formatted_name
        .clone()
        .or_else(|| record.name.as_ref().map(StructuredName::display_name))
        .unwrap_or_default();
    push_line(&mut out, &format!("FN:{}", escape_text(&formatted_name)));

    if let Some(name) = &record.name {
        out.push_str(&format_name(name));
    }

    // NICKNAME is a 3.0 addition; both supported shapes carry it.
    push_property(&mut out, "NICKNAME", record.nickname.as_deref());

    if record.version >= VcfVersion::V4 {
        push_property(&mut out, "GENDER", record.gender.as_deref());
    }

    // Date values are emitted verbatim; shaping them is the caller's
    // concern.
    if let Some(birthday) = &record.birthday {
        push_line(&mut out, &format!("BDAY:{birthday}"));
    }

    if record.version >= VcfVersion::V4
        && let Some(anniversary) = &record.anniversary
    {
        push_line(&mut out, &format!("ANNIVERSARY:{anniversary}"));
    }

    if let Some(email) = &record.email {
        if record.version >= VcfVersion::V4 {
            push_line(&mut out, &format!("EMAIL:{}", escape_text(email)));
        } else {
            push_line(
                &mut out,
                &format!("EMAIL;PREF;INTERNET:{}", escape_text(email)),
            );
        }
    }

    for address in &record.addresses {
        out.push_str(&format_address(record.version, address));
    }

    for phone in &record.phones {
        push_line(
            &mut out,
            &format!("TEL;TYPE={}:{}", phone.kind, escape_text(&phone.value)),
        );
    }

    push_property(&mut out, "TITLE", record.title.as_deref());
    push_property(&mut out, "ROLE", record.role.as_deref());
    push_property(&mut out, "ORG", record.organization.as_deref());
    push_property(&mut out, "URL", record.url.as_deref());
    push_property(&mut out, "NOTE", record.note.as_deref());

    for extension in &record.extensions {
        let name = extension.name.to_ascii_uppercase();
        match &extension.value {
            ExtensionValue::Text(value) => {
                push_line(&mut out, &format!("{name}:{}", escape_text(value)));
            }
            ExtensionValue::Profiles(profiles) => {
                for profile in profiles {
                    push_line(
                        &mut out,
                        &format!("{name};TYPE={}:{}", profile.kind, escape_text(&profile.value)),
                    );
                }
            }
        }
    }

    push_property(&mut out, "SOURCE", record.source.as_deref());

    let revised = clock.now().to_rfc3339_opts(SecondsFormat::Secs, false);
    push_line(&mut out, &format!("REV:{revised}"));
    push_line(&mut out, "END:VCARD");

    tracing::trace!(version = %record.version, bytes = out.len(), "encoded contact card");

    out
}

/// Formats the N property line: five components, four separators, always.
fn format_name(name: &StructuredName) -> String {
    let mut line = format!(
        "N:{};{};{};{};{}",
        escape_opt(name.last.as_deref()),
        escape_opt(name.first.as_deref()),
        escape_opt(name.middle.as_deref()),
        escape_opt(name.prefix.as_deref()),
        escape_opt(name.suffix.as_deref()),
    );
    line.push_str(CRLF);
    line
}

/// Formats one address as its ADR (and, below 4.0, LABEL) lines.
///
/// Returns the empty string when no component is present. The two
/// leading empty ADR components are the unsupported post-office-box and
/// extended-address slots. Below 4.0 a present label becomes a separate
/// LABEL property; from 4.0 on it is folded into a parameter and written
/// even when empty.
fn format_address(version: VcfVersion, address: &Address) -> String {
    let value = &address.value;
    if value.is_empty() {
        return String::new();
    }

    let components = format!(
        "{};{};{};{};{}",
        escape_opt(value.street.as_deref()),
        escape_opt(value.city.as_deref()),
        escape_opt(value.state_province.as_deref()),
        escape_opt(value.postal_code.as_deref()),
        escape_opt(value.country_region.as_deref()),
    );

    let mut out = String::new();
    if version < VcfVersion::V4 {
        if let Some(label) = &value.label {
            out.push_str(&format!("LABEL;TYPE={}:{}", address.kind, escape_text(label)));
            out.push_str(CRLF);
        }
        out.push_str(&format!("ADR;TYPE={}:;;{components}", address.kind));
        out.push_str(CRLF);
    } else {
        out.push_str(&format!(
            "ADR;TYPE={};LABEL={}:;;{components}",
            address.kind,
            escape_opt(value.label.as_deref()),
        ));
        out.push_str(CRLF);
    }
    out
}

/// Appends one CRLF-terminated line.
fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push_str(CRLF);
}

/// Appends `NAME:<escaped value>` when the value is present.
///
/// Present includes the empty string; only an absent value suppresses
/// the line.
fn push_property(out: &mut String, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        push_line(out, &format!("{name}:{}", escape_text(value)));
    }
}
