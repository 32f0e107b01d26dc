//! Encoder property tests.
//!
//! These pin the canonical property order, the escaping rules, and the
//! two version-conditional serialization shapes against a fixed clock.

use chrono::{DateTime, FixedOffset};
use hagaki_core::clock::Clock;
use hagaki_core::record::{Address, AddressValue, ContactRecord, StructuredName, VcfVersion};
use test_log::test;

use crate::vcf::build::{encode_with_clock, escape_text};

/// Clock pinned to a fixed instant.
struct FixedClock(&'static str);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(self.0).expect("fixture timestamp is valid RFC 3339")
    }
}

const CLOCK: FixedClock = FixedClock("2024-05-14T09:30:00-05:00");

fn minimal(version: VcfVersion) -> ContactRecord {
    ContactRecord::builder(version)
        .formatted_name("Jane Doe")
        .build()
        .expect("record has a name")
}

fn work_address(value: AddressValue) -> Address {
    Address::new("work", value)
}

#[test]
fn document_structure() {
    let record = ContactRecord::builder(VcfVersion::V4)
        .formatted_name("Jane Doe")
        .email("jane@example.com")
        .phone("cell", "555-1111")
        .build()
        .expect("record has a name");
    let document = encode_with_clock(&record, &CLOCK);

    assert!(document.starts_with("BEGIN:VCARD\r\n"));
    assert!(document.ends_with("END:VCARD\r\n"));
    for line in document.split_inclusive("\r\n") {
        assert!(line.ends_with("\r\n"), "unterminated line: {line:?}");
    }
    // No bare newlines outside the CRLF terminators.
    assert!(!document.replace("\r\n", "").contains('\n'));
}

#[test]
fn version_line_uses_the_canonical_form() {
    let document = encode_with_clock(&minimal(VcfVersion::V3), &CLOCK);
    assert!(document.contains("VERSION:3.0\r\n"));

    let document = encode_with_clock(&minimal(VcfVersion::V4), &CLOCK);
    assert!(document.contains("VERSION:4.0\r\n"));
}

#[test]
fn escaping_round_trips() {
    let raw = "Likes commas, semicolons; and\nnewlines";
    let escaped = escape_text(raw);

    assert_eq!(escaped, "Likes commas\\, semicolons\\; and\\nnewlines");

    // Inverse of the escape rule recovers the input.
    let unescaped = escaped
        .replace("\\n", "\n")
        .replace("\\,", ",")
        .replace("\\;", ";");
    assert_eq!(unescaped, raw);

    // No raw metacharacters survive outside their escapes.
    let stripped = escaped
        .replace("\\n", "")
        .replace("\\,", "")
        .replace("\\;", "");
    assert!(!stripped.contains([',', ';', '\n']));
}

#[test]
fn nickname_is_emitted_for_both_shapes() {
    for version in [VcfVersion::V3, VcfVersion::V4] {
        let record = ContactRecord::builder(version)
            .formatted_name("Jane Doe")
            .nickname("Bob")
            .build()
            .expect("record has a name");
        let document = encode_with_clock(&record, &CLOCK);
        assert!(document.contains("NICKNAME:Bob\r\n"), "missing at {version}");
    }
}

#[test]
fn gender_and_anniversary_are_gated_to_v4() {
    for (version, expected) in [(VcfVersion::V3, false), (VcfVersion::V4, true)] {
        let record = ContactRecord::builder(version)
            .formatted_name("Jane Doe")
            .gender("M")
            .anniversary("2020-01-01")
            .build()
            .expect("record has a name");
        let document = encode_with_clock(&record, &CLOCK);

        assert_eq!(document.contains("GENDER:M\r\n"), expected);
        assert_eq!(document.contains("ANNIVERSARY:2020-01-01\r\n"), expected);
    }
}

#[test]
fn birthday_is_emitted_verbatim_for_both_shapes() {
    for version in [VcfVersion::V3, VcfVersion::V4] {
        let record = ContactRecord::builder(version)
            .formatted_name("Jane Doe")
            .birthday("1990-06-01")
            .build()
            .expect("record has a name");
        let document = encode_with_clock(&record, &CLOCK);
        assert!(document.contains("BDAY:1990-06-01\r\n"));
    }
}

#[test]
fn email_shape_depends_on_version() {
    let record = ContactRecord::builder(VcfVersion::V3)
        .formatted_name("Jane Doe")
        .email("jane@example.com")
        .build()
        .expect("record has a name");
    let document = encode_with_clock(&record, &CLOCK);
    assert!(document.contains("EMAIL;PREF;INTERNET:jane@example.com\r\n"));

    let record = ContactRecord::builder(VcfVersion::V4)
        .formatted_name("Jane Doe")
        .email("jane@example.com")
        .build()
        .expect("record has a name");
    let document = encode_with_clock(&record, &CLOCK);
    assert!(document.contains("EMAIL:jane@example.com\r\n"));
    assert!(!document.contains("EMAIL;PREF;INTERNET"));
}

#[test]
fn formatted_name_is_synthesized_from_the_structured_name() {
    let record = ContactRecord::builder(VcfVersion::V4)
        .name(StructuredName::simple("Jane", "Doe"))
        .build()
        .expect("record has a name");
    let document = encode_with_clock(&record, &CLOCK);

    assert!(document.contains("FN:Jane Doe\r\n"));
    assert!(document.contains("N:Doe;Jane;;;\r\n"));
}

#[test]
fn explicit_formatted_name_wins_over_synthesis() {
    let record = ContactRecord::builder(VcfVersion::V4)
        .formatted_name("JD")
        .name(StructuredName::simple("Jane", "Doe"))
        .build()
        .expect("record has a name");
    let document = encode_with_clock(&record, &CLOCK);

    assert!(document.contains("FN:JD\r\n"));
    assert!(document.contains("N:Doe;Jane;;;\r\n"));
}

#[test]
fn address_shape_below_v4() {
    let record = ContactRecord::builder(VcfVersion::V3)
        .formatted_name("Jane Doe")
        .address(work_address(AddressValue {
            street: Some("1 Main St".to_string()),
            city: Some("Springfield".to_string()),
            ..AddressValue::default()
        }))
        .build()
        .expect("record has a name");
    let document = encode_with_clock(&record, &CLOCK);

    assert!(document.contains("ADR;TYPE=work:;;1 Main St;Springfield;;;\r\n"));
    assert!(!document.contains("LABEL"));
}

#[test]
fn address_shape_at_v4_folds_the_label_parameter() {
    let record = ContactRecord::builder(VcfVersion::V4)
        .formatted_name("Jane Doe")
        .address(work_address(AddressValue {
            street: Some("1 Main St".to_string()),
            city: Some("Springfield".to_string()),
            ..AddressValue::default()
        }))
        .build()
        .expect("record has a name");
    let document = encode_with_clock(&record, &CLOCK);

    // An empty LABEL parameter is still written at 4.0.
    assert!(document.contains("ADR;TYPE=work;LABEL=:;;1 Main St;Springfield;;;\r\n"));
}

#[test]
fn present_label_below_v4_becomes_a_separate_property() {
    let record = ContactRecord::builder(VcfVersion::V3)
        .formatted_name("Jane Doe")
        .address(work_address(AddressValue {
            label: Some("Suite 5".to_string()),
            street: Some("1 Main St".to_string()),
            ..AddressValue::default()
        }))
        .build()
        .expect("record has a name");
    let document = encode_with_clock(&record, &CLOCK);

    let label_at = document.find("LABEL;TYPE=work:Suite 5\r\n").expect("LABEL line");
    let adr_at = document.find("ADR;TYPE=work:;;1 Main St;;;;\r\n").expect("ADR line");
    assert!(label_at < adr_at);
}

#[test]
fn empty_address_is_skipped() {
    let record = ContactRecord::builder(VcfVersion::V4)
        .formatted_name("Jane Doe")
        .address(work_address(AddressValue::default()))
        .build()
        .expect("record has a name");
    let document = encode_with_clock(&record, &CLOCK);
    assert!(!document.contains("ADR"));
}

#[test]
fn phones_are_repeated_in_input_order() {
    let record = ContactRecord::builder(VcfVersion::V4)
        .formatted_name("Jane Doe")
        .phone("cell", "555-1111")
        .phone("home", "555-2222")
        .build()
        .expect("record has a name");
    let document = encode_with_clock(&record, &CLOCK);

    let first = document.find("TEL;TYPE=cell:555-1111\r\n").expect("first TEL");
    let second = document.find("TEL;TYPE=home:555-2222\r\n").expect("second TEL");
    assert!(first < second);
    assert_eq!(document.matches("TEL;").count(), 2);
}

#[test]
fn organizational_fields_are_emitted_in_order() {
    let record = ContactRecord::builder(VcfVersion::V4)
        .formatted_name("Jane Doe")
        .title("Engineer")
        .role("Backend")
        .organization("Acme, Inc.")
        .url("https://example.com")
        .note("On sabbatical")
        .build()
        .expect("record has a name");
    let document = encode_with_clock(&record, &CLOCK);

    let positions: Vec<usize> = [
        "TITLE:Engineer\r\n",
        "ROLE:Backend\r\n",
        "ORG:Acme\\, Inc.\r\n",
        "URL:https://example.com\r\n",
        "NOTE:On sabbatical\r\n",
    ]
    .iter()
    .map(|needle| document.find(needle).expect("property line"))
    .collect();
    assert!(positions.is_sorted());
}

#[test]
fn extensions_are_uppercased_and_escaped() {
    let record = ContactRecord::builder(VcfVersion::V4)
        .formatted_name("Jane Doe")
        .extension("x-custom", "hello, world")
        .social_profile("twitter", "@x")
        .build()
        .expect("record has a name");
    let document = encode_with_clock(&record, &CLOCK);

    assert!(document.contains("X-CUSTOM:hello\\, world\r\n"));
    assert!(document.contains("X-SOCIALPROFILE;TYPE=twitter:@x\r\n"));
}

#[test]
fn present_but_empty_scalar_is_still_emitted() {
    let record = ContactRecord::builder(VcfVersion::V4)
        .formatted_name("Jane Doe")
        .title("")
        .build()
        .expect("record has a name");
    let document = encode_with_clock(&record, &CLOCK);
    assert!(document.contains("TITLE:\r\n"));
}

#[test]
fn rev_is_stamped_from_the_injected_clock() {
    let document = encode_with_clock(&minimal(VcfVersion::V4), &CLOCK);
    assert!(document.contains("REV:2024-05-14T09:30:00-05:00\r\n"));
}

#[test]
fn only_the_rev_line_depends_on_the_clock() {
    let record = ContactRecord::builder(VcfVersion::V4)
        .formatted_name("Jane Doe")
        .email("jane@example.com")
        .phone("cell", "555-1111")
        .build()
        .expect("record has a name");

    let earlier = encode_with_clock(&record, &FixedClock("2024-05-14T09:30:00-05:00"));
    let later = encode_with_clock(&record, &FixedClock("2025-12-31T23:59:59+01:00"));

    let earlier_lines: Vec<&str> = earlier.split("\r\n").collect();
    let later_lines: Vec<&str> = later.split("\r\n").collect();
    assert_eq!(earlier_lines.len(), later_lines.len());
    for (a, b) in earlier_lines.iter().zip(&later_lines) {
        if a.starts_with("REV:") {
            assert!(b.starts_with("REV:"));
            assert_ne!(a, b);
        } else {
            assert_eq!(a, b);
        }
    }
}

#[test]
fn deserialized_singular_forms_encode_like_built_sequences() {
    let deserialized: ContactRecord = serde_json::from_str(
        r#"{
            "version": 4,
            "formattedName": "Jane Doe",
            "addresses": {"type": "work", "value": {"city": "Springfield"}},
            "phones": {"type": "cell", "value": "555-1111"}
        }"#,
    )
    .expect("record deserializes");

    let built = ContactRecord::builder(VcfVersion::V4)
        .formatted_name("Jane Doe")
        .address(work_address(AddressValue {
            city: Some("Springfield".to_string()),
            ..AddressValue::default()
        }))
        .phone("cell", "555-1111")
        .build()
        .expect("record has a name");

    assert_eq!(
        encode_with_clock(&deserialized, &CLOCK),
        encode_with_clock(&built, &CLOCK)
    );
}
