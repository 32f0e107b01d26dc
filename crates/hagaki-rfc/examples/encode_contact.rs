//! Example encoding a contact card in both supported shapes.
//!
//! Run with: `cargo run --package hagaki-rfc --example encode_contact`

use hagaki_core::record::{Address, AddressValue, ContactRecord, StructuredName, VcfVersion};
use hagaki_rfc::vcf::encode;

fn main() {
    for version in [VcfVersion::V3, VcfVersion::V4] {
        let record = ContactRecord::builder(version)
            .name(StructuredName::simple("Jane", "Doe"))
            .nickname("JD")
            .email("jane@example.com")
            .phone("cell", "+1-555-555-1111")
            .address(Address::new(
                "work",
                AddressValue {
                    label: Some("Head office".to_string()),
                    street: Some("1 Main St".to_string()),
                    city: Some("Springfield".to_string()),
                    state_province: Some("IL".to_string()),
                    postal_code: Some("62704".to_string()),
                    country_region: Some("USA".to_string()),
                },
            ))
            .title("Engineer")
            .organization("Acme, Inc.")
            .social_profile("twitter", "@janedoe")
            .extension("x-favorite-color", "teal")
            .build()
            .expect("example record is complete");

        println!("--- vCard {version} ---");
        print!("{}", encode(&record));
        println!();
    }
}
