//! Compound and union values survive a write/read cycle in every version
//! that can express them.

use vcardkit_test::vcard::core::{
    Address, AddressComponent, AddressProperty, DataProperty, DataValue, Gender, GenderProperty,
    Name, NameComponent, NameProperty, OrgProperty, Organization, Relation, RelationProperty,
    Sex, StringCollectionProperty, TextProperty, VCardVersion, VcfOptions,
};
use vcardkit_test::vcard::{parse_single, serialize_single};
use vcardkit_test::{VERSIONS, named, reparse};

fn items(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

#[test_log::test]
fn name_round_trip() {
    let name = Name::from_components([
        (NameComponent::Surnames, items(&["Müller"])),
        (NameComponent::Given, items(&["Jürgen"])),
        (NameComponent::Prefixes, items(&["Dr."])),
        (NameComponent::Suffixes, items(&["Jr."])),
    ]);
    let mut card = named("Jürgen Müller");
    card.names.push(NameProperty::new(name.clone()));

    for version in VERSIONS {
        let reparsed = reparse(&card, version, VcfOptions::default()).unwrap();
        assert_eq!(reparsed.names[0].value(), &name, "{version}");
    }
}

#[test]
fn name_extensions_round_trip_in_v4() {
    let name = Name::from_components([
        (NameComponent::Surnames, items(&["Garcia"])),
        (NameComponent::Given, items(&["Ana"])),
        (NameComponent::Surnames2, items(&["Lopez"])),
        (NameComponent::Generation, items(&["III"])),
    ]);
    let mut card = named("Ana Garcia");
    card.names.push(NameProperty::new(name.clone()));

    let options = VcfOptions::default() | VcfOptions::WRITE_RFC9554_EXTENSIONS;
    let reparsed = reparse(&card, VCardVersion::V4_0, options).unwrap();
    assert_eq!(reparsed.names[0].value(), &name);
}

#[test]
fn multi_valued_components_in_v4() {
    let name = Name::from_components([
        (NameComponent::Surnames, items(&["Doe"])),
        (NameComponent::Given, items(&["John"])),
        (NameComponent::Additional, items(&["Philip", "Paul"])),
    ]);
    let mut card = named("John Doe");
    card.names.push(NameProperty::new(name.clone()));

    let reparsed = reparse(&card, VCardVersion::V4_0, VcfOptions::default()).unwrap();
    assert_eq!(reparsed.names[0].value(), &name);

    // Older versions join the items with a space.
    let reparsed = reparse(&card, VCardVersion::V3_0, VcfOptions::default()).unwrap();
    assert_eq!(reparsed.names[0].value().additional(), ["Philip Paul"]);
}

#[test_log::test]
fn address_round_trip() {
    let address = Address::from_components([
        (AddressComponent::Street, items(&["Königstraße 1"])),
        (AddressComponent::Locality, items(&["Berlin"])),
        (AddressComponent::PostalCode, items(&["10117"])),
        (AddressComponent::Country, items(&["Germany; EU"])),
    ]);
    let mut card = named("x");
    card.addresses.push(AddressProperty::new(address.clone()));

    for version in VERSIONS {
        let reparsed = reparse(&card, version, VcfOptions::default()).unwrap();
        assert_eq!(reparsed.addresses[0].value(), &address, "{version}");
    }
}

#[test]
fn organization_round_trip() {
    let organization = Organization::new(
        Some("ABC, Inc.".to_string()),
        items(&["North American Division", "Marketing"]),
    );
    let mut card = named("x");
    card.organizations.push(OrgProperty::new(organization.clone()));

    for version in [VCardVersion::V3_0, VCardVersion::V4_0] {
        let reparsed = reparse(&card, version, VcfOptions::default()).unwrap();
        assert_eq!(reparsed.organizations[0].value(), &organization, "{version}");
    }
}

#[test]
fn gender_round_trip_in_v4() {
    let gender = Gender::full(Some(Sex::Other), Some("non-binary".to_string()));
    let mut card = named("x");
    card.gender.push(GenderProperty::new(gender.clone()));

    let reparsed = reparse(&card, VCardVersion::V4_0, VcfOptions::default()).unwrap();
    assert_eq!(reparsed.gender[0].value(), &gender);
}

#[test]
fn categories_round_trip() {
    let mut card = named("x");
    card.categories
        .push(StringCollectionProperty::new(items(&["work", "a, b"])));

    for version in [VCardVersion::V3_0, VCardVersion::V4_0] {
        let reparsed = reparse(&card, version, VcfOptions::default()).unwrap();
        assert_eq!(reparsed.categories[0].value(), &items(&["work", "a, b"]), "{version}");
    }
}

#[test]
fn text_with_special_characters() {
    let note = "Line one\nLine two; with semicolon, comma and back\\slash";
    let mut card = named("x");
    card.notes.push(TextProperty::new(note));

    for version in VERSIONS {
        let reparsed = reparse(&card, version, VcfOptions::default()).unwrap();
        assert_eq!(reparsed.notes[0].value(), note, "{version}");
    }
}

#[test]
fn binary_data_round_trip() {
    let data = DataValue::from_bytes(vec![0, 1, 2, 254, 255], Some("image/png".to_string()));
    let mut card = named("x");
    card.logos.push(DataProperty::new(data.clone()));

    for version in VERSIONS {
        let reparsed = reparse(&card, version, VcfOptions::default()).unwrap();
        assert_eq!(reparsed.logos[0].value(), &data, "{version}");
    }
}

#[test]
fn relation_uri_round_trip_in_v4() {
    let relation = Relation::from_text("https://example.com/people/jane");
    assert!(relation.as_uri().is_some());

    let mut card = named("x");
    card.relations.push(RelationProperty::new(relation.clone()));

    let reparsed = reparse(&card, VCardVersion::V4_0, VcfOptions::default()).unwrap();
    assert_eq!(reparsed.relations[0].value(), &relation);
}

#[test]
fn uris_written_as_read() {
    let text = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:x\r\nUID:http://host\r\n\
                PHOTO:HTTP://Example.COM/Me.jpg\r\nRELATED:https://peer\r\nEND:VCARD\r\n";
    let card = parse_single(text).unwrap();

    for version in [VCardVersion::V3_0, VCardVersion::V4_0] {
        let written = serialize_single(&card, version, VcfOptions::default());
        assert!(written.contains(":http://host\r\n"), "{version}: {written}");
        assert!(written.contains(":HTTP://Example.COM/Me.jpg\r\n"), "{version}: {written}");
        assert!(!written.contains("http://host/"), "{version}: {written}");
        if version == VCardVersion::V4_0 {
            assert!(written.contains(":https://peer\r\n"), "{written}");
        }
    }
}
