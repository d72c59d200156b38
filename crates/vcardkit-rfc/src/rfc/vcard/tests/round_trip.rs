//! Round-trip parsing and serialization tests for vCard.
//!
//! These tests verify that vCards can be parsed and serialized back, into
//! their own version or another one, without losing information the target
//! version can express.

use super::fixtures::*;
use crate::rfc::vcard::build::{serialize, serialize_single};
use crate::rfc::vcard::core::{VCard, VCardVersion, VcfOptions};
use crate::rfc::vcard::parse::{parse, parse_single};
use crate::rfc::vcard::reference::dereference;

/// Parse a vCard, serialize it to `version`, then parse again.
fn round_trip(input: &str, version: VCardVersion) -> Result<(VCard, VCard), String> {
    // First parse
    let vcard1 = parse_single(input).map_err(|e| format!("First parse failed: {e}"))?;

    // Serialize
    let serialized = serialize_single(&vcard1, version, VcfOptions::default());

    // Second parse
    let vcard2 =
        parse_single(&serialized).map_err(|e| format!("Second parse failed: {e}\n{serialized}"))?;

    if vcard2.version != version {
        return Err(format!(
            "Version mismatch: {:?} vs {:?}",
            vcard2.version, version
        ));
    }

    Ok((vcard1, vcard2))
}

/// Round trip into the same version must reproduce the card exactly.
fn assert_identical(input: &str) {
    let card = parse_single(input).expect("parse fixture");
    let (vcard1, vcard2) = round_trip(input, card.version).expect("round trip should succeed");
    assert_eq!(vcard1, vcard2);
}

#[test]
fn round_trip_basic_vcard() {
    assert_identical(VCARD_BASIC);
}

#[test]
fn round_trip_structured_name() {
    assert_identical(VCARD_STRUCTURED_NAME);
}

#[test]
fn round_trip_organization() {
    assert_identical(VCARD_ORGANIZATION);
}

#[test]
fn round_trip_author_vcard() {
    let (vcard1, vcard2) =
        round_trip(VCARD_AUTHOR, VCardVersion::V4_0).expect("round trip should succeed");

    assert_eq!(vcard1.names, vcard2.names);
    assert_eq!(vcard1.birthdays, vcard2.birthdays);
    assert_eq!(vcard1.gender, vcard2.gender);
    assert_eq!(vcard1.languages, vcard2.languages);
    assert_eq!(vcard1.addresses, vcard2.addresses);
    assert_eq!(vcard1.emails, vcard2.emails);
    assert_eq!(vcard1.geo, vcard2.geo);
    assert_eq!(vcard1.urls, vcard2.urls);
    assert_eq!(vcard2.anniversaries.len(), 1);
}

#[test_log::test]
fn round_trip_v3() {
    let (vcard1, vcard2) =
        round_trip(VCARD_V3, VCardVersion::V3_0).expect("round trip should succeed");

    assert_eq!(vcard1.product_id, vcard2.product_id);
    assert_eq!(vcard1.addresses, vcard2.addresses);
    assert_eq!(vcard1.phones, vcard2.phones);
    assert_eq!(vcard1.photos, vcard2.photos);
    assert_eq!(vcard1.gender, vcard2.gender);
    assert_eq!(vcard1.non_standard, vcard2.non_standard);

    let agent = vcard2.relations[0].value().as_vcard().expect("agent card");
    assert_eq!(agent.formatted_name(), Some("Susan Thomas"));
    assert_eq!(agent.telephone_numbers(), ["+1-919-555-1234"]);
}

#[test_log::test]
fn round_trip_v21() {
    let (vcard1, vcard2) =
        round_trip(VCARD_V21, VCardVersion::V2_1).expect("round trip should succeed");

    assert_eq!(vcard1.formatted_names, vcard2.formatted_names);
    assert_eq!(vcard1.names, vcard2.names);
    assert_eq!(vcard1.phones, vcard2.phones);
    assert_eq!(vcard1.notes, vcard2.notes);
    assert_eq!(vcard1.photos, vcard2.photos);

    let agent = vcard2.relations[0].value().as_vcard().expect("agent card");
    assert_eq!(agent.formatted_name(), Some("Assistant"));
}

#[test_log::test]
fn v21_to_v4() {
    let (vcard1, vcard2) =
        round_trip(VCARD_V21, VCardVersion::V4_0).expect("round trip should succeed");

    assert_eq!(vcard2.formatted_name(), Some("Jürgen Müller"));
    assert_eq!(vcard1.notes[0].value(), vcard2.notes[0].value());
    assert_eq!(vcard2.photos[0].value().as_bytes(), Some(b"Hello".as_slice()));
    assert_eq!(vcard2.photos[0].value().media_type(), Some("image/jpeg"));

    assert!(vcard2.relations[0].value().as_vcard().is_none());
    assert_eq!(vcard2.relations[0].value().as_text(), Some("Assistant"));
}

#[test_log::test]
fn v3_to_v4_moves_label_into_parameter() {
    let card = parse_single(VCARD_V3).expect("parse");
    let serialized = serialize_single(&card, VCardVersion::V4_0, VcfOptions::empty());

    assert!(serialized.contains("LABEL=\"6544 Battleford Drive^nRaleigh, NC 27613-3502\""));
    assert!(!serialized.contains("X-GENDER"));
    assert!(serialized.contains("GENDER:M\r\n"));

    let reparsed = parse_single(&serialized).expect("reparse");
    assert_eq!(card.addresses[0].parameters.label, reparsed.addresses[0].parameters.label);
}

#[test_log::test]
fn separate_agent_cards_resolve_back() {
    let card = parse_single(VCARD_V3).expect("parse");
    let options = VcfOptions::default() | VcfOptions::INCLUDE_AGENT_AS_SEPARATE_VCARD;
    let serialized = serialize(&[card], VCardVersion::V4_0, options);

    let cards = parse(&serialized).expect("reparse");
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[1].formatted_name(), Some("Susan Thomas"));
    assert!(cards[0].relations[0].value().as_vcard().is_none());

    let cards = dereference(&cards);
    let agent = cards[0].relations[0]
        .value()
        .as_vcard()
        .expect("resolved agent card");
    assert_eq!(agent.formatted_name(), Some("Susan Thomas"));
}

#[test]
fn multiple_cards_keep_order() {
    let cards = parse(VCARD_MALFORMED).expect("parse");
    let serialized = serialize(&cards, VCardVersion::V3_0, VcfOptions::default());

    let reparsed = parse(&serialized).expect("reparse");
    let names: Vec<_> = reparsed.iter().filter_map(VCard::formatted_name).collect();
    assert_eq!(names, ["First", "Second"]);
}
