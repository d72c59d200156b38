//! Swapping embedded relation cards for UID references and back.
//!
//! 4.0 has no way to embed a card in a property. Before such output the
//! embedded cards are lifted into the card list and the relations point at
//! their UID instead; after reading, [`dereference`] restores the embedding.

use uuid::Uuid;

use crate::rfc::vcard::build::serialize_single;
use crate::rfc::vcard::core::{
    ContactId, Relation, RelationProperty, VCard, VCardVersion, VcfOptions,
};

/// Namespace of the name-based UIDs given to embedded cards.
const EMBEDDED_CARD_NAMESPACE: Uuid = Uuid::from_u128(0x6c1f_0e3a_52d4_4f0b_9a47_3b8e_d2c9_71a5);

/// Replaces embedded relation cards by references to their UID.
///
/// Returns `cards` followed by every embedded card as a document of its
/// own, nested embeddings included. An embedded card without UID is given
/// a name-based one derived from its content, so referencing the same
/// cards twice gives the same result. A card whose UID is already in the
/// list is not added twice.
#[must_use]
pub fn reference(cards: &[VCard]) -> Vec<VCard> {
    let mut result = cards.to_vec();
    let mut extracted = Vec::new();
    for card in &mut result {
        extract(card, &mut extracted);
    }

    for card in extracted {
        let known = card
            .uid()
            .is_some_and(|uid| result.iter().any(|c| c.uid() == Some(uid)));
        if !known {
            result.push(card);
        }
    }

    result
}

fn extract(card: &mut VCard, extracted: &mut Vec<VCard>) {
    for relation in &mut card.relations {
        let Some(mut embedded) = relation.value().as_vcard().cloned() else {
            continue;
        };

        let id = if let Some(id) = embedded.uid() {
            id.clone()
        } else {
            let id = ContactId::from_uuid(content_uuid(&embedded));
            embedded.set_uid(id.clone());
            id
        };
        extract(&mut embedded, extracted);

        let mut property = RelationProperty::with_parameters(
            Relation::from_contact_id(&id),
            relation.parameters.clone(),
        );
        property.group = relation.group.take();
        *relation = property;

        tracing::trace!("Replaced embedded card by reference");
        extracted.push(embedded);
    }
}

fn content_uuid(card: &VCard) -> Uuid {
    let content = serialize_single(card, VCardVersion::V4_0, VcfOptions::empty());
    Uuid::new_v5(&EMBEDDED_CARD_NAMESPACE, content.as_bytes())
}

/// Replaces relation references by copies of the cards they point to.
///
/// Identifiers that match no UID in `cards` stay references. The embedded
/// copies keep their own relations as references, so reference cycles end
/// after one level.
#[must_use]
pub fn dereference(cards: &[VCard]) -> Vec<VCard> {
    cards
        .iter()
        .map(|card| {
            let mut card = card.clone();
            for relation in &mut card.relations {
                let Some(id) = relation.value().to_contact_id() else {
                    continue;
                };
                if id.is_empty() {
                    continue;
                }
                let Some(target) = cards.iter().find(|c| c.uid() == Some(&id)) else {
                    continue;
                };

                let mut property = RelationProperty::with_parameters(
                    Relation::from_vcard(target),
                    relation.parameters.clone(),
                );
                property.group = relation.group.take();
                *relation = property;
            }
            card
        })
        .collect()
}
