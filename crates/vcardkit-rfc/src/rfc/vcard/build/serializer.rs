//! vCard serialization.

use super::fold::{fold_line, fold_quoted_printable};
use crate::rfc::vcard::core::{
    AddressProperty, GenderProperty, Name, NameProperty, ParameterSection, RelationKind,
    RelationProperty, TextProperty, VCard, VCardVersion, ValueEncoding, VcfOptions, VcfProperty,
};
use crate::rfc::vcard::encoding::quoted_printable;
use crate::rfc::vcard::reference::reference;

const LINE_BREAK: &str = "\r\n";

/// Serializes one or more vCards to a string.
///
/// ## Summary
/// Every card is written in `version`, whatever version it was read
/// from. For 4.0 with [`VcfOptions::INCLUDE_AGENT_AS_SEPARATE_VCARD`],
/// embedded relation cards are replaced by UID references and written as
/// documents of their own.
#[must_use]
#[tracing::instrument(skip(cards), fields(count = cards.len()))]
pub fn serialize(cards: &[VCard], version: VCardVersion, options: VcfOptions) -> String {
    tracing::debug!("Serializing vCards");

    let referenced;
    let cards = if version == VCardVersion::V4_0
        && options.contains(VcfOptions::INCLUDE_AGENT_AS_SEPARATE_VCARD)
    {
        referenced = reference(cards);
        tracing::trace!(count = referenced.len(), "Referenced embedded cards");
        referenced.as_slice()
    } else {
        cards
    };

    let mut serializer = VcfSerializer::new(version, options);
    for card in cards {
        serializer.append_card(card);
    }
    serializer.finish()
}

/// Serializes a single vCard to a string.
#[must_use]
pub fn serialize_single(card: &VCard, version: VCardVersion, options: VcfOptions) -> String {
    let mut serializer = VcfSerializer::new(version, options);
    serializer.append_card(card);
    serializer.finish()
}

/// Drives the two-step protocol of [`VcfProperty`] and owns everything
/// around the value: key, group, parameters, folding and line breaks.
///
/// The card being written is never modified; each property is prepared on
/// a working copy of its parameters.
#[derive(Debug)]
pub struct VcfSerializer {
    version: VCardVersion,
    options: VcfOptions,
    /// Value of the current line.
    builder: String,
    /// Scratch buffer, cleared before every use.
    worker: String,
    parameters: ParameterSection,
    output: String,
    /// Lines written after the current property (2.1 AGENT).
    embedded: String,
}

impl VcfSerializer {
    #[must_use]
    pub fn new(version: VCardVersion, options: VcfOptions) -> Self {
        Self {
            version,
            options,
            builder: String::new(),
            worker: String::new(),
            parameters: ParameterSection::default(),
            output: String::new(),
            embedded: String::new(),
        }
    }

    #[must_use]
    pub const fn version(&self) -> VCardVersion {
        self.version
    }

    #[must_use]
    pub const fn options(&self) -> VcfOptions {
        self.options
    }

    /// Working copy of the current property's parameters.
    #[must_use]
    pub const fn parameters(&self) -> &ParameterSection {
        &self.parameters
    }

    pub const fn parameters_mut(&mut self) -> &mut ParameterSection {
        &mut self.parameters
    }

    /// Applies the default version adjustments to the working parameters.
    /// `text` is the value as it will be written, if the property has one.
    pub fn normalize_parameters(&mut self, text: Option<&str>) {
        self.parameters.normalize(self.version, text);
    }

    /// Renders text with the scratch buffer and returns a copy of it.
    pub fn render(&mut self, write: impl FnOnce(&mut String, VCardVersion, VcfOptions)) -> String {
        self.worker.clear();
        write(&mut self.worker, self.version, self.options);
        self.worker.clone()
    }

    /// Appends to the value of the current line.
    pub fn append_value_with(&mut self, write: impl FnOnce(&mut String, VCardVersion, VcfOptions)) {
        write(&mut self.builder, self.version, self.options);
    }

    /// Queues complete lines to follow the current property.
    pub fn embed_lines(&mut self, lines: String) {
        self.embedded.push_str(&lines);
    }

    /// Writes one property, unless it is empty and empty properties are
    /// not wanted.
    pub fn append_property(&mut self, key: &str, property: &dyn VcfProperty) {
        if property.is_empty() && !self.options.contains(VcfOptions::WRITE_EMPTY_PROPERTIES) {
            tracing::trace!(key, "Skipping empty property");
            return;
        }
        self.write_property(key, property);
    }

    fn append_all<P: VcfProperty>(&mut self, key: &str, properties: &[P]) {
        for property in properties {
            self.append_property(key, property);
        }
    }

    fn write_property(&mut self, key: &str, property: &dyn VcfProperty) {
        self.parameters.clone_from(property.parameters());
        property.prepare_for_vcf_serialization(self);

        self.builder.clear();
        property.append_value(self);

        let mut line = String::with_capacity(key.len() + self.builder.len() + 16);
        if self.options.contains(VcfOptions::WRITE_GROUPS)
            && let Some(group) = property.group()
        {
            line.push_str(group);
            line.push('.');
        }
        line.push_str(key);
        self.parameters.append_to(&mut line, self.version, self.options);
        line.push(':');

        let quoted_printable = self.parameters.is_quoted_printable();
        if quoted_printable {
            quoted_printable::append_encoded(&mut line, &self.builder);
        } else {
            line.push_str(&self.builder);
        }
        self.push_line(&line, quoted_printable);

        // 2.1 readers expect a blank line after inline binary data.
        if self.version == VCardVersion::V2_1
            && self.parameters.encoding == Some(ValueEncoding::Base64)
        {
            self.output.push_str(LINE_BREAK);
        }

        if !self.embedded.is_empty() {
            self.output.push_str(&self.embedded);
            self.embedded.clear();
        }
    }

    fn push_line(&mut self, line: &str, quoted_printable: bool) {
        if self.options.contains(VcfOptions::LIMIT_LINE_LENGTH) {
            let folded = if quoted_printable {
                fold_quoted_printable(line)
            } else {
                fold_line(line)
            };
            self.output.push_str(&folded);
        } else {
            self.output.push_str(line);
        }
        self.output.push_str(LINE_BREAK);
    }

    /// Writes a complete `BEGIN:VCARD` … `END:VCARD` block.
    pub fn append_card(&mut self, card: &VCard) {
        let version = self.version;
        let modern = version == VCardVersion::V4_0;

        self.push_line("BEGIN:VCARD", false);
        let version_line = format!("VERSION:{version}");
        self.push_line(&version_line, false);

        if version != VCardVersion::V2_1
            && let Some(product_id) = &card.product_id
        {
            self.append_property("PRODID", product_id);
        }
        if modern && let Some(kind) = &card.kind {
            self.append_property("KIND", kind);
        }

        self.append_formatted_names(card);
        self.append_names(card);

        self.append_all("NICKNAME", &card.nicknames);
        self.append_all("PHOTO", &card.photos);
        self.append_all("BDAY", &card.birthdays);
        if modern {
            self.append_all("ANNIVERSARY", &card.anniversaries);
        }
        self.append_genders(&card.gender);

        for address in &card.addresses {
            self.append_address(address);
        }
        self.append_all("TEL", &card.phones);
        self.append_all("EMAIL", &card.emails);
        if version != VCardVersion::V2_1 {
            self.append_all("IMPP", &card.messengers);
        }
        if modern {
            self.append_all("LANG", &card.languages);
        }
        if !modern {
            self.append_all("MAILER", &card.mailers);
        }

        self.append_all("TZ", &card.time_zones);
        self.append_all("GEO", &card.geo);

        self.append_all("TITLE", &card.titles);
        self.append_all("ROLE", &card.roles);
        self.append_all("LOGO", &card.logos);
        self.append_all("ORG", &card.organizations);
        if modern {
            self.append_all("MEMBER", &card.members);
        }
        self.append_relations(&card.relations);

        self.append_all("CATEGORIES", &card.categories);
        self.append_all("NOTE", &card.notes);
        if let Some(revision) = &card.revision {
            self.append_property("REV", revision);
        }
        self.append_all("SOUND", &card.sounds);
        if let Some(uid) = &card.uid {
            self.append_property("UID", uid);
        }
        if modern {
            self.append_all("CLIENTPIDMAP", &card.client_pid_maps);
        }
        self.append_all("URL", &card.urls);
        self.append_all("KEY", &card.keys);

        if version != VCardVersion::V2_1 {
            self.append_all("FBURL", &card.free_busy_urls);
            self.append_all("CALADRURI", &card.calendar_addresses);
            self.append_all("CALURI", &card.calendar_urls);
            self.append_all("SOURCE", &card.sources);
        }

        if self
            .options
            .contains(VcfOptions::WRITE_NON_STANDARD_PROPERTIES)
        {
            for property in &card.non_standard {
                self.append_property(property.key(), property);
            }
        }

        self.push_line("END:VCARD", false);
    }

    /// FN is mandatory from 3.0 on; a card without one gets an FN derived
    /// from its name, organization or email.
    fn append_formatted_names(&mut self, card: &VCard) {
        let has_name = card.formatted_names.iter().any(|p| !p.is_empty());
        if has_name || self.version == VCardVersion::V2_1 {
            self.append_all("FN", &card.formatted_names);
            return;
        }

        let derived = card
            .names
            .iter()
            .map(|p| p.value().display_name())
            .find(|name| !name.trim().is_empty())
            .or_else(|| {
                card.organizations
                    .iter()
                    .find_map(|p| p.value().name().map(str::to_string))
            })
            .or_else(|| card.email_addresses().first().map(|e| (*e).to_string()))
            .unwrap_or_default();
        self.write_property("FN", &TextProperty::new(derived));
    }

    /// N is mandatory in 2.1 and 3.0.
    fn append_names(&mut self, card: &VCard) {
        let has_name = card.names.iter().any(|p| !p.is_empty());
        if has_name || self.version == VCardVersion::V4_0 {
            self.append_all("N", &card.names);
        } else {
            self.write_property("N", &NameProperty::new(Name::default()));
        }
    }

    /// 2.1 and 3.0 only know `X-GENDER` with male or female.
    fn append_genders(&mut self, genders: &[GenderProperty]) {
        if self.version == VCardVersion::V4_0 {
            self.append_all("GENDER", genders);
            return;
        }
        if !self
            .options
            .contains(VcfOptions::WRITE_NON_STANDARD_PROPERTIES)
        {
            return;
        }
        for gender in genders {
            if gender.value().sex.and_then(|sex| sex.legacy_text()).is_some() {
                self.append_property("X-GENDER", gender);
            }
        }
    }

    /// 2.1 and 3.0 write the delivery label as a LABEL property of its own.
    fn append_address(&mut self, address: &AddressProperty) {
        self.append_property("ADR", address);

        if self.version == VCardVersion::V4_0 {
            return;
        }
        let Some(label) = &address.parameters.label else {
            return;
        };

        let mut parameters = ParameterSection::default();
        parameters.property_class = address.parameters.property_class;
        parameters.address_kind = address.parameters.address_kind;
        parameters.language.clone_from(&address.parameters.language);
        let mut property = TextProperty::with_parameters(label.clone(), parameters);
        property.group.clone_from(&address.group);
        self.append_property("LABEL", &property);
    }

    /// 4.0 writes RELATED. 2.1 and 3.0 only know AGENT, which takes
    /// embedded cards and relations of kind agent.
    fn append_relations(&mut self, relations: &[RelationProperty]) {
        if self.version == VCardVersion::V4_0 {
            self.append_all("RELATED", relations);
            return;
        }

        for relation in relations {
            let is_agent = relation.value().as_vcard().is_some()
                || relation
                    .parameters
                    .relation_kind
                    .is_some_and(|kind| kind.contains(RelationKind::AGENT));
            if is_agent {
                self.append_property("AGENT", relation);
            } else {
                tracing::trace!("Skipping relation without a legacy property");
            }
        }
    }

    /// Returns the written text.
    #[must_use]
    pub fn finish(self) -> String {
        self.output
    }
}
