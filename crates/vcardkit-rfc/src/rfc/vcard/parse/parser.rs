//! vCard document parser.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{ContentLine, parse_content_line, split_lines};
use super::values::unescape_text;
use crate::rfc::vcard::core::{
    Address, AddressProperty, FlagOption, NonStandardProperty, ParameterSection, Property,
    PropertyValue, Relation, RelationKind, RelationProperty, TextProperty, VCard,
    VCardParameter, VCardVersion,
};
use crate::rfc::vcard::encoding::quoted_printable;

/// Version assumed until a card declares one that is known.
const DEFAULT_VERSION: VCardVersion = VCardVersion::V3_0;

/// Embedded AGENT cards deeper than this are skipped.
const MAX_NESTING: usize = 8;

/// Parses a vCard document into one or more vCards.
///
/// ## Summary
/// Parses the input string as a vCard document and returns all vCards found.
/// Lines that cannot be read are skipped with a warning, and a card that
/// is not closed with `END:VCARD` ends with the input. A card declaring a
/// version other than 2.1, 3.0 or 4.0 is read as 3.0.
///
/// ## Errors
/// Malformed input degrades instead of failing; the result type is the one
/// shared with [`parse_single`].
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> ParseResult<Vec<VCard>> {
    tracing::debug!("Parsing vCard document");

    let lines = split_lines(input);

    tracing::trace!(count = lines.len(), "Split lines");

    let mut parser = Parser::new(lines, 0);
    let result = parser.parse_document();

    tracing::debug!(count = result.len(), "Parsed vCards");

    Ok(result)
}

/// Parses a single vCard from input.
///
/// ## Summary
/// Convenience function for parsing a document with exactly one vCard.
///
/// ## Errors
/// Returns an error if the document contains no vCards.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_single(input: &str) -> ParseResult<VCard> {
    tracing::debug!("Parsing single vCard");

    let cards = parse(input)?;
    cards.into_iter().next().ok_or_else(|| {
        tracing::warn!("No vCard found in document");
        ParseError::new(
            ParseErrorKind::UnexpectedEof,
            1,
            "no vCard found in document",
        )
    })
}

fn is_begin(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("BEGIN:VCARD")
}

fn is_end(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("END:VCARD")
}

struct Parser {
    lines: Vec<String>,
    pos: usize,
    /// Number of AGENT cards enclosing the one being read.
    depth: usize,
}

impl Parser {
    fn new(lines: Vec<String>, depth: usize) -> Self {
        Self {
            lines,
            pos: 0,
            depth,
        }
    }

    fn parse_document(&mut self) -> Vec<VCard> {
        let mut cards = Vec::new();

        while let Some(line) = self.lines.get(self.pos) {
            self.pos += 1;

            if is_begin(line) {
                cards.push(self.parse_vcard());
            } else {
                tracing::trace!(line = self.pos, "Skipping content outside of a vCard");
            }
        }

        cards
    }

    /// Reads the properties after a `BEGIN:VCARD` line.
    fn parse_vcard(&mut self) -> VCard {
        let start_line = self.pos;
        let mut card = VCard::with_version(DEFAULT_VERSION);
        let mut labels = Vec::new();

        while self.pos < self.lines.len() {
            let line_num = self.pos + 1;
            let line = self.lines[self.pos].clone();
            self.pos += 1;

            if is_end(&line) {
                attach_labels(&mut card, labels);
                return card;
            }

            if is_begin(&line) {
                tracing::warn!(line = line_num, "Skipping nested vCard outside of AGENT");
                self.skip_vcard();
                continue;
            }

            let content_line = match parse_content_line(&line, line_num) {
                Ok(content_line) => decode_transfer_encoding(content_line),
                Err(err) => {
                    tracing::warn!(%err, "Skipping malformed line");
                    continue;
                }
            };

            match content_line.name.as_str() {
                "VERSION" => {
                    let value = content_line.value.trim();
                    if let Some(version) = VCardVersion::parse(value) {
                        card.version = version;
                    } else {
                        let err = ParseError::unsupported_version(line_num, value);
                        tracing::warn!(%err, version = %card.version, "Keeping current version");
                    }
                }
                "AGENT" => self.parse_agent(&mut card, &content_line, line_num),
                "LABEL" => labels.push(content_line),
                _ => add_property(&mut card, &content_line, line_num),
            }
        }

        tracing::warn!(line = start_line, "vCard not closed with END:VCARD");
        attach_labels(&mut card, labels);
        card
    }

    /// Moves past the block opened by the previous `BEGIN:VCARD` line,
    /// nested blocks included.
    fn skip_vcard(&mut self) {
        let mut open = 1_usize;
        while let Some(line) = self.lines.get(self.pos) {
            self.pos += 1;
            if is_begin(line) {
                open += 1;
            } else if is_end(line) {
                open -= 1;
                if open == 0 {
                    return;
                }
            }
        }
    }

    /// Reads a nested 2.1 AGENT card, unless it is nested too deeply.
    fn parse_embedded(&mut self, line_num: usize) -> Option<VCard> {
        if self.depth >= MAX_NESTING {
            let err = ParseError::nesting_too_deep(line_num, MAX_NESTING);
            tracing::warn!(%err, "Skipping embedded vCard");
            self.skip_vcard();
            return None;
        }

        self.depth += 1;
        let card = self.parse_vcard();
        self.depth -= 1;
        Some(card)
    }

    /// AGENT holds a URI, a text, or a whole card: nested lines in 2.1, a
    /// masked value in 3.0.
    fn parse_agent(&mut self, card: &mut VCard, line: &ContentLine, line_num: usize) {
        let version = card.version;
        let value = line.value.trim();

        let nested = if is_begin(value) {
            true
        } else if value.is_empty() && self.lines.get(self.pos).is_some_and(|next| is_begin(next))
        {
            self.pos += 1;
            true
        } else {
            false
        };

        let embedded = if nested {
            let Some(agent) = self.parse_embedded(line_num) else {
                return;
            };
            Some(agent)
        } else {
            parse_inline_agent(value, version, line_num, self.depth)
        };

        let mut parameters = ParameterSection::parse(&line.params, version);
        let relation = match embedded {
            Some(agent) => Relation::VCard(Box::new(agent)),
            None => match Relation::parse_value(&line.value, &mut parameters, version) {
                Some(relation) if !relation.is_empty() => relation,
                _ => return,
            },
        };
        parameters.relation_kind = Some(parameters.relation_kind.set(RelationKind::AGENT));

        let mut property = RelationProperty::with_parameters(relation, parameters);
        property.group.clone_from(&line.group);
        card.relations.push(property);
    }
}

/// Reads a 3.0 AGENT card written as masked text. `depth` counts the
/// cards enclosing the AGENT property.
fn parse_inline_agent(
    value: &str,
    version: VCardVersion,
    line_num: usize,
    depth: usize,
) -> Option<VCard> {
    let text = unescape_text(value, version);
    if !text
        .get(..11)
        .is_some_and(|head| head.eq_ignore_ascii_case("BEGIN:VCARD"))
    {
        return None;
    }

    if depth >= MAX_NESTING {
        let err = ParseError::nesting_too_deep(line_num, MAX_NESTING);
        tracing::warn!(%err, "Keeping AGENT as text");
        return None;
    }

    let mut parser = Parser::new(split_lines(&text), depth + 1);
    let agent = parser.parse_document().into_iter().next();
    if agent.is_none() {
        let err = ParseError::invalid_embedded_card(line_num, "no card in AGENT value");
        tracing::warn!(%err, "Keeping AGENT as text");
    }
    agent
}

/// Decodes a quoted-printable value to text and drops the transfer
/// parameters. BASE64 stays encoded for the binary properties.
fn decode_transfer_encoding(mut line: ContentLine) -> ContentLine {
    if line.is_quoted_printable() {
        let charset = line
            .param("CHARSET")
            .and_then(VCardParameter::value)
            .map(str::to_string);
        line.value =
            quoted_printable::decode(&line.value, charset.as_deref()).replace("\r\n", "\n");
        line.params
            .retain(|p| p.name != "ENCODING" && p.name != "CHARSET");
    }
    line
}

fn read<V: PropertyValue>(
    line: &ContentLine,
    line_num: usize,
    version: VCardVersion,
) -> Option<Property<V>> {
    let property = Property::from_line(line, version);
    if property.is_none() {
        tracing::warn!(
            line = line_num,
            property = %line.name,
            "Skipping property with unusable value"
        );
    }
    property
}

fn push<V: PropertyValue>(
    target: &mut Vec<Property<V>>,
    line: &ContentLine,
    line_num: usize,
    version: VCardVersion,
) {
    target.extend(read(line, line_num, version));
}

/// Single-occurrence properties keep their first value.
fn set<V: PropertyValue>(
    target: &mut Option<Property<V>>,
    line: &ContentLine,
    line_num: usize,
    version: VCardVersion,
) {
    if target.is_some() {
        tracing::debug!(line = line_num, property = %line.name, "Ignoring repeated property");
        return;
    }
    *target = read(line, line_num, version);
}

fn add_property(card: &mut VCard, line: &ContentLine, line_num: usize) {
    let version = card.version;

    match line.name.as_str() {
        "PRODID" => set(&mut card.product_id, line, line_num, version),
        "KIND" => set(&mut card.kind, line, line_num, version),
        "REV" => set(&mut card.revision, line, line_num, version),
        "UID" => set(&mut card.uid, line, line_num, version),

        "FN" => push(&mut card.formatted_names, line, line_num, version),
        "N" => push(&mut card.names, line, line_num, version),
        "NICKNAME" => push(&mut card.nicknames, line, line_num, version),
        "PHOTO" => push(&mut card.photos, line, line_num, version),
        "BDAY" => push(&mut card.birthdays, line, line_num, version),
        "ANNIVERSARY" => push(&mut card.anniversaries, line, line_num, version),
        "GENDER" => push(&mut card.gender, line, line_num, version),
        "X-GENDER" if version != VCardVersion::V4_0 => {
            push(&mut card.gender, line, line_num, version);
        }

        "ADR" => push(&mut card.addresses, line, line_num, version),
        "TEL" => push(&mut card.phones, line, line_num, version),
        "EMAIL" => push(&mut card.emails, line, line_num, version),
        "IMPP" => push(&mut card.messengers, line, line_num, version),
        "LANG" => push(&mut card.languages, line, line_num, version),
        "MAILER" => push(&mut card.mailers, line, line_num, version),

        "TZ" => push(&mut card.time_zones, line, line_num, version),
        "GEO" => push(&mut card.geo, line, line_num, version),

        "TITLE" => push(&mut card.titles, line, line_num, version),
        "ROLE" => push(&mut card.roles, line, line_num, version),
        "LOGO" => push(&mut card.logos, line, line_num, version),
        "ORG" => push(&mut card.organizations, line, line_num, version),
        "MEMBER" => push(&mut card.members, line, line_num, version),
        "RELATED" => push(&mut card.relations, line, line_num, version),

        "CATEGORIES" => push(&mut card.categories, line, line_num, version),
        "NOTE" => push(&mut card.notes, line, line_num, version),
        "SOUND" => push(&mut card.sounds, line, line_num, version),
        "CLIENTPIDMAP" => push(&mut card.client_pid_maps, line, line_num, version),
        "URL" => push(&mut card.urls, line, line_num, version),

        "KEY" => push(&mut card.keys, line, line_num, version),
        "FBURL" => push(&mut card.free_busy_urls, line, line_num, version),
        "CALADRURI" => push(&mut card.calendar_addresses, line, line_num, version),
        "CALURI" => push(&mut card.calendar_urls, line, line_num, version),
        "SOURCE" => push(&mut card.sources, line, line_num, version),

        name if name.starts_with("X-") => match NonStandardProperty::from_line(line, version) {
            Ok(property) => card.non_standard.push(property),
            Err(err) => tracing::warn!(line = line_num, %err, "Skipping extension property"),
        },
        name => tracing::debug!(line = line_num, property = name, "Skipping unsupported property"),
    }
}

/// Attaches 2.1/3.0 LABEL properties to addresses: the address of the same
/// group first, then one of the same kind, then any address without a
/// label. A label without a free address becomes an address of its own.
fn attach_labels(card: &mut VCard, labels: Vec<ContentLine>) {
    let version = card.version;

    for line in labels {
        let Some(label) = TextProperty::from_line(&line, version) else {
            continue;
        };
        if label.value().trim().is_empty() {
            continue;
        }

        let free = |a: &AddressProperty| a.parameters.label.is_none();
        let kind = label.parameters.address_kind;
        let index = card
            .addresses
            .iter()
            .position(|a| free(a) && line.group.is_some() && a.group == line.group)
            .or_else(|| {
                card.addresses
                    .iter()
                    .position(|a| free(a) && kind.is_some() && a.parameters.address_kind == kind)
            })
            .or_else(|| card.addresses.iter().position(free));

        let text = label.value().clone();
        if let Some(index) = index {
            card.addresses[index].parameters.label = Some(text);
        } else {
            let mut parameters = label.parameters.clone();
            parameters.label = Some(text);
            let mut property = AddressProperty::with_parameters(Address::default(), parameters);
            property.group.clone_from(&line.group);
            card.addresses.push(property);
        }
    }
}
