//! Structured name (N property, RFC 6350 §6.2.2 and RFC 9554 §2.2).

use super::components::{ComponentTable, append_components};
use super::options::VcfOptions;
use super::policy;
use super::version::VCardVersion;

/// Positional slots of the N value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NameComponent {
    /// Family names (surnames).
    Surnames,
    /// Given names (first names).
    Given,
    /// Additional names (middle names).
    Additional,
    /// Honorific prefixes (e.g., "Mr.", "Dr.").
    Prefixes,
    /// Honorific suffixes (e.g., "Jr.", "M.D.").
    Suffixes,
    /// Secondary surnames (RFC 9554).
    Surnames2,
    /// Generation marker such as "III" (RFC 9554).
    Generation,
}

impl NameComponent {
    /// Slots every version knows.
    pub const STANDARD_COUNT: usize = 5;
    /// Slots including the RFC 9554 extensions.
    pub const MAX_COUNT: usize = 7;

    const EXTENSIONS: [usize; 2] = [Self::Surnames2 as usize, Self::Generation as usize];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A structured name. All components are optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    table: ComponentTable,
}

impl Default for Name {
    fn default() -> Self {
        Self {
            table: ComponentTable::new(NameComponent::MAX_COUNT),
        }
    }
}

impl Name {
    /// Creates a name from a component map. The items are copied.
    #[must_use]
    pub fn from_components<I>(components: I) -> Self
    where
        I: IntoIterator<Item = (NameComponent, Vec<String>)>,
    {
        let mut name = Self::default();
        for (component, items) in components {
            name.table.set(component.index(), items);
        }
        name
    }

    /// Creates a name with family and given names.
    #[must_use]
    pub fn simple(family: impl Into<String>, given: impl Into<String>) -> Self {
        Self::from_components([
            (NameComponent::Surnames, vec![family.into()]),
            (NameComponent::Given, vec![given.into()]),
        ])
    }

    /// Parses a raw N value.
    ///
    /// Secondary surnames and generation markers that a writer appended to
    /// the legacy components are removed from their end again.
    #[must_use]
    pub fn parse(raw: &str, version: VCardVersion) -> Self {
        let mut table = ComponentTable::parse(raw, NameComponent::MAX_COUNT, version);

        for (legacy, extension) in [
            (NameComponent::Surnames, NameComponent::Surnames2),
            (NameComponent::Suffixes, NameComponent::Generation),
        ] {
            let appended = table.get(extension.index());
            let items = table.get(legacy.index());
            if appended.is_empty() || !items.ends_with(appended) {
                continue;
            }
            let direct = items[..items.len() - appended.len()].to_vec();
            table.set(legacy.index(), direct);
        }

        Self { table }
    }

    /// Items of one component.
    #[must_use]
    pub fn get(&self, component: NameComponent) -> &[String] {
        self.table.get(component.index())
    }

    #[must_use]
    pub fn surnames(&self) -> &[String] {
        self.get(NameComponent::Surnames)
    }

    #[must_use]
    pub fn given(&self) -> &[String] {
        self.get(NameComponent::Given)
    }

    #[must_use]
    pub fn additional(&self) -> &[String] {
        self.get(NameComponent::Additional)
    }

    #[must_use]
    pub fn prefixes(&self) -> &[String] {
        self.get(NameComponent::Prefixes)
    }

    #[must_use]
    pub fn suffixes(&self) -> &[String] {
        self.get(NameComponent::Suffixes)
    }

    #[must_use]
    pub fn surnames2(&self) -> &[String] {
        self.get(NameComponent::Surnames2)
    }

    #[must_use]
    pub fn generation(&self) -> &[String] {
        self.get(NameComponent::Generation)
    }

    /// Returns whether the name is empty (all components are empty).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Whether an RFC 9554 component has data.
    #[must_use]
    pub fn has_extensions(&self) -> bool {
        self.table.any_data(&NameComponent::EXTENSIONS)
    }

    /// Formats as a display name (prefixes, given, additional, family,
    /// suffixes).
    #[must_use]
    pub fn display_name(&self) -> String {
        [
            NameComponent::Prefixes,
            NameComponent::Given,
            NameComponent::Additional,
            NameComponent::Surnames,
            NameComponent::Surnames2,
            NameComponent::Suffixes,
            NameComponent::Generation,
        ]
        .iter()
        .flat_map(|&c| self.get(c))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// Legacy component followed by its RFC 9554 counterpart.
    fn merged(&self, legacy: NameComponent, extension: NameComponent) -> Vec<&str> {
        self.get(legacy)
            .iter()
            .chain(self.get(extension))
            .map(String::as_str)
            .collect()
    }

    /// Appends the `;`-delimited N value.
    ///
    /// Secondary surnames always join the surnames and generation markers
    /// the suffixes; the RFC 9554 components themselves are only written
    /// when the version and options allow it.
    pub fn append_to(&self, builder: &mut String, version: VCardVersion, options: VcfOptions) {
        let count = if policy::writes_extensions(version, options) && self.has_extensions() {
            NameComponent::MAX_COUNT
        } else {
            NameComponent::STANDARD_COUNT
        };

        let slots = [
            self.merged(NameComponent::Surnames, NameComponent::Surnames2),
            self.plain(NameComponent::Given),
            self.plain(NameComponent::Additional),
            self.plain(NameComponent::Prefixes),
            self.merged(NameComponent::Suffixes, NameComponent::Generation),
            self.plain(NameComponent::Surnames2),
            self.plain(NameComponent::Generation),
        ];

        append_components(builder, slots.into_iter().take(count), version);
    }

    fn plain(&self, component: NameComponent) -> Vec<&str> {
        self.get(component).iter().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(name: &Name, version: VCardVersion, options: VcfOptions) -> String {
        let mut out = String::new();
        name.append_to(&mut out, version, options);
        out
    }

    #[test]
    fn parse_full() {
        let name = Name::parse("Doe;John;Quincy;Mr.;Jr.", VCardVersion::V4_0);
        assert_eq!(name.surnames(), ["Doe"]);
        assert_eq!(name.given(), ["John"]);
        assert_eq!(name.additional(), ["Quincy"]);
        assert_eq!(name.prefixes(), ["Mr."]);
        assert_eq!(name.suffixes(), ["Jr."]);
        assert!(!name.has_extensions());
    }

    #[test]
    fn empty_name() {
        assert!(Name::parse(";;;;", VCardVersion::V3_0).is_empty());
        assert!(Name::default().is_empty());
    }

    #[test]
    fn legacy_output_merges_extensions() {
        let name = Name::from_components([
            (NameComponent::Surnames, vec!["García".into()]),
            (NameComponent::Given, vec!["Juan".into()]),
            (NameComponent::Surnames2, vec!["López".into()]),
            (NameComponent::Generation, vec!["II".into()]),
        ]);

        assert_eq!(
            write(&name, VCardVersion::V3_0, VcfOptions::all()),
            "García López;Juan;;;II"
        );
        assert_eq!(
            write(&name, VCardVersion::V4_0, VcfOptions::empty()),
            "García,López;Juan;;;II"
        );
        assert_eq!(
            write(&name, VCardVersion::V4_0, VcfOptions::WRITE_RFC9554_EXTENSIONS),
            "García,López;Juan;;;II;López;II"
        );
    }

    #[test]
    fn extension_round_trip() {
        let name = Name::from_components([
            (NameComponent::Surnames, vec!["García".into()]),
            (NameComponent::Surnames2, vec!["López".into()]),
            (NameComponent::Generation, vec!["II".into()]),
        ]);
        let text = write(&name, VCardVersion::V4_0, VcfOptions::WRITE_RFC9554_EXTENSIONS);
        assert_eq!(Name::parse(&text, VCardVersion::V4_0), name);
    }

    #[test]
    fn surname_repeated_in_extension_survives() {
        let name = Name::from_components([
            (NameComponent::Surnames, vec!["García".into()]),
            (NameComponent::Surnames2, vec!["García".into()]),
        ]);

        let text = write(&name, VCardVersion::V4_0, VcfOptions::WRITE_RFC9554_EXTENSIONS);
        assert_eq!(text, "García,García;;;;;García;");
        assert_eq!(Name::parse(&text, VCardVersion::V4_0), name);
    }

    #[test]
    fn only_trailing_extension_items_are_stripped() {
        let name = Name::parse("López,García;Ana;;;;García", VCardVersion::V4_0);
        assert_eq!(name.surnames(), ["López"]);

        let name = Name::parse("García,López;Ana;;;;García", VCardVersion::V4_0);
        assert_eq!(name.surnames(), ["García", "López"]);
        assert_eq!(name.surnames2(), ["García"]);
    }

    #[test]
    fn display_name() {
        let name = Name::simple("Doe", "John");
        assert_eq!(name.display_name(), "John Doe");
    }
}
