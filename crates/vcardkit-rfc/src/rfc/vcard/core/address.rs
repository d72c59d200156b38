//! Delivery address (ADR property, RFC 6350 §6.3.1 and RFC 9554 §2.1).

use std::borrow::Cow;

use super::components::{ComponentTable, append_components};
use super::options::VcfOptions;
use super::policy;
use super::version::VCardVersion;

/// Positional slots of the ADR value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressComponent {
    PostOfficeBox,
    /// Apartment or suite; synthesized from the finer RFC 9554 slots.
    ExtendedAddress,
    /// Street address; synthesized from the finer RFC 9554 slots.
    Street,
    /// City.
    Locality,
    /// State or province.
    Region,
    PostalCode,
    Country,
    Room,
    Apartment,
    Floor,
    StreetNumber,
    StreetName,
    Building,
    Block,
    SubDistrict,
    District,
    Landmark,
    Direction,
}

impl AddressComponent {
    /// Slots every version knows.
    pub const STANDARD_COUNT: usize = 7;
    /// Slots including the RFC 9554 extensions.
    pub const MAX_COUNT: usize = 18;

    /// Slots that make up the legacy street, in output order.
    pub const STREET_PARTS: [Self; 7] = [
        Self::StreetName,
        Self::StreetNumber,
        Self::Block,
        Self::Landmark,
        Self::Direction,
        Self::SubDistrict,
        Self::District,
    ];

    /// Slots that make up the legacy extended address, in output order.
    pub const EXTENDED_PARTS: [Self; 4] = [Self::Building, Self::Floor, Self::Apartment, Self::Room];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    fn indices<const N: usize>(parts: [Self; N]) -> [usize; N] {
        parts.map(Self::index)
    }
}

/// A delivery address. All components are optional.
///
/// When the RFC 9554 slots carry street or building details, the legacy
/// `Street` and `ExtendedAddress` accessors return only what was set on
/// them directly; serialization synthesizes the legacy components from the
/// finer slots when they have no direct data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    table: ComponentTable,
}

impl Default for Address {
    fn default() -> Self {
        Self {
            table: ComponentTable::new(AddressComponent::MAX_COUNT),
        }
    }
}

impl Address {
    /// Creates an address from a component map. The items are copied.
    #[must_use]
    pub fn from_components<I>(components: I) -> Self
    where
        I: IntoIterator<Item = (AddressComponent, Vec<String>)>,
    {
        let mut address = Self::default();
        for (component, items) in components {
            address.table.set(component.index(), items);
        }
        address
    }

    /// Parses a raw ADR value. Components beyond the 18th are ignored.
    ///
    /// A legacy component that merely repeats what the finer slots
    /// synthesize is treated as synthesized and not kept as direct data.
    #[must_use]
    pub fn parse(raw: &str, version: VCardVersion) -> Self {
        let table = ComponentTable::parse(raw, AddressComponent::MAX_COUNT, version);
        let mut address = Self { table };

        for (legacy, parts) in [
            (
                AddressComponent::Street,
                AddressComponent::indices(AddressComponent::STREET_PARTS).to_vec(),
            ),
            (
                AddressComponent::ExtendedAddress,
                AddressComponent::indices(AddressComponent::EXTENDED_PARTS).to_vec(),
            ),
        ] {
            if let Some(synthesized) = address.table.synthesize(&parts)
                && address.get(legacy) == [synthesized]
            {
                address.table.set(legacy.index(), Vec::new());
            }
        }

        address
    }

    /// Items of one component as set directly.
    #[must_use]
    pub fn get(&self, component: AddressComponent) -> &[String] {
        self.table.get(component.index())
    }

    #[must_use]
    pub fn post_office_box(&self) -> &[String] {
        self.get(AddressComponent::PostOfficeBox)
    }

    #[must_use]
    pub fn extended_address(&self) -> &[String] {
        self.get(AddressComponent::ExtendedAddress)
    }

    #[must_use]
    pub fn street(&self) -> &[String] {
        self.get(AddressComponent::Street)
    }

    #[must_use]
    pub fn locality(&self) -> &[String] {
        self.get(AddressComponent::Locality)
    }

    #[must_use]
    pub fn region(&self) -> &[String] {
        self.get(AddressComponent::Region)
    }

    #[must_use]
    pub fn postal_code(&self) -> &[String] {
        self.get(AddressComponent::PostalCode)
    }

    #[must_use]
    pub fn country(&self) -> &[String] {
        self.get(AddressComponent::Country)
    }

    #[must_use]
    pub fn room(&self) -> &[String] {
        self.get(AddressComponent::Room)
    }

    #[must_use]
    pub fn apartment(&self) -> &[String] {
        self.get(AddressComponent::Apartment)
    }

    #[must_use]
    pub fn floor(&self) -> &[String] {
        self.get(AddressComponent::Floor)
    }

    #[must_use]
    pub fn street_number(&self) -> &[String] {
        self.get(AddressComponent::StreetNumber)
    }

    #[must_use]
    pub fn street_name(&self) -> &[String] {
        self.get(AddressComponent::StreetName)
    }

    #[must_use]
    pub fn building(&self) -> &[String] {
        self.get(AddressComponent::Building)
    }

    #[must_use]
    pub fn block(&self) -> &[String] {
        self.get(AddressComponent::Block)
    }

    #[must_use]
    pub fn sub_district(&self) -> &[String] {
        self.get(AddressComponent::SubDistrict)
    }

    #[must_use]
    pub fn district(&self) -> &[String] {
        self.get(AddressComponent::District)
    }

    #[must_use]
    pub fn landmark(&self) -> &[String] {
        self.get(AddressComponent::Landmark)
    }

    #[must_use]
    pub fn direction(&self) -> &[String] {
        self.get(AddressComponent::Direction)
    }

    /// Returns whether the address is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Whether an RFC 9554 component has data.
    #[must_use]
    pub fn has_extensions(&self) -> bool {
        (AddressComponent::STANDARD_COUNT..AddressComponent::MAX_COUNT)
            .any(|i| self.table.has_data(i))
    }

    /// The legacy component as written: direct data, or else the
    /// synthesis of the finer slots.
    fn legacy<const N: usize>(
        &self,
        legacy: AddressComponent,
        parts: [AddressComponent; N],
    ) -> Vec<Cow<'_, str>> {
        let direct = self.get(legacy);
        if !direct.is_empty() {
            return direct.iter().map(|s| Cow::Borrowed(s.as_str())).collect();
        }
        self.table
            .synthesize(&AddressComponent::indices(parts))
            .map(Cow::Owned)
            .into_iter()
            .collect()
    }

    /// Street lines as serialized for legacy readers.
    #[must_use]
    pub fn effective_street(&self) -> Vec<Cow<'_, str>> {
        self.legacy(AddressComponent::Street, AddressComponent::STREET_PARTS)
    }

    /// Extended address as serialized for legacy readers.
    #[must_use]
    pub fn effective_extended_address(&self) -> Vec<Cow<'_, str>> {
        self.legacy(
            AddressComponent::ExtendedAddress,
            AddressComponent::EXTENDED_PARTS,
        )
    }

    /// Formats as a single-line address.
    #[must_use]
    pub fn one_line(&self) -> String {
        let mut parts: Vec<Cow<'_, str>> = self.effective_street();
        for component in [
            AddressComponent::Locality,
            AddressComponent::Region,
            AddressComponent::PostalCode,
            AddressComponent::Country,
        ] {
            parts.extend(self.get(component).iter().map(|s| Cow::Borrowed(s.as_str())));
        }
        parts.join(", ")
    }

    /// Appends the `;`-delimited ADR value.
    ///
    /// The eleven RFC 9554 components follow the standard seven only for
    /// 4.0 with [`VcfOptions::WRITE_RFC9554_EXTENSIONS`] and only when one
    /// of them has data.
    pub fn append_to(&self, builder: &mut String, version: VCardVersion, options: VcfOptions) {
        let count = if policy::writes_extensions(version, options) && self.has_extensions() {
            AddressComponent::MAX_COUNT
        } else {
            AddressComponent::STANDARD_COUNT
        };

        let street = self.effective_street();
        let extended = self.effective_extended_address();

        let slots = (0..count).map(|i| -> Vec<&str> {
            if i == AddressComponent::Street.index() {
                street.iter().map(AsRef::as_ref).collect()
            } else if i == AddressComponent::ExtendedAddress.index() {
                extended.iter().map(AsRef::as_ref).collect()
            } else {
                self.table.get(i).iter().map(String::as_str).collect()
            }
        });

        append_components(builder, slots, version);
    }
}
