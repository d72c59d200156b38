//! Positional component storage shared by the N and ADR values.

use crate::rfc::vcard::build::append_escaped;
use crate::rfc::vcard::parse::{split_component, split_structured};

use super::policy;
use super::version::VCardVersion;

/// A fixed number of positional slots, each holding an ordered list of
/// items. A slot without data is an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentTable {
    slots: Vec<Vec<String>>,
}

impl ComponentTable {
    /// Creates a table of `len` empty slots.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![Vec::new(); len],
        }
    }

    /// Parses a `;`-delimited raw value into at most `len` slots.
    ///
    /// Components beyond `len` are discarded.
    #[must_use]
    pub fn parse(raw: &str, len: usize, version: VCardVersion) -> Self {
        let mut table = Self::new(len);
        let parts = split_structured(raw);
        if parts.len() > len {
            tracing::trace!(
                components = parts.len(),
                max = len,
                "dropping excess structured components"
            );
        }

        for (slot, part) in table.slots.iter_mut().zip(parts) {
            *slot = split_component(part, version);
        }

        table
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Items of slot `index`; empty for slots without data or out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> &[String] {
        self.slots.get(index).map(Vec::as_slice).unwrap_or_default()
    }

    /// Replaces slot `index`. Empty and whitespace-only items are dropped;
    /// an out-of-range index is ignored.
    pub fn set(&mut self, index: usize, items: Vec<String>) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = items
                .into_iter()
                .filter(|item| !item.trim().is_empty())
                .collect();
        }
    }

    #[must_use]
    pub fn has_data(&self, index: usize) -> bool {
        !self.get(index).is_empty()
    }

    /// Whether any slot in `indices` has data.
    #[must_use]
    pub fn any_data(&self, indices: &[usize]) -> bool {
        indices.iter().any(|&i| self.has_data(i))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }

    /// Concatenates the items of `indices`, in that order, into one
    /// space-separated item. `None` if none of them has data.
    #[must_use]
    pub fn synthesize(&self, indices: &[usize]) -> Option<String> {
        let joined = indices
            .iter()
            .flat_map(|&i| self.get(i))
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");
        (!joined.is_empty()).then_some(joined)
    }
}

/// Appends `slots` as a `;`-delimited structured value.
///
/// Items within a slot are masked and joined with the version's value
/// separator. The delimiter optimistically written after the last slot is
/// removed again.
pub fn append_components<'a, I, S>(builder: &mut String, slots: I, version: VCardVersion)
where
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = &'a str>,
{
    let separator = policy::value_separator(version);
    let start = builder.len();

    for slot in slots {
        for (i, item) in slot.into_iter().enumerate() {
            if i > 0 {
                builder.push(separator);
            }
            append_escaped(builder, item, version);
        }
        builder.push(';');
    }

    if builder.len() > start {
        builder.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_caps_component_count() {
        let table = ComponentTable::parse("a;b;c;d", 2, VCardVersion::V4_0);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(0), ["a"]);
        assert_eq!(table.get(1), ["b"]);
        assert!(table.get(2).is_empty());
    }

    #[test]
    fn parse_multi_valued() {
        let table = ComponentTable::parse(";Jr.,M.D.", 2, VCardVersion::V3_0);
        assert!(!table.has_data(0));
        assert_eq!(table.get(1), ["Jr.", "M.D."]);
    }

    #[test]
    fn empty_raw_is_empty() {
        assert!(ComponentTable::parse(";;;", 5, VCardVersion::V4_0).is_empty());
        assert!(ComponentTable::parse("", 5, VCardVersion::V4_0).is_empty());
    }

    #[test]
    fn set_filters_blank_items() {
        let mut table = ComponentTable::new(3);
        table.set(1, vec![" ".into(), "x".into()]);
        table.set(7, vec!["ignored".into()]);
        assert_eq!(table.get(1), ["x"]);
    }

    #[test]
    fn synthesize_joins_in_order() {
        let mut table = ComponentTable::new(4);
        table.set(2, vec!["12".into()]);
        table.set(3, vec!["Main Street".into()]);
        assert_eq!(table.synthesize(&[3, 2]).as_deref(), Some("Main Street 12"));
        assert_eq!(table.synthesize(&[0, 1]), None);
    }

    #[test]
    fn append_removes_trailing_delimiter() {
        let mut out = String::from("N:");
        append_components(
            &mut out,
            [vec!["Doe"], vec!["John"], vec![], vec![], vec![]],
            VCardVersion::V4_0,
        );
        assert_eq!(out, "N:Doe;John;;;");
    }

    #[test]
    fn append_joins_by_version() {
        let slots = || [vec!["Jr.", "M.D."], vec!["a;b"]];

        let mut out = String::new();
        append_components(&mut out, slots(), VCardVersion::V4_0);
        assert_eq!(out, "Jr.,M.D.;a\\;b");

        let mut out = String::new();
        append_components(&mut out, slots(), VCardVersion::V3_0);
        assert_eq!(out, "Jr. M.D.;a\\;b");
    }
}
