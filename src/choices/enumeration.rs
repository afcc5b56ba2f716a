//! The enumeration builder and its lookup surface.

use std::collections::HashMap;
use std::ops::Index;
use std::slice;

use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};

use crate::choices::attr::attribute_name;
use crate::choices::error::ChoiceError;
use crate::choices::spec::ChoiceSpec;
use crate::choices::value::ChoiceValue;

/// How values are assigned when only display names are supplied.
///
/// Ignored when the input is explicit (value, label) pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueMode {
    /// Auto-number 1, 2, 3, ... in declaration order.
    #[default]
    IntegerAuto,
    /// Each name is its own value (`value == label`).
    NameAsValue,
}

/// One (value, display name) pair in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceEntry {
    pub value: ChoiceValue,
    pub label: String,
}

/// An ordered, immutable set of labeled values with symbolic access.
///
/// Built once, read forever: there is no way to add, remove, or rename
/// entries after construction, so a published instance is safe to share
/// across threads without synchronization.
#[derive(Debug, Clone, PartialEq)]
pub struct Enumeration {
    /// Entries in declaration (or auto-assigned sequence) order.
    entries: Vec<ChoiceEntry>,
    /// Derived attribute name → value. On collision the later entry wins.
    bindings: HashMap<String, ChoiceValue>,
}

impl Enumeration {
    /// Build an enumeration from a choice specification.
    ///
    /// The input may be a whitespace-separated string of names, a list of
    /// names, or a list of explicit (value, label) pairs. Explicit pairs are
    /// used verbatim and `mode` is ignored for them.
    pub fn new(spec: impl Into<ChoiceSpec>, mode: ValueMode) -> Self {
        let entries: Vec<ChoiceEntry> = match spec.into() {
            ChoiceSpec::Pairs(pairs) => pairs
                .into_iter()
                .map(|(value, label)| ChoiceEntry { value, label })
                .collect(),
            ChoiceSpec::Names(names) => match mode {
                ValueMode::IntegerAuto => names
                    .into_iter()
                    .enumerate()
                    .map(|(i, label)| ChoiceEntry {
                        value: ChoiceValue::Int(i as i64 + 1),
                        label,
                    })
                    .collect(),
                ValueMode::NameAsValue => names
                    .into_iter()
                    .map(|label| ChoiceEntry {
                        value: ChoiceValue::Str(label.clone()),
                        label,
                    })
                    .collect(),
            },
        };

        let mut bindings = HashMap::with_capacity(entries.len());
        for entry in &entries {
            let attr = attribute_name(&entry.label);
            if bindings.insert(attr.clone(), entry.value.clone()).is_some() {
                tracing::warn!(
                    attribute = %attr,
                    label = %entry.label,
                    "Duplicate attribute name, later entry overwrites earlier binding"
                );
            }
        }

        tracing::debug!(entries = entries.len(), "Enumeration built");
        Self { entries, bindings }
    }

    /// Build with auto-numbered integer values starting at 1.
    pub fn integers(spec: impl Into<ChoiceSpec>) -> Self {
        Self::new(spec, ValueMode::IntegerAuto)
    }

    /// Build a string enumeration where each name is its own value.
    ///
    /// Explicit pairs still win if passed; this only changes how flat name
    /// lists are valued.
    pub fn strings(spec: impl Into<ChoiceSpec>) -> Self {
        Self::new(spec, ValueMode::NameAsValue)
    }

    /// Look up a value by its derived attribute name.
    pub fn attribute(&self, name: &str) -> Result<&ChoiceValue, ChoiceError> {
        self.bindings
            .get(name)
            .ok_or_else(|| ChoiceError::AttributeNotFound {
                name: name.to_string(),
            })
    }

    /// The entry at `index` in declaration order (0-based).
    ///
    /// The panicking `enumeration[index]` form is also available via
    /// `Index`; this is the checked variant.
    pub fn entry(&self, index: usize) -> Result<&ChoiceEntry, ChoiceError> {
        self.entries.get(index).ok_or(ChoiceError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    /// The display label of the first entry whose value matches, in
    /// declaration order. `None` when no entry matches; duplicate values
    /// resolve to the first.
    pub fn label_for(&self, value: impl Into<ChoiceValue>) -> Option<&str> {
        let value = value.into();
        self.entries
            .iter()
            .find(|entry| entry.value == value)
            .map(|entry| entry.label.as_str())
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> &[ChoiceEntry] {
        &self.entries
    }

    /// Iterate entries in declaration order.
    pub fn iter(&self) -> slice::Iter<'_, ChoiceEntry> {
        self.entries.iter()
    }

    /// The bound attribute names, in arbitrary order.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the enumeration has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Index<usize> for Enumeration {
    type Output = ChoiceEntry;

    fn index(&self, index: usize) -> &ChoiceEntry {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a Enumeration {
    type Item = &'a ChoiceEntry;
    type IntoIter = slice::Iter<'a, ChoiceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Serializes as the ordered (value, label) pairs, which is the shape an
/// embedding form layer consumes.
impl Serialize for Enumeration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for entry in &self.entries {
            seq.serialize_element(&(&entry.value, &entry.label))?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_auto_numbers_from_one() {
        let colors = Enumeration::integers("red green blue");
        assert_eq!(colors[0].value, 1);
        assert_eq!(colors[1].value, 2);
        assert_eq!(colors[2].value, 3);
    }

    #[test]
    fn name_as_value_mirrors_labels() {
        let cards = Enumeration::strings("AMEX VISA");
        for entry in &cards {
            assert_eq!(entry.value, entry.label);
        }
    }

    #[test]
    fn pairs_ignore_value_mode() {
        let pairs = vec![("AMEX", "American Express"), ("VISA", "Visa")];
        let a = Enumeration::new(pairs.clone(), ValueMode::IntegerAuto);
        let b = Enumeration::new(pairs, ValueMode::NameAsValue);
        assert_eq!(a, b);
        assert_eq!(a[0].value, "AMEX");
    }

    #[test]
    fn duplicate_attribute_keeps_later_binding() {
        // "co-op" and "co op" both sanitize to CO_OP.
        let e = Enumeration::integers(vec!["co-op", "co op"]);
        assert_eq!(*e.attribute("CO_OP").unwrap(), 2);
        // Both entries are still present and reachable by index.
        assert_eq!(e.len(), 2);
        assert_eq!(e.label_for(1), Some("co-op"));
    }

    #[test]
    fn duplicate_values_reverse_to_first() {
        let e = Enumeration::new(
            vec![(1_i64, "one"), (1, "uno"), (2, "two")],
            ValueMode::IntegerAuto,
        );
        assert_eq!(e.label_for(1), Some("one"));
    }

    #[test]
    fn empty_specification_builds_empty_enumeration() {
        let e = Enumeration::integers("");
        assert!(e.is_empty());
        assert_eq!(
            e.entry(0),
            Err(ChoiceError::IndexOutOfRange { index: 0, len: 0 })
        );
    }
}
