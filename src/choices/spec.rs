//! Choice-specification input shapes.

use crate::choices::value::ChoiceValue;

/// The accepted input shapes for building an enumeration.
///
/// The shape is fixed by the conversion that produced it, so a single input
/// can never mix names with pairs. Explicit pairs always win over the value
/// mode: `Pairs` input is used verbatim and never auto-numbered.
#[derive(Debug, Clone, PartialEq)]
pub enum ChoiceSpec {
    /// A flat list of display names; values come from the value mode.
    Names(Vec<String>),
    /// Explicit (value, label) pairs, used verbatim.
    Pairs(Vec<(ChoiceValue, String)>),
}

impl From<&str> for ChoiceSpec {
    /// Split on any run of whitespace; empty tokens are discarded.
    fn from(s: &str) -> Self {
        ChoiceSpec::Names(s.split_whitespace().map(str::to_string).collect())
    }
}

impl From<String> for ChoiceSpec {
    fn from(s: String) -> Self {
        ChoiceSpec::from(s.as_str())
    }
}

impl From<Vec<&str>> for ChoiceSpec {
    fn from(names: Vec<&str>) -> Self {
        ChoiceSpec::Names(names.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for ChoiceSpec {
    fn from(names: &[&str]) -> Self {
        ChoiceSpec::Names(names.iter().map(|n| n.to_string()).collect())
    }
}

impl From<Vec<String>> for ChoiceSpec {
    fn from(names: Vec<String>) -> Self {
        ChoiceSpec::Names(names)
    }
}

impl<V, L> From<Vec<(V, L)>> for ChoiceSpec
where
    V: Into<ChoiceValue>,
    L: Into<String>,
{
    fn from(pairs: Vec<(V, L)>) -> Self {
        ChoiceSpec::Pairs(
            pairs
                .into_iter()
                .map(|(value, label)| (value.into(), label.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_splits_on_whitespace_runs() {
        let spec = ChoiceSpec::from("red  green\tblue\nyellow");
        assert_eq!(
            spec,
            ChoiceSpec::Names(vec![
                "red".to_string(),
                "green".to_string(),
                "blue".to_string(),
                "yellow".to_string(),
            ])
        );
    }

    #[test]
    fn string_with_only_whitespace_is_empty() {
        assert_eq!(ChoiceSpec::from("  \t "), ChoiceSpec::Names(vec![]));
    }

    #[test]
    fn pair_elements_convert_into_choice_values() {
        let spec = ChoiceSpec::from(vec![("AMEX", "American Express"), ("VISA", "Visa")]);
        let ChoiceSpec::Pairs(pairs) = spec else {
            panic!("expected Pairs");
        };
        assert_eq!(pairs[0].0, "AMEX");
        assert_eq!(pairs[1].1, "Visa");
    }

    #[test]
    fn integer_pairs_keep_integer_values() {
        let spec = ChoiceSpec::from(vec![(10_i64, "ten"), (20, "twenty")]);
        let ChoiceSpec::Pairs(pairs) = spec else {
            panic!("expected Pairs");
        };
        assert_eq!(pairs[0].0, 10);
        assert_eq!(pairs[1].0, 20);
    }
}
