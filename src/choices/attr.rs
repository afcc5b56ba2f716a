//! Attribute-name derivation from display labels.

/// Derive the symbolic attribute name for a display label.
///
/// Uppercase, then spaces and hyphens become underscores, then the `"_&_"`
/// left behind by `" & "` becomes `"_AND_"`, then everything outside
/// `[A-Za-z0-9_-]` is stripped. The steps run in that order; `"Surf & Turf"`
/// only becomes `SURF_AND_TURF` because the space replacement runs first.
pub(crate) fn attribute_name(label: &str) -> String {
    let mut attr = label
        .to_uppercase()
        .replace(' ', "_")
        .replace('-', "_")
        .replace("_&_", "_AND_");
    attr.retain(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    attr
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_name_is_uppercased() {
        assert_eq!(attribute_name("red"), "RED");
    }

    #[test]
    fn spaces_become_underscores() {
        assert_eq!(attribute_name("American Express"), "AMERICAN_EXPRESS");
    }

    #[test]
    fn ampersand_with_spaces_becomes_and() {
        assert_eq!(attribute_name("Surf & Turf"), "SURF_AND_TURF");
    }

    #[test]
    fn bare_ampersand_is_stripped() {
        // "A&B" has no surrounding spaces, so the _AND_ rewrite never fires.
        assert_eq!(attribute_name("A&B"), "AB");
    }

    #[test]
    fn hyphens_become_underscores() {
        assert_eq!(attribute_name("co-op"), "CO_OP");
    }

    #[test]
    fn punctuation_is_stripped() {
        assert_eq!(attribute_name("100% Organic!"), "100_ORGANIC");
    }

    #[test]
    fn leading_digits_pass_through() {
        // Lookup is map-based, so digit-leading names are fine.
        assert_eq!(attribute_name("3D Secure"), "3D_SECURE");
    }
}
