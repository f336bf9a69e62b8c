//! License plate normalization and country handling.

use crate::i18n::Language;

/// Strip separators (dash, space, dot and anything else non-alphanumeric)
/// and upper-case, so `grz-m266` and `GRZ M266` compare equal.
pub fn normalize(plate: &str) -> String {
    plate
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Equality after normalization
pub fn plates_match(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

/// Countries the kiosk offers for plate registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountryCode {
    #[default]
    It,
    De,
    At,
    Ch,
}

impl CountryCode {
    pub const ALL: [CountryCode; 4] = [
        CountryCode::It,
        CountryCode::De,
        CountryCode::At,
        CountryCode::Ch,
    ];

    pub fn code(self) -> &'static str {
        match self {
            CountryCode::It => "IT",
            CountryCode::De => "DE",
            CountryCode::At => "AT",
            CountryCode::Ch => "CH",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            CountryCode::It => "\u{1F1EE}\u{1F1F9}",
            CountryCode::De => "\u{1F1E9}\u{1F1EA}",
            CountryCode::At => "\u{1F1E6}\u{1F1F9}",
            CountryCode::Ch => "\u{1F1E8}\u{1F1ED}",
        }
    }

    pub fn name(self, language: Language) -> &'static str {
        match (self, language) {
            (CountryCode::It, Language::De) => "Italien",
            (CountryCode::It, Language::It) => "Italia",
            (CountryCode::De, Language::De) => "Deutschland",
            (CountryCode::De, Language::It) => "Germania",
            (CountryCode::At, Language::De) => "Österreich",
            (CountryCode::At, Language::It) => "Austria",
            (CountryCode::Ch, Language::De) => "Schweiz",
            (CountryCode::Ch, Language::It) => "Svizzera",
        }
    }

    /// Entry hint in the local plate format
    pub fn placeholder(self) -> &'static str {
        match self {
            CountryCode::It => "AB123CD",
            _ => "AB-123-CD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_separators_and_uppercases() {
        assert_eq!(normalize("grz-m266"), "GRZM266");
        assert_eq!(normalize("GRZ M266"), "GRZM266");
        assert_eq!(normalize("gr.z-m 266"), "GRZM266");
    }

    #[test]
    fn test_plates_match_ignores_formatting() {
        assert!(plates_match("GRZ-M266", "grzm266"));
        assert!(plates_match("GRZ-M266", "GRZ M266"));
        assert!(!plates_match("GRZ-M266", "ABC123"));
    }

    #[test]
    fn test_country_defaults_to_italy() {
        assert_eq!(CountryCode::default(), CountryCode::It);
        assert_eq!(CountryCode::default().code(), "IT");
    }

    #[test]
    fn test_country_names_follow_language() {
        assert_eq!(CountryCode::De.name(Language::De), "Deutschland");
        assert_eq!(CountryCode::De.name(Language::It), "Germania");
    }
}
