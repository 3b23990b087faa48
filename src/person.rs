use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::tense::Tense;

// "1", "2nd", "3RD", "*", "pl", "plural"
static PERSON_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:(?P<n>[123])(?:st|nd|rd)?|(?P<pl>\*|pl(?:ural)?))\s*$")
        .expect("person pattern is valid")
});

/// Grammatical person/number used to pick a present or past form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Person {
    First,
    Second,
    Third,
    Plural,
}

impl Person {
    /// Parses the loose person notation used by callers.
    ///
    /// Returns `None` for anything outside the known set, including the empty
    /// string; lookups then fall back to the unmarked form.
    pub fn parse(s: &str) -> Option<Person> {
        let caps = PERSON_REGEX.captures(s)?;
        if caps.name("pl").is_some() {
            return Some(Person::Plural);
        }
        match caps.name("n")?.as_str() {
            "1" => Some(Person::First),
            "2" => Some(Person::Second),
            "3" => Some(Person::Third),
            _ => None,
        }
    }

    /// The present-tense slot for this person.
    ///
    /// Past lookups use this table too.
    pub const fn present_tense(self) -> Tense {
        match self {
            Person::First => Tense::FirstSingularPresent,
            Person::Second => Tense::SecondSingularPresent,
            Person::Third => Tense::ThirdSingularPresent,
            Person::Plural => Tense::PresentPlural,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_forms() {
        assert_eq!(Person::parse("1"), Some(Person::First));
        assert_eq!(Person::parse("2"), Some(Person::Second));
        assert_eq!(Person::parse("3"), Some(Person::Third));
        assert_eq!(Person::parse("*"), Some(Person::Plural));
    }

    #[test]
    fn test_parse_long_forms() {
        assert_eq!(Person::parse("1st"), Some(Person::First));
        assert_eq!(Person::parse("2nd"), Some(Person::Second));
        assert_eq!(Person::parse(" 3RD "), Some(Person::Third));
        assert_eq!(Person::parse("pl"), Some(Person::Plural));
        assert_eq!(Person::parse("Plural"), Some(Person::Plural));
    }

    #[test]
    fn test_parse_rejects_others() {
        assert_eq!(Person::parse(""), None);
        assert_eq!(Person::parse("4"), None);
        assert_eq!(Person::parse("13"), None);
        assert_eq!(Person::parse("first"), None);
    }

    #[test]
    fn test_present_tense_table() {
        assert_eq!(Person::First.present_tense(), Tense::FirstSingularPresent);
        assert_eq!(Person::Plural.present_tense(), Tense::PresentPlural);
    }
}
