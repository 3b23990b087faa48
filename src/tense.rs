use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownTenseError;
use crate::person::Person;

/// Number of tense slots in a paradigm row, per polarity.
pub const TENSE_COUNT: usize = 12;

/// One of the twelve tense/person slots of a verb paradigm.
///
/// The discriminant is the slot's position in a verb row; negated forms live
/// at `index() + TENSE_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tense {
    #[serde(rename = "infinitive")]
    Infinitive = 0,
    #[serde(rename = "1st singular present")]
    FirstSingularPresent = 1,
    #[serde(rename = "2nd singular present")]
    SecondSingularPresent = 2,
    #[serde(rename = "3rd singular present")]
    ThirdSingularPresent = 3,
    #[serde(rename = "present plural")]
    PresentPlural = 4,
    #[serde(rename = "present participle")]
    PresentParticiple = 5,
    #[serde(rename = "1st singular past")]
    FirstSingularPast = 6,
    #[serde(rename = "2nd singular past")]
    SecondSingularPast = 7,
    #[serde(rename = "3rd singular past")]
    ThirdSingularPast = 8,
    #[serde(rename = "past plural")]
    PastPlural = 9,
    #[serde(rename = "past")]
    Past = 10,
    #[serde(rename = "past participle")]
    PastParticiple = 11,
}

/// Short aliases accepted in place of canonical names. "past" has none.
static ALIASES: [(&str, &str); 11] = [
    ("inf", "infinitive"),
    ("1sgpres", "1st singular present"),
    ("2sgpres", "2nd singular present"),
    ("3sgpres", "3rd singular present"),
    ("pl", "present plural"),
    ("prog", "present participle"),
    ("1sgpast", "1st singular past"),
    ("2sgpast", "2nd singular past"),
    ("3sgpast", "3rd singular past"),
    ("pastpl", "past plural"),
    ("ppart", "past participle"),
];

impl Tense {
    /// All slots in schema order.
    pub const ALL: [Tense; TENSE_COUNT] = [
        Tense::Infinitive,
        Tense::FirstSingularPresent,
        Tense::SecondSingularPresent,
        Tense::ThirdSingularPresent,
        Tense::PresentPlural,
        Tense::PresentParticiple,
        Tense::FirstSingularPast,
        Tense::SecondSingularPast,
        Tense::ThirdSingularPast,
        Tense::PastPlural,
        Tense::Past,
        Tense::PastParticiple,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Tense> {
        Self::ALL.get(index).copied()
    }

    /// Canonical name, e.g. `"3rd singular present"`.
    pub const fn name(self) -> &'static str {
        match self {
            Tense::Infinitive => "infinitive",
            Tense::FirstSingularPresent => "1st singular present",
            Tense::SecondSingularPresent => "2nd singular present",
            Tense::ThirdSingularPresent => "3rd singular present",
            Tense::PresentPlural => "present plural",
            Tense::PresentParticiple => "present participle",
            Tense::FirstSingularPast => "1st singular past",
            Tense::SecondSingularPast => "2nd singular past",
            Tense::ThirdSingularPast => "3rd singular past",
            Tense::PastPlural => "past plural",
            Tense::Past => "past",
            Tense::PastParticiple => "past participle",
        }
    }

    pub fn alias(self) -> Option<&'static str> {
        ALIASES
            .iter()
            .find(|(_, name)| *name == self.name())
            .map(|(alias, _)| *alias)
    }

    /// Resolves a canonical name or a short alias.
    pub fn resolve(name: &str) -> Result<Tense, UnknownTenseError> {
        let index = slot_index(resolve_alias(name))?;
        Ok(Self::ALL[index])
    }

    /// True for the present family, participle included.
    pub fn is_present(self) -> bool {
        self.name().contains("present")
    }

    /// True for the past family, participle included.
    pub fn is_past(self) -> bool {
        self.name().contains("past")
    }

    /// The person/number a slot is marked for, if any.
    pub fn person(self) -> Option<Person> {
        match self {
            Tense::FirstSingularPresent | Tense::FirstSingularPast => Some(Person::First),
            Tense::SecondSingularPresent | Tense::SecondSingularPast => Some(Person::Second),
            Tense::ThirdSingularPresent | Tense::ThirdSingularPast => Some(Person::Third),
            Tense::PresentPlural | Tense::PastPlural => Some(Person::Plural),
            Tense::Infinitive | Tense::PresentParticiple | Tense::Past | Tense::PastParticiple => {
                None
            }
        }
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tense {
    type Err = UnknownTenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tense::resolve(s)
    }
}

/// Position of a canonical tense name within a verb row.
///
/// Aliases are not accepted here; pass them through [`resolve_alias`] first.
pub fn slot_index(name: &str) -> Result<usize, UnknownTenseError> {
    Tense::ALL
        .iter()
        .position(|t| t.name() == name)
        .ok_or_else(|| UnknownTenseError::new(name))
}

/// Substitutes a short alias with its canonical name. Other strings pass
/// through unchanged.
pub fn resolve_alias(name: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map_or(name, |(_, canonical)| *canonical)
}

/// The twelve canonical tense names in schema order.
pub fn all_tense_names() -> Vec<&'static str> {
    Tense::ALL.iter().map(|t| t.name()).collect()
}
