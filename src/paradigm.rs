use serde::{Deserialize, Serialize};

use crate::tense::{TENSE_COUNT, Tense};

/// Positions in a verb row: affirmative slots followed by negated slots.
pub const FORM_COUNT: usize = TENSE_COUNT * 2;

/// One infinitive and its surface forms across all slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbEntry {
    infinitive: String,
    forms: [Option<String>; FORM_COUNT],
}

impl VerbEntry {
    /// Builds an entry from a table row.
    ///
    /// Field 0 is the infinitive and also the position-0 form. Missing
    /// trailing fields are absent forms, extra fields are dropped. Returns
    /// `None` when the row has no infinitive.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Option<Self> {
        let infinitive = fields.first()?.as_ref();
        if infinitive.is_empty() {
            return None;
        }
        let forms = std::array::from_fn(|i| {
            fields
                .get(i)
                .map(|f| f.as_ref())
                .filter(|f| !f.is_empty())
                .map(str::to_string)
        });
        Some(Self {
            infinitive: infinitive.to_string(),
            forms,
        })
    }

    pub fn infinitive(&self) -> &str {
        &self.infinitive
    }

    /// The form for `tense`, negated or not.
    #[inline]
    pub fn form(&self, tense: Tense, negated: bool) -> Option<&str> {
        let position = if negated {
            tense.index() + TENSE_COUNT
        } else {
            tense.index()
        };
        self.form_at(position)
    }

    pub fn form_at(&self, position: usize) -> Option<&str> {
        self.forms.get(position)?.as_deref()
    }

    /// Non-empty forms with their row positions, in row order.
    pub fn forms(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.forms
            .iter()
            .enumerate()
            .filter_map(|(i, f)| f.as_deref().map(|f| (i, f)))
    }

    /// Whether any negated form exists.
    pub fn has_negations(&self) -> bool {
        self.forms[TENSE_COUNT..].iter().any(Option::is_some)
    }
}
