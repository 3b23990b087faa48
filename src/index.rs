//! The morphology index.
//!
//! An [`IndexBuilder`] ingests verb rows; [`IndexBuilder::build`] derives the
//! lemma map and hands back an immutable [`MorphologyIndex`] that answers
//! conjugation, lemmatization and tense queries.

use std::collections::HashMap;
use std::io::BufRead;

use serde::Serialize;

use crate::data;
use crate::error::{Result, UnknownTenseError};
use crate::paradigm::VerbEntry;
use crate::person::Person;
use crate::tense::Tense;

/// Collects verb rows before the index is frozen.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    entries: Vec<VerbEntry>,
    by_infinitive: HashMap<String, usize>,
    skipped: usize,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one row. Field 0 is the infinitive.
    ///
    /// Rows without an infinitive are skipped and `false` is returned. A row
    /// repeating an infinitive replaces the earlier entry.
    pub fn push_row<S: AsRef<str>>(&mut self, fields: &[S]) -> bool {
        let Some(entry) = VerbEntry::from_fields(fields) else {
            tracing::trace!("skipping row without an infinitive");
            self.skipped += 1;
            return false;
        };
        match self.by_infinitive.get(entry.infinitive()) {
            Some(&slot) => {
                tracing::trace!(infinitive = entry.infinitive(), "replacing duplicate verb");
                self.entries[slot] = entry;
            }
            None => {
                self.by_infinitive
                    .insert(entry.infinitive().to_string(), self.entries.len());
                self.entries.push(entry);
            }
        }
        true
    }

    /// Splits a raw table line and adds it.
    pub fn push_line(&mut self, line: &str) -> bool {
        self.push_row(&data::split_line(line))
    }

    pub fn extend_rows<I, R, S>(&mut self, rows: I) -> &mut Self
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        for row in rows {
            self.push_row(row.as_ref());
        }
        self
    }

    /// Freezes the collected rows into a queryable index.
    pub fn build(self) -> MorphologyIndex {
        let mut lemmas: HashMap<String, usize> = HashMap::new();
        for (slot, entry) in self.entries.iter().enumerate() {
            for (_, form) in entry.forms() {
                if let Some(prev) = lemmas.insert(form.to_string(), slot) {
                    if prev != slot {
                        tracing::trace!(
                            form,
                            previous = self.entries[prev].infinitive(),
                            current = entry.infinitive(),
                            "surface form claimed by a later verb"
                        );
                    }
                }
            }
        }

        tracing::debug!(
            verbs = self.entries.len(),
            forms = lemmas.len(),
            skipped = self.skipped,
            "built morphology index"
        );

        MorphologyIndex {
            entries: self.entries,
            by_infinitive: self.by_infinitive,
            lemmas,
        }
    }
}

/// Infinitive, slot and polarity of a surface form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Analysis<'a> {
    pub infinitive: &'a str,
    pub tense: Tense,
    pub negated: bool,
}

/// Immutable verb paradigms plus the surface form to infinitive map.
#[derive(Debug, Clone)]
pub struct MorphologyIndex {
    entries: Vec<VerbEntry>,
    by_infinitive: HashMap<String, usize>,
    lemmas: HashMap<String, usize>,
}

impl MorphologyIndex {
    /// Builds the index from the bundled verb table.
    pub fn new() -> Self {
        Self::from_rows(data::load_verb_table())
    }

    pub fn from_rows<I, R, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut builder = IndexBuilder::new();
        builder.extend_rows(rows);
        builder.build()
    }

    /// Builds from table text, one verb per line.
    pub fn from_table(text: &str) -> Self {
        Self::from_rows(data::rows_from_str(text))
    }

    /// Reads a whole table from `reader`, then builds.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Ok(Self::from_rows(data::read_rows(reader)?))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::from_rows(data::rows_from_json(json)?))
    }

    /// Number of distinct infinitives.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct surface forms.
    pub fn lemma_count(&self) -> usize {
        self.lemmas.len()
    }

    /// Infinitives in table order.
    pub fn infinitives(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(VerbEntry::infinitive)
    }

    fn entry_of(&self, form: &str) -> Option<&VerbEntry> {
        self.lemmas.get(form).map(|&slot| &self.entries[slot])
    }

    /// The infinitive owning `form`, if the form is in the table.
    pub fn lemmatize(&self, form: &str) -> Option<&str> {
        self.entry_of(form).map(VerbEntry::infinitive)
    }

    /// The full paradigm of the verb `form` belongs to.
    pub fn paradigm(&self, form: &str) -> Option<&VerbEntry> {
        self.entry_of(form)
    }

    /// The paradigm stored under an exact infinitive.
    pub fn entry(&self, infinitive: &str) -> Option<&VerbEntry> {
        self.by_infinitive
            .get(infinitive)
            .map(|&slot| &self.entries[slot])
    }

    /// Inflects `verb`, given in any known form, into `tense`.
    ///
    /// Returns `None` for unknown verbs and for slots the verb lacks, which
    /// covers most negated forms.
    pub fn conjugate(&self, verb: &str, tense: Tense, negate: bool) -> Option<&str> {
        self.entry_of(verb)?.form(tense, negate)
    }

    /// [`conjugate`](Self::conjugate) with the tense given by name or alias.
    pub fn conjugate_named(
        &self,
        verb: &str,
        tense: &str,
        negate: bool,
    ) -> Result<Option<&str>, UnknownTenseError> {
        let tense = Tense::resolve(tense)?;
        Ok(self.conjugate(verb, tense, negate))
    }

    /// give -> giving, be -> being, swim -> swimming
    pub fn present_participle(&self, verb: &str) -> Option<&str> {
        self.conjugate(verb, Tense::PresentParticiple, false)
    }

    /// give -> given, be -> been, swim -> swum
    pub fn past_participle(&self, verb: &str) -> Option<&str> {
        self.conjugate(verb, Tense::PastParticiple, false)
    }

    /// Present tense for `person`.
    ///
    /// Without a person, or when the verb has no form for it, this returns
    /// the infinitive (negated if requested).
    pub fn present(&self, verb: &str, person: Option<Person>, negate: bool) -> Option<&str> {
        person
            .and_then(|p| self.conjugate(verb, p.present_tense(), negate))
            .or_else(|| self.conjugate(verb, Tense::Infinitive, negate))
    }

    /// Past tense. A given person selects from the present-tense person
    /// slots; otherwise, or when that slot is empty, the plain past is used.
    pub fn past(&self, verb: &str, person: Option<Person>, negate: bool) -> Option<&str> {
        person
            .and_then(|p| self.conjugate(verb, p.present_tense(), negate))
            .or_else(|| self.conjugate(verb, Tense::Past, negate))
    }

    /// Finds the first slot, in schema order, whose affirmative or negated
    /// form is exactly `verb`.
    pub fn analyze(&self, verb: &str) -> Option<Analysis<'_>> {
        let entry = self.entry_of(verb)?;
        Tense::ALL.iter().find_map(|&tense| {
            let negated = if entry.form(tense, false) == Some(verb) {
                false
            } else if entry.form(tense, true) == Some(verb) {
                true
            } else {
                return None;
            };
            Some(Analysis {
                infinitive: entry.infinitive(),
                tense,
                negated,
            })
        })
    }

    /// given -> past participle
    pub fn tense_of(&self, verb: &str) -> Option<Tense> {
        self.analyze(verb).map(|a| a.tense)
    }

    pub fn is_tense(&self, verb: &str, tense: Tense) -> bool {
        self.tense_of(verb) == Some(tense)
    }

    pub fn is_present_participle(&self, verb: &str) -> bool {
        self.is_tense(verb, Tense::PresentParticiple)
    }

    pub fn is_past_participle(&self, verb: &str) -> bool {
        self.is_tense(verb, Tense::PastParticiple)
    }

    /// Whether `verb` is a present-family form, optionally for a given
    /// person, and negated when `negated` is set.
    pub fn is_present(&self, verb: &str, person: Option<Person>, negated: bool) -> bool {
        self.analyze(verb)
            .is_some_and(|a| a.tense.is_present() && Self::matches(a, person, negated))
    }

    /// Past-family counterpart of [`is_present`](Self::is_present).
    pub fn is_past(&self, verb: &str, person: Option<Person>, negated: bool) -> bool {
        self.analyze(verb)
            .is_some_and(|a| a.tense.is_past() && Self::matches(a, person, negated))
    }

    fn matches(analysis: Analysis<'_>, person: Option<Person>, negated: bool) -> bool {
        let person_ok = person.is_none_or(|p| analysis.tense.person() == Some(p));
        person_ok && (!negated || analysis.negated)
    }
}

impl Default for MorphologyIndex {
    fn default() -> Self {
        Self::new()
    }
}
