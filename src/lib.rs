pub mod error;
pub mod tense;
pub mod person;
pub mod paradigm;
pub mod data;
pub mod index;

pub use error::{Result, UnknownTenseError, VerbError};
pub use index::{Analysis, IndexBuilder, MorphologyIndex};
pub use paradigm::VerbEntry;
pub use person::Person;
pub use tense::{Tense, all_tense_names, slot_index};
