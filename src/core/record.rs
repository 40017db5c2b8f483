//! Purpose: Define the student record data model and form validation rules.
//! Exports: `StudentRecord`, `RecordForm`, `RecordDraft`, `AgeBand`.
//! Invariants: A `RecordDraft` can only be obtained from a valid `RecordForm`,
//! Invariants: so invalid entries never reach the endpoint client.
//! Invariants: Ids are assigned remotely and never synthesized locally.
use crate::core::error::{Error, ErrorKind};

pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 100;

/// One student record as held in the local roster snapshot.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub registration: String,
}

impl StudentRecord {
    /// Case-insensitive substring match against name or registration.
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.registration.to_lowercase().contains(&term)
    }
}

/// Raw form entry, field values exactly as the user typed them.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RecordForm {
    pub name: String,
    pub age: String,
    pub registration: String,
}

impl RecordForm {
    /// Validate the form and produce a draft ready for submission.
    ///
    /// Rules: `name` and `registration` must be non-empty after trimming;
    /// `age` must parse as an integer in `1..=100`. The draft keeps the
    /// trimmed values.
    pub fn validate(&self) -> Result<RecordDraft, Error> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::new(ErrorKind::Validation).with_message("name must not be empty"));
        }
        let registration = self.registration.trim();
        if registration.is_empty() {
            return Err(
                Error::new(ErrorKind::Validation).with_message("registration must not be empty")
            );
        }
        let age_text = self.age.trim();
        let age: u32 = age_text.parse().map_err(|err| {
            Error::new(ErrorKind::Validation)
                .with_message("age must be a whole number")
                .with_source(err)
        })?;
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(Error::new(ErrorKind::Validation)
                .with_message(format!("age must be between {MIN_AGE} and {MAX_AGE}")));
        }
        Ok(RecordDraft {
            name: name.to_string(),
            age,
            registration: registration.to_string(),
        })
    }
}

/// A validated record ready to POST; the remote store assigns the id.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordDraft {
    name: String,
    age: u32,
    registration: String,
}

impl RecordDraft {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn registration(&self) -> &str {
        &self.registration
    }
}

/// Age bracket used by the dashboard badge; presentation picks the styling.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AgeBand {
    Minor,
    YoungAdult,
    Adult,
    Senior,
}

impl AgeBand {
    pub fn from_age(age: u32) -> Self {
        if age < 18 {
            AgeBand::Minor
        } else if age < 25 {
            AgeBand::YoungAdult
        } else if age < 35 {
            AgeBand::Adult
        } else {
            AgeBand::Senior
        }
    }
}
