//! Per-record form state.
//!
//! DESIGN
//! ======
//! Every field change is a submission: the raw value is stored, the whole
//! record is validated synchronously, and a valid record is handed back to the
//! caller to emit. Invalid values stay in the raw state but are never emitted.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use schema::{Attribute, CveModel, RawCveModel, ValidationError, validate};

/// Editing state of one record form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordFormState {
    raw: RawCveModel,
}

impl Default for RecordFormState {
    fn default() -> Self {
        Self::new(None)
    }
}

impl RecordFormState {
    /// Seed the form from `initial`, or from the default record.
    #[must_use]
    pub fn new(initial: Option<CveModel>) -> Self {
        Self { raw: RawCveModel::from(&initial.unwrap_or_default()) }
    }

    /// Current raw value of one field. Empty when the field has no value.
    #[must_use]
    pub fn value(&self, attribute: Attribute) -> &str {
        self.raw.get(attribute).unwrap_or_default()
    }

    /// Apply a field change and validate the whole record.
    ///
    /// # Errors
    ///
    /// Returns the validation failure when the updated record is not valid;
    /// the change is still kept in the raw state.
    pub fn change(&mut self, attribute: Attribute, value: &str) -> Result<CveModel, ValidationError> {
        self.raw.set(attribute, value);
        validate(&self.raw)
    }

    /// Validate the current values without changing anything.
    ///
    /// # Errors
    ///
    /// Returns the validation failure when the current record is not valid.
    pub fn current(&self) -> Result<CveModel, ValidationError> {
        validate(&self.raw)
    }
}
