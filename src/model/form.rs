use std::collections::{BTreeMap, BTreeSet};

use super::contact::{ContactDetails, Submission};
use super::field::Field;
use super::validation::{ValidationError, validate};

/// Current validation failures, keyed by field in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet {
    errors: BTreeMap<Field, ValidationError>,
}

impl ErrorSet {
    /// Returns the error for `field`, if it is currently invalid.
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// Number of invalid fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if no field is invalid.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over invalid fields and their errors in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        self.errors.iter().map(|(field, err)| (*field, err))
    }
}

/// Where the form sits in the edit/submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No validation errors are showing.
    #[default]
    Editing,
    /// At least one touched field is invalid.
    Blocked,
    /// The last action was an accepted submit.
    Submitted,
}

/// State holder for the contact form: values, errors and the last submission.
///
/// Only fields the user has edited, or that were part of a submit, are
/// validated. A fresh form therefore shows no errors.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    values: ContactDetails,
    touched: BTreeSet<Field>,
    errors: ErrorSet,
    phase: Phase,
    submission: Option<Submission>,
}

impl ContactForm {
    /// Creates an empty form in the [`Phase::Editing`] state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the value of `field` and re-validates.
    ///
    /// Leaves any previous submission on display.
    pub fn update(&mut self, field: Field, value: impl Into<String>) {
        *self.slot(field) = value.into();
        self.touched.insert(field);
        self.revalidate();
        self.phase = if self.errors.is_empty() {
            Phase::Editing
        } else {
            Phase::Blocked
        };
        tracing::trace!(%field, errors = self.errors.len(), "field updated");
    }

    /// Validates every field and, if all pass, records a new [`Submission`].
    ///
    /// On failure the form moves to [`Phase::Blocked`] and the full error set
    /// is returned.
    pub fn submit(&mut self) -> Result<&Submission, &ErrorSet> {
        self.touched.extend(Field::ALL);
        self.revalidate();

        if !self.errors.is_empty() {
            self.phase = Phase::Blocked;
            tracing::debug!(errors = self.errors.len(), "submit blocked");
            return Err(&self.errors);
        }

        self.phase = Phase::Submitted;
        tracing::info!(
            has_message = self.values.message().is_some(),
            "contact form submitted"
        );
        let submission: &Submission = self.submission.insert(Submission::new(self.values.clone()));
        Ok(submission)
    }

    /// Returns the current value of `field`.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.values.first_name,
            Field::LastName => &self.values.last_name,
            Field::Email => &self.values.email,
            Field::Message => &self.values.message,
        }
    }

    /// Returns all current values.
    pub fn values(&self) -> &ContactDetails {
        &self.values
    }

    /// Returns the current validation errors.
    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    /// Returns the error for `field`, if any.
    pub fn error(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(field)
    }

    /// Returns `true` once `field` has been edited or submitted.
    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the most recent accepted submission, if any.
    pub fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.values.first_name,
            Field::LastName => &mut self.values.last_name,
            Field::Email => &mut self.values.email,
            Field::Message => &mut self.values.message,
        }
    }

    fn revalidate(&mut self) {
        let errors = self
            .touched
            .iter()
            .filter_map(|&field| {
                validate(field, self.value(field))
                    .err()
                    .map(|err| (field, err))
            })
            .collect();
        self.errors = ErrorSet { errors };
    }
}
