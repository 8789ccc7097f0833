/// The four values collected by the contact form.
///
/// An empty `message` means the user did not provide one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl ContactDetails {
    /// Returns the optional message, or `None` if it was left blank.
    pub fn message(&self) -> Option<&str> {
        (!self.message.is_empty()).then_some(self.message.as_str())
    }
}

/// A frozen copy of the values accepted by a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    details: ContactDetails,
}

impl Submission {
    /// Only the form's submission gate builds these, after every rule passed.
    pub(super) fn new(details: ContactDetails) -> Self {
        Self { details }
    }

    /// The submitted values.
    pub fn details(&self) -> &ContactDetails {
        &self.details
    }
}
