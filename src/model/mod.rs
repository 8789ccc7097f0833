mod contact;
mod field;
mod form;
mod validation;

pub use contact::{ContactDetails, Submission};
pub use field::Field;
pub use form::{ContactForm, ErrorSet, Phase};
pub use validation::{
    MIN_FIRST_NAME_LEN, ValidationError, validate, validate_email, validate_first_name,
    validate_last_name,
};
