//! Errors for the directory. Only the two text parsers can fail on bad
//! input; everything else is total apart from registry lookups.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// A `derive_builder` builder was missing a required field.
    #[error("error building object {0}")]
    BuilderFailed(String),
    /// No employee with the given ID exists in the directory.
    #[error("employee {0} not found")]
    EmployeeNotFound(String),
    /// A name change was not two tokens separated by a single space.
    #[error("malformed name text: {0:?}")]
    MalformedNameText(String),
    /// An employee record was not `first-last-pay`.
    #[error("malformed record text: {0:?}")]
    MalformedRecordText(String),
}

pub type Result<T> = std::result::Result<T, Error>;
