//! Developers are employees who also have a programming language. They get
//! their own raise factor (see [RaiseConfig]).
//!
//! [RaiseConfig]: ../../config/struct.RaiseConfig.html

use getset::{Getters, Setters};

/// The developer-only part of an employee.
#[derive(Clone, Debug, PartialEq, Getters, Setters)]
#[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
#[getset(get = "pub", set = "pub")]
pub struct DeveloperInfo {
    /// The developer's programming language of choice
    language: String,
}

impl DeveloperInfo {
    pub fn new<T: Into<String>>(language: T) -> Self {
        Self {
            language: language.into(),
        }
    }
}
