//! Employees are the heart of the directory. Every person in it is an
//! `Employee`, and the variant-specific data (a developer's language, a
//! manager's reports) lives in the employee's [EmployeeClass].
//!
//! Names are plain text and pay is a whole number of currency units. Nothing
//! is validated on construction: empty names and negative pay are accepted
//! as given.
//!
//! Employees only come into being through a [Directory], which counts every
//! one it creates. There is no way to build an uncounted employee from
//! outside the crate.
//!
//! ```rust
//! use employee_directory::{Directory, EmployeeRecord};
//!
//! let record: EmployeeRecord = "John-Doe-70000".parse().unwrap();
//! assert_eq!(record.first(), "John");
//! assert_eq!(record.pay(), &70000);
//! assert!("John-Doe".parse::<EmployeeRecord>().is_err());
//!
//! let mut directory = Directory::default();
//! let id = directory.hire_record(record).unwrap();
//! let john = directory.get_mut(&id).unwrap();
//! assert_eq!(john.to_string(), "John Doe - John.Doe@company.com");
//! john.set_fullname("Joe Bloggs").unwrap();
//! assert_eq!(john.email(), "Joe.Bloggs@company.com");
//! assert_eq!(john.repr(), "Employee(Joe, Bloggs, 70000)");
//! assert_eq!(directory.total_employees(), 1);
//! ```
//!
//! ```compile_fail
//! use employee_directory::models::employee::EmployeeBuilder;
//!
//! let employee = EmployeeBuilder::default()
//!     .id("nope")
//!     .first("Not")
//!     .last("Counted")
//!     .pay(1)
//!     .build();
//! ```
//!
//! [Directory]: ../../directory/struct.Directory.html
//! [EmployeeClass]: enum.EmployeeClass.html

use crate::{
    config::RaiseConfig,
    error::{Error, Result},
    models::{
        developer::DeveloperInfo,
        manager::ManagerInfo,
        raise::HasRaiseFactor,
    },
    util,
};
use chrono::Datelike;
use getset::Getters;
use rust_decimal::prelude::*;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Every employee's email lives under this domain.
pub const EMAIL_DOMAIN: &str = "company.com";

/// The kinds of employee we have, without any of their data attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum EmployeeKind {
    Employee,
    Developer,
    Manager,
}

impl EmployeeKind {
    /// The kind's type name, as used in `Employee::repr()`
    pub fn name(&self) -> &'static str {
        match self {
            EmployeeKind::Employee => "Employee",
            EmployeeKind::Developer => "Developer",
            EmployeeKind::Manager => "Manager",
        }
    }

    /// The kind this kind specializes, if any.
    pub fn parent(&self) -> Option<EmployeeKind> {
        match self {
            EmployeeKind::Employee => None,
            EmployeeKind::Developer | EmployeeKind::Manager => Some(EmployeeKind::Employee),
        }
    }

    /// Determine if this kind is `other` or a specialization of it. Every
    /// kind is a subkind of itself and of `Employee`, but developers and
    /// managers are unrelated.
    pub fn is_subkind_of(&self, other: EmployeeKind) -> bool {
        let mut kind = Some(*self);
        while let Some(current) = kind {
            if current == other {
                return true;
            }
            kind = current.parent();
        }
        false
    }
}

impl fmt::Display for EmployeeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Describes which variant an employee is, along with the data that only
/// that variant carries.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum EmployeeClass {
    /// A plain employee
    Employee,
    /// A developer, who has a programming language
    Developer(DeveloperInfo),
    /// A manager, who has (non-owned) reports
    Manager(ManagerInfo),
}

impl EmployeeClass {
    pub fn kind(&self) -> EmployeeKind {
        match self {
            EmployeeClass::Employee => EmployeeKind::Employee,
            EmployeeClass::Developer(_) => EmployeeKind::Developer,
            EmployeeClass::Manager(_) => EmployeeKind::Manager,
        }
    }
}

impl Default for EmployeeClass {
    fn default() -> Self {
        EmployeeClass::Employee
    }
}

directory_model! {
    /// An employee in the directory.
    #[builder(build_fn(private, name = "build_uncounted"))]
    pub struct Employee {
        /// First name
        first: String,
        /// Last name
        last: String,
        /// Pay, in whole currency units
        pay: i64,
        /// Which variant of employee this is
        #[builder(default)]
        class: EmployeeClass,
    }
    EmployeeID
    EmployeeBuilder
}

impl EmployeeBuilder {
    /// Build the employee. Only the directory (and our tests) build
    /// employees, since anything built here is not counted as a hire.
    pub(crate) fn build(self) -> Result<Employee> {
        self.build_uncounted().map_err(|e| Error::BuilderFailed(e))
    }
}

impl Employee {
    /// Determine if a date is a workday (Mon-Fri).
    pub fn is_workday<D: Datelike>(day: &D) -> bool {
        util::time::is_workday(day)
    }

    pub fn kind(&self) -> EmployeeKind {
        self.class().kind()
    }

    /// Determine if this employee is a `kind` (or a specialization of it).
    pub fn is_instance_of(&self, kind: EmployeeKind) -> bool {
        self.kind().is_subkind_of(kind)
    }

    /// Returns "First Last"
    pub fn fullname(&self) -> String {
        format!("{} {}", self.first, self.last)
    }

    /// Build this employee's email from their *current* name. Case is kept
    /// as given.
    pub fn email(&self) -> String {
        format!("{}.{}@{}", self.first, self.last, EMAIL_DOMAIN)
    }

    /// Change this employee's name from a "First Last" string.
    ///
    /// The name must be exactly two non-empty tokens separated by a single
    /// space, otherwise we return `Error::MalformedNameText` and leave the
    /// current name alone.
    pub fn set_fullname(&mut self, name: &str) -> Result<()> {
        let mut parts = name.split(' ');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(first), Some(last), None) if !first.is_empty() && !last.is_empty() => {
                debug!(id = %self.id, from = %self.fullname(), to = name, "name change");
                self.first = first.into();
                self.last = last.into();
                Ok(())
            }
            _ => Err(Error::MalformedNameText(name.into())),
        }
    }

    /// Give this employee a raise using whichever factor applies to their
    /// variant, returning the new pay.
    ///
    /// Pay becomes `floor(pay * factor)`. If that leaves the range of `i64`
    /// the pay saturates instead.
    pub fn apply_raise(&mut self, config: &RaiseConfig) -> i64 {
        let factor = self.raise_factor(config);
        let raised = Decimal::from(self.pay)
            .checked_mul(factor)
            .and_then(|x| x.floor().to_i64());
        let pay = match raised {
            Some(pay) => pay,
            None if (self.pay < 0) != factor.is_sign_negative() => i64::MIN,
            None => i64::MAX,
        };
        debug!(id = %self.id, kind = %self.kind(), %factor, from = self.pay, to = pay, "raise");
        self.pay = pay;
        pay
    }

    /// A representation that reads like the constructor call that would
    /// recreate this employee, ie `Developer(Alan, Turing, 100000)`.
    pub fn repr(&self) -> String {
        format!("{}({}, {}, {})", self.kind(), self.first, self.last, self.pay)
    }

    /// Grab this employee's developer data, if they are a developer
    pub fn developer(&self) -> Option<&DeveloperInfo> {
        match self.class() {
            EmployeeClass::Developer(developer) => Some(developer),
            _ => None,
        }
    }

    /// Grab this employee's manager data, if they are a manager
    pub fn manager(&self) -> Option<&ManagerInfo> {
        match self.class() {
            EmployeeClass::Manager(manager) => Some(manager),
            _ => None,
        }
    }

    /// Grab this employee's manager data mutably, if they are a manager
    pub fn manager_mut(&mut self) -> Option<&mut ManagerInfo> {
        match &mut self.class {
            EmployeeClass::Manager(manager) => Some(manager),
            _ => None,
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.fullname(), self.email())
    }
}

/// The `first-last-pay` text form of an employee, ie `John-Doe-70000`.
///
/// There is no escaping, so names cannot contain `-`. Pay must parse as a
/// whole number.
#[derive(Clone, Debug, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct EmployeeRecord {
    first: String,
    last: String,
    pay: i64,
}

impl EmployeeRecord {
    pub fn new<T: Into<String>>(first: T, last: T, pay: i64) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
            pay,
        }
    }

    /// Split this record into its (first, last, pay) parts.
    pub fn into_parts(self) -> (String, String, i64) {
        (self.first, self.last, self.pay)
    }
}

impl FromStr for EmployeeRecord {
    type Err = Error;

    fn from_str(record: &str) -> Result<Self> {
        let fields = record.split('-').collect::<Vec<_>>();
        if fields.len() != 3 {
            Err(Error::MalformedRecordText(record.into()))?;
        }
        let pay = fields[2].parse::<i64>()
            .map_err(|_| Error::MalformedRecordText(record.into()))?;
        Ok(Self::new(fields[0], fields[1], pay))
    }
}
