//! The directory's models. An [Employee] is the single record type; the
//! developer and manager variants hang off of it as an [EmployeeClass].
//!
//! [Employee]: employee/struct.Employee.html
//! [EmployeeClass]: employee/enum.EmployeeClass.html

#[macro_use]
pub(crate) mod lib;

pub mod developer;
pub mod employee;
pub mod manager;
pub mod raise;
