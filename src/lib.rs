//! A small employee directory. Employees come in three variants (plain
//! employees, developers and managers), get raises driven by a shared,
//! per-variant raise configuration, and managers keep track of the people
//! who report to them.
//!
//! All shared state (the hire counter and the raise factors) lives in an
//! explicit [Directory] rather than in globals.
//!
//! ```rust
//! use employee_directory::{Directory, EmployeeKind};
//!
//! let mut directory = Directory::default();
//! let adam = directory.hire("Adam", "Wicks", 50000).unwrap();
//! let dev = directory.hire_developer("Alan", "Turing", 100000, "Machine Language").unwrap();
//!
//! directory.apply_raise(&dev).unwrap();
//! assert_eq!(directory.get(&dev).unwrap().pay(), &110000);
//! assert_eq!(directory.get(&adam).unwrap().email(), "Adam.Wicks@company.com");
//! assert!(directory.get(&dev).unwrap().is_instance_of(EmployeeKind::Employee));
//! assert_eq!(directory.total_employees(), 2);
//! ```
//!
//! [Directory]: directory/struct.Directory.html

pub mod error;
#[macro_use]
mod util;
#[macro_use]
pub mod models;
pub mod config;
pub mod directory;

pub use config::RaiseConfig;
pub use directory::Directory;
pub use models::{
    developer::DeveloperInfo,
    employee::{Employee, EmployeeClass, EmployeeID, EmployeeKind, EmployeeRecord},
    manager::ManagerInfo,
    raise::HasRaiseFactor,
};
pub use util::time::{is_workday, today};
