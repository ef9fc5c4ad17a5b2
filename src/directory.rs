//! The directory is the registry that owns every employee along with the
//! state they all share: the hire counter and the [RaiseConfig].
//!
//! Every employee is constructed through a directory, which is what keeps
//! the hire counter honest. The counter only ever goes up. A directory can't
//! be cloned: there is exactly one counter per registry.
//!
//! The directory is plain single-threaded data. If it ever needs to be
//! shared between threads, wrap the whole thing in a lock so the counter and
//! the raise factors change together.
//!
//! ```rust
//! use employee_directory::Directory;
//! use rust_decimal_macros::dec;
//!
//! let mut directory = Directory::default();
//! let adam = directory.hire("Adam", "Wicks", 50000).unwrap();
//! let john = directory.hire_from_str("John-Doe-70000").unwrap();
//! let sue = directory.hire_manager("Sue", "Smith", 90000, Some(vec![adam.clone(), john.clone()])).unwrap();
//! assert!(directory.hire_from_str("John-Doe").is_err());
//!
//! directory.set_raise_amount(dec!(1.05));
//! assert_eq!(directory.apply_raise(&adam).unwrap(), 52500);
//!
//! directory.set_fullname(&john, "Joe Bloggs").unwrap();
//! let names = directory.list_reports(&sue).unwrap().collect::<Vec<_>>();
//! assert_eq!(names, vec!["Adam Wicks", "Joe Bloggs"]);
//! assert_eq!(directory.total_employees(), 3);
//! ```
//!
//! ```compile_fail
//! use employee_directory::Directory;
//!
//! let directory = Directory::default();
//! let second_counter = directory.clone();
//! ```
//!
//! [RaiseConfig]: ../config/struct.RaiseConfig.html

use crate::{
    config::RaiseConfig,
    error::{Error, Result},
    models::{
        developer::DeveloperInfo,
        employee::{Employee, EmployeeClass, EmployeeID, EmployeeRecord},
        manager::ManagerInfo,
        raise::HasRaiseFactor,
    },
};
use getset::Getters;
use rust_decimal::Decimal;
use tracing::debug;

/// Owns our employees, our raise configuration, and the hire counter.
#[derive(Debug, Default, Getters)]
pub struct Directory {
    /// The raise factors for each kind of employee
    #[getset(get = "pub")]
    config: RaiseConfig,
    /// Everyone we've hired, in the order we hired them
    employees: Vec<Employee>,
    /// How many employees have ever been created. Never decreases.
    total_employees: u64,
}

impl Directory {
    /// Create an empty directory with the given raise configuration.
    pub fn new(config: RaiseConfig) -> Self {
        Self {
            config,
            employees: Vec::new(),
            total_employees: 0,
        }
    }

    /// Create an employee of any class, assign them a fresh ID, and count
    /// them.
    fn register(&mut self, first: String, last: String, pay: i64, class: EmployeeClass) -> Result<EmployeeID> {
        let id = EmployeeID::create();
        let employee = Employee::builder()
            .id(id.clone())
            .first(first)
            .last(last)
            .pay(pay)
            .class(class)
            .build()?;
        self.total_employees += 1;
        debug!(id = %id, kind = %employee.kind(), total = self.total_employees, "hired {}", employee.fullname());
        self.employees.push(employee);
        Ok(id)
    }

    /// Hire a plain employee.
    pub fn hire<T: Into<String>>(&mut self, first: T, last: T, pay: i64) -> Result<EmployeeID> {
        self.register(first.into(), last.into(), pay, EmployeeClass::Employee)
    }

    /// Hire a developer.
    pub fn hire_developer<T, L>(&mut self, first: T, last: T, pay: i64, language: L) -> Result<EmployeeID>
        where T: Into<String>,
              L: Into<String>,
    {
        self.register(first.into(), last.into(), pay, EmployeeClass::Developer(DeveloperInfo::new(language)))
    }

    /// Hire a manager, optionally with a starting set of reports. A manager
    /// hired without reports starts with their own empty list.
    pub fn hire_manager<T: Into<String>>(&mut self, first: T, last: T, pay: i64, reports: Option<Vec<EmployeeID>>) -> Result<EmployeeID> {
        self.register(first.into(), last.into(), pay, EmployeeClass::Manager(ManagerInfo::new(reports)))
    }

    /// Hire a plain employee from a parsed record.
    pub fn hire_record(&mut self, record: EmployeeRecord) -> Result<EmployeeID> {
        let (first, last, pay) = record.into_parts();
        self.register(first, last, pay, EmployeeClass::Employee)
    }

    /// Hire a plain employee from `first-last-pay` text. Nothing is created
    /// (or counted) if the text is malformed.
    pub fn hire_from_str(&mut self, record: &str) -> Result<EmployeeID> {
        let record = record.parse::<EmployeeRecord>()?;
        self.hire_record(record)
    }

    /// How many employees this directory has ever created.
    pub fn total_employees(&self) -> u64 {
        self.total_employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Iterate over our employees in hiring order.
    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter()
    }

    pub fn get(&self, id: &EmployeeID) -> Option<&Employee> {
        self.employees.iter().find(|x| x.id() == id)
    }

    pub fn get_mut(&mut self, id: &EmployeeID) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|x| x.id() == id)
    }

    fn lookup(&self, id: &EmployeeID) -> Result<&Employee> {
        self.get(id).ok_or_else(|| Error::EmployeeNotFound(id.to_string()))
    }

    fn lookup_mut(&mut self, id: &EmployeeID) -> Result<&mut Employee> {
        self.get_mut(id).ok_or_else(|| Error::EmployeeNotFound(id.to_string()))
    }

    /// Grab an employee's manager data, if they exist and are a manager.
    pub fn manager_mut(&mut self, id: &EmployeeID) -> Option<&mut ManagerInfo> {
        self.get_mut(id).and_then(|x| x.manager_mut())
    }

    /// Set the shared raise factor for everyone whose variant doesn't have
    /// its own override, now and in the future.
    pub fn set_raise_amount(&mut self, amount: Decimal) {
        self.config.set_raise_amount(amount);
    }

    /// The raise factor that currently applies to an employee.
    pub fn raise_factor(&self, id: &EmployeeID) -> Result<Decimal> {
        Ok(self.lookup(id)?.raise_factor(&self.config))
    }

    /// Give an employee a raise, returning their new pay.
    pub fn apply_raise(&mut self, id: &EmployeeID) -> Result<i64> {
        let config = &self.config;
        let employee = self.employees.iter_mut()
            .find(|x| x.id() == id)
            .ok_or_else(|| Error::EmployeeNotFound(id.to_string()))?;
        Ok(employee.apply_raise(config))
    }

    /// Change an employee's name from a "First Last" string.
    pub fn set_fullname(&mut self, id: &EmployeeID, name: &str) -> Result<()> {
        self.lookup_mut(id)?.set_fullname(name)
    }

    /// Lazily list the full names of a manager's reports. Returns `None` if
    /// the employee doesn't exist or isn't a manager.
    pub fn list_reports<'a>(&'a self, id: &EmployeeID) -> Option<impl Iterator<Item = String> + 'a> {
        self.get(id)
            .and_then(|x| x.manager())
            .map(move |manager| manager.report_names(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::employee::EmployeeKind,
        util::test::standard_directory,
    };

    #[test]
    fn counts_every_hire() {
        let mut directory = Directory::default();
        assert_eq!(directory.total_employees(), 0);
        assert!(directory.is_empty());
        directory.hire("Adam", "Wicks", 50000).unwrap();
        directory.hire_developer("Alan", "Turing", 100000, "Machine Language").unwrap();
        directory.hire_manager("Sue", "Smith", 90000, None).unwrap();
        directory.hire_from_str("John-Doe-70000").unwrap();
        directory.hire_record(EmployeeRecord::new("Jane", "Doe", 90000)).unwrap();
        assert_eq!(directory.total_employees(), 5);
        assert!(directory.hire_from_str("John-Doe").is_err());
        assert!(directory.hire_from_str("Jane-Doe-lots").is_err());
        assert_eq!(directory.total_employees(), 5);
        assert_eq!(directory.len(), 5);

        // every employee handed out is one we counted, of every kind
        let kinds = directory.iter().map(|x| x.kind()).collect::<Vec<_>>();
        assert_eq!(kinds, vec![
            EmployeeKind::Employee,
            EmployeeKind::Developer,
            EmployeeKind::Manager,
            EmployeeKind::Employee,
            EmployeeKind::Employee,
        ]);
        assert_eq!(directory.iter().count() as u64, directory.total_employees());

        let (directory, ids) = standard_directory();
        assert_eq!(directory.total_employees(), ids.len() as u64);
    }

    #[test]
    fn hiring_order() {
        let (directory, ids) = standard_directory();
        let got = directory.iter().map(|x| x.id().clone()).collect::<Vec<_>>();
        assert_eq!(got, ids);
        let kinds = directory.iter().map(|x| x.kind()).collect::<Vec<_>>();
        assert_eq!(kinds, vec![
            EmployeeKind::Employee,
            EmployeeKind::Employee,
            EmployeeKind::Employee,
            EmployeeKind::Developer,
            EmployeeKind::Manager,
        ]);
    }

    #[test]
    fn from_str() {
        let mut directory = Directory::default();
        let id = directory.hire_from_str("John-Doe-70000").unwrap();
        let john = directory.get(&id).unwrap();
        assert_eq!(john.first(), "John");
        assert_eq!(john.last(), "Doe");
        assert_eq!(john.pay(), &70000);
        assert_eq!(john.email(), "John.Doe@company.com");
        let repr = john.repr();
        assert!(repr.contains("John"));
        assert!(repr.contains("Doe"));
        assert!(repr.contains("70000"));

        let res = directory.hire_from_str("John-Doe");
        assert_eq!(res, Err(Error::MalformedRecordText("John-Doe".into())));
    }

    #[test]
    fn raises() {
        let mut directory = Directory::default();
        let emp = directory.hire("Adam", "Wicks", 100000).unwrap();
        let dev = directory.hire_developer("Alan", "Turing", 100000, "Machine Language").unwrap();
        let mgr = directory.hire_manager("Sue", "Smith", 100000, None).unwrap();
        assert_eq!(directory.raise_factor(&emp).unwrap(), num!(1.04));
        assert_eq!(directory.apply_raise(&emp).unwrap(), 104000);
        assert_eq!(directory.apply_raise(&dev).unwrap(), 110000);

        directory.set_raise_amount(num!(1.05));
        assert_eq!(directory.raise_factor(&emp).unwrap(), num!(1.05));
        assert_eq!(directory.raise_factor(&mgr).unwrap(), num!(1.05));
        assert_eq!(directory.raise_factor(&dev).unwrap(), num!(1.10));
        assert_eq!(directory.apply_raise(&mgr).unwrap(), 105000);
        assert_eq!(directory.apply_raise(&dev).unwrap(), 121000);
        assert_eq!(directory.get(&dev).unwrap().pay(), &121000);

        // new hires pick up the changed factor too
        let late = directory.hire("Late", "Comer", 100000).unwrap();
        assert_eq!(directory.apply_raise(&late).unwrap(), 105000);

        let ghost = EmployeeID::new("ghost");
        assert_eq!(directory.apply_raise(&ghost), Err(Error::EmployeeNotFound("ghost".into())));
        assert_eq!(directory.raise_factor(&ghost), Err(Error::EmployeeNotFound("ghost".into())));
    }

    #[test]
    fn custom_config() {
        let config = RaiseConfig::builder()
            .developer_raise_amount(None)
            .build().unwrap();
        let mut directory = Directory::new(config);
        let dev = directory.hire_developer("Alan", "Turing", 100000, "Machine Language").unwrap();
        assert_eq!(directory.apply_raise(&dev).unwrap(), 104000);
        assert_eq!(directory.config().developer_raise_amount(), &None);
    }

    #[test]
    fn name_changes() {
        let mut directory = Directory::default();
        let id = directory.hire("John", "Doe", 70000).unwrap();
        directory.set_fullname(&id, "Joe Bloggs").unwrap();
        assert_eq!(directory.get(&id).unwrap().email(), "Joe.Bloggs@company.com");
        assert_eq!(directory.set_fullname(&id, "Joe"), Err(Error::MalformedNameText("Joe".into())));
        assert_eq!(directory.get(&id).unwrap().fullname(), "Joe Bloggs");
        assert!(directory.set_fullname(&EmployeeID::new("ghost"), "Joe Bloggs").is_err());
    }

    #[test]
    fn reports() {
        let (mut directory, ids) = standard_directory();
        let (adam, alan, sue) = (&ids[0], &ids[3], &ids[4]);
        let names = directory.list_reports(sue).unwrap().collect::<Vec<_>>();
        assert_eq!(names, vec!["Adam Wicks", "Test User", "John Doe"]);

        let manager = directory.manager_mut(sue).unwrap();
        assert!(manager.add_report(alan));
        assert!(!manager.add_report(alan));
        let names = directory.list_reports(sue).unwrap().collect::<Vec<_>>();
        assert_eq!(names, vec!["Adam Wicks", "Test User", "John Doe", "Alan Turing"]);

        let manager = directory.manager_mut(sue).unwrap();
        assert!(manager.remove_report(adam));
        let before = manager.reports().clone();
        assert!(!manager.remove_report(adam));
        assert_eq!(manager.reports(), &before);
        let names = directory.list_reports(sue).unwrap().collect::<Vec<_>>();
        assert_eq!(names, vec!["Test User", "John Doe", "Alan Turing"]);

        // not a manager
        assert!(directory.list_reports(alan).is_none());
        assert!(directory.manager_mut(alan).is_none());
    }
}
