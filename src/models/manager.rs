//! Managers are employees who have other employees reporting to them.
//!
//! A manager does not own their reports. We only hold on to the reports'
//! [EmployeeID]s, and resolve them against the [Directory] when we need
//! anything more than identity. Reports are kept in the order they were
//! added and an employee can only report to a given manager once.
//!
//! [EmployeeID]: ../employee/struct.EmployeeID.html
//! [Directory]: ../../directory/struct.Directory.html

use crate::{
    directory::Directory,
    models::employee::EmployeeID,
};
use getset::Getters;
use tracing::trace;

/// The manager-only part of an employee.
#[derive(Clone, Debug, Default, PartialEq, Getters)]
#[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
#[getset(get = "pub")]
pub struct ManagerInfo {
    /// The employees reporting to this manager, in the order they were added
    reports: Vec<EmployeeID>,
}

impl ManagerInfo {
    /// Create a manager with an optional starting set of reports. Each
    /// manager gets its own list, and duplicates in the starting set are
    /// dropped (first occurrence wins).
    pub fn new(reports: Option<Vec<EmployeeID>>) -> Self {
        let mut manager = Self::default();
        for id in reports.unwrap_or_default() {
            manager.add_report(&id);
        }
        manager
    }

    /// Determine if an employee reports to this manager.
    pub fn has_report(&self, id: &EmployeeID) -> bool {
        self.reports.contains(id)
    }

    /// Add a report to the end of our list. Returns false (and does nothing)
    /// if they already report to us.
    pub fn add_report(&mut self, id: &EmployeeID) -> bool {
        if self.has_report(id) {
            return false;
        }
        trace!(report = %id, "add report");
        self.reports.push(id.clone());
        true
    }

    /// Remove a report. Returns false (and does nothing) if they don't report
    /// to us.
    pub fn remove_report(&mut self, id: &EmployeeID) -> bool {
        match self.reports.iter().position(|x| x == id) {
            Some(idx) => {
                trace!(report = %id, "remove report");
                self.reports.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Lazily list the full names of our reports, in order.
    ///
    /// Names are looked up in `directory` as the iterator advances, so they
    /// always reflect the reports' current names. IDs the directory doesn't
    /// know about are skipped.
    pub fn report_names<'a>(&'a self, directory: &'a Directory) -> impl Iterator<Item = String> + 'a {
        self.reports.iter()
            .filter_map(move |id| directory.get(id))
            .map(|employee| employee.fullname())
    }
}
