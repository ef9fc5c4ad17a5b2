//! Raises. Each variant resolves its own factor against the directory's
//! [RaiseConfig], falling back to the shared base factor when it has no
//! override.
//!
//! [RaiseConfig]: ../../config/struct.RaiseConfig.html

use crate::{
    config::RaiseConfig,
    models::employee::{Employee, EmployeeClass, EmployeeKind},
};
use rust_decimal::Decimal;

/// Anything that can tell us which raise factor applies to it.
pub trait HasRaiseFactor {
    /// The factor a raise multiplies pay by, given the current config.
    fn raise_factor(&self, config: &RaiseConfig) -> Decimal;
}

impl HasRaiseFactor for EmployeeKind {
    fn raise_factor(&self, config: &RaiseConfig) -> Decimal {
        config.factor_for(*self)
    }
}

impl HasRaiseFactor for EmployeeClass {
    fn raise_factor(&self, config: &RaiseConfig) -> Decimal {
        self.kind().raise_factor(config)
    }
}

impl HasRaiseFactor for Employee {
    fn raise_factor(&self, config: &RaiseConfig) -> Decimal {
        self.class().raise_factor(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{
            developer::DeveloperInfo,
            employee::EmployeeID,
        },
        util::test::{make_developer, make_employee, make_manager},
    };

    #[test]
    fn dispatches_on_variant() {
        let mut config = RaiseConfig::default();
        let emp = make_employee(&EmployeeID::create(), "Adam", "Wicks", 50000);
        let dev = make_developer(&EmployeeID::create(), "Alan", "Turing", 100000, "Machine Language");
        let mgr = make_manager(&EmployeeID::create(), "Sue", "Smith", 90000, vec![]);
        assert_eq!(emp.raise_factor(&config), num!(1.04));
        assert_eq!(dev.raise_factor(&config), num!(1.10));
        assert_eq!(mgr.raise_factor(&config), num!(1.04));
        assert_eq!(EmployeeClass::Developer(DeveloperInfo::new("Rust")).raise_factor(&config), num!(1.10));

        config.set_raise_amount(num!(1.05));
        assert_eq!(emp.raise_factor(&config), num!(1.05));
        assert_eq!(mgr.raise_factor(&config), num!(1.05));
        assert_eq!(dev.raise_factor(&config), num!(1.10));
        assert_eq!(EmployeeKind::Employee.raise_factor(&config), num!(1.05));
    }
}
