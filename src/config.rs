//! Raise configuration: the shared base raise factor plus any per-variant
//! overrides. This replaces class-level raise amounts; a variant without an
//! override follows the base factor wherever it goes.
//!
//! ```rust
//! use employee_directory::{EmployeeKind, RaiseConfig};
//! use rust_decimal_macros::dec;
//!
//! let mut config = RaiseConfig::default();
//! assert_eq!(config.factor_for(EmployeeKind::Employee), dec!(1.04));
//! assert_eq!(config.factor_for(EmployeeKind::Developer), dec!(1.10));
//!
//! config.set_raise_amount(dec!(1.05));
//! assert_eq!(config.factor_for(EmployeeKind::Manager), dec!(1.05));
//! assert_eq!(config.factor_for(EmployeeKind::Developer), dec!(1.10));
//! ```

use crate::models::employee::EmployeeKind;
use derive_builder::Builder;
use getset::{Getters, Setters};
use rust_decimal::Decimal;
use tracing::debug;

fn default_raise_amount() -> Decimal {
    num!(1.04)
}

fn default_developer_raise_amount() -> Option<Decimal> {
    Some(num!(1.10))
}

/// Holds the raise factors for every kind of employee.
#[derive(Clone, Debug, PartialEq, Getters, Setters, Builder)]
#[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
#[builder(pattern = "owned", setter(into))]
#[getset(get = "pub")]
pub struct RaiseConfig {
    /// The shared raise factor
    #[builder(default = "default_raise_amount()")]
    raise_amount: Decimal,
    /// Developers' own raise factor. `None` means they use the shared one.
    #[builder(default = "default_developer_raise_amount()")]
    #[getset(set = "pub")]
    developer_raise_amount: Option<Decimal>,
    /// Managers' own raise factor. `None` means they use the shared one.
    #[builder(default)]
    #[getset(set = "pub")]
    manager_raise_amount: Option<Decimal>,
}

impl RaiseConfig {
    pub fn builder() -> RaiseConfigBuilder {
        RaiseConfigBuilder::default()
    }

    /// Set the shared raise factor. Variants with their own override are not
    /// affected.
    pub fn set_raise_amount(&mut self, amount: Decimal) {
        debug!(from = %self.raise_amount, to = %amount, "set shared raise amount");
        self.raise_amount = amount;
    }

    /// Get the most specific raise factor for a kind of employee.
    pub fn factor_for(&self, kind: EmployeeKind) -> Decimal {
        let specific = match kind {
            EmployeeKind::Employee => None,
            EmployeeKind::Developer => self.developer_raise_amount,
            EmployeeKind::Manager => self.manager_raise_amount,
        };
        specific.unwrap_or(self.raise_amount)
    }
}

impl Default for RaiseConfig {
    fn default() -> Self {
        Self {
            raise_amount: default_raise_amount(),
            developer_raise_amount: default_developer_raise_amount(),
            manager_raise_amount: None,
        }
    }
}
