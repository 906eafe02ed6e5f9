//! Operating mode of the machine.
//!
//! Two states only: `Operation` (initial, customer-facing) and
//! `Administrating` (technician-facing). Transitions happen exclusively
//! through [`VendingMachine::enter_admin_mode`] and
//! [`VendingMachine::exit_admin_mode`].
//!
//! [`VendingMachine::enter_admin_mode`]: crate::VendingMachine::enter_admin_mode
//! [`VendingMachine::exit_admin_mode`]: crate::VendingMachine::exit_admin_mode

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::VendError;

/// Machine operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Serving customers: coins accepted, products sold.
    #[default]
    Operation,
    /// Serving a technician: refills and price changes.
    Administrating,
}

impl Mode {
    /// Fail with `IllegalOperation` unless `self` is `expected`.
    pub(crate) fn require(self, expected: Self, operation: &'static str) -> Result<(), VendError> {
        if self == expected {
            Ok(())
        } else {
            Err(VendError::IllegalOperation { operation, mode: self })
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operation => f.write_str("operation"),
            Self::Administrating => f.write_str("administrating"),
        }
    }
}
