//! Vending machine control core.
//!
//! A synchronous, sans-IO state machine for a dual-product, two-coin vending
//! machine. Hardware drivers, displays and admin tooling call into
//! [`VendingMachine`] and render the results; nothing here performs I/O.
//!
//! ## Architecture
//!
//! ```text
//! VendingMachine
//!   ├─ Mode              (operation / administrating gate)
//!   ├─ CoinInventory     (two bounded coin slots, the pool)
//!   ├─ SessionBalance    (value owed to the current customer)
//!   ├─ ProductInventory  (two bounded product slots)
//!   ├─ PriceTable        (unit prices)
//!   └─ plan_change       (bounded two-denomination change making)
//! ```
//!
//! Every operation is all-or-nothing: an `Err` never leaves partial state.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod change;
pub mod coins;
pub mod config;
pub mod error;
mod machine;
pub mod mode;
pub mod products;

pub use change::{ChangePlan, plan_change};
pub use coins::{CoinInventory, CoinSlot, Denomination, SessionBalance};
pub use config::{DEFAULT_ADMIN_CODE, MachineConfig};
pub use error::{ConfigError, Response, VendError};
pub use machine::{MachineSnapshot, Sale, VendingMachine};
pub use mode::Mode;
pub use products::{PriceTable, Product, ProductInventory};
