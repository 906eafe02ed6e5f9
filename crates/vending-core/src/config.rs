//! Machine configuration.
//!
//! All constants a deployment may tune. The core never loads configuration
//! itself; hosts deserialize a [`MachineConfig`] from whatever format they
//! use and pass it to [`VendingMachine::new`](crate::VendingMachine::new).

use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, products::Product};

/// Admin credential used by the reference configuration.
pub const DEFAULT_ADMIN_CODE: u64 = 117_345_294_655_382;

/// Constants fixed for the lifetime of a machine instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Maximum coin1 pieces the pool can hold.
    pub coin1_capacity: u32,
    /// Maximum coin2 pieces the pool can hold.
    pub coin2_capacity: u32,
    /// Value of one coin1. Must be 1.
    pub coin1_value: u64,
    /// Value of one coin2. Must exceed `coin1_value`, and a full pool must
    /// be worth at most `u64::MAX`.
    pub coin2_value: u64,
    /// Maximum product1 units.
    pub product1_capacity: u32,
    /// Maximum product2 units.
    pub product2_capacity: u32,
    /// Product1 price at construction.
    pub price1: u64,
    /// Product2 price at construction.
    pub price2: u64,
    /// Secret checked on admin-mode entry.
    pub admin_code: u64,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            coin1_capacity: 50,
            coin2_capacity: 50,
            coin1_value: 1,
            coin2_value: 2,
            product1_capacity: 30,
            product2_capacity: 40,
            price1: 8,
            price2: 5,
            admin_code: DEFAULT_ADMIN_CODE,
        }
    }
}

impl MachineConfig {
    /// Replace the admin credential.
    pub fn with_admin_code(mut self, admin_code: u64) -> Self {
        self.admin_code = admin_code;
        self
    }

    /// Replace the initial prices.
    pub fn with_prices(mut self, price1: u64, price2: u64) -> Self {
        self.price1 = price1;
        self.price2 = price2;
        self
    }

    /// Replace the coin slot capacities.
    pub fn with_coin_capacities(mut self, coin1: u32, coin2: u32) -> Self {
        self.coin1_capacity = coin1;
        self.coin2_capacity = coin2;
        self
    }

    /// Replace the product slot capacities.
    pub fn with_product_capacities(mut self, product1: u32, product2: u32) -> Self {
        self.product1_capacity = product1;
        self.product2_capacity = product2;
        self
    }

    /// Value of a coin pool with both slots full, or `None` if it does not
    /// fit in a `u64`.
    ///
    /// Every balance and pool value the machine computes is bounded by this.
    pub fn full_pool_value(&self) -> Option<u64> {
        let coin1 = u64::from(self.coin1_capacity).checked_mul(self.coin1_value)?;
        let coin2 = u64::from(self.coin2_capacity).checked_mul(self.coin2_value)?;
        coin1.checked_add(coin2)
    }

    /// Check the constants the change algorithm and the slot invariants
    /// rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.coin1_value != 1 {
            return Err(ConfigError::UnitCoinRequired(self.coin1_value));
        }
        if self.coin2_value <= self.coin1_value {
            return Err(ConfigError::DenominationOrder {
                low: self.coin1_value,
                high: self.coin2_value,
            });
        }

        let capacities = [
            ("coin1", self.coin1_capacity),
            ("coin2", self.coin2_capacity),
            ("product1", self.product1_capacity),
            ("product2", self.product2_capacity),
        ];
        if let Some((slot, _)) = capacities.into_iter().find(|(_, capacity)| *capacity == 0) {
            return Err(ConfigError::ZeroCapacity { slot });
        }

        if self.full_pool_value().is_none() {
            return Err(ConfigError::PoolValueOverflow {
                coin2_capacity: self.coin2_capacity,
                coin2_value: self.coin2_value,
            });
        }

        if self.price1 == 0 {
            return Err(ConfigError::ZeroPrice(Product::Product1));
        }
        if self.price2 == 0 {
            return Err(ConfigError::ZeroPrice(Product::Product2));
        }

        Ok(())
    }
}
