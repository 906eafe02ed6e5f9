//! Coin inventory and session balance.
//!
//! The coin pool is the physical stock of coins inside the machine. Inserted
//! coins land in the pool immediately; the session balance only tracks how
//! much of the pool's value the current customer is owed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::change::ChangePlan;

/// Coin type accepted by the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Denomination {
    /// Low denomination, worth one unit.
    Coin1,
    /// High denomination.
    Coin2,
}

impl Denomination {
    /// Both denominations, low first.
    pub const ALL: [Self; 2] = [Self::Coin1, Self::Coin2];
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coin1 => f.write_str("coin1"),
            Self::Coin2 => f.write_str("coin2"),
        }
    }
}

/// One coin slot: a bounded counter of coins of a fixed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinSlot {
    count: u32,
    capacity: u32,
    unit_value: u64,
}

impl CoinSlot {
    /// Empty slot.
    pub fn new(capacity: u32, unit_value: u64) -> Self {
        Self { count: 0, capacity, unit_value }
    }

    /// Coins currently held.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Maximum coins the slot can hold.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Value of one coin.
    pub fn unit_value(&self) -> u64 {
        self.unit_value
    }

    /// Total value of the coins held.
    pub fn value(&self) -> u64 {
        u64::from(self.count) * self.unit_value
    }

    /// Whether one more coin fits.
    pub fn is_full(&self) -> bool {
        self.count >= self.capacity
    }
}

/// Two-slot coin pool.
///
/// # Invariants
///
/// - `count <= capacity` for both slots. Mutators that could break this are
///   only reachable after the machine has validated the request.
/// - The value of a full pool fits in a `u64`, checked by
///   [`MachineConfig::validate`](crate::MachineConfig::validate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinInventory {
    coin1: CoinSlot,
    coin2: CoinSlot,
}

impl CoinInventory {
    /// Empty pool with the given slot shapes.
    pub fn new(coin1: CoinSlot, coin2: CoinSlot) -> Self {
        Self { coin1, coin2 }
    }

    /// Slot for a denomination.
    pub fn slot(&self, denomination: Denomination) -> &CoinSlot {
        match denomination {
            Denomination::Coin1 => &self.coin1,
            Denomination::Coin2 => &self.coin2,
        }
    }

    fn slot_mut(&mut self, denomination: Denomination) -> &mut CoinSlot {
        match denomination {
            Denomination::Coin1 => &mut self.coin1,
            Denomination::Coin2 => &mut self.coin2,
        }
    }

    /// Coins held of a denomination.
    pub fn count(&self, denomination: Denomination) -> u32 {
        self.slot(denomination).count
    }

    /// Monetary value of the whole pool.
    pub fn value(&self) -> u64 {
        self.coin1.value() + self.coin2.value()
    }

    /// Add one coin. Caller must have checked [`CoinSlot::is_full`].
    pub(crate) fn deposit(&mut self, denomination: Denomination) -> u64 {
        let slot = self.slot_mut(denomination);
        debug_assert!(!slot.is_full());
        slot.count += 1;
        slot.unit_value
    }

    /// Replace both counts. Caller must have range-checked them.
    pub(crate) fn refill(&mut self, coin1: u32, coin2: u32) {
        debug_assert!(coin1 <= self.coin1.capacity && coin2 <= self.coin2.capacity);
        self.coin1.count = coin1;
        self.coin2.count = coin2;
    }

    /// Remove the coins of a feasible change plan.
    pub(crate) fn withdraw(&mut self, plan: &ChangePlan) {
        debug_assert!(plan.coin1 <= self.coin1.count && plan.coin2 <= self.coin2.count);
        self.coin1.count -= plan.coin1;
        self.coin2.count -= plan.coin2;
    }
}

/// Value inserted by the current customer since the last settled
/// transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionBalance(u64);

impl SessionBalance {
    /// Current balance.
    pub fn get(self) -> u64 {
        self.0
    }

    /// Whether the customer is owed nothing.
    pub fn is_settled(self) -> bool {
        self.0 == 0
    }

    /// Add the value of a deposited coin. The balance never exceeds the
    /// pool value, so this cannot overflow for a validated configuration.
    pub(crate) fn credit(&mut self, amount: u64) {
        self.0 += amount;
    }

    pub(crate) fn settle(&mut self) {
        self.0 = 0;
    }
}
