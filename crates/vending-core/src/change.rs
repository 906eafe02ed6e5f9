//! Change dispensing.
//!
//! Greedy over the high denomination, bounded by what is physically in the
//! pool, with the remainder covered by unit coins. Because coin1 is worth
//! exactly one unit, the only way to fail is running out of coin1; using
//! fewer coin2 than the greedy choice only raises the coin1 requirement.
//! The result is therefore exact, not a heuristic, for this pool shape.

use serde::{Deserialize, Serialize};

use crate::coins::{CoinInventory, Denomination};

/// Coins to hand back to the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChangePlan {
    /// Coin1 pieces to dispense.
    pub coin1: u32,
    /// Coin2 pieces to dispense.
    pub coin2: u32,
}

impl ChangePlan {
    /// Plan that dispenses nothing.
    pub const NONE: Self = Self { coin1: 0, coin2: 0 };

    /// Pieces of a denomination in the plan.
    pub fn count(&self, denomination: Denomination) -> u32 {
        match denomination {
            Denomination::Coin1 => self.coin1,
            Denomination::Coin2 => self.coin2,
        }
    }

    /// Total value dispensed, using the pool's unit values.
    pub fn value(&self, coins: &CoinInventory) -> u64 {
        u64::from(self.coin1) * coins.slot(Denomination::Coin1).unit_value()
            + u64::from(self.coin2) * coins.slot(Denomination::Coin2).unit_value()
    }

    /// Whether the plan dispenses no coins.
    pub fn is_empty(&self) -> bool {
        self.coin1 == 0 && self.coin2 == 0
    }
}

/// Choose coins worth exactly `target` from the pool.
///
/// Returns `None` when exact change cannot be assembled. The pool is not
/// modified; the caller commits the plan with the rest of its transaction.
/// Requires coin1 to be unit-valued, which `MachineConfig::validate`
/// enforces.
pub fn plan_change(target: u64, coins: &CoinInventory) -> Option<ChangePlan> {
    let high = coins.slot(Denomination::Coin2);
    let low = coins.slot(Denomination::Coin1);
    debug_assert_eq!(low.unit_value(), 1);

    let coin2 = (target / high.unit_value()).min(u64::from(high.count()));
    let remainder = target - coin2 * high.unit_value();
    if remainder > u64::from(low.count()) {
        return None;
    }

    // Both values are bounded by u32 slot counts above.
    let coin1 = u32::try_from(remainder).ok()?;
    let coin2 = u32::try_from(coin2).ok()?;
    Some(ChangePlan { coin1, coin2 })
}
