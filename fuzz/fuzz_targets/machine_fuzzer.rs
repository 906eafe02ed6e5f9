//! Fuzz target for the [`VendingMachine`] state machine
//!
//! Catch invariant violations and divergence from the reference model under
//! arbitrary operation sequences and configurations.
//!
//! # Strategy
//!
//! - Configuration: arbitrary slot capacities and prices, and any `u64`
//!   coin2 value so full pools near `u64::MAX` are reached
//! - Operation sequences: any interleaving of customer and admin calls,
//!   including wrong credentials and out-of-range arguments
//!
//! # Invariants
//!
//! - Response codes and raw state match `ModelMachine` after every step
//! - `count <= capacity` for every coin and product slot
//! - Admin mode is never entered with a non-zero balance
//! - A failed operation never changes state
//! - NEVER panic

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use vending_core::{MachineConfig, Response, VendingMachine};
use vending_harness::{ModelMachine, ObservableState, Operation, apply};

/// Fuzz input: machine shape plus an operation sequence.
#[derive(Debug, Clone, Arbitrary)]
struct FuzzInput {
    coin_capacities: (u8, u8),
    product_capacities: (u8, u8),
    coin2_value: u64,
    prices: (u8, u8),
    admin_code: u64,
    ops: Vec<Operation>,
}

impl FuzzInput {
    fn config(&self) -> MachineConfig {
        MachineConfig {
            coin2_value: self.coin2_value,
            admin_code: self.admin_code,
            ..MachineConfig::default()
        }
        .with_coin_capacities(u32::from(self.coin_capacities.0), u32::from(self.coin_capacities.1))
        .with_product_capacities(
            u32::from(self.product_capacities.0),
            u32::from(self.product_capacities.1),
        )
        .with_prices(u64::from(self.prices.0), u64::from(self.prices.1))
    }
}

fn check_invariants(config: &MachineConfig, state: &ObservableState) {
    assert!(state.coins[0] <= config.coin1_capacity, "coin1 over capacity: {state:?}");
    assert!(state.coins[1] <= config.coin2_capacity, "coin2 over capacity: {state:?}");
    assert!(state.stock[0] <= config.product1_capacity, "product1 over capacity: {state:?}");
    assert!(state.stock[1] <= config.product2_capacity, "product2 over capacity: {state:?}");
    assert!(!state.admin || state.balance == 0, "admin mode with balance: {state:?}");

    let pool = u64::from(state.coins[0]) * config.coin1_value
        + u64::from(state.coins[1]) * config.coin2_value;
    assert!(state.balance <= pool, "balance exceeds pool value: {state:?}");
}

fuzz_target!(|input: FuzzInput| {
    let config = input.config();
    let Ok(mut machine) = VendingMachine::new(config.clone()) else {
        assert!(config.validate().is_err());
        return;
    };
    let mut model = ModelMachine::new(config.clone());

    for op in &input.ops {
        let before = ObservableState::from(&machine.snapshot());
        let real = apply(&mut machine, config.admin_code, op);
        let expected = model.apply(op);
        let after = ObservableState::from(&machine.snapshot());

        assert_eq!(real, expected, "response divergence on {op:?}");
        assert_eq!(&after, model.observable_state(), "state divergence on {op:?}");
        if real != Response::Ok {
            assert_eq!(before, after, "failed {op:?} mutated state");
        }
        check_invariants(&config, &after);
    }
});
