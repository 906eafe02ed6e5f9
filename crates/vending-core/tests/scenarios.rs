//! End-to-end machine scenarios.

#![allow(clippy::unwrap_used)]

use vending_core::{
    ChangePlan, DEFAULT_ADMIN_CODE, Denomination, Mode, Product, Response, VendError,
    VendingMachine,
};

const MAX_PRODUCT1: u32 = 30;
const MAX_PRODUCT2: u32 = 40;
const MAX_COIN1: u32 = 50;
const MAX_COIN2: u32 = 50;

fn enter_admin(machine: &mut VendingMachine) {
    machine.enter_admin_mode(DEFAULT_ADMIN_CODE).unwrap();
}

/// Restock, set prices and return to operation mode.
fn prepare(machine: &mut VendingMachine, price1: u64, price2: u64) {
    enter_admin(machine);
    machine.fill_products().unwrap();
    machine.set_prices(price1, price2).unwrap();
    machine.exit_admin_mode();
}

fn insert(machine: &mut VendingMachine, denomination: Denomination, times: usize) {
    for _ in 0..times {
        machine.put_coin(denomination).unwrap();
    }
}

/// Pool counts as seen from admin mode.
fn pool(machine: &mut VendingMachine) -> (u32, u32) {
    enter_admin(machine);
    (machine.coins1(), machine.coins2())
}

#[test]
fn fresh_machine_defaults() {
    let machine = VendingMachine::default();
    assert_eq!(machine.current_mode(), Mode::Operation);
    assert_eq!(machine.coins1(), 0);
    assert_eq!(machine.coins2(), 0);
    assert_eq!(machine.number_of_product1(), 0);
    assert_eq!(machine.number_of_product2(), 0);
    assert_eq!(machine.price1(), 8);
    assert_eq!(machine.price2(), 5);
    assert_eq!(machine.current_balance(), 0);
    assert_eq!(machine.current_sum(), 0);
}

#[test]
fn admin_entry_with_wrong_code() {
    let mut machine = VendingMachine::default();
    let result = machine.enter_admin_mode(1);
    assert_eq!(Response::from_result(&result), Response::InvalidParam);
    assert_eq!(machine.current_mode(), Mode::Operation);
}

#[test]
fn admin_entry_with_unsettled_balance() {
    let mut machine = VendingMachine::default();
    machine.put_coin1().unwrap();
    machine.put_coin2().unwrap();

    let result = machine.enter_admin_mode(DEFAULT_ADMIN_CODE);
    assert_eq!(Response::from_result(&result), Response::CannotPerform);
    assert_eq!(machine.current_balance(), 3);
    assert_eq!(machine.current_mode(), Mode::Operation);
}

#[test]
fn fill_products_requires_admin_mode() {
    let mut machine = VendingMachine::default();
    assert_eq!(Response::from_result(&machine.fill_products()), Response::IllegalOperation);

    enter_admin(&mut machine);
    assert_eq!(machine.fill_products(), Ok(()));
    assert_eq!(machine.number_of_product1(), MAX_PRODUCT1);
    assert_eq!(machine.number_of_product2(), MAX_PRODUCT2);
}

#[test]
fn fill_products_twice_is_full_once() {
    let mut machine = VendingMachine::default();
    prepare(&mut machine, 1, 1);
    machine.put_coin1().unwrap();
    machine.give_product2(1).unwrap();

    enter_admin(&mut machine);
    machine.fill_products().unwrap();
    machine.fill_products().unwrap();
    assert_eq!(machine.number_of_product2(), MAX_PRODUCT2);
}

#[test]
fn put_coin_in_admin_mode_is_illegal() {
    let mut machine = VendingMachine::default();
    enter_admin(&mut machine);
    assert_eq!(Response::from_result(&machine.put_coin1()), Response::IllegalOperation);
    assert_eq!(Response::from_result(&machine.put_coin2()), Response::IllegalOperation);
}

#[test]
fn put_coin_beyond_capacity() {
    let mut machine = VendingMachine::default();
    insert(&mut machine, Denomination::Coin1, MAX_COIN1 as usize);
    insert(&mut machine, Denomination::Coin2, MAX_COIN2 as usize);

    assert_eq!(Response::from_result(&machine.put_coin1()), Response::CannotPerform);
    assert_eq!(Response::from_result(&machine.put_coin2()), Response::CannotPerform);
    assert_eq!(machine.current_balance(), u64::from(MAX_COIN1) + u64::from(MAX_COIN2) * 2);
}

#[test]
fn balance_tracks_inserted_value() {
    let mut machine = VendingMachine::default();
    machine.put_coin1().unwrap();
    machine.put_coin2().unwrap();
    assert_eq!(machine.current_balance(), 3);
    assert_eq!(machine.current_sum(), 0);
    assert_eq!(machine.coins1(), 0);
    assert_eq!(machine.coins2(), 0);
}

#[test]
fn fill_coins_bounds() {
    let mut machine = VendingMachine::default();
    assert_eq!(Response::from_result(&machine.fill_coins(1, 1)), Response::IllegalOperation);

    enter_admin(&mut machine);
    for (coin1, coin2) in [(0, 1), (1, 0), (MAX_COIN1 + 1, 1), (1, MAX_COIN2 + 1)] {
        assert_eq!(
            Response::from_result(&machine.fill_coins(coin1, coin2)),
            Response::InvalidParam,
            "fill_coins({coin1}, {coin2})"
        );
    }
    assert_eq!(machine.fill_coins(MAX_COIN1, 1), Ok(()));
    assert_eq!(machine.fill_coins(1, MAX_COIN2), Ok(()));
}

#[test]
fn admin_view_of_pool() {
    let mut machine = VendingMachine::default();
    enter_admin(&mut machine);
    assert_eq!(machine.current_sum(), 0);

    machine.fill_coins(4, 2).unwrap();
    assert_eq!(machine.current_sum(), 8);
    assert_eq!(machine.coins(Denomination::Coin1), 4);
    assert_eq!(machine.coins(Denomination::Coin2), 2);
}

#[test]
fn set_prices_bounds() {
    let mut machine = VendingMachine::default();
    assert_eq!(Response::from_result(&machine.set_prices(5, 8)), Response::IllegalOperation);

    enter_admin(&mut machine);
    assert_eq!(Response::from_result(&machine.set_prices(1, 0)), Response::InvalidParam);
    assert_eq!(Response::from_result(&machine.set_prices(0, 1)), Response::InvalidParam);
    assert_eq!(machine.set_prices(5, 8), Ok(()));
    assert_eq!(machine.price1(), 5);
    assert_eq!(machine.price2(), 8);
}

#[test]
fn purchase_quantity_bounds() {
    let mut machine = VendingMachine::default();
    let slots = [(Product::Product1, MAX_PRODUCT1), (Product::Product2, MAX_PRODUCT2)];
    for (product, capacity) in slots {
        assert_eq!(Response::from_result(&machine.purchase(product, 0)), Response::InvalidParam);
        assert_eq!(
            Response::from_result(&machine.purchase(product, capacity + 1)),
            Response::InvalidParam
        );
    }
}

#[test]
fn purchase_in_admin_mode_is_illegal() {
    let mut machine = VendingMachine::default();
    enter_admin(&mut machine);
    assert_eq!(Response::from_result(&machine.give_product1(1)), Response::IllegalOperation);
    assert_eq!(Response::from_result(&machine.give_product2(1)), Response::IllegalOperation);
}

#[test]
fn buy_full_slot_with_unit_coins() {
    let mut machine = VendingMachine::default();
    prepare(&mut machine, 1, 1);
    insert(&mut machine, Denomination::Coin1, MAX_PRODUCT1 as usize);

    assert!(machine.give_product1(MAX_PRODUCT1).is_ok());
    assert_eq!(machine.current_balance(), 0);
    assert_eq!(machine.number_of_product1(), 0);
}

#[test]
fn buy_more_than_remaining_stock() {
    let mut machine = VendingMachine::default();
    prepare(&mut machine, 1, 1);
    for _ in 0..MAX_PRODUCT2 {
        machine.put_coin1().unwrap();
        machine.put_coin2().unwrap();
    }

    machine.give_product2(MAX_PRODUCT2 - 1).unwrap();
    assert_eq!(
        Response::from_result(&machine.give_product2(2)),
        Response::InsufficientProduct
    );
}

#[test]
fn change_uses_high_denomination_first() {
    let mut machine = VendingMachine::default();
    enter_admin(&mut machine);
    machine.fill_products().unwrap();
    machine.set_prices(4, 1).unwrap();
    machine.fill_coins(4, 2).unwrap();
    machine.exit_admin_mode();
    insert(&mut machine, Denomination::Coin1, 8);
    assert_eq!(machine.current_balance(), 8);

    let sale = machine.give_product1(1).unwrap();
    assert_eq!(sale.change, ChangePlan { coin1: 0, coin2: 2 });
    assert_eq!(machine.current_balance(), 0);
    assert_eq!(pool(&mut machine), (12, 0));
}

#[test]
fn change_falls_back_to_unit_coins() {
    let mut machine = VendingMachine::default();
    enter_admin(&mut machine);
    machine.fill_products().unwrap();
    machine.set_prices(4, 1).unwrap();
    machine.fill_coins(4, 1).unwrap();
    machine.exit_admin_mode();
    insert(&mut machine, Denomination::Coin1, 8);

    machine.give_product1(1).unwrap();
    assert_eq!(pool(&mut machine), (10, 0));
}

#[test]
fn change_leaves_surplus_high_coins() {
    let mut machine = VendingMachine::default();
    enter_admin(&mut machine);
    machine.fill_products().unwrap();
    machine.set_prices(4, 1).unwrap();
    machine.fill_coins(4, 3).unwrap();
    machine.exit_admin_mode();
    insert(&mut machine, Denomination::Coin1, 8);

    machine.give_product1(1).unwrap();
    assert_eq!(pool(&mut machine), (12, 1));
}

#[test]
fn change_from_high_coins_only() {
    let mut machine = VendingMachine::default();
    prepare(&mut machine, 8, 1);
    insert(&mut machine, Denomination::Coin2, 5);

    machine.give_product1(1).unwrap();
    assert_eq!(machine.number_of_product1(), MAX_PRODUCT1 - 1);
    assert_eq!(pool(&mut machine), (0, 4));
}

#[test]
fn odd_change_without_unit_coins_is_refused() {
    let mut machine = VendingMachine::default();
    prepare(&mut machine, 11, 1);
    insert(&mut machine, Denomination::Coin2, 6);

    let result = machine.give_product1(1);
    assert_eq!(result, Err(VendError::UnsuitableChange { change: 1 }));
    assert_eq!(machine.current_balance(), 12);
    assert_eq!(machine.number_of_product1(), MAX_PRODUCT1);

    // Balance survives the refusal and is still refundable in coin2.
    assert_eq!(machine.return_money(), Ok(ChangePlan { coin1: 0, coin2: 6 }));
    assert_eq!(pool(&mut machine), (0, 0));
}

#[test]
fn exact_payment_product2_mixed_coins() {
    let mut machine = VendingMachine::default();
    prepare(&mut machine, 1, 5);
    for _ in 0..2 {
        machine.put_coin2().unwrap();
        machine.put_coin1().unwrap();
    }

    machine.give_product2(1).unwrap();
    assert_eq!(machine.current_balance(), 0);
    assert_eq!(machine.number_of_product2(), MAX_PRODUCT2 - 1);
    assert_eq!(pool(&mut machine), (1, 2));
}

#[test]
fn insufficient_money() {
    let mut machine = VendingMachine::default();
    prepare(&mut machine, 10, 10);
    insert(&mut machine, Denomination::Coin1, 5);
    machine.put_coin2().unwrap();

    assert_eq!(
        machine.give_product1(1),
        Err(VendError::InsufficientMoney { cost: 10, balance: 7 })
    );
    assert_eq!(Response::from_result(&machine.give_product2(1)), Response::InsufficientMoney);
    assert_eq!(machine.current_balance(), 7);
}

#[test]
fn return_money_after_sale_settled_balance() {
    let mut machine = VendingMachine::default();
    prepare(&mut machine, 1, 10);
    machine.put_coin1().unwrap();
    machine.give_product1(1).unwrap();

    assert_eq!(machine.return_money(), Ok(ChangePlan::NONE));
    assert_eq!(machine.current_balance(), 0);
}

#[test]
fn return_money_uses_inserted_coins() {
    let mut machine = VendingMachine::default();
    machine.put_coin2().unwrap();
    insert(&mut machine, Denomination::Coin1, 4);

    assert_eq!(machine.return_money(), Ok(ChangePlan { coin1: 4, coin2: 1 }));
    assert_eq!(machine.current_balance(), 0);
    assert_eq!(pool(&mut machine), (0, 0));
}

#[test]
fn return_money_prefers_reserve_high_coins() {
    let mut machine = VendingMachine::default();
    enter_admin(&mut machine);
    machine.fill_coins(1, 2).unwrap();
    machine.exit_admin_mode();
    machine.put_coin2().unwrap();
    insert(&mut machine, Denomination::Coin1, 3);

    machine.return_money().unwrap();
    assert_eq!(pool(&mut machine), (3, 1));
}

#[test]
fn return_money_odd_balance() {
    let mut machine = VendingMachine::default();
    machine.put_coin1().unwrap();
    insert(&mut machine, Denomination::Coin2, 3);

    assert_eq!(machine.return_money(), Ok(ChangePlan { coin1: 1, coin2: 3 }));
    assert_eq!(machine.snapshot().coin1, 0);
    assert_eq!(machine.snapshot().coin2, 0);
}

#[test]
fn return_money_in_admin_mode_is_illegal() {
    let mut machine = VendingMachine::default();
    enter_admin(&mut machine);
    assert_eq!(Response::from_result(&machine.return_money()), Response::IllegalOperation);
}
