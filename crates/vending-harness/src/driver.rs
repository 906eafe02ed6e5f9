//! Drives a real machine with harness operations.

use vending_core::{Response, VendingMachine};

use crate::model::Operation;

/// Apply an operation to a real machine and collapse the outcome to a
/// response code.
///
/// `admin_code` is the credential the machine was configured with;
/// `EnterAdmin { correct_code: false }` sends a different value.
pub fn apply(machine: &mut VendingMachine, admin_code: u64, op: &Operation) -> Response {
    match *op {
        Operation::EnterAdmin { correct_code } => {
            let code = if correct_code { admin_code } else { admin_code.wrapping_add(1) };
            Response::from_result(&machine.enter_admin_mode(code))
        },
        Operation::ExitAdmin => {
            machine.exit_admin_mode();
            Response::Ok
        },
        Operation::PutCoin { coin } => Response::from_result(&machine.put_coin(coin.into())),
        Operation::FillCoins { coin1, coin2 } => {
            Response::from_result(&machine.fill_coins(u32::from(coin1), u32::from(coin2)))
        },
        Operation::FillProducts => Response::from_result(&machine.fill_products()),
        Operation::SetPrices { price1, price2 } => {
            Response::from_result(&machine.set_prices(u64::from(price1), u64::from(price2)))
        },
        Operation::Purchase { product, quantity } => {
            Response::from_result(&machine.purchase(product.into(), u32::from(quantity)))
        },
        Operation::ReturnMoney => Response::from_result(&machine.return_money()),
    }
}
