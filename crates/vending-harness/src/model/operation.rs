//! Operations for model-based testing.
//!
//! Operations represent every call a driver, UI or technician can make.
//! They are generated randomly by proptest or the fuzzer and applied to both
//! the model and the real machine.

use arbitrary::Arbitrary;
use vending_core::{Denomination, Product};

/// Coin selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub enum ModelCoin {
    /// Low denomination.
    Coin1,
    /// High denomination.
    Coin2,
}

impl From<ModelCoin> for Denomination {
    fn from(coin: ModelCoin) -> Self {
        match coin {
            ModelCoin::Coin1 => Self::Coin1,
            ModelCoin::Coin2 => Self::Coin2,
        }
    }
}

/// Product selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub enum ModelProduct {
    /// First slot.
    Product1,
    /// Second slot.
    Product2,
}

impl From<ModelProduct> for Product {
    fn from(product: ModelProduct) -> Self {
        match product {
            ModelProduct::Product1 => Self::Product1,
            ModelProduct::Product2 => Self::Product2,
        }
    }
}

/// Operations that can be applied to the machine.
///
/// Arguments use small integer types so generated sequences hit both the
/// valid ranges and their edges often.
#[derive(Debug, Clone, PartialEq, Eq, Arbitrary)]
pub enum Operation {
    /// Enter admin mode with the configured or a wrong credential.
    EnterAdmin {
        /// Use the configured credential.
        correct_code: bool,
    },

    /// Return to operation mode.
    ExitAdmin,

    /// Insert one coin.
    PutCoin {
        /// Coin inserted.
        coin: ModelCoin,
    },

    /// Replace the coin pool.
    FillCoins {
        /// Coin1 count.
        coin1: u8,
        /// Coin2 count.
        coin2: u8,
    },

    /// Restock every product slot.
    FillProducts,

    /// Change both prices.
    SetPrices {
        /// Product1 price.
        price1: u8,
        /// Product2 price.
        price2: u8,
    },

    /// Buy units of a product.
    Purchase {
        /// Product bought.
        product: ModelProduct,
        /// Units requested.
        quantity: u8,
    },

    /// Refund the session balance.
    ReturnMoney,
}
