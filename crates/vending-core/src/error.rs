//! Machine error types.
//!
//! Every fallible operation returns `Result<T, VendError>`. An `Err` is
//! always a no-op on machine state: the operation either commits in full or
//! not at all.

use thiserror::Error;

use crate::{coins::Denomination, mode::Mode, products::Product};

/// Flat result codes exposed to hardware drivers and UI layers.
///
/// This is the lossy view of [`VendError`] for callers that only need to
/// render a status, not its context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Response {
    /// Operation succeeded and state was mutated.
    Ok,
    /// Argument outside its valid domain.
    InvalidParam,
    /// Operation not permitted in the current mode.
    IllegalOperation,
    /// Blocked by a resource or state precondition.
    CannotPerform,
    /// Requested quantity exceeds available stock.
    InsufficientProduct,
    /// Inserted value below the required cost.
    InsufficientMoney,
    /// Exact change cannot be assembled from the coin pool.
    UnsuitableChange,
}

impl Response {
    /// Collapse an operation result into its response code.
    pub fn from_result<T>(result: &Result<T, VendError>) -> Self {
        match result {
            Ok(_) => Self::Ok,
            Err(e) => e.response(),
        }
    }
}

/// Errors from machine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VendError {
    /// Admin credential did not match.
    #[error("invalid admin credential")]
    InvalidCredential,

    /// Product quantity outside `[1, capacity]`.
    #[error("invalid quantity {quantity} for {product}: must be in 1..={capacity}")]
    InvalidQuantity {
        /// Product requested.
        product: Product,
        /// Quantity requested.
        quantity: u32,
        /// Slot capacity of the product.
        capacity: u32,
    },

    /// Coin refill count outside `[1, capacity]`.
    #[error("invalid refill count {count} for {denomination}: must be in 1..={capacity}")]
    InvalidCoinCount {
        /// Denomination being refilled.
        denomination: Denomination,
        /// Requested count.
        count: u32,
        /// Slot capacity of the denomination.
        capacity: u32,
    },

    /// Price below one unit.
    #[error("invalid price {price} for {product}: must be at least 1")]
    InvalidPrice {
        /// Product being priced.
        product: Product,
        /// Rejected price.
        price: u64,
    },

    /// Operation is not legal in the current mode.
    #[error("{operation} is not permitted in {mode} mode")]
    IllegalOperation {
        /// Name of the rejected operation.
        operation: &'static str,
        /// Mode the machine was in.
        mode: Mode,
    },

    /// Coin slot is already at capacity.
    #[error("{denomination} slot is full ({capacity} coins)")]
    CoinSlotFull {
        /// Denomination that was rejected.
        denomination: Denomination,
        /// Slot capacity.
        capacity: u32,
    },

    /// Admin mode requested while a customer session holds money.
    #[error("session balance {balance} must be settled before administration")]
    UnsettledBalance {
        /// Outstanding session balance.
        balance: u64,
    },

    /// Not enough stock for the requested quantity.
    #[error("insufficient {product}: requested {requested}, available {available}")]
    InsufficientProduct {
        /// Product requested.
        product: Product,
        /// Quantity requested.
        requested: u32,
        /// Quantity in stock.
        available: u32,
    },

    /// Session balance does not cover the cost.
    #[error("insufficient money: cost {cost}, balance {balance}")]
    InsufficientMoney {
        /// Total cost of the purchase.
        cost: u64,
        /// Current session balance.
        balance: u64,
    },

    /// Exact change cannot be assembled from the pool.
    #[error("cannot dispense exact change of {change}")]
    UnsuitableChange {
        /// Change amount that could not be assembled.
        change: u64,
    },
}

impl VendError {
    /// Response code for this error.
    pub fn response(&self) -> Response {
        match self {
            Self::InvalidCredential
            | Self::InvalidQuantity { .. }
            | Self::InvalidCoinCount { .. }
            | Self::InvalidPrice { .. } => Response::InvalidParam,
            Self::IllegalOperation { .. } => Response::IllegalOperation,
            Self::CoinSlotFull { .. } | Self::UnsettledBalance { .. } => Response::CannotPerform,
            Self::InsufficientProduct { .. } => Response::InsufficientProduct,
            Self::InsufficientMoney { .. } => Response::InsufficientMoney,
            Self::UnsuitableChange { .. } => Response::UnsuitableChange,
        }
    }

    /// Returns true if retrying the same call in the same state can never
    /// succeed.
    ///
    /// Resource conditions (full slots, low stock, missing change) can be
    /// cleared by later transactions or an administrator and are not caller
    /// errors.
    pub fn is_caller_error(&self) -> bool {
        matches!(self.response(), Response::InvalidParam | Response::IllegalOperation)
    }
}

/// Errors from constructing a machine with an invalid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The low denomination must be worth exactly one unit.
    #[error("coin1 unit value must be 1, got {0}")]
    UnitCoinRequired(u64),

    /// The high denomination must be worth more than the low one.
    #[error("coin2 unit value {high} must exceed coin1 unit value {low}")]
    DenominationOrder {
        /// Value of coin1.
        low: u64,
        /// Value of coin2.
        high: u64,
    },

    /// A slot was configured with zero capacity.
    #[error("{slot} capacity must be non-zero")]
    ZeroCapacity {
        /// Name of the offending slot.
        slot: &'static str,
    },

    /// A default price was configured below one unit.
    #[error("default price for {0} must be at least 1")]
    ZeroPrice(Product),

    /// A completely full coin pool would be worth more than `u64::MAX`.
    #[error("full coin pool overflows: {coin2_capacity} coin2 worth {coin2_value} each")]
    PoolValueOverflow {
        /// Coin2 slot capacity.
        coin2_capacity: u32,
        /// Value of coin2.
        coin2_value: u64,
    },
}
