//! Vending machine state machine.
//!
//! The `VendingMachine` owns every piece of state (mode, coin pool, session
//! balance, product stock, prices). Callers hold it by exclusive reference;
//! a multi-threaded host serializes access to the whole instance.
//!
//! ## Transaction pipeline
//!
//! A purchase runs pure checks first, in a fixed order:
//!
//! 1. quantity in `1..=capacity` (regardless of mode)
//! 2. machine in `Operation` mode
//! 3. enough stock
//! 4. balance covers the cost
//! 5. exact change can be planned from the live pool
//!
//! Only when all five pass does it commit: withdraw the change coins,
//! remove the stock, settle the balance. Any failure leaves the machine
//! exactly as it was.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    change::{ChangePlan, plan_change},
    coins::{CoinInventory, CoinSlot, Denomination, SessionBalance},
    config::MachineConfig,
    error::{ConfigError, VendError},
    mode::Mode,
    products::{PriceTable, Product, ProductInventory},
};

/// A committed sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    /// Product dispensed.
    pub product: Product,
    /// Units dispensed.
    pub quantity: u32,
    /// Total charged.
    pub cost: u64,
    /// Coins returned as change.
    pub change: ChangePlan,
}

/// Raw machine state, unmasked by mode.
///
/// Unlike the mode-aware getters, this exposes everything. It is meant for
/// diagnostics and test oracles, not customer-facing displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSnapshot {
    /// Current mode.
    pub mode: Mode,
    /// Session balance.
    pub balance: u64,
    /// Coin1 pieces in the pool.
    pub coin1: u32,
    /// Coin2 pieces in the pool.
    pub coin2: u32,
    /// Product1 stock.
    pub product1: u32,
    /// Product2 stock.
    pub product2: u32,
    /// Product1 price.
    pub price1: u64,
    /// Product2 price.
    pub price2: u64,
}

/// Dual-product coin-operated vending machine.
#[derive(Debug, Clone)]
pub struct VendingMachine {
    mode: Mode,
    coins: CoinInventory,
    balance: SessionBalance,
    products: ProductInventory,
    prices: PriceTable,
    admin_code: u64,
}

impl Default for VendingMachine {
    fn default() -> Self {
        Self::build(&MachineConfig::default())
    }
}

impl VendingMachine {
    /// Create a machine from a validated configuration.
    ///
    /// The machine starts in `Operation` mode with an empty coin pool, empty
    /// product slots, zero balance, and the configured default prices.
    pub fn new(config: MachineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(&config))
    }

    fn build(config: &MachineConfig) -> Self {
        Self {
            mode: Mode::Operation,
            coins: CoinInventory::new(
                CoinSlot::new(config.coin1_capacity, config.coin1_value),
                CoinSlot::new(config.coin2_capacity, config.coin2_value),
            ),
            balance: SessionBalance::default(),
            products: ProductInventory::new(config.product1_capacity, config.product2_capacity),
            prices: PriceTable::new(config.price1, config.price2),
            admin_code: config.admin_code,
        }
    }

    fn require_mode(&self, expected: Mode, operation: &'static str) -> Result<(), VendError> {
        self.mode.require(expected, operation)
    }

    // Mode controller

    /// Switch to `Administrating` mode.
    ///
    /// The credential is checked first; a customer session must then be
    /// fully settled.
    pub fn enter_admin_mode(&mut self, code: u64) -> Result<(), VendError> {
        if code != self.admin_code {
            warn!("rejected admin credential");
            return Err(VendError::InvalidCredential);
        }
        if !self.balance.is_settled() {
            return Err(VendError::UnsettledBalance { balance: self.balance.get() });
        }

        self.mode = Mode::Administrating;
        info!(mode = %self.mode, "entered admin mode");
        Ok(())
    }

    /// Switch to `Operation` mode. Always succeeds.
    pub fn exit_admin_mode(&mut self) {
        self.mode = Mode::Operation;
        info!(mode = %self.mode, "exited admin mode");
    }

    /// Current mode.
    pub fn current_mode(&self) -> Mode {
        self.mode
    }

    // Coins and balance

    /// Accept one coin from the customer.
    pub fn put_coin(&mut self, denomination: Denomination) -> Result<(), VendError> {
        self.require_mode(Mode::Operation, "put_coin")?;

        let slot = self.coins.slot(denomination);
        if slot.is_full() {
            return Err(VendError::CoinSlotFull { denomination, capacity: slot.capacity() });
        }

        let value = self.coins.deposit(denomination);
        self.balance.credit(value);
        debug!(%denomination, value, balance = self.balance.get(), "coin accepted");
        Ok(())
    }

    /// Accept one coin1.
    pub fn put_coin1(&mut self) -> Result<(), VendError> {
        self.put_coin(Denomination::Coin1)
    }

    /// Accept one coin2.
    pub fn put_coin2(&mut self) -> Result<(), VendError> {
        self.put_coin(Denomination::Coin2)
    }

    /// Session balance in `Operation` mode, 0 in `Administrating` mode.
    pub fn current_balance(&self) -> u64 {
        match self.mode {
            Mode::Operation => self.balance.get(),
            Mode::Administrating => 0,
        }
    }

    /// Value of the coin pool in `Administrating` mode, 0 in `Operation`
    /// mode.
    pub fn current_sum(&self) -> u64 {
        match self.mode {
            Mode::Operation => 0,
            Mode::Administrating => self.coins.value(),
        }
    }

    /// Pool count of a denomination in `Administrating` mode, 0 in
    /// `Operation` mode.
    pub fn coins(&self, denomination: Denomination) -> u32 {
        match self.mode {
            Mode::Operation => 0,
            Mode::Administrating => self.coins.count(denomination),
        }
    }

    /// See [`Self::coins`].
    pub fn coins1(&self) -> u32 {
        self.coins(Denomination::Coin1)
    }

    /// See [`Self::coins`].
    pub fn coins2(&self) -> u32 {
        self.coins(Denomination::Coin2)
    }

    // Admin provisioning

    /// Restock both product slots to capacity.
    pub fn fill_products(&mut self) -> Result<(), VendError> {
        self.require_mode(Mode::Administrating, "fill_products")?;

        self.products.restock_all();
        debug!(
            product1 = self.products.stock(Product::Product1),
            product2 = self.products.stock(Product::Product2),
            "products restocked"
        );
        Ok(())
    }

    /// Replace the coin pool counts.
    ///
    /// Each count must lie in `1..=capacity`. The counts replace the current
    /// pool rather than adding to it.
    pub fn fill_coins(&mut self, coin1: u32, coin2: u32) -> Result<(), VendError> {
        self.require_mode(Mode::Administrating, "fill_coins")?;

        for (denomination, count) in Denomination::ALL.into_iter().zip([coin1, coin2]) {
            let capacity = self.coins.slot(denomination).capacity();
            if count == 0 || count > capacity {
                return Err(VendError::InvalidCoinCount { denomination, count, capacity });
            }
        }

        self.coins.refill(coin1, coin2);
        debug!(coin1, coin2, "coin pool refilled");
        Ok(())
    }

    /// Set both unit prices. Each must be at least 1.
    pub fn set_prices(&mut self, price1: u64, price2: u64) -> Result<(), VendError> {
        self.require_mode(Mode::Administrating, "set_prices")?;

        for (product, price) in Product::ALL.into_iter().zip([price1, price2]) {
            if price == 0 {
                return Err(VendError::InvalidPrice { product, price });
            }
        }

        self.prices.set(price1, price2);
        debug!(price1, price2, "prices updated");
        Ok(())
    }

    /// Units of a product in stock.
    pub fn number_of_product(&self, product: Product) -> u32 {
        self.products.stock(product)
    }

    /// See [`Self::number_of_product`].
    pub fn number_of_product1(&self) -> u32 {
        self.number_of_product(Product::Product1)
    }

    /// See [`Self::number_of_product`].
    pub fn number_of_product2(&self) -> u32 {
        self.number_of_product(Product::Product2)
    }

    /// Unit price of a product.
    pub fn price(&self, product: Product) -> u64 {
        self.prices.price(product)
    }

    /// See [`Self::price`].
    pub fn price1(&self) -> u64 {
        self.price(Product::Product1)
    }

    /// See [`Self::price`].
    pub fn price2(&self) -> u64 {
        self.price(Product::Product2)
    }

    // Transaction processor

    /// Sell `quantity` units of `product` against the session balance.
    ///
    /// On success the change coins leave the pool, the stock drops by
    /// `quantity`, and the balance is settled to zero. On any error nothing
    /// changes, so the customer can retry or ask for their money back.
    pub fn purchase(&mut self, product: Product, quantity: u32) -> Result<Sale, VendError> {
        let capacity = self.products.capacity(product);
        if quantity == 0 || quantity > capacity {
            return Err(VendError::InvalidQuantity { product, quantity, capacity });
        }

        self.require_mode(Mode::Operation, "purchase")?;

        let available = self.products.stock(product);
        if quantity > available {
            return Err(VendError::InsufficientProduct { product, requested: quantity, available });
        }

        let cost = self.prices.cost(product, quantity);
        let balance = self.balance.get();
        if balance < cost {
            return Err(VendError::InsufficientMoney { cost, balance });
        }

        let change = balance - cost;
        let Some(plan) = plan_change(change, &self.coins) else {
            warn!(%product, quantity, cost, change, "cannot assemble exact change");
            return Err(VendError::UnsuitableChange { change });
        };

        self.coins.withdraw(&plan);
        self.products.take(product, quantity);
        self.balance.settle();

        debug!(
            %product,
            quantity,
            cost,
            change,
            coin1 = plan.coin1,
            coin2 = plan.coin2,
            "sale committed"
        );
        Ok(Sale { product, quantity, cost, change: plan })
    }

    /// See [`Self::purchase`].
    pub fn give_product1(&mut self, quantity: u32) -> Result<Sale, VendError> {
        self.purchase(Product::Product1, quantity)
    }

    /// See [`Self::purchase`].
    pub fn give_product2(&mut self, quantity: u32) -> Result<Sale, VendError> {
        self.purchase(Product::Product2, quantity)
    }

    /// Hand the whole session balance back as coins.
    ///
    /// A zero balance succeeds with an empty plan.
    pub fn return_money(&mut self) -> Result<ChangePlan, VendError> {
        self.require_mode(Mode::Operation, "return_money")?;

        let change = self.balance.get();
        let Some(plan) = plan_change(change, &self.coins) else {
            warn!(change, "cannot assemble exact change for refund");
            return Err(VendError::UnsuitableChange { change });
        };

        self.coins.withdraw(&plan);
        self.balance.settle();

        debug!(change, coin1 = plan.coin1, coin2 = plan.coin2, "money returned");
        Ok(plan)
    }

    /// Raw state, ignoring mode masking.
    pub fn snapshot(&self) -> MachineSnapshot {
        MachineSnapshot {
            mode: self.mode,
            balance: self.balance.get(),
            coin1: self.coins.count(Denomination::Coin1),
            coin2: self.coins.count(Denomination::Coin2),
            product1: self.products.stock(Product::Product1),
            product2: self.products.stock(Product::Product2),
            price1: self.prices.price(Product::Product1),
            price2: self.prices.price(Product::Product2),
        }
    }
}
