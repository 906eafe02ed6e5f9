//! Product inventory and price table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Product type sold by the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Product {
    /// First product slot.
    Product1,
    /// Second product slot.
    Product2,
}

impl Product {
    /// Both products, in slot order.
    pub const ALL: [Self; 2] = [Self::Product1, Self::Product2];
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Product1 => f.write_str("product1"),
            Self::Product2 => f.write_str("product2"),
        }
    }
}

/// Two-slot product stock.
///
/// Stock only changes by a full restock or by a committed sale, so
/// `stock <= capacity` holds for both slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductInventory {
    stock: [u32; 2],
    capacity: [u32; 2],
}

const fn index(product: Product) -> usize {
    match product {
        Product::Product1 => 0,
        Product::Product2 => 1,
    }
}

impl ProductInventory {
    /// Empty inventory with the given capacities.
    pub fn new(capacity1: u32, capacity2: u32) -> Self {
        Self { stock: [0, 0], capacity: [capacity1, capacity2] }
    }

    /// Units in stock.
    pub fn stock(&self, product: Product) -> u32 {
        self.stock[index(product)]
    }

    /// Slot capacity.
    pub fn capacity(&self, product: Product) -> u32 {
        self.capacity[index(product)]
    }

    /// Fill every slot to capacity. Not additive.
    pub(crate) fn restock_all(&mut self) {
        self.stock = self.capacity;
    }

    /// Remove units of a product. Caller must have checked stock.
    pub(crate) fn take(&mut self, product: Product, quantity: u32) {
        let slot = &mut self.stock[index(product)];
        debug_assert!(quantity <= *slot);
        *slot -= quantity;
    }
}

/// Unit prices, mutable only in admin mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceTable {
    prices: [u64; 2],
}

impl PriceTable {
    /// Price table with the given unit prices.
    pub fn new(price1: u64, price2: u64) -> Self {
        Self { prices: [price1, price2] }
    }

    /// Unit price of a product.
    pub fn price(&self, product: Product) -> u64 {
        self.prices[index(product)]
    }

    /// Cost of `quantity` units. Saturates instead of wrapping, which can
    /// never be covered by a real balance.
    pub fn cost(&self, product: Product, quantity: u32) -> u64 {
        self.price(product).saturating_mul(u64::from(quantity))
    }

    pub(crate) fn set(&mut self, price1: u64, price2: u64) {
        self.prices = [price1, price2];
    }
}
