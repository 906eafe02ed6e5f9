//! Reference machine.

use vending_core::{MachineConfig, MachineSnapshot, Mode, Response};

use super::{
    change::bounded_change,
    operation::{ModelCoin, ModelProduct, Operation},
};

/// Observable state for oracle comparison.
///
/// Raw counters, independent of mode masking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservableState {
    /// Whether the machine is in admin mode.
    pub admin: bool,
    /// Session balance.
    pub balance: u64,
    /// Coin pool counts (coin1, coin2).
    pub coins: [u32; 2],
    /// Product stock (product1, product2).
    pub stock: [u32; 2],
    /// Unit prices (product1, product2).
    pub prices: [u64; 2],
}

impl From<&MachineSnapshot> for ObservableState {
    fn from(snapshot: &MachineSnapshot) -> Self {
        Self {
            admin: snapshot.mode == Mode::Administrating,
            balance: snapshot.balance,
            coins: [snapshot.coin1, snapshot.coin2],
            stock: [snapshot.product1, snapshot.product2],
            prices: [snapshot.price1, snapshot.price2],
        }
    }
}

/// Reference machine - the oracle.
#[derive(Debug, Clone)]
pub struct ModelMachine {
    config: MachineConfig,
    state: ObservableState,
}

const fn coin_index(coin: ModelCoin) -> usize {
    match coin {
        ModelCoin::Coin1 => 0,
        ModelCoin::Coin2 => 1,
    }
}

const fn product_index(product: ModelProduct) -> usize {
    match product {
        ModelProduct::Product1 => 0,
        ModelProduct::Product2 => 1,
    }
}

impl ModelMachine {
    /// Fresh model built from the same constants as the real machine.
    pub fn new(config: MachineConfig) -> Self {
        let state = ObservableState {
            admin: false,
            balance: 0,
            coins: [0, 0],
            stock: [0, 0],
            prices: [config.price1, config.price2],
        };
        Self { config, state }
    }

    /// Configuration the model was built from.
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Current observable state.
    pub fn observable_state(&self) -> &ObservableState {
        &self.state
    }

    fn coin_capacities(&self) -> [u32; 2] {
        [self.config.coin1_capacity, self.config.coin2_capacity]
    }

    fn coin_values(&self) -> [u64; 2] {
        [self.config.coin1_value, self.config.coin2_value]
    }

    fn product_capacities(&self) -> [u32; 2] {
        [self.config.product1_capacity, self.config.product2_capacity]
    }

    /// Apply an operation and return the expected response code.
    pub fn apply(&mut self, op: &Operation) -> Response {
        match *op {
            Operation::EnterAdmin { correct_code } => self.enter_admin(correct_code),
            Operation::ExitAdmin => {
                self.state.admin = false;
                Response::Ok
            },
            Operation::PutCoin { coin } => self.put_coin(coin),
            Operation::FillCoins { coin1, coin2 } => {
                self.fill_coins(u32::from(coin1), u32::from(coin2))
            },
            Operation::FillProducts => self.fill_products(),
            Operation::SetPrices { price1, price2 } => {
                self.set_prices(u64::from(price1), u64::from(price2))
            },
            Operation::Purchase { product, quantity } => {
                self.purchase(product, u32::from(quantity))
            },
            Operation::ReturnMoney => self.return_money(),
        }
    }

    fn enter_admin(&mut self, correct_code: bool) -> Response {
        if !correct_code {
            return Response::InvalidParam;
        }
        if self.state.balance != 0 {
            return Response::CannotPerform;
        }
        self.state.admin = true;
        Response::Ok
    }

    fn put_coin(&mut self, coin: ModelCoin) -> Response {
        if self.state.admin {
            return Response::IllegalOperation;
        }
        let i = coin_index(coin);
        if self.state.coins[i] == self.coin_capacities()[i] {
            return Response::CannotPerform;
        }
        self.state.coins[i] += 1;
        self.state.balance += self.coin_values()[i];
        Response::Ok
    }

    fn fill_coins(&mut self, coin1: u32, coin2: u32) -> Response {
        if !self.state.admin {
            return Response::IllegalOperation;
        }
        let [cap1, cap2] = self.coin_capacities();
        if !(1..=cap1).contains(&coin1) || !(1..=cap2).contains(&coin2) {
            return Response::InvalidParam;
        }
        self.state.coins = [coin1, coin2];
        Response::Ok
    }

    fn fill_products(&mut self) -> Response {
        if !self.state.admin {
            return Response::IllegalOperation;
        }
        self.state.stock = self.product_capacities();
        Response::Ok
    }

    fn set_prices(&mut self, price1: u64, price2: u64) -> Response {
        if !self.state.admin {
            return Response::IllegalOperation;
        }
        if price1 < 1 || price2 < 1 {
            return Response::InvalidParam;
        }
        self.state.prices = [price1, price2];
        Response::Ok
    }

    fn purchase(&mut self, product: ModelProduct, quantity: u32) -> Response {
        let j = product_index(product);
        if quantity < 1 || quantity > self.product_capacities()[j] {
            return Response::InvalidParam;
        }
        if self.state.admin {
            return Response::IllegalOperation;
        }
        if quantity > self.state.stock[j] {
            return Response::InsufficientProduct;
        }
        let cost = self.state.prices[j] * u64::from(quantity);
        if self.state.balance < cost {
            return Response::InsufficientMoney;
        }
        if !self.dispense(self.state.balance - cost) {
            return Response::UnsuitableChange;
        }
        self.state.stock[j] -= quantity;
        self.state.balance = 0;
        Response::Ok
    }

    fn return_money(&mut self) -> Response {
        if self.state.admin {
            return Response::IllegalOperation;
        }
        if !self.dispense(self.state.balance) {
            return Response::UnsuitableChange;
        }
        self.state.balance = 0;
        Response::Ok
    }

    /// Remove change from the pool if it can be paid exactly.
    fn dispense(&mut self, change: u64) -> bool {
        let values = self.coin_values();
        let pool = [(values[0], self.state.coins[0]), (values[1], self.state.coins[1])];
        let Some(used) = bounded_change(change, &pool) else {
            return false;
        };
        for (held, taken) in self.state.coins.iter_mut().zip(used) {
            *held -= taken;
        }
        true
    }
}
