//! Model-based testing harness for the vending machine.
//!
//! # Model-Based Testing
//!
//! The `model` module provides a reference implementation that is simple
//! enough to be obviously correct. Operations are applied to both the model
//! and a real [`VendingMachine`](vending_core::VendingMachine), and their
//! response codes and observable states are compared.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod driver;
pub mod model;

pub use driver::apply;
pub use model::{
    ModelCoin, ModelMachine, ModelProduct, ObservableState, Operation, bounded_change,
};
pub use vending_core::Response;
