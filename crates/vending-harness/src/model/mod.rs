//! Reference model for model-based testing.
//!
//! The model captures the observable behavior of the machine with plain
//! integers and an exhaustive change search, independent of the real
//! implementation's types and greedy algorithm. It is the oracle the real
//! machine is verified against.
//!
//! # Design Principles
//!
//! - Simplicity: The model should be obviously correct
//! - Independence: No code shared with the real transaction path
//! - Deterministic: Same inputs produce same outputs

mod change;
mod machine;
pub mod operation;

pub use change::bounded_change;
pub use machine::{ModelMachine, ObservableState};
pub use operation::{ModelCoin, ModelProduct, Operation};
