//! Command implementations for pem-chain-order

pub mod order;

pub use order::run_order;
