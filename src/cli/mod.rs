//! Command implementations behind the `algokit` binary.

pub mod commands;
