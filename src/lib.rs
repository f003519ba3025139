//! primelens: number-theoretic properties of one positive integer.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod logging;
pub mod render;
pub mod shell;
