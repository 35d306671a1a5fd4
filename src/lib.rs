//! Inventory tracker library
//!
//! A single-table product store backed by SQLite, plus the command-line shell
//! that drives it.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod cli;
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod migrator;
pub mod services;

pub use errors::{AppError, ServiceError};
pub use services::{InventoryService, NewProduct, StockUpdate};
