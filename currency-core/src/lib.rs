//! Core library for the `currency` CLI.
//!
//! This crate defines:
//! - Configuration handling (rates endpoint, request timeout)
//! - Fetching and validating the daily rate table
//! - Input classification, currency selection and conversion
//!
//! It is used by `currency-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod convert;
pub mod fetch;
pub mod input;
pub mod model;
pub mod select;

pub use config::Config;
pub use convert::{Conversion, ConvertError, convert};
pub use fetch::{FetchError, RateFetcher, RateSource, parse_rate_table};
pub use input::{Input, classify};
pub use model::{RateEntry, RateTable};
pub use select::{menu_lines, resolve_choice};
