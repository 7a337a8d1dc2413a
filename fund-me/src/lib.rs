#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod constants;
mod contract;
mod errors;
mod ledger;
mod price_converter;
mod storage;
mod testutils;

pub use contract::*;
pub use errors::FundMeError;
pub use price_converter::Rate;
pub use storage::FundMeDataKey;
