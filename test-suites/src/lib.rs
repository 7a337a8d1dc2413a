#![no_std]

extern crate std;

pub mod price_feed;
pub mod test_fixture;
pub mod token;
