#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod mock_price_feed;

pub use crate::mock_price_feed::{
    MockPriceFeed, MockPriceFeedClient, MockPriceFeedDataKey, MockPriceFeedError,
};
