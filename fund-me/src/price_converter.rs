use sep_40_oracle::{Asset, PriceFeedClient};
use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{contracttype, panic_with_error, Address, Env};

use crate::{
    constants::{MAX_PRICE_AGE, MINIMUM_USD},
    errors::FundMeError,
};

/// The exchange rate of the native asset against the price feed's base asset
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Rate {
    pub price: i128,   // base asset units per native asset unit, expressed in `decimals`
    pub decimals: u32, // the decimals of the price feed
}

/// Load the current rate for `asset` from the price feed
///
/// ### Arguments
/// * `price_feed` - The address of the SEP-40 price feed
/// * `asset` - The address of the asset to price
///
/// ### Panics
/// If the price feed cannot be reached or has no price for the asset, if the
/// price is not positive, or if the price is stale
pub fn current_rate(e: &Env, price_feed: &Address, asset: &Address) -> Rate {
    let oracle_client = PriceFeedClient::new(e, price_feed);
    let decimals = match oracle_client.try_decimals() {
        Ok(Ok(decimals)) => decimals,
        _ => panic_with_error!(e, FundMeError::PriceFeedUnavailable),
    };
    let price_data = match oracle_client.try_lastprice(&Asset::Stellar(asset.clone())) {
        Ok(Ok(Some(price_data))) => price_data,
        _ => panic_with_error!(e, FundMeError::PriceFeedUnavailable),
    };
    if price_data.price <= 0 {
        panic_with_error!(e, FundMeError::InvalidPrice);
    }
    if price_data.timestamp + MAX_PRICE_AGE < e.ledger().timestamp() {
        panic_with_error!(e, FundMeError::StalePrice);
    }
    Rate {
        price: price_data.price,
        decimals,
    }
}

/// Convert an amount of the native asset into the price feed's base asset, expressed
/// in the decimals of the price feed. Rounds down.
///
/// ### Arguments
/// * `amount` - The amount of the native asset
/// * `rate` - The current rate of the native asset
/// * `asset_decimals` - The decimals of the native asset
pub fn to_reference_value(e: &Env, amount: i128, rate: &Rate, asset_decimals: u32) -> i128 {
    let asset_scalar = scalar(e, asset_decimals);
    match amount.fixed_mul_floor(rate.price, asset_scalar) {
        Some(value) => value,
        None => panic_with_error!(e, FundMeError::InternalError),
    }
}

/// The minimum contribution in the price feed's base asset, expressed in the decimals
/// of the price feed
///
/// ### Arguments
/// * `rate` - The current rate of the native asset
pub fn minimum_reference_value(e: &Env, rate: &Rate) -> i128 {
    match MINIMUM_USD.checked_mul(scalar(e, rate.decimals)) {
        Some(minimum) => minimum,
        None => panic_with_error!(e, FundMeError::InternalError),
    }
}

fn scalar(e: &Env, decimals: u32) -> i128 {
    match 10i128.checked_pow(decimals) {
        Some(scalar) => scalar,
        None => panic_with_error!(e, FundMeError::InternalError),
    }
}
