use crate::{errors::FundMeError, storage};
use sep_41_token::TokenClient;
use soroban_sdk::{panic_with_error, Address, Env};

/// Initialize the ledger
///
/// ### Panics
/// If the ledger has already been initialized
pub fn execute_initialize(e: &Env, owner: &Address, price_feed: &Address, native_asset: &Address) {
    if storage::has_owner(e) {
        panic_with_error!(e, FundMeError::AlreadyInitializedError);
    }

    let asset_decimals = TokenClient::new(e, native_asset).decimals();

    storage::set_owner(e, owner);
    storage::set_price_feed(e, price_feed);
    storage::set_native_asset(e, native_asset);
    storage::set_asset_decimals(e, &asset_decimals);
}
