#![cfg(test)]

use crate::{storage, FundMeContract};
use mock_native_asset::{MockNativeAsset, MockNativeAssetClient};
use mock_price_feed::{MockPriceFeed, MockPriceFeedClient};
use sep_41_token::{
    testutils::{MockTokenClient, MockTokenWASM},
    TokenClient,
};
use soroban_sdk::{
    testutils::Address as _, token::StellarAssetClient, Address, Env, IntoVal,
};

pub(crate) fn create_fund_me(e: &Env) -> Address {
    e.register_contract(None, FundMeContract {})
}

/// Set up the ledger's configuration directly in storage
pub(crate) fn setup_fund_me(
    e: &Env,
    fund_me: &Address,
    owner: &Address,
    price_feed: &Address,
    native_asset: &Address,
) {
    let asset_decimals = TokenClient::new(e, native_asset).decimals();
    e.as_contract(fund_me, || {
        storage::set_owner(e, owner);
        storage::set_price_feed(e, price_feed);
        storage::set_native_asset(e, native_asset);
        storage::set_asset_decimals(e, &asset_decimals);
    });
}

//************************************************
//           External Contract Helpers
//************************************************

// ***** Token *****

pub(crate) fn create_native_asset<'a>(
    e: &Env,
    admin: &Address,
) -> (Address, StellarAssetClient<'a>) {
    let contract_address = e.register_stellar_asset_contract(admin.clone());
    (
        contract_address.clone(),
        StellarAssetClient::new(e, &contract_address),
    )
}

pub(crate) fn create_mock_native_asset<'a>(e: &Env) -> (Address, MockNativeAssetClient<'a>) {
    let contract_address = e.register_contract(None, MockNativeAsset {});
    (
        contract_address.clone(),
        MockNativeAssetClient::new(e, &contract_address),
    )
}

pub(crate) fn create_token<'a>(
    e: &Env,
    admin: &Address,
    decimals: u32,
) -> (Address, MockTokenClient<'a>) {
    let contract_address = Address::generate(e);
    e.register_contract_wasm(&contract_address, MockTokenWASM);
    let client = MockTokenClient::new(e, &contract_address);
    client.initialize(admin, &decimals, &"unit".into_val(e), &"test".into_val(e));
    (contract_address, client)
}

//***** Oracle ******

pub(crate) fn create_mock_price_feed<'a>(e: &Env) -> (Address, MockPriceFeedClient<'a>) {
    let contract_address = e.register_contract(None, MockPriceFeed {});
    (
        contract_address.clone(),
        MockPriceFeedClient::new(e, &contract_address),
    )
}
