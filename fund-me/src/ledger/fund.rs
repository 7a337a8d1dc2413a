use crate::{contract::require_nonnegative, errors::FundMeError, price_converter, storage};
use sep_41_token::TokenClient;
use soroban_sdk::{panic_with_error, Address, Env};

/// Perform a contribution to the ledger
///
/// Returns the cumulative amount funded by `funder`
///
/// ### Panics
/// If the amount is worth less than the minimum contribution, or if the rate cannot be loaded
pub fn execute_fund(e: &Env, funder: &Address, amount: i128) -> i128 {
    require_nonnegative(e, amount);

    let native_asset = storage::get_native_asset(e);
    let rate = price_converter::current_rate(e, &storage::get_price_feed(e), &native_asset);
    let value =
        price_converter::to_reference_value(e, amount, &rate, storage::get_asset_decimals(e));
    if value < price_converter::minimum_reference_value(e, &rate) {
        panic_with_error!(e, FundMeError::InsufficientContribution);
    }

    TokenClient::new(e, &native_asset).transfer(funder, &e.current_contract_address(), &amount);

    let total_funded = storage::get_amount_funded(e, funder) + amount;
    storage::set_amount_funded(e, funder, &total_funded);
    storage::push_funder(e, funder);

    total_funded
}
