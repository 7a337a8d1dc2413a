use crate::{errors::FundMeError, storage};
use sep_41_token::TokenClient;
use soroban_sdk::{panic_with_error, unwrap::UnwrapOptimized, Address, Env};

/// Withdraw the full balance of the ledger to the owner and reset every funder
///
/// Reads the stored list of funders one entry at a time, checking the stored count
/// on every step.
///
/// Returns the amount transferred to the owner
///
/// ### Panics
/// If `caller` is not the owner or if the transfer to the owner fails
pub fn execute_withdraw(e: &Env, caller: &Address) -> i128 {
    let owner = require_owner(e, caller);

    let mut index = 0;
    while index < storage::get_funder_count(e) {
        let funder = storage::get_funder(e, index).unwrap_optimized();
        storage::del_amount_funded(e, &funder);
        storage::del_funder(e, index);
        index += 1;
    }
    storage::set_funder_count(e, &0);

    transfer_balance(e, &owner)
}

/// Withdraw the full balance of the ledger to the owner and reset every funder
///
/// Loads the list of funders once and clears it in a single pass.
///
/// Returns the amount transferred to the owner
///
/// ### Panics
/// If `caller` is not the owner or if the transfer to the owner fails
pub fn execute_cheaper_withdraw(e: &Env, caller: &Address) -> i128 {
    let owner = require_owner(e, caller);

    let funders = storage::get_funders(e);
    for (index, funder) in funders.iter().enumerate() {
        storage::del_amount_funded(e, &funder);
        storage::del_funder(e, index as u32);
    }
    storage::set_funder_count(e, &0);

    transfer_balance(e, &owner)
}

fn require_owner(e: &Env, caller: &Address) -> Address {
    let owner = storage::get_owner(e);
    if *caller != owner {
        panic_with_error!(e, FundMeError::UnauthorizedError);
    }
    owner
}

/// Transfer the ledger's full holdings of the native asset to `to`
fn transfer_balance(e: &Env, to: &Address) -> i128 {
    let token_client = TokenClient::new(e, &storage::get_native_asset(e));
    let balance = match token_client.try_balance(&e.current_contract_address()) {
        Ok(Ok(balance)) => balance,
        _ => panic_with_error!(e, FundMeError::TransferFailed),
    };
    if balance > 0 {
        match token_client.try_transfer(&e.current_contract_address(), to, &balance) {
            Ok(Ok(())) => {}
            _ => panic_with_error!(e, FundMeError::TransferFailed),
        }
    }
    balance
}
