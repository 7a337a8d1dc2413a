use crate::{
    constants::MINIMUM_USD,
    errors::FundMeError,
    ledger,
    price_converter::{self, Rate},
    storage,
};
use sep_41_token::TokenClient;
use soroban_sdk::{
    contract, contractclient, contractimpl, panic_with_error, Address, Env, Symbol,
};

/// ### FundMe
///
/// Accepts contributions of the native asset worth at least a minimum amount of the price
/// feed's base asset, and lets the owner withdraw everything that was contributed.
#[contract]
pub struct FundMeContract;

#[contractclient(name = "FundMeClient")]
pub trait FundMe {
    /// Initialize the ledger
    ///
    /// The contract must be deployed and initialized in the same transaction, since the
    /// first caller fixes the configuration. The owner must authorize the call.
    ///
    /// ### Arguments
    /// * `owner` - The Address allowed to withdraw contributions
    /// * `price_feed` - The Address of the SEP-40 price feed used to value contributions
    /// * `native_asset` - The Address of the token contributions are made in
    ///
    /// ### Errors
    /// If initialize has already been called
    fn initialize(e: Env, owner: Address, price_feed: Address, native_asset: Address);

    /********** Core **********/

    /// Contribute `amount` of the native asset from `funder`
    ///
    /// Returns the cumulative amount funded by `funder` since the last withdrawal
    ///
    /// ### Arguments
    /// * `funder` - The Address contributing
    /// * `amount` - The amount of the native asset to contribute
    ///
    /// ### Errors
    /// If the amount is worth less than the minimum contribution, or if the price feed
    /// cannot provide a valid price
    fn fund(e: Env, funder: Address, amount: i128) -> i128;

    /// Withdraw the full balance to the owner and reset every funder
    ///
    /// Returns the amount withdrawn
    ///
    /// ### Arguments
    /// * `caller` - The Address requesting the withdrawal
    ///
    /// ### Errors
    /// If `caller` is not the owner, or if the transfer to the owner fails
    fn withdraw(e: Env, caller: Address) -> i128;

    /// Withdraw the full balance to the owner and reset every funder, reading the list of
    /// funders from storage only once
    ///
    /// Returns the amount withdrawn
    ///
    /// ### Arguments
    /// * `caller` - The Address requesting the withdrawal
    ///
    /// ### Errors
    /// If `caller` is not the owner, or if the transfer to the owner fails
    fn cheaper_withdraw(e: Env, caller: Address) -> i128;

    /********** Getters **********/

    /// Fetch the price feed
    fn get_price_feed(e: Env) -> Address;

    /// Fetch the amount funded by `funder` since the last withdrawal
    ///
    /// ### Arguments
    /// * `funder` - The Address of the funder
    fn get_address_to_amount_funded(e: Env, funder: Address) -> i128;

    /// Fetch the funder of the contribution at `index`
    ///
    /// ### Arguments
    /// * `index` - The position of the contribution
    ///
    /// ### Errors
    /// If `index` is not less than the number of contributions
    fn get_funder(e: Env, index: u32) -> Address;

    /// Fetch the number of contributions since the last withdrawal
    fn get_funder_count(e: Env) -> u32;

    /// Fetch the owner
    fn get_owner(e: Env) -> Address;

    /// Fetch the native asset
    fn get_native_asset(e: Env) -> Address;

    /// Fetch the amount of the native asset held
    fn get_balance(e: Env) -> i128;

    /// Fetch the minimum contribution in whole units of the price feed's base asset
    fn get_minimum_usd(e: Env) -> i128;

    /// Fetch the current rate of the native asset from the price feed
    ///
    /// ### Errors
    /// If the price feed cannot provide a valid price
    fn get_rate(e: Env) -> Rate;
}

/// @dev
/// The contract implementation only manages the authorization / authentication required from the caller(s), and
/// utilizes other modules to carry out contract functionality.
#[contractimpl]
impl FundMe for FundMeContract {
    fn initialize(e: Env, owner: Address, price_feed: Address, native_asset: Address) {
        storage::extend_instance(&e);
        owner.require_auth();

        ledger::execute_initialize(&e, &owner, &price_feed, &native_asset);

        e.events().publish(
            (Symbol::new(&e, "init"), owner),
            (price_feed, native_asset),
        );
    }

    /********** Core **********/

    fn fund(e: Env, funder: Address, amount: i128) -> i128 {
        storage::extend_instance(&e);
        funder.require_auth();

        let total_funded = ledger::execute_fund(&e, &funder, amount);

        e.events()
            .publish((Symbol::new(&e, "fund"), funder), amount);
        total_funded
    }

    fn withdraw(e: Env, caller: Address) -> i128 {
        storage::extend_instance(&e);
        caller.require_auth();

        let amount = ledger::execute_withdraw(&e, &caller);

        e.events()
            .publish((Symbol::new(&e, "withdraw"), caller), amount);
        amount
    }

    fn cheaper_withdraw(e: Env, caller: Address) -> i128 {
        storage::extend_instance(&e);
        caller.require_auth();

        let amount = ledger::execute_cheaper_withdraw(&e, &caller);

        e.events()
            .publish((Symbol::new(&e, "withdraw"), caller), amount);
        amount
    }

    /********** Getters **********/

    fn get_price_feed(e: Env) -> Address {
        storage::get_price_feed(&e)
    }

    fn get_address_to_amount_funded(e: Env, funder: Address) -> i128 {
        storage::get_amount_funded(&e, &funder)
    }

    fn get_funder(e: Env, index: u32) -> Address {
        match storage::get_funder(&e, index) {
            Some(funder) => funder,
            None => panic_with_error!(&e, FundMeError::IndexOutOfRange),
        }
    }

    fn get_funder_count(e: Env) -> u32 {
        storage::get_funder_count(&e)
    }

    fn get_owner(e: Env) -> Address {
        storage::get_owner(&e)
    }

    fn get_native_asset(e: Env) -> Address {
        storage::get_native_asset(&e)
    }

    fn get_balance(e: Env) -> i128 {
        TokenClient::new(&e, &storage::get_native_asset(&e)).balance(&e.current_contract_address())
    }

    fn get_minimum_usd(_e: Env) -> i128 {
        MINIMUM_USD
    }

    fn get_rate(e: Env) -> Rate {
        price_converter::current_rate(
            &e,
            &storage::get_price_feed(&e),
            &storage::get_native_asset(&e),
        )
    }
}

/// Require that an incoming amount is not negative
///
/// ### Arguments
/// * `amount` - The amount
///
/// ### Errors
/// If the number is negative
pub fn require_nonnegative(e: &Env, amount: i128) {
    if amount.is_negative() {
        panic_with_error!(e, FundMeError::NegativeAmountError);
    }
}

#[cfg(test)]
mod tests {
    use sep_40_oracle::Asset;
    use soroban_sdk::{
        testutils::{Address as _, AuthorizedFunction, AuthorizedInvocation, Events},
        vec, Error, IntoVal, Val,
    };

    use crate::testutils;

    use super::*;

    #[test]
    fn test_fund_and_withdraw() {
        let e = Env::default();
        e.mock_all_auths();

        let bombadil = Address::generate(&e);
        let samwise = Address::generate(&e);

        let (native_asset, native_asset_client) = testutils::create_native_asset(&e, &bombadil);
        native_asset_client.mint(&samwise, &100_0000000);
        let (price_feed, price_feed_client) = testutils::create_mock_price_feed(&e);
        price_feed_client.set_data(&8);
        price_feed_client.set_price(&Asset::Stellar(native_asset.clone()), &2000_00000000);

        let fund_me = testutils::create_fund_me(&e);
        let fund_me_client = FundMeClient::new(&e, &fund_me);
        fund_me_client.initialize(&bombadil, &price_feed, &native_asset);
        assert_eq!(
            e.auths()[0],
            (
                bombadil.clone(),
                AuthorizedInvocation {
                    function: AuthorizedFunction::Contract((
                        fund_me.clone(),
                        Symbol::new(&e, "initialize"),
                        vec![
                            &e,
                            bombadil.to_val(),
                            price_feed.to_val(),
                            native_asset.to_val()
                        ]
                    )),
                    sub_invocations: std::vec![]
                }
            )
        );

        assert_eq!(fund_me_client.get_owner(), bombadil);
        assert_eq!(fund_me_client.get_price_feed(), price_feed);
        assert_eq!(fund_me_client.get_native_asset(), native_asset);
        assert_eq!(fund_me_client.get_minimum_usd(), 50);
        assert_eq!(
            fund_me_client.get_rate(),
            Rate {
                price: 2000_00000000,
                decimals: 8
            }
        );

        // fund
        let amount: i128 = 1_0000000;
        let total = fund_me_client.fund(&samwise, &amount);
        assert_eq!(total, amount);
        assert_eq!(
            e.auths()[0],
            (
                samwise.clone(),
                AuthorizedInvocation {
                    function: AuthorizedFunction::Contract((
                        fund_me.clone(),
                        Symbol::new(&e, "fund"),
                        vec![&e, samwise.to_val(), amount.into_val(&e)]
                    )),
                    sub_invocations: std::vec![AuthorizedInvocation {
                        function: AuthorizedFunction::Contract((
                            native_asset.clone(),
                            Symbol::new(&e, "transfer"),
                            vec![
                                &e,
                                samwise.to_val(),
                                fund_me.to_val(),
                                amount.into_val(&e)
                            ]
                        )),
                        sub_invocations: std::vec![]
                    }]
                }
            )
        );
        let event = vec![&e, e.events().all().last_unchecked()];
        let event_data: Val = amount.into_val(&e);
        assert_eq!(
            event,
            vec![
                &e,
                (
                    fund_me.clone(),
                    (Symbol::new(&e, "fund"), samwise.clone()).into_val(&e),
                    event_data
                )
            ]
        );
        assert_eq!(fund_me_client.get_address_to_amount_funded(&samwise), amount);
        assert_eq!(fund_me_client.get_funder(&0), samwise);
        assert_eq!(fund_me_client.get_funder_count(), 1);
        assert_eq!(fund_me_client.get_balance(), amount);

        // withdraw
        let withdrawn = fund_me_client.withdraw(&bombadil);
        assert_eq!(withdrawn, amount);
        let event = vec![&e, e.events().all().last_unchecked()];
        let event_data: Val = amount.into_val(&e);
        assert_eq!(
            event,
            vec![
                &e,
                (
                    fund_me.clone(),
                    (Symbol::new(&e, "withdraw"), bombadil.clone()).into_val(&e),
                    event_data
                )
            ]
        );
        assert_eq!(fund_me_client.get_address_to_amount_funded(&samwise), 0);
        assert_eq!(fund_me_client.get_funder_count(), 0);
        assert_eq!(fund_me_client.get_balance(), 0);
        assert_eq!(
            TokenClient::new(&e, &native_asset).balance(&bombadil),
            amount
        );
    }

    #[test]
    fn test_initialize_twice() {
        let e = Env::default();
        e.mock_all_auths();

        let bombadil = Address::generate(&e);
        let sauron = Address::generate(&e);
        let (native_asset, _) = testutils::create_native_asset(&e, &bombadil);
        let (price_feed, _) = testutils::create_mock_price_feed(&e);

        let fund_me = testutils::create_fund_me(&e);
        let fund_me_client = FundMeClient::new(&e, &fund_me);
        fund_me_client.initialize(&bombadil, &price_feed, &native_asset);

        let result = fund_me_client.try_initialize(&sauron, &price_feed, &native_asset);
        assert_eq!(
            result.err(),
            Some(Ok(Error::from_contract_error(
                FundMeError::AlreadyInitializedError as u32
            )))
        );
        assert_eq!(fund_me_client.get_owner(), bombadil);
    }

    #[test]
    fn test_fund_below_minimum_leaves_state() {
        let e = Env::default();
        e.mock_all_auths();

        let bombadil = Address::generate(&e);
        let samwise = Address::generate(&e);

        let (native_asset, native_asset_client) = testutils::create_native_asset(&e, &bombadil);
        native_asset_client.mint(&samwise, &100_0000000);
        let (price_feed, price_feed_client) = testutils::create_mock_price_feed(&e);
        price_feed_client.set_data(&8);
        price_feed_client.set_price(&Asset::Stellar(native_asset.clone()), &2000_00000000);

        let fund_me = testutils::create_fund_me(&e);
        let fund_me_client = FundMeClient::new(&e, &fund_me);
        fund_me_client.initialize(&bombadil, &price_feed, &native_asset);
        fund_me_client.fund(&samwise, &1_0000000);

        let result = fund_me_client.try_fund(&samwise, &0_0100000);
        assert_eq!(
            result.err(),
            Some(Ok(Error::from_contract_error(
                FundMeError::InsufficientContribution as u32
            )))
        );
        assert_eq!(fund_me_client.get_address_to_amount_funded(&samwise), 1_0000000);
        assert_eq!(fund_me_client.get_funder_count(), 1);
        assert_eq!(fund_me_client.get_balance(), 1_0000000);
        assert_eq!(
            TokenClient::new(&e, &native_asset).balance(&samwise),
            99_0000000
        );
    }

    #[test]
    fn test_withdraw_not_owner_leaves_state() {
        let e = Env::default();
        e.mock_all_auths();

        let bombadil = Address::generate(&e);
        let samwise = Address::generate(&e);
        let sauron = Address::generate(&e);

        let (native_asset, native_asset_client) = testutils::create_native_asset(&e, &bombadil);
        native_asset_client.mint(&samwise, &100_0000000);
        let (price_feed, price_feed_client) = testutils::create_mock_price_feed(&e);
        price_feed_client.set_data(&8);
        price_feed_client.set_price(&Asset::Stellar(native_asset.clone()), &2000_00000000);

        let fund_me = testutils::create_fund_me(&e);
        let fund_me_client = FundMeClient::new(&e, &fund_me);
        fund_me_client.initialize(&bombadil, &price_feed, &native_asset);
        fund_me_client.fund(&samwise, &1_0000000);

        let result = fund_me_client.try_withdraw(&sauron);
        assert_eq!(
            result.err(),
            Some(Ok(Error::from_contract_error(
                FundMeError::UnauthorizedError as u32
            )))
        );
        let result = fund_me_client.try_cheaper_withdraw(&sauron);
        assert_eq!(
            result.err(),
            Some(Ok(Error::from_contract_error(
                FundMeError::UnauthorizedError as u32
            )))
        );
        assert_eq!(fund_me_client.get_address_to_amount_funded(&samwise), 1_0000000);
        assert_eq!(fund_me_client.get_funder(&0), samwise);
        assert_eq!(fund_me_client.get_balance(), 1_0000000);
    }

    #[test]
    fn test_withdraw_transfer_failed_leaves_state() {
        let e = Env::default();
        e.mock_all_auths();

        let bombadil = Address::generate(&e);
        let samwise = Address::generate(&e);
        let frodo = Address::generate(&e);

        let (native_asset, native_asset_client) = testutils::create_mock_native_asset(&e);
        native_asset_client.mint(&samwise, &100_0000000);
        native_asset_client.mint(&frodo, &100_0000000);
        let (price_feed, price_feed_client) = testutils::create_mock_price_feed(&e);
        price_feed_client.set_data(&8);
        price_feed_client.set_price(&Asset::Stellar(native_asset.clone()), &2000_00000000);

        let fund_me = testutils::create_fund_me(&e);
        let fund_me_client = FundMeClient::new(&e, &fund_me);
        fund_me_client.initialize(&bombadil, &price_feed, &native_asset);
        fund_me_client.fund(&samwise, &1_0000000);
        fund_me_client.fund(&frodo, &2_0000000);

        native_asset_client.set_rejecting(&bombadil, &true);
        let result = fund_me_client.try_withdraw(&bombadil);
        assert_eq!(
            result.err(),
            Some(Ok(Error::from_contract_error(
                FundMeError::TransferFailed as u32
            )))
        );
        let result = fund_me_client.try_cheaper_withdraw(&bombadil);
        assert_eq!(
            result.err(),
            Some(Ok(Error::from_contract_error(
                FundMeError::TransferFailed as u32
            )))
        );

        assert_eq!(fund_me_client.get_address_to_amount_funded(&samwise), 1_0000000);
        assert_eq!(fund_me_client.get_address_to_amount_funded(&frodo), 2_0000000);
        assert_eq!(fund_me_client.get_funder(&0), samwise);
        assert_eq!(fund_me_client.get_funder(&1), frodo);
        assert_eq!(fund_me_client.get_balance(), 3_0000000);

        // settles once the owner accepts the transfer
        native_asset_client.set_rejecting(&bombadil, &false);
        assert_eq!(fund_me_client.cheaper_withdraw(&bombadil), 3_0000000);
        assert_eq!(native_asset_client.balance(&bombadil), 3_0000000);
    }

    #[test]
    fn test_get_funder_out_of_range() {
        let e = Env::default();
        e.mock_all_auths();

        let bombadil = Address::generate(&e);
        let (native_asset, _) = testutils::create_native_asset(&e, &bombadil);
        let (price_feed, _) = testutils::create_mock_price_feed(&e);

        let fund_me = testutils::create_fund_me(&e);
        let fund_me_client = FundMeClient::new(&e, &fund_me);
        fund_me_client.initialize(&bombadil, &price_feed, &native_asset);

        let result = fund_me_client.try_get_funder(&0);
        assert_eq!(
            result.err(),
            Some(Ok(Error::from_contract_error(
                FundMeError::IndexOutOfRange as u32
            )))
        );
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #1302)")]
    fn test_get_funder_out_of_range_panics() {
        let e = Env::default();
        e.mock_all_auths();

        let bombadil = Address::generate(&e);
        let (native_asset, _) = testutils::create_native_asset(&e, &bombadil);
        let (price_feed, _) = testutils::create_mock_price_feed(&e);

        let fund_me = testutils::create_fund_me(&e);
        let fund_me_client = FundMeClient::new(&e, &fund_me);
        fund_me_client.initialize(&bombadil, &price_feed, &native_asset);

        fund_me_client.get_funder(&0);
    }
}
