use crate::price_feed::{create_mock_price_feed, MockPriceFeedClient};
use crate::token::create_native_asset;
use fund_me::{FundMeClient, FundMeContract};
use sep_40_oracle::Asset;
use soroban_sdk::testutils::{Address as _, Ledger, LedgerInfo};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};

pub const SCALAR_7: i128 = 1_000_0000;
pub const SCALAR_8: i128 = 1_0000_0000;

/// The decimals of the mocked price feed
pub const PRICE_DECIMALS: u32 = 8;

/// The starting price of the native asset, 2000.00000000
pub const INITIAL_PRICE: i128 = 2000 * SCALAR_8;

pub struct TestFixture<'a> {
    pub env: Env,
    pub bombadil: Address,
    pub fund_me: FundMeClient<'a>,
    pub price_feed: MockPriceFeedClient<'a>,
    pub native_asset: StellarAssetClient<'a>,
    pub native_token: TokenClient<'a>,
}

impl TestFixture<'_> {
    /// Create a new TestFixture for the FundMe contract
    ///
    /// Deploys the native asset and a mocked price feed priced at `INITIAL_PRICE`, then
    /// deploys and initializes the FundMe contract with `bombadil` as the owner.
    pub fn create<'a>() -> TestFixture<'a> {
        let e = Env::default();
        e.mock_all_auths();
        e.budget().reset_unlimited();

        let bombadil = Address::generate(&e);

        e.ledger().set(LedgerInfo {
            timestamp: 1441065600,
            protocol_version: 20,
            sequence_number: 100,
            network_id: Default::default(),
            base_reserve: 10,
            min_temp_entry_ttl: 10,
            min_persistent_entry_ttl: 10,
            max_entry_ttl: 3110400,
        });

        // deploy the native asset and price feed
        let (native_asset_id, native_asset_client, native_token_client) =
            create_native_asset(&e, &bombadil);
        let (price_feed_id, price_feed_client) = create_mock_price_feed(&e);
        price_feed_client.set_data(&PRICE_DECIMALS);
        price_feed_client.set_price(&Asset::Stellar(native_asset_id.clone()), &INITIAL_PRICE);

        // deploy and initialize fund me
        let fund_me_id = e.register_contract(None, FundMeContract {});
        let fund_me_client = FundMeClient::new(&e, &fund_me_id);
        fund_me_client.initialize(&bombadil, &price_feed_id, &native_asset_id);

        TestFixture {
            env: e,
            bombadil,
            fund_me: fund_me_client,
            price_feed: price_feed_client,
            native_asset: native_asset_client,
            native_token: native_token_client,
        }
    }

    /// Create `count` funders, each holding 100 units of the native asset
    pub fn create_funders(&self, count: usize) -> std::vec::Vec<Address> {
        let mut funders = std::vec::Vec::with_capacity(count);
        for _ in 0..count {
            let funder = Address::generate(&self.env);
            self.native_asset.mint(&funder, &(100 * SCALAR_7));
            funders.push(funder);
        }
        funders
    }

    /// Set the price of the native asset
    pub fn set_price(&self, price: i128) {
        self.price_feed.set_price(
            &Asset::Stellar(self.native_asset.address.clone()),
            &price,
        );
    }

    /********** Chain Helpers ***********/

    pub fn jump(&self, time: u64) {
        let blocks = time / 5;
        self.env.ledger().set(LedgerInfo {
            timestamp: self.env.ledger().timestamp().saturating_add(time),
            protocol_version: 20,
            sequence_number: self.env.ledger().sequence().saturating_add(blocks as u32),
            network_id: Default::default(),
            base_reserve: 10,
            min_temp_entry_ttl: 10,
            min_persistent_entry_ttl: 10,
            max_entry_ttl: 3110400,
        });
    }
}
