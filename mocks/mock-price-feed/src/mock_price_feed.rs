use sep_40_oracle::{Asset, PriceData};
use soroban_sdk::{contract, contracterror, contractimpl, contracttype, panic_with_error, Env};

pub(crate) const LEDGER_THRESHOLD_SHARED: u32 = 172800; // ~ 10 days
pub(crate) const LEDGER_BUMP_SHARED: u32 = 241920; // ~ 14 days

/// The decimals reported before `set_data` is called
const DEFAULT_DECIMALS: u32 = 8;

#[derive(Clone)]
#[contracttype]
pub enum MockPriceFeedDataKey {
    // The number of decimals reported
    Decimals,
    // MOCK: Map of prices to return
    Prices(Asset),
    // MOCK: If the price feed should fail
    Broken,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockPriceFeedError {
    FeedUnavailable = 1,
}

/// ### Mock Price Feed
///
/// SEP-40 price feed that returns mocked asset prices.
///
/// ### Dev
/// For testing purposes only!
#[contract]
pub struct MockPriceFeed;

#[contractimpl]
impl MockPriceFeed {
    /// Sets the decimals the mocked prices are expressed in.
    pub fn set_data(e: Env, decimals: u32) {
        e.storage()
            .instance()
            .set::<MockPriceFeedDataKey, u32>(&MockPriceFeedDataKey::Decimals, &decimals);
        e.storage()
            .instance()
            .extend_ttl(LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
    }

    /// Sets the mocked price for an asset.
    ///
    /// Will always return with the latest ledger as the timestamp.
    pub fn set_price(e: Env, asset: Asset, price: i128) {
        Self::set_price_timestamp(e, asset, price, 0);
    }

    /// Sets the mocked price for an asset.
    ///
    /// Will return the given timestamp as the PriceData timestamp.
    pub fn set_price_timestamp(e: Env, asset: Asset, price: i128, timestamp: u64) {
        let key = MockPriceFeedDataKey::Prices(asset);
        e.storage()
            .temporary()
            .set::<MockPriceFeedDataKey, PriceData>(&key, &PriceData { price, timestamp });
        e.storage()
            .temporary()
            .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
    }

    /// Sets whether every price feed query should fail.
    pub fn set_broken(e: Env, broken: bool) {
        e.storage()
            .instance()
            .set::<MockPriceFeedDataKey, bool>(&MockPriceFeedDataKey::Broken, &broken);
    }

    pub fn decimals(e: Env) -> u32 {
        require_not_broken(&e);
        e.storage()
            .instance()
            .get::<MockPriceFeedDataKey, u32>(&MockPriceFeedDataKey::Decimals)
            .unwrap_or(DEFAULT_DECIMALS)
    }

    pub fn lastprice(e: Env, asset: Asset) -> Option<PriceData> {
        require_not_broken(&e);
        let key = MockPriceFeedDataKey::Prices(asset);
        let mut price_data = e
            .storage()
            .temporary()
            .get::<MockPriceFeedDataKey, PriceData>(&key)?;
        if price_data.timestamp == 0 {
            price_data.timestamp = e.ledger().timestamp();
        }
        Some(price_data)
    }
}

fn require_not_broken(e: &Env) {
    let broken = e
        .storage()
        .instance()
        .get::<MockPriceFeedDataKey, bool>(&MockPriceFeedDataKey::Broken)
        .unwrap_or(false);
    if broken {
        panic_with_error!(e, MockPriceFeedError::FeedUnavailable);
    }
}
