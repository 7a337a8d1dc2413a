use soroban_sdk::{
    contracttype, unwrap::UnwrapOptimized, vec, Address, Env, IntoVal, Symbol, TryFromVal, Val,
    Vec,
};

pub(crate) const LEDGER_THRESHOLD_SHARED: u32 = 172800; // ~ 10 days
pub(crate) const LEDGER_BUMP_SHARED: u32 = 241920; // ~ 14 days

pub(crate) const LEDGER_THRESHOLD_USER: u32 = 518400; // ~ 30 days
pub(crate) const LEDGER_BUMP_USER: u32 = 535670; // ~ 31 days

/********** Storage Key Types **********/

const OWNER_KEY: &str = "Owner";
const PRICE_FEED_KEY: &str = "PriceFeed";
const NATIVE_ASSET_KEY: &str = "Asset";
const ASSET_DECIMALS_KEY: &str = "AssetDec";
const FUNDER_COUNT_KEY: &str = "FunderCnt";

#[derive(Clone)]
#[contracttype]
pub enum FundMeDataKey {
    // The cumulative amount a funder has contributed since the last withdrawal
    Funded(Address),
    // The funder of the contribution at an index, one entry per contribution
    Funder(u32),
}

/********** Storage **********/

/// Bump the instance rent for the contract
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

/// Fetch an entry in persistent storage that has a default value if it doesn't exist
fn get_persistent_default<K: IntoVal<Env, Val>, V: TryFromVal<Env, Val>>(
    e: &Env,
    key: &K,
    default: V,
    bump_threshold: u32,
    bump_amount: u32,
) -> V {
    if let Some(result) = e.storage().persistent().get::<K, V>(key) {
        e.storage()
            .persistent()
            .extend_ttl(key, bump_threshold, bump_amount);
        result
    } else {
        default
    }
}

/********** Owner **********/

/// Fetch the owner Address
///
/// ### Panics
/// If the owner does not exist
pub fn get_owner(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&Symbol::new(e, OWNER_KEY))
        .unwrap_optimized()
}

/// Set the owner
///
/// ### Arguments
/// * `owner` - The Address of the owner
pub fn set_owner(e: &Env, owner: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, OWNER_KEY), owner);
}

/// Checks if an owner is set
pub fn has_owner(e: &Env) -> bool {
    e.storage().instance().has(&Symbol::new(e, OWNER_KEY))
}

/********** External Contracts **********/

/// Fetch the price feed Address
pub fn get_price_feed(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&Symbol::new(e, PRICE_FEED_KEY))
        .unwrap_optimized()
}

/// Set the price feed
///
/// ### Arguments
/// * `price_feed` - The Address of the SEP-40 price feed
pub fn set_price_feed(e: &Env, price_feed: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, PRICE_FEED_KEY), price_feed);
}

/// Fetch the native asset Address
pub fn get_native_asset(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&Symbol::new(e, NATIVE_ASSET_KEY))
        .unwrap_optimized()
}

/// Set the native asset
///
/// ### Arguments
/// * `native_asset` - The Address of the native asset token contract
pub fn set_native_asset(e: &Env, native_asset: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, NATIVE_ASSET_KEY), native_asset);
}

/// Fetch the decimals of the native asset
pub fn get_asset_decimals(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&Symbol::new(e, ASSET_DECIMALS_KEY))
        .unwrap_optimized()
}

/// Set the decimals of the native asset
///
/// ### Arguments
/// * `decimals` - The decimals reported by the native asset
pub fn set_asset_decimals(e: &Env, decimals: &u32) {
    e.storage()
        .instance()
        .set::<Symbol, u32>(&Symbol::new(e, ASSET_DECIMALS_KEY), decimals);
}

/********** Contributions **********/

/// Fetch the amount funded by an address, or zero if it has not funded since the last withdrawal
///
/// ### Arguments
/// * `funder` - The address of the funder
pub fn get_amount_funded(e: &Env, funder: &Address) -> i128 {
    let key = FundMeDataKey::Funded(funder.clone());
    get_persistent_default(e, &key, 0i128, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER)
}

/// Set the amount funded by an address
///
/// ### Arguments
/// * `funder` - The address of the funder
/// * `amount` - The cumulative amount funded
pub fn set_amount_funded(e: &Env, funder: &Address, amount: &i128) {
    let key = FundMeDataKey::Funded(funder.clone());
    e.storage()
        .persistent()
        .set::<FundMeDataKey, i128>(&key, amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
}

/// Reset the amount funded by an address to zero
///
/// ### Arguments
/// * `funder` - The address of the funder
pub fn del_amount_funded(e: &Env, funder: &Address) {
    let key = FundMeDataKey::Funded(funder.clone());
    e.storage().persistent().remove(&key);
}

/********** Funders **********/

/// Fetch the number of entries in the list of funders
pub fn get_funder_count(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&Symbol::new(e, FUNDER_COUNT_KEY))
        .unwrap_or(0)
}

/// Set the number of entries in the list of funders
///
/// ### Arguments
/// * `count` - The number of entries
pub fn set_funder_count(e: &Env, count: &u32) {
    e.storage()
        .instance()
        .set::<Symbol, u32>(&Symbol::new(e, FUNDER_COUNT_KEY), count);
}

/// Fetch the funder at `index`, or None if the index is out of range
///
/// ### Arguments
/// * `index` - The position of the funder in the list
pub fn get_funder(e: &Env, index: u32) -> Option<Address> {
    if index >= get_funder_count(e) {
        return None;
    }
    let key = FundMeDataKey::Funder(index);
    let result = e.storage().persistent().get::<FundMeDataKey, Address>(&key);
    if result.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
    }
    result
}

/// Fetch the full list of funders, in contribution order
pub fn get_funders(e: &Env) -> Vec<Address> {
    let mut funders = vec![e];
    for index in 0..get_funder_count(e) {
        let key = FundMeDataKey::Funder(index);
        if let Some(funder) = e.storage().persistent().get::<FundMeDataKey, Address>(&key) {
            funders.push_back(funder);
        }
    }
    funders
}

/// Append a funder to the end of the list of funders
///
/// ### Arguments
/// * `funder` - The address of the funder
pub fn push_funder(e: &Env, funder: &Address) {
    let index = get_funder_count(e);
    let key = FundMeDataKey::Funder(index);
    e.storage()
        .persistent()
        .set::<FundMeDataKey, Address>(&key, funder);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
    set_funder_count(e, &(index + 1));
}

/// Remove the funder entry at `index`. Does not change the number of entries.
///
/// ### Arguments
/// * `index` - The position of the funder in the list
pub fn del_funder(e: &Env, index: u32) {
    let key = FundMeDataKey::Funder(index);
    e.storage().persistent().remove(&key);
}
