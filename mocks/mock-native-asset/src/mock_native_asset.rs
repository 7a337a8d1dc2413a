use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, Address, Env,
};

pub(crate) const LEDGER_THRESHOLD_USER: u32 = 518400; // ~ 30 days
pub(crate) const LEDGER_BUMP_USER: u32 = 535670; // ~ 31 days

/// The decimals of the native asset
const DECIMALS: u32 = 7;

#[derive(Clone)]
#[contracttype]
pub enum MockNativeAssetDataKey {
    // The balance of an address
    Balance(Address),
    // MOCK: If transfers to an address should fail
    Rejecting(Address),
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockNativeAssetError {
    NegativeAmountError = 8,
    BalanceError = 10,
    RecipientRejected = 11,
}

/// ### Mock Native Asset
///
/// The subset of a SEP-41 token used to hold contributions, with recipients that can be
/// set to reject incoming transfers.
///
/// ### Dev
/// For testing purposes only!
#[contract]
pub struct MockNativeAsset;

#[contractimpl]
impl MockNativeAsset {
    /// Mints `amount` to `to`. No authorization is required.
    pub fn mint(e: Env, to: Address, amount: i128) {
        require_nonnegative(&e, amount);
        let balance = read_balance(&e, &to);
        write_balance(&e, &to, balance + amount);
    }

    /// Sets whether transfers to `recipient` should fail.
    pub fn set_rejecting(e: Env, recipient: Address, rejecting: bool) {
        e.storage().persistent().set::<MockNativeAssetDataKey, bool>(
            &MockNativeAssetDataKey::Rejecting(recipient),
            &rejecting,
        );
    }

    pub fn decimals(_e: Env) -> u32 {
        DECIMALS
    }

    pub fn balance(e: Env, id: Address) -> i128 {
        read_balance(&e, &id)
    }

    pub fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        require_nonnegative(&e, amount);

        let rejecting = e
            .storage()
            .persistent()
            .get::<MockNativeAssetDataKey, bool>(&MockNativeAssetDataKey::Rejecting(to.clone()))
            .unwrap_or(false);
        if rejecting {
            panic_with_error!(&e, MockNativeAssetError::RecipientRejected);
        }

        let from_balance = read_balance(&e, &from);
        if from_balance < amount {
            panic_with_error!(&e, MockNativeAssetError::BalanceError);
        }
        write_balance(&e, &from, from_balance - amount);
        let to_balance = read_balance(&e, &to);
        write_balance(&e, &to, to_balance + amount);
    }
}

fn require_nonnegative(e: &Env, amount: i128) {
    if amount.is_negative() {
        panic_with_error!(e, MockNativeAssetError::NegativeAmountError);
    }
}

fn read_balance(e: &Env, id: &Address) -> i128 {
    e.storage()
        .persistent()
        .get::<MockNativeAssetDataKey, i128>(&MockNativeAssetDataKey::Balance(id.clone()))
        .unwrap_or(0)
}

fn write_balance(e: &Env, id: &Address, amount: i128) {
    let key = MockNativeAssetDataKey::Balance(id.clone());
    e.storage()
        .persistent()
        .set::<MockNativeAssetDataKey, i128>(&key, &amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
}
