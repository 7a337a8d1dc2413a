/// The minimum contribution, in whole units of the price feed's base asset
pub const MINIMUM_USD: i128 = 50;

/// The oldest a price can be, in seconds, before it is considered stale (24 hours)
pub const MAX_PRICE_AGE: u64 = 24 * 60 * 60;
