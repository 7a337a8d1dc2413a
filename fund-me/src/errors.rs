use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
/// Error codes for the fund me contract. Common errors are codes that match up with the built-in
/// contracts error reporting. Fund me specific errors start at 1300.
pub enum FundMeError {
    // Common Errors
    InternalError = 1,
    AlreadyInitializedError = 3,

    UnauthorizedError = 4,

    NegativeAmountError = 8,

    // Ledger Errors (start at 1300)
    InsufficientContribution = 1300,
    TransferFailed = 1301,
    IndexOutOfRange = 1302,

    // Oracle Errors
    PriceFeedUnavailable = 1303,
    InvalidPrice = 1304,
    StalePrice = 1305,
}
