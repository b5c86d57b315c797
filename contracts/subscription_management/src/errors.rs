use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotAuthorized = 1,
    AlreadyInitialized = 2,
    NotInitialized = 3,
    InvalidAmount = 4,
    InvalidInterval = 5,
    NotFound = 6,
    SubscriptionCancelled = 7,
    IntervalNotElapsed = 8,
    InsufficientFunds = 9,
    /// The `u64` id counter cannot be advanced any further.
    SubscriptionLimitReached = 10,
}
