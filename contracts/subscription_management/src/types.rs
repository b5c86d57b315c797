use soroban_sdk::{contracttype, Address};

pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 86_400;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = 120_960;
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 1_051_200;

#[contracttype]
pub enum DataKey {
    // --- instance() ---
    Admin,
    Token,
    ContractInfo,
    SubscriptionCount,
    // --- persistent() ---
    /// Subscription record keyed by `(subscriber, id)`.
    Subscription(Address, u64),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContractInfo {
    pub admin: Address,
    /// Token moved by `process_subscription`.
    pub token: Address,
    /// Ledger sequence at which `initialize` ran.
    pub initialized_at: u32,
}

/// A recurring payment agreement from a subscriber to a merchant.
///
/// Everything except `last_payment_at` and `status` is fixed at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Subscription {
    /// Unique subscription ID, allocated from a global counter starting at 1.
    pub id: u64,
    /// The paying party. Also part of the storage key.
    pub subscriber: Address,
    /// The receiving party.
    pub merchant: Address,
    /// Amount transferred per billing cycle (in token base units, always > 0).
    pub amount: i128,
    /// Minimum number of ledgers between two successful payments (always > 0).
    pub interval: u32,
    /// Ledger sequence of the last successful payment.
    /// Initialised to the creation ledger, so the first charge waits one full interval.
    pub last_payment_at: u32,
    /// Current lifecycle status.
    pub status: SubscriptionStatus,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum SubscriptionStatus {
    Active = 0,
    Cancelled = 1,
}
