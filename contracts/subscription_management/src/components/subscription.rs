use crate::components::core as core_component;
use crate::errors::ContractError;
use crate::events;
use crate::types::{
    DataKey, Subscription, SubscriptionStatus, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};
use soroban_sdk::{token, Address, Env};

// ── helpers ───────────────────────────────────────────────────────────────────

/// Allocate the next subscription ID.
///
/// IDs start at 1, increase by exactly one per call and are never reused.
/// This is the only code that reads or writes `DataKey::SubscriptionCount`.
fn next_subscription_id(env: &Env) -> Result<u64, ContractError> {
    let current: u64 = env
        .storage()
        .instance()
        .get(&DataKey::SubscriptionCount)
        .unwrap_or(0u64);
    let next = current
        .checked_add(1)
        .ok_or(ContractError::SubscriptionLimitReached)?;
    env.storage()
        .instance()
        .set(&DataKey::SubscriptionCount, &next);
    Ok(next)
}

fn subscription_key(subscriber: &Address, subscription_id: u64) -> DataKey {
    DataKey::Subscription(subscriber.clone(), subscription_id)
}

fn load_subscription(
    env: &Env,
    subscriber: &Address,
    subscription_id: u64,
) -> Result<Subscription, ContractError> {
    env.storage()
        .persistent()
        .get(&subscription_key(subscriber, subscription_id))
        .ok_or(ContractError::NotFound)
}

fn save_subscription(env: &Env, subscription: &Subscription) {
    let key = subscription_key(&subscription.subscriber, subscription.id);
    env.storage().persistent().set(&key, subscription);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

/// Whether a full interval has passed since the last payment at ledger `now`.
fn interval_elapsed(subscription: &Subscription, now: u32) -> bool {
    now.saturating_sub(subscription.last_payment_at) >= subscription.interval
}

// ── public functions (called from the contract impl) ──────────────────────────

/// Register a recurring payment from `subscriber` to `merchant`.
///
/// * `amount`   – amount per billing cycle (in token base units, must be > 0).
/// * `interval` – ledgers between charges (must be > 0).
///
/// No funds move here. The first charge becomes available `interval`
/// ledgers after creation.
pub fn create_subscription(
    env: &Env,
    subscriber: &Address,
    merchant: &Address,
    amount: i128,
    interval: u32,
) -> Result<u64, ContractError> {
    subscriber.require_auth();

    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    if interval == 0 {
        return Err(ContractError::InvalidInterval);
    }

    let subscription_id = next_subscription_id(env)?;
    let now = env.ledger().sequence();

    let subscription = Subscription {
        id: subscription_id,
        subscriber: subscriber.clone(),
        merchant: merchant.clone(),
        amount,
        interval,
        last_payment_at: now,
        status: SubscriptionStatus::Active,
    };
    save_subscription(env, &subscription);
    core_component::bump_instance(env);

    events::publish_subscription_created_event(
        env,
        subscription_id,
        subscriber.clone(),
        merchant.clone(),
        amount,
        interval,
        now,
    );

    Ok(subscription_id)
}

/// Charge one billing cycle.
///
/// The checks run before anything is written:
///   1. `caller` must be the subscriber.
///   2. The subscription must exist and be Active.
///   3. `now - last_payment_at >= interval`, with `now` taken from the ledger.
///   4. The subscriber must hold at least `amount` of the configured token.
///
/// `last_payment_at` is only advanced once the transfer has returned, so a
/// failed call leaves the record untouched. Overdue subscriptions are charged
/// once per call.
pub fn process_subscription(
    env: &Env,
    caller: &Address,
    subscriber: &Address,
    subscription_id: u64,
) -> Result<(), ContractError> {
    caller.require_auth();
    if caller != subscriber {
        return Err(ContractError::NotAuthorized);
    }

    let mut subscription = load_subscription(env, subscriber, subscription_id)?;

    if subscription.status == SubscriptionStatus::Cancelled {
        return Err(ContractError::SubscriptionCancelled);
    }

    let now = env.ledger().sequence();
    if !interval_elapsed(&subscription, now) {
        return Err(ContractError::IntervalNotElapsed);
    }

    let token_address = core_component::get_token(env)?;
    let token_client = token::TokenClient::new(env, &token_address);
    if token_client.balance(subscriber) < subscription.amount {
        return Err(ContractError::InsufficientFunds);
    }

    token_client.transfer(subscriber, &subscription.merchant, &subscription.amount);

    subscription.last_payment_at = now;
    save_subscription(env, &subscription);
    core_component::bump_instance(env);

    events::publish_subscription_processed_event(
        env,
        subscription_id,
        subscription.subscriber,
        subscription.merchant,
        subscription.amount,
        token_address,
        now,
    );

    Ok(())
}

/// Cancel a subscription owned by `caller`.
///
/// Cancelling an already cancelled subscription is a no-op.
pub fn cancel_subscription(
    env: &Env,
    caller: &Address,
    subscription_id: u64,
) -> Result<(), ContractError> {
    caller.require_auth();

    let mut subscription = load_subscription(env, caller, subscription_id)?;
    if subscription.status == SubscriptionStatus::Cancelled {
        return Ok(());
    }

    subscription.status = SubscriptionStatus::Cancelled;
    save_subscription(env, &subscription);
    core_component::bump_instance(env);

    events::publish_subscription_cancelled_event(
        env,
        subscription_id,
        caller.clone(),
        env.ledger().sequence(),
    );

    Ok(())
}

pub fn get_subscription(
    env: &Env,
    subscriber: &Address,
    subscription_id: u64,
) -> Option<Subscription> {
    env.storage()
        .persistent()
        .get(&subscription_key(subscriber, subscription_id))
}

/// Earliest ledger at which `process_subscription` can succeed.
/// `None` for unknown or cancelled subscriptions.
pub fn get_next_payment_at(env: &Env, subscriber: &Address, subscription_id: u64) -> Option<u32> {
    let subscription = get_subscription(env, subscriber, subscription_id)?;
    match subscription.status {
        SubscriptionStatus::Active => Some(
            subscription
                .last_payment_at
                .saturating_add(subscription.interval),
        ),
        SubscriptionStatus::Cancelled => None,
    }
}
