use soroban_sdk::{contractevent, Address, Env};

#[contractevent]
pub struct InitializedEvent {
    pub admin: Address,
    pub token: Address,
    pub ledger: u32,
}

pub fn publish_initialized_event(env: &Env, admin: Address, token: Address, ledger: u32) {
    InitializedEvent {
        admin,
        token,
        ledger,
    }
    .publish(env);
}

#[contractevent]
pub struct SubscriptionCreatedEvent {
    #[topic]
    pub subscription_id: u64,
    #[topic]
    pub subscriber: Address,
    pub merchant: Address,
    pub amount: i128,
    pub interval: u32,
    pub ledger: u32,
}

pub fn publish_subscription_created_event(
    env: &Env,
    subscription_id: u64,
    subscriber: Address,
    merchant: Address,
    amount: i128,
    interval: u32,
    ledger: u32,
) {
    SubscriptionCreatedEvent {
        subscription_id,
        subscriber,
        merchant,
        amount,
        interval,
        ledger,
    }
    .publish(env);
}

#[contractevent]
pub struct SubscriptionProcessedEvent {
    #[topic]
    pub subscription_id: u64,
    #[topic]
    pub subscriber: Address,
    pub merchant: Address,
    pub amount: i128,
    pub token: Address,
    pub ledger: u32,
}

pub fn publish_subscription_processed_event(
    env: &Env,
    subscription_id: u64,
    subscriber: Address,
    merchant: Address,
    amount: i128,
    token: Address,
    ledger: u32,
) {
    SubscriptionProcessedEvent {
        subscription_id,
        subscriber,
        merchant,
        amount,
        token,
        ledger,
    }
    .publish(env);
}

#[contractevent]
pub struct SubscriptionCancelledEvent {
    #[topic]
    pub subscription_id: u64,
    #[topic]
    pub subscriber: Address,
    pub ledger: u32,
}

pub fn publish_subscription_cancelled_event(
    env: &Env,
    subscription_id: u64,
    subscriber: Address,
    ledger: u32,
) {
    SubscriptionCancelledEvent {
        subscription_id,
        subscriber,
        ledger,
    }
    .publish(env);
}
