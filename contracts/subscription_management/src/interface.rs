use crate::errors::ContractError;
use crate::types::{ContractInfo, Subscription};
use soroban_sdk::{Address, Env};

pub trait SubscriptionManagementTrait {
    fn initialize(env: Env, admin: Address, token: Address) -> Result<(), ContractError>;
    fn get_admin(env: Env) -> Result<Address, ContractError>;
    fn get_token(env: Env) -> Result<Address, ContractError>;
    fn get_contract_info(env: Env) -> Result<ContractInfo, ContractError>;

    fn create_subscription(
        env: Env,
        subscriber: Address,
        merchant: Address,
        amount: i128,
        interval: u32,
    ) -> Result<u64, ContractError>;
    fn process_subscription(
        env: Env,
        caller: Address,
        subscriber: Address,
        subscription_id: u64,
    ) -> Result<(), ContractError>;
    fn cancel_subscription(
        env: Env,
        caller: Address,
        subscription_id: u64,
    ) -> Result<(), ContractError>;
    fn get_subscription(env: Env, subscriber: Address, subscription_id: u64)
        -> Option<Subscription>;
    fn get_next_payment_at(env: Env, subscriber: Address, subscription_id: u64) -> Option<u32>;
}
