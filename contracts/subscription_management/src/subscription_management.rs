use crate::components::{core as core_component, subscription as subscription_component};
use crate::errors::ContractError;
use crate::interface::SubscriptionManagementTrait;
use crate::types::{ContractInfo, Subscription};
use soroban_sdk::{contract, contractimpl, Address, Env};

#[contract]
pub struct SubscriptionManagement;

#[contractimpl]
impl SubscriptionManagementTrait for SubscriptionManagement {
    fn initialize(env: Env, admin: Address, token: Address) -> Result<(), ContractError> {
        core_component::initialize(&env, &admin, &token)
    }

    fn get_admin(env: Env) -> Result<Address, ContractError> {
        core_component::get_admin(&env)
    }

    fn get_token(env: Env) -> Result<Address, ContractError> {
        core_component::get_token(&env)
    }

    fn get_contract_info(env: Env) -> Result<ContractInfo, ContractError> {
        core_component::get_contract_info(&env)
    }

    // ---- Subscriptions ----

    fn create_subscription(
        env: Env,
        subscriber: Address,
        merchant: Address,
        amount: i128,
        interval: u32,
    ) -> Result<u64, ContractError> {
        subscription_component::create_subscription(&env, &subscriber, &merchant, amount, interval)
    }

    fn process_subscription(
        env: Env,
        caller: Address,
        subscriber: Address,
        subscription_id: u64,
    ) -> Result<(), ContractError> {
        subscription_component::process_subscription(&env, &caller, &subscriber, subscription_id)
    }

    fn cancel_subscription(
        env: Env,
        caller: Address,
        subscription_id: u64,
    ) -> Result<(), ContractError> {
        subscription_component::cancel_subscription(&env, &caller, subscription_id)
    }

    fn get_subscription(
        env: Env,
        subscriber: Address,
        subscription_id: u64,
    ) -> Option<Subscription> {
        subscription_component::get_subscription(&env, &subscriber, subscription_id)
    }

    fn get_next_payment_at(env: Env, subscriber: Address, subscription_id: u64) -> Option<u32> {
        subscription_component::get_next_payment_at(&env, &subscriber, subscription_id)
    }
}
